//! The validated, read-only clinical data set behind a dashboard.
//!
//! Lab results reference patients by display name. A typo or a rename would
//! silently orphan a patient's whole lab history, so `load` checks the
//! linkage up front and refuses the data set instead of dropping rows.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use vitalview_contracts::{
    date::parse_date,
    error::{VitalError, VitalResult},
    lab::{LabResult, TrendData},
    patient::{Patient, PatientId},
};

use crate::traits::ClinicalDataSource;

/// Patients, lab results and trend series, checked for referential integrity.
#[derive(Debug, Clone)]
pub struct PatientDirectory {
    patients: Vec<Patient>,
    lab_results: Vec<LabResult>,
    trend_keys: HashMap<String, String>,
    trends: HashMap<String, TrendData>,
}

impl PatientDirectory {
    /// Pull every record from `source` and validate it.
    ///
    /// # Errors
    ///
    /// - `EmptyDirectory` if there are no patients.
    /// - `AmbiguousPatientName` if two patients share a name.
    /// - `OrphanedLabResult` if a lab result names no known patient.
    /// - `InvalidDate` if a lab result or trend point date is not `YYYY-MM-DD`.
    pub fn load(source: &dyn ClinicalDataSource) -> VitalResult<Self> {
        Self::from_parts(
            source.patients(),
            source.lab_results(),
            source.trend_keys(),
            source.trend_series(),
        )
    }

    /// Validate already-materialised records.
    pub fn from_parts(
        patients: Vec<Patient>,
        lab_results: Vec<LabResult>,
        trend_keys: Vec<(String, String)>,
        trend_series: Vec<(String, TrendData)>,
    ) -> VitalResult<Self> {
        if patients.is_empty() {
            return Err(VitalError::EmptyDirectory);
        }

        let mut names = HashSet::with_capacity(patients.len());
        for patient in &patients {
            if !names.insert(patient.name.as_str()) {
                return Err(VitalError::AmbiguousPatientName {
                    name: patient.name.clone(),
                });
            }
        }

        for result in &lab_results {
            if !names.contains(result.patient.as_str()) {
                return Err(VitalError::OrphanedLabResult {
                    record_id: result.id.clone(),
                    patient: result.patient.clone(),
                });
            }
            parse_date(&result.id, &result.date)?;
        }

        for (key, series) in &trend_series {
            for point in &series.data_points {
                parse_date(key, &point.date)?;
            }
        }

        let trend_keys: HashMap<String, String> = trend_keys.into_iter().collect();
        let trends: HashMap<String, TrendData> = trend_series.into_iter().collect();

        for (name, key) in &trend_keys {
            if !names.contains(name.as_str()) {
                // Not fatal: the mapping is advisory and lookups by the real
                // name simply miss.
                debug!(name = %name, key = %key, "trend key maps a name with no patient");
            }
        }

        info!(
            patients = patients.len(),
            lab_results = lab_results.len(),
            trends = trends.len(),
            "patient directory loaded"
        );

        Ok(Self {
            patients,
            lab_results,
            trend_keys,
            trends,
        })
    }

    /// All patients in picker order. Never empty.
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// The default selection.
    pub fn first(&self) -> &Patient {
        // `from_parts` rejects an empty patient list.
        &self.patients[0]
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id.as_str() == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.name == name)
    }

    /// Position of `id` in picker order.
    pub fn position_of(&self, id: &PatientId) -> Option<usize> {
        self.patients.iter().position(|p| &p.id == id)
    }

    /// Every lab result row, for all patients.
    pub fn lab_results(&self) -> &[LabResult] {
        &self.lab_results
    }

    /// Lab results belonging to `patient_name`, in source order.
    pub fn lab_results_for<'a>(&'a self, patient_name: &'a str) -> impl Iterator<Item = &'a LabResult> {
        self.lab_results.iter().filter(move |r| r.patient == patient_name)
    }

    /// Trend series key for `patient_name`, if mapped.
    pub fn trend_key(&self, patient_name: &str) -> Option<&str> {
        self.trend_keys.get(patient_name).map(String::as_str)
    }

    /// Trend series stored under `key`.
    pub fn trend(&self, key: &str) -> Option<&TrendData> {
        self.trends.get(key)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
