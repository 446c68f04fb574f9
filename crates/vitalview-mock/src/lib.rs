//! # vitalview-mock
//!
//! Hardcoded, fictional clinical data for the VitalView dashboard.
//!
//! Nine patients with five lab visits each, plus precomputed biomarker trend
//! series. No real patient identifiers are present and nothing is fetched
//! from outside the process.
//!
//! ```rust,ignore
//! use vitalview_core::PatientDirectory;
//! use vitalview_mock::MockDataSource;
//!
//! let directory = PatientDirectory::load(&MockDataSource)?;
//! ```

pub mod labs;
pub mod patients;
pub mod trends;

use tracing::debug;

use vitalview_contracts::{
    lab::{LabResult, TrendData},
    patient::Patient,
};
use vitalview_core::ClinicalDataSource;

/// Serves the static mock data set.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDataSource;

impl ClinicalDataSource for MockDataSource {
    fn patients(&self) -> Vec<Patient> {
        patients::patients()
    }

    fn lab_results(&self) -> Vec<LabResult> {
        let rows = labs::lab_results();
        debug!(rows = rows.len(), "mock lab results served");
        rows
    }

    fn trend_keys(&self) -> Vec<(String, String)> {
        trends::trend_keys()
    }

    fn trend_series(&self) -> Vec<(String, TrendData)> {
        trends::trend_series()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
