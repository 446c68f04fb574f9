//! Audience view modes and their static configuration table.
//!
//! The dashboard renders for one of two audiences. Every view-dependent
//! decision downstream reads a `ViewConfig` resolved from this table; the
//! table itself never changes at runtime, so callers may hold the returned
//! `&'static` reference indefinitely.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::VitalError;

/// Who the dashboard is being rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Patient,
    Clinician,
}

/// The two audience-specific presentation modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    PatientView,
    ClinicianView,
}

impl ViewMode {
    /// The kebab-case token, e.g. "patient-view".
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::PatientView => "patient-view",
            ViewMode::ClinicianView => "clinician-view",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::PatientView => ViewMode::ClinicianView,
            ViewMode::ClinicianView => ViewMode::PatientView,
        }
    }
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::ClinicianView
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = VitalError;

    /// Accepts "patient-view" / "clinician-view" and the short forms
    /// "patient" / "clinician".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "patient-view" | "patient" => Ok(ViewMode::PatientView),
            "clinician-view" | "clinician" => Ok(ViewMode::ClinicianView),
            other => Err(VitalError::UnknownViewMode {
                value: other.to_string(),
            }),
        }
    }
}

/// Which UI behaviours are enabled for a view mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewConfig {
    pub mode: ViewMode,
    pub role: UserRole,
    /// Reference ranges, MRN, date of birth, reference lines on charts.
    pub show_technical_details: bool,
    pub show_all_patients: bool,
    /// Plain-language labels ("Your Result" instead of "Value").
    pub simplified_language: bool,
    /// Glossary definitions next to biomarkers.
    pub show_educational_content: bool,
}

static PATIENT_VIEW: ViewConfig = ViewConfig {
    mode: ViewMode::PatientView,
    role: UserRole::Patient,
    show_technical_details: false,
    show_all_patients: false,
    simplified_language: true,
    show_educational_content: true,
};

static CLINICIAN_VIEW: ViewConfig = ViewConfig {
    mode: ViewMode::ClinicianView,
    role: UserRole::Clinician,
    show_technical_details: true,
    show_all_patients: true,
    simplified_language: false,
    show_educational_content: false,
};

/// Resolve the static configuration for `mode`.
///
/// Total over `ViewMode`; repeated calls return the same reference.
pub fn resolve(mode: ViewMode) -> &'static ViewConfig {
    match mode {
        ViewMode::PatientView => &PATIENT_VIEW,
        ViewMode::ClinicianView => &CLINICIAN_VIEW,
    }
}
