//! Patient identity, demographics, and clinical alert types.
//!
//! Patients are created once from static data and never mutated. The
//! dashboard only ever *selects* a patient; it never edits one.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier for a patient record.
///
/// Example: PatientId("P001")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PatientId(pub String);

impl PatientId {
    /// Construct an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Contact and identity details shown in the clinician header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    /// `YYYY-MM-DD`.
    pub date_of_birth: String,
    /// Medical record number, e.g. "MRN-2024-001".
    pub mrn: String,
    pub phone: String,
    pub email: String,
    /// Avatar reference (URL or asset key). Never fetched by the core.
    pub photo: String,
}

/// How urgently an alert should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertPriority {
    High,
    Medium,
    Low,
}

/// A clinical alert attached to a patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub priority: AlertPriority,
    /// Category label, e.g. "clinical".
    pub kind: String,
    pub message: String,
    /// `YYYY-MM-DD` the alert was raised.
    pub date: String,
    /// Acknowledged alerts are hidden from the header.
    pub acknowledged: bool,
}

/// A patient as known to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    /// Display name. Lab results reference patients by this exact string.
    pub name: String,
    pub age: u32,
    pub gender: String,
    /// Free-text primary condition, e.g. "Diabetes Type 2".
    pub condition: String,
    pub demographics: Demographics,
    #[serde(default)]
    pub alerts: Vec<Alert>,
}

impl Patient {
    /// Unacknowledged alerts of the given priority, in declaration order.
    pub fn active_alerts(&self, priority: AlertPriority) -> impl Iterator<Item = &Alert> {
        self.alerts
            .iter()
            .filter(move |a| a.priority == priority && !a.acknowledged)
    }

    /// Initials used as an avatar fallback ("Sarah Mitchell" → "SM").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}
