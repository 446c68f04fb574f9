//! Lab result and biomarker trend types.
//!
//! `LabResult` rows are linked to patients by display name, not by id. The
//! directory validates that linkage when the data set is loaded.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::VitalError;

/// Clinical status attached to a lab value or trend point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabStatus {
    Normal,
    High,
    Low,
    Elevated,
    Critical,
    Warning,
    Pending,
}

impl LabStatus {
    pub const ALL: [LabStatus; 7] = [
        LabStatus::Critical,
        LabStatus::High,
        LabStatus::Elevated,
        LabStatus::Warning,
        LabStatus::Low,
        LabStatus::Normal,
        LabStatus::Pending,
    ];

    /// The lowercase wire token, e.g. "elevated".
    pub fn as_str(self) -> &'static str {
        match self {
            LabStatus::Normal => "normal",
            LabStatus::High => "high",
            LabStatus::Low => "low",
            LabStatus::Elevated => "elevated",
            LabStatus::Critical => "critical",
            LabStatus::Warning => "warning",
            LabStatus::Pending => "pending",
        }
    }

    /// Severity used when sorting by status. Higher is more severe.
    ///
    /// Tokens outside this enum rank 0; see [`severity_rank`].
    pub fn severity(self) -> u8 {
        match self {
            LabStatus::Critical => 7,
            LabStatus::High => 6,
            LabStatus::Elevated => 5,
            LabStatus::Warning => 4,
            LabStatus::Low => 3,
            LabStatus::Normal => 2,
            LabStatus::Pending => 1,
        }
    }
}

/// Severity of a raw status token; unknown tokens rank 0.
pub fn severity_rank(token: &str) -> u8 {
    token.parse::<LabStatus>().map(LabStatus::severity).unwrap_or(0)
}

impl fmt::Display for LabStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for LabStatus {
    type Err = VitalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LabStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| VitalError::UnknownStatus {
                value: s.to_string(),
            })
    }
}

/// A measured value: either a number or a free-form reading like "128/82".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabValue {
    Numeric(f64),
    Text(String),
}

impl LabValue {
    /// The value as a number, if it is one or parses as one.
    ///
    /// "210" → Some(210.0); "128/82" → None.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            LabValue::Numeric(n) => Some(*n),
            LabValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }
}

impl fmt::Display for LabValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabValue::Numeric(n) => f.pad(&n.to_string()),
            LabValue::Text(s) => f.pad(s),
        }
    }
}

impl From<f64> for LabValue {
    fn from(n: f64) -> Self {
        LabValue::Numeric(n)
    }
}

impl From<&str> for LabValue {
    fn from(s: &str) -> Self {
        LabValue::Text(s.to_string())
    }
}

/// One row of the lab results table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabResult {
    /// Source record id. Not guaranteed unique across patients.
    pub id: String,
    /// Must equal exactly one `Patient::name`.
    pub patient: String,
    pub test_name: String,
    pub value: LabValue,
    pub unit: String,
    pub status: LabStatus,
    /// Human-readable band, e.g. "70-99 mg/dL" or "<200 mg/dL".
    pub reference_range: String,
    /// `YYYY-MM-DD`, no timezone.
    pub date: String,
}

/// Numeric reference band attached to trend points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub unit: String,
}

/// A single historical measurement on a trend chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendDataPoint {
    pub date: String,
    pub value: f64,
    pub status: LabStatus,
    pub reference_range: Option<ReferenceRange>,
}

/// Direction label for a biomarker series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl TrendDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
            TrendDirection::Stable => "stable",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A precomputed historical series for one biomarker of one patient.
///
/// `overall_trend` is asserted by whoever authored the data; it is not
/// derived from `data_points`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendData {
    pub biomarker_id: String,
    pub patient_id: String,
    /// Insertion order, assumed chronological.
    pub data_points: Vec<TrendDataPoint>,
    pub overall_trend: TrendDirection,
    pub start_date: String,
    pub end_date: String,
}

impl TrendData {
    /// The most recent point, if the series is non-empty.
    pub fn latest(&self) -> Option<&TrendDataPoint> {
        self.data_points.last()
    }
}
