//! Status → badge classification shared by every widget that shows a status.

use serde::Serialize;

use vitalview_contracts::lab::LabStatus;

/// Visual treatment for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Critical,
    Warning,
    Normal,
    Secondary,
    Primary,
}

impl BadgeVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeVariant::Critical => "critical",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Normal => "normal",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Primary => "primary",
        }
    }
}

/// Classify a free-form status token, ignoring case.
///
/// Unrecognised tokens fall back to `Primary` (informational), never an error.
pub fn classify(token: &str) -> BadgeVariant {
    match token.to_lowercase().as_str() {
        "critical" | "dangerous" | "high" | "low" => BadgeVariant::Critical,
        "warning" | "abnormal" | "elevated" | "borderline" => BadgeVariant::Warning,
        "normal" | "good" | "success" | "within_range" => BadgeVariant::Normal,
        "pending" | "unknown" | "processing" => BadgeVariant::Secondary,
        _ => BadgeVariant::Primary,
    }
}

/// Badge for a typed lab status.
pub fn for_status(status: LabStatus) -> BadgeVariant {
    classify(status.as_str())
}
