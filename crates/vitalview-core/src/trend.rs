//! Biomarker trend projections.
//!
//! A patient's trend is found through the directory's name → key map, not
//! the patient id, so a patient missing from that map has no trend even when
//! lab results exist for them.
//!
//! The direction glyph always reflects the stored `overall_trend` label.
//! `computed_trend` derives a direction from the points themselves, and
//! `assess` reports whether the two agree.

use serde::Serialize;
use tracing::warn;

use vitalview_contracts::lab::{LabStatus, ReferenceRange, TrendData, TrendDirection};

use crate::directory::PatientDirectory;

/// A fitted change smaller than this fraction of the series mean is stable.
pub const STABLE_BAND: f64 = 0.03;

/// The trend series for `patient_name`, if one is mapped.
pub fn lookup<'a>(directory: &'a PatientDirectory, patient_name: &str) -> Option<&'a TrendData> {
    directory
        .trend_key(patient_name)
        .and_then(|key| directory.trend(key))
}

// ── Colour and glyph ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendColor {
    Critical,
    Warning,
    Normal,
    Default,
}

impl TrendColor {
    pub fn as_str(self) -> &'static str {
        match self {
            TrendColor::Critical => "critical",
            TrendColor::Warning => "warning",
            TrendColor::Normal => "normal",
            TrendColor::Default => "default",
        }
    }
}

/// Line colour for a series whose latest point has `status`.
pub fn color_class(status: LabStatus) -> TrendColor {
    match status {
        LabStatus::Critical | LabStatus::High | LabStatus::Low => TrendColor::Critical,
        LabStatus::Warning | LabStatus::Elevated => TrendColor::Warning,
        LabStatus::Normal => TrendColor::Normal,
        LabStatus::Pending => TrendColor::Default,
    }
}

/// Colour of the series' latest point; `Default` for an empty series.
pub fn latest_color(trend: &TrendData) -> TrendColor {
    trend
        .latest()
        .map(|p| color_class(p.status))
        .unwrap_or(TrendColor::Default)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Glyph {
    Up,
    Down,
    Flat,
}

impl Glyph {
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::Up => "↗",
            Glyph::Down => "↘",
            Glyph::Flat => "→",
        }
    }
}

pub fn direction_glyph(direction: TrendDirection) -> Glyph {
    match direction {
        TrendDirection::Increasing => Glyph::Up,
        TrendDirection::Decreasing => Glyph::Down,
        TrendDirection::Stable => Glyph::Flat,
    }
}

// ── Computed direction ────────────────────────────────────────────────────────

/// Least-squares slope of the values against their position in the series.
fn slope(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let x_mean = (n - 1.0) / 2.0;
    let y_mean = values.iter().sum::<f64>() / n;

    let (num, den) = values
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(num, den), (i, y)| {
            let dx = i as f64 - x_mean;
            (num + dx * (y - y_mean), den + dx * dx)
        });

    if den == 0.0 {
        0.0
    } else {
        num / den
    }
}

/// Direction implied by the data points.
///
/// See [`direction_of`].
pub fn computed_trend(trend: &TrendData) -> TrendDirection {
    let values: Vec<f64> = trend.data_points.iter().map(|p| p.value).collect();
    direction_of(&values)
}

/// Direction of an ordered run of values.
///
/// The fitted change across the whole run is compared with the run's mean;
/// anything within [`STABLE_BAND`] of it is stable. Fewer than two values
/// are stable.
pub fn direction_of(values: &[f64]) -> TrendDirection {
    if values.len() < 2 {
        return TrendDirection::Stable;
    }

    let change = slope(values) * (values.len() - 1) as f64;
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let relative = if mean == 0.0 { change } else { change / mean.abs() };

    if relative.abs() < STABLE_BAND {
        TrendDirection::Stable
    } else if relative > 0.0 {
        TrendDirection::Increasing
    } else {
        TrendDirection::Decreasing
    }
}

/// Stored vs computed direction for one series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendAssessment {
    pub stored: TrendDirection,
    pub computed: TrendDirection,
    pub agrees: bool,
}

pub fn assess(trend: &TrendData) -> TrendAssessment {
    let computed = computed_trend(trend);
    let assessment = TrendAssessment {
        stored: trend.overall_trend,
        computed,
        agrees: computed == trend.overall_trend,
    };
    if !assessment.agrees {
        warn!(
            biomarker = %trend.biomarker_id,
            patient_id = %trend.patient_id,
            stored = %assessment.stored,
            computed = %assessment.computed,
            "stored trend label disagrees with data"
        );
    }
    assessment
}

// ── Labels ────────────────────────────────────────────────────────────────────

/// Human-readable name for a biomarker id ("systolic_bp" → "Systolic Blood Pressure").
pub fn biomarker_name(id: &str) -> String {
    match id {
        "hba1c" => "HbA1c".to_string(),
        "systolic_bp" => "Systolic Blood Pressure".to_string(),
        "total_cholesterol" => "Total Cholesterol".to_string(),
        "glucose" => "Glucose".to_string(),
        other => other.to_uppercase(),
    }
}

/// The band drawn as reference lines: the first point's range.
pub fn reference_band(trend: &TrendData) -> Option<&ReferenceRange> {
    trend
        .data_points
        .first()
        .and_then(|p| p.reference_range.as_ref())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
