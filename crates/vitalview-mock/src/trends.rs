//! Historical biomarker series for the trend panel.
//!
//! Each series carries an author-asserted `overall_trend`. Most agree with
//! their points; Robert's and Samantha's are noisy enough that a fitted
//! direction may not, and Samantha's stated end date runs past her last
//! point.

use vitalview_contracts::lab::{
    LabStatus::{self, *},
    ReferenceRange, TrendData, TrendDataPoint, TrendDirection,
};

/// Patient display name → series key.
///
/// Alberto's entry carries a truncated surname, so his series is never
/// found by name.
pub const TREND_KEYS: [(&str, &str); 9] = [
    ("Sarah Mitchell", "sarah"),
    ("David McDonald", "david"),
    ("Maria Rodriguez", "maria"),
    ("James Chen", "james"),
    ("Linda Johnson", "linda"),
    ("Samantha Reed", "samantha"),
    ("John Jimmerson", "john"),
    ("Alberto Dantesanderson", "alberto"),
    ("Robert Dwayne", "robert"),
];

pub fn trend_keys() -> Vec<(String, String)> {
    TREND_KEYS
        .iter()
        .map(|(name, key)| (name.to_string(), key.to_string()))
        .collect()
}

/// Series key → series.
pub fn trend_series() -> Vec<(String, TrendData)> {
    vec![
        ("sarah".to_string(), sarah()),
        ("david".to_string(), david()),
        ("maria".to_string(), maria()),
        ("james".to_string(), james()),
        ("linda".to_string(), linda()),
        ("alberto".to_string(), alberto()),
        ("robert".to_string(), robert()),
        ("samantha".to_string(), samantha()),
        ("john".to_string(), john()),
    ]
}

fn band(min: f64, max: f64, unit: &str) -> ReferenceRange {
    ReferenceRange {
        min: Some(min),
        max: Some(max),
        unit: unit.to_string(),
    }
}

fn series(
    biomarker_id: &str,
    patient_id: &str,
    range: ReferenceRange,
    overall_trend: TrendDirection,
    (start_date, end_date): (&str, &str),
    points: &[(&str, f64, LabStatus)],
) -> TrendData {
    TrendData {
        biomarker_id: biomarker_id.to_string(),
        patient_id: patient_id.to_string(),
        data_points: points
            .iter()
            .map(|&(date, value, status)| TrendDataPoint {
                date: date.to_string(),
                value,
                status,
                reference_range: Some(range.clone()),
            })
            .collect(),
        overall_trend,
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
    }
}

fn sarah() -> TrendData {
    series(
        "hba1c",
        "patient-001",
        band(4.0, 5.6, "%"),
        TrendDirection::Increasing,
        ("2023-07-20", "2024-01-15"),
        &[
            ("2023-07-20", 6.9, Warning),
            ("2023-08-25", 6.8, Warning),
            ("2023-10-15", 6.8, Warning),
            ("2023-11-20", 7.0, High),
            ("2023-12-18", 7.1, High),
            ("2024-01-15", 7.2, High),
        ],
    )
}

fn david() -> TrendData {
    series(
        "systolic_bp",
        "patient-002",
        band(90.0, 120.0, "mmHg"),
        TrendDirection::Decreasing,
        ("2023-07-20", "2024-01-15"),
        &[
            ("2023-07-20", 155.0, High),
            ("2023-08-25", 148.0, High),
            ("2023-10-15", 145.0, Elevated),
            ("2023-11-20", 142.0, Elevated),
            ("2023-12-18", 138.0, Elevated),
            ("2024-01-15", 142.0, Elevated),
        ],
    )
}

fn maria() -> TrendData {
    series(
        "total_cholesterol",
        "patient-003",
        band(100.0, 200.0, "mg/dL"),
        TrendDirection::Stable,
        ("2023-07-20", "2024-01-15"),
        &[
            ("2023-07-20", 290.0, High),
            ("2023-08-25", 285.0, High),
            ("2023-10-15", 288.0, High),
            ("2023-11-20", 285.0, High),
            ("2023-12-18", 287.0, High),
            ("2024-01-15", 285.0, High),
        ],
    )
}

fn james() -> TrendData {
    series(
        "glucose",
        "patient-004",
        band(70.0, 99.0, "mg/dL"),
        TrendDirection::Stable,
        ("2023-07-20", "2024-01-15"),
        &[
            ("2023-07-20", 88.0, Normal),
            ("2023-08-25", 85.0, Normal),
            ("2023-10-15", 82.0, Normal),
            ("2023-11-20", 86.0, Normal),
            ("2023-12-18", 84.0, Normal),
            ("2024-01-15", 85.0, Normal),
        ],
    )
}

fn linda() -> TrendData {
    series(
        "hba1c",
        "patient-005",
        band(4.0, 5.6, "%"),
        TrendDirection::Increasing,
        ("2023-07-20", "2024-01-15"),
        &[
            ("2023-07-20", 5.8, Elevated),
            ("2023-08-25", 5.9, Elevated),
            ("2023-10-15", 6.0, Elevated),
            ("2023-11-20", 6.1, Elevated),
            ("2023-12-18", 6.1, Elevated),
            ("2024-01-15", 6.2, Elevated),
        ],
    )
}

fn alberto() -> TrendData {
    series(
        "hba1c",
        "patient-006",
        band(4.0, 5.6, "%"),
        TrendDirection::Increasing,
        ("2023-07-20", "2024-01-15"),
        &[
            ("2023-07-20", 5.8, Elevated),
            ("2023-08-25", 5.9, Elevated),
            ("2023-10-15", 6.0, Elevated),
            ("2023-11-20", 6.1, Elevated),
            ("2023-12-18", 6.1, Elevated),
            ("2024-01-15", 6.2, Elevated),
        ],
    )
}

fn robert() -> TrendData {
    series(
        "hba1c",
        "patient-007",
        band(4.0, 5.6, "%"),
        TrendDirection::Increasing,
        ("2023-07-20", "2024-01-15"),
        &[
            ("2023-07-20", 5.8, Elevated),
            ("2023-08-25", 5.9, Elevated),
            ("2023-10-15", 6.0, Elevated),
            ("2023-11-20", 6.1, Elevated),
            ("2023-12-18", 4.4, Elevated),
            ("2024-01-15", 4.7, Elevated),
            ("2024-02-15", 5.9, Elevated),
            ("2024-03-15", 6.2, Elevated),
            ("2024-04-15", 6.0, Elevated),
            ("2024-05-15", 5.9, Elevated),
        ],
    )
}

fn samantha() -> TrendData {
    series(
        "systolic_bp",
        "patient-008",
        band(90.0, 120.0, "mmHg"),
        TrendDirection::Decreasing,
        ("2023-07-20", "2026-07-15"),
        &[
            ("2023-07-20", 155.0, High),
            ("2023-08-25", 148.0, High),
            ("2023-10-15", 145.0, Elevated),
            ("2023-11-20", 142.0, Elevated),
            ("2023-12-18", 138.0, Elevated),
            ("2024-01-15", 139.0, Elevated),
            ("2024-02-15", 149.0, Elevated),
            ("2024-03-15", 150.0, Elevated),
            ("2024-04-15", 122.0, Elevated),
            ("2024-05-15", 133.0, Elevated),
            ("2024-06-15", 130.0, Elevated),
            ("2024-07-15", 166.0, Elevated),
            ("2024-08-15", 188.0, Elevated),
            ("2024-09-15", 122.0, Elevated),
            ("2024-10-15", 133.0, Elevated),
            ("2024-11-15", 130.0, Elevated),
            ("2024-12-15", 166.0, Elevated),
            ("2025-01-15", 188.0, Elevated),
            ("2025-02-15", 122.0, Elevated),
            ("2025-03-15", 128.0, Elevated),
            ("2025-04-15", 129.0, Elevated),
            ("2025-05-15", 120.0, Elevated),
            ("2025-06-15", 149.0, Elevated),
            ("2025-07-15", 141.0, Elevated),
            ("2025-08-15", 120.0, Elevated),
            ("2025-09-15", 128.0, Elevated),
        ],
    )
}

fn john() -> TrendData {
    series(
        "systolic_bp",
        "patient-009",
        band(90.0, 120.0, "mmHg"),
        TrendDirection::Decreasing,
        ("2023-07-20", "2024-01-15"),
        &[
            ("2023-07-20", 155.0, High),
            ("2023-08-25", 148.0, High),
            ("2023-10-15", 145.0, Elevated),
            ("2023-11-20", 142.0, Elevated),
            ("2023-12-18", 138.0, Elevated),
            ("2024-01-15", 142.0, Elevated),
        ],
    )
}
