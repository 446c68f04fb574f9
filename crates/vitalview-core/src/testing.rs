//! Hand-built fixtures shared by the unit tests in this crate.

use vitalview_contracts::{
    lab::{LabResult, LabStatus, LabValue, ReferenceRange, TrendData, TrendDataPoint, TrendDirection},
    patient::{Demographics, Patient, PatientId},
};

pub(crate) fn patient(id: &str, name: &str) -> Patient {
    Patient {
        id: PatientId::new(id),
        name: name.to_string(),
        age: 40,
        gender: "Female".to_string(),
        condition: "Healthy Adult".to_string(),
        demographics: Demographics {
            date_of_birth: "1984-01-01".to_string(),
            mrn: format!("MRN-{}", id),
            phone: "(555) 000-0000".to_string(),
            email: "someone@example.com".to_string(),
            photo: String::new(),
        },
        alerts: vec![],
    }
}

pub(crate) fn lab(
    id: &str,
    patient: &str,
    test_name: &str,
    value: impl Into<LabValue>,
    status: &str,
    date: &str,
) -> LabResult {
    LabResult {
        id: id.to_string(),
        patient: patient.to_string(),
        test_name: test_name.to_string(),
        value: value.into(),
        unit: "mg/dL".to_string(),
        status: status.parse::<LabStatus>().expect("fixture status"),
        reference_range: "70-99 mg/dL".to_string(),
        date: date.to_string(),
    }
}

/// A monthly series with the given `(value, status)` points, labelled stable.
pub(crate) fn trend(points: &[(f64, &str)]) -> TrendData {
    let data_points: Vec<TrendDataPoint> = points
        .iter()
        .enumerate()
        .map(|(i, (value, status))| TrendDataPoint {
            date: format!("2024-{:02}-15", i + 1),
            value: *value,
            status: status.parse::<LabStatus>().expect("fixture status"),
            reference_range: Some(ReferenceRange {
                min: Some(70.0),
                max: Some(99.0),
                unit: "mg/dL".to_string(),
            }),
        })
        .collect();

    TrendData {
        biomarker_id: "glucose".to_string(),
        patient_id: "P1".to_string(),
        start_date: data_points.first().map(|p| p.date.clone()).unwrap_or_default(),
        end_date: data_points.last().map(|p| p.date.clone()).unwrap_or_default(),
        data_points,
        overall_trend: TrendDirection::Stable,
    }
}
