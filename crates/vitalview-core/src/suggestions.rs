//! Rule-based health suggestions from a patient's latest lab values.
//!
//! Rules fire in a fixed order (glucose, HbA1c, cholesterol, then the
//! standing check-up reminder) and the list is cut at the configured limit.
//! Text values that do not parse as numbers never trigger a rule.

use std::collections::HashMap;

use serde::Serialize;

use vitalview_contracts::lab::LabResult;

use crate::{badge::BadgeVariant, directory::PatientDirectory};

pub const DEFAULT_LIMIT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Improvement,
    Maintain,
    Caution,
    Urgent,
}

impl SuggestionKind {
    pub fn badge(self) -> BadgeVariant {
        match self {
            SuggestionKind::Urgent => BadgeVariant::Critical,
            SuggestionKind::Caution => BadgeVariant::Warning,
            SuggestionKind::Improvement => BadgeVariant::Primary,
            SuggestionKind::Maintain => BadgeVariant::Normal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionCategory {
    Diet,
    Exercise,
    Medication,
    Lifestyle,
    Monitoring,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthSuggestion {
    pub id: &'static str,
    pub kind: SuggestionKind,
    pub title: &'static str,
    pub description: &'static str,
    pub priority: SuggestionPriority,
    pub category: SuggestionCategory,
}

impl HealthSuggestion {
    pub fn badge(&self) -> BadgeVariant {
        self.kind.badge()
    }
}

const fn suggestion(
    id: &'static str,
    kind: SuggestionKind,
    title: &'static str,
    description: &'static str,
    priority: SuggestionPriority,
    category: SuggestionCategory,
) -> HealthSuggestion {
    HealthSuggestion { id, kind, title, description, priority, category }
}

use SuggestionCategory as Cat;
use SuggestionKind as Kind;
use SuggestionPriority as Pri;

const GLUCOSE_HIGH: HealthSuggestion = suggestion(
    "glucose-high",
    Kind::Caution,
    "Monitor Blood Sugar",
    "Your glucose levels are elevated. Consider reducing refined carbs and increasing fiber intake.",
    Pri::High,
    Cat::Diet,
);
const GLUCOSE_BORDERLINE: HealthSuggestion = suggestion(
    "glucose-borderline",
    Kind::Improvement,
    "Optimize Blood Sugar",
    "Your glucose is in the pre-diabetic range. Regular exercise and balanced meals can help.",
    Pri::Medium,
    Cat::Lifestyle,
);
const GLUCOSE_GOOD: HealthSuggestion = suggestion(
    "glucose-good",
    Kind::Maintain,
    "Great Glucose Control",
    "Your blood sugar levels are excellent. Keep up your current healthy habits!",
    Pri::Low,
    Cat::Lifestyle,
);
const HBA1C_HIGH: HealthSuggestion = suggestion(
    "hba1c-high",
    Kind::Urgent,
    "Diabetes Management",
    "Your HbA1c indicates poor glucose control. Consult your doctor about medication adjustments.",
    Pri::High,
    Cat::Medication,
);
const HBA1C_BORDERLINE: HealthSuggestion = suggestion(
    "hba1c-borderline",
    Kind::Improvement,
    "Pre-diabetes Prevention",
    "Focus on weight management and regular physical activity to prevent diabetes progression.",
    Pri::Medium,
    Cat::Exercise,
);
const CHOLESTEROL_HIGH: HealthSuggestion = suggestion(
    "cholesterol-high",
    Kind::Caution,
    "Heart Health Focus",
    "Consider heart-healthy foods like oats, nuts, and fatty fish to help lower cholesterol.",
    Pri::Medium,
    Cat::Diet,
);
const REGULAR_MONITORING: HealthSuggestion = suggestion(
    "regular-monitoring",
    Kind::Maintain,
    "Continue Regular Check-ups",
    "Keep up with your regular lab work and health screenings for optimal health monitoring.",
    Pri::Low,
    Cat::Monitoring,
);

/// The latest row per test name for `patient_name`.
///
/// Ties on date keep the row that appears first in source order.
pub fn latest_by_test<'a>(
    directory: &'a PatientDirectory,
    patient_name: &'a str,
) -> HashMap<&'a str, &'a LabResult> {
    let mut latest: HashMap<&str, &LabResult> = HashMap::new();
    for row in directory.lab_results_for(patient_name) {
        match latest.get(row.test_name.as_str()) {
            Some(current) if current.date >= row.date => {}
            _ => {
                latest.insert(row.test_name.as_str(), row);
            }
        }
    }
    latest
}

/// Suggestions for a set of latest results keyed by test name.
pub fn generate(latest: &HashMap<&str, &LabResult>, limit: usize) -> Vec<HealthSuggestion> {
    let value_of = |test: &str| latest.get(test).and_then(|r| r.value.as_number());
    let mut out = Vec::new();

    if let Some(glucose) = value_of("Glucose") {
        out.push(if glucose > 140.0 {
            GLUCOSE_HIGH
        } else if glucose > 100.0 {
            GLUCOSE_BORDERLINE
        } else {
            GLUCOSE_GOOD
        });
    }

    if let Some(hba1c) = value_of("HbA1c") {
        if hba1c > 7.0 {
            out.push(HBA1C_HIGH);
        } else if hba1c > 5.7 {
            out.push(HBA1C_BORDERLINE);
        }
    }

    if value_of("Total Cholesterol").is_some_and(|c| c > 200.0) {
        out.push(CHOLESTEROL_HIGH);
    }

    out.push(REGULAR_MONITORING);
    out.truncate(limit);
    out
}

/// Suggestions for `patient_name`'s latest results.
pub fn for_patient(directory: &PatientDirectory, patient_name: &str, limit: usize) -> Vec<HealthSuggestion> {
    generate(&latest_by_test(directory, patient_name), limit)
}
