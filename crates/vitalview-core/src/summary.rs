//! The patient header and summary cards.
//!
//! Both adapt to the active `ViewConfig`: patients see plain titles and no
//! identifiers, clinicians see MRN, date of birth and reference ranges.

use serde::Serialize;

use vitalview_contracts::{
    date::display_date,
    lab::{LabStatus, LabValue, TrendDirection},
    patient::{Alert, AlertPriority, Patient},
    view::ViewConfig,
};

use crate::{
    badge::{self, BadgeVariant},
    directory::PatientDirectory,
    glossary::{self, GlossaryEntry},
    projector,
    trend,
};

// ── Header ────────────────────────────────────────────────────────────────────

/// An unacknowledged alert as shown in the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertBadge {
    pub id: String,
    pub priority: AlertPriority,
    pub label: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientHeader {
    pub title: String,
    pub initials: String,
    /// "45 years • Female".
    pub subtitle: String,
    pub condition: String,
    pub phone: String,
    /// Only with technical details.
    pub date_of_birth: Option<String>,
    /// Only with technical details.
    pub mrn: Option<String>,
    /// High priority first, then medium.
    pub alerts: Vec<AlertBadge>,
}

/// Unacknowledged alerts of one priority.
pub fn active_alerts(patient: &Patient, priority: AlertPriority) -> Vec<&Alert> {
    patient.active_alerts(priority).collect()
}

fn alert_label(priority: AlertPriority, simplified: bool) -> &'static str {
    match (priority, simplified) {
        (AlertPriority::High, true) => "Important",
        (AlertPriority::High, false) => "High Priority",
        (AlertPriority::Medium, true) => "Notice",
        (AlertPriority::Medium, false) => "Medium Priority",
        (AlertPriority::Low, true) => "Info",
        (AlertPriority::Low, false) => "Low Priority",
    }
}

impl PatientHeader {
    pub fn build(patient: &Patient, config: &ViewConfig) -> Self {
        let technical = config.show_technical_details;
        let simplified = config.simplified_language;

        let alerts = [AlertPriority::High, AlertPriority::Medium]
            .into_iter()
            .flat_map(|priority| {
                patient.active_alerts(priority).map(move |a| AlertBadge {
                    id: a.id.clone(),
                    priority,
                    label: alert_label(priority, simplified),
                    message: a.message.clone(),
                })
            })
            .collect();

        Self {
            title: if simplified {
                "Your Health Dashboard".to_string()
            } else {
                patient.name.clone()
            },
            initials: patient.initials(),
            subtitle: format!("{} years • {}", patient.age, patient.gender),
            condition: if simplified {
                format!("Condition: {}", patient.condition)
            } else {
                patient.condition.clone()
            },
            phone: patient.demographics.phone.clone(),
            date_of_birth: technical.then(|| display_date(&patient.demographics.date_of_birth)),
            mrn: technical.then(|| patient.demographics.mrn.clone()),
            alerts,
        }
    }
}

// ── Summary cards ─────────────────────────────────────────────────────────────

/// Latest reading of one key biomarker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCard {
    pub test_name: String,
    pub title: String,
    pub value: LabValue,
    pub unit: String,
    pub status: LabStatus,
    pub badge: BadgeVariant,
    pub date: String,
    /// Direction of this test's numeric history; stable for text values.
    pub direction: TrendDirection,
    /// Only with technical details.
    pub reference_range: Option<String>,
    /// Only with educational content.
    pub glossary: Option<&'static GlossaryEntry>,
}

/// Count of normal cards over all cards, shown to patients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthScore {
    pub normal: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientSummary {
    pub header: PatientHeader,
    pub cards: Vec<SummaryCard>,
    pub normal_count: usize,
    /// Present in simplified-language views with at least one card.
    pub health_score: Option<HealthScore>,
}

impl PatientSummary {
    /// Cards for each of `key_biomarkers` the patient has a result for, in
    /// the given order.
    pub fn build(
        directory: &PatientDirectory,
        patient: &Patient,
        config: &ViewConfig,
        key_biomarkers: &[String],
    ) -> Self {
        let cards: Vec<SummaryCard> = key_biomarkers
            .iter()
            .filter_map(|test| {
                let latest = projector::latest_for_test(directory, &patient.name, test)?;
                Some(SummaryCard {
                    test_name: test.clone(),
                    title: if config.simplified_language {
                        test.clone()
                    } else {
                        format!("{} Level", test)
                    },
                    value: latest.value.clone(),
                    unit: latest.unit.clone(),
                    status: latest.status,
                    badge: badge::for_status(latest.status),
                    date: display_date(&latest.date),
                    direction: history_direction(directory, &patient.name, test),
                    reference_range: config
                        .show_technical_details
                        .then(|| latest.reference_range.clone()),
                    glossary: if config.show_educational_content {
                        glossary::for_test(test)
                    } else {
                        None
                    },
                })
            })
            .collect();

        let normal_count = cards.iter().filter(|c| c.status == LabStatus::Normal).count();
        let health_score = (config.simplified_language && !cards.is_empty()).then_some(HealthScore {
            normal: normal_count,
            total: cards.len(),
        });

        Self {
            header: PatientHeader::build(patient, config),
            cards,
            normal_count,
            health_score,
        }
    }
}

fn history_direction(directory: &PatientDirectory, patient_name: &str, test_name: &str) -> TrendDirection {
    let mut history: Vec<(&str, f64)> = directory
        .lab_results_for(patient_name)
        .filter(|r| r.test_name == test_name)
        .filter_map(|r| r.value.as_number().map(|v| (r.date.as_str(), v)))
        .collect();
    history.sort_by(|a, b| a.0.cmp(b.0));
    let values: Vec<f64> = history.into_iter().map(|(_, v)| v).collect();
    trend::direction_of(&values)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use vitalview_contracts::{
        lab::TrendDirection,
        patient::{Alert, AlertPriority},
        view::{resolve, ViewMode},
    };

    use super::*;
    use crate::testing::{lab, patient};

    fn make_alert(id: &str, priority: AlertPriority, acknowledged: bool) -> Alert {
        Alert {
            id: id.to_string(),
            priority,
            kind: "clinical".to_string(),
            message: format!("alert {}", id),
            date: "2023-09-15".to_string(),
            acknowledged,
        }
    }

    fn make_directory() -> PatientDirectory {
        PatientDirectory::from_parts(
            vec![patient("P1", "Ada Park")],
            vec![
                lab("1", "Ada Park", "Glucose", 145.0, "high", "2024-01-15"),
                lab("2", "Ada Park", "Glucose", 125.0, "elevated", "2024-06-25"),
                lab("3", "Ada Park", "Glucose", 118.0, "elevated", "2024-09-15"),
                lab("4", "Ada Park", "Blood Pressure", "116/74", "normal", "2024-09-15"),
                lab("5", "Ada Park", "Total Cholesterol", 165.0, "normal", "2024-09-15"),
            ],
            vec![],
            vec![],
        )
        .unwrap()
    }

    fn key_biomarkers() -> Vec<String> {
        ["Glucose", "HbA1c", "Total Cholesterol", "Blood Pressure", "Weight"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_cards_skip_missing_biomarkers() {
        let dir = make_directory();
        let summary = PatientSummary::build(
            &dir,
            dir.first(),
            resolve(ViewMode::ClinicianView),
            &key_biomarkers(),
        );

        let titles: Vec<&str> = summary.cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Glucose Level", "Total Cholesterol Level", "Blood Pressure Level"]
        );
        assert_eq!(summary.cards[0].value, LabValue::Numeric(118.0));
        assert_eq!(summary.cards[0].date, "Sep 15, 2024");
        assert_eq!(summary.cards[0].direction, TrendDirection::Decreasing);
        assert_eq!(summary.cards[2].direction, TrendDirection::Stable);
        assert!(summary.cards[0].reference_range.is_some());
        assert!(summary.cards[0].glossary.is_none());
        assert_eq!(summary.normal_count, 2);
        assert!(summary.health_score.is_none());
    }

    #[test]
    fn test_patient_view_hides_technical_details() {
        let dir = make_directory();
        let summary =
            PatientSummary::build(&dir, dir.first(), resolve(ViewMode::PatientView), &key_biomarkers());

        assert_eq!(summary.cards[0].title, "Glucose");
        assert!(summary.cards.iter().all(|c| c.reference_range.is_none()));
        assert!(summary.cards.iter().all(|c| c.glossary.is_some()));
        assert_eq!(summary.health_score, Some(HealthScore { normal: 2, total: 3 }));
        assert_eq!(summary.header.title, "Your Health Dashboard");
        assert!(summary.header.mrn.is_none());
        assert!(summary.header.date_of_birth.is_none());
    }

    #[test]
    fn test_header_alerts_and_identifiers() {
        let mut p = patient("P1", "Ada Park");
        p.alerts = vec![
            make_alert("a1", AlertPriority::Medium, false),
            make_alert("a2", AlertPriority::High, false),
            make_alert("a3", AlertPriority::High, true),
            make_alert("a4", AlertPriority::Low, false),
        ];

        let header = PatientHeader::build(&p, resolve(ViewMode::ClinicianView));
        assert_eq!(header.title, "Ada Park");
        assert_eq!(header.initials, "AP");
        assert_eq!(header.subtitle, "40 years • Female");
        assert_eq!(header.mrn.as_deref(), Some("MRN-P1"));
        assert_eq!(header.date_of_birth.as_deref(), Some("Jan 1, 1984"));

        let ids: Vec<&str> = header.alerts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["a2", "a1"]);
        assert_eq!(header.alerts[0].label, "High Priority");

        let simple = PatientHeader::build(&p, resolve(ViewMode::PatientView));
        assert_eq!(simple.alerts[0].label, "Important");
        assert_eq!(simple.condition, "Condition: Healthy Adult");

        assert_eq!(active_alerts(&p, AlertPriority::High).len(), 1);
        assert_eq!(active_alerts(&p, AlertPriority::Low).len(), 1);
    }

    #[test]
    fn test_empty_history_has_no_cards() {
        let dir =
            PatientDirectory::from_parts(vec![patient("P1", "Ada Park")], vec![], vec![], vec![])
                .unwrap();
        let summary =
            PatientSummary::build(&dir, dir.first(), resolve(ViewMode::PatientView), &key_biomarkers());
        assert!(summary.cards.is_empty());
        assert!(summary.health_score.is_none());
    }
}
