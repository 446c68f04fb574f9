//! # vitalview-contracts
//!
//! Shared clinical types, view configuration, and errors for the VitalView
//! dashboard.
//!
//! All crates in the workspace import from here. No projection logic lives in
//! this crate: only data definitions, the static view table and error types.

pub mod date;
pub mod error;
pub mod lab;
pub mod patient;
pub mod view;

#[cfg(test)]
mod tests {
    use super::*;
    use error::VitalError;
    use lab::{severity_rank, LabStatus, LabValue, TrendDirection};
    use patient::{Alert, AlertPriority, Demographics, Patient, PatientId};
    use view::{resolve, UserRole, ViewMode};

    fn make_patient(alerts: Vec<Alert>) -> Patient {
        Patient {
            id: PatientId::new("P001"),
            name: "Sarah Mitchell".to_string(),
            age: 45,
            gender: "Female".to_string(),
            condition: "Diabetes Type 2".to_string(),
            demographics: Demographics {
                date_of_birth: "1978-03-15".to_string(),
                mrn: "MRN-2024-001".to_string(),
                phone: "(555) 123-4567".to_string(),
                email: "sarah.mitchell@email.com".to_string(),
                photo: "initials:SM".to_string(),
            },
            alerts,
        }
    }

    fn make_alert(id: &str, priority: AlertPriority, acknowledged: bool) -> Alert {
        Alert {
            id: id.to_string(),
            priority,
            kind: "clinical".to_string(),
            message: "HbA1c levels trending upward".to_string(),
            date: "2023-09-15".to_string(),
            acknowledged,
        }
    }

    // ── View table ───────────────────────────────────────────────────────────

    #[test]
    fn patient_view_hides_technical_details() {
        let config = resolve(ViewMode::PatientView);
        assert!(!config.show_technical_details);
        assert!(!config.show_all_patients);
        assert!(config.simplified_language);
        assert!(config.show_educational_content);
        assert_eq!(config.role, UserRole::Patient);
    }

    #[test]
    fn clinician_view_shows_technical_details() {
        let config = resolve(ViewMode::ClinicianView);
        assert!(config.show_technical_details);
        assert!(config.show_all_patients);
        assert!(!config.simplified_language);
        assert!(!config.show_educational_content);
        assert_eq!(config.role, UserRole::Clinician);
    }

    #[test]
    fn resolve_is_stable_across_calls() {
        // Same static entry every time, so callers may cache the reference.
        let a = resolve(ViewMode::PatientView);
        let b = resolve(ViewMode::PatientView);
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.mode, ViewMode::PatientView);
    }

    #[test]
    fn view_mode_parses_long_and_short_tokens() {
        assert_eq!("patient-view".parse::<ViewMode>().unwrap(), ViewMode::PatientView);
        assert_eq!("clinician".parse::<ViewMode>().unwrap(), ViewMode::ClinicianView);
        assert!(matches!(
            "admin-view".parse::<ViewMode>(),
            Err(VitalError::UnknownViewMode { .. })
        ));
    }

    #[test]
    fn view_mode_defaults_to_clinician_and_toggles() {
        assert_eq!(ViewMode::default(), ViewMode::ClinicianView);
        assert_eq!(ViewMode::ClinicianView.toggled(), ViewMode::PatientView);
        assert_eq!(ViewMode::PatientView.toggled().toggled(), ViewMode::PatientView);
    }

    #[test]
    fn view_mode_serializes_as_kebab_case() {
        let json = serde_json::to_string(&ViewMode::PatientView).unwrap();
        assert_eq!(json, "\"patient-view\"");
    }

    // ── Lab status ───────────────────────────────────────────────────────────

    #[test]
    fn severity_ranks_follow_clinical_order() {
        let ranks: Vec<u8> = LabStatus::ALL.iter().map(|s| s.severity()).collect();
        assert_eq!(ranks, vec![7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn unknown_status_token_ranks_zero() {
        assert_eq!(severity_rank("critical"), 7);
        assert_eq!(severity_rank("borderline"), 0);
        assert_eq!(severity_rank(""), 0);
    }

    #[test]
    fn lab_status_round_trips_through_token() {
        for status in LabStatus::ALL {
            assert_eq!(status.as_str().parse::<LabStatus>().unwrap(), status);
        }
    }

    // ── Lab values ───────────────────────────────────────────────────────────

    #[test]
    fn lab_value_numeric_detection() {
        assert_eq!(LabValue::Numeric(7.2).as_number(), Some(7.2));
        assert_eq!(LabValue::from("210").as_number(), Some(210.0));
        assert_eq!(LabValue::from("128/82").as_number(), None);
    }

    #[test]
    fn lab_value_deserializes_numbers_and_strings() {
        let n: LabValue = serde_json::from_str("145").unwrap();
        let t: LabValue = serde_json::from_str("\"128/82\"").unwrap();
        assert_eq!(n, LabValue::Numeric(145.0));
        assert_eq!(t, LabValue::Text("128/82".to_string()));
        assert_eq!(n.to_string(), "145");
    }

    #[test]
    fn trend_direction_display() {
        assert_eq!(TrendDirection::Increasing.to_string(), "increasing");
    }

    // ── Patients ─────────────────────────────────────────────────────────────

    #[test]
    fn active_alerts_skip_acknowledged_and_other_priorities() {
        let patient = make_patient(vec![
            make_alert("a1", AlertPriority::High, false),
            make_alert("a2", AlertPriority::High, true),
            make_alert("a3", AlertPriority::Medium, false),
        ]);

        let high: Vec<&str> = patient
            .active_alerts(AlertPriority::High)
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(high, vec!["a1"]);
        assert_eq!(patient.active_alerts(AlertPriority::Low).count(), 0);
    }

    #[test]
    fn initials_from_display_name() {
        assert_eq!(make_patient(vec![]).initials(), "SM");
    }

    // ── Dates ────────────────────────────────────────────────────────────────

    #[test]
    fn display_date_formats_and_passes_through_garbage() {
        assert_eq!(date::display_date("2024-01-15"), "Jan 15, 2024");
        assert_eq!(date::axis_label("2024-09-05"), "Sep 05");
        assert_eq!(date::display_date("soon"), "soon");
    }

    #[test]
    fn parse_date_rejects_impossible_dates() {
        assert!(date::parse_date("1", "2024-02-29").is_ok());
        let err = date::parse_date("7", "2023-02-30").unwrap_err();
        assert!(err.to_string().contains("2023-02-30"));
        assert!(err.to_string().contains("'7'"));
    }

    #[test]
    fn parse_date_requires_zero_padding() {
        for bad in ["2024-9-15", "2024-09-5", "24-09-15", "2024-09-15 "] {
            let err = date::parse_date("3", bad).unwrap_err();
            assert!(matches!(err, VitalError::InvalidDate { .. }), "{}", bad);
        }
        assert!(date::parse_date("3", "2024-09-15").is_ok());
    }

    #[test]
    fn display_impls_honour_width() {
        assert_eq!(format!("{:<8}|", LabStatus::High), "high    |");
        assert_eq!(format!("{:>6}|", LabValue::Numeric(7.2)), "   7.2|");
        assert_eq!(format!("{:<8}|", LabValue::from("128/82")), "128/82  |");
        assert_eq!(format!("{:<6}|", PatientId::new("P1")), "P1    |");
        assert_eq!(format!("{:<12}|", TrendDirection::Stable), "stable      |");
    }

    // ── VitalError display messages ──────────────────────────────────────────

    #[test]
    fn error_unknown_patient_is_not_a_config_error() {
        let msg = VitalError::UnknownPatient { name: "Nobody".to_string() }.to_string();
        assert_eq!(msg, "no patient named 'Nobody'");
        assert!(!msg.contains("configuration"));
    }

    #[test]
    fn error_orphaned_lab_result_display() {
        let err = VitalError::OrphanedLabResult {
            record_id: "42".to_string(),
            patient: "Jane Doe".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("unknown patient"));
        assert!(msg.contains("Jane Doe"));
    }

    #[test]
    fn error_config_display() {
        let err = VitalError::ConfigError {
            reason: "refresh_delay_ms must be an integer".to_string(),
        };
        assert!(err.to_string().contains("configuration error"));
    }
}
