//! Aggregate counts over a patient's lab history.

use std::collections::BTreeMap;

use serde::Serialize;

use vitalview_contracts::lab::{LabResult, LabStatus};

use crate::{
    badge::{self, BadgeVariant},
    directory::PatientDirectory,
};

/// Counts across every lab result of one patient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LabResultsStats {
    pub total: usize,
    pub by_status: BTreeMap<String, usize>,
    pub by_test: BTreeMap<String, usize>,
    /// Rows whose status badge is critical (critical, high, low).
    pub critical_count: usize,
    /// Rows whose status is anything other than normal.
    pub flagged_count: usize,
    pub earliest_date: Option<String>,
    pub latest_date: Option<String>,
}

impl LabResultsStats {
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a LabResult>) -> Self {
        let mut stats = LabResultsStats::default();
        for row in rows {
            stats.total += 1;
            *stats.by_status.entry(row.status.as_str().to_string()).or_default() += 1;
            *stats.by_test.entry(row.test_name.clone()).or_default() += 1;
            if badge::for_status(row.status) == BadgeVariant::Critical {
                stats.critical_count += 1;
            }
            if row.status != LabStatus::Normal {
                stats.flagged_count += 1;
            }
            if stats.earliest_date.as_deref().map_or(true, |d| row.date.as_str() < d) {
                stats.earliest_date = Some(row.date.clone());
            }
            if stats.latest_date.as_deref().map_or(true, |d| row.date.as_str() > d) {
                stats.latest_date = Some(row.date.clone());
            }
        }
        stats
    }
}

/// Stats for all of `patient_name`'s results.
pub fn stats(directory: &PatientDirectory, patient_name: &str) -> LabResultsStats {
    LabResultsStats::from_rows(directory.lab_results_for(patient_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{lab, patient};

    #[test]
    fn counts_by_status_and_test() {
        let dir = PatientDirectory::from_parts(
            vec![patient("P1", "Ada Park")],
            vec![
                lab("1", "Ada Park", "Glucose", 145.0, "high", "2024-02-20"),
                lab("2", "Ada Park", "Glucose", 90.0, "normal", "2024-01-15"),
                lab("3", "Ada Park", "HbA1c", 6.1, "elevated", "2024-09-15"),
                lab("4", "Ada Park", "Weight", 60.0, "low", "2024-04-10"),
            ],
            vec![],
            vec![],
        )
        .unwrap();

        let s = stats(&dir, "Ada Park");
        assert_eq!(s.total, 4);
        assert_eq!(s.by_status.get("high"), Some(&1));
        assert_eq!(s.by_status.get("normal"), Some(&1));
        assert_eq!(s.by_test.get("Glucose"), Some(&2));
        assert_eq!(s.critical_count, 2);
        assert_eq!(s.flagged_count, 3);
        assert_eq!(s.earliest_date.as_deref(), Some("2024-01-15"));
        assert_eq!(s.latest_date.as_deref(), Some("2024-09-15"));
    }

    #[test]
    fn unknown_patient_has_empty_stats() {
        let dir =
            PatientDirectory::from_parts(vec![patient("P1", "Ada Park")], vec![], vec![], vec![])
                .unwrap();
        assert_eq!(stats(&dir, "Nobody"), LabResultsStats::default());
    }
}
