//! Lab result projections: which dates a patient has, which rows belong to a
//! (patient, date) pair, and how those rows sort and filter.
//!
//! Everything here is a pure function of the directory and its arguments.
//! Nothing mutates its input; sorting and filtering return new vectors.

use std::cmp::Ordering;

use tracing::debug;

use vitalview_contracts::lab::{LabResult, LabStatus};

use crate::{
    badge::{self, BadgeVariant},
    columns::{ColumnKey, SortDirection},
    directory::PatientDirectory,
};

/// Distinct dates on which `patient_name` has results, newest first.
pub fn available_dates(directory: &PatientDirectory, patient_name: &str) -> Vec<String> {
    let mut dates: Vec<String> = directory
        .lab_results_for(patient_name)
        .map(|r| r.date.clone())
        .collect();
    // ISO dates order lexicographically.
    dates.sort_unstable_by(|a, b| b.cmp(a));
    dates.dedup();
    dates
}

/// Rows for `patient_name` on exactly `date`, in source order.
///
/// An empty `date` or a date with no results yields an empty vector.
pub fn project(directory: &PatientDirectory, patient_name: &str, date: &str) -> Vec<LabResult> {
    if date.is_empty() {
        return Vec::new();
    }
    let rows: Vec<LabResult> = directory
        .lab_results_for(patient_name)
        .filter(|r| r.date == date)
        .cloned()
        .collect();
    debug!(patient = %patient_name, date = %date, rows = rows.len(), "lab results projected");
    rows
}

// ── Sorting ───────────────────────────────────────────────────────────────────

/// Compare two rows on `column`, ascending.
///
/// Status ascends by severity from most to least severe, so an ascending
/// status sort lists critical rows first.
pub fn compare(a: &LabResult, b: &LabResult, column: ColumnKey) -> Ordering {
    match column {
        ColumnKey::TestName => a.test_name.to_lowercase().cmp(&b.test_name.to_lowercase()),
        ColumnKey::Value => compare_values(a, b),
        ColumnKey::ReferenceRange => a.reference_range.cmp(&b.reference_range),
        ColumnKey::Status => b.status.severity().cmp(&a.status.severity()),
        ColumnKey::Date => a.date.cmp(&b.date),
    }
}

// Numbers before text; numbers numerically, text lexicographically.
fn compare_values(a: &LabResult, b: &LabResult) -> Ordering {
    match (a.value.as_number(), b.value.as_number()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.value.to_string().cmp(&b.value.to_string()),
    }
}

/// A stably sorted copy of `rows`.
pub fn sort(rows: &[LabResult], column: ColumnKey, direction: SortDirection) -> Vec<LabResult> {
    let mut sorted = rows.to_vec();
    match direction {
        SortDirection::Ascending => sorted.sort_by(|a, b| compare(a, b, column)),
        SortDirection::Descending => sorted.sort_by(|a, b| compare(b, a, column)),
    }
    sorted
}

// ── Filtering ─────────────────────────────────────────────────────────────────

/// Narrowing criteria for a set of rows. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabResultsFilter {
    /// Keep only these statuses. Empty keeps all.
    pub statuses: Vec<LabStatus>,
    /// Keep only these test names (exact match). Empty keeps all.
    pub test_names: Vec<String>,
    /// Inclusive lower bound, `YYYY-MM-DD`.
    pub date_from: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD`.
    pub date_to: Option<String>,
    /// Keep only rows whose status is not `normal`.
    pub flagged_only: bool,
    /// Case-insensitive substring over test name, value and unit.
    pub search: Option<String>,
}

impl LabResultsFilter {
    pub fn matches(&self, row: &LabResult) -> bool {
        if !self.statuses.is_empty() && !self.statuses.contains(&row.status) {
            return false;
        }
        if !self.test_names.is_empty() && !self.test_names.iter().any(|t| *t == row.test_name) {
            return false;
        }
        if let Some(from) = &self.date_from {
            if row.date.as_str() < from.as_str() {
                return false;
            }
        }
        if let Some(to) = &self.date_to {
            if row.date.as_str() > to.as_str() {
                return false;
            }
        }
        if self.flagged_only && row.status == LabStatus::Normal {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => {
                let needle = needle.to_lowercase();
                row.test_name.to_lowercase().contains(&needle)
                    || row.value.to_string().to_lowercase().contains(&needle)
                    || row.unit.to_lowercase().contains(&needle)
            }
            _ => true,
        }
    }
}

/// Rows of `rows` that satisfy `filter`, order preserved.
pub fn filter(rows: &[LabResult], filter: &LabResultsFilter) -> Vec<LabResult> {
    rows.iter().filter(|r| filter.matches(r)).cloned().collect()
}

// ── Per-test lookups ──────────────────────────────────────────────────────────

/// The most recent `test_name` result for `patient_name`.
///
/// When two rows share the latest date, the earlier one in source order wins.
pub fn latest_for_test<'a>(
    directory: &'a PatientDirectory,
    patient_name: &'a str,
    test_name: &str,
) -> Option<&'a LabResult> {
    directory
        .lab_results_for(patient_name)
        .filter(|r| r.test_name == test_name)
        .fold(None, |best: Option<&LabResult>, r| match best {
            Some(b) if b.date >= r.date => Some(b),
            _ => Some(r),
        })
}

/// Whether any `test_name` result for `patient_name` has a critical badge.
pub fn has_critical_values(directory: &PatientDirectory, patient_name: &str, test_name: &str) -> bool {
    directory
        .lab_results_for(patient_name)
        .filter(|r| r.test_name == test_name)
        .any(|r| badge::for_status(r.status) == BadgeVariant::Critical)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use vitalview_contracts::lab::{LabResult, LabStatus};

    use super::*;
    use crate::testing::{lab, patient};

    fn make_directory() -> PatientDirectory {
        PatientDirectory::from_parts(
            vec![patient("P1", "Ada Park"), patient("P2", "Ben Cole")],
            vec![
                lab("1", "Ada Park", "Glucose", 145.0, "high", "2024-01-15"),
                lab("2", "Ada Park", "HbA1c", 7.2, "high", "2024-01-15"),
                lab("3", "Ada Park", "Blood Pressure", "128/82", "elevated", "2024-01-15"),
                lab("4", "Ada Park", "Glucose", 118.0, "elevated", "2024-09-15"),
                lab("5", "Ada Park", "Glucose", 125.0, "normal", "2024-06-25"),
                lab("6", "Ben Cole", "Glucose", 92.0, "normal", "2024-03-01"),
            ],
            vec![],
            vec![],
        )
        .unwrap()
    }

    fn ids(rows: &[LabResult]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    // ── dates and projection ──────────────────────────────────────────────────

    #[test]
    fn test_available_dates_descending_unique() {
        let dir = make_directory();
        let dates = available_dates(&dir, "Ada Park");
        assert_eq!(dates, ["2024-09-15", "2024-06-25", "2024-01-15"]);
        assert!(dates.windows(2).all(|w| w[0] > w[1]));
        assert!(!project(&dir, "Ada Park", &dates[0]).is_empty());
        assert!(available_dates(&dir, "Nobody").is_empty());
    }

    #[test]
    fn test_project_exact_match_only() {
        let dir = make_directory();
        assert_eq!(ids(&project(&dir, "Ada Park", "2024-01-15")), ["1", "2", "3"]);
        assert!(project(&dir, "Ada Park", "2024-03-01").is_empty());
        assert!(project(&dir, "Ada Park", "").is_empty());
        assert!(project(&dir, "ada park", "2024-01-15").is_empty());
    }

    // ── sorting ───────────────────────────────────────────────────────────────

    #[test]
    fn test_sort_by_value_numbers_before_text() {
        let dir = make_directory();
        let rows = project(&dir, "Ada Park", "2024-01-15");

        let asc = sort(&rows, ColumnKey::Value, SortDirection::Ascending);
        assert_eq!(ids(&asc), ["2", "1", "3"]);

        let desc = sort(&rows, ColumnKey::Value, SortDirection::Descending);
        assert_eq!(ids(&desc), ["3", "1", "2"]);
        // Input untouched.
        assert_eq!(ids(&rows), ["1", "2", "3"]);
    }

    #[test]
    fn test_sort_numeric_text_compares_as_number() {
        let rows = vec![
            lab("a", "Ada Park", "Total Cholesterol", "210", "normal", "2024-04-10"),
            lab("b", "Ada Park", "Total Cholesterol", 95.0, "normal", "2024-02-20"),
        ];
        let sorted = sort(&rows, ColumnKey::Value, SortDirection::Ascending);
        assert_eq!(ids(&sorted), ["b", "a"]);
    }

    #[test]
    fn test_sort_by_status_orders_by_severity() {
        let statuses = ["normal", "pending", "warning", "critical", "low", "elevated", "high"];
        let rows: Vec<LabResult> = statuses
            .iter()
            .enumerate()
            .map(|(i, s)| lab(&i.to_string(), "Ada Park", "Glucose", 1.0, s, "2024-01-15"))
            .collect();

        let sorted = sort(&rows, ColumnKey::Status, SortDirection::Ascending);
        let order: Vec<LabStatus> = sorted.iter().map(|r| r.status).collect();
        assert_eq!(order, LabStatus::ALL);

        let mut reversed = rows.clone();
        reversed.reverse();
        let sorted_again = sort(&reversed, ColumnKey::Status, SortDirection::Ascending);
        assert_eq!(sorted_again.iter().map(|r| r.status).collect::<Vec<_>>(), LabStatus::ALL);
    }

    #[test]
    fn test_sort_is_stable_and_idempotent() {
        let rows = vec![
            lab("1", "Ada Park", "Glucose", 1.0, "high", "2024-01-15"),
            lab("2", "Ada Park", "glucose", 2.0, "normal", "2024-01-15"),
            lab("3", "Ada Park", "Weight", 3.0, "high", "2024-01-15"),
            lab("4", "Ada Park", "Glucose", 4.0, "high", "2024-01-15"),
        ];

        let once = sort(&rows, ColumnKey::TestName, SortDirection::Ascending);
        assert_eq!(ids(&once), ["1", "2", "4", "3"]);
        assert_eq!(sort(&once, ColumnKey::TestName, SortDirection::Ascending), once);

        let by_status = sort(&rows, ColumnKey::Status, SortDirection::Descending);
        assert_eq!(ids(&by_status), ["2", "1", "3", "4"]);
        assert_eq!(sort(&by_status, ColumnKey::Status, SortDirection::Descending), by_status);
    }

    #[test]
    fn test_sort_by_date() {
        let dir = make_directory();
        let rows: Vec<LabResult> = dir.lab_results_for("Ada Park").cloned().collect();
        let sorted = sort(&rows, ColumnKey::Date, SortDirection::Descending);
        assert_eq!(sorted[0].date, "2024-09-15");
        assert_eq!(sorted.last().unwrap().date, "2024-01-15");
    }

    // ── filtering ─────────────────────────────────────────────────────────────

    #[test]
    fn test_empty_filter_keeps_everything() {
        let dir = make_directory();
        let rows = dir.lab_results().to_vec();
        assert_eq!(filter(&rows, &LabResultsFilter::default()), rows);
    }

    #[test]
    fn test_filter_criteria_combine() {
        let dir = make_directory();
        let rows = dir.lab_results().to_vec();

        let flagged = LabResultsFilter { flagged_only: true, ..Default::default() };
        assert_eq!(ids(&filter(&rows, &flagged)), ["1", "2", "3", "4"]);

        let window = LabResultsFilter {
            date_from: Some("2024-03-01".into()),
            date_to: Some("2024-06-25".into()),
            ..Default::default()
        };
        assert_eq!(ids(&filter(&rows, &window)), ["5", "6"]);

        let search = LabResultsFilter { search: Some("  MMHG ".into()), ..Default::default() };
        assert!(filter(&rows, &search).is_empty());
        let search = LabResultsFilter { search: Some("128/".into()), ..Default::default() };
        assert_eq!(ids(&filter(&rows, &search)), ["3"]);

        let narrowed = LabResultsFilter {
            statuses: vec![LabStatus::High, LabStatus::Elevated],
            test_names: vec!["Glucose".into()],
            ..Default::default()
        };
        assert_eq!(ids(&filter(&rows, &narrowed)), ["1", "4"]);
    }

    // ── per-test lookups ──────────────────────────────────────────────────────

    #[test]
    fn test_latest_for_test_picks_newest_date() {
        let dir = make_directory();
        let latest = latest_for_test(&dir, "Ada Park", "Glucose").unwrap();
        assert_eq!(latest.id, "4");
        assert!(latest_for_test(&dir, "Ada Park", "Weight").is_none());
    }

    #[test]
    fn test_has_critical_values() {
        let dir = make_directory();
        assert!(has_critical_values(&dir, "Ada Park", "Glucose"));
        assert!(!has_critical_values(&dir, "Ada Park", "Blood Pressure"));
        assert!(!has_critical_values(&dir, "Ben Cole", "Glucose"));
    }
}
