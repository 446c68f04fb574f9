//! Column descriptors for the lab results table.
//!
//! The row set is the same in both view modes; only the columns differ.
//! Clinicians additionally see the reference range. Each column carries an
//! optional pure formatter so presentation shells never reach into
//! `LabResult` fields themselves.

use std::{fmt, str::FromStr};

use serde::Serialize;

use vitalview_contracts::{
    date::display_date,
    error::VitalError,
    lab::LabResult,
    view::ViewMode,
};

use crate::badge::{self, BadgeVariant};

/// Identifies a lab table column independently of its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnKey {
    TestName,
    Value,
    ReferenceRange,
    Status,
    Date,
}

impl ColumnKey {
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnKey::TestName => "test-name",
            ColumnKey::Value => "value",
            ColumnKey::ReferenceRange => "reference-range",
            ColumnKey::Status => "status",
            ColumnKey::Date => "date",
        }
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ColumnKey {
    type Err = VitalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "test" | "test-name" | "test_name" | "testname" => Ok(ColumnKey::TestName),
            "value" | "result" => Ok(ColumnKey::Value),
            "reference-range" | "reference_range" | "range" => Ok(ColumnKey::ReferenceRange),
            "status" => Ok(ColumnKey::Status),
            "date" => Ok(ColumnKey::Date),
            _ => Err(VitalError::UnknownColumn {
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = VitalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(VitalError::UnknownSortDirection {
                value: s.to_string(),
            }),
        }
    }
}

/// A rendered table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DisplayValue {
    Text { text: String },
    Badge { label: String, variant: BadgeVariant },
}

impl DisplayValue {
    pub fn text(s: impl Into<String>) -> Self {
        DisplayValue::Text { text: s.into() }
    }

    /// The visible text, whatever the cell kind.
    pub fn label(&self) -> &str {
        match self {
            DisplayValue::Text { text } => text,
            DisplayValue::Badge { label, .. } => label,
        }
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Pure cell formatter.
pub type CellFormatter = fn(&LabResult) -> DisplayValue;

/// Describes one column of the lab results table.
#[derive(Debug, Clone, Copy)]
pub struct ColumnDef {
    pub key: ColumnKey,
    pub label: &'static str,
    pub sortable: bool,
    pub format: Option<CellFormatter>,
}

impl ColumnDef {
    /// Render `row` for this column, falling back to the raw field.
    pub fn render(&self, row: &LabResult) -> DisplayValue {
        if let Some(format) = self.format {
            return format(row);
        }
        match self.key {
            ColumnKey::TestName => DisplayValue::text(row.test_name.as_str()),
            ColumnKey::Value => DisplayValue::text(row.value.to_string()),
            ColumnKey::ReferenceRange => DisplayValue::text(row.reference_range.as_str()),
            ColumnKey::Status => DisplayValue::text(row.status.as_str()),
            ColumnKey::Date => DisplayValue::text(row.date.as_str()),
        }
    }
}

fn format_value(row: &LabResult) -> DisplayValue {
    DisplayValue::text(format!("{} {}", row.value, row.unit))
}

fn format_status(row: &LabResult) -> DisplayValue {
    DisplayValue::Badge {
        label: row.status.as_str().to_string(),
        variant: badge::for_status(row.status),
    }
}

fn format_date(row: &LabResult) -> DisplayValue {
    DisplayValue::text(display_date(&row.date))
}

static PATIENT_COLUMNS: [ColumnDef; 4] = [
    ColumnDef { key: ColumnKey::TestName, label: "Test", sortable: true, format: None },
    ColumnDef { key: ColumnKey::Value, label: "Your Result", sortable: true, format: Some(format_value) },
    ColumnDef { key: ColumnKey::Status, label: "Result Status", sortable: true, format: Some(format_status) },
    ColumnDef { key: ColumnKey::Date, label: "Date", sortable: true, format: Some(format_date) },
];

static CLINICIAN_COLUMNS: [ColumnDef; 5] = [
    ColumnDef { key: ColumnKey::TestName, label: "Test Name", sortable: true, format: None },
    ColumnDef { key: ColumnKey::Value, label: "Value", sortable: true, format: Some(format_value) },
    ColumnDef { key: ColumnKey::ReferenceRange, label: "Reference Range", sortable: false, format: None },
    ColumnDef { key: ColumnKey::Status, label: "Status", sortable: true, format: Some(format_status) },
    ColumnDef { key: ColumnKey::Date, label: "Date", sortable: true, format: Some(format_date) },
];

/// The columns shown for `mode`, left to right.
pub fn columns_for(mode: ViewMode) -> &'static [ColumnDef] {
    match mode {
        ViewMode::PatientView => &PATIENT_COLUMNS,
        ViewMode::ClinicianView => &CLINICIAN_COLUMNS,
    }
}

/// The column with `key` in `mode`, if that mode shows it.
pub fn find_column(mode: ViewMode, key: ColumnKey) -> Option<&'static ColumnDef> {
    columns_for(mode).iter().find(|c| c.key == key)
}

#[cfg(test)]
mod tests {
    use vitalview_contracts::view::ViewMode;

    use super::*;
    use crate::testing::lab;

    #[test]
    fn clinician_adds_reference_range() {
        let patient: Vec<_> = columns_for(ViewMode::PatientView).iter().map(|c| c.label).collect();
        let clinician: Vec<_> =
            columns_for(ViewMode::ClinicianView).iter().map(|c| c.label).collect();

        assert_eq!(patient, ["Test", "Your Result", "Result Status", "Date"]);
        assert_eq!(clinician, ["Test Name", "Value", "Reference Range", "Status", "Date"]);
        assert!(find_column(ViewMode::PatientView, ColumnKey::ReferenceRange).is_none());
        assert!(!find_column(ViewMode::ClinicianView, ColumnKey::ReferenceRange).unwrap().sortable);
    }

    #[test]
    fn cells_render_through_formatters() {
        let row = lab("1", "Ada Park", "Glucose", 145.0, "high", "2024-01-15");
        let cols = columns_for(ViewMode::ClinicianView);
        let cells: Vec<String> = cols.iter().map(|c| c.render(&row).to_string()).collect();

        assert_eq!(cells, ["Glucose", "145 mg/dL", "70-99 mg/dL", "high", "Jan 15, 2024"]);
        assert_eq!(
            cols[3].render(&row),
            DisplayValue::Badge { label: "high".into(), variant: BadgeVariant::Critical }
        );
    }

    #[test]
    fn text_values_keep_their_form() {
        let row = lab("4", "Ada Park", "Blood Pressure", "128/82", "elevated", "2024-01-15");
        let value = find_column(ViewMode::PatientView, ColumnKey::Value).unwrap();
        assert_eq!(value.render(&row).label(), "128/82 mg/dL");
    }

    #[test]
    fn parse_keys_and_directions() {
        assert_eq!("test".parse::<ColumnKey>().unwrap(), ColumnKey::TestName);
        assert_eq!("Status".parse::<ColumnKey>().unwrap(), ColumnKey::Status);
        assert!(matches!(
            "colour".parse::<ColumnKey>(),
            Err(VitalError::UnknownColumn { .. })
        ));
        assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Descending);
        assert_eq!(SortDirection::default().toggled(), SortDirection::Descending);
        assert!("up".parse::<SortDirection>().is_err());
    }
}
