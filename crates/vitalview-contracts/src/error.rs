//! Error types for the VitalView dashboard.
//!
//! The live dashboard never fails: unknown selections, empty projections and
//! unrecognised status tokens all degrade to an empty or default state. Errors
//! only arise while loading data, parsing configuration, or parsing enum
//! tokens supplied on the command line.

use thiserror::Error;

/// The unified error type for the VitalView crates.
#[derive(Debug, Error)]
pub enum VitalError {
    /// A lab result names a patient that does not exist in the directory.
    ///
    /// Fatal at load time: silently dropping the row would hide lab history.
    #[error("lab result '{record_id}' references unknown patient '{patient}'")]
    OrphanedLabResult { record_id: String, patient: String },

    /// Two patients share a display name, so name-keyed lookups are ambiguous.
    #[error("patient name '{name}' is not unique")]
    AmbiguousPatientName { name: String },

    /// A date field is not a valid `YYYY-MM-DD` calendar date.
    #[error("record '{record_id}' has invalid date '{date}'")]
    InvalidDate { record_id: String, date: String },

    /// No patient matches the requested name or id.
    #[error("no patient named '{name}'")]
    UnknownPatient { name: String },

    /// Output could not be serialised.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    /// The data source supplied no patients; nothing could be selected.
    #[error("patient directory is empty")]
    EmptyDirectory,

    /// A configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    #[error("unknown view mode '{value}' (expected 'patient-view' or 'clinician-view')")]
    UnknownViewMode { value: String },

    #[error("unknown lab status '{value}'")]
    UnknownStatus { value: String },

    #[error("unknown column '{value}'")]
    UnknownColumn { value: String },

    #[error("column '{column}' cannot be sorted in {view}")]
    UnsortableColumn { column: String, view: String },

    #[error("unknown sort direction '{value}' (expected 'asc' or 'desc')")]
    UnknownSortDirection { value: String },
}

/// Convenience alias used throughout the VitalView crates.
pub type VitalResult<T> = Result<T, VitalError>;
