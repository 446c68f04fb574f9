//! The seam between the dashboard core and wherever its data comes from.
//!
//! The core never owns clinical data. A `ClinicalDataSource` hands over the
//! static records once, `PatientDirectory::load` validates them, and every
//! projection afterwards reads the validated directory.

use vitalview_contracts::{
    lab::{LabResult, TrendData},
    patient::Patient,
};

/// A provider of the static records the dashboard renders.
///
/// Implementations are expected to be cheap and infallible: the reference
/// implementation returns hardcoded mock data. Validation happens in the
/// directory, not here.
pub trait ClinicalDataSource {
    /// All patients, in picker order. The first one is the default selection.
    fn patients(&self) -> Vec<Patient>;

    /// Every lab result row, for all patients.
    fn lab_results(&self) -> Vec<LabResult>;

    /// Patient display name → trend series key.
    ///
    /// Trend lookup goes through this map rather than patient ids, so a
    /// patient missing from it has no trend even when they have lab results.
    fn trend_keys(&self) -> Vec<(String, String)>;

    /// Trend series key → series.
    fn trend_series(&self) -> Vec<(String, TrendData)>;
}
