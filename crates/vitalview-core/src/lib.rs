//! # vitalview-core
//!
//! Selection state and view-ready projections for the VitalView dashboard.
//!
//! This crate provides:
//! - `PatientDirectory`, the validated static data set behind a session
//! - The `SelectionStore` and `ViewModeStore` holding the two pieces of UI state
//! - Pure projectors for lab results, trends, summaries and suggestions
//! - `ProjectionRefresher`, the delayed and cancellable lab refresh
//! - `Dashboard`, which wires all of the above together
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::time::Instant;
//! use vitalview_core::Dashboard;
//!
//! let mut dashboard = Dashboard::load(&source, config, Instant::now())?;
//! dashboard.select_patient_by_name("Sarah Mitchell", Instant::now());
//! dashboard.tick(Instant::now());
//! ```

pub mod badge;
pub mod columns;
pub mod dashboard;
pub mod directory;
pub mod glossary;
pub mod projector;
pub mod refresh;
pub mod stats;
pub mod store;
pub mod suggestions;
pub mod summary;
pub mod traits;
pub mod trend;

#[cfg(test)]
pub(crate) mod testing;

pub use dashboard::{Dashboard, LabView, SortState};
pub use directory::PatientDirectory;
pub use traits::ClinicalDataSource;
