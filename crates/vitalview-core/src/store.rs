//! The two pieces of mutable UI state: which patient, and which audience.
//!
//! Both stores are plain values owned by a `Dashboard`. Writes are
//! synchronous; readers see the new value on their next call.

use std::sync::Arc;

use tracing::debug;

use vitalview_contracts::{
    patient::Patient,
    view::{self, ViewConfig, ViewMode},
};

use crate::directory::PatientDirectory;

// ── SelectionStore ────────────────────────────────────────────────────────────

/// Holds the currently selected patient. Exactly one is always selected.
#[derive(Debug, Clone)]
pub struct SelectionStore {
    directory: Arc<PatientDirectory>,
    selected: Patient,
}

impl SelectionStore {
    /// Select the directory's first patient.
    pub fn new(directory: Arc<PatientDirectory>) -> Self {
        let selected = directory.first().clone();
        Self { directory, selected }
    }

    /// Select `initial_id` if it exists, otherwise the first patient.
    pub fn with_initial(directory: Arc<PatientDirectory>, initial_id: Option<&str>) -> Self {
        let mut store = Self::new(directory);
        if let Some(id) = initial_id {
            store.select_by_id(id);
        }
        store
    }

    pub fn selected(&self) -> &Patient {
        &self.selected
    }

    /// Replace the selection unconditionally.
    pub fn set_selected(&mut self, patient: Patient) {
        debug!(patient_id = %patient.id, "patient selected");
        self.selected = patient;
    }

    /// Select the patient with `id`. Returns `false` and leaves the selection
    /// alone if no such patient exists.
    pub fn select_by_id(&mut self, id: &str) -> bool {
        match self.directory.find_by_id(id) {
            Some(patient) => {
                let patient = patient.clone();
                self.set_selected(patient);
                true
            }
            None => {
                debug!(patient_id = %id, "select_by_id: no such patient");
                false
            }
        }
    }

    /// Select the patient whose display name is exactly `name`.
    pub fn select_by_name(&mut self, name: &str) -> bool {
        match self.directory.find_by_name(name) {
            Some(patient) => {
                let patient = patient.clone();
                self.set_selected(patient);
                true
            }
            None => {
                debug!(name = %name, "select_by_name: no such patient");
                false
            }
        }
    }

    /// The full patient list, for pickers.
    pub fn patients(&self) -> &[Patient] {
        self.directory.patients()
    }
}

// ── ViewModeStore ─────────────────────────────────────────────────────────────

/// Holds the current audience view mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewModeStore {
    view: ViewMode,
}

impl ViewModeStore {
    pub fn new(view: ViewMode) -> Self {
        Self { view }
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// Returns `true` if the mode actually changed.
    pub fn set_view(&mut self, view: ViewMode) -> bool {
        if self.view == view {
            return false;
        }
        debug!(from = %self.view, to = %view, "view mode changed");
        self.view = view;
        true
    }

    /// Flip between patient and clinician view.
    pub fn toggle(&mut self) -> ViewMode {
        self.set_view(self.view.toggled());
        self.view
    }

    pub fn is_patient_view(&self) -> bool {
        self.view == ViewMode::PatientView
    }

    pub fn is_clinician_view(&self) -> bool {
        self.view == ViewMode::ClinicianView
    }

    pub fn config(&self) -> &'static ViewConfig {
        view::resolve(self.view)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
