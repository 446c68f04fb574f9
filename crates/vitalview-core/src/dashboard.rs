//! A dashboard session: the stores, the delayed lab projection, and the
//! date and sort state, wired together.
//!
//! Every write goes through `Dashboard`, which keeps the derived state
//! consistent: a patient change resets the date to that patient's most
//! recent one and restarts the lab projection; a view change swaps the
//! column set but never the rows.

use std::{sync::Arc, time::Instant};

use serde::Serialize;
use tracing::{debug, info};

use vitalview_config::DashboardConfig;
use vitalview_contracts::{
    error::VitalResult,
    lab::{LabResult, TrendData},
    patient::Patient,
    view::{ViewConfig, ViewMode},
};

use crate::{
    columns::{self, ColumnDef, ColumnKey, SortDirection},
    directory::PatientDirectory,
    projector,
    refresh::{ProjectionKey, ProjectionRefresher},
    stats::{self, LabResultsStats},
    store::{SelectionStore, ViewModeStore},
    suggestions::{self, HealthSuggestion},
    summary::PatientSummary,
    traits::ClinicalDataSource,
    trend::{self, TrendAssessment},
};

/// What the lab table should show right now.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "rows", rename_all = "kebab-case")]
pub enum LabView {
    /// A projection is pending; show the placeholder.
    Loading,
    /// Rows for the selected date, sorted by the active sort.
    Ready(Vec<LabResult>),
    /// The selected patient has no lab results at all.
    NoDates,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortState {
    pub column: ColumnKey,
    pub direction: SortDirection,
}

pub struct Dashboard {
    directory: Arc<PatientDirectory>,
    config: DashboardConfig,
    selection: SelectionStore,
    view: ViewModeStore,
    refresher: ProjectionRefresher,
    selected_date: String,
    sort: Option<SortState>,
}

impl Dashboard {
    /// Start a session over `directory` and request the first projection.
    pub fn new(directory: Arc<PatientDirectory>, config: DashboardConfig, now: Instant) -> Self {
        let selection =
            SelectionStore::with_initial(Arc::clone(&directory), config.initial_patient_id.as_deref());
        let view = ViewModeStore::new(config.initial_view);
        let refresher = ProjectionRefresher::new(config.refresh_delay());

        let mut dashboard = Self {
            directory,
            config,
            selection,
            view,
            refresher,
            selected_date: String::new(),
            sort: None,
        };
        dashboard.on_patient_changed(now);

        info!(
            patient_id = %dashboard.patient().id,
            view = %dashboard.view(),
            "dashboard session started"
        );
        dashboard
    }

    /// Load and validate `source`, then start a session over it.
    pub fn load(
        source: &dyn ClinicalDataSource,
        config: DashboardConfig,
        now: Instant,
    ) -> VitalResult<Self> {
        let directory = PatientDirectory::load(source)?;
        Ok(Self::new(Arc::new(directory), config, now))
    }

    // ── Writes ────────────────────────────────────────────────────────────────

    pub fn select_patient(&mut self, patient: Patient, now: Instant) {
        self.selection.set_selected(patient);
        self.on_patient_changed(now);
    }

    /// Returns `false` and changes nothing if `id` is unknown.
    pub fn select_patient_by_id(&mut self, id: &str, now: Instant) -> bool {
        let changed = self.selection.select_by_id(id);
        if changed {
            self.on_patient_changed(now);
        }
        changed
    }

    /// Returns `false` and changes nothing if `name` is unknown.
    pub fn select_patient_by_name(&mut self, name: &str, now: Instant) -> bool {
        let changed = self.selection.select_by_name(name);
        if changed {
            self.on_patient_changed(now);
        }
        changed
    }

    /// Move the selection `offset` places through the patient list, wrapping.
    pub fn step_patient(&mut self, offset: isize, now: Instant) {
        let len = self.directory.patients().len() as isize;
        let current = self
            .directory
            .position_of(&self.selection.selected().id)
            .unwrap_or(0) as isize;
        let next = (current + offset).rem_euclid(len) as usize;
        let patient = self.directory.patients()[next].clone();
        self.select_patient(patient, now);
    }

    pub fn set_view(&mut self, mode: ViewMode) -> bool {
        let changed = self.view.set_view(mode);
        if changed {
            self.drop_hidden_sort();
        }
        changed
    }

    pub fn toggle_view(&mut self) -> ViewMode {
        let mode = self.view.toggle();
        self.drop_hidden_sort();
        mode
    }

    /// Show `date` and restart the projection. An empty date clears the table
    /// immediately.
    pub fn set_date(&mut self, date: impl Into<String>, now: Instant) {
        self.selected_date = date.into();
        debug!(date = %self.selected_date, "date selected");
        self.request_projection(now);
    }

    /// Move `offset` places through the available dates (newest first),
    /// clamped at either end.
    pub fn step_date(&mut self, offset: isize, now: Instant) {
        let dates = self.available_dates();
        if dates.is_empty() {
            return;
        }
        let current = dates
            .iter()
            .position(|d| *d == self.selected_date)
            .unwrap_or(0) as isize;
        let next = (current + offset).clamp(0, dates.len() as isize - 1) as usize;
        if dates[next] != self.selected_date {
            self.set_date(dates[next].clone(), now);
        }
    }

    /// Sort by `column`. Returns `false`, leaving the sort unchanged, for
    /// columns that are hidden or not sortable in the current view.
    pub fn set_sort(&mut self, column: ColumnKey, direction: SortDirection) -> bool {
        if !self.is_sortable(column) {
            debug!(column = %column, "sort ignored: column not sortable");
            return false;
        }
        self.sort = Some(SortState { column, direction });
        true
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Header click: the active column flips direction, any other sortable
    /// column starts ascending. Returns `false` for columns that are hidden
    /// or not sortable in the current view.
    pub fn toggle_sort(&mut self, column: ColumnKey) -> bool {
        let direction = match self.sort {
            Some(s) if s.column == column => s.direction.toggled(),
            _ => SortDirection::Ascending,
        };
        self.set_sort(column, direction)
    }

    /// Drive the delayed projection. Returns `true` when new rows appear.
    pub fn tick(&mut self, now: Instant) -> bool {
        let directory = &self.directory;
        self.refresher
            .poll(now, |key| projector::project(directory, &key.patient_name, &key.date))
    }

    // ── Reads ─────────────────────────────────────────────────────────────────

    pub fn patient(&self) -> &Patient {
        self.selection.selected()
    }

    pub fn patients(&self) -> &[Patient] {
        self.selection.patients()
    }

    pub fn view(&self) -> ViewMode {
        self.view.view()
    }

    pub fn view_config(&self) -> &'static ViewConfig {
        self.view.config()
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn directory(&self) -> &PatientDirectory {
        &self.directory
    }

    pub fn available_dates(&self) -> Vec<String> {
        projector::available_dates(&self.directory, &self.patient().name)
    }

    pub fn selected_date(&self) -> &str {
        &self.selected_date
    }

    pub fn columns(&self) -> &'static [ColumnDef] {
        columns::columns_for(self.view())
    }

    pub fn sort_state(&self) -> Option<SortState> {
        self.sort
    }

    pub fn is_loading(&self) -> bool {
        self.refresher.is_loading()
    }

    pub fn lab_view(&self) -> LabView {
        if self.selected_date.is_empty() {
            return LabView::NoDates;
        }
        match self.refresher.rows() {
            None => LabView::Loading,
            Some(rows) => LabView::Ready(match self.sort {
                Some(s) => projector::sort(rows, s.column, s.direction),
                None => rows.to_vec(),
            }),
        }
    }

    pub fn trend(&self) -> Option<&TrendData> {
        trend::lookup(&self.directory, &self.patient().name)
    }

    pub fn trend_assessment(&self) -> Option<TrendAssessment> {
        self.trend().map(trend::assess)
    }

    pub fn summary(&self) -> PatientSummary {
        PatientSummary::build(
            &self.directory,
            self.patient(),
            self.view_config(),
            &self.config.key_biomarkers,
        )
    }

    pub fn suggestions(&self) -> Vec<HealthSuggestion> {
        suggestions::for_patient(&self.directory, &self.patient().name, self.config.max_suggestions)
    }

    pub fn stats(&self) -> LabResultsStats {
        stats::stats(&self.directory, &self.patient().name)
    }

    // ── Internals ─────────────────────────────────────────────────────────────

    fn on_patient_changed(&mut self, now: Instant) {
        self.selected_date = self.available_dates().into_iter().next().unwrap_or_default();
        self.request_projection(now);
    }

    fn request_projection(&mut self, now: Instant) {
        let key = ProjectionKey::new(self.patient().name.clone(), self.selected_date.clone());
        self.refresher.request(key, now);
    }

    fn is_sortable(&self, column: ColumnKey) -> bool {
        columns::find_column(self.view(), column).is_some_and(|c| c.sortable)
    }

    fn drop_hidden_sort(&mut self) {
        if let Some(s) = self.sort {
            if columns::find_column(self.view(), s.column).is_none() {
                self.sort = None;
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::{
        sync::Arc,
        time::{Duration, Instant},
    };

    use vitalview_config::DashboardConfig;
    use vitalview_contracts::view::ViewMode;

    use super::*;
    use crate::testing::{lab, patient, trend};

    fn make_directory() -> Arc<PatientDirectory> {
        Arc::new(
            PatientDirectory::from_parts(
                vec![
                    patient("P1", "Ada Park"),
                    patient("P2", "Ben Cole"),
                    patient("P3", "Cy Dorn"),
                ],
                vec![
                    lab("1", "Ada Park", "Glucose", 145.0, "high", "2024-01-15"),
                    lab("2", "Ada Park", "HbA1c", 7.2, "high", "2024-01-15"),
                    lab("3", "Ada Park", "Glucose", 118.0, "elevated", "2024-09-15"),
                    lab("4", "Ada Park", "HbA1c", 6.1, "elevated", "2024-09-15"),
                    lab("5", "Ben Cole", "Glucose", 92.0, "normal", "2024-03-01"),
                    lab("6", "Ben Cole", "Total Cholesterol", 215.0, "elevated", "2024-03-01"),
                ],
                vec![("Ada Park".to_string(), "ada".to_string())],
                vec![("ada".to_string(), trend(&[(6.9, "warning"), (7.2, "high")]))],
            )
            .unwrap(),
        )
    }

    fn make_dashboard(t0: Instant) -> Dashboard {
        Dashboard::new(make_directory(), DashboardConfig::default(), t0)
    }

    fn ready_ids(view: &LabView) -> Vec<&str> {
        match view {
            LabView::Ready(rows) => rows.iter().map(|r| r.id.as_str()).collect(),
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    const DELAY: Duration = Duration::from_millis(300);

    // ── 1. start-up ───────────────────────────────────────────────────────────

    #[test]
    fn test_starts_on_first_patient_latest_date_loading() {
        let t0 = Instant::now();
        let mut d = make_dashboard(t0);

        assert_eq!(d.patient().name, "Ada Park");
        assert_eq!(d.view(), ViewMode::ClinicianView);
        assert_eq!(d.selected_date(), "2024-09-15");
        assert_eq!(d.lab_view(), LabView::Loading);

        assert!(d.tick(t0 + DELAY));
        assert_eq!(ready_ids(&d.lab_view()), ["3", "4"]);
    }

    #[test]
    fn test_config_sets_initial_patient_and_view() {
        let config = DashboardConfig {
            initial_view: ViewMode::PatientView,
            initial_patient_id: Some("P2".to_string()),
            ..DashboardConfig::default()
        };
        let d = Dashboard::new(make_directory(), config, Instant::now());
        assert_eq!(d.patient().name, "Ben Cole");
        assert!(!d.view_config().show_technical_details);
        assert_eq!(d.columns().len(), 4);
    }

    // ── 2. selection ──────────────────────────────────────────────────────────

    #[test]
    fn test_patient_change_resets_date() {
        let t0 = Instant::now();
        let mut d = make_dashboard(t0);
        d.set_date("2024-01-15", t0);

        assert!(d.select_patient_by_name("Ben Cole", t0));
        assert_eq!(d.selected_date(), "2024-03-01");
        assert!(d.is_loading());
    }

    #[test]
    fn test_unknown_selection_changes_nothing() {
        let t0 = Instant::now();
        let mut d = make_dashboard(t0);
        d.tick(t0 + DELAY);

        assert!(!d.select_patient_by_id("P99", t0 + DELAY));
        assert!(!d.select_patient_by_name("ada park", t0 + DELAY));
        assert_eq!(d.patient().name, "Ada Park");
        // The visible rows were not disturbed either.
        assert_eq!(ready_ids(&d.lab_view()), ["3", "4"]);
    }

    #[test]
    fn test_rapid_selection_shows_only_last() {
        let t0 = Instant::now();
        let mut d = make_dashboard(t0);

        d.select_patient_by_id("P2", t0 + Duration::from_millis(50));
        d.select_patient_by_id("P1", t0 + Duration::from_millis(100));

        // The first request's deadline passes without effect.
        assert!(!d.tick(t0 + Duration::from_millis(350)));
        assert_eq!(d.lab_view(), LabView::Loading);

        assert!(d.tick(t0 + Duration::from_millis(400)));
        let view = d.lab_view();
        let LabView::Ready(rows) = &view else {
            panic!("expected Ready, got {:?}", view);
        };
        assert!(rows.iter().all(|r| r.patient == "Ada Park"));
    }

    #[test]
    fn test_patient_without_labs_shows_no_dates() {
        let t0 = Instant::now();
        let mut d = make_dashboard(t0);
        d.select_patient_by_id("P3", t0);

        assert_eq!(d.selected_date(), "");
        assert!(d.available_dates().is_empty());
        assert_eq!(d.lab_view(), LabView::NoDates);
        assert!(d.trend().is_none());
    }

    #[test]
    fn test_step_patient_wraps() {
        let t0 = Instant::now();
        let mut d = make_dashboard(t0);
        d.step_patient(-1, t0);
        assert_eq!(d.patient().name, "Cy Dorn");
        d.step_patient(1, t0);
        assert_eq!(d.patient().name, "Ada Park");
    }

    // ── 3. dates ──────────────────────────────────────────────────────────────

    #[test]
    fn test_step_date_clamps() {
        let t0 = Instant::now();
        let mut d = make_dashboard(t0);
        d.step_date(1, t0);
        assert_eq!(d.selected_date(), "2024-01-15");
        d.step_date(1, t0);
        assert_eq!(d.selected_date(), "2024-01-15");
        d.step_date(-5, t0);
        assert_eq!(d.selected_date(), "2024-09-15");
    }

    #[test]
    fn test_unknown_date_projects_empty() {
        let t0 = Instant::now();
        let mut d = make_dashboard(t0);
        d.set_date("2023-01-01", t0);
        d.tick(t0 + DELAY);
        assert_eq!(d.lab_view(), LabView::Ready(vec![]));
    }

    // ── 4. sorting and view ───────────────────────────────────────────────────

    #[test]
    fn test_toggle_sort_header_click_semantics() {
        let t0 = Instant::now();
        let mut d = make_dashboard(t0);
        d.set_date("2024-01-15", t0);
        d.tick(t0 + DELAY);

        assert!(d.toggle_sort(ColumnKey::Value));
        assert_eq!(ready_ids(&d.lab_view()), ["2", "1"]);

        assert!(d.toggle_sort(ColumnKey::Value));
        assert_eq!(d.sort_state().unwrap().direction, SortDirection::Descending);
        assert_eq!(ready_ids(&d.lab_view()), ["1", "2"]);

        assert!(d.toggle_sort(ColumnKey::TestName));
        assert_eq!(
            d.sort_state(),
            Some(SortState { column: ColumnKey::TestName, direction: SortDirection::Ascending })
        );

        assert!(!d.toggle_sort(ColumnKey::ReferenceRange));
        assert_eq!(d.sort_state().unwrap().column, ColumnKey::TestName);
    }

    #[test]
    fn test_set_sort_rejects_hidden_and_unsortable_columns() {
        let t0 = Instant::now();
        let mut d = make_dashboard(t0);

        // Shown in clinician view but not sortable.
        assert!(!d.set_sort(ColumnKey::ReferenceRange, SortDirection::Ascending));
        assert!(d.sort_state().is_none());

        assert!(d.set_sort(ColumnKey::Status, SortDirection::Descending));
        d.set_view(ViewMode::PatientView);

        // Hidden in patient view.
        assert!(!d.set_sort(ColumnKey::ReferenceRange, SortDirection::Descending));
        assert_eq!(
            d.sort_state(),
            Some(SortState { column: ColumnKey::Status, direction: SortDirection::Descending })
        );
    }

    #[test]
    fn test_view_toggle_keeps_rows() {
        let t0 = Instant::now();
        let mut d = make_dashboard(t0);
        d.tick(t0 + DELAY);
        let before = d.lab_view();

        assert_eq!(d.toggle_view(), ViewMode::PatientView);
        assert_eq!(d.lab_view(), before);
        assert_eq!(d.columns()[1].label, "Your Result");
        assert!(!d.set_view(ViewMode::PatientView));
    }

    // ── 5. derived panels ─────────────────────────────────────────────────────

    #[test]
    fn test_trend_summary_and_suggestions() {
        let t0 = Instant::now();
        let d = make_dashboard(t0);

        let t = d.trend().unwrap();
        assert_eq!(trend::latest_color(t), trend::TrendColor::Critical);
        assert!(d.trend_assessment().is_some());

        let summary = d.summary();
        assert_eq!(summary.cards.len(), 2);
        assert_eq!(summary.cards[0].title, "Glucose Level");

        let ids: Vec<&str> = d.suggestions().iter().map(|s| s.id).collect();
        assert_eq!(ids, ["glucose-borderline", "hba1c-borderline", "regular-monitoring"]);

        assert_eq!(d.stats().total, 4);
    }

    #[test]
    fn test_lab_view_serialises_with_state_tag() {
        let t0 = Instant::now();
        let mut d = make_dashboard(t0);
        assert_eq!(
            serde_json::to_value(d.lab_view()).unwrap(),
            serde_json::json!({ "state": "loading" })
        );

        d.tick(t0 + Duration::from_millis(400));
        let ready = serde_json::to_value(d.lab_view()).unwrap();
        assert_eq!(ready["state"], "ready");
        assert_eq!(ready["rows"].as_array().map(Vec::len), Some(2));
        assert_eq!(ready["rows"][0]["patient"], "Ada Park");
    }
}
