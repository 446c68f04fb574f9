//! Dashboard configuration schema and loaders.
//!
//! `DashboardConfig` is deserialized from TOML. Every field has a default,
//! so an empty document yields the stock dashboard:
//!
//! ```toml
//! initial_view = "clinician-view"
//! refresh_delay_ms = 300
//! key_biomarkers = ["Glucose", "HbA1c", "Total Cholesterol", "Blood Pressure", "Weight"]
//! max_suggestions = 4
//! ```

use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};
use tracing::debug;

use vitalview_contracts::{
    error::{VitalError, VitalResult},
    view::ViewMode,
};

/// Biomarkers shown on the summary cards, in display order.
pub const DEFAULT_KEY_BIOMARKERS: [&str; 5] = [
    "Glucose",
    "HbA1c",
    "Total Cholesterol",
    "Blood Pressure",
    "Weight",
];

/// Tunables for a dashboard session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// View mode the session starts in.
    pub initial_view: ViewMode,

    /// Patient selected at start. `None` selects the first patient in the
    /// directory; an id that does not exist falls back the same way.
    pub initial_patient_id: Option<String>,

    /// How long a lab projection shows its loading placeholder before the
    /// rows become visible.
    pub refresh_delay_ms: u64,

    /// Test names summarised on the patient summary cards.
    pub key_biomarkers: Vec<String>,

    /// Upper bound on health suggestions shown at once.
    pub max_suggestions: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            initial_view: ViewMode::ClinicianView,
            initial_patient_id: None,
            refresh_delay_ms: 300,
            key_biomarkers: DEFAULT_KEY_BIOMARKERS.iter().map(|s| s.to_string()).collect(),
            max_suggestions: 4,
        }
    }
}

impl DashboardConfig {
    /// Parse `s` as TOML and build a `DashboardConfig`.
    ///
    /// Returns `VitalError::ConfigError` if the TOML is malformed, names an
    /// unknown field, or fails validation.
    pub fn from_toml_str(s: &str) -> VitalResult<Self> {
        let config: DashboardConfig = toml::from_str(s).map_err(|e| VitalError::ConfigError {
            reason: format!("failed to parse dashboard TOML: {}", e),
        })?;
        config.validate()?;
        debug!(
            initial_view = %config.initial_view,
            refresh_delay_ms = config.refresh_delay_ms,
            "dashboard config loaded"
        );
        Ok(config)
    }

    /// Read the file at `path` and parse it as dashboard configuration.
    pub fn from_file(path: &Path) -> VitalResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| VitalError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// The refresh delay as a `Duration`.
    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }

    fn validate(&self) -> VitalResult<()> {
        if self.key_biomarkers.iter().any(|b| b.trim().is_empty()) {
            return Err(VitalError::ConfigError {
                reason: "key_biomarkers must not contain blank names".to_string(),
            });
        }
        if self.max_suggestions == 0 {
            return Err(VitalError::ConfigError {
                reason: "max_suggestions must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
