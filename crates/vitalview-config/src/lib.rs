//! # vitalview-config
//!
//! TOML-driven configuration for a VitalView dashboard session.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use vitalview_config::DashboardConfig;
//!
//! let config = DashboardConfig::from_file(Path::new("vitalview.toml"))?;
//! // Pass `config` to `vitalview_core::Dashboard::new(...)`.
//! ```

pub mod settings;

pub use settings::{DashboardConfig, DEFAULT_KEY_BIOMARKERS};

// ── Tests ─────────────────────────────────────────────────────────────────────
