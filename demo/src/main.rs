//! VitalView — Demo CLI
//!
//! Queries the mock clinical data through the dashboard core and prints the
//! same projections the dashboard renders, as text or JSON.
//!
//! Usage:
//!   cargo run -p demo -- patients
//!   cargo run -p demo -- labs --patient "Sarah Mitchell" --sort status
//!   cargo run -p demo -- trend --patient "David McDonald"
//!   cargo run -p demo -- summary --patient "Linda Johnson" --view patient
//!   cargo run -p demo -- --json stats --patient "Maria Rodriguez"

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use vitalview_config::DashboardConfig;
use vitalview_contracts::{
    date::display_date,
    error::{VitalError, VitalResult},
    lab::LabResult,
    patient::Patient,
    view::ViewMode,
};
use vitalview_core::{
    badge,
    columns::{self, ColumnKey, SortDirection},
    projector::{self, LabResultsFilter},
    stats, suggestions,
    summary::PatientSummary,
    trend, PatientDirectory,
};
use vitalview_mock::MockDataSource;

// ── CLI definition ────────────────────────────────────────────────────────────

/// VitalView — healthcare dashboard core over mock clinical data.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "VitalView dashboard projections over mock clinical data",
    long_about = "Prints the patient list, lab tables, trends, summaries and\n\
                  suggestions that the VitalView dashboard renders."
)]
struct Cli {
    /// Dashboard configuration file (TOML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List patients in picker order.
    Patients,
    /// Lab results for one patient on one date.
    Labs {
        #[arg(long)]
        patient: String,
        /// `YYYY-MM-DD`. Defaults to the most recent date.
        #[arg(long)]
        date: Option<String>,
        /// Column to sort by: test, value, status, date.
        #[arg(long)]
        sort: Option<String>,
        /// Sort descending.
        #[arg(long)]
        desc: bool,
        /// patient-view or clinician-view.
        #[arg(long)]
        view: Option<String>,
        /// Case-insensitive search over test name, value and unit.
        #[arg(long)]
        search: Option<String>,
        /// Only rows whose status is not normal.
        #[arg(long)]
        flagged: bool,
    },
    /// Biomarker trend for one patient.
    Trend {
        #[arg(long)]
        patient: String,
    },
    /// Header, summary cards and suggestions for one patient.
    Summary {
        #[arg(long)]
        patient: String,
        #[arg(long)]
        view: Option<String>,
    },
    /// Classify a status token into a badge variant.
    Classify { token: String },
    /// Aggregate lab counts for one patient.
    Stats {
        #[arg(long)]
        patient: String,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> VitalResult<()> {
    let config = match &cli.config {
        Some(path) => DashboardConfig::from_file(path)?,
        None => DashboardConfig::default(),
    };
    let directory = PatientDirectory::load(&MockDataSource)?;
    debug!(
        patients = directory.patients().len(),
        rows = directory.lab_results().len(),
        "mock directory loaded"
    );
    let out = Output { json: cli.json };

    match cli.command {
        Command::Patients => cmd_patients(&out, &directory),
        Command::Labs { patient, date, sort, desc, view, search, flagged } => {
            let view = parse_view(view.as_deref(), &config)?;
            let sort = sort.map(|s| s.parse::<ColumnKey>()).transpose()?;
            let direction = if desc { SortDirection::Descending } else { SortDirection::Ascending };
            let filter = LabResultsFilter { flagged_only: flagged, search, ..Default::default() };
            cmd_labs(&out, &directory, &patient, date, sort.map(|c| (c, direction)), view, &filter)
        }
        Command::Trend { patient } => cmd_trend(&out, &directory, &patient),
        Command::Summary { patient, view } => {
            let view = parse_view(view.as_deref(), &config)?;
            cmd_summary(&out, &directory, &config, &patient, view)
        }
        Command::Classify { token } => cmd_classify(&out, &token),
        Command::Stats { patient } => cmd_stats(&out, &directory, &patient),
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

struct Output {
    json: bool,
}

impl Output {
    /// Print `value` as JSON, or run `text` for the human-readable form.
    fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce()) -> VitalResult<()> {
        if self.json {
            let s = serde_json::to_string_pretty(value).map_err(|e| VitalError::Serialization {
                reason: e.to_string(),
            })?;
            println!("{}", s);
        } else {
            text();
        }
        Ok(())
    }
}

fn parse_view(arg: Option<&str>, config: &DashboardConfig) -> VitalResult<ViewMode> {
    match arg {
        Some(s) => s.parse(),
        None => Ok(config.initial_view),
    }
}

fn find_patient<'a>(directory: &'a PatientDirectory, name: &str) -> VitalResult<&'a Patient> {
    directory
        .find_by_name(name)
        .or_else(|| directory.find_by_id(name))
        .ok_or_else(|| VitalError::UnknownPatient {
            name: name.to_string(),
        })
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn cmd_patients(out: &Output, directory: &PatientDirectory) -> VitalResult<()> {
    out.emit(&directory.patients(), || {
        for p in directory.patients() {
            let alerts = p.alerts.iter().filter(|a| !a.acknowledged).count();
            println!(
                "{:<6} {:<28} {:>3}  {:<7} {:<18} alerts: {}",
                p.id, p.name, p.age, p.gender, p.condition, alerts
            );
        }
    })
}

#[derive(Serialize)]
struct LabsReport<'a> {
    patient: &'a str,
    view: ViewMode,
    date: String,
    available_dates: Vec<String>,
    rows: Vec<LabResult>,
}

fn cmd_labs(
    out: &Output,
    directory: &PatientDirectory,
    patient: &str,
    date: Option<String>,
    sort: Option<(ColumnKey, SortDirection)>,
    view: ViewMode,
    filter: &LabResultsFilter,
) -> VitalResult<()> {
    let patient = find_patient(directory, patient)?;
    let available_dates = projector::available_dates(directory, &patient.name);
    let date = date
        .or_else(|| available_dates.first().cloned())
        .unwrap_or_default();

    let mut rows = projector::project(directory, &patient.name, &date);
    rows = projector::filter(&rows, filter);
    if let Some((column, direction)) = sort {
        if !columns::find_column(view, column).is_some_and(|c| c.sortable) {
            return Err(VitalError::UnsortableColumn {
                column: column.to_string(),
                view: view.to_string(),
            });
        }
        rows = projector::sort(&rows, column, direction);
    }

    let report = LabsReport { patient: &patient.name, view, date, available_dates, rows };
    out.emit(&report, || {
        println!("{} — {} ({})", report.patient, display_date(&report.date), report.view);
        if report.rows.is_empty() {
            println!("  no lab results");
            return;
        }
        let cols = columns::columns_for(view);
        let header: Vec<String> = cols.iter().map(|c| format!("{:<18}", c.label)).collect();
        println!("  {}", header.join(" "));
        for row in &report.rows {
            let cells: Vec<String> =
                cols.iter().map(|c| format!("{:<18}", c.render(row).label())).collect();
            println!("  {}", cells.join(" "));
        }
    })
}

fn cmd_trend(out: &Output, directory: &PatientDirectory, patient: &str) -> VitalResult<()> {
    let patient = find_patient(directory, patient)?;
    let Some(series) = trend::lookup(directory, &patient.name) else {
        return out.emit(&serde_json::Value::Null, || {
            println!("{}: no trend data", patient.name);
        });
    };
    let assessment = trend::assess(series);

    #[derive(Serialize)]
    struct TrendReport<'a> {
        biomarker: String,
        series: &'a vitalview_contracts::lab::TrendData,
        color: trend::TrendColor,
        assessment: trend::TrendAssessment,
    }

    let report = TrendReport {
        biomarker: trend::biomarker_name(&series.biomarker_id),
        series,
        color: trend::latest_color(series),
        assessment,
    };
    out.emit(&report, || {
        println!(
            "{} — {} {} {}",
            patient.name,
            report.biomarker,
            trend::direction_glyph(series.overall_trend).symbol(),
            series.overall_trend
        );
        if let Some(band) = trend::reference_band(series) {
            println!(
                "  reference: {}–{} {}",
                band.min.map(|v| v.to_string()).unwrap_or_default(),
                band.max.map(|v| v.to_string()).unwrap_or_default(),
                band.unit
            );
        }
        for p in &series.data_points {
            println!("  {:<12} {:>7} {}", display_date(&p.date), p.value, p.status);
        }
        if !assessment.agrees {
            println!("  note: points suggest {}", assessment.computed);
        }
    })
}

fn cmd_summary(
    out: &Output,
    directory: &PatientDirectory,
    config: &DashboardConfig,
    patient: &str,
    view: ViewMode,
) -> VitalResult<()> {
    let patient = find_patient(directory, patient)?;
    let view_config = vitalview_contracts::view::resolve(view);
    let summary =
        PatientSummary::build(directory, patient, view_config, &config.key_biomarkers);
    let advice = suggestions::for_patient(directory, &patient.name, config.max_suggestions);

    #[derive(Serialize)]
    struct SummaryReport<'a> {
        summary: &'a PatientSummary,
        suggestions: &'a [suggestions::HealthSuggestion],
    }

    out.emit(&SummaryReport { summary: &summary, suggestions: &advice }, || {
        let h = &summary.header;
        println!("{} ({})", h.title, h.subtitle);
        println!("  {}", h.condition);
        if let (Some(mrn), Some(dob)) = (&h.mrn, &h.date_of_birth) {
            println!("  MRN {}  DOB {}", mrn, dob);
        }
        for a in &h.alerts {
            println!("  [{}] {}", a.label, a.message);
        }
        println!();
        for card in &summary.cards {
            print!(
                "  {:<24} {:>8} {:<6} {:<9}",
                card.title, card.value, card.unit, card.status
            );
            if let Some(range) = &card.reference_range {
                print!(" normal: {}", range);
            }
            println!();
            if let Some(entry) = card.glossary {
                println!("      {}", entry.definition);
            }
        }
        if let Some(score) = summary.health_score {
            println!("  Health summary: {}/{} normal", score.normal, score.total);
        }
        println!();
        for s in &advice {
            println!("  [{}] {}: {}", s.badge().as_str(), s.title, s.description);
        }
    })
}

fn cmd_classify(out: &Output, token: &str) -> VitalResult<()> {
    let variant = badge::classify(token);
    out.emit(&variant, || println!("{} → {}", token, variant.as_str()))
}

fn cmd_stats(out: &Output, directory: &PatientDirectory, patient: &str) -> VitalResult<()> {
    let patient = find_patient(directory, patient)?;
    let s = stats::stats(directory, &patient.name);
    out.emit(&s, || {
        println!("{}: {} results", patient.name, s.total);
        println!(
            "  {} to {}",
            s.earliest_date.as_deref().map(display_date).unwrap_or_default(),
            s.latest_date.as_deref().map(display_date).unwrap_or_default()
        );
        println!("  flagged: {}  critical: {}", s.flagged_count, s.critical_count);
        for (status, n) in &s.by_status {
            println!("  {:<10} {}", status, n);
        }
        for (test, n) in &s.by_test {
            println!("  {:<18} {}", test, n);
        }
    })
}
