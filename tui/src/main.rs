//! VitalView — interactive Ratatui dashboard
//!
//! Layout:
//!   ┌─── header ──────────────────────────────────────────────────────────┐
//!   │  VitalView   [Patient View]  [Clinician View]                       │
//!   ├─── patients ───┬─── patient header / summary cards ─────────────────┤
//!   │  Sarah …       ├─── lab results (date, sortable columns) ───────────┤
//!   │  David …       ├─── trend chart ──────────────┬─── suggestions ─────┤
//!   ├────────────────┴──────────────────────────────┴─────────────────────┤
//!   │  footer (key bindings)                                              │
//!   └─────────────────────────────────────────────────────────────────────┘
//!
//! Usage: `vitalview-tui [CONFIG.toml]`

use std::{
    io,
    path::Path,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Axis, Block, Borders, Cell, Chart, Dataset, GraphType, List, ListItem, Paragraph, Row,
        Table, Wrap,
    },
    Frame, Terminal,
};

use vitalview_config::DashboardConfig;
use vitalview_contracts::{
    date::{axis_label, display_date},
    error::VitalResult,
    lab::TrendData,
    view::ViewMode,
};
use vitalview_core::{
    badge::BadgeVariant,
    columns::{DisplayValue, SortDirection},
    summary::PatientSummary,
    trend::{self, TrendColor},
    Dashboard, LabView,
};
use vitalview_mock::MockDataSource;

/// Poll interval while a lab projection is pending.
const TICK_MS: u64 = 50;
/// Poll interval when idle.
const IDLE_MS: u64 = 200;

// ── App state ─────────────────────────────────────────────────────────────────

struct App {
    dashboard: Dashboard,
    quit: bool,
}

impl App {
    fn new(dashboard: Dashboard) -> Self {
        Self { dashboard, quit: false }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers, now: Instant) {
        let d = &mut self.dashboard;
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => self.quit = true,

            // Patient picker.
            KeyCode::Up | KeyCode::Char('k') => d.step_patient(-1, now),
            KeyCode::Down | KeyCode::Char('j') => d.step_patient(1, now),

            // Dates are newest first: left is newer, right is older.
            KeyCode::Left | KeyCode::Char('h') => d.step_date(-1, now),
            KeyCode::Right | KeyCode::Char('l') => d.step_date(1, now),

            KeyCode::Char('v') | KeyCode::Tab => {
                d.toggle_view();
            }

            // Column headers are numbered from 1.
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(column) = d.columns().get(index) {
                    d.toggle_sort(column.key);
                }
            }
            KeyCode::Char('0') => d.clear_sort(),

            _ => {}
        }
    }

    fn poll_timeout(&self) -> Duration {
        if self.dashboard.is_loading() {
            Duration::from_millis(TICK_MS)
        } else {
            Duration::from_millis(IDLE_MS)
        }
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn ui(f: &mut Frame, app: &App) {
    let full = f.area();
    let summary = app.dashboard.summary();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(20),   // body
            Constraint::Length(3), // footer
        ])
        .split(full);

    render_header(f, outer[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(40)])
        .split(outer[1]);

    render_patients(f, body[0], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(summary.cards.len() as u16 + 7), // patient + cards
            Constraint::Min(8),                                 // lab table
            Constraint::Length(12),                             // trend + suggestions
        ])
        .split(body[1]);

    render_patient(f, right[0], app, &summary);
    render_labs(f, right[1], app);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(right[2]);

    render_trend(f, bottom[0], app);
    render_suggestions(f, bottom[1], app);
    render_footer(f, outer[2], app);
}

fn panel(title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let title_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let mut spans: Vec<Span> = vec![Span::styled("VitalView    ", title_style)];

    for mode in [ViewMode::PatientView, ViewMode::ClinicianView] {
        let label = match mode {
            ViewMode::PatientView => "Patient View",
            ViewMode::ClinicianView => "Clinician View",
        };
        let style = if app.dashboard.view() == mode {
            Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!(" {} ", label), style));
        spans.push(Span::raw("  "));
    }

    let header = Paragraph::new(Line::from(spans)).block(panel(String::new()));
    f.render_widget(header, area);
}

fn render_patients(f: &mut Frame, area: Rect, app: &App) {
    let selected = &app.dashboard.patient().id;
    let items: Vec<ListItem> = app
        .dashboard
        .patients()
        .iter()
        .map(|p| {
            let is_selected = p.id == *selected;
            let marker = if is_selected { "▸ " } else { "  " };
            let name_style = if is_selected {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let mut spans = vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(truncate(&p.name, 24), name_style),
            ];
            if p.alerts.iter().any(|a| !a.acknowledged) {
                spans.push(Span::styled(" !", Style::default().fg(Color::Red)));
            }
            ListItem::new(vec![
                Line::from(spans),
                Line::from(Span::styled(
                    format!("    {} • {}", p.age, p.condition),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    f.render_widget(List::new(items).block(panel(" Patients ".to_string())), area);
}

fn render_patient(f: &mut Frame, area: Rect, app: &App, summary: &PatientSummary) {
    let h = &summary.header;
    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("[{}] ", h.initials), Style::default().fg(Color::Cyan)),
            Span::styled(h.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", h.subtitle), Style::default().fg(Color::Gray)),
        ]),
        Line::from(Span::raw(h.condition.clone())),
    ];

    if let (Some(mrn), Some(dob)) = (&h.mrn, &h.date_of_birth) {
        lines.push(Line::from(Span::styled(
            format!("MRN {}   DOB {}   {}", mrn, dob, h.phone),
            Style::default().fg(Color::DarkGray),
        )));
    }
    for alert in &h.alerts {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", alert.label),
                Style::default().fg(Color::Black).bg(Color::Red),
            ),
            Span::raw(format!(" {}", alert.message)),
        ]));
    }

    lines.push(Line::from(""));
    for card in &summary.cards {
        let glyph = trend::direction_glyph(card.direction).symbol();
        let mut spans = vec![
            Span::raw(format!("{:<26}", truncate(&card.title, 25))),
            Span::styled(
                format!("{:>8} {:<7}", card.value.to_string(), card.unit),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:<9}", card.status.as_str()),
                Style::default().fg(badge_color(card.badge)),
            ),
            Span::raw(format!(" {}", glyph)),
        ];
        if let Some(range) = &card.reference_range {
            spans.push(Span::styled(
                format!("  normal {}", range),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(spans));
    }
    if let Some(score) = summary.health_score {
        lines.push(Line::from(Span::styled(
            format!("{} of {} results in the normal range", score.normal, score.total),
            Style::default().fg(Color::Green),
        )));
    }

    let title = if app.dashboard.view_config().simplified_language {
        " Your Health "
    } else {
        " Patient "
    };
    let paragraph = Paragraph::new(lines)
        .block(panel(title.to_string()))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_labs(f: &mut Frame, area: Rect, app: &App) {
    let d = &app.dashboard;
    let title = if d.selected_date().is_empty() {
        " Lab Results ".to_string()
    } else {
        format!(" Lab Results ◂ {} ▸ ", display_date(d.selected_date()))
    };
    let block = panel(title);

    let rows = match d.lab_view() {
        LabView::Loading => {
            let p = Paragraph::new(Span::styled(
                "Loading lab results…",
                Style::default().fg(Color::Yellow),
            ))
            .block(block);
            f.render_widget(p, area);
            return;
        }
        LabView::NoDates => {
            let p = Paragraph::new("No lab results on file.").block(block);
            f.render_widget(p, area);
            return;
        }
        LabView::Ready(rows) => rows,
    };

    let columns = d.columns();
    let sort = d.sort_state();
    let header = Row::new(columns.iter().enumerate().map(|(i, c)| {
        let mut label = format!("{} {}", i + 1, c.label);
        match sort {
            Some(s) if s.column == c.key => label.push_str(match s.direction {
                SortDirection::Ascending => " ▲",
                SortDirection::Descending => " ▼",
            }),
            _ => {}
        }
        let style = if c.sortable {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        Cell::from(label).style(style)
    }));

    let body: Vec<Row> = rows
        .iter()
        .map(|row| {
            Row::new(columns.iter().map(|c| match c.render(row) {
                DisplayValue::Text { text } => Cell::from(text),
                DisplayValue::Badge { label, variant } => {
                    Cell::from(label).style(Style::default().fg(badge_color(variant)))
                }
            }))
        })
        .collect();

    let width = (100 / columns.len().max(1)) as u16;
    let widths = vec![Constraint::Percentage(width); columns.len()];
    let table = Table::new(body, widths).header(header).block(block);
    f.render_widget(table, area);
}

fn render_trend(f: &mut Frame, area: Rect, app: &App) {
    let Some(series) = app.dashboard.trend() else {
        let p = Paragraph::new("No trend data for this patient.")
            .block(panel(" Trend ".to_string()));
        f.render_widget(p, area);
        return;
    };

    let mut title = format!(
        " {} {} {} ",
        trend::biomarker_name(&series.biomarker_id),
        trend::direction_glyph(series.overall_trend).symbol(),
        series.overall_trend
    );
    if let Some(a) = app.dashboard.trend_assessment() {
        if !a.agrees {
            title.push_str(&format!("(points suggest {}) ", a.computed));
        }
    }

    let points: Vec<(f64, f64)> = series
        .data_points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.value))
        .collect();
    let x_max = (points.len().max(2) - 1) as f64;
    let (y_min, y_max) = y_bounds(series);

    let band = trend::reference_band(series);
    let band_lines: Vec<[(f64, f64); 2]> = band
        .iter()
        .flat_map(|b| [b.min, b.max])
        .flatten()
        .map(|v| [(0.0, v), (x_max, v)])
        .collect();

    let band_style = Style::default().fg(Color::DarkGray);
    let mut datasets: Vec<Dataset> = band_lines
        .iter()
        .map(|line| {
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(band_style)
                .data(line)
        })
        .collect();
    datasets.push(
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(trend_color(trend::latest_color(series))))
            .data(&points),
    );

    let x_labels: Vec<String> = [series.data_points.first(), series.data_points.last()]
        .into_iter()
        .flatten()
        .map(|p| axis_label(&p.date))
        .collect();
    let unit = band.map(|b| b.unit.as_str()).unwrap_or("");

    let chart = Chart::new(datasets)
        .block(panel(title))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(unit.to_string())
                .style(Style::default().fg(Color::Gray))
                .bounds([y_min, y_max])
                .labels(vec![format!("{:.1}", y_min), format!("{:.1}", y_max)]),
        );
    f.render_widget(chart, area);
}

fn render_suggestions(f: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();
    for s in app.dashboard.suggestions() {
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(badge_color(s.badge()))),
            Span::styled(s.title, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", s.description),
            Style::default().fg(Color::Gray),
        )));
    }
    if lines.is_empty() {
        lines.push(Line::from("No suggestions."));
    }

    let paragraph = Paragraph::new(lines)
        .block(panel(" Suggestions ".to_string()))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let key = Style::default().fg(Color::Cyan);
    let mut spans: Vec<Span> = vec![
        Span::styled(" [↑↓] ", key),
        Span::raw("Patient  "),
        Span::styled("[←→] ", key),
        Span::raw("Date  "),
        Span::styled("[v] ", key),
        Span::raw("View  "),
        Span::styled(format!("[1-{}] ", app.dashboard.columns().len()), key),
        Span::raw("Sort  "),
        Span::styled("[0] ", key),
        Span::raw("Unsort  "),
    ];
    if app.dashboard.is_loading() {
        spans.push(Span::styled("loading…  ", Style::default().fg(Color::Yellow)));
    }
    spans.push(Span::styled("[q] ", key));
    spans.push(Span::raw("Quit"));

    let footer = Paragraph::new(Line::from(spans)).block(panel(String::new()));
    f.render_widget(footer, area);
}

// ── Utility helpers ───────────────────────────────────────────────────────────

fn badge_color(variant: BadgeVariant) -> Color {
    match variant {
        BadgeVariant::Critical => Color::Red,
        BadgeVariant::Warning => Color::Yellow,
        BadgeVariant::Normal => Color::Green,
        BadgeVariant::Secondary => Color::Gray,
        BadgeVariant::Primary => Color::Cyan,
    }
}

fn trend_color(color: TrendColor) -> Color {
    match color {
        TrendColor::Critical => Color::Red,
        TrendColor::Warning => Color::Yellow,
        TrendColor::Normal => Color::Green,
        TrendColor::Default => Color::Blue,
    }
}

/// Y-axis bounds covering the points and the reference band, padded by 10%.
fn y_bounds(series: &TrendData) -> (f64, f64) {
    let band = trend::reference_band(series);
    let values = series
        .data_points
        .iter()
        .map(|p| p.value)
        .chain(band.and_then(|b| b.min))
        .chain(band.and_then(|b| b.max));

    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() {
        return (0.0, 1.0);
    }
    let pad = ((hi - lo) * 0.1).max(1.0);
    (lo - pad, hi + pad)
}

/// Truncate a string to at most `max` chars, appending "…" if truncated.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

// ── Terminal setup / teardown ─────────────────────────────────────────────────

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

fn load_dashboard(config_path: Option<&Path>) -> VitalResult<Dashboard> {
    let config = match config_path {
        Some(path) => DashboardConfig::from_file(path)?,
        None => DashboardConfig::default(),
    };
    Dashboard::load(&MockDataSource, config, Instant::now())
}

// ── Main event loop ───────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    let config_path = std::env::args().nth(1);
    let dashboard = match load_dashboard(config_path.as_deref().map(Path::new)) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("vitalview-tui: {}", e);
            std::process::exit(1);
        }
    };

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let mut app = App::new(dashboard);

    while !app.quit {
        terminal.draw(|f| ui(f, &app))?;

        if event::poll(app.poll_timeout())? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code, key.modifiers, Instant::now());
                }
            }
        }

        // Deliver any projection whose delay has elapsed.
        app.dashboard.tick(Instant::now());
    }

    restore_terminal(&mut terminal)?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
