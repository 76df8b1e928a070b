//! src/app.rs
//!
//! Terminal dashboard for per-entity daily metric histories.
//!
//! Loads the interchange JSON given as the first CLI argument (or generates
//! sample data when none is given), runs the timeline pipeline, and renders
//! the prepared rows as a multi-series line chart.
//!
//! # Keyboard Controls
//!
//! - **a** — Toggle show-all mode (bypasses the visible-series cap).
//! - **[** / **]** — Shrink / grow the visible-series cap.
//! - **q** — Quit and restore terminal state.
//!
//! Every change re-runs the pipeline over the unchanged input; the pipeline
//! is pure, so this is cheap and deterministic.

use std::fs;
use std::time::Duration;

use color_eyre::eyre::WrapErr;

use metricboard::timeline::{RawInput, parse_entities, prepare};
use metricboard::{EntitySeries, PipelineConfig};

use crate::demo;
use crate::panels;

/// Everything the draw loop needs: the parsed input plus live tunables.
pub struct App {
    pub entities: Vec<EntitySeries>,
    pub metric_key: String,
    pub config: PipelineConfig,
}

/// Load entities from a JSON file in the interchange shape, reporting and
/// excluding bad points before the UI takes over the terminal.
fn load_from_file(path: &str) -> color_eyre::Result<App> {
    let text = fs::read_to_string(path).wrap_err_with(|| format!("reading {path}"))?;
    let input: RawInput =
        serde_json::from_str(&text).wrap_err_with(|| format!("parsing {path}"))?;

    let mut config = PipelineConfig::default();
    if let Some(max_visible) = input.max_visible {
        config.max_visible = max_visible.max(1);
    }
    let metric_key = input.metric_key.unwrap_or_else(|| "value".to_string());

    let (entities, errors) = parse_entities(input.entities);
    for err in &errors {
        eprintln!("skipped point: {err}");
    }
    println!(
        "Loaded {} entities from {} ({} bad points skipped)",
        entities.len(),
        path,
        errors.len()
    );

    Ok(App {
        entities,
        metric_key,
        config,
    })
}

pub fn run() -> color_eyre::Result<()> {
    let mut app = match std::env::args().nth(1) {
        Some(path) => load_from_file(&path)?,
        None => {
            println!("No input file given; generating sample data");
            App {
                entities: demo::sample_entities(),
                metric_key: "visits".to_string(),
                config: PipelineConfig::default(),
            }
        }
    };

    let mut terminal = ratatui::init();
    let frame_time = Duration::from_millis(100);
    let mut running = true;

    while running {
        let frame_start = std::time::Instant::now();

        let chart = prepare(app.entities.clone(), &app.config);

        terminal.draw(|f| {
            let chunks = ratatui::layout::Layout::default()
                .direction(ratatui::layout::Direction::Vertical)
                .constraints([
                    ratatui::layout::Constraint::Length(3),
                    ratatui::layout::Constraint::Min(10),
                    ratatui::layout::Constraint::Length(3),
                ])
                .split(f.area());

            panels::draw_title(f, chunks[0], &app.metric_key, &chart);

            let body = ratatui::layout::Layout::default()
                .direction(ratatui::layout::Direction::Horizontal)
                .constraints([
                    ratatui::layout::Constraint::Percentage(70),
                    ratatui::layout::Constraint::Percentage(30),
                ])
                .split(chunks[1]);
            panels::draw_chart(f, body[0], &chart);
            panels::draw_summary(f, body[1], &chart, &app.config);

            panels::draw_controls(f, chunks[2]);
        })?;

        // Keyboard controls
        while crossterm::event::poll(Duration::from_millis(0))? {
            if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                match key.code {
                    crossterm::event::KeyCode::Char('q') => running = false,
                    crossterm::event::KeyCode::Char('a') => {
                        app.config.show_all = !app.config.show_all;
                    }
                    crossterm::event::KeyCode::Char('[') => {
                        app.config.max_visible = app.config.max_visible.saturating_sub(1).max(1);
                    }
                    crossterm::event::KeyCode::Char(']') => {
                        app.config.max_visible += 1;
                    }
                    _ => {}
                }
            }
        }

        if !running {
            break;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            std::thread::sleep(frame_time - elapsed);
        }
    }

    ratatui::restore();
    Ok(())
}
