//! src/panels.rs
//!
//! Drawing helpers for the dashboard: title bar, the multi-series chart,
//! the legend/summary panel, and the controls footer.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, Paragraph},
};

use metricboard::timeline::ChartData;
use metricboard::{Granularity, PipelineConfig};

/// Series colors, cycled when more entities are visible than colors exist.
const COLORS: [Color; 6] = [
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Yellow,
    Color::Cyan,
    Color::Magenta,
];

pub fn draw_title(f: &mut Frame<'_>, area: Rect, metric_key: &str, chart: &ChartData) {
    let granularity = match chart.granularity {
        Granularity::Daily => "daily",
        Granularity::Weekly => "weekly",
    };
    let text = format!("Metric: {}  ({} rows, {})", metric_key, chart.rows.len(), granularity);
    let par = Paragraph::new(text)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(par, area);
}

/// Render the prepared rows as one line dataset per visible entity.
///
/// Rows are plotted by index so daily and weekly timelines scale the same
/// way; null cells are simply absent from the dataset rather than drawn
/// as zero.
pub fn draw_chart(f: &mut Frame<'_>, area: Rect, chart: &ChartData) {
    // Keep the per-series point vectors alive until Chart::new() uses them
    let series_owned: Vec<(String, Color, Vec<(f64, f64)>)> = chart
        .legend
        .iter()
        .enumerate()
        .map(|(idx, (id, name, _))| {
            let points: Vec<(f64, f64)> = chart
                .rows
                .iter()
                .enumerate()
                .filter_map(|(x, row)| {
                    row.columns
                        .get(id)
                        .copied()
                        .flatten()
                        .map(|v| (x as f64, v))
                })
                .collect();
            (name.clone(), COLORS[idx % COLORS.len()], points)
        })
        .collect();

    let datasets: Vec<Dataset> = series_owned
        .iter()
        .map(|(name, color, points)| {
            Dataset::default()
                .name(name.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(ratatui::widgets::GraphType::Line)
                .style(Style::default().fg(*color))
                .data(points.as_slice())
        })
        .collect();

    let (ymin, ymax) = chart.y_domain.unwrap_or((0.0, 10.0));
    let xmax = chart.rows.len().saturating_sub(1).max(1) as f64;

    // x labels: first and last row keys
    let x_labels: Vec<String> = match (chart.rows.first(), chart.rows.last()) {
        (Some(first), Some(last)) => vec![
            first.key.format("%d %b").to_string(),
            last.key.format("%d %b").to_string(),
        ],
        _ => Vec::new(),
    };

    let mut y_labels: Vec<String> = Vec::with_capacity(5);
    let span = (ymax - ymin).max(1e-9);
    for i in 0..5 {
        let v = ymin + span * (i as f64) / 4.0;
        y_labels.push(format!("{:.1}", v));
    }

    let widget = Chart::new(datasets)
        .block(Block::default().title("Timeline").borders(Borders::ALL))
        .x_axis(Axis::default().bounds([0.0, xmax]).labels(x_labels))
        .y_axis(Axis::default().bounds([ymin, ymax]).labels(y_labels));

    f.render_widget(widget, area);
}

pub fn draw_summary(f: &mut Frame<'_>, area: Rect, chart: &ChartData, config: &PipelineConfig) {
    let mut lines: Vec<Line> = chart
        .legend
        .iter()
        .enumerate()
        .map(|(idx, (_, name, current))| {
            Line::from(vec![
                Span::styled(
                    format!("{name}: "),
                    Style::default().fg(COLORS[idx % COLORS.len()]),
                ),
                Span::raw(format!("{current:.1}")),
            ])
        })
        .collect();

    if chart.hidden_count > 0 {
        lines.push(Line::from(Span::styled(
            format!("(+{} hidden)", chart.hidden_count),
            Style::default().fg(Color::DarkGray),
        )));
    }
    let mode = if config.show_all {
        "show all".to_string()
    } else {
        format!("top {}", config.max_visible)
    };
    lines.push(Line::from(Span::raw(format!("mode: {mode}"))));

    let block = Block::default().title("Series").borders(Borders::ALL);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn draw_controls(f: &mut Frame<'_>, area: Rect) {
    let par = Paragraph::new("A=Show all  [=Fewer series  ]=More series  Q=Quit")
        .block(Block::default().title("Controls").borders(Borders::ALL));
    f.render_widget(par, area);
}
