//! src/timeline/pipeline.rs
//!
//! Entry point composing the pipeline: rank and bound the entities, merge
//! their series, coarsen to weeks when the timeline is dense, derive the
//! y-domain.
//!
//! `prepare` is pure: identical inputs produce identical output, so callers
//! may re-run it on every refresh or memoize it freely.

use serde::Serialize;

use super::axis::axis_domain;
use super::config::PipelineConfig;
use super::merge::merge_series;
use super::select::select_top;
use super::types::{AggregationResult, EntitySeries, Granularity, MergedRow};
use super::week::aggregate_weekly;

/// Chart-ready output: one row per day or ISO week, one column per visible
/// entity, plus the metadata the rendering layer needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub rows: Vec<MergedRow>,
    pub granularity: Granularity,
    pub hidden_count: usize,
    /// Padded y-range for axis scaling; `None` defers to the caller default.
    pub y_domain: Option<(f64, f64)>,
    /// Visible entities in rank order, `(id, display_name, current_value)`.
    pub legend: Vec<(String, String, f64)>,
}

/// Coarsen merged daily rows to weekly buckets when the timeline is denser
/// than the configured threshold; otherwise pass them through.
pub fn resample(
    daily: Vec<MergedRow>,
    column_ids: &[String],
    cfg: &PipelineConfig,
) -> AggregationResult {
    let granularity = cfg.granularity_for(daily.len());
    let rows = match granularity {
        Granularity::Daily => daily,
        Granularity::Weekly => aggregate_weekly(&daily, column_ids),
    };
    AggregationResult { rows, granularity }
}

/// Run the full pipeline over caller-supplied series.
pub fn prepare(entities: Vec<EntitySeries>, cfg: &PipelineConfig) -> ChartData {
    let selection = select_top(entities, cfg.max_visible, cfg.show_all);
    let column_ids: Vec<String> = selection.visible.iter().map(|e| e.id.clone()).collect();

    let daily = merge_series(&selection.visible);
    let AggregationResult { rows, granularity } = resample(daily, &column_ids, cfg);

    let y_domain = axis_domain(&rows, &column_ids);
    let legend = selection
        .visible
        .iter()
        .map(|e| (e.id.clone(), e.display_name.clone(), e.current_value))
        .collect();

    ChartData {
        rows,
        granularity,
        hidden_count: selection.hidden_count,
        y_domain,
        legend,
    }
}
