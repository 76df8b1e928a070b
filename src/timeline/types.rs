//! src/timeline/types.rs
//!
//! Shared data model for the timeline pipeline.
//!
//! All values here are plain immutable data: components take them by
//! reference and produce fresh outputs, nothing is mutated in place.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

/// One observation in an entity's daily history.
///
/// `value` is `None` when the day had no usable observation; non-finite
/// inputs are normalized to `None` before they reach any arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelinePoint {
    pub date: NaiveDate,
    pub value: Option<f64>,
}

impl TimelinePoint {
    pub fn new(date: NaiveDate, value: Option<f64>) -> Self {
        // treat NaN / infinities as absent so they never poison an average
        let value = value.filter(|v| v.is_finite());
        Self { date, value }
    }
}

/// One entity's history for the active metric.
///
/// Invariant: `points` is ordered by strictly increasing date (enforced at
/// the ingestion boundary). `current_value` is the most recent summary value
/// for the metric and is used only for ranking; it need not equal the last
/// point's value.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySeries {
    pub id: String,
    pub display_name: String,
    pub current_value: f64,
    pub points: Vec<TimelinePoint>,
}

/// Time resolution of emitted rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Daily,
    Weekly,
}

/// One chart row: a date key plus one column per visible entity.
///
/// In daily mode the key is the calendar day; in weekly mode it is the
/// Monday of the ISO week. Every row carries a column for every visible
/// entity id; a day/week with no observation for an entity stays `None`,
/// never `0` (zero-filling would corrupt averages downstream and present
/// "no data" as "no activity").
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedRow {
    pub key: NaiveDate,
    pub columns: BTreeMap<String, Option<f64>>,
}

/// Merged rows plus the resolution they were emitted at.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationResult {
    pub rows: Vec<MergedRow>,
    pub granularity: Granularity,
}

/// Outcome of top-N selection: the entities to chart, ranked, plus how many
/// were cut.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub visible: Vec<EntitySeries>,
    pub hidden_count: usize,
}
