//! src/timeline.rs
//!
//! Top-level `timeline` module exposing the pipeline components and types.

pub mod axis;
pub mod config;
pub mod input;
pub mod merge;
pub mod pipeline;
pub mod select;
pub mod types;
pub mod week;

/// Re-exports
pub use config::PipelineConfig;
pub use input::{RawEntity, RawInput, RawPoint, parse_entities};
pub use pipeline::{ChartData, prepare, resample};
pub use select::select_top;
pub use types::{
    AggregationResult, EntitySeries, Granularity, MergedRow, Selection, TimelinePoint,
};
