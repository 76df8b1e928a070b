//! src/lib.rs
//!
//! Timeline-preparation core: aligns per-entity daily metric series onto a
//! common timeline, coarsens to ISO weeks when the timeline grows too dense,
//! and bounds the number of series shown.
//!
//! The whole pipeline is pure and stateless; the terminal viewer in the
//! binary is just one consumer of [`timeline::prepare`].

pub mod error;
pub mod timeline;

pub use error::DataError;
pub use timeline::{
    AggregationResult, ChartData, EntitySeries, Granularity, MergedRow, PipelineConfig, Selection,
    TimelinePoint, prepare,
};
