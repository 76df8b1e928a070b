//! src/timeline/config.rs
//!
//! Configuration values for the timeline pipeline.
//!
//! Centralized tunables for the visible-series cap and the daily/weekly
//! switch so they can be adjusted (or injected in tests) in one place.

use super::types::Granularity;

#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Maximum number of series shown at once.
    pub max_visible: usize,

    /// Ignore `max_visible` and chart every entity (ranking still applies).
    pub show_all: bool,

    /// Row count above which daily rows are coarsened to ISO weeks.
    ///
    /// 35 daily rows keep week/month views readable; quarter/year views
    /// cross the threshold and coarsen automatically.
    pub weekly_threshold: usize,
}

impl PipelineConfig {
    /// Create a new `PipelineConfig`.
    pub fn new(max_visible: usize, show_all: bool, weekly_threshold: usize) -> Self {
        Self {
            max_visible,
            show_all,
            weekly_threshold,
        }
    }

    /// Decide the resolution for a merged timeline of `row_count` daily rows.
    pub fn granularity_for(&self, row_count: usize) -> Granularity {
        if row_count <= self.weekly_threshold {
            Granularity::Daily
        } else {
            Granularity::Weekly
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_visible: 6,
            show_all: false,
            weekly_threshold: 35,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn granularity_switches_exactly_at_threshold() {
        let cfg = PipelineConfig::default();
        assert_eq!(cfg.granularity_for(35), Granularity::Daily);
        assert_eq!(cfg.granularity_for(36), Granularity::Weekly);
    }

    #[test]
    fn granularity_threshold_is_injectable() {
        let cfg = PipelineConfig::new(6, false, 10);
        assert_eq!(cfg.granularity_for(10), Granularity::Daily);
        assert_eq!(cfg.granularity_for(11), Granularity::Weekly);
    }

    #[test]
    fn empty_timeline_stays_daily() {
        assert_eq!(
            PipelineConfig::default().granularity_for(0),
            Granularity::Daily
        );
    }
}
