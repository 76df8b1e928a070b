//! src/timeline/select.rs
//!
//! Top-N selection: rank entities by their current metric value and bound
//! the visible set.

use super::types::{EntitySeries, Selection};

/// Ranking key: non-finite current values sort below every finite value, so
/// the comparison stays a total order and unusable entries rank last.
fn rank_key(e: &EntitySeries) -> f64 {
    if e.current_value.is_finite() {
        e.current_value
    } else {
        f64::NEG_INFINITY
    }
}

/// Rank `entities` by `current_value` descending and keep the first
/// `max_visible`.
///
/// The sort is stable, so ties keep their original input order. With
/// `show_all` the truncation is skipped but the ranking still applies.
/// An empty input yields an empty, non-hidden selection.
pub fn select_top(entities: Vec<EntitySeries>, max_visible: usize, show_all: bool) -> Selection {
    let mut ranked = entities;
    // stable sort, descending; ties keep input order
    ranked.sort_by(|a, b| rank_key(b).total_cmp(&rank_key(a)));

    if show_all || ranked.len() <= max_visible {
        return Selection {
            visible: ranked,
            hidden_count: 0,
        };
    }

    let hidden_count = ranked.len() - max_visible;
    ranked.truncate(max_visible);
    Selection {
        visible: ranked,
        hidden_count,
    }
}
