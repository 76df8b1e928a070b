//! src/timeline/axis.rs
//!
//! Padded y-axis domain over the rows actually rendered.

use super::types::MergedRow;

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Compute a padded `(min, max)` domain from the non-null values of the
/// visible columns.
///
/// Padding is 15% of the value range but at least 1, so near-flat series do
/// not hug the chart edges. The lower bound is clamped at 0. Returns `None`
/// when no usable value exists, deferring to the caller's default range.
pub fn axis_domain(rows: &[MergedRow], column_ids: &[String]) -> Option<(f64, f64)> {
    let mut mn = f64::INFINITY;
    let mut mx = f64::NEG_INFINITY;
    for row in rows {
        for id in column_ids {
            if let Some(Some(v)) = row.columns.get(id) {
                if v.is_finite() {
                    mn = mn.min(*v);
                    mx = mx.max(*v);
                }
            }
        }
    }
    if !mn.is_finite() || !mx.is_finite() {
        return None;
    }
    let pad = (0.15 * (mx - mn)).max(1.0);
    Some((round1((mn - pad).max(0.0)), round1(mx + pad)))
}
