//! src/timeline/merge.rs
//!
//! Sparse merge of independently-dated series onto one shared timeline.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::types::{EntitySeries, MergedRow, TimelinePoint};

/// Merge the visible entities' series into one row per distinct date.
///
/// The row key set is the union of all dates appearing in any input series,
/// ascending. Each row carries a column for every entity: the entity's value
/// at that date when present, `None` otherwise.
pub fn merge_series(visible: &[EntitySeries]) -> Vec<MergedRow> {
    let mut by_date: BTreeMap<NaiveDate, BTreeMap<String, Option<f64>>> = BTreeMap::new();

    for entity in visible {
        for &TimelinePoint { date, value } in &entity.points {
            by_date
                .entry(date)
                .or_default()
                .insert(entity.id.clone(), value);
        }
    }

    // densify: every row carries every visible column, absent stays None
    by_date
        .into_iter()
        .map(|(key, mut columns)| {
            for entity in visible {
                columns.entry(entity.id.clone()).or_insert(None);
            }
            MergedRow { key, columns }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn series(id: &str, points: &[(&str, Option<f64>)]) -> EntitySeries {
        EntitySeries {
            id: id.to_string(),
            display_name: id.to_uppercase(),
            current_value: 0.0,
            points: points
                .iter()
                .map(|&(d, v)| TimelinePoint::new(date(d), v))
                .collect(),
        }
    }

    #[test]
    fn key_set_is_the_union_of_all_dates() {
        let rows = merge_series(&[
            series("a", &[("2024-03-01", Some(1.0)), ("2024-03-03", Some(2.0))]),
            series("b", &[("2024-03-02", Some(5.0)), ("2024-03-03", Some(6.0))]),
        ]);
        let keys: Vec<_> = rows.iter().map(|r| r.key).collect();
        assert_eq!(
            keys,
            vec![date("2024-03-01"), date("2024-03-02"), date("2024-03-03")]
        );
    }

    #[test]
    fn absent_dates_are_null_not_zero() {
        let rows = merge_series(&[
            series("a", &[("2024-03-01", Some(1.0))]),
            series("b", &[("2024-03-02", Some(5.0))]),
        ]);
        assert_eq!(rows[0].columns["a"], Some(1.0));
        assert_eq!(rows[0].columns["b"], None);
        assert_eq!(rows[1].columns["a"], None);
        assert_eq!(rows[1].columns["b"], Some(5.0));
    }

    #[test]
    fn every_row_carries_every_column() {
        let rows = merge_series(&[
            series("a", &[("2024-03-01", Some(1.0))]),
            series("b", &[]),
        ]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].columns.len(), 2);
        assert!(rows[0].columns.contains_key("b"));
    }

    #[test]
    fn explicit_null_points_survive_the_merge() {
        let rows = merge_series(&[series("a", &[("2024-03-01", None)])]);
        assert_eq!(rows[0].columns["a"], None);
    }

    #[test]
    fn no_entities_means_no_rows() {
        assert!(merge_series(&[]).is_empty());
    }
}
