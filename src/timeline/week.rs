//! src/timeline/week.rs
//!
//! ISO-week bucketing: week identification, Monday labels, and null-aware
//! weekly averaging of merged daily rows.
//!
//! The week math is deliberately isolated in two small pure functions; the
//! year-boundary behavior (a week's year is the year containing its
//! Thursday) is the easiest part of this file to get wrong.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, IsoWeek, NaiveDate};

use super::types::MergedRow;

/// ISO-8601 week containing `date`.
///
/// Weeks start Monday; the week's year is the year containing its Thursday,
/// so e.g. 2021-01-01 belongs to 2020-W53.
pub fn week_key(date: NaiveDate) -> IsoWeek {
    date.iso_week()
}

/// Monday of the ISO week containing `date`.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Collapse merged daily rows into one row per ISO week, ascending.
///
/// Each weekly row is keyed by the week's Monday. For every column in
/// `column_ids` the weekly value is the arithmetic mean of the non-null,
/// finite daily values in that week, rounded to 2 decimal places; a week
/// with no usable values for a column yields `None`.
pub fn aggregate_weekly(rows: &[MergedRow], column_ids: &[String]) -> Vec<MergedRow> {
    struct Bucket<'a> {
        monday: NaiveDate,
        rows: Vec<&'a MergedRow>,
    }

    let mut buckets: BTreeMap<IsoWeek, Bucket<'_>> = BTreeMap::new();
    for row in rows {
        buckets
            .entry(week_key(row.key))
            .or_insert_with(|| Bucket {
                monday: monday_of(row.key),
                rows: Vec::new(),
            })
            .rows
            .push(row);
    }

    buckets
        .into_values()
        .map(|bucket| {
            let mut columns = BTreeMap::new();
            for id in column_ids {
                let values: Vec<f64> = bucket
                    .rows
                    .iter()
                    .filter_map(|r| r.columns.get(id).copied().flatten())
                    .filter(|v| v.is_finite())
                    .collect();
                let mean = if values.is_empty() {
                    None
                } else {
                    Some(round2(values.iter().sum::<f64>() / values.len() as f64))
                };
                columns.insert(id.clone(), mean);
            }
            MergedRow {
                key: bucket.monday,
                columns,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn row(d: &str, cols: &[(&str, Option<f64>)]) -> MergedRow {
        MergedRow {
            key: date(d),
            columns: cols.iter().map(|&(k, v)| (k.to_string(), v)).collect(),
        }
    }

    #[test]
    fn week_year_follows_the_thursday() {
        // Friday 2021-01-01 sits in the last week of 2020
        let w = week_key(date("2021-01-01"));
        assert_eq!((w.year(), w.week()), (2020, 53));
        // the following Monday starts 2021-W01
        let w = week_key(date("2021-01-04"));
        assert_eq!((w.year(), w.week()), (2021, 1));
        // Jan 1st can also lead its own year: 2024-01-01 is a Monday
        let w = week_key(date("2024-01-01"));
        assert_eq!((w.year(), w.week()), (2024, 1));
    }

    #[test]
    fn monday_of_any_weekday() {
        assert_eq!(monday_of(date("2024-03-14")), date("2024-03-11")); // Thursday
        assert_eq!(monday_of(date("2024-03-11")), date("2024-03-11")); // Monday itself
        assert_eq!(monday_of(date("2024-03-17")), date("2024-03-11")); // Sunday
        // year boundary: Friday 2021-01-01 -> Monday 2020-12-28
        assert_eq!(monday_of(date("2021-01-01")), date("2020-12-28"));
    }

    #[test]
    fn forty_days_make_six_weeks() {
        let start = date("2024-01-01"); // a Monday
        let rows: Vec<MergedRow> = (0..40)
            .map(|i| {
                MergedRow {
                    key: start + Duration::days(i),
                    columns: [("a".to_string(), Some(1.0))].into(),
                }
            })
            .collect();
        let weekly = aggregate_weekly(&rows, &["a".to_string()]);
        assert_eq!(weekly.len(), 6); // ceil(40 / 7), final week partial
        assert_eq!(weekly[0].key, date("2024-01-01"));
        assert_eq!(weekly[5].key, date("2024-02-05"));
    }

    #[test]
    fn mean_skips_nulls() {
        let rows = vec![
            row("2024-01-01", &[("a", Some(10.0))]),
            row("2024-01-02", &[("a", Some(20.0))]),
            row("2024-01-03", &[("a", None)]),
            row("2024-01-04", &[("a", Some(30.0))]),
        ];
        let weekly = aggregate_weekly(&rows, &["a".to_string()]);
        assert_eq!(weekly.len(), 1);
        assert_eq!(weekly[0].columns["a"], Some(20.0));
    }

    #[test]
    fn fully_null_week_stays_null() {
        let rows = vec![
            row("2024-01-01", &[("a", None), ("b", Some(4.0))]),
            row("2024-01-02", &[("a", None), ("b", Some(6.0))]),
        ];
        let weekly = aggregate_weekly(&rows, &["a".to_string(), "b".to_string()]);
        assert_eq!(weekly[0].columns["a"], None);
        assert_eq!(weekly[0].columns["b"], Some(5.0));
    }

    #[test]
    fn single_day_week_averages_to_itself() {
        let rows = vec![row("2024-01-10", &[("a", Some(7.5))])];
        let weekly = aggregate_weekly(&rows, &["a".to_string()]);
        assert_eq!(weekly.len(), 1);
        assert_eq!(weekly[0].key, date("2024-01-08"));
        assert_eq!(weekly[0].columns["a"], Some(7.5));
    }

    #[test]
    fn means_are_rounded_to_two_decimals() {
        let rows = vec![
            row("2024-01-01", &[("a", Some(1.0))]),
            row("2024-01-02", &[("a", Some(1.0))]),
            row("2024-01-03", &[("a", Some(2.0))]),
        ];
        let weekly = aggregate_weekly(&rows, &["a".to_string()]);
        assert_eq!(weekly[0].columns["a"], Some(1.33));
    }

    #[test]
    fn rebucketing_weekly_rows_is_identity() {
        let start = date("2024-01-01");
        let rows: Vec<MergedRow> = (0..40)
            .map(|i| {
                MergedRow {
                    key: start + Duration::days(i),
                    columns: [("a".to_string(), Some(i as f64))].into(),
                }
            })
            .collect();
        let ids = vec!["a".to_string()];
        let weekly = aggregate_weekly(&rows, &ids);
        // each weekly row is keyed by its Monday, so every bucket holds
        // exactly one row and averages a single value to itself
        let again = aggregate_weekly(&weekly, &ids);
        assert_eq!(weekly, again);
    }
}
