//! src/timeline/input.rs
//!
//! Ingestion boundary: the raw interchange shape with ISO-8601 date strings,
//! parsed into typed series.
//!
//! A malformed point rejects that point only, never the whole series; the
//! caller gets the usable data plus the list of rejections.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::DataError;

use super::types::{EntitySeries, TimelinePoint};

/// One raw observation: ISO `YYYY-MM-DD` date plus an optional value.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPoint {
    pub date: String,
    pub value: Option<f64>,
}

/// One raw entity as supplied by the surrounding system.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntity {
    pub id: String,
    pub display_name: String,
    pub current_value: f64,
    pub points: Vec<RawPoint>,
}

/// Top-level interchange payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInput {
    pub entities: Vec<RawEntity>,
    /// Name of the metric already projected into each point's `value`.
    #[serde(default)]
    pub metric_key: Option<String>,
    #[serde(default)]
    pub max_visible: Option<usize>,
}

/// Parse raw entities into typed series.
///
/// Points with unparseable dates, and points breaking the strictly
/// increasing date order within a series, are excluded and reported.
/// Non-finite values are normalized to `None` by `TimelinePoint::new`.
pub fn parse_entities(raw: Vec<RawEntity>) -> (Vec<EntitySeries>, Vec<DataError>) {
    let mut series = Vec::with_capacity(raw.len());
    let mut errors = Vec::new();

    for entity in raw {
        let mut points: Vec<TimelinePoint> = Vec::with_capacity(entity.points.len());
        for point in &entity.points {
            let date = match point.date.parse::<NaiveDate>() {
                Ok(d) => d,
                Err(_) => {
                    errors.push(DataError::BadDate {
                        entity: entity.id.clone(),
                        raw: point.date.clone(),
                    });
                    continue;
                }
            };
            if points.last().is_some_and(|prev| date <= prev.date) {
                errors.push(DataError::OutOfOrder {
                    entity: entity.id.clone(),
                    raw: point.date.clone(),
                });
                continue;
            }
            points.push(TimelinePoint::new(date, point.value));
        }
        series.push(EntitySeries {
            id: entity.id,
            display_name: entity.display_name,
            current_value: entity.current_value,
            points,
        });
    }

    (series, errors)
}
