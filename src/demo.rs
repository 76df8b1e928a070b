//! src/demo.rs
//!
//! Sample data generator so the dashboard runs without an input file.
//!
//! Produces a handful of entities with sparse, differently-dated daily
//! histories over ~90 days, long enough to trigger weekly coarsening.

use chrono::{Duration, Utc};
use rand::Rng;

use metricboard::{EntitySeries, TimelinePoint};

const NAMES: [&str; 8] = [
    "Main site",
    "Landing A",
    "Landing B",
    "Blog",
    "Mobile app",
    "Partner portal",
    "Docs",
    "Status page",
];

/// Generate sparse sample series: each entity reports on roughly 80% of
/// days, with a random-walk value around its own base level.
pub fn sample_entities() -> Vec<EntitySeries> {
    let mut rng = rand::rng();
    let start = Utc::now().date_naive() - Duration::days(89);

    NAMES
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let base = 50.0 + 120.0 * idx as f64;
            let mut level = base;
            let mut points = Vec::new();
            for day in 0..90 {
                level = (level + rng.random_range(-15.0..15.0)).max(0.0);
                // sparse: some days simply have no observation
                if rng.random_bool(0.8) {
                    points.push(TimelinePoint::new(
                        start + Duration::days(day),
                        Some(level.round()),
                    ));
                }
            }
            let current_value = points.last().and_then(|p| p.value).unwrap_or(base);
            EntitySeries {
                id: format!("entity_{idx}"),
                display_name: name.to_string(),
                current_value,
                points,
            }
        })
        .collect()
}
