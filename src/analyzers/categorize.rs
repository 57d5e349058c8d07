//! Congestion categorization over the head of the table.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::analyzers::utility::median;
use crate::records::GeoRecord;

/// How many leading rows feed the congestion categories.
pub const SAMPLE_ROWS: usize = 50;

/// Congestion level assigned to a location relative to the sampled window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    High,
    Medium,
    Low,
}

impl Category {
    /// Bar color used by the categorized chart.
    pub fn color(self) -> &'static str {
        match self {
            Category::High => "red",
            Category::Medium => "yellow",
            Category::Low => "green",
        }
    }
}

/// Peak statistics and assigned category for one location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationStat {
    pub location: String,
    pub max_vehicle_count: f64,
    pub median_vehicle_count: f64,
    pub category: Category,
}

/// Categorizes locations from the first [`SAMPLE_ROWS`] rows of the table
/// (all rows when the table is shorter), in source order.
///
/// Each location in the window gets the max and median of its vehicle
/// counts. `High` goes to every location whose max equals the largest of the
/// per-location maxima, `Medium` to those whose max equals the median of the
/// maxima, and the rest are `Low`.
///
/// The `Medium` rule compares with exact floating-point equality on purpose:
/// with an even number of locations the median interpolates between two
/// maxima and can match none of them, leaving only `High` and `Low` labels.
/// This reproduces the reference dashboard's behavior and is kept as-is.
pub fn categorize(rows: &[GeoRecord]) -> Vec<LocationStat> {
    let window = &rows[..rows.len().min(SAMPLE_ROWS)];

    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for row in window {
        if let (Some(location), Some(count)) = (row.location.as_deref(), row.vehicle_count) {
            groups.entry(location).or_default().push(f64::from(count));
        }
    }

    let stats: Vec<(String, f64, f64)> = groups
        .into_iter()
        .map(|(location, values)| {
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            (location.to_string(), max, median(&values))
        })
        .collect();

    if stats.is_empty() {
        return Vec::new();
    }

    let maxima: Vec<f64> = stats.iter().map(|(_, max, _)| *max).collect();
    let max_value = maxima.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let median_value = median(&maxima);

    stats
        .into_iter()
        .map(|(location, max, med)| {
            let category = if max == max_value {
                Category::High
            } else if max == median_value {
                Category::Medium
            } else {
                Category::Low
            };

            LocationStat {
                location,
                max_vehicle_count: max,
                median_vehicle_count: med,
                category,
            }
        })
        .collect()
}
