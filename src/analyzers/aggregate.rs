//! Whole-table aggregation feeding the average-count bar chart.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::analyzers::utility::mean;
use crate::records::GeoRecord;

/// Mean vehicle count for one location over the entire table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationMean {
    pub location: String,
    pub mean_vehicle_count: f64,
}

/// Arithmetic mean of `vehicle_count` per distinct location over the whole
/// cleaned table. Rows missing either field are skipped. Output is sorted by
/// location name, so repeated runs over the same table are identical.
pub fn location_means(rows: &[GeoRecord]) -> Vec<LocationMean> {
    let mut series: BTreeMap<&str, Vec<f64>> = BTreeMap::new();

    for row in rows {
        if let (Some(location), Some(count)) = (row.location.as_deref(), row.vehicle_count) {
            series.entry(location).or_default().push(f64::from(count));
        }
    }

    series
        .into_iter()
        .map(|(location, values)| LocationMean {
            location: location.to_string(),
            mean_vehicle_count: mean(&values),
        })
        .collect()
}
