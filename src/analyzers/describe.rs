//! Describe-style summary statistics over the numeric columns.

use serde::Serialize;

use crate::analyzers::utility::{mean, percentile, sample_stddev};
use crate::records::GeoRecord;

/// Summary row for one numeric column: non-missing count, mean, sample
/// standard deviation, min, linear-interpolated quartiles, max.
///
/// Statistics are `None` when the column has no values; `std` additionally
/// needs at least two.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub median: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

impl ColumnSummary {
    fn from_values(column: &str, mut values: Vec<f64>) -> Self {
        values.sort_by(f64::total_cmp);
        let count = values.len();

        if count == 0 {
            return ColumnSummary {
                column: column.to_string(),
                count: 0,
                mean: None,
                std: None,
                min: None,
                q25: None,
                median: None,
                q75: None,
                max: None,
            };
        }

        let avg = mean(&values);

        ColumnSummary {
            column: column.to_string(),
            count,
            mean: Some(avg),
            std: (count > 1).then(|| sample_stddev(&values, avg)),
            min: Some(values[0]),
            q25: Some(percentile(&values, 0.25)),
            median: Some(percentile(&values, 0.5)),
            q75: Some(percentile(&values, 0.75)),
            max: Some(values[count - 1]),
        }
    }
}

/// Computes describe statistics for every numeric column of the table,
/// skipping missing cells per column. Non-numeric columns are excluded.
pub fn describe(rows: &[GeoRecord]) -> Vec<ColumnSummary> {
    let vehicle_counts = rows
        .iter()
        .filter_map(|r| r.vehicle_count.map(f64::from))
        .collect();
    let location_codes = rows
        .iter()
        .filter_map(|r| r.location_code.map(f64::from))
        .collect();
    let latitudes = rows.iter().map(|r| r.latitude).collect();
    let longitudes = rows.iter().map(|r| r.longitude).collect();

    vec![
        ColumnSummary::from_values("vehicle_count", vehicle_counts),
        ColumnSummary::from_values("location_code", location_codes),
        ColumnSummary::from_values("latitude", latitudes),
        ColumnSummary::from_values("longitude", longitudes),
    ]
}
