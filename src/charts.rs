//! Serializable chart specifications for the dashboard front end.
//!
//! Each spec carries a data series plus the fixed styling the dashboard
//! uses, ready to serialize as JSON. The front end that draws them is a
//! separate concern.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::analyzers::aggregate::LocationMean;
use crate::analyzers::categorize::{Category, LocationStat};
use crate::error::GraphError;
use crate::records::GeoRecord;

/// Series name for rows whose location is missing.
const UNKNOWN_LOCATION: &str = "unknown";

/// One marker on the scatter map: position, size by vehicle count, colored
/// by location series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub size: Option<u32>,
    pub series: String,
}

/// Scatter map of traffic locations across the city.
#[derive(Debug, Serialize)]
pub struct ScatterMapSpec {
    pub title: &'static str,
    pub mapbox_style: &'static str,
    pub zoom: u8,
    pub height: u32,
    pub points: Vec<MapPoint>,
}

/// Builds the traffic-locations scatter map from the full table.
///
/// # Errors
///
/// Returns [`GraphError::NoRows`] when every row was dropped upstream.
pub fn scatter_map(rows: &[GeoRecord]) -> Result<ScatterMapSpec, GraphError> {
    if rows.is_empty() {
        return Err(GraphError::NoRows {
            chart: "traffic map",
        });
    }

    let points = rows
        .iter()
        .map(|row| MapPoint {
            latitude: row.latitude,
            longitude: row.longitude,
            size: row.vehicle_count,
            series: series_name(row),
        })
        .collect();

    Ok(ScatterMapSpec {
        title: "Traffic Locations",
        mapbox_style: "open-street-map",
        zoom: 10,
        height: 500,
        points,
    })
}

/// One sample on the time-series chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub timestamp: NaiveDateTime,
    pub vehicle_count: Option<u32>,
    pub series: String,
}

/// Vehicle counts over time, one line per location.
#[derive(Debug, Serialize)]
pub struct TrendLineSpec {
    pub title: &'static str,
    pub markers: bool,
    pub line_width: f64,
    pub hovermode: &'static str,
    pub height: u32,
    pub points: Vec<TrendPoint>,
}

/// Builds the traffic-trends line chart from the full table.
///
/// # Errors
///
/// Returns [`GraphError::NoRows`] when every row was dropped upstream.
pub fn trend_line(rows: &[GeoRecord]) -> Result<TrendLineSpec, GraphError> {
    if rows.is_empty() {
        return Err(GraphError::NoRows {
            chart: "traffic trend",
        });
    }

    let points = rows
        .iter()
        .map(|row| TrendPoint {
            timestamp: row.timestamp,
            vehicle_count: row.vehicle_count,
            series: series_name(row),
        })
        .collect();

    Ok(TrendLineSpec {
        title: "Traffic Trends Over Time",
        markers: true,
        line_width: 2.5,
        hovermode: "x unified",
        height: 500,
        points,
    })
}

/// One vertical bar: location label and mean vehicle count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// Average vehicle count per location.
#[derive(Debug, Serialize)]
pub struct BarSpec {
    pub title: &'static str,
    pub text_auto: bool,
    pub bars: Vec<Bar>,
}

/// Builds the average-count bar chart from the per-location means.
///
/// # Errors
///
/// Returns [`GraphError::NoRows`] when there are no locations to plot.
pub fn location_bar(means: &[LocationMean]) -> Result<BarSpec, GraphError> {
    if means.is_empty() {
        return Err(GraphError::NoRows {
            chart: "average vehicle count",
        });
    }

    let bars = means
        .iter()
        .map(|m| Bar {
            label: m.location.clone(),
            value: m.mean_vehicle_count,
        })
        .collect();

    Ok(BarSpec {
        title: "Average Vehicle Count per Location",
        text_auto: true,
        bars,
    })
}

/// One horizontal bar: location, its peak count, and the congestion label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBar {
    pub location: String,
    pub max_vehicle_count: f64,
    pub category: Category,
    pub color: &'static str,
}

/// Locations grouped by congestion category, drawn horizontally.
#[derive(Debug, Serialize)]
pub struct CategoryBarSpec {
    pub title: &'static str,
    pub orientation: &'static str,
    pub bars: Vec<CategoryBar>,
}

/// Builds the congestion-category bar chart from the location stats.
///
/// # Errors
///
/// Returns [`GraphError::NoRows`] when there are no locations to plot.
pub fn category_bar(stats: &[LocationStat]) -> Result<CategoryBarSpec, GraphError> {
    if stats.is_empty() {
        return Err(GraphError::NoRows {
            chart: "location congestion",
        });
    }

    let bars = stats
        .iter()
        .map(|s| CategoryBar {
            location: s.location.clone(),
            max_vehicle_count: s.max_vehicle_count,
            category: s.category,
            color: s.category.color(),
        })
        .collect();

    Ok(CategoryBarSpec {
        title: "Location Congestion Areas",
        orientation: "h",
        bars,
    })
}

fn series_name(row: &GeoRecord) -> String {
    row.location
        .clone()
        .unwrap_or_else(|| UNKNOWN_LOCATION.to_string())
}
