//! The upload boundary: one synchronous pass through every stage.
//!
//! Parse, clean, geocode, aggregate, categorize, then build the chart specs.
//! No state survives between uploads; processing the same payload twice
//! yields the same dashboard.

use serde::Serialize;
use tracing::{info, warn};

use crate::analyzers::aggregate::location_means;
use crate::analyzers::categorize::categorize;
use crate::analyzers::describe::{ColumnSummary, describe};
use crate::charts::{self, BarSpec, CategoryBarSpec, ScatterMapSpec, TrendLineSpec};
use crate::cleaner::clean;
use crate::error::UploadError;
use crate::geocoder::geocode;
use crate::parser::parse_upload;

/// One upload: the raw data-URL payload plus the uploaded file's name.
///
/// This is the whole per-request context; it holds no cross-request mutable
/// state.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub contents: String,
    pub filename: String,
}

/// Everything the dashboard renders for one upload.
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub summary: Vec<ColumnSummary>,
    pub map: ScatterMapSpec,
    pub trend: TrendLineSpec,
    pub location_bar: BarSpec,
    pub congestion_bar: CategoryBarSpec,
}

/// Runs the full pipeline for one upload.
///
/// # Errors
///
/// Returns [`UploadError`] when the payload cannot be parsed or a chart
/// cannot be built. Never a partial dashboard.
#[tracing::instrument(skip(request), fields(filename = %request.filename))]
pub fn process_upload(request: &UploadRequest) -> Result<Dashboard, UploadError> {
    let raw = parse_upload(&request.contents, &request.filename)?;
    let table = geocode(clean(raw));

    info!(rows = table.len(), "Table cleaned and geocoded");

    let summary = describe(&table);
    let means = location_means(&table);
    let stats = categorize(&table);

    Ok(Dashboard {
        summary,
        map: charts::scatter_map(&table)?,
        trend: charts::trend_line(&table)?,
        location_bar: charts::location_bar(&means)?,
        congestion_bar: charts::category_bar(&stats)?,
    })
}

/// Boundary recovery: a dashboard on success, a human-readable message on
/// failure. Nothing here is fatal to the process.
pub fn render_upload(request: &UploadRequest) -> Result<Dashboard, String> {
    process_upload(request).map_err(|e| {
        warn!(error = %e, "Upload rejected");
        e.user_message()
    })
}
