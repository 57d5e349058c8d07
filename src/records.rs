//! Row types flowing through the ingestion pipeline.
//!
//! Each stage owns its output table outright: the parser produces
//! [`RawRecord`]s, the cleaner turns those into [`CleanRecord`]s, and the
//! geocoder annotates them into [`GeoRecord`]s. Tables are plain `Vec`s in
//! source row order.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single CSV row as uploaded, before any cleaning.
///
/// Every field is optional; empty cells deserialize to `None` so the cleaner
/// can forward-fill them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawRecord {
    pub timestamp: Option<String>,
    pub city: Option<String>,
    pub location: Option<String>,
    pub vehicle_count: Option<u32>,
}

/// A row after forward fill and timestamp coercion.
///
/// `timestamp` is always valid (rows that fail coercion are dropped). The
/// remaining columns can still be missing when the gap sits at the very top
/// of the file and forward fill had nothing to copy from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanRecord {
    pub timestamp: NaiveDateTime,
    pub city: Option<String>,
    pub location: Option<String>,
    pub vehicle_count: Option<u32>,

    /// Label encoding of `location`, assigned in order of first appearance.
    /// Inert metadata for now: nothing downstream consumes it.
    pub location_code: Option<u32>,
}

/// A cleaned row annotated with coordinates.
///
/// Geocoding never fails (unknown locations get a fixed default), so the
/// coordinates are plain `f64`s.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoRecord {
    pub timestamp: NaiveDateTime,
    pub city: Option<String>,
    pub location: Option<String>,
    pub vehicle_count: Option<u32>,
    pub location_code: Option<u32>,
    pub latitude: f64,
    pub longitude: f64,
}
