//! Missing-value repair and timestamp coercion.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::records::{CleanRecord, RawRecord};

/// Timestamp formats accepted during coercion, tried in order.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Cleans a parsed table in three passes over the rows:
///
/// 1. forward fill every column (a gap at the very first row stays missing),
/// 2. coerce timestamps, dropping rows whose timestamp cannot be parsed,
/// 3. attach a label encoding of `location`, assigned in order of first
///    appearance over the surviving rows.
pub fn clean(rows: Vec<RawRecord>) -> Vec<CleanRecord> {
    let total = rows.len();
    let filled = forward_fill(rows);

    let mut codes: HashMap<String, u32> = HashMap::new();
    let mut out = Vec::with_capacity(filled.len());

    for row in filled {
        let Some(timestamp) = row.timestamp.as_deref().and_then(parse_timestamp) else {
            continue;
        };

        let location_code = row.location.as_ref().map(|location| {
            let next = codes.len() as u32;
            *codes.entry(location.clone()).or_insert(next)
        });

        out.push(CleanRecord {
            timestamp,
            city: row.city,
            location: row.location,
            vehicle_count: row.vehicle_count,
            location_code,
        });
    }

    if out.len() < total {
        debug!(
            dropped = total - out.len(),
            kept = out.len(),
            "Dropped rows with unparsable timestamps"
        );
    }

    out
}

/// Forward fill: each missing cell takes the nearest preceding non-missing
/// value in the same column.
fn forward_fill(mut rows: Vec<RawRecord>) -> Vec<RawRecord> {
    let mut last = RawRecord {
        timestamp: None,
        city: None,
        location: None,
        vehicle_count: None,
    };

    for row in &mut rows {
        macro_rules! fill {
            ($field:ident) => {
                match row.$field.take() {
                    Some(value) => {
                        last.$field = Some(value.clone());
                        row.$field = Some(value);
                    }
                    None => row.$field = last.$field.clone(),
                }
            };
        }

        fill!(timestamp);
        fill!(city);
        fill!(location);
        fill!(vehicle_count);
    }

    rows
}

/// Parses a timestamp against the accepted formats; a bare date becomes
/// midnight.
fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    for format in TIMESTAMP_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, format) {
            return Some(timestamp);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
