//! Synthetic traffic-count CSV producer.

use std::fs::File;

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use csv::WriterBuilder;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::info;

use crate::geocoder::LOCATION_COORDINATES;

/// Default number of rows to generate.
pub const DEFAULT_ROWS: usize = 20_000;

/// Vehicle counts are drawn uniformly from `[0, MAX_VEHICLE_COUNT)`.
const MAX_VEHICLE_COUNT: u32 = 200;

/// Writes `rows` synthetic records to a CSV file at `path`.
///
/// Timestamps increment hourly from 2024-08-01 00:00, the city is fixed to
/// London, locations are drawn uniformly from the ten known boroughs, and
/// vehicle counts uniformly from [0, 200). The output round-trips exactly
/// through the upload parser.
pub fn generate(path: &str, rows: usize) -> Result<()> {
    let mut rng = rand::thread_rng();
    let locations: Vec<&str> = LOCATION_COORDINATES.iter().map(|(name, _)| *name).collect();

    let start = NaiveDate::from_ymd_opt(2024, 8, 1)
        .expect("valid start date")
        .and_hms_opt(0, 0, 0)
        .expect("valid start time");

    let file = File::create(path)?;
    let mut writer = WriterBuilder::new().from_writer(file);
    writer.write_record(["timestamp", "city", "location", "vehicle_count"])?;

    for i in 0..rows {
        let timestamp = (start + Duration::hours(i as i64))
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        let location = locations.choose(&mut rng).copied().unwrap_or("Westminster");
        let vehicle_count = rng.gen_range(0..MAX_VEHICLE_COUNT).to_string();

        writer.write_record([timestamp.as_str(), "London", location, &vehicle_count])?;
    }

    writer.flush()?;
    info!(path, rows, "Synthetic traffic data written");
    Ok(())
}
