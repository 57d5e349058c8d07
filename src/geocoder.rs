//! Static coordinate lookup for the known London boroughs.

use crate::records::{CleanRecord, GeoRecord};

/// Fallback coordinate for locations outside the known table (central London).
pub const DEFAULT_COORDINATE: (f64, f64) = (51.5074, -0.1278);

/// Approximate centroids for the ten boroughs the generator draws from.
pub static LOCATION_COORDINATES: &[(&str, (f64, f64))] = &[
    ("Westminster", (51.4974, -0.1278)),
    ("Camden", (51.5292, -0.1426)),
    ("Islington", (51.5364, -0.1037)),
    ("Kensington", (51.4974, -0.1925)),
    ("Hackney", (51.5471, -0.0464)),
    ("Bromley", (51.4052, 0.0167)),
    ("Greenwich", (51.4769, 0.0005)),
    ("Croydon", (51.3760, -0.0980)),
    ("Brent", (51.5583, -0.2817)),
    ("Tower Hamlets", (51.5074, -0.0290)),
];

/// Looks up a location by exact name, falling back to central London.
pub fn lookup(location: &str) -> (f64, f64) {
    LOCATION_COORDINATES
        .iter()
        .find(|(name, _)| *name == location)
        .map(|(_, coordinate)| *coordinate)
        .unwrap_or(DEFAULT_COORDINATE)
}

/// Annotates every row with latitude and longitude.
///
/// Never fails: unknown or missing locations get [`DEFAULT_COORDINATE`].
pub fn geocode(rows: Vec<CleanRecord>) -> Vec<GeoRecord> {
    rows.into_iter()
        .map(|row| {
            let (latitude, longitude) = row
                .location
                .as_deref()
                .map(lookup)
                .unwrap_or(DEFAULT_COORDINATE);

            GeoRecord {
                timestamp: row.timestamp,
                city: row.city,
                location: row.location,
                vehicle_count: row.vehicle_count,
                location_code: row.location_code,
                latitude,
                longitude,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn clean_row(location: Option<&str>) -> CleanRecord {
        CleanRecord {
            timestamp: NaiveDate::from_ymd_opt(2024, 8, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            city: Some("London".to_string()),
            location: location.map(str::to_string),
            vehicle_count: Some(1),
            location_code: location.map(|_| 0),
        }
    }

    #[test]
    fn test_every_known_location_matches_the_table() {
        for (name, coordinate) in LOCATION_COORDINATES {
            assert_eq!(lookup(name), *coordinate);
        }
    }

    #[test]
    fn test_table_has_exactly_ten_entries() {
        assert_eq!(LOCATION_COORDINATES.len(), 10);
    }

    #[test]
    fn test_unknown_location_gets_the_default() {
        assert_eq!(lookup("Atlantis"), DEFAULT_COORDINATE);
        assert_eq!(lookup("westminster"), DEFAULT_COORDINATE); // exact match only
    }

    #[test]
    fn test_geocode_annotates_rows() {
        let rows = vec![clean_row(Some("Hackney")), clean_row(Some("Nowhere"))];
        let geocoded = geocode(rows);

        assert_eq!(geocoded[0].latitude, 51.5471);
        assert_eq!(geocoded[0].longitude, -0.0464);
        assert_eq!(
            (geocoded[1].latitude, geocoded[1].longitude),
            DEFAULT_COORDINATE
        );
    }

    #[test]
    fn test_missing_location_gets_the_default() {
        let geocoded = geocode(vec![clean_row(None)]);
        assert_eq!(
            (geocoded[0].latitude, geocoded[0].longitude),
            DEFAULT_COORDINATE
        );
    }
}
