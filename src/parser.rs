//! Decoder for uploaded CSV payloads.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use crate::error::ParseError;
use crate::records::RawRecord;

/// Decodes a data-URL style upload (`<metadata>,<base64 body>`) into rows.
///
/// Only filenames containing the substring "csv" are accepted. The body is
/// base64-decoded, interpreted as UTF-8 text and parsed as a headered CSV
/// with columns `timestamp,city,location,vehicle_count`. Extra columns are
/// ignored; empty cells come back as `None`.
///
/// # Errors
///
/// Returns a [`ParseError`] for a non-CSV filename, a payload without the
/// comma separator, invalid base64 or UTF-8, or malformed CSV. No partial
/// table is ever returned.
pub fn parse_upload(contents: &str, filename: &str) -> Result<Vec<RawRecord>, ParseError> {
    if !filename.contains("csv") {
        return Err(ParseError::NotCsv(filename.to_string()));
    }

    let (_content_type, body) = contents
        .split_once(',')
        .ok_or(ParseError::MissingSeparator)?;

    let decoded = STANDARD.decode(body)?;
    let text = String::from_utf8(decoded)?;

    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut rows = Vec::new();

    for result in reader.deserialize() {
        let record: RawRecord = result?;
        rows.push(record);
    }

    debug!(rows = rows.len(), filename, "Upload parsed");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(csv_text: &str) -> String {
        format!("data:text/csv;base64,{}", STANDARD.encode(csv_text))
    }

    #[test]
    fn test_parse_valid_upload() {
        let contents = encode(
            "timestamp,city,location,vehicle_count\n\
             2024-08-01 00:00:00,London,Westminster,142\n\
             2024-08-01 01:00:00,London,Camden,7\n",
        );
        let rows = parse_upload(&contents, "traffic.csv").unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].timestamp.as_deref(), Some("2024-08-01 00:00:00"));
        assert_eq!(rows[0].city.as_deref(), Some("London"));
        assert_eq!(rows[0].location.as_deref(), Some("Westminster"));
        assert_eq!(rows[0].vehicle_count, Some(142));
        assert_eq!(rows[1].vehicle_count, Some(7));
    }

    #[test]
    fn test_empty_cells_become_none() {
        let contents = encode(
            "timestamp,city,location,vehicle_count\n\
             2024-08-01 00:00:00,London,,\n",
        );
        let rows = parse_upload(&contents, "gaps.csv").unwrap();

        assert_eq!(rows[0].location, None);
        assert_eq!(rows[0].vehicle_count, None);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let contents = encode(
            "timestamp,city,location,vehicle_count,weather\n\
             2024-08-01 00:00:00,London,Camden,10,rainy\n",
        );
        let rows = parse_upload(&contents, "extra.csv").unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].location.as_deref(), Some("Camden"));
    }

    #[test]
    fn test_non_csv_filename_is_rejected() {
        let contents = encode("timestamp,city,location,vehicle_count\n");
        let result = parse_upload(&contents, "photo.png");

        assert!(matches!(result, Err(ParseError::NotCsv(_))));
    }

    #[test]
    fn test_filename_check_is_case_sensitive() {
        let contents = encode("timestamp,city,location,vehicle_count\n");
        let result = parse_upload(&contents, "DATA.CSV");

        assert!(matches!(result, Err(ParseError::NotCsv(_))));
    }

    #[test]
    fn test_payload_without_separator_is_rejected() {
        let result = parse_upload("not-a-data-url", "data.csv");
        assert!(matches!(result, Err(ParseError::MissingSeparator)));
    }

    #[test]
    fn test_corrupt_base64_is_rejected() {
        let result = parse_upload("data:text/csv;base64,!!!not base64!!!", "data.csv");
        assert!(matches!(result, Err(ParseError::Base64(_))));
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let contents = format!(
            "data:text/csv;base64,{}",
            STANDARD.encode([0xFF, 0xFE, 0x00])
        );
        let result = parse_upload(&contents, "data.csv");

        assert!(matches!(result, Err(ParseError::Utf8(_))));
    }

    #[test]
    fn test_malformed_row_fails_the_whole_parse() {
        let contents = encode(
            "timestamp,city,location,vehicle_count\n\
             2024-08-01 00:00:00,London,Camden,10\n\
             2024-08-01 01:00:00,London,Camden,not-a-number\n",
        );
        let result = parse_upload(&contents, "bad.csv");

        assert!(matches!(result, Err(ParseError::Csv(_))));
    }
}
