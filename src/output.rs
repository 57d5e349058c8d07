//! Output formatting and persistence for dashboard payloads.
//!
//! Supports pretty-printing, JSON serialization, and writing to a file.

use anyhow::Result;
use tracing::{debug, info};

use crate::pipeline::Dashboard;

/// Logs a dashboard using Rust's debug pretty-print format.
pub fn print_pretty(dashboard: &Dashboard) {
    debug!("{:#?}", dashboard);
}

/// Logs a dashboard as pretty-printed JSON.
pub fn print_json(dashboard: &Dashboard) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(dashboard)?);
    Ok(())
}

/// Writes a dashboard as pretty-printed JSON to `path`.
pub fn write_json(path: &str, dashboard: &Dashboard) -> Result<()> {
    std::fs::write(path, serde_json::to_string_pretty(dashboard)?)?;
    info!(path, "Dashboard written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{UploadRequest, process_upload};
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use std::env;
    use std::fs;
    use std::path::Path;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    fn sample_dashboard() -> Dashboard {
        let csv_text = "timestamp,city,location,vehicle_count\n\
                        2024-08-01 00:00:00,London,Camden,10\n";
        let request = UploadRequest {
            contents: format!("data:text/csv;base64,{}", STANDARD.encode(csv_text)),
            filename: "sample.csv".to_string(),
        };
        process_upload(&request).unwrap()
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&sample_dashboard());
    }

    #[test]
    fn test_print_json_does_not_panic() {
        print_json(&sample_dashboard()).unwrap();
    }

    #[test]
    fn test_write_json_creates_file() {
        let path = temp_path("traffic_dash_test_dashboard.json");
        let _ = fs::remove_file(&path); // clean up any prior run

        write_json(&path, &sample_dashboard()).unwrap();

        assert!(Path::new(&path).exists());
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Traffic Locations"));

        fs::remove_file(&path).unwrap();
    }
}
