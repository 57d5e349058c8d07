use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::env;
use std::fs;
use traffic_dash::analyzers::categorize::Category;
use traffic_dash::generator::generate;
use traffic_dash::parser::parse_upload;
use traffic_dash::pipeline::{UploadRequest, process_upload, render_upload};

fn temp_path(name: &str) -> String {
    format!("{}/{}", env::temp_dir().display(), name)
}

#[test]
fn test_generate_then_full_pipeline() {
    let path = temp_path("traffic_dash_it_roundtrip.csv");
    let _ = fs::remove_file(&path);

    generate(&path, 200).expect("Failed to generate data");

    let bytes = fs::read(&path).unwrap();
    let contents = format!("data:text/csv;base64,{}", STANDARD.encode(&bytes));

    // Parser recovers exactly the generated rows
    let rows = parse_upload(&contents, "traffic_dash_it_roundtrip.csv").unwrap();
    assert_eq!(rows.len(), 200);
    assert_eq!(rows[0].timestamp.as_deref(), Some("2024-08-01 00:00:00"));
    assert_eq!(rows[5].timestamp.as_deref(), Some("2024-08-01 05:00:00"));
    assert!(rows.iter().all(|r| r.city.as_deref() == Some("London")));
    assert!(rows.iter().all(|r| r.vehicle_count.unwrap() < 200));

    // Full pipeline produces a complete dashboard
    let request = UploadRequest {
        contents,
        filename: "traffic_dash_it_roundtrip.csv".to_string(),
    };
    let dashboard = process_upload(&request).expect("Pipeline failed");

    assert_eq!(dashboard.summary.len(), 4);
    assert_eq!(dashboard.summary[0].count, 200);
    assert_eq!(dashboard.map.points.len(), 200);
    assert_eq!(dashboard.trend.points.len(), 200);
    assert!(!dashboard.location_bar.bars.is_empty());
    assert!(dashboard.location_bar.bars.len() <= 10);

    // At least one location in the first 50 rows carries the peak count
    assert!(
        dashboard
            .congestion_bar
            .bars
            .iter()
            .any(|b| b.category == Category::High)
    );

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_invalid_upload_is_recovered_at_the_boundary() {
    let request = UploadRequest {
        contents: "data:text/csv;base64,%%%".to_string(),
        filename: "traffic.csv".to_string(),
    };

    let message = render_upload(&request).unwrap_err();
    assert_eq!(message, "Invalid file format. Please upload a valid CSV.");
}
