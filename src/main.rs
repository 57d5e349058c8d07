//! CLI entry point for the traffic dashboard pipeline.
//!
//! Provides subcommands for generating synthetic traffic-count CSVs and for
//! running the full ingestion pipeline over a CSV file.

use anyhow::Result;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use tracing::error;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use traffic_dash::generator;
use traffic_dash::output::{print_json, write_json};
use traffic_dash::pipeline::{UploadRequest, render_upload};

#[derive(Parser)]
#[command(name = "traffic_dash")]
#[command(about = "Generate and analyze synthetic traffic-count data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic traffic-count CSV
    Generate {
        /// Path of the CSV file to write
        #[arg(short, long, default_value = "traffic_data_london.csv")]
        output: String,

        /// Number of rows to generate
        #[arg(short, long, default_value_t = generator::DEFAULT_ROWS)]
        rows: usize,
    },
    /// Run the ingestion pipeline over a CSV file and emit the dashboard payload
    Analyze {
        /// Path to the CSV file to analyze
        #[arg(value_name = "FILE")]
        input: String,

        /// Optional path to write the dashboard JSON to
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/traffic_dash.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("traffic_dash.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { output, rows } => {
            generator::generate(&output, rows)?;
        }
        Commands::Analyze { input, output } => {
            let request = load_request(&input)?;

            match render_upload(&request) {
                Ok(dashboard) => {
                    print_json(&dashboard)?;
                    if let Some(path) = output {
                        write_json(&path, &dashboard)?;
                    }
                }
                Err(message) => {
                    error!("{message}");
                }
            }
        }
    }

    Ok(())
}

/// Wraps a local CSV file as the data-URL payload the upload boundary expects.
fn load_request(path: &str) -> Result<UploadRequest> {
    let bytes = std::fs::read(path)?;
    let contents = format!("data:text/csv;base64,{}", STANDARD.encode(&bytes));
    let filename = Path::new(path)
        .file_name()
        .and_then(OsStr::to_str)
        .unwrap_or("upload.csv")
        .to_string();

    Ok(UploadRequest { contents, filename })
}
