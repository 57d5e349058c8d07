//! Error kinds for the upload pipeline.
//!
//! Both kinds are recovered at the upload boundary and rendered as a
//! user-visible message; nothing here is fatal to the process.

use thiserror::Error;

/// Failure to turn an uploaded payload into a table.
///
/// There are no partial results: the first bad row fails the whole upload.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("filename {0:?} does not look like a CSV file")]
    NotCsv(String),

    #[error("payload is not a data URL (no comma separator)")]
    MissingSeparator,

    #[error("payload body is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Failure while building a chart spec from valid-but-unexpected data.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("no rows left to plot for the {chart} chart")]
    NoRows { chart: &'static str },
}

/// Anything that can go wrong while processing one upload.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl UploadError {
    /// The message shown to the user in place of the dashboard.
    pub fn user_message(&self) -> String {
        match self {
            UploadError::Parse(_) => {
                "Invalid file format. Please upload a valid CSV.".to_string()
            }
            UploadError::Graph(e) => format!("Error generating graphs: {e}"),
        }
    }
}
