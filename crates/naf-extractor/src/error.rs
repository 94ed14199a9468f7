use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Download failed: {0}")]
    Download(#[from] reqwest::Error),

    #[error("Unexpected status for {url}: {status}")]
    Status { url: String, status: String },

    #[error("Failed to read spreadsheet: {0}")]
    Spreadsheet(String),

    #[error("No sheet found in xls file")]
    NoSheet,

    #[error("Failed to read csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
