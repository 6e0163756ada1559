/// Error types for fixture parsing and loading
use thiserror::Error;

/// Main error type for market data operations
#[derive(Error, Debug)]
pub enum MarketError {
    /// Reading a local fixture failed
    #[error("Failed to read fixture {path}: {source}")]
    FixtureRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP request failed
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// Failed to parse JSON data
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A required column is not present in a CSV header
    #[error("{file}: missing required column {column:?}")]
    MissingColumn { file: String, column: String },

    /// A row carries a date that cannot be parsed
    #[error("{file}: row {row}: invalid date {value:?}")]
    InvalidDate {
        file: String,
        row: usize,
        value: String,
    },

    /// GeoJSON is structurally valid JSON but not a usable feature collection
    #[error("Invalid region geometry: {0}")]
    InvalidGeometry(String),

    /// Per-region collections do not line up with the region catalogue
    #[error("Expected {expected} region fixtures, found {found}")]
    RegionCountMismatch { expected: usize, found: usize },
}

/// Type alias for Results using MarketError
pub type Result<T> = std::result::Result<T, MarketError>;
