use thiserror::Error;

/// Errors that can occur while building or running a dominance report
///
/// Per-file read and parse failures are not represented here: a run file
/// that cannot be read is logged and excluded from the counts, never fatal.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    #[error("Failed to serialize JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;
