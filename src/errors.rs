use chrono::NaiveDate;
use thiserror::Error;

/// Error type that captures ledger, storage and configuration failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("{0}")]
    Validation(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Clipboard error: {0}")]
    Clipboard(String),
    #[error("No record for {0}")]
    RecordNotFound(NaiveDate),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
