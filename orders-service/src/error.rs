use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the service itself, independent of its collaborators.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ServiceError {
    /// A required collaborator was not supplied before `build`.
    #[error("Invalid argument: {0} is required")]
    InvalidArgument(&'static str),
}

/// Failures of the file backed order source.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The orders file could not be read.
    #[error("Failed to read orders from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The orders file is not a JSON array of orders.
    #[error("Failed to parse orders in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Failures of the file backed order sink.
#[derive(Error, Debug)]
pub enum SinkError {
    /// The output file could not be created or written.
    #[error("Failed to write orders to {path}: {source}")]
    Write {
        path: PathBuf,
        source: csv::Error,
    },
}

/// A specialized Result type for service construction.
pub type Result<T> = std::result::Result<T, ServiceError>;
