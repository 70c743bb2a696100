//! Error taxonomy shared by the store and the services.
//!
//! Services validate their inputs and return one of these variants right
//! away; the command layer wraps them in `anyhow` and decides how to report
//! them. Nothing here is retried.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DewitError {
    /// Bad argument shape: empty title, unparseable date, unknown mood or format.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Referenced id, key or file does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A record for the same natural key already exists.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Persistence error: {0}")]
    Persistence(#[from] rusqlite::Error),

    /// Malformed import file or a value that cannot be encoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for DewitError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::Io(std::io::Error::other(err))
        } else {
            Self::Serialization(err.to_string())
        }
    }
}

impl From<csv::Error> for DewitError {
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return Self::Serialization(err.to_string());
        }
        match err.into_kind() {
            csv::ErrorKind::Io(io) => Self::Io(io),
            kind => Self::Serialization(format!("{kind:?}")),
        }
    }
}

pub type Result<T> = std::result::Result<T, DewitError>;
