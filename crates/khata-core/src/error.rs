use std::io;

use thiserror::Error;

/// Unified error type for the record store and persistence layers.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
