// lib/src/errors.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("Internal storage error: {0}")]
    InternalError(String),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

