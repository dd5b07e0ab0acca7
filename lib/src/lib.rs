// lib/src/lib.rs

pub mod errors;
pub mod storage_engine;

pub use crate::errors::{StorageError, StorageResult};
pub use crate::storage_engine::{InMemoryRecordStore, RecordStore};
