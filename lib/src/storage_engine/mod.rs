// lib/src/storage_engine/mod.rs

pub mod storage_engine;
pub mod inmemory_storage;

pub use storage_engine::RecordStore;
pub use inmemory_storage::InMemoryRecordStore;
