// lib/src/storage_engine/inmemory_storage.rs

use async_trait::async_trait;
use models::{HealthRecord, PatientId};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::storage_engine::RecordStore;
use crate::errors::StorageResult;

/// Process-local record storage. Nothing survives a restart.
///
/// Clones share the same underlying map; separate `new()` calls are fully
/// isolated from each other.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: Arc<RwLock<HashMap<PatientId, Vec<HealthRecord>>>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn insert(&self, record: HealthRecord) -> StorageResult<HealthRecord> {
        let mut records = self.records.write().await;
        records
            .entry(record.patient_id().clone())
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn query(&self, patient_id: &PatientId) -> StorageResult<Vec<HealthRecord>> {
        let records = self.records.read().await;
        let found = records.get(patient_id).cloned().unwrap_or_default();
        debug!("Found {} record(s) for patient {}", found.len(), patient_id);
        Ok(found)
    }

    async fn delete_all(&self, patient_id: &PatientId) -> StorageResult<usize> {
        let mut records = self.records.write().await;
        Ok(records.remove(patient_id).map_or(0, |removed| removed.len()))
    }

    async fn patient_count(&self) -> StorageResult<usize> {
        Ok(self.records.read().await.len())
    }

    async fn record_count(&self) -> StorageResult<usize> {
        let records = self.records.read().await;
        Ok(records.values().map(Vec::len).sum())
    }

    fn get_type(&self) -> &'static str {
        "InMemory"
    }
}
