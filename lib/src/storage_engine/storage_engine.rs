// lib/src/storage_engine/storage_engine.rs

use async_trait::async_trait;
use models::{HealthRecord, PatientId};

use crate::errors::StorageResult;

/// Storage for health records, keyed by patient.
///
/// Records for a patient are kept in insertion order. Implementations are
/// shared across request handlers as `Arc<dyn RecordStore>`.
#[async_trait]
pub trait RecordStore: Send + Sync + 'static {
    /// Appends a record to its patient's sequence and returns it unchanged.
    async fn insert(&self, record: HealthRecord) -> StorageResult<HealthRecord>;

    /// All records for `patient_id` in insertion order. Unknown patients
    /// yield an empty vector.
    async fn query(&self, patient_id: &PatientId) -> StorageResult<Vec<HealthRecord>>;

    /// Removes every record for `patient_id`, returning how many were removed.
    async fn delete_all(&self, patient_id: &PatientId) -> StorageResult<usize>;

    async fn patient_count(&self) -> StorageResult<usize>;

    async fn record_count(&self) -> StorageResult<usize>;

    fn get_type(&self) -> &'static str;
}
