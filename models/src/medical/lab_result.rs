// models/src/medical/lab_result.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::identifiers::PatientId;

/// A laboratory result. `value` is kept exactly as the client sent it, so
/// `"10.5"` and `10.5` both round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabResult {
    pub patient_id: PatientId,
    pub value: Value,
    pub description: Value,
    pub provider: Value,
    /// Any fields beyond the required ones.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
