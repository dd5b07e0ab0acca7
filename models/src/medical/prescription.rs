// models/src/medical/prescription.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::identifiers::PatientId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub patient_id: PatientId,
    pub dose: Value,
    pub drug: Value,
    pub provider: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
