// models/src/medical/record_type.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// The closed set of record kinds the service accepts.
///
/// Every variant owns its required-field set in [`RecordType::required_fields`];
/// a new kind of record is added by extending both in the same change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordType {
    LabResult,
    Prescription,
}

impl RecordType {
    pub const ALL: [RecordType; 2] = [RecordType::LabResult, RecordType::Prescription];

    /// The wire tag carried in the `type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::LabResult => "lab_result",
            RecordType::Prescription => "prescription",
        }
    }

    /// Type-specific fields that must be present and non-null, in the order
    /// they are checked. `patient_id` is required for every type and is not
    /// listed here.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            RecordType::LabResult => &["value", "description", "provider"],
            RecordType::Prescription => &["dose", "drug", "provider"],
        }
    }
}

impl FromStr for RecordType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownType(s.to_string()))
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
