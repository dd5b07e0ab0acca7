// models/src/medical/health_record.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::identifiers::PatientId;
use super::{LabResult, Prescription, RecordType};

/// A validated record of one of the supported kinds.
///
/// Serializes to a flat JSON object with the kind in the `type` field, the
/// same shape the client posted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HealthRecord {
    LabResult(LabResult),
    Prescription(Prescription),
}

impl HealthRecord {
    pub fn record_type(&self) -> RecordType {
        match self {
            HealthRecord::LabResult(_) => RecordType::LabResult,
            HealthRecord::Prescription(_) => RecordType::Prescription,
        }
    }

    pub fn patient_id(&self) -> &PatientId {
        match self {
            HealthRecord::LabResult(r) => &r.patient_id,
            HealthRecord::Prescription(r) => &r.patient_id,
        }
    }

    /// Looks up a type-specific or extra field by its wire name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            HealthRecord::LabResult(r) => match name {
                "value" => Some(&r.value),
                "description" => Some(&r.description),
                "provider" => Some(&r.provider),
                _ => r.extra.get(name),
            },
            HealthRecord::Prescription(r) => match name {
                "dose" => Some(&r.dose),
                "drug" => Some(&r.drug),
                "provider" => Some(&r.provider),
                _ => r.extra.get(name),
            },
        }
    }
}

impl From<LabResult> for HealthRecord {
    fn from(value: LabResult) -> Self {
        HealthRecord::LabResult(value)
    }
}

impl From<Prescription> for HealthRecord {
    fn from(value: Prescription) -> Self {
        HealthRecord::Prescription(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    fn prescription() -> HealthRecord {
        let mut extra = Map::new();
        extra.insert("notes".to_string(), json!("with food"));
        HealthRecord::Prescription(Prescription {
            patient_id: PatientId::new("123"),
            dose: json!("10mg"),
            drug: json!("Aspirin"),
            provider: json!("Dr. Jones"),
            extra,
        })
    }

    #[test]
    fn should_serialize_as_flat_tagged_object() {
        let json = serde_json::to_value(prescription()).unwrap();
        assert_eq!(
            json,
            json!({
                "type": "prescription",
                "patient_id": "123",
                "dose": "10mg",
                "drug": "Aspirin",
                "provider": "Dr. Jones",
                "notes": "with food"
            })
        );
    }

    #[test]
    fn should_deserialize_stored_shape() {
        let json = serde_json::to_value(prescription()).unwrap();
        let back: HealthRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, prescription());
        assert_eq!(back.record_type(), RecordType::Prescription);
    }

    #[test]
    fn field_lookup_covers_required_and_extra_fields() {
        let record = prescription();
        assert_eq!(record.patient_id().as_str(), "123");
        assert_eq!(record.field("drug"), Some(&json!("Aspirin")));
        assert_eq!(record.field("notes"), Some(&json!("with food")));
        assert_eq!(record.field("value"), None);
    }
}
