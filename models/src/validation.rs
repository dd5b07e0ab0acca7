// models/src/validation.rs

//! Checks raw record payloads against the required-field schema and turns
//! them into typed [`HealthRecord`]s.

use serde_json::{Map, Value};

use crate::errors::{ValidationError, ValidationResult};
use crate::identifiers::PatientId;
use crate::medical::{HealthRecord, LabResult, Prescription, RecordType};

pub const TYPE_FIELD: &str = "type";
pub const PATIENT_ID_FIELD: &str = "patient_id";

/// Validates a record payload.
///
/// Checks run in a fixed order: the payload must be an object, `type` must
/// name a known record type, `patient_id` must be present, then every
/// required field of that type must be present. A JSON `null` counts as
/// absent. Field values are not inspected beyond that, except `patient_id`
/// which must be a string since it is the storage key.
pub fn validate(payload: Value) -> ValidationResult<HealthRecord> {
    let Value::Object(mut fields) = payload else {
        return Err(ValidationError::NotAnObject);
    };

    let record_type = match fields.get(TYPE_FIELD) {
        Some(Value::String(tag)) => tag.parse::<RecordType>()?,
        Some(other) => return Err(ValidationError::UnknownType(other.to_string())),
        None => return Err(ValidationError::UnknownType("null".to_string())),
    };

    let patient_id = match require(&fields, PATIENT_ID_FIELD)? {
        Value::String(id) => PatientId::new(id.as_str()),
        _ => return Err(ValidationError::InvalidField(PATIENT_ID_FIELD)),
    };

    for name in record_type.required_fields() {
        require(&fields, name)?;
    }

    fields.remove(TYPE_FIELD);
    fields.remove(PATIENT_ID_FIELD);

    let record = match record_type {
        RecordType::LabResult => HealthRecord::LabResult(LabResult {
            patient_id,
            value: take(&mut fields, "value")?,
            description: take(&mut fields, "description")?,
            provider: take(&mut fields, "provider")?,
            extra: fields,
        }),
        RecordType::Prescription => HealthRecord::Prescription(Prescription {
            patient_id,
            dose: take(&mut fields, "dose")?,
            drug: take(&mut fields, "drug")?,
            provider: take(&mut fields, "provider")?,
            extra: fields,
        }),
    };

    Ok(record)
}

fn require<'a>(fields: &'a Map<String, Value>, name: &'static str) -> ValidationResult<&'a Value> {
    match fields.get(name) {
        Some(Value::Null) | None => Err(ValidationError::MissingField(name)),
        Some(value) => Ok(value),
    }
}

fn take(fields: &mut Map<String, Value>, name: &'static str) -> ValidationResult<Value> {
    match fields.remove(name) {
        Some(Value::Null) | None => Err(ValidationError::MissingField(name)),
        Some(value) => Ok(value),
    }
}
