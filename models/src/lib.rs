// models/src/lib.rs

pub mod errors;
pub mod identifiers;
pub mod medical;
pub mod validation;

pub use errors::{ValidationError, ValidationResult};
pub use identifiers::PatientId;
pub use medical::{HealthRecord, LabResult, Prescription, RecordType};
pub use validation::validate;
