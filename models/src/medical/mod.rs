// models/src/medical/mod.rs

pub mod health_record;
pub mod lab_result;
pub mod prescription;
pub mod record_type;

pub use health_record::HealthRecord;
pub use lab_result::LabResult;
pub use prescription::Prescription;
pub use record_type::RecordType;
