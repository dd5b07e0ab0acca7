// models/src/errors.rs

pub use thiserror::Error;

/// Why a record payload was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The payload is not a JSON object.
    #[error("record payload must be a JSON object")]
    NotAnObject,
    /// The `type` tag is absent or names a record type outside the schema.
    #[error("unknown record type: {0}")]
    UnknownType(String),
    /// A required field is absent or null.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    /// A field is present but has the wrong JSON type.
    #[error("field {0} has an invalid value")]
    InvalidField(&'static str),
}

/// A type alias for a `Result` that returns a `ValidationError` on failure.
pub type ValidationResult<T> = Result<T, ValidationError>;
