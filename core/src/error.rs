//! Error types for record construction and field access.

use thiserror::Error;

/// Errors that can occur when building or updating a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// More positional arguments than declared fields.
    #[error("Too many arguments provided to {type_name}: expected at most {expected}, got {given}")]
    TooManyArguments {
        type_name: String,
        expected: usize,
        given: usize,
    },

    /// A keyword or assignment named a field the type does not declare.
    #[error("{field} not a valid field in {type_name}")]
    UnknownField { type_name: String, field: String },
}

impl RecordError {
    pub fn too_many_arguments(type_name: impl Into<String>, expected: usize, given: usize) -> Self {
        RecordError::TooManyArguments {
            type_name: type_name.into(),
            expected,
            given,
        }
    }

    pub fn unknown_field(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        RecordError::UnknownField {
            type_name: type_name.into(),
            field: field.into(),
        }
    }
}

/// Result type for record operations.
pub type RecordResult<T> = Result<T, RecordError>;
