//! Wizard operation errors.

use thiserror::Error;

use crate::models::Department;

/// Rejected wizard operations. State is left unchanged whenever one is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WizardError {
    /// Name is not one of the known department keys.
    #[error("Unknown department: {0:?}")]
    InvalidDepartment(String),

    /// Label is not one of the filter catalog entries.
    #[error("Unknown filter: {0:?}")]
    InvalidFilterLabel(String),

    /// Value is not one of the known roles.
    #[error("Unknown role: {0:?}")]
    InvalidRole(String),

    /// Payload does not match the department's data schema.
    #[error("Invalid {department} payload: {reason}")]
    InvalidPayload { department: Department, reason: String },

    /// Typed payload belongs to a different department.
    #[error("Payload for {actual} cannot be submitted to {expected}")]
    PayloadMismatch { expected: Department, actual: Department },
}

/// Result type for wizard operations.
pub type Result<T> = std::result::Result<T, WizardError>;
