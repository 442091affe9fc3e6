//! Error types and handling.

use thiserror::Error;

use crate::config::ConfigError;
use crate::wizard::WizardError;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Wizard operation rejected
    #[error(transparent)]
    Wizard(#[from] WizardError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Form input could not be parsed
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a validation error with message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wizard_error_message_passes_through() {
        let err: AppError = WizardError::InvalidRole("root".to_string()).into();
        assert_eq!(err.to_string(), "Unknown role: \"root\"");
    }

    #[test]
    fn test_validation_error_message() {
        let err = AppError::validation("Budget must be a number");
        assert_eq!(err.to_string(), "Validation error: Budget must be a number");
    }
}
