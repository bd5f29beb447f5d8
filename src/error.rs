//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a command handler can hit while serving one command.
///
/// None of these end the session; the handler boundary turns each into a
/// message for the user.
#[derive(Error, Debug)]
pub enum AssistantError {
    /// A field rejected its raw input
    #[error("Invalid input: {0}")]
    InvalidFormat(#[from] ValidationError),

    /// No contact is stored under the given name
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// The command needed more arguments than it was given
    #[error("Missing arguments, expected: {0}")]
    MalformedArguments(String),

    /// The address book could not be persisted
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the save file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The save file could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AssistantError
pub type AssistantResult<T> = Result<T, AssistantError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AssistantError::NotFound("Ghost".to_string());
        assert_eq!(err.to_string(), "Contact not found: Ghost");

        let err = AssistantError::MalformedArguments("name, phone".to_string());
        assert_eq!(err.to_string(), "Missing arguments, expected: name, phone");

        let err = ConfigError::InvalidValue {
            var: "LOG_LEVEL".to_string(),
            reason: "Cannot be empty".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for LOG_LEVEL: Cannot be empty");
    }

    #[test]
    fn test_validation_error_converts() {
        let err: AssistantError = ValidationError::InvalidPhone("abc".to_string()).into();
        assert!(matches!(err, AssistantError::InvalidFormat(_)));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::Io {
            path: "book.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("book.json"));
        assert!(err.to_string().contains("denied"));
    }
}
