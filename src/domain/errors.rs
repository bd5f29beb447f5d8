//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field validation.
///
/// Both variants carry the rejected input so the caller can echo it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number does not match the accepted pattern.
    InvalidPhone(String),

    /// The provided birthday is not a `YYYY-MM-DD` calendar date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => write!(f, "Phone number {} is invalid", phone),
            Self::InvalidBirthday(date) => write!(
                f,
                "Invalid date format: {}. Expected format: YYYY-MM-DD",
                date
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidPhone("abc".to_string());
        assert_eq!(err.to_string(), "Phone number abc is invalid");

        let err = ValidationError::InvalidBirthday("15-01-2000".to_string());
        assert!(err.to_string().contains("15-01-2000"));
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }
}
