//! Phone value object.

use super::errors::ValidationError;
use super::field::ValidatedField;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Optional `+`, optional two-digit country code, a three-digit operator code
/// that may be parenthesized, then 7-10 digits, hyphens or spaces.
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?([0-9]{2})?\(?[0-9]{3}\)?[0-9\-\s]{7,10}$").expect("valid phone regex")
});

/// A type-safe wrapper for phone numbers.
///
/// The number is stored verbatim; separators are kept so that display and
/// substring search see exactly what the user typed.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::{Phone, ValidatedField};
///
/// let phone = Phone::parse("+380501234567").unwrap();
/// assert_eq!(phone.as_str(), "+380501234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Validate phone format.
    fn is_valid(phone: &str) -> bool {
        PHONE_REGEX.is_match(phone)
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether `fragment` occurs in the number as typed.
    pub fn contains(&self, fragment: &str) -> bool {
        self.0.contains(fragment)
    }
}

impl ValidatedField for Phone {
    type Value = String;

    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = raw.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    fn as_str(&self) -> &str {
        &self.0
    }

    fn value(&self) -> String {
        self.0.clone()
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::parse(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
