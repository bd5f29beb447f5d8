//! Name value object.

use super::errors::ValidationError;
use super::field::ValidatedField;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact's name.
///
/// Names carry no format restriction; they are the address book key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Create a new Name. Never fails.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl ValidatedField for Name {
    type Value = String;

    fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::new(raw))
    }

    fn as_str(&self) -> &str {
        &self.0
    }

    fn value(&self) -> String {
        self.0.clone()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
