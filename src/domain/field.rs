//! The validated-field contract shared by every contact attribute.

use super::errors::ValidationError;

/// A single contact attribute that validates its raw text on the way in.
///
/// Implementors are newtypes over the raw string. The only way to obtain one
/// is [`ValidatedField::parse`], so a value that failed its rule never exists.
pub trait ValidatedField: Sized {
    /// The semantic form handed to readers.
    type Value;

    /// Validate `raw` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns the field's [`ValidationError`] variant if `raw` is rejected.
    fn parse(raw: impl Into<String>) -> Result<Self, ValidationError>;

    /// The raw text exactly as it was accepted.
    fn as_str(&self) -> &str;

    /// The value in its semantic form.
    fn value(&self) -> Self::Value;

    /// Replace the held value.
    ///
    /// On error the previous value is left in place.
    fn set(&mut self, raw: impl Into<String>) -> Result<(), ValidationError> {
        *self = Self::parse(raw)?;
        Ok(())
    }
}
