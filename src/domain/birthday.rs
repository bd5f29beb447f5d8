//! Birthday value object.

use super::errors::ValidationError;
use super::field::ValidatedField;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";

static DATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));

/// A birthday in strict `YYYY-MM-DD` form.
///
/// The raw string is what gets stored and persisted; readers get a
/// [`NaiveDate`]. The calendar date is checked when the value is accepted,
/// so `2021-02-30` is rejected up front rather than failing on first read.
///
/// # Example
///
/// ```
/// use chrono::Datelike;
/// use contact_assistant::domain::{Birthday, ValidatedField};
///
/// let birthday = Birthday::parse("2000-01-15").unwrap();
/// assert_eq!(birthday.value().month(), 1);
/// assert_eq!(birthday.value().day(), 15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Month of the year, 1-12.
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Day of the month, 1-31.
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// This birthday's anniversary in `year`.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month(), self.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, self.month(), self.day() - 1))
    }
}

impl ValidatedField for Birthday {
    type Value = NaiveDate;

    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text is not
    /// `YYYY-MM-DD` or names a day that does not exist.
    fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        if !DATE_REGEX.is_match(&raw) {
            return Err(ValidationError::InvalidBirthday(raw));
        }

        match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
            Ok(date) => Ok(Self { raw, date }),
            Err(_) => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    fn as_str(&self) -> &str {
        &self.raw
    }

    fn value(&self) -> NaiveDate {
        self.date
    }
}

// Persisted as the raw string, re-validated on load
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
