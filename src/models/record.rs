//! Record model: one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidatedField};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single contact: a name, any number of phones, an optional birthday.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// The contact's name, also the address book key
    name: Name,

    /// Phone numbers in the order they were added (duplicates allowed)
    #[serde(default)]
    phones: Vec<Phone>,

    /// Birthday, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones.
    pub fn new(name: Name, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone. No duplicate check.
    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Discard every existing phone and install `phones` instead.
    pub fn replace_phones(&mut self, phones: Vec<Phone>) {
        self.phones = phones;
    }

    /// Days until the next birthday, counted from today's local date.
    ///
    /// `Some(0)` means the birthday is today; `None` means no birthday is set.
    pub fn days_to_next_birthday(&self) -> Option<i64> {
        self.days_to_next_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday.
    pub fn days_to_next_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday.as_ref()?;

        let mut next = birthday.anniversary_in(today.year())?;
        if today > next {
            next = birthday.anniversary_in(today.year() + 1)?;
        }

        Some((next - today).num_days())
    }

    /// Phones joined for display.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Whether the name contains `query` ignoring case, or any phone
    /// contains it verbatim.
    pub fn matches(&self, query: &str) -> bool {
        let query_lower = query.to_lowercase();
        self.name.as_str().to_lowercase().contains(&query_lower)
            || self.phones.iter().any(|phone| phone.contains(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn with_birthday(raw: &str) -> Record {
        Record::new(Name::new("Ann"), Some(Birthday::parse(raw).unwrap()))
    }

    #[test]
    fn test_record_creation() {
        let record = Record::new(Name::new("Ann"), None);
        assert_eq!(record.name().as_str(), "Ann");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_add_phone_allows_duplicates() {
        let mut record = Record::new(Name::new("Ann"), None);
        record.add_phone(Phone::parse("0501112234").unwrap());
        record.add_phone(Phone::parse("0501112234").unwrap());
        assert_eq!(record.phones().len(), 2);
        assert_eq!(record.phones_display(), "0501112234, 0501112234");
    }

    #[test]
    fn test_replace_phones_discards_old_list() {
        let mut record = Record::new(Name::new("Ann"), None);
        record.add_phone(Phone::parse("0501112234").unwrap());
        record.add_phone(Phone::parse("0671112234").unwrap());

        record.replace_phones(vec![Phone::parse("+380931112233").unwrap()]);
        assert_eq!(record.phones_display(), "+380931112233");
    }

    #[test]
    fn test_days_to_birthday_later_this_year() {
        let record = with_birthday("1990-01-15");
        assert_eq!(record.days_to_next_birthday_from(date(2024, 1, 10)), Some(5));
    }

    #[test]
    fn test_days_to_birthday_today_is_zero() {
        let record = with_birthday("1990-01-15");
        assert_eq!(record.days_to_next_birthday_from(date(2024, 1, 15)), Some(0));
    }

    #[test]
    fn test_days_to_birthday_rolls_over_year() {
        let record = with_birthday("1990-01-15");
        // 2024 is a leap year: 2024-01-20 .. 2025-01-15
        assert_eq!(
            record.days_to_next_birthday_from(date(2024, 1, 20)),
            Some(361)
        );
    }

    #[test]
    fn test_days_to_birthday_without_birthday() {
        let record = Record::new(Name::new("Ann"), None);
        assert_eq!(record.days_to_next_birthday_from(date(2024, 1, 10)), None);
        assert_eq!(record.days_to_next_birthday(), None);
    }

    #[test]
    fn test_days_to_leap_day_birthday() {
        let record = with_birthday("2000-02-29");
        assert_eq!(record.days_to_next_birthday_from(date(2023, 2, 27)), Some(1));
        assert_eq!(record.days_to_next_birthday_from(date(2023, 2, 28)), Some(0));
        assert_eq!(record.days_to_next_birthday_from(date(2024, 2, 28)), Some(1));
    }

    #[test]
    fn test_days_to_birthday_from_clock_is_bounded() {
        let record = with_birthday("1990-07-04");
        let days = record.days_to_next_birthday().unwrap();
        assert!((0..=366).contains(&days));
    }

    #[test]
    fn test_matches_name_and_phone() {
        let mut record = Record::new(Name::new("Anna"), None);
        record.add_phone(Phone::parse("+380501112233").unwrap());

        assert!(record.matches("ann"));
        assert!(record.matches("ANNA"));
        assert!(record.matches("1112233"));
        assert!(!record.matches("zzz"));
    }
}
