//! AddressBook model: every contact of the session, keyed by name.

use super::record::Record;
use crate::domain::ValidatedField;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A keyed collection of records, one per contact name.
///
/// Records are kept in a sorted map so listings are stable between runs;
/// callers should not rely on any particular order. On disk the book is a
/// plain list of records and the keys are rebuilt from the names on load.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, overwriting any record with the same name.
    pub fn add(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        self.records.insert(key, record);
    }

    /// Remove the record stored under `name`.
    ///
    /// Removing a name that is not present is a no-op.
    pub fn remove(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Every stored record.
    pub fn all(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Records whose name contains `query` (case-insensitive) or that have a
    /// phone containing `query` verbatim.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        self.records
            .values()
            .filter(|record| record.matches(query))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<Record>> for AddressBook {
    fn from(records: Vec<Record>) -> Self {
        records.into_iter().collect()
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records.into_values().collect()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add(record);
        }
        book
    }
}
