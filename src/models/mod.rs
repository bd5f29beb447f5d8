//! Data models for the address book.
//!
//! A `Record` is one contact built from validated domain fields; the
//! `AddressBook` owns every record of a session.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::Record;
