//! Contact Assistant - a command-line personal address book.
//!
//! Stores names, phone numbers and birthdays, looks contacts up by name or
//! phone fragment, counts down to the next birthday, and keeps the book in a
//! JSON file between runs.
//!
//! # Architecture
//!
//! - **domain**: Validated field value objects (name, phone, birthday)
//! - **models**: `Record` and the `AddressBook` that owns every record
//! - **repositories**: Persistence boundary and the JSON file implementation
//! - **assistant**: Command table and the interactive session
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod assistant;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use assistant::{Assistant, Command, Outcome};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidatedField, ValidationError};
pub use error::{AssistantError, ConfigError, StorageError};
pub use models::{AddressBook, Record};
pub use repositories::{AddressBookRepository, JsonFileRepository};
