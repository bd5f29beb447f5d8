//! Domain value objects.
//!
//! Every contact attribute is a newtype that validates at construction
//! time, so invalid data cannot be represented in a `Record`.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::ValidatedField;
pub use name::Name;
pub use phone::Phone;
