use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the address book between runs.
///
/// Provides abstraction over where the book lives, enabling different
/// implementations (JSON file, in-memory mock).
pub trait AddressBookRepository {
    /// Load the saved address book.
    ///
    /// Returns an empty book when nothing has been saved yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Save the whole address book, replacing any previous save.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
