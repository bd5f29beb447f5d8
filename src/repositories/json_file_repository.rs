use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use crate::repositories::traits::AddressBookRepository;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Address book repository backed by a single JSON file.
///
/// Saves are written to a sibling temporary file and renamed over the
/// target, so an interrupted save leaves the previous snapshot intact.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository that reads and writes `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl AddressBookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No saved address book at {}, starting empty", self.path.display());
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let book: AddressBook = serde_json::from_str(&contents)?;
        debug!("Loaded {} contacts from {}", book.len(), self.path.display());
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let json = serde_json::to_string_pretty(book)?;
        let temp = self.temp_path();
        fs::write(&temp, json).map_err(|e| self.io_error(e))?;
        fs::rename(&temp, &self.path).map_err(|e| self.io_error(e))?;

        debug!("Saved {} contacts to {}", book.len(), self.path.display());
        Ok(())
    }
}
