/// Storage layer for persisting the address book
///
/// This module defines the storage interface and its JSON file
/// implementation. The whole book is read or written at once.

pub mod json;

// Re-export the main storage types
pub use json::*;

use thiserror::Error;
use crate::domain::AddressBook;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result of loading a book: the records that survived plus a note for
/// every record that was dropped
#[derive(Debug, Default)]
pub struct LoadReport {
    pub book: AddressBook,
    pub skipped: Vec<String>,
}

/// Trait defining the storage interface for address books
///
/// This keeps the session loop independent of where the book lives.
pub trait ContactStorage {
    /// Load the stored book
    ///
    /// A missing store yields an empty book. Records that fail validation
    /// are skipped and described in `LoadReport::skipped`.
    fn load(&self) -> Result<LoadReport, StorageError>;

    /// Replace the stored book with `book`
    fn save(&self, book: &AddressBook) -> Result<(), StorageError>;
}
