/// JSON file implementation of the contact storage interface
///
/// The book is stored as a pretty-printed JSON array with one object per
/// record. Saves go through a temporary file in the same directory that is
/// then renamed over the target, so a crash never leaves a half-written file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tempfile::NamedTempFile;

use crate::domain::{AddressBook, PortableRecord, Record};
use crate::storage::{ContactStorage, LoadReport, StorageError};

/// File name used when none is configured
pub const DEFAULT_FILE_NAME: &str = "addressbook.json";

/// Stores the address book in a single JSON file
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize the book with four-space indentation, keeping non-ASCII text as-is
    fn encode(book: &AddressBook) -> Result<Vec<u8>, StorageError> {
        let records: Vec<PortableRecord> = book.iter().map(Record::to_portable).collect();

        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        records.serialize(&mut serializer)?;
        Ok(buffer)
    }

    /// Turn one stored JSON object into a record, or a reason it was skipped
    fn decode_entry(index: usize, entry: Value) -> Result<Record, String> {
        let portable: PortableRecord = serde_json::from_value(entry)
            .map_err(|e| format!("record #{} is malformed: {}", index + 1, e))?;
        Record::from_portable(&portable)
            .map_err(|e| format!("record '{}' is invalid: {}", portable.name, e))
    }
}

impl ContactStorage for JsonFileStorage {
    fn load(&self) -> Result<LoadReport, StorageError> {
        if !self.path.exists() {
            tracing::debug!("No address book at {:?}, starting empty", self.path);
            return Ok(LoadReport::default());
        }

        let contents = fs::read_to_string(&self.path)?;
        let entries: Vec<Value> = serde_json::from_str(&contents)?;

        let mut report = LoadReport::default();
        for (index, entry) in entries.into_iter().enumerate() {
            match Self::decode_entry(index, entry) {
                Ok(record) => report.book.add_record(record),
                Err(reason) => {
                    tracing::warn!("Skipping stored contact: {}", reason);
                    report.skipped.push(reason);
                }
            }
        }

        tracing::info!(
            "Loaded {} contacts from {:?} ({} skipped)",
            report.book.len(),
            self.path,
            report.skipped.len()
        );
        Ok(report)
    }

    fn save(&self, book: &AddressBook) -> Result<(), StorageError> {
        let bytes = Self::encode(book)?;

        let directory = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staging = NamedTempFile::new_in(directory)?;
        staging.write_all(&bytes)?;
        staging.flush()?;
        staging.persist(&self.path).map_err(|e| e.error)?;

        tracing::info!("Saved {} contacts to {:?}", book.len(), self.path);
        Ok(())
    }
}
