/// Public library interface for the contact book
///
/// This module exports the data model, the storage layer, the command table
/// and the interactive shell, plus the `ContactBookApp` that wires them
/// together for the binary.

use std::path::PathBuf;
use thiserror::Error;

// Internal modules
mod domain;
mod storage;
pub mod commands;
pub mod shell;

// Re-export public modules and types
pub use domain::*;
pub use storage::{ContactStorage, JsonFileStorage, LoadReport, StorageError, DEFAULT_FILE_NAME};
pub use commands::{dispatch, CommandError, Outcome};
pub use shell::Session;

/// Errors that can occur while running the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The contact book application: a JSON-backed book plus startup notices
///
/// Opening never fails because of the data file; problems with it are
/// collected as notices and an empty book is used instead.
pub struct ContactBookApp {
    storage: JsonFileStorage,
    book: AddressBook,
    notices: Vec<String>,
}

impl ContactBookApp {
    /// Load the book stored at `path`
    pub fn open(path: PathBuf) -> Self {
        tracing::info!("Opening address book at {:?}", path);
        let storage = JsonFileStorage::new(path);

        let (book, notices) = match storage.load() {
            Ok(report) => {
                let notices = report
                    .skipped
                    .into_iter()
                    .map(|reason| format!("Warning: skipped stored contact, {}", reason))
                    .collect();
                (report.book, notices)
            }
            Err(e) => {
                tracing::warn!("Could not load {:?}: {}", storage.path(), e);
                let notice = format!(
                    "Error: Can't read {}. Created new address book.",
                    storage.path().display()
                );
                (AddressBook::new(), vec![notice])
            }
        };

        Self { storage, book, notices }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Problems found while loading, in the order they were found
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Turn the app into an interactive session
    pub fn into_session(self) -> Session<JsonFileStorage> {
        Session::new(self.storage, self.book, self.notices)
    }

    /// Run the interactive shell on stdin/stdout until exit or Ctrl-C
    pub async fn run(self) -> Result<(), AppError> {
        let mut session = self.into_session();
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();

        session.run(stdin, stdout, tokio::signal::ctrl_c()).await?;
        tracing::info!("Session finished with {} contacts", session.book().len());
        Ok(())
    }
}
