/// The read-dispatch-print loop
///
/// The loop is generic over its input, output and shutdown signal so the
/// binary can drive it from stdin/stdout/Ctrl-C and tests from memory.

use std::future::Future;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info};

use crate::commands::{dispatch, Outcome};
use crate::domain::AddressBook;
use crate::storage::ContactStorage;
use crate::AppError;

const BANNER: &str = "\nWELCOME TO ADDRESS BOOK ASSISTANT BOT\nType 'help' to see all available commands\n";
const PROMPT: &str = "Enter a command: ";

/// One interactive session over a loaded book
pub struct Session<S: ContactStorage> {
    storage: S,
    book: AddressBook,
    /// Messages shown right after the banner (load problems)
    notices: Vec<String>,
}

impl<S: ContactStorage> Session<S> {
    pub fn new(storage: S, book: AddressBook, notices: Vec<String>) -> Self {
        Self { storage, book, notices }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Run until `close`/`exit`, end of input, or `shutdown` resolves
    ///
    /// Every way out saves the book first. A failed save is reported to the
    /// user and logged but does not turn into an error.
    pub async fn run<R, W, F>(&mut self, mut reader: R, mut writer: W, shutdown: F) -> Result<(), AppError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
        F: Future,
    {
        tokio::pin!(shutdown);

        writer.write_all(BANNER.as_bytes()).await?;
        for notice in &self.notices {
            writer.write_all(format!("{}\n", notice).as_bytes()).await?;
        }

        let mut buffer = Vec::new();
        loop {
            writer.write_all(PROMPT.as_bytes()).await?;
            writer.flush().await?;
            buffer.clear();

            tokio::select! {
                read = reader.read_until(b'\n', &mut buffer) => {
                    match read {
                        Ok(0) => {
                            info!("Input closed, saving and exiting");
                            writer.write_all(b"\n").await?;
                            self.save_and_report(&mut writer, "Data saved. Good bye!").await?;
                            break;
                        }
                        Ok(_) => {
                            // Undecodable bytes become U+FFFD instead of ending the session
                            let line = String::from_utf8_lossy(&buffer);
                            if self.handle_line(&line, &mut writer).await? {
                                break;
                            }
                        }
                        Err(e) => {
                            error!("Failed to read input: {}", e);
                            self.save_and_report(&mut writer, "Data saved.").await?;
                            return Err(AppError::Io(e));
                        }
                    }
                }
                _ = &mut shutdown => {
                    info!("Interrupted, saving and exiting");
                    writer.write_all(b"\n\nExiting... (Data will be saved)\n").await?;
                    self.save_and_report(&mut writer, "Data saved. Good bye!").await?;
                    break;
                }
            }
        }

        writer.flush().await?;
        Ok(())
    }

    /// Dispatch one line; returns true when the session should end
    async fn handle_line<W: AsyncWrite + Unpin>(&mut self, line: &str, writer: &mut W) -> Result<bool, AppError> {
        match dispatch(line, &mut self.book) {
            Outcome::Nothing => Ok(false),
            Outcome::Reply(reply) => {
                writer.write_all(format!("\n{}\n\n", reply).as_bytes()).await?;
                Ok(false)
            }
            Outcome::Exit => {
                debug!("Exit requested");
                self.save_and_report(writer, "\nData saved. Good bye!").await?;
                Ok(true)
            }
        }
    }

    /// Best-effort save with a one-line report to the user
    async fn save_and_report<W: AsyncWrite + Unpin>(&self, writer: &mut W, success: &str) -> Result<(), AppError> {
        let message = match self.storage.save(&self.book) {
            Ok(()) => success.to_string(),
            Err(e) => {
                error!("Failed to save address book: {}", e);
                format!("Error: could not save data: {}", e)
            }
        };
        writer.write_all(format!("{}\n", message).as_bytes()).await?;
        Ok(())
    }
}
