/// Text commands for managing the address book
///
/// Each command family lives in its own file. Handlers share one signature
/// and are registered in a flat name-to-handler table; `dispatch` is the only
/// place where their errors are turned into user-facing text.

pub mod parser;
pub mod general;
pub mod contact;
pub mod birthday;
pub mod email;
pub mod address;
pub mod search;

pub use parser::{parse_input, ParsedInput};

use thiserror::Error;
use crate::domain::{AddressBook, DomainError, Record};

/// Errors a command handler can report
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Not enough arguments. Usage: {usage}")]
    NotEnoughArguments { usage: &'static str },

    #[error("Contact '{name}' has no {field}. Use 'add {field}' first.")]
    MissingValue { name: String, field: &'static str },

    #[error("Enter a valid number (e.g., 'birthdays 5')")]
    InvalidDayCount(String),
}

/// Signature shared by every command handler
pub type Handler = fn(&[String], &mut AddressBook) -> Result<String, CommandError>;

/// Every command the shell understands, except `close` and `exit`
pub const COMMANDS: &[(&str, Handler)] = &[
    ("hello", general::hello),
    ("help", general::help),
    ("add contact", contact::add_contact),
    ("change contact", contact::change_contact),
    ("delete contact", contact::delete_contact),
    ("show all", contact::show_all),
    ("add birthday", birthday::add_birthday),
    ("change birthday", birthday::change_birthday),
    ("show birthday", birthday::show_birthday),
    ("birthdays", birthday::birthdays),
    ("add email", email::add_email),
    ("change email", email::change_email),
    ("add address", address::add_address),
    ("change address", address::change_address),
    ("search", search::search_contacts),
];

const EXIT_COMMANDS: &[&str] = &["close", "exit"];

/// What the shell should do after a line has been handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text and keep going
    Reply(String),
    /// Save and stop
    Exit,
    /// Nothing to print (blank input)
    Nothing,
}

/// Find the handler registered under `command`
pub fn lookup(command: &str) -> Option<Handler> {
    COMMANDS
        .iter()
        .find(|(name, _)| *name == command)
        .map(|(_, handler)| *handler)
}

/// Parse and run one line of input against `book`
///
/// Handler errors never escape: they come back as an `Error: ...` reply.
pub fn dispatch(line: &str, book: &mut AddressBook) -> Outcome {
    let ParsedInput { command, args } = parse_input(line);

    if command.is_empty() {
        return Outcome::Nothing;
    }
    if EXIT_COMMANDS.contains(&command.as_str()) {
        return Outcome::Exit;
    }

    let Some(handler) = lookup(&command) else {
        tracing::debug!("Unknown command: {}", command);
        return Outcome::Reply(format!(
            "Invalid command: '{}'. Type 'help' for assistance.",
            command
        ));
    };

    tracing::debug!("Running command '{}' with {} args", command, args.len());
    match handler(&args, book) {
        Ok(reply) => Outcome::Reply(reply),
        Err(e) => {
            tracing::debug!("Command '{}' failed: {:?}", command, e);
            Outcome::Reply(format!("Error: {}", e))
        }
    }
}

/// Check that at least `count` arguments were given
fn require(args: &[String], count: usize, usage: &'static str) -> Result<(), CommandError> {
    if args.len() < count {
        return Err(CommandError::NotEnoughArguments { usage });
    }
    Ok(())
}

/// Look up a contact that must already exist
fn existing<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record, CommandError> {
    book.find_mut(name)
        .ok_or_else(|| DomainError::ContactNotFound { name: name.to_string() }.into())
}
