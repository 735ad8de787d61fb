/// Domain module containing the contact data model and its validation rules
///
/// This module defines the core entities (field values, Record, AddressBook)
/// and the error taxonomy every other layer builds on.

pub mod fields;
pub mod record;
pub mod book;

// Re-export public types for easy access
pub use fields::*;
pub use record::*;
pub use book::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Phone number must contain 10 digits. Use format like 0931112233.")]
    InvalidPhone(String),

    #[error("Invalid email format. Must contain '@' and domain.")]
    InvalidEmail(String),

    #[error("Address cannot be empty.")]
    InvalidAddress,

    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidDate(String),

    #[error("Contact name cannot be empty.")]
    InvalidName,

    #[error("Contact '{name}' not found")]
    ContactNotFound { name: String },

    #[error("Phone number {phone} not found")]
    PhoneNotFound { phone: String },

    #[error("{message}")]
    InvalidArgument { message: String },
}

/// Broad classification of a domain failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed phone, email, address, date or name
    Validation,
    /// Unknown contact or unknown phone value
    NotFound,
    /// Out-of-range argument such as a negative day count
    Argument,
}

impl DomainError {
    /// Which family of failure this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::InvalidPhone(_)
            | DomainError::InvalidEmail(_)
            | DomainError::InvalidAddress
            | DomainError::InvalidDate(_)
            | DomainError::InvalidName => ErrorKind::Validation,
            DomainError::ContactNotFound { .. } | DomainError::PhoneNotFound { .. } => {
                ErrorKind::NotFound
            }
            DomainError::InvalidArgument { .. } => ErrorKind::Argument,
        }
    }
}
