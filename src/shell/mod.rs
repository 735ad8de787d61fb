/// Interactive shell around the address book
///
/// This module reads commands line by line, prints their replies and saves
/// the book when the user leaves, input ends or an interrupt arrives.

pub mod session;

// Re-export main types
pub use session::Session;
