/// Email commands

use crate::commands::{existing, require, CommandError};
use crate::domain::AddressBook;

pub fn add_email(args: &[String], book: &mut AddressBook) -> Result<String, CommandError> {
    require(args, 2, "add email [name] [email]")?;
    let record = existing(book, &args[0])?;
    record.set_email(&args[1])?;
    Ok("Email added.".to_string())
}

/// `change email`: only allowed once an email has been added
pub fn change_email(args: &[String], book: &mut AddressBook) -> Result<String, CommandError> {
    require(args, 2, "change email [name] [new_email]")?;
    let record = existing(book, &args[0])?;
    if record.email().is_none() {
        return Err(CommandError::MissingValue { name: args[0].clone(), field: "email" });
    }
    record.set_email(&args[1])?;
    Ok("Email updated.".to_string())
}
