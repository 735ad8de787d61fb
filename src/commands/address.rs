/// Address commands; everything after the name is the address

use crate::commands::{existing, require, CommandError};
use crate::domain::AddressBook;

pub fn add_address(args: &[String], book: &mut AddressBook) -> Result<String, CommandError> {
    require(args, 2, "add address [name] [address]")?;
    let record = existing(book, &args[0])?;
    record.set_address(&args[1..].join(" "))?;
    Ok("Address added.".to_string())
}

/// `change address`: only allowed once an address has been added
pub fn change_address(args: &[String], book: &mut AddressBook) -> Result<String, CommandError> {
    require(args, 2, "change address [name] [new_address]")?;
    let record = existing(book, &args[0])?;
    if record.address().is_none() {
        return Err(CommandError::MissingValue { name: args[0].clone(), field: "address" });
    }
    record.set_address(&args[1..].join(" "))?;
    Ok("Address updated.".to_string())
}
