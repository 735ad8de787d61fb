/// Commands that create, change, delete and list contacts

use crate::commands::{existing, require, CommandError};
use crate::domain::{AddressBook, PhoneNumber, Record};

/// `add contact <name> <phone>`: create the contact or append a phone to it
///
/// The phone is validated first so a bad number never leaves an empty
/// contact behind.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> Result<String, CommandError> {
    require(args, 2, "add contact [name] [phone]")?;
    let (name, phone) = (&args[0], &args[1]);
    let phone = PhoneNumber::new(phone.as_str())?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone.as_str())?;
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name.as_str())?;
    record.add_phone(phone.as_str())?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change contact <name> <old> <new>`: replace one phone number
pub fn change_contact(args: &[String], book: &mut AddressBook) -> Result<String, CommandError> {
    require(args, 3, "change contact [name] [old_phone] [new_phone]")?;
    let record = existing(book, &args[0])?;
    record.edit_phone(&args[1], &args[2])?;
    Ok("Contact updated.".to_string())
}

pub fn delete_contact(args: &[String], book: &mut AddressBook) -> Result<String, CommandError> {
    require(args, 1, "delete contact [name]")?;
    let name = &args[0];
    book.delete(name)?;
    Ok(format!("Contact '{}' deleted.", name))
}

pub fn show_all(_args: &[String], book: &mut AddressBook) -> Result<String, CommandError> {
    if book.is_empty() {
        return Ok("No contacts saved.".to_string());
    }

    let lines: Vec<String> = book.iter().map(Record::render).collect();
    Ok(format!("All contacts:\n{}", lines.join("\n")))
}
