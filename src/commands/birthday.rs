/// Birthday commands: set, change, show and the upcoming-birthdays query

use crate::commands::{existing, require, CommandError};
use crate::domain::{AddressBook, DomainError, DEFAULT_BIRTHDAY_WINDOW};

pub fn add_birthday(args: &[String], book: &mut AddressBook) -> Result<String, CommandError> {
    require(args, 2, "add birthday [name] [DD.MM.YYYY]")?;
    let record = existing(book, &args[0])?;
    record.set_birthday(&args[1])?;
    Ok("Birthday added.".to_string())
}

/// `change birthday`: only allowed once a birthday has been added
pub fn change_birthday(args: &[String], book: &mut AddressBook) -> Result<String, CommandError> {
    require(args, 2, "change birthday [name] [new_DD.MM.YYYY]")?;
    let record = existing(book, &args[0])?;
    if record.birthday().is_none() {
        return Err(CommandError::MissingValue { name: args[0].clone(), field: "birthday" });
    }
    record.set_birthday(&args[1])?;
    Ok("Birthday updated.".to_string())
}

pub fn show_birthday(args: &[String], book: &mut AddressBook) -> Result<String, CommandError> {
    require(args, 1, "show birthday [name]")?;
    let name = &args[0];
    let record = book
        .find(name)
        .ok_or_else(|| DomainError::ContactNotFound { name: name.clone() })?;

    Ok(match record.birthday() {
        Some(birthday) => format!("{}'s birthday: {}", name, birthday.formatted()),
        None => format!("{} has no birthday set.", name),
    })
}

/// `birthdays [n]`: contacts to congratulate exactly `n` days from today (default 7)
pub fn birthdays(args: &[String], book: &mut AddressBook) -> Result<String, CommandError> {
    let days = match args.first() {
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| CommandError::InvalidDayCount(raw.clone()))?,
        None => DEFAULT_BIRTHDAY_WINDOW,
    };

    let reminders = book.birthdays_in_days(days)?;
    let unit = if days == 1 { "day" } else { "days" };
    if reminders.is_empty() {
        return Ok(format!("No birthdays in {} {}.", days, unit));
    }

    let lines: Vec<String> = reminders
        .iter()
        .map(|reminder| format!("• {} → {}", reminder.name, reminder.formatted_date()))
        .collect();
    Ok(format!("Birthdays in {} {}:\n{}", days, unit, lines.join("\n")))
}
