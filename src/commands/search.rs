/// Free-text search over every contact field

use crate::commands::{require, CommandError};
use crate::domain::{AddressBook, Record};

/// `search <query...>`: all remaining words form one query
pub fn search_contacts(args: &[String], book: &mut AddressBook) -> Result<String, CommandError> {
    require(args, 1, "search [query]")?;
    let query = args.join(" ");

    let results = book.search(&query);
    if results.is_empty() {
        return Ok(format!("No contacts found matching '{}'.", query));
    }

    let lines: Vec<String> = results.into_iter().map(Record::render).collect();
    Ok(format!("Search results for '{}':\n{}", query, lines.join("\n")))
}
