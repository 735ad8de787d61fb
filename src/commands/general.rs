/// Greeting and help commands

use crate::commands::CommandError;
use crate::domain::AddressBook;

const HELP_TEXT: &str = "\
ADDRESS BOOK BOT - AVAILABLE COMMANDS

CONTACT MANAGEMENT:
  add contact [name] [phone]           - Add new contact
  change contact [name] [old] [new]    - Change phone number
  delete contact [name]                - Delete contact
  show all                             - Display all contacts
  search [query]                       - Search by name/phone/email/address/birthday

EMAIL MANAGEMENT:
  add email [name] [email]             - Add email to contact
  change email [name] [new_email]      - Change contact email

ADDRESS MANAGEMENT:
  add address [name] [address]         - Add address to contact
  change address [name] [new_address] - Change contact address

BIRTHDAY MANAGEMENT:
  add birthday [name] [DD.MM.YYYY]     - Add birthday to contact
  change birthday [name] [DD.MM.YYYY]  - Change contact birthday
  show birthday [name]                 - Display contact birthday
  birthdays [N]                        - Show birthdays in exactly N days (default: 7)
                                         Examples: birthdays 0 (today), birthdays 3, birthdays 30

GENERAL:
  hello                                - Greet the bot
  help                                 - Show this menu
  close/exit                           - Save and exit";

pub fn hello(_args: &[String], _book: &mut AddressBook) -> Result<String, CommandError> {
    Ok("How can I help you?".to_string())
}

pub fn help(_args: &[String], _book: &mut AddressBook) -> Result<String, CommandError> {
    Ok(HELP_TEXT.to_string())
}
