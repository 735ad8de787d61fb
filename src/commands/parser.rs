/// Splitting a line of user input into a command name and its arguments

/// Commands spelled with two words; matched on the first two tokens only
const TWO_WORD_COMMANDS: &[&str] = &[
    "show all",
    "add contact",
    "change contact",
    "delete contact",
    "add birthday",
    "change birthday",
    "show birthday",
    "add email",
    "change email",
    "add address",
    "change address",
];

/// A command name (lower-cased) plus the remaining whitespace-separated tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: String,
    pub args: Vec<String>,
}

/// Parse one line of input
///
/// Verbs are case-insensitive; arguments keep their original case. An empty
/// line yields an empty command.
pub fn parse_input(line: &str) -> ParsedInput {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.len() >= 2 {
        let two_words = format!("{} {}", parts[0], parts[1]).to_lowercase();
        if TWO_WORD_COMMANDS.contains(&two_words.as_str()) {
            return ParsedInput {
                command: two_words,
                args: to_owned(&parts[2..]),
            };
        }
    }

    match parts.split_first() {
        Some((first, rest)) => ParsedInput {
            command: first.to_lowercase(),
            args: to_owned(rest),
        },
        None => ParsedInput {
            command: String::new(),
            args: Vec::new(),
        },
    }
}

fn to_owned(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|part| part.to_string()).collect()
}
