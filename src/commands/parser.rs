//! Turning a line of user input into a [`Command`].
//!
//! Input is split on whitespace into a verb and argument tokens. Verbs match
//! case-insensitively; arguments keep their case. Multi-word names are
//! allowed wherever a name is the leading argument.

use crate::error::{CommandError, CommandResult};

pub const HINT_ADD: &str = "Give me name and phone please";
pub const HINT_CHANGE: &str = "Give me name, old phone, and new phone please";
pub const HINT_NAME: &str = "Enter user name";
pub const HINT_BIRTHDAY: &str = "Give me name and birthday (in the format DD/MM) please";
pub const HINT_CITY: &str = "Enter city name";
pub const HINT_SEARCH: &str = "Give me a search query please";

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    /// Create a contact or add a phone (and birthday) to an existing one
    Add {
        name: String,
        phone: String,
        birthday: Option<String>,
    },
    /// Replace one phone number with another
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    /// List a contact's phone numbers
    Phone { name: String },
    /// Render every contact, optionally changing the page size first
    ShowAll { page_size: Option<String> },
    /// Set or replace a birthday
    Birthday { name: String, date: String },
    /// Days until a contact's next birthday
    Days { name: String },
    Search { query: String },
    Delete { name: String },
    Weather { city: String },
    Time,
    Help,
    Exit,
}

impl Command {
    /// Parse a whole input line.
    ///
    /// # Errors
    ///
    /// - `CommandError::UnknownCommand` for an empty line or unknown verb
    /// - `CommandError::MissingArguments` when a verb lacks arguments
    pub fn parse(line: &str) -> CommandResult<Command> {
        let mut tokens = line.split_whitespace();
        let verb = tokens.next().unwrap_or_default();
        let args: Vec<&str> = tokens.collect();
        Self::from_tokens(verb, &args)
    }

    /// Build a command from a verb and its arguments.
    pub fn from_tokens(verb: &str, args: &[&str]) -> CommandResult<Command> {
        let verb = verb.to_lowercase();
        let command = match verb.as_str() {
            "hello" => Command::Hello,
            "add" => Self::parse_add(args)?,
            "change" => {
                let (name, phones) = split_tail(args, 2, HINT_CHANGE)?;
                Command::Change {
                    name,
                    old_phone: phones[0].to_string(),
                    new_phone: phones[1].to_string(),
                }
            }
            "phone" => Command::Phone {
                name: join_required(args, HINT_NAME)?,
            },
            "show" => match args {
                [all] if all.eq_ignore_ascii_case("all") => Command::ShowAll { page_size: None },
                [all, size] if all.eq_ignore_ascii_case("all") => Command::ShowAll {
                    page_size: Some(size.to_string()),
                },
                _ => return Err(CommandError::UnknownCommand(format!("show {}", args.join(" ")))),
            },
            "birthday" => {
                let (name, date) = split_tail(args, 1, HINT_BIRTHDAY)?;
                Command::Birthday {
                    name,
                    date: date[0].to_string(),
                }
            }
            "days" => Command::Days {
                name: join_required(args, HINT_NAME)?,
            },
            "search" => Command::Search {
                query: join_required(args, HINT_SEARCH)?,
            },
            "delete" => Command::Delete {
                name: join_required(args, HINT_NAME)?,
            },
            "weather" => Command::Weather {
                city: join_required(args, HINT_CITY)?,
            },
            "time" => Command::Time,
            "help" => Command::Help,
            "goodbye" | "bye" | "close" | "exit" => Command::Exit,
            "good" if matches!(args.first(), Some(word) if word.eq_ignore_ascii_case("bye")) => {
                Command::Exit
            }
            _ => return Err(CommandError::UnknownCommand(verb)),
        };
        Ok(command)
    }

    /// `add <name...> <phone> [DD/MM]`: a trailing token with a slash is the
    /// birthday, the token before it the phone.
    fn parse_add(args: &[&str]) -> CommandResult<Command> {
        let has_birthday = args.last().is_some_and(|last| last.contains('/'));
        if has_birthday {
            let (name, tail) = split_tail(args, 2, HINT_ADD)?;
            Ok(Command::Add {
                name,
                phone: tail[0].to_string(),
                birthday: Some(tail[1].to_string()),
            })
        } else {
            let (name, tail) = split_tail(args, 1, HINT_ADD)?;
            Ok(Command::Add {
                name,
                phone: tail[0].to_string(),
                birthday: None,
            })
        }
    }
}

/// Join all arguments with single spaces; at least one is required.
fn join_required(args: &[&str], hint: &'static str) -> CommandResult<String> {
    if args.is_empty() {
        return Err(CommandError::MissingArguments(hint));
    }
    Ok(args.join(" "))
}

/// Split off the last `n` arguments; the rest (at least one) form the name.
fn split_tail<'a>(
    args: &'a [&'a str],
    n: usize,
    hint: &'static str,
) -> CommandResult<(String, &'a [&'a str])> {
    if args.len() < n + 1 {
        return Err(CommandError::MissingArguments(hint));
    }
    let (name, tail) = args.split_at(args.len() - n);
    Ok((name.join(" "), tail))
}
