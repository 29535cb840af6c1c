//! Command dispatch.
//!
//! [`CommandDispatcher`] owns the address book and the outside collaborators
//! (weather, clock). It runs one [`Command`] at a time through public
//! directory and record operations, and is the single place where errors
//! become user-facing text.

use super::parser::Command;
use crate::clock::{Clock, SystemClock};
use crate::directory::AddressBook;
use crate::domain::{Birthday, Name, Phone};
use crate::error::{CommandError, CommandResult, DirectoryError};
use crate::metrics::Metrics;
use crate::models::Record;
use crate::weather::WeatherProvider;
use std::num::NonZeroUsize;
use tracing::{debug, info};

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const NO_CONTACTS: &str = "No contacts found";

pub const HELP_TEXT: &str = "Available commands:
- hello: Greet the assistant
- add <name> <phone> [DD/MM]: Add a contact, or add a phone to an existing one
- change <name> <old_phone> <new_phone>: Change a phone number of a contact
- phone <name>: Get the phone number(s) of a contact
- birthday <name> <DD/MM>: Set the birthday of a contact
- days <name>: Days until the next birthday of a contact
- search <query>: Find contacts whose name contains the query
- delete <name>: Delete a contact
- show all [page_size]: Show all saved contacts, page by page
- weather <city>: Get the current weather in the specified city
- time: Get the current time
- help: Show available commands
- goodbye, close, exit: Close the assistant";

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Show the text and keep reading
    Continue(String),
    /// Show the text and stop
    Exit(String),
}

impl Outcome {
    pub fn text(&self) -> &str {
        match self {
            Outcome::Continue(text) | Outcome::Exit(text) => text,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Outcome::Exit(_))
    }
}

/// Maps commands onto the address book and external providers.
pub struct CommandDispatcher {
    book: AddressBook,
    weather: Box<dyn WeatherProvider>,
    clock: Box<dyn Clock>,
    metrics: Metrics,
}

impl CommandDispatcher {
    /// Create a dispatcher over `book` using the system clock.
    pub fn new(book: AddressBook, weather: Box<dyn WeatherProvider>) -> Self {
        Self {
            book,
            weather,
            clock: Box::new(SystemClock),
            metrics: Metrics::new(),
        }
    }

    /// Replace the clock.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Report into a shared metrics collector.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Parse and run one line of input, always producing text to show.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let outcome = Command::parse(line).and_then(|command| self.dispatch(command));
        self.metrics.record_command(outcome.is_err());
        match outcome {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!("Command failed: {}", err);
                Outcome::Continue(err.user_message())
            }
        }
    }

    /// Run a parsed command.
    ///
    /// # Errors
    ///
    /// Any directory, validation or provider failure, untranslated.
    pub fn dispatch(&mut self, command: Command) -> CommandResult<Outcome> {
        debug!("Dispatching {:?}", command);
        let text = match command {
            Command::Hello => GREETING.to_string(),
            Command::Add {
                name,
                phone,
                birthday,
            } => self.add_contact(&name, &phone, birthday.as_deref())?,
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => self.change_phone(&name, &old_phone, &new_phone)?,
            Command::Phone { name } => self.phones(&name)?,
            Command::ShowAll { page_size } => self.show_all(page_size.as_deref())?,
            Command::Birthday { name, date } => self.set_birthday(&name, &date)?,
            Command::Days { name } => self.days_to_birthday(&name)?,
            Command::Search { query } => self.search(&query),
            Command::Delete { name } => self.delete_contact(&name)?,
            Command::Weather { city } => self.weather(&city)?,
            Command::Time => format!("The current time is {}", self.clock.now().format("%H:%M")),
            Command::Help => HELP_TEXT.to_string(),
            Command::Exit => return Ok(Outcome::Exit(FAREWELL.to_string())),
        };
        Ok(Outcome::Continue(text))
    }

    /// Find the stored key matching user-typed `name`, ignoring case.
    fn resolve(&self, name: &str) -> Option<String> {
        let wanted = name.trim().to_lowercase();
        self.book
            .keys()
            .find(|key| key.to_lowercase() == wanted)
            .map(str::to_string)
    }

    /// Fetch a copy of the record for `name` together with its key.
    fn fetch(&self, name: &str) -> CommandResult<(String, Record)> {
        let not_found = || DirectoryError::ContactNotFound(name.to_string());
        let key = self.resolve(name).ok_or_else(not_found)?;
        let record = self.book.get(&key).cloned().ok_or_else(not_found)?;
        Ok((key, record))
    }

    fn add_contact(&mut self, name: &str, phone: &str, birthday: Option<&str>) -> CommandResult<String> {
        let name = Name::new(name)?;
        let phone = Phone::new(phone)?;
        let birthday = birthday.map(str::parse::<Birthday>).transpose()?;

        match self.fetch(name.as_str()) {
            Ok((_, mut record)) => {
                record.add_phone(phone);
                if let Some(birthday) = birthday {
                    record.set_birthday(birthday);
                }
                self.book.add_record(record);
            }
            Err(_) => {
                info!("New contact {}", name);
                self.book.add_record(Record::new(name, Some(phone), birthday));
            }
        }
        Ok("Contact added successfully".to_string())
    }

    fn change_phone(&mut self, name: &str, old: &str, new: &str) -> CommandResult<String> {
        let (_, mut record) = self.fetch(name)?;
        record.edit_phone(old, new)?;
        self.book.add_record(record);
        Ok("Contact updated successfully".to_string())
    }

    fn phones(&self, name: &str) -> CommandResult<String> {
        let (_, record) = self.fetch(name)?;
        if record.phones().is_empty() {
            return Ok("No phone numbers saved".to_string());
        }
        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        Ok(phones.join(", "))
    }

    fn show_all(&mut self, page_size: Option<&str>) -> CommandResult<String> {
        if let Some(size) = page_size {
            let size = size.parse::<NonZeroUsize>().map_err(|_| {
                CommandError::InvalidArgument(format!(
                    "Page size must be a number greater than 0, got: {}",
                    size
                ))
            })?;
            self.book.set_page_size(size);
        }

        if self.book.is_empty() {
            return Ok(NO_CONTACTS.to_string());
        }

        let pages = self.book.pages();
        let total = pages.total_pages();
        let mut output = String::new();
        for (index, page) in pages.enumerate() {
            output.push_str(&format!("Page {}/{}\n", index + 1, total));
            for record in page {
                output.push_str(&record.to_string());
            }
        }
        Ok(output.trim_end().to_string())
    }

    fn set_birthday(&mut self, name: &str, date: &str) -> CommandResult<String> {
        let birthday: Birthday = date.parse()?;
        let (_, mut record) = self.fetch(name)?;
        record.set_birthday(birthday);
        self.book.add_record(record);
        Ok("Birthday added successfully".to_string())
    }

    fn days_to_birthday(&self, name: &str) -> CommandResult<String> {
        let (key, record) = self.fetch(name)?;
        let text = match record.days_to_birthday_on(self.clock.today()) {
            None => "Birthday not specified".to_string(),
            Some(0) => format!("{}'s birthday is today!", key),
            Some(1) => format!("1 day until {}'s birthday", key),
            Some(days) => format!("{} days until {}'s birthday", days, key),
        };
        Ok(text)
    }

    fn search(&self, query: &str) -> String {
        let results = self.book.search_records(query);
        if results.is_empty() {
            return NO_CONTACTS.to_string();
        }
        results
            .iter()
            .map(Record::to_string)
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    fn delete_contact(&mut self, name: &str) -> CommandResult<String> {
        let key = self
            .resolve(name)
            .ok_or_else(|| DirectoryError::ContactNotFound(name.to_string()))?;
        self.book.delete_record(&key)?;
        info!("Deleted contact {}", key);
        Ok("Contact deleted successfully".to_string())
    }

    fn weather(&self, city: &str) -> CommandResult<String> {
        let report = self.weather.current_weather(city)?;
        Ok(format!(
            "The current weather in {} is {}. Temperature: {}°C",
            report.city, report.description, report.temperature
        ))
    }
}
