//! The assistant session: owns the address book and serves commands.

use super::command::{split_line, Command};
use crate::domain::{Birthday, Name, Phone, ValidatedField};
use crate::error::{AssistantError, AssistantResult, StorageResult};
use crate::models::{AddressBook, Record};
use crate::repositories::AddressBookRepository;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// Reply for a word that is not in the command table.
pub const UNKNOWN_COMMAND: &str = "Unknown command. Try again.";

/// Result of handling one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Text to show the user
    pub reply: String,

    /// Whether the command loop should end
    pub stop: bool,
}

impl Outcome {
    fn reply(reply: String) -> Self {
        Self { reply, stop: false }
    }
}

/// One interactive session over an address book.
///
/// The session owns the book for its whole lifetime and hands it to each
/// operation through `&mut self`; the repository is only touched on load
/// and save.
pub struct Assistant<R: AddressBookRepository> {
    book: AddressBook,
    repository: R,
    today: Option<NaiveDate>,
}

impl<R: AddressBookRepository> Assistant<R> {
    /// Start a session with an already loaded book.
    pub fn new(book: AddressBook, repository: R) -> Self {
        Self {
            book,
            repository,
            today: None,
        }
    }

    /// Start a session from whatever the repository has saved.
    pub fn load(repository: R) -> StorageResult<Self> {
        let book = repository.load()?;
        info!("Address book loaded with {} contacts", book.len());
        Ok(Self::new(book, repository))
    }

    /// Pin the date used for birthday countdowns instead of the clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Persist the current book.
    pub fn save(&self) -> StorageResult<()> {
        self.repository.save(&self.book)?;
        info!("Address book saved with {} contacts", self.book.len());
        Ok(())
    }

    /// Parse and serve one line of user input.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let (word, args) = split_line(line);

        match Command::lookup(word) {
            Some(command) => Outcome {
                reply: self.execute(command, args),
                stop: command == Command::Exit,
            },
            None => {
                debug!("Unknown command word: {:?}", word);
                Outcome::reply(UNKNOWN_COMMAND.to_string())
            }
        }
    }

    /// Run `command` and turn any error into a message for the user.
    pub fn execute(&mut self, command: Command, args: &str) -> String {
        debug!("Executing {} with args {:?}", command, args);

        match self.dispatch(command, args) {
            Ok(reply) => reply,
            Err(e) => {
                warn!("{} failed: {}", command, e);
                user_message(command, &e)
            }
        }
    }

    fn dispatch(&mut self, command: Command, args: &str) -> AssistantResult<String> {
        match command {
            Command::Greet => Ok(self.greet()),
            Command::AddContact => self.add_contact(args),
            Command::ChangeNumber => self.change_number(args),
            Command::ShowPhone => self.show_phone(args),
            Command::ShowAll => Ok(self.show_all()),
            Command::BirthdayCountdown => self.birthday_countdown(args),
            Command::Search => self.search(args),
            Command::Delete => self.delete(args),
            Command::Exit => self.exit(),
        }
    }

    fn greet(&self) -> String {
        let names: Vec<&str> = Command::all().iter().map(|c| c.name()).collect();
        format!(
            "Hello! I can help you with the following commands: {}.",
            names.join(", ")
        )
    }

    fn add_contact(&mut self, args: &str) -> AssistantResult<String> {
        let parts = arguments(args, 2, 3, Command::AddContact)?;

        // Build the whole record before touching the book
        let birthday = match parts.get(2) {
            Some(raw) => Some(Birthday::parse(*raw)?),
            None => None,
        };
        let phone = Phone::parse(parts[1])?;

        let mut record = Record::new(Name::new(parts[0]), birthday);
        record.add_phone(phone);

        let replaced = self.book.get(parts[0]).is_some();
        self.book.add(record);
        info!("Contact {} added (replaced: {})", parts[0], replaced);

        Ok(if replaced {
            "Contact replaced.".to_string()
        } else {
            "Contact added.".to_string()
        })
    }

    fn change_number(&mut self, args: &str) -> AssistantResult<String> {
        let parts = arguments(args, 2, 2, Command::ChangeNumber)?;
        let phone = Phone::parse(parts[1])?;

        let record = self
            .book
            .get_mut(parts[0])
            .ok_or_else(|| AssistantError::NotFound(parts[0].to_string()))?;
        record.replace_phones(vec![phone]);

        info!("Phone list of {} replaced", parts[0]);
        Ok("Changes saved.".to_string())
    }

    fn show_phone(&self, args: &str) -> AssistantResult<String> {
        let record = self.record(args, Command::ShowPhone)?;

        if record.phones().is_empty() {
            return Ok(format!("{} has no phone numbers.", record.name()));
        }
        Ok(record.phones_display())
    }

    fn show_all(&self) -> String {
        if self.book.is_empty() {
            return "Address book is empty.".to_string();
        }
        render_records(self.book.all())
    }

    fn birthday_countdown(&self, args: &str) -> AssistantResult<String> {
        let record = self.record(args, Command::BirthdayCountdown)?;

        let days = match self.today {
            Some(today) => record.days_to_next_birthday_from(today),
            None => record.days_to_next_birthday(),
        };

        Ok(match days {
            None => format!("Birthday of {} is not set.", record.name()),
            Some(0) => format!("Today is {}'s birthday!", record.name()),
            Some(1) => format!("1 day left until {}'s birthday.", record.name()),
            Some(n) => format!("{} days left until {}'s birthday.", n, record.name()),
        })
    }

    fn search(&self, args: &str) -> AssistantResult<String> {
        if args.is_empty() {
            return Err(AssistantError::MalformedArguments(
                Command::Search.usage().to_string(),
            ));
        }

        let matches = self.book.search(args);
        debug!("Search {:?} matched {} contacts", args, matches.len());

        if matches.is_empty() {
            return Ok("No matching contacts.".to_string());
        }
        Ok(render_records(matches))
    }

    fn delete(&mut self, args: &str) -> AssistantResult<String> {
        let name = single_argument(args, Command::Delete)?;

        Ok(match self.book.remove(name) {
            Some(_) => {
                info!("Contact {} deleted", name);
                "Contact deleted.".to_string()
            }
            None => "Nothing to delete.".to_string(),
        })
    }

    fn exit(&mut self) -> AssistantResult<String> {
        self.save()?;
        Ok("Good bye!".to_string())
    }

    fn record(&self, args: &str, command: Command) -> AssistantResult<&Record> {
        let name = single_argument(args, command)?;
        self.book
            .get(name)
            .ok_or_else(|| AssistantError::NotFound(name.to_string()))
    }
}

/// Split comma-separated arguments, requiring between `min` and `max` parts.
fn arguments(
    args: &str,
    min: usize,
    max: usize,
    command: Command,
) -> AssistantResult<Vec<&str>> {
    let parts: Vec<&str> = if args.trim().is_empty() {
        Vec::new()
    } else {
        args.split(',').map(str::trim).collect()
    };

    if parts.len() < min || parts.len() > max || parts.iter().any(|p| p.is_empty()) {
        return Err(AssistantError::MalformedArguments(command.usage().to_string()));
    }
    Ok(parts)
}

fn single_argument(args: &str, command: Command) -> AssistantResult<&str> {
    let name = args.trim();
    if name.is_empty() {
        return Err(AssistantError::MalformedArguments(command.usage().to_string()));
    }
    Ok(name)
}

fn render_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> String {
    records
        .into_iter()
        .map(|record| match record.birthday() {
            Some(birthday) => format!(
                "{}: {}; birthday: {}",
                record.name(),
                record.phones_display(),
                birthday
            ),
            None => format!("{}: {}", record.name(), record.phones_display()),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn user_message(command: Command, error: &AssistantError) -> String {
    match error {
        AssistantError::InvalidFormat(e) => format!("Invalid input: {}. Try again.", e),
        AssistantError::NotFound(_) => "No contact with that name.".to_string(),
        AssistantError::MalformedArguments(usage) => {
            format!("Not enough arguments. Usage: {}", usage)
        }
        AssistantError::Storage(e) if command == Command::Exit => {
            format!("Could not save the address book: {}. Good bye!", e)
        }
        AssistantError::Storage(e) => format!("Could not save the address book: {}", e),
    }
}
