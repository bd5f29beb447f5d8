//! The command table: typed words mapped to assistant operations.

use std::fmt;

/// Every operation the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Greet,
    AddContact,
    ChangeNumber,
    ShowPhone,
    ShowAll,
    BirthdayCountdown,
    Search,
    Delete,
    Exit,
}

/// Typed word -> command. The first word listed for a command is its
/// canonical spelling.
const COMMAND_TABLE: &[(&str, Command)] = &[
    ("hello", Command::Greet),
    ("greet", Command::Greet),
    ("add", Command::AddContact),
    ("add-contact", Command::AddContact),
    ("change", Command::ChangeNumber),
    ("change-number", Command::ChangeNumber),
    ("phone", Command::ShowPhone),
    ("show-phone", Command::ShowPhone),
    ("show_all", Command::ShowAll),
    ("show-all", Command::ShowAll),
    ("birthday", Command::BirthdayCountdown),
    ("birthday-countdown", Command::BirthdayCountdown),
    ("search", Command::Search),
    ("delete", Command::Delete),
    ("remove", Command::Delete),
    ("exit", Command::Exit),
    ("close", Command::Exit),
    ("quit", Command::Exit),
];

impl Command {
    /// Look up the command for a typed word.
    ///
    /// Returns `None` for words that are not in the table.
    pub fn lookup(word: &str) -> Option<Self> {
        COMMAND_TABLE
            .iter()
            .find(|(name, _)| *name == word)
            .map(|(_, command)| *command)
    }

    /// Canonical word for this command.
    pub fn name(self) -> &'static str {
        COMMAND_TABLE
            .iter()
            .find(|(_, command)| *command == self)
            .map(|(name, _)| *name)
            .unwrap_or("")
    }

    /// Argument layout shown when a command is called with too few arguments.
    pub fn usage(self) -> &'static str {
        match self {
            Command::AddContact => "add <name>, <phone>[, <YYYY-MM-DD>]",
            Command::ChangeNumber => "change <name>, <phone>",
            Command::ShowPhone => "phone <name>",
            Command::BirthdayCountdown => "birthday <name>",
            Command::Search => "search <text>",
            Command::Delete => "delete <name>",
            Command::Greet => "hello",
            Command::ShowAll => "show_all",
            Command::Exit => "exit",
        }
    }

    /// All commands, in the order they are listed to the user.
    pub fn all() -> [Command; 9] {
        [
            Command::Greet,
            Command::AddContact,
            Command::ChangeNumber,
            Command::ShowPhone,
            Command::ShowAll,
            Command::BirthdayCountdown,
            Command::Search,
            Command::Delete,
            Command::Exit,
        ]
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Split an input line into the command word and the rest of the line.
///
/// Leading and trailing whitespace is ignored; the argument string is
/// empty when the line holds a single word.
pub fn split_line(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((word, args)) => (word, args.trim()),
        None => (line, ""),
    }
}
