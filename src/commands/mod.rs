//! # Command Layer
//!
//! Each command lives in its own submodule as a small struct holding its
//! already-validated arguments. [`Command`] is the closed set of commands the
//! address book understands.
//!
//! A command goes through two steps:
//! - **Construction** checks the arguments on their own (index is positive,
//!   keywords are present, fields are valid) and fails with a
//!   [`CommandError`](crate::error::CommandError) before the store is touched.
//! - **Execution** runs against an explicit [`CommandContext`] and either
//!   completes its mutation and returns a [`CommandResult`], or fails and
//!   leaves the store unchanged.
//!
//! Commands never print. The caller renders the returned [`CommandResult`].

use crate::error::{CommandError, Result};
use crate::models::Person;
use crate::store::AddressBook;
use serde::Serialize;

pub mod add;
pub mod clear;
pub mod delete;
pub mod exit;
pub mod find;
pub mod help;
pub mod list;
pub mod sort;
pub mod view;

pub use add::{AddCommand, AddPersonParams};
pub use clear::ClearCommand;
pub use delete::DeleteCommand;
pub use exit::ExitCommand;
pub use find::FindCommand;
pub use help::HelpCommand;
pub use list::ListCommand;
pub use sort::SortCommand;
pub use view::{ViewAllCommand, ViewCommand};

/// Format the overview line shown above a listing.
pub fn persons_listed_message(count: usize) -> String {
    format!("{} persons listed!", count)
}

/// Outcome of a successful command: a message for the user and, optionally,
/// the persons the command concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    pub feedback: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevant_persons: Option<Vec<Person>>,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            relevant_persons: None,
        }
    }

    pub fn with_persons(mut self, persons: Vec<Person>) -> Self {
        self.relevant_persons = Some(persons);
        self
    }

    /// The relevant persons, or an empty slice when there are none.
    pub fn persons(&self) -> &[Person] {
        self.relevant_persons.as_deref().unwrap_or_default()
    }
}

/// Everything a command may read or mutate.
///
/// Holds the address book and the listing most recently shown to the user.
/// Index-taking commands resolve their 1-based index against that listing,
/// or against the book's own order when nothing has been listed yet.
#[derive(Debug, Default)]
pub struct CommandContext {
    book: AddressBook,
    last_shown: Option<Vec<Person>>,
}

impl CommandContext {
    pub fn new(book: AddressBook) -> Self {
        Self {
            book,
            last_shown: None,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }

    pub fn into_book(self) -> AddressBook {
        self.book
    }

    /// The listing display indexes refer to.
    pub fn shown_listing(&self) -> &[Person] {
        match &self.last_shown {
            Some(listing) => listing,
            None => self.book.persons(),
        }
    }

    pub(crate) fn set_last_shown(&mut self, persons: Vec<Person>) {
        self.last_shown = Some(persons);
    }

    /// Fall back to the book's own order for display indexes.
    pub(crate) fn reset_last_shown(&mut self) {
        self.last_shown = None;
    }

    /// Look up the person at a 1-based display index.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::InvalidIndex` if the index is outside the listing.
    pub fn resolve_index(&self, index: usize) -> Result<&Person> {
        let listing = self.shown_listing();
        index
            .checked_sub(1)
            .and_then(|position| listing.get(position))
            .ok_or(CommandError::InvalidIndex {
                index,
                len: listing.len(),
            })
    }
}

/// The closed set of commands.
#[derive(Debug, Clone)]
pub enum Command {
    Add(AddCommand),
    Delete(DeleteCommand),
    Find(FindCommand),
    List(ListCommand),
    Sort(SortCommand),
    Clear(ClearCommand),
    View(ViewCommand),
    ViewAll(ViewAllCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl Command {
    /// Run the command against the given context.
    pub fn execute(&self, ctx: &mut CommandContext) -> Result<CommandResult> {
        tracing::debug!(command = self.word(), "Executing command");
        match self {
            Self::Add(cmd) => cmd.execute(ctx),
            Self::Delete(cmd) => cmd.execute(ctx),
            Self::Find(cmd) => cmd.execute(ctx),
            Self::List(cmd) => cmd.execute(ctx),
            Self::Sort(cmd) => cmd.execute(ctx),
            Self::Clear(cmd) => cmd.execute(ctx),
            Self::View(cmd) => cmd.execute(ctx),
            Self::ViewAll(cmd) => cmd.execute(ctx),
            Self::Help(cmd) => Ok(cmd.execute()),
            Self::Exit(cmd) => Ok(cmd.execute()),
        }
    }

    /// The word that invokes this command.
    pub fn word(&self) -> &'static str {
        match self {
            Self::Add(_) => AddCommand::COMMAND_WORD,
            Self::Delete(_) => DeleteCommand::COMMAND_WORD,
            Self::Find(_) => FindCommand::COMMAND_WORD,
            Self::List(_) => ListCommand::COMMAND_WORD,
            Self::Sort(_) => SortCommand::COMMAND_WORD,
            Self::Clear(_) => ClearCommand::COMMAND_WORD,
            Self::View(_) => ViewCommand::COMMAND_WORD,
            Self::ViewAll(_) => ViewAllCommand::COMMAND_WORD,
            Self::Help(_) => HelpCommand::COMMAND_WORD,
            Self::Exit(_) => ExitCommand::COMMAND_WORD,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit(_))
    }
}

macro_rules! impl_from_command {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Command {
                fn from(cmd: $ty) -> Self {
                    Self::$variant(cmd)
                }
            }
        )*
    };
}

impl_from_command!(
    Add(AddCommand),
    Delete(DeleteCommand),
    Find(FindCommand),
    List(ListCommand),
    Sort(SortCommand),
    Clear(ClearCommand),
    View(ViewCommand),
    ViewAll(ViewAllCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
);
