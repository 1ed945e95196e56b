//! Find persons whose name contains any of the given keywords.

use super::{persons_listed_message, CommandContext, CommandResult};
use crate::error::{CommandError, Result};
use crate::models::Person;
use std::collections::HashSet;

/// Lists every person with a name word equal to one of the keywords,
/// ignoring case.
#[derive(Debug, Clone)]
pub struct FindCommand {
    keywords: HashSet<String>,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";
    pub const USAGE: &'static str = "find: Finds all persons whose names contain any of \
the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob charlie";

    /// # Errors
    ///
    /// Returns `CommandError::InvalidArguments` if no non-blank keyword is given.
    pub fn new<I, S>(keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: HashSet<String> = keywords
            .into_iter()
            .flat_map(|k| {
                k.as_ref()
                    .split_whitespace()
                    .map(str::to_lowercase)
                    .collect::<Vec<_>>()
            })
            .collect();

        if keywords.is_empty() {
            return Err(CommandError::invalid_arguments(Self::USAGE));
        }
        Ok(Self { keywords })
    }

    pub fn keywords(&self) -> &HashSet<String> {
        &self.keywords
    }

    fn matches(&self, person: &Person) -> bool {
        person
            .name()
            .words()
            .any(|word| self.keywords.contains(&word.to_lowercase()))
    }

    pub fn execute(&self, ctx: &mut CommandContext) -> Result<CommandResult> {
        let found: Vec<Person> = ctx
            .book()
            .iter()
            .filter(|person| self.matches(person))
            .cloned()
            .collect();

        tracing::debug!(matches = found.len(), "Find completed");
        ctx.set_last_shown(found.clone());
        Ok(CommandResult::new(persons_listed_message(found.len())).with_persons(found))
    }
}
