//! Show a single person, with or without private fields.

use super::{CommandContext, CommandResult};
use crate::error::{CommandError, Result};
use crate::models::Person;

/// Resolve the index and make sure the person is still stored.
fn target(ctx: &CommandContext, index: usize) -> Result<Person> {
    let person = ctx.resolve_index(index)?;
    if !ctx.book().contains(person) {
        return Err(CommandError::PersonNotFound);
    }
    Ok(person.clone())
}

fn validate_index(index: usize, usage: &str) -> Result<usize> {
    if index == 0 {
        return Err(CommandError::invalid_arguments(usage));
    }
    Ok(index)
}

/// Shows the public fields of the person at a display index.
#[derive(Debug, Clone)]
pub struct ViewCommand {
    target_index: usize,
}

impl ViewCommand {
    pub const COMMAND_WORD: &'static str = "view";
    pub const USAGE: &'static str = "view: Views the non-private details of the person \
identified by the index number in the last shown person listing.\n\
Parameters: INDEX\n\
Example: view 1";

    pub fn new(target_index: usize) -> Result<Self> {
        Ok(Self {
            target_index: validate_index(target_index, Self::USAGE)?,
        })
    }

    pub fn execute(&self, ctx: &mut CommandContext) -> Result<CommandResult> {
        let person = target(ctx, self.target_index)?;
        Ok(
            CommandResult::new(format!("Viewing person: {}", person.as_text_hide_private()))
                .with_persons(vec![person]),
        )
    }
}

/// Shows every field of the person at a display index, private ones included.
#[derive(Debug, Clone)]
pub struct ViewAllCommand {
    target_index: usize,
}

impl ViewAllCommand {
    pub const COMMAND_WORD: &'static str = "viewall";
    pub const USAGE: &'static str = "viewall: Views all details of the person \
identified by the index number in the last shown person listing. Private contact details are shown.\n\
Parameters: INDEX\n\
Example: viewall 1";

    pub fn new(target_index: usize) -> Result<Self> {
        Ok(Self {
            target_index: validate_index(target_index, Self::USAGE)?,
        })
    }

    pub fn execute(&self, ctx: &mut CommandContext) -> Result<CommandResult> {
        let person = target(ctx, self.target_index)?;
        Ok(
            CommandResult::new(format!("Viewing person: {}", person.as_text_show_all()))
                .with_persons(vec![person]),
        )
    }
}
