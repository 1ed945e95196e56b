//! List every person.

use super::{persons_listed_message, CommandContext, CommandResult};
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct ListCommand;

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";
    pub const USAGE: &'static str = "list: Displays all persons in the address book \
as a list with index numbers.\n\
Example: list";

    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, ctx: &mut CommandContext) -> Result<CommandResult> {
        let all = ctx.book().persons().to_vec();
        ctx.set_last_shown(all.clone());
        Ok(CommandResult::new(persons_listed_message(all.len())).with_persons(all))
    }
}
