//! Clear the address book.

use super::{CommandContext, CommandResult};
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct ClearCommand;

impl ClearCommand {
    pub const COMMAND_WORD: &'static str = "clear";
    pub const USAGE: &'static str = "clear: Clears address book permanently.\n\
Example: clear";
    pub const MESSAGE_SUCCESS: &'static str = "Address book has been cleared!";

    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, ctx: &mut CommandContext) -> Result<CommandResult> {
        ctx.book_mut().clear();
        ctx.reset_last_shown();
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}
