//! Sort the address book by name.

use super::{CommandContext, CommandResult};
use crate::error::Result;

/// Sorts the address book in place. See [`AddressBook::sort`](crate::store::AddressBook::sort)
/// for the ordering.
#[derive(Debug, Clone, Default)]
pub struct SortCommand;

impl SortCommand {
    pub const COMMAND_WORD: &'static str = "sort";
    pub const USAGE: &'static str = "sort: Sorts the address book by name.\n\
Example: sort";
    pub const MESSAGE_SUCCESS: &'static str = "Address book has been sorted!";

    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, ctx: &mut CommandContext) -> Result<CommandResult> {
        ctx.book_mut().sort();
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}
