//! Terminate the command loop.

use super::CommandResult;

#[derive(Debug, Clone, Default)]
pub struct ExitCommand;

impl ExitCommand {
    pub const COMMAND_WORD: &'static str = "exit";
    pub const USAGE: &'static str = "exit: Exits the program.\n\
Example: exit";
    pub const MESSAGE_EXIT_ACKNOWLEDGEMENT: &'static str = "Exiting Address Book as requested ...";

    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self) -> CommandResult {
        CommandResult::new(Self::MESSAGE_EXIT_ACKNOWLEDGEMENT)
    }
}
