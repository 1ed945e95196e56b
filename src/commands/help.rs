//! Show usage for every command.

use super::{
    AddCommand, ClearCommand, CommandResult, DeleteCommand, ExitCommand, FindCommand,
    ListCommand, SortCommand, ViewAllCommand, ViewCommand,
};

#[derive(Debug, Clone, Default)]
pub struct HelpCommand;

impl HelpCommand {
    pub const COMMAND_WORD: &'static str = "help";
    pub const USAGE: &'static str = "help: Shows program usage instructions.\n\
Example: help";

    pub fn new() -> Self {
        Self
    }

    /// Usage text of every command, one block per command.
    pub fn all_usages() -> String {
        [
            AddCommand::USAGE,
            DeleteCommand::USAGE,
            ClearCommand::USAGE,
            FindCommand::USAGE,
            ListCommand::USAGE,
            SortCommand::USAGE,
            ViewCommand::USAGE,
            ViewAllCommand::USAGE,
            Self::USAGE,
            ExitCommand::USAGE,
        ]
        .join("\n")
    }

    pub fn execute(&self) -> CommandResult {
        CommandResult::new(Self::all_usages())
    }
}
