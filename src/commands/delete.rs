//! Delete a person by display index.

use super::{CommandContext, CommandResult};
use crate::error::{CommandError, Result};

/// Deletes the person at a 1-based index of the last shown listing.
#[derive(Debug, Clone)]
pub struct DeleteCommand {
    target_index: usize,
}

impl DeleteCommand {
    pub const COMMAND_WORD: &'static str = "delete";
    pub const USAGE: &'static str = "delete: Deletes the person identified by the index number \
used in the last person listing.\n\
Parameters: INDEX\n\
Example: delete 1";

    /// # Errors
    ///
    /// Returns `CommandError::InvalidArguments` if the index is zero.
    pub fn new(target_index: usize) -> Result<Self> {
        if target_index == 0 {
            return Err(CommandError::invalid_arguments(Self::USAGE));
        }
        Ok(Self { target_index })
    }

    pub fn target_index(&self) -> usize {
        self.target_index
    }

    pub fn execute(&self, ctx: &mut CommandContext) -> Result<CommandResult> {
        let target = ctx.resolve_index(self.target_index)?.clone();
        let removed = ctx.book_mut().remove(&target)?;
        Ok(CommandResult::new(format!("Deleted Person: {}", removed)).with_persons(vec![removed]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::person;
    use crate::commands::ListCommand;
    use crate::store::AddressBook;

    fn context(names: &[&str]) -> CommandContext {
        CommandContext::new(AddressBook::from_persons(names.iter().map(|n| person(n))).unwrap())
    }

    #[test]
    fn test_new_rejects_zero() {
        assert!(matches!(
            DeleteCommand::new(0),
            Err(CommandError::InvalidArguments { .. })
        ));
        assert_eq!(DeleteCommand::new(3).unwrap().target_index(), 3);
    }

    #[test]
    fn test_delete_removes_target() {
        let mut ctx = context(&["Amy", "Ben", "Cat"]);
        let result = DeleteCommand::new(2).unwrap().execute(&mut ctx).unwrap();

        assert_eq!(result.persons()[0].name().as_str(), "Ben");
        assert!(result.feedback.starts_with("Deleted Person: Ben"));
        let names: Vec<&str> = ctx.book().iter().map(|p| p.name().as_str()).collect();
        assert_eq!(names, vec!["Amy", "Cat"]);
    }

    #[test]
    fn test_delete_out_of_range_leaves_book_unchanged() {
        let mut ctx = context(&["Amy", "Ben"]);
        let before = ctx.book().clone();

        let result = DeleteCommand::new(3).unwrap().execute(&mut ctx);
        assert_eq!(result, Err(CommandError::InvalidIndex { index: 3, len: 2 }));
        assert_eq!(ctx.book(), &before);
    }

    #[test]
    fn test_delete_already_removed_person_fails() {
        let mut ctx = context(&["Amy", "Ben"]);
        ListCommand::new().execute(&mut ctx).unwrap();

        DeleteCommand::new(1).unwrap().execute(&mut ctx).unwrap();
        // the listing still shows Amy at index 1, but she is gone
        let result = DeleteCommand::new(1).unwrap().execute(&mut ctx);
        assert_eq!(result, Err(CommandError::PersonNotFound));
        assert_eq!(ctx.book().len(), 1);
    }
}
