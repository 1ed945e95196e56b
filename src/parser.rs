//! Turns one line of user input into a [`Command`].
//!
//! Every argument is validated here, through the command constructors, so
//! the command layer only ever sees well-formed commands.

use crate::commands::{
    AddCommand, AddPersonParams, ClearCommand, Command, DeleteCommand, ExitCommand, FindCommand,
    HelpCommand, ListCommand, SortCommand, ViewAllCommand, ViewCommand,
};
use crate::error::{CommandError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static BASIC_COMMAND_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<word>\S+)(?P<arguments>.*)$").expect("Failed to compile command regex")
});

// '/' is reserved as the prefix delimiter and may not appear inside a field.
static PERSON_DATA_ARGS_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?P<name>[^/]+)",
        r" (?P<is_phone_private>p?)p/(?P<phone>[^/]+)",
        r" (?P<is_email_private>p?)e/(?P<email>[^/]+)",
        r" (?P<is_address_private>p?)a/(?P<address>[^/]+)",
        r"(?P<tag_arguments>(?: t/[^/]+)*)$",
    ))
    .expect("Failed to compile person data regex")
});

const TAG_PREFIX: &str = " t/";

/// Parse a full line of user input.
///
/// # Errors
///
/// Returns `CommandError::InvalidArguments` for blank input or malformed
/// arguments, `CommandError::UnknownCommand` for an unrecognised command word,
/// and `CommandError::Validation` when a field fails its rule.
pub fn parse(input: &str) -> Result<Command> {
    let captures = BASIC_COMMAND_FORMAT
        .captures(input.trim())
        .ok_or_else(|| CommandError::invalid_arguments(HelpCommand::USAGE))?;
    let word = &captures["word"];
    let arguments = &captures["arguments"];

    tracing::debug!(word, "Parsing command");

    let command: Command = match word {
        AddCommand::COMMAND_WORD => AddCommand::new(parse_add_arguments(arguments)?)?.into(),
        DeleteCommand::COMMAND_WORD => {
            DeleteCommand::new(parse_index(arguments, DeleteCommand::USAGE)?)?.into()
        }
        FindCommand::COMMAND_WORD => FindCommand::new(arguments.split_whitespace())?.into(),
        ViewCommand::COMMAND_WORD => {
            ViewCommand::new(parse_index(arguments, ViewCommand::USAGE)?)?.into()
        }
        ViewAllCommand::COMMAND_WORD => {
            ViewAllCommand::new(parse_index(arguments, ViewAllCommand::USAGE)?)?.into()
        }
        ListCommand::COMMAND_WORD => ListCommand::new().into(),
        SortCommand::COMMAND_WORD => SortCommand::new().into(),
        ClearCommand::COMMAND_WORD => ClearCommand::new().into(),
        HelpCommand::COMMAND_WORD => HelpCommand::new().into(),
        ExitCommand::COMMAND_WORD => ExitCommand::new().into(),
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    };

    Ok(command)
}

fn parse_add_arguments(arguments: &str) -> Result<AddPersonParams> {
    let captures = PERSON_DATA_ARGS_FORMAT
        .captures(arguments.trim())
        .ok_or_else(|| CommandError::invalid_arguments(AddCommand::USAGE))?;

    Ok(AddPersonParams {
        name: captures["name"].to_string(),
        is_name_private: false,
        phone: captures["phone"].to_string(),
        is_phone_private: is_private_prefix(&captures["is_phone_private"]),
        email: captures["email"].to_string(),
        is_email_private: is_private_prefix(&captures["is_email_private"]),
        address: captures["address"].to_string(),
        is_address_private: is_private_prefix(&captures["is_address_private"]),
        tags: tags_from_arguments(&captures["tag_arguments"]),
    })
}

fn is_private_prefix(marker: &str) -> bool {
    marker == "p"
}

/// Split `" t/a t/b"` into `["a", "b"]`.
fn tags_from_arguments(tag_arguments: &str) -> Vec<String> {
    tag_arguments
        .split(TAG_PREFIX)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_index(arguments: &str, usage: &str) -> Result<usize> {
    arguments
        .trim()
        .parse::<usize>()
        .map_err(|_| CommandError::invalid_arguments(usage))
}
