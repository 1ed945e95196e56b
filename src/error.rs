//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation failures live with the value objects in
//! [`crate::domain::ValidationError`] and convert into [`CommandError`].

use crate::domain::ValidationError;
use thiserror::Error;

pub const MESSAGE_DUPLICATE_PERSON: &str = "This person already exists in the address book";
pub const MESSAGE_PERSON_NOT_FOUND: &str = "Person could not be found in address book";
pub const MESSAGE_INVALID_INDEX: &str = "The person index provided is invalid";

/// Errors raised by the address book store itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A person equal in every field is already stored
    #[error("{}", MESSAGE_DUPLICATE_PERSON)]
    DuplicatePerson,

    /// The person to remove is not stored
    #[error("{}", MESSAGE_PERSON_NOT_FOUND)]
    PersonNotFound,
}

/// Errors that can occur while building or executing a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A field failed its validation rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Arguments are structurally invalid (wrong count, non-numeric index, ...)
    #[error("Invalid command format!\n{usage}")]
    InvalidArguments { usage: String },

    /// The command word is not recognised
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Display index outside the current listing
    #[error("{}", MESSAGE_INVALID_INDEX)]
    InvalidIndex { index: usize, len: usize },

    /// Adding would create a duplicate record
    #[error("{}", MESSAGE_DUPLICATE_PERSON)]
    DuplicatePerson,

    /// The targeted record is no longer in the store
    #[error("{}", MESSAGE_PERSON_NOT_FOUND)]
    PersonNotFound,
}

impl CommandError {
    pub fn invalid_arguments(usage: impl Into<String>) -> Self {
        Self::InvalidArguments {
            usage: usage.into(),
        }
    }
}

impl From<StoreError> for CommandError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicatePerson => Self::DuplicatePerson,
            StoreError::PersonNotFound => Self::PersonNotFound,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with CommandError
pub type Result<T> = std::result::Result<T, CommandError>;

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
