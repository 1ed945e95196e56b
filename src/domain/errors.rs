//! Domain validation errors.

use super::{Address, Email, Name, Phone, Tag};
use thiserror::Error;

/// Errors that can occur during domain value object validation.
///
/// Each variant displays the fixed constraint message of the field type
/// that rejected its input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is invalid.
    #[error("{}", Name::CONSTRAINTS)]
    InvalidName(String),

    /// The provided phone number is invalid.
    #[error("{}", Phone::CONSTRAINTS)]
    InvalidPhone(String),

    /// The provided email address is invalid.
    #[error("{}", Email::CONSTRAINTS)]
    InvalidEmail(String),

    /// The provided address is invalid.
    #[error("{}", Address::CONSTRAINTS)]
    InvalidAddress(String),

    /// The provided tag name is invalid.
    #[error("{}", Tag::CONSTRAINTS)]
    InvalidTag(String),
}

impl ValidationError {
    /// The raw input that failed validation.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidName(s)
            | Self::InvalidPhone(s)
            | Self::InvalidEmail(s)
            | Self::InvalidAddress(s)
            | Self::InvalidTag(s) => s,
        }
    }
}
