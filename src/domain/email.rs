//! Email value object.

use super::errors::ValidationError;
use super::{FieldRepr, FieldValue};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.]+@[A-Za-z0-9_.]+$").expect("Failed to compile email regex")
});

/// A person's email address.
///
/// The trimmed address must be two non-empty runs of letters, digits,
/// underscores or periods separated by a single '@'.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "FieldRepr", into = "FieldRepr")]
pub struct Email {
    value: String,
    is_private: bool,
}

impl Email {
    pub const EXAMPLE: &'static str = "john.doe@gmail.com";
    pub const CONSTRAINTS: &'static str =
        "Person emails should be 2 alphanumeric/period strings separated by '@'";

    /// Create a new Email, validating the trimmed input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the address does not match
    /// the format described above.
    pub fn new(email: &str, is_private: bool) -> Result<Self, ValidationError> {
        let trimmed = email.trim();
        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidEmail(email.to_string()));
        }

        Ok(Self {
            value: trimmed.to_string(),
            is_private,
        })
    }

    /// Returns true if the given string is a valid email address.
    pub fn is_valid(test: &str) -> bool {
        EMAIL_REGEX.is_match(test)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }
}

impl FieldValue for Email {
    fn as_str(&self) -> &str {
        &self.value
    }

    fn is_private(&self) -> bool {
        self.is_private
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl TryFrom<FieldRepr> for Email {
    type Error = ValidationError;

    fn try_from(repr: FieldRepr) -> Result<Self, Self::Error> {
        let (value, is_private) = repr.into_parts();
        Self::new(&value, is_private)
    }
}

impl From<Email> for FieldRepr {
    fn from(email: Email) -> Self {
        FieldRepr::new(&email.value, email.is_private)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
