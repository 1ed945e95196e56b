//! Name value object.

use super::errors::ValidationError;
use super::{FieldRepr, FieldValue};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9 ]+$").expect("Failed to compile name regex"));

/// A person's name in the address book.
///
/// Names are trimmed and must consist of ASCII letters, digits and spaces.
/// Two names are equal when their canonical values are equal; the privacy
/// flag does not take part in equality.
///
/// # Example
///
/// ```
/// use addressbook::domain::Name;
///
/// let name = Name::new("  John Doe ", false).unwrap();
/// assert_eq!(name.as_str(), "John Doe");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "FieldRepr", into = "FieldRepr")]
pub struct Name {
    value: String,
    is_private: bool,
}

impl Name {
    pub const EXAMPLE: &'static str = "John Doe";
    pub const CONSTRAINTS: &'static str =
        "Person names should be spaces or alphanumeric characters";

    /// Create a new Name, validating the trimmed input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name is empty or contains
    /// anything other than letters, digits and spaces.
    pub fn new(name: &str, is_private: bool) -> Result<Self, ValidationError> {
        let trimmed = name.trim();
        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidName(name.to_string()));
        }

        Ok(Self {
            value: trimmed.to_string(),
            is_private,
        })
    }

    /// Returns true if the given string is a valid person name.
    pub fn is_valid(test: &str) -> bool {
        NAME_REGEX.is_match(test)
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }

    /// The whitespace-separated words of the name.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.value.split_whitespace()
    }
}

impl FieldValue for Name {
    fn as_str(&self) -> &str {
        &self.value
    }

    fn is_private(&self) -> bool {
        self.is_private
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Name {}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl TryFrom<FieldRepr> for Name {
    type Error = ValidationError;

    fn try_from(repr: FieldRepr) -> Result<Self, Self::Error> {
        let (value, is_private) = repr.into_parts();
        Self::new(&value, is_private)
    }
}

impl From<Name> for FieldRepr {
    fn from(name: Name) -> Self {
        FieldRepr::new(&name.value, name.is_private)
    }
}

// Display support
impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
