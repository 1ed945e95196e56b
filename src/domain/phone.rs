//! Phone value object.

use super::errors::ValidationError;
use super::{FieldRepr, FieldValue};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("Failed to compile phone regex"));

/// A person's phone number.
///
/// The trimmed number must consist of ASCII digits only.
///
/// # Example
///
/// ```
/// use addressbook::domain::Phone;
///
/// let phone = Phone::new(" 98765432", false).unwrap();
/// assert_eq!(phone.as_str(), "98765432");
/// assert!(Phone::new("+65 9876", false).is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "FieldRepr", into = "FieldRepr")]
pub struct Phone {
    value: String,
    is_private: bool,
}

impl Phone {
    pub const EXAMPLE: &'static str = "123456789";
    pub const CONSTRAINTS: &'static str = "Person phone numbers should only contain numbers";

    /// Create a new Phone, validating the trimmed input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number is empty or
    /// contains a non-digit character.
    pub fn new(phone: &str, is_private: bool) -> Result<Self, ValidationError> {
        let trimmed = phone.trim();
        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidPhone(phone.to_string()));
        }

        Ok(Self {
            value: trimmed.to_string(),
            is_private,
        })
    }

    /// Returns true if the given string is a valid phone number.
    pub fn is_valid(test: &str) -> bool {
        PHONE_REGEX.is_match(test)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }
}

impl FieldValue for Phone {
    fn as_str(&self) -> &str {
        &self.value
    }

    fn is_private(&self) -> bool {
        self.is_private
    }
}

impl PartialEq for Phone {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Phone {}

impl Hash for Phone {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl TryFrom<FieldRepr> for Phone {
    type Error = ValidationError;

    fn try_from(repr: FieldRepr) -> Result<Self, Self::Error> {
        let (value, is_private) = repr.into_parts();
        Self::new(&value, is_private)
    }
}

impl From<Phone> for FieldRepr {
    fn from(phone: Phone) -> Self {
        FieldRepr::new(&phone.value, phone.is_private)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
