//! Tag value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("Failed to compile tag regex"));

/// A tag attached to a person, e.g. `friends` or `colleagues`.
///
/// Tags are always public, so unlike the other contact fields they carry no
/// privacy flag. Ordering is by tag name, which keeps a person's tag set in a
/// deterministic order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub const EXAMPLE: &'static str = "friends";
    pub const CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    /// Create a new Tag, validating the trimmed input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidTag` if the name is empty or not
    /// purely alphanumeric.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let trimmed = name.trim();
        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidTag(name.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns true if the given string is a valid tag name.
    pub fn is_valid(test: &str) -> bool {
        TAG_REGEX.is_match(test)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Tag::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}
