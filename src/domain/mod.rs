//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! names, phone numbers, email addresses, postal addresses and tags.
//! These value objects trim and validate their input at construction time,
//! so an invalid field can never be represented in the address book.

pub mod address;
pub mod email;
pub mod errors;
pub mod name;
pub mod phone;
pub mod tag;

pub use address::{Address, Block, PostalCode, Street, Unit};
pub use email::Email;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
pub use tag::Tag;

use serde::{Deserialize, Serialize};

/// Read access shared by the privacy-aware contact fields.
pub trait FieldValue {
    /// The canonical (trimmed, validated) value.
    fn as_str(&self) -> &str;

    /// Whether the field should be hidden from ordinary listings.
    fn is_private(&self) -> bool;
}

/// Serialized form of a privacy-aware field.
///
/// Public fields serialize as a bare string. Private ones carry the flag
/// alongside the value. Both forms are accepted when deserializing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
#[doc(hidden)]
pub enum FieldRepr {
    Plain(String),
    Flagged {
        value: String,
        #[serde(default)]
        private: bool,
    },
}

impl FieldRepr {
    pub(crate) fn new(value: &str, is_private: bool) -> Self {
        if is_private {
            Self::Flagged {
                value: value.to_string(),
                private: true,
            }
        } else {
            Self::Plain(value.to_string())
        }
    }

    pub(crate) fn into_parts(self) -> (String, bool) {
        match self {
            Self::Plain(value) => (value, false),
            Self::Flagged { value, private } => (value, private),
        }
    }
}
