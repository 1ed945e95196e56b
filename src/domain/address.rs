//! Address value object and its positional components.

use super::errors::ValidationError;
use super::{FieldRepr, FieldValue};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

static ADDRESS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^.+$").expect("Failed to compile address regex"));

const SEGMENT_SEPARATOR: char = ',';
const SEGMENT_COUNT: usize = 4;

macro_rules! address_component {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        ///
        /// Accepts any input, including the empty string used for an absent
        /// segment. The value is stored trimmed.
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: &str) -> Self {
                Self(value.trim().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

address_component!(
    /// Block (first segment) of an address.
    Block
);
address_component!(
    /// Street (second segment) of an address.
    Street
);
address_component!(
    /// Unit (third segment) of an address.
    Unit
);
address_component!(
    /// Postal code (fourth segment) of an address.
    PostalCode
);

/// A person's postal address.
///
/// The trimmed input is split on commas into block, street, unit and postal
/// code, in that order. Missing trailing segments are empty. Anything after
/// the third comma belongs to the postal code, so no input is dropped.
///
/// The canonical value joins the non-empty components with commas, with the
/// block always leading:
///
/// ```
/// use addressbook::domain::Address;
///
/// let address = Address::new("Blk 30, Jurong", false).unwrap();
/// assert_eq!(address.as_str(), "Blk 30,Jurong");
/// assert_eq!(address.street().as_str(), "Jurong");
/// assert!(address.unit().is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "FieldRepr", into = "FieldRepr")]
pub struct Address {
    value: String,
    block: Block,
    street: Street,
    unit: Unit,
    postal_code: PostalCode,
    is_private: bool,
}

impl Address {
    pub const EXAMPLE: &'static str = "123, some street";
    pub const CONSTRAINTS: &'static str = "Person addresses can be in any format";

    /// Create a new Address from its raw comma-separated form.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidAddress` if the trimmed input is
    /// empty, spans more than one line, or has no content besides commas.
    pub fn new(address: &str, is_private: bool) -> Result<Self, ValidationError> {
        let trimmed = address.trim();
        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidAddress(address.to_string()));
        }

        let mut segments = trimmed.splitn(SEGMENT_COUNT, SEGMENT_SEPARATOR);
        let block = Block::new(segments.next().unwrap_or_default());
        let street = Street::new(segments.next().unwrap_or_default());
        let unit = Unit::new(segments.next().unwrap_or_default());
        let postal_code = PostalCode::new(segments.next().unwrap_or_default());

        let value = Self::compose(&block, &street, &unit, &postal_code);
        // commas and whitespace alone leave nothing to store
        if !Self::is_valid(&value) {
            return Err(ValidationError::InvalidAddress(address.to_string()));
        }

        Ok(Self {
            value,
            block,
            street,
            unit,
            postal_code,
            is_private,
        })
    }

    /// Returns true if the given string is a valid person address.
    pub fn is_valid(test: &str) -> bool {
        ADDRESS_REGEX.is_match(test)
    }

    fn compose(block: &Block, street: &Street, unit: &Unit, postal_code: &PostalCode) -> String {
        let mut value = block.as_str().to_string();
        for part in [street.as_str(), unit.as_str(), postal_code.as_str()] {
            if !part.is_empty() {
                value.push(SEGMENT_SEPARATOR);
                value.push_str(part);
            }
        }
        value
    }

    /// The canonical address string.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn block(&self) -> &Block {
        &self.block
    }

    pub fn street(&self) -> &Street {
        &self.street
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn postal_code(&self) -> &PostalCode {
        &self.postal_code
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }
}

impl FieldValue for Address {
    fn as_str(&self) -> &str {
        &self.value
    }

    fn is_private(&self) -> bool {
        self.is_private
    }
}

// Equality and hashing follow the canonical string only, so addresses that
// render the same compare equal regardless of how their segments were split.
impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Address {}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl TryFrom<FieldRepr> for Address {
    type Error = ValidationError;

    fn try_from(repr: FieldRepr) -> Result<Self, Self::Error> {
        let (value, is_private) = repr.into_parts();
        Self::new(&value, is_private)
    }
}

impl From<Address> for FieldRepr {
    fn from(address: Address) -> Self {
        FieldRepr::new(&address.value, address.is_private)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
