//! Person model representing one contact in the address book.

use crate::domain::{Address, Email, FieldValue, Name, Phone, Tag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{self, Write as _};

/// A contact in the address book.
///
/// Every field is an already-validated value object, so a `Person` can only
/// be built from valid parts. Two persons are equal when all of their fields
/// are equal; this is the duplicate rule the address book enforces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,

    /// Tags associated with the person (unique, kept in name order)
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    tags: BTreeSet<Tag>,
}

impl Person {
    /// Create a new person from validated fields.
    ///
    /// Repeated tags collapse into one.
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags: tags.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Render every field, marking private ones with `(private) `.
    pub fn as_text_show_all(&self) -> String {
        let mut text = String::new();
        push_field(&mut text, "", &self.name, true);
        push_field(&mut text, " Phone: ", &self.phone, true);
        push_field(&mut text, " Email: ", &self.email, true);
        push_field(&mut text, " Address: ", &self.address, true);
        self.push_tags(&mut text);
        text
    }

    /// Render only the public fields.
    pub fn as_text_hide_private(&self) -> String {
        let mut text = String::new();
        push_field(&mut text, "", &self.name, false);
        push_field(&mut text, " Phone: ", &self.phone, false);
        push_field(&mut text, " Email: ", &self.email, false);
        push_field(&mut text, " Address: ", &self.address, false);
        self.push_tags(&mut text);
        text
    }

    fn push_tags(&self, text: &mut String) {
        text.push_str(" Tags: ");
        for tag in &self.tags {
            // Writing into a String cannot fail.
            let _ = write!(text, "{}", tag);
        }
    }
}

fn push_field(text: &mut String, label: &str, field: &dyn FieldValue, show_private: bool) {
    if field.is_private() && !show_private {
        return;
    }
    text.push_str(label);
    if field.is_private() {
        text.push_str("(private) ");
    }
    text.push_str(field.as_str());
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text_show_all())
    }
}
