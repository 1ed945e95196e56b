//! Add a person to the address book.

use super::{CommandContext, CommandResult};
use crate::domain::{Address, Email, Name, Phone, Tag};
use crate::error::Result;
use crate::models::Person;

/// Raw field input for [`AddCommand`], as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct AddPersonParams {
    pub name: String,
    pub is_name_private: bool,
    pub phone: String,
    pub is_phone_private: bool,
    pub email: String,
    pub is_email_private: bool,
    pub address: String,
    pub is_address_private: bool,
    pub tags: Vec<String>,
}

/// Adds a person built from validated fields.
#[derive(Debug, Clone)]
pub struct AddCommand {
    to_add: Person,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";
    pub const USAGE: &'static str = "add: Adds a person to the address book. \
Contact details can be marked private by prepending 'p' to the prefix.\n\
Parameters: NAME [p]p/PHONE [p]e/EMAIL [p]a/ADDRESS [t/TAG]...\n\
Example: add John Doe p/98765432 e/johnd@gmail.com a/311, Clementi Ave 2, #02-25 t/friends t/owesMoney";

    /// Validate every field and build the person to add.
    ///
    /// # Errors
    ///
    /// Returns the first field's `ValidationError`; no person is built.
    pub fn new(params: AddPersonParams) -> Result<Self> {
        let name = Name::new(&params.name, params.is_name_private)?;
        let phone = Phone::new(&params.phone, params.is_phone_private)?;
        let email = Email::new(&params.email, params.is_email_private)?;
        let address = Address::new(&params.address, params.is_address_private)?;
        let tags = params
            .tags
            .iter()
            .map(|tag| Tag::new(tag))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self::from_person(Person::new(name, phone, email, address, tags)))
    }

    pub fn from_person(person: Person) -> Self {
        Self { to_add: person }
    }

    pub fn person(&self) -> &Person {
        &self.to_add
    }

    pub fn execute(&self, ctx: &mut CommandContext) -> Result<CommandResult> {
        ctx.book_mut().add(self.to_add.clone())?;
        Ok(
            CommandResult::new(format!("New person added: {}", self.to_add))
                .with_persons(vec![self.to_add.clone()]),
        )
    }
}
