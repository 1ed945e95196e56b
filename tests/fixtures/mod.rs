//! Test fixtures and sample data for integration tests.
//!
//! Provides reusable persons and pre-populated command contexts.

use addressbook::commands::CommandContext;
use addressbook::domain::{Address, Email, Name, Phone, Tag};
use addressbook::{AddressBook, Person};

/// Create a sample person with the given name and phone.
///
/// Email and address are fixed; tags are empty.
pub fn sample_person(name: &str, phone: &str) -> Person {
    Person::new(
        Name::new(name, false).unwrap(),
        Phone::new(phone, false).unwrap(),
        Email::new("sample@example.com", false).unwrap(),
        Address::new("Blk 30, Jurong West St 65", false).unwrap(),
        Vec::<Tag>::new(),
    )
}

/// Create a context whose address book holds one person per name, in order.
pub fn context_with(names: &[&str]) -> CommandContext {
    let persons = names
        .iter()
        .enumerate()
        .map(|(i, name)| sample_person(name, &format!("9000{}", i)));
    CommandContext::new(AddressBook::from_persons(persons).unwrap())
}

/// Names in the address book, in store order.
pub fn book_names(ctx: &CommandContext) -> Vec<String> {
    ctx.book()
        .iter()
        .map(|p| p.name().as_str().to_string())
        .collect()
}
