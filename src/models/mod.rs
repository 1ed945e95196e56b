//! Data models for the address book.

pub mod person;

pub use person::Person;
