//! AddressBook - an in-memory personal address book.
//!
//! Contacts are stored as [`Person`] records built from self-validating field
//! value objects, and are manipulated through a closed family of commands
//! that return structured results instead of printing.
//!
//! # Architecture
//!
//! - **domain**: Field value objects (name, phone, email, address, tag)
//! - **models**: The person record
//! - **store**: The ordered, duplicate-free address book
//! - **commands**: Command family, execution context and results
//! - **parser**: Turns a line of user input into a command
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//!
//! # Example
//!
//! ```
//! use addressbook::commands::CommandContext;
//! use addressbook::parser;
//!
//! let mut ctx = CommandContext::default();
//! parser::parse("add Bob p/123 e/bob@example.com a/Blk 30, Jurong")
//!     .unwrap()
//!     .execute(&mut ctx)
//!     .unwrap();
//!
//! let result = parser::parse("find bob").unwrap().execute(&mut ctx).unwrap();
//! assert_eq!(result.feedback, "1 persons listed!");
//! assert_eq!(result.persons()[0].address().as_str(), "Blk 30,Jurong");
//! ```

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod parser;
pub mod store;

// Re-export commonly used types
pub use commands::{Command, CommandContext, CommandResult};
pub use config::Config;
pub use error::{CommandError, ConfigError, StoreError};
pub use models::Person;
pub use store::AddressBook;
