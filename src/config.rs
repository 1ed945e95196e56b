//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment
//! variables, after loading an optional `.env` file.

use crate::error::{ConfigError, ConfigResult};
use std::env;

pub const DEFAULT_LOG_LEVEL: &str = "error";
pub const DEFAULT_PROMPT: &str = "Enter command: ";

/// Configuration for the address book command loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,

    /// Prompt shown before each command (default: "Enter command: ")
    pub prompt: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `ADDRESSBOOK_PROMPT`: Command prompt (default: "Enter command: ")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine, a malformed one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
        let prompt = env::var("ADDRESSBOOK_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());

        if prompt.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESSBOOK_PROMPT".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config { log_level, prompt })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log_level, "error");
        assert_eq!(config.prompt, "Enter command: ");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "debug");
        guard.set("ADDRESSBOOK_PROMPT", "> ");

        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    #[serial]
    fn test_config_from_env_empty_prompt() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESSBOOK_PROMPT", "   ");

        let result = Config::from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "ADDRESSBOOK_PROMPT");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }
}
