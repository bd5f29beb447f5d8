//! Configuration management for the contact assistant.
//!
//! Every setting is optional. Values come from the environment, with a `.env`
//! file in the working directory loaded first if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default save file, relative to the working directory.
pub const DEFAULT_BOOK_PATH: &str = "address_book.json";

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the address book is persisted (default: `address_book.json`)
    pub book_path: PathBuf,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: Path of the save file (default: `address_book.json`)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let book_path = Self::parse_env_path("ADDRESS_BOOK_PATH", DEFAULT_BOOK_PATH)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            book_path,
            log_level,
        })
    }

    /// Parse an environment variable as a path with a default value.
    fn parse_env_path(var_name: &str, default: &str) -> ConfigResult<PathBuf> {
        match env::var(var_name) {
            Ok(val) if val.trim().is_empty() => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            }),
            Ok(val) => Ok(PathBuf::from(val)),
            Err(_) => Ok(PathBuf::from(default)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            log_level: "warn".to_string(),
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

        fn unset(&mut self, key: &str) {
            env::remove_var(key);
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
        assert_eq!(config.book_path, PathBuf::from("address_book.json"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        let mut guard = EnvGuard::new();
        guard.unset("ADDRESS_BOOK_PATH");
        guard.unset("LOG_LEVEL");

        let config = Config::from_env().unwrap();
        assert_eq!(config.book_path, PathBuf::from(DEFAULT_BOOK_PATH));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_PATH", "/tmp/contacts/book.json");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.book_path, PathBuf::from("/tmp/contacts/book.json"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_from_env_empty_path() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_PATH", "   ");

        let result = Config::from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "ADDRESS_BOOK_PATH");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_empty_log_level() {
        let mut guard = EnvGuard::new();
        guard.unset("ADDRESS_BOOK_PATH");
        guard.set("LOG_LEVEL", "");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "LOG_LEVEL");
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_path() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_BOOK_PATH", "book.json");

        let result = Config::parse_env_path("TEST_BOOK_PATH", "default.json");
        assert_eq!(result.unwrap(), PathBuf::from("book.json"));

        let result = Config::parse_env_path("NONEXISTENT_BOOK_PATH", "default.json");
        assert_eq!(result.unwrap(), PathBuf::from("default.json"));
    }
}
