//! Store configuration.
//!
//! # Responsibility
//! - Describe where the contact store lives, built once at startup.
//! - Read settings from the process environment or an injected lookup.
//!
//! # Invariants
//! - Construction never fails; missing settings surface at connection time.
//! - No global state: callers pass the config by reference to providers.

use std::path::{Path, PathBuf};

/// Environment variable naming the SQLite database file.
pub const DATABASE_ENV: &str = "DB_NAME";

/// Explicit connection settings for the contact store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// SQLite database file. `None` is reported when a connection is requested.
    pub database: Option<PathBuf>,
}

impl StoreConfig {
    /// Builds a config pointing at one database file.
    pub fn with_database(path: impl Into<PathBuf>) -> Self {
        Self {
            database: Some(path.into()),
        }
    }

    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`; blank values count as absent.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database = lookup(DATABASE_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self { database }
    }

    /// Returns a copy with `database` replaced when `path` is given.
    pub fn override_database(mut self, path: Option<&Path>) -> Self {
        if let Some(path) = path {
            self.database = Some(path.to_path_buf());
        }
        self
    }
}
