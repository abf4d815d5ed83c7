//! Persistence unit configuration
//!
//! A store is addressed by a logical unit name plus a physical location.

use std::path::{Path, PathBuf};

/// Logical identifier of the meetups persistence unit
pub const DEFAULT_UNIT_NAME: &str = "com.launchacademy.meetups";

/// Database file used when no location is given, relative to the working directory
pub const DEFAULT_DB_PATH: &str = ".meetups/store.db";

/// Environment variable the CLI reads for the database path
pub const DB_PATH_ENV: &str = "MEETUPS_DB";

/// Where the SQLite database lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    File(PathBuf),
    InMemory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub unit_name: String,
    pub location: StoreLocation,
}

impl StoreConfig {
    /// Configuration for a file-backed store at `path`
    pub fn file(path: impl AsRef<Path>) -> Self {
        Self {
            unit_name: DEFAULT_UNIT_NAME.to_string(),
            location: StoreLocation::File(path.as_ref().to_path_buf()),
        }
    }

    /// Configuration for a private in-memory store (tests, dry runs)
    pub fn in_memory() -> Self {
        Self {
            unit_name: DEFAULT_UNIT_NAME.to_string(),
            location: StoreLocation::InMemory,
        }
    }

    pub fn with_unit_name(mut self, unit_name: impl Into<String>) -> Self {
        self.unit_name = unit_name.into();
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::file(DEFAULT_DB_PATH)
    }
}
