//! Meetups Store - SQLite persistence and the reference-data seeder
//!
//! Provides:
//! - Persistence unit configuration and connection lifecycle
//! - Embedded schema migrations with checksums
//! - Category and Event repositories
//! - Explicit transactional units of work
//! - The seeder that loads the reference categories and sample event

pub mod config;
pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod seed;
pub mod unit_of_work;

// Re-export key types
pub use config::{StoreConfig, StoreLocation};
pub use db::PersistenceUnit;
pub use errors::Result;
pub use unit_of_work::in_unit_of_work;
