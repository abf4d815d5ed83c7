//! Core types shared across the meetups facilities
//!
//! - **Correlation types**: RunId for tagging a single seeder run
//! - **Schema constants**: Canonical field keys and event names for logging

pub mod correlation;
pub mod schema;

pub use correlation::RunId;
