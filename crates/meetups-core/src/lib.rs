//! Meetups Core - domain model, error facility and logging facility
//!
//! This crate provides:
//! - Category and Event records for the two-table meetups schema
//! - The canonical structured error (`ExError`) and domain error taxonomy
//! - Structured logging initialisation and operation macros

pub mod errors;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, MeetupsError, Result};
pub use model::{Category, Event};
