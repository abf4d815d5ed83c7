//! Repository layer for the categories and events tables
//!
//! Functions take `&Connection`; a `&Transaction` derefs to one, so the same
//! calls work inside a unit of work.

pub mod category_repo;
pub mod event_repo;

pub use category_repo::CategoryRepo;
pub use event_repo::EventRepo;
