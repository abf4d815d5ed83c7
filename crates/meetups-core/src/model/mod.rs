//! Domain records mapped to the `categories` and `events` tables

mod category;
mod event;

pub use category::Category;
pub use event::Event;
