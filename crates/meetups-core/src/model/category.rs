use serde::{Deserialize, Serialize};

/// Category - a named grouping of meetup events
///
/// Rows live in the `categories` table. Names are not unique at the storage
/// layer; the seeder checks for an existing name before inserting.
///
/// A Category's events are not held on the struct. They are read on demand
/// with `EventRepo::find_by_category`, so a caller always sees the rows
/// committed so far rather than a stale cached list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Row id assigned by the store
    pub id: i64,

    pub name: String,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
