use serde::{Deserialize, Serialize};

use super::category::Category;

/// Event - a single meetup belonging to exactly one Category
///
/// `category_id` is `NOT NULL` and a foreign key into `categories`, so an
/// Event can only be stored against an existing Category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Row id assigned by the store
    pub id: i64,

    pub name: String,

    /// Id of the owning Category
    pub category_id: i64,
}

impl Event {
    pub fn new(id: i64, name: impl Into<String>, category_id: i64) -> Self {
        Self {
            id,
            name: name.into(),
            category_id,
        }
    }

    /// True if this event is attached to `category`
    pub fn belongs_to(&self, category: &Category) -> bool {
        self.category_id == category.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_belongs_to_compares_ids() {
        let networking = Category::new(2, "Networking");
        let social = Category::new(3, "Social");
        let event = Event::new(1, "Jim's Networking Event", 2);

        assert!(event.belongs_to(&networking));
        assert!(!event.belongs_to(&social));
    }
}
