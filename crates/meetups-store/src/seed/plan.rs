//! Seed plan: the deterministic reference data

/// Category names created on first run, in insertion order
pub const REFERENCE_CATEGORY_NAMES: [&str; 3] = ["Tech", "Networking", "Social"];

/// Category the sample event is attached to
pub const SAMPLE_EVENT_CATEGORY: &str = "Networking";

pub const SAMPLE_EVENT_NAME: &str = "Jim's Networking Event";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPlan {
    pub category_names: Vec<String>,
    pub event_category: String,
    pub event_name: String,
}

impl SeedPlan {
    /// The reference data loaded by the CLI
    pub fn reference() -> Self {
        Self {
            category_names: REFERENCE_CATEGORY_NAMES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            event_category: SAMPLE_EVENT_CATEGORY.to_string(),
            event_name: SAMPLE_EVENT_NAME.to_string(),
        }
    }
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self::reference()
    }
}

/// Report line for one event, e.g. `Jim's Networking Event is in the networking category`
pub fn format_event_line(event_name: &str, category_name: &str) -> String {
    format!(
        "{} is in the {} category",
        event_name,
        category_name.to_lowercase()
    )
}
