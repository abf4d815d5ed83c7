//! Reference-data seeder
//!
//! Provides:
//! - `SeedPlan`, the fixed category names and sample event
//! - The three seeding steps, each its own unit of work
//! - `run_seed`, which runs all three and reports a `SeedOutcome`

pub mod plan;
pub mod seeder;

pub use plan::SeedPlan;
pub use seeder::{
    create_sample_event, ensure_categories, report_category_events, run_seed, EnsureReport,
    SeedOutcome,
};
