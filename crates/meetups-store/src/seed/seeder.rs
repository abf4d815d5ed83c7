//! Seeder orchestration
//!
//! Three units of work, run in order:
//! 1. ensure every plan category exists (one commit for the whole list)
//! 2. insert the sample event under the plan's event category
//! 3. reload that category and write one line per event it owns
//!
//! Step 1 is check-then-insert with no unique index behind it. Two seeders
//! racing on the same store can both insert the same name.

use crate::db::PersistenceUnit;
use crate::errors::{io_error, Result};
use crate::repo::{CategoryRepo, EventRepo};
use crate::seed::plan::{format_event_line, SeedPlan};
use crate::unit_of_work::in_unit_of_work;
use meetups_core::model::{Category, Event};
use meetups_core_types::RunId;
use rusqlite::Connection;
use std::io::Write;

/// What step 1 found and did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnsureReport {
    /// Categories inserted by this call, in plan order
    pub created: Vec<Category>,
    /// Categories that were already present
    pub existing: Vec<Category>,
}

/// Summary of a full seeder run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedOutcome {
    pub run_id: RunId,
    pub categories: EnsureReport,
    /// Category the sample event was attached to, as reloaded in step 3
    pub category: Category,
    pub event: Event,
    /// Every event of `category` at the time of step 3
    pub listed: Vec<Event>,
}

/// Step 1: make sure each name has a category row
///
/// Names already present (exact, case-sensitive match) are left alone.
/// Repeated names within `names` produce a single row.
pub fn ensure_categories<S: AsRef<str>>(conn: &mut Connection, names: &[S]) -> Result<EnsureReport> {
    in_unit_of_work(conn, "ensure_categories", |tx| {
        let mut report = EnsureReport::default();

        for name in names {
            let name = name.as_ref();
            match CategoryRepo::find_by_name(tx, name)? {
                Some(existing) => {
                    tracing::debug!(category_name = name, category_id = existing.id, "category present");
                    report.existing.push(existing);
                }
                None => {
                    let created = CategoryRepo::insert(tx, name)?;
                    tracing::info!(category_name = name, category_id = created.id, "category created");
                    report.created.push(created);
                }
            }
        }

        Ok(report)
    })
}

/// Step 2: attach a new event to the category named `category_name`
///
/// Fails with `NotFound` if no such category exists; nothing is written.
pub fn create_sample_event(
    conn: &mut Connection,
    category_name: &str,
    event_name: &str,
) -> Result<(Category, Event)> {
    in_unit_of_work(conn, "create_sample_event", |tx| {
        let category = CategoryRepo::require_by_name(tx, category_name)?;
        let event = EventRepo::insert(tx, event_name, &category)?;
        tracing::info!(
            event_id = event.id,
            category_id = category.id,
            "event created"
        );
        Ok((category, event))
    })
}

/// Step 3: reload `category` and write one report line per event to `out`
///
/// The category is read again by id so the listing reflects rows committed
/// after `category` was obtained.
pub fn report_category_events<W: Write>(
    conn: &mut Connection,
    category: &Category,
    out: &mut W,
) -> Result<(Category, Vec<Event>)> {
    in_unit_of_work(conn, "report_category_events", |tx| {
        let category = CategoryRepo::reload(tx, category)?;
        let events = EventRepo::find_by_category(tx, category.id)?;

        for event in &events {
            writeln!(out, "{}", format_event_line(&event.name, &category.name))
                .map_err(|e| io_error("write_report", e))?;
        }
        out.flush().map_err(|e| io_error("write_report", e))?;

        Ok((category, events))
    })
}

/// Run all three steps against `unit`
///
/// Stops at the first failing step; earlier steps stay committed.
pub fn run_seed<W: Write>(
    unit: &mut PersistenceUnit,
    plan: &SeedPlan,
    out: &mut W,
) -> Result<SeedOutcome> {
    let run_id = RunId::new();
    let span = tracing::info_span!("seed_run", run_id = %run_id, unit_name = %unit.name());
    let _guard = span.enter();

    let conn = unit.connection_mut();

    let categories = ensure_categories(conn, &plan.category_names)?;
    let (category, event) = create_sample_event(conn, &plan.event_category, &plan.event_name)?;
    let (category, listed) = report_category_events(conn, &category, out)?;

    tracing::info!(
        created = categories.created.len(),
        existing = categories.existing.len(),
        listed = listed.len(),
        "seed run complete"
    );

    Ok(SeedOutcome {
        run_id,
        categories,
        category,
        event,
        listed,
    })
}
