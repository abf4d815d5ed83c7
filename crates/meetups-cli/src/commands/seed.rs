//! Seed command
//!
//! Usage: meetups [seed] [--db <PATH>]

use meetups_store::seed::{run_seed, SeedPlan};
use meetups_store::{PersistenceUnit, StoreConfig};
use std::path::PathBuf;

/// Store selection resolved from `--db` / `MEETUPS_DB`
#[derive(Debug, Default)]
pub struct SeedArgs {
    pub db: Option<PathBuf>,
}

/// Execute the seed against the configured store
///
/// The store is closed whether or not the seed succeeds; a seed error takes
/// precedence over a close error.
pub fn execute(args: SeedArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = match args.db {
        Some(path) => StoreConfig::file(path),
        None => StoreConfig::default(),
    };

    let mut unit = PersistenceUnit::open(&config)?;

    let stdout = std::io::stdout();
    let outcome = run_seed(&mut unit, &SeedPlan::reference(), &mut stdout.lock());
    let closed = unit.close();

    let outcome = outcome?;
    closed?;

    tracing::debug!(
        run_id = %outcome.run_id,
        event_id = outcome.event.id,
        "seed finished"
    );

    Ok(())
}
