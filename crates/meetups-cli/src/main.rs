//! Meetups CLI
//!
//! Seeds the meetups store with its reference categories and sample event.
//! Running the binary with no arguments performs the seed.

use clap::{Parser, Subcommand};
use meetups_core::logging_facility::{self, Profile};
use meetups_store::config::DB_PATH_ENV;
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "meetups")]
#[command(about = "Meetups - seed categories and events", long_about = None)]
struct Cli {
    /// Path to the SQLite store (defaults to .meetups/store.db)
    #[arg(long, global = true, env = DB_PATH_ENV)]
    db: Option<PathBuf>,

    /// Emit JSON logs on stderr instead of human-readable ones
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load the reference categories and sample event (the default)
    Seed,
}

fn main() {
    let cli = Cli::parse();

    logging_facility::init(if cli.json_logs {
        Profile::Production
    } else {
        Profile::Development
    });

    let seed_args = commands::seed::SeedArgs { db: cli.db };
    let result = match cli.command {
        Some(Commands::Seed) | None => commands::seed::execute(seed_args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
