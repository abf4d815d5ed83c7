//! Explicit transactional units of work
//!
//! Every seeder step runs inside `in_unit_of_work`: the closure's writes are
//! committed if it returns `Ok` and rolled back if it returns `Err`.

use crate::errors::{from_rusqlite, Result};
use meetups_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::{Connection, Transaction};
use std::time::Instant;

/// Run `work` in a single transaction named `op`
///
/// Emits `start` and then either `end` or `end_error` for `op`. A failed
/// commit is reported like a failed closure.
pub fn in_unit_of_work<T, F>(conn: &mut Connection, op: &str, work: F) -> Result<T>
where
    F: FnOnce(&Transaction<'_>) -> Result<T>,
{
    let started = Instant::now();
    log_op_start!(op);

    let result = run(conn, work);
    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    match &result {
        Ok(_) => {
            log_op_end!(op, duration_ms = duration_ms);
        }
        Err(err) => {
            log_op_error!(op, err.clone(), duration_ms = duration_ms);
        }
    }

    result
}

fn run<T, F>(conn: &mut Connection, work: F) -> Result<T>
where
    F: FnOnce(&Transaction<'_>) -> Result<T>,
{
    let tx = conn.transaction().map_err(from_rusqlite)?;

    match work(&tx) {
        Ok(value) => {
            tx.commit().map_err(from_rusqlite)?;
            Ok(value)
        }
        Err(err) => {
            // The closure's error is the one worth reporting.
            if let Err(rollback_err) = tx.rollback() {
                tracing::warn!(error = %rollback_err, "rollback failed");
            }
            Err(err)
        }
    }
}
