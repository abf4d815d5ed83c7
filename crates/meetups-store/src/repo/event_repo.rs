//! SQLite repository for Event rows

use crate::errors::{from_rusqlite, Result};
use crate::repo::CategoryRepo;
use meetups_core::errors::MeetupsError;
use meetups_core::model::{Category, Event};
use rusqlite::{Connection, OptionalExtension, Row};

pub struct EventRepo;

fn event_from_row(row: &Row<'_>) -> rusqlite::Result<Event> {
    Ok(Event {
        id: row.get(0)?,
        name: row.get(1)?,
        category_id: row.get(2)?,
    })
}

impl EventRepo {
    /// Insert a new event under `category`
    ///
    /// The foreign key is checked by SQLite; an unknown category id fails
    /// with `ConstraintViolation`.
    pub fn insert(conn: &Connection, name: &str, category: &Category) -> Result<Event> {
        Self::insert_for_category_id(conn, name, category.id)
    }

    /// Insert by raw category id
    pub fn insert_for_category_id(conn: &Connection, name: &str, category_id: i64) -> Result<Event> {
        conn.execute(
            "INSERT INTO events (name, category_id) VALUES (?1, ?2)",
            rusqlite::params![name, category_id],
        )
        .map_err(from_rusqlite)?;

        Ok(Event::new(conn.last_insert_rowid(), name, category_id))
    }

    pub fn get(conn: &Connection, id: i64) -> Result<Option<Event>> {
        conn.query_row(
            "SELECT id, name, category_id FROM events WHERE id = ?1",
            [id],
            event_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Events belonging to a category, in id order
    pub fn find_by_category(conn: &Connection, category_id: i64) -> Result<Vec<Event>> {
        let mut stmt = conn
            .prepare("SELECT id, name, category_id FROM events WHERE category_id = ?1 ORDER BY id")
            .map_err(from_rusqlite)?;

        let events = stmt
            .query_map([category_id], event_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(events)
    }

    /// The category an event belongs to
    pub fn category_of(conn: &Connection, event: &Event) -> Result<Category> {
        CategoryRepo::get(conn, event.category_id)?.ok_or_else(|| {
            MeetupsError::CategoryIdNotFound {
                category_id: event.category_id,
            }
            .into()
        })
    }

    /// Count of all event rows
    pub fn count(conn: &Connection) -> Result<i64> {
        conn.query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))
            .map_err(from_rusqlite)
    }
}
