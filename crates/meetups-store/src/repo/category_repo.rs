//! SQLite repository for Category rows

use crate::errors::{from_rusqlite, Result};
use meetups_core::errors::MeetupsError;
use meetups_core::model::Category;
use rusqlite::{Connection, OptionalExtension, Row};

pub struct CategoryRepo;

fn category_from_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

impl CategoryRepo {
    /// Insert a new category and return it with its assigned id
    pub fn insert(conn: &Connection, name: &str) -> Result<Category> {
        conn.execute("INSERT INTO categories (name) VALUES (?1)", [name])
            .map_err(from_rusqlite)?;

        Ok(Category::new(conn.last_insert_rowid(), name))
    }

    /// First category whose name matches exactly (case-sensitive)
    ///
    /// Names are not unique in the schema, so the lowest id wins.
    pub fn find_by_name(conn: &Connection, name: &str) -> Result<Option<Category>> {
        conn.query_row(
            "SELECT id, name FROM categories WHERE name = ?1 ORDER BY id LIMIT 1",
            [name],
            category_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Like `find_by_name`, but a missing row is a `NotFound` error
    pub fn require_by_name(conn: &Connection, name: &str) -> Result<Category> {
        Self::find_by_name(conn, name)?.ok_or_else(|| {
            MeetupsError::CategoryNotFound {
                name: name.to_string(),
            }
            .into()
        })
    }

    pub fn get(conn: &Connection, id: i64) -> Result<Option<Category>> {
        conn.query_row(
            "SELECT id, name FROM categories WHERE id = ?1",
            [id],
            category_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Re-read a category from the store
    ///
    /// Fails with `NotFound` if the row has gone away since `category` was read.
    pub fn reload(conn: &Connection, category: &Category) -> Result<Category> {
        Self::get(conn, category.id)?.ok_or_else(|| {
            MeetupsError::CategoryIdNotFound {
                category_id: category.id,
            }
            .into()
        })
    }

    /// All categories in id order
    pub fn list(conn: &Connection) -> Result<Vec<Category>> {
        let mut stmt = conn
            .prepare("SELECT id, name FROM categories ORDER BY id")
            .map_err(from_rusqlite)?;

        let categories = stmt
            .query_map([], category_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(categories)
    }
}
