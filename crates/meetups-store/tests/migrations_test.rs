// Integration tests for the migration framework

use meetups_core::errors::ExErrorKind;
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    Connection::open_in_memory().expect("Failed to create in-memory database")
}

fn get_table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

#[test]
fn test_apply_migrations_on_empty_db() {
    let mut conn = setup_test_db();

    let result = meetups_store::migrations::apply_migrations(&mut conn);
    assert!(result.is_ok(), "Migrations should succeed: {:?}", result.err());

    let tables = get_table_names(&conn);
    for expected in ["categories", "events", "schema_version", "sqlite_sequence"] {
        assert!(
            tables.contains(&expected.to_string()),
            "Missing table: {}",
            expected
        );
    }
    assert_eq!(tables.len(), 4, "Unexpected tables: {:?}", tables);
}

#[test]
fn test_migration_idempotency() {
    let mut conn = setup_test_db();
    meetups_store::migrations::apply_migrations(&mut conn).unwrap();
    meetups_store::migrations::apply_migrations(&mut conn).unwrap();

    let version_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(
        version_count as usize,
        meetups_store::migrations::get_migrations().len()
    );
}

#[test]
fn test_edited_migration_is_rejected() {
    let mut conn = setup_test_db();
    meetups_store::migrations::apply_migrations(&mut conn).unwrap();

    conn.execute(
        "UPDATE schema_version SET checksum = 'deadbeef' WHERE migration_id = '001_initial_schema'",
        [],
    )
    .unwrap();

    let err = meetups_store::migrations::apply_migrations(&mut conn).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(err.entity_id(), Some("001_initial_schema"));
}

#[test]
fn test_category_name_is_not_unique_in_schema() {
    let mut conn = setup_test_db();
    meetups_store::migrations::apply_migrations(&mut conn).unwrap();

    conn.execute_batch(
        "INSERT INTO categories (name) VALUES ('Tech');
         INSERT INTO categories (name) VALUES ('Tech');",
    )
    .unwrap();

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM categories WHERE name = 'Tech'", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(count, 2);
}
