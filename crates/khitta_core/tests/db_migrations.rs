use khitta_core::db::migrations::{apply_migrations, latest_version};
use khitta_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn fresh_database_lands_on_latest_version() {
    let conn = open_db_in_memory().unwrap();

    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
    assert!(latest_version() >= 1);
}

#[test]
fn migrations_are_idempotent() {
    let mut conn = open_db_in_memory().unwrap();
    apply_migrations(&mut conn).unwrap();

    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn newer_schema_than_binary_is_rejected() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();

    match apply_migrations(&mut conn) {
        Err(err @ DbError::FutureSchema {
            db_version: 999, ..
        }) => {
            let message = err.to_string();
            assert!(message.contains("999"));
            assert!(message.contains("newer binary"));
        }
        other => panic!("expected future-schema error, got {other:?}"),
    }
}

#[test]
fn file_database_round_trips_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("khitta.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        conn.execute_batch(
            "INSERT INTO lesson_plans (uuid, title) VALUES ('00000000-0000-4000-8000-000000000001', 'درس');",
        )
        .unwrap();
    }

    let conn = open_db(&path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM lesson_plans;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}
