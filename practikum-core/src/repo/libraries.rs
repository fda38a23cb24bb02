//! Library operations

use super::{query_all, query_one};
use crate::db::Database;
use crate::error::{PractikumError, Result};
use crate::models::{Library, LibraryInput};
use crate::validate::Validate;
use rusqlite::{params, Connection};

fn find(conn: &Connection, id: i64) -> Result<Library> {
    let sql = format!("SELECT {} FROM libraries WHERE id = ?1", Library::COLUMNS);
    query_one(conn, &sql, params![id], Library::from_row)?
        .ok_or_else(|| PractikumError::not_found("Library not found"))
}

pub async fn create(db: &Database, input: LibraryInput) -> Result<Library> {
    input.validate()?;
    db.write(move |tx| {
        tx.execute(
            "INSERT INTO libraries(name, address) VALUES (?1, ?2)",
            params![input.name, input.address],
        )?;
        let id = tx.last_insert_rowid();
        tracing::debug!(id, "Created library");
        find(tx, id)
    })
    .await
}

pub async fn list(db: &Database) -> Result<Vec<Library>> {
    db.read(|tx| {
        query_all(
            tx,
            &format!("SELECT {} FROM libraries ORDER BY id", Library::COLUMNS),
            [],
            Library::from_row,
        )
    })
    .await
}

pub async fn get(db: &Database, id: i64) -> Result<Library> {
    db.read(move |tx| find(tx, id)).await
}
