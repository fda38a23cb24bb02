//! Author operations

use super::{query_all, query_one};
use crate::db::Database;
use crate::error::{PractikumError, Result};
use crate::models::{Author, AuthorInput};
use crate::validate::Validate;
use rusqlite::{params, Connection};

const NOT_FOUND: &str = "Author not found";

fn find(conn: &Connection, id: i64) -> Result<Author> {
    let sql = format!("SELECT {} FROM authors WHERE id = ?1", Author::COLUMNS);
    query_one(conn, &sql, params![id], Author::from_row)?
        .ok_or_else(|| PractikumError::not_found(NOT_FOUND))
}

/// Escape LIKE wildcards so `q` matches literally
fn contains_pattern(q: &str) -> String {
    let mut pattern = String::with_capacity(q.len() + 2);
    pattern.push('%');
    for c in q.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

pub async fn create(db: &Database, input: AuthorInput) -> Result<Author> {
    input.validate()?;
    db.write(move |tx| {
        tx.execute("INSERT INTO authors(name) VALUES (?1)", params![input.name])?;
        let id = tx.last_insert_rowid();
        tracing::debug!(id, "Created author");
        find(tx, id)
    })
    .await
}

/// All authors by ascending id, optionally only those whose name contains `q`
///
/// Matching is case-insensitive for ASCII letters. An empty `q` matches all.
pub async fn list(db: &Database, q: Option<String>) -> Result<Vec<Author>> {
    db.read(move |tx| match q.as_deref().filter(|q| !q.is_empty()) {
        Some(q) => query_all(
            tx,
            &format!(
                "SELECT {} FROM authors WHERE name LIKE ?1 ESCAPE '\\' ORDER BY id",
                Author::COLUMNS
            ),
            params![contains_pattern(q)],
            Author::from_row,
        ),
        None => query_all(
            tx,
            &format!("SELECT {} FROM authors ORDER BY id", Author::COLUMNS),
            [],
            Author::from_row,
        ),
    })
    .await
}

pub async fn get(db: &Database, id: i64) -> Result<Author> {
    db.read(move |tx| find(tx, id)).await
}

/// Delete an author together with all of their books
pub async fn delete(db: &Database, id: i64) -> Result<()> {
    db.write(move |tx| {
        if tx.execute("DELETE FROM authors WHERE id = ?1", params![id])? == 0 {
            return Err(PractikumError::not_found(NOT_FOUND));
        }
        tracing::debug!(id, "Deleted author");
        Ok(())
    })
    .await
}
