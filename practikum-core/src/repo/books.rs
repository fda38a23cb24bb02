//! Book operations
//!
//! Books reference an author and a library. Both references are checked
//! inside the write transaction before anything is written, author first.

use super::{exists, query_all, query_one};
use crate::db::Database;
use crate::error::{PractikumError, Result};
use crate::models::{Book, BookInput, BookSort};
use crate::validate::Validate;
use rusqlite::{params, params_from_iter, Connection};

const NOT_FOUND: &str = "Book not found";

/// Filters and ordering for [`list`]
#[derive(Debug, Clone, Default)]
pub struct BookQuery {
    pub author_id: Option<i64>,
    pub library_id: Option<i64>,
    pub sort: BookSort,
}

impl BookQuery {
    /// Build the listing statement and its parameters
    fn to_sql(&self) -> (String, Vec<i64>) {
        let mut sql = format!("SELECT {} FROM books", Book::COLUMNS);
        let mut clauses = Vec::new();
        let mut values = Vec::new();

        if let Some(author_id) = self.author_id {
            values.push(author_id);
            clauses.push(format!("author_id = ?{}", values.len()));
        }
        if let Some(library_id) = self.library_id {
            values.push(library_id);
            clauses.push(format!("library_id = ?{}", values.len()));
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }

        // Column names come from the allow-list only
        sql.push_str(" ORDER BY ");
        sql.push_str(self.sort.column());
        if self.sort != BookSort::Id {
            sql.push_str(", id");
        }
        (sql, values)
    }
}

fn find(conn: &Connection, id: i64) -> Result<Book> {
    let sql = format!("SELECT {} FROM books WHERE id = ?1", Book::COLUMNS);
    query_one(conn, &sql, params![id], Book::from_row)?
        .ok_or_else(|| PractikumError::not_found(NOT_FOUND))
}

/// Fail on the first reference that does not resolve
fn check_references(conn: &Connection, input: &BookInput) -> Result<()> {
    if !exists(conn, "authors", input.author_id)? {
        return Err(PractikumError::invalid("author_id does not exist"));
    }
    if !exists(conn, "libraries", input.library_id)? {
        return Err(PractikumError::invalid("library_id does not exist"));
    }
    Ok(())
}

pub async fn create(db: &Database, input: BookInput) -> Result<Book> {
    input.validate()?;
    db.write(move |tx| {
        check_references(tx, &input)?;
        tx.execute(
            "INSERT INTO books(title, author_id, library_id, year) VALUES (?1, ?2, ?3, ?4)",
            params![input.title, input.author_id, input.library_id, input.year],
        )?;
        let id = tx.last_insert_rowid();
        tracing::debug!(id, author_id = input.author_id, "Created book");
        find(tx, id)
    })
    .await
}

pub async fn list(db: &Database, query: BookQuery) -> Result<Vec<Book>> {
    let (sql, values) = query.to_sql();
    db.read(move |tx| query_all(tx, &sql, params_from_iter(values), Book::from_row))
        .await
}

pub async fn get(db: &Database, id: i64) -> Result<Book> {
    db.read(move |tx| find(tx, id)).await
}

/// Replace every field of an existing book
///
/// A missing book is reported before its new references are checked.
pub async fn update(db: &Database, id: i64, input: BookInput) -> Result<Book> {
    input.validate()?;
    db.write(move |tx| {
        if !exists(tx, "books", id)? {
            return Err(PractikumError::not_found(NOT_FOUND));
        }
        check_references(tx, &input)?;
        tx.execute(
            "UPDATE books SET title = ?1, author_id = ?2, library_id = ?3, year = ?4 WHERE id = ?5",
            params![input.title, input.author_id, input.library_id, input.year, id],
        )?;
        tracing::debug!(id, "Updated book");
        find(tx, id)
    })
    .await
}

pub async fn delete(db: &Database, id: i64) -> Result<()> {
    db.write(move |tx| {
        if tx.execute("DELETE FROM books WHERE id = ?1", params![id])? == 0 {
            return Err(PractikumError::not_found(NOT_FOUND));
        }
        tracing::debug!(id, "Deleted book");
        Ok(())
    })
    .await
}
