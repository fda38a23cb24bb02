//! SQL operations for each entity
//!
//! Every public function validates its input first, then performs all of
//! its statements inside one [`Database`](crate::db::Database) transaction.

pub mod authors;
pub mod books;
pub mod contacts;
pub mod libraries;

use crate::error::Result;
use rusqlite::{params, Connection, OptionalExtension, Params, Row};

/// Collect every row of `sql` through `map`
fn query_all<T, P, F>(conn: &Connection, sql: &str, params: P, map: F) -> Result<Vec<T>>
where
    P: Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params, map)?
        .collect::<rusqlite::Result<Vec<T>>>()?;
    Ok(rows)
}

/// Fetch at most one row of `sql` through `map`
fn query_one<T, P, F>(conn: &Connection, sql: &str, params: P, map: F) -> Result<Option<T>>
where
    P: Params,
    F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
{
    Ok(conn.query_row(sql, params, map).optional()?)
}

/// Whether `table` has a row with this id
fn exists(conn: &Connection, table: &str, id: i64) -> Result<bool> {
    let sql = format!("SELECT 1 FROM {} WHERE id = ?1", table);
    Ok(query_one(conn, &sql, params![id], |_| Ok(()))?.is_some())
}
