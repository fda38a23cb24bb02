//! Contact operations

use super::{query_all, query_one};
use crate::db::Database;
use crate::error::{PractikumError, Result};
use crate::models::{Contact, ContactInput};
use crate::validate::Validate;
use rusqlite::{params, Connection};

const NOT_FOUND: &str = "Contact not found";

fn find(conn: &Connection, id: i64) -> Result<Contact> {
    let sql = format!("SELECT {} FROM contacts WHERE id = ?1", Contact::COLUMNS);
    query_one(conn, &sql, params![id], Contact::from_row)?
        .ok_or_else(|| PractikumError::not_found(NOT_FOUND))
}

pub async fn create(db: &Database, input: ContactInput) -> Result<Contact> {
    input.validate()?;
    db.write(move |tx| {
        tx.execute(
            "INSERT INTO contacts(first_name, last_name, email) VALUES (?1, ?2, ?3)",
            params![input.first_name, input.last_name, input.email],
        )?;
        let id = tx.last_insert_rowid();
        tracing::debug!(id, "Created contact");
        find(tx, id)
    })
    .await
}

/// All contacts by ascending id, optionally only those with exactly `email`
pub async fn list(db: &Database, email: Option<String>) -> Result<Vec<Contact>> {
    db.read(move |tx| match email.as_deref().filter(|e| !e.is_empty()) {
        Some(email) => query_all(
            tx,
            &format!(
                "SELECT {} FROM contacts WHERE email = ?1 ORDER BY id",
                Contact::COLUMNS
            ),
            params![email],
            Contact::from_row,
        ),
        None => query_all(
            tx,
            &format!("SELECT {} FROM contacts ORDER BY id", Contact::COLUMNS),
            [],
            Contact::from_row,
        ),
    })
    .await
}

pub async fn get(db: &Database, id: i64) -> Result<Contact> {
    db.read(move |tx| find(tx, id)).await
}

/// Replace every field of an existing contact; never inserts
pub async fn update(db: &Database, id: i64, input: ContactInput) -> Result<Contact> {
    input.validate()?;
    db.write(move |tx| {
        let changed = tx.execute(
            "UPDATE contacts SET first_name = ?1, last_name = ?2, email = ?3 WHERE id = ?4",
            params![input.first_name, input.last_name, input.email, id],
        )?;
        if changed == 0 {
            return Err(PractikumError::not_found(NOT_FOUND));
        }
        tracing::debug!(id, "Updated contact");
        find(tx, id)
    })
    .await
}

pub async fn delete(db: &Database, id: i64) -> Result<()> {
    db.write(move |tx| {
        if tx.execute("DELETE FROM contacts WHERE id = ?1", params![id])? == 0 {
            return Err(PractikumError::not_found(NOT_FOUND));
        }
        tracing::debug!(id, "Deleted contact");
        Ok(())
    })
    .await
}

/// Remove every contact, returning how many were removed
pub async fn delete_all(db: &Database) -> Result<usize> {
    db.write(|tx| {
        let removed = tx.execute("DELETE FROM contacts", [])?;
        tracing::debug!(removed, "Deleted all contacts");
        Ok(removed)
    })
    .await
}
