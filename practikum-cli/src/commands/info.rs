//! Info command implementation

use anyhow::{bail, Context, Result};
use practikum_core::Database;
use serde::Serialize;
use std::path::Path;

/// Database info output
#[derive(Serialize)]
struct DatabaseInfo {
    path: String,
    authors: i64,
    libraries: i64,
    books: i64,
    contacts: i64,
}

/// Display row counts of every table
pub async fn info(database: &str, json: bool) -> Result<()> {
    // Opening would create a fresh file, so refuse missing ones
    if !Path::new(database).exists() {
        bail!("Database not found: {}", database);
    }

    let db = Database::init(database)
        .await
        .with_context(|| format!("Failed to open database: {}", database))?;
    let counts = db.table_counts().await?;
    let count = |table: &str| {
        counts
            .iter()
            .find(|(name, _)| *name == table)
            .map_or(0, |(_, n)| *n)
    };

    let info = DatabaseInfo {
        path: database.to_string(),
        authors: count("authors"),
        libraries: count("libraries"),
        books: count("books"),
        contacts: count("contacts"),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Database:  {}", info.path);
        println!("Authors:   {}", info.authors);
        println!("Libraries: {}", info.libraries);
        println!("Books:     {}", info.books);
        println!("Contacts:  {}", info.contacts);
    }

    Ok(())
}
