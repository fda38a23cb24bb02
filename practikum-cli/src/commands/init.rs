//! Init command implementation

use anyhow::{Context, Result};
use practikum_core::Database;

/// Create any missing tables; running it again changes nothing
pub async fn init(database: &str) -> Result<()> {
    let db = Database::init(database)
        .await
        .with_context(|| format!("Failed to initialize database: {}", database))?;

    println!("Initialized {}", db.path().display());
    Ok(())
}
