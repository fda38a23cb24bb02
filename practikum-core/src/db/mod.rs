//! SQLite storage handle
//!
//! [`Database`] only remembers where the database file lives. Every
//! operation opens its own connection on the blocking thread pool, runs
//! inside a single transaction and drops the connection when it returns,
//! whatever the outcome. A transaction that is dropped without being
//! committed rolls back.

pub mod schema;

use crate::error::{PractikumError, Result};
use rusqlite::{Connection, OpenFlags, Transaction, TransactionBehavior};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// How long a connection waits on a locked database before giving up
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to the relational store
#[derive(Debug, Clone)]
pub struct Database {
    path: Arc<PathBuf>,
}

impl Database {
    /// Open the database at `path`, creating the file and any missing tables
    ///
    /// Fails if the file cannot be opened or created.
    pub async fn init(path: impl Into<PathBuf>) -> Result<Self> {
        let db = Self {
            path: Arc::new(path.into()),
        };
        let path = Arc::clone(&db.path);
        tokio::task::spawn_blocking(move || -> Result<()> {
            let conn = Self::connect(&path, OpenFlags::default())?;
            schema::apply(&conn)?;
            Ok(())
        })
        .await??;
        tracing::info!("Database ready at {}", db.path.display());
        Ok(db)
    }

    /// Path of the database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a connection with foreign-key enforcement switched on
    fn connect(path: &Path, flags: OpenFlags) -> Result<Connection> {
        let conn = Connection::open_with_flags(path, flags).map_err(|e| {
            PractikumError::Unavailable(format!("cannot open {}: {}", path.display(), e))
        })?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(conn)
    }

    /// Run `f` in a deferred (read) transaction
    pub async fn read<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        self.run(TransactionBehavior::Deferred, f).await
    }

    /// Run `f` in an immediate (write) transaction
    ///
    /// The write lock is taken up front, so existence checks made inside `f`
    /// still hold when its writes land.
    pub async fn write<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        self.run(TransactionBehavior::Immediate, f).await
    }

    async fn run<T, F>(&self, behavior: TransactionBehavior, f: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let path = Arc::clone(&self.path);
        tokio::task::spawn_blocking(move || -> Result<T> {
            // Never create the file here: a vanished database is an outage
            let mut conn = Self::connect(
                &path,
                OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )?;
            let tx = conn.transaction_with_behavior(behavior)?;
            let value = f(&tx)?;
            tx.commit()?;
            Ok(value)
        })
        .await?
    }

    /// Row count of every entity table, in [`schema::TABLES`] order
    pub async fn table_counts(&self) -> Result<Vec<(&'static str, i64)>> {
        self.read(|tx| {
            schema::TABLES
                .iter()
                .map(|&table| -> Result<(&'static str, i64)> {
                    let count: i64 =
                        tx.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                            row.get(0)
                        })?;
                    Ok((table, count))
                })
                .collect()
        })
        .await
    }
}
