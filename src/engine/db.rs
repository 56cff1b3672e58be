//! Persistence Adapter: Serializes the task list into a local SQLite store.
//!
//! The whole collection lives as one JSON array under a single key in a
//! key-value table, so every save replaces the previous snapshot wholesale.

use super::types::Task;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

const TASKS_KEY: &str = "tasks";

/// Failures on the open path. Save/load degradation is handled internally.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no usable data directory for the task store")]
    NoDataDir,
    #[error("failed to prepare data directory {path:?}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

pub struct Db {
    conn: Connection,
}

impl Db {
    /// Opens (creating if needed) the store in the default data directory.
    ///
    /// `TICKLIST_DATA_DIR` overrides the location.
    ///
    /// # Errors
    /// Returns an error if no data directory can be resolved or the database
    /// cannot be opened.
    pub fn open() -> Result<Self, StoreError> {
        let dir = data_dir()?;
        std::fs::create_dir_all(&dir).map_err(|source| StoreError::DataDir {
            path: dir.clone(),
            source,
        })?;
        Self::open_at(dir.join("tasks.db"))
    }

    /// Opens (creating if needed) a store at an explicit path.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or initialized.
    pub fn open_at(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS store (key TEXT PRIMARY KEY, value TEXT NOT NULL)",
            [],
        )?;
        Ok(Self { conn })
    }

    /// Writes the full collection under the tasks key.
    ///
    /// Failures are logged and swallowed: the previous snapshot stays in
    /// place and the in-memory collection is not rolled back.
    pub fn save(&self, tasks: &[Task]) {
        let value = match serde_json::to_string(tasks) {
            Ok(value) => value,
            Err(err) => {
                warn!("could not serialize tasks: {err}");
                return;
            }
        };
        if let Err(err) = self.conn.execute(
            "INSERT OR REPLACE INTO store (key, value) VALUES (?1, ?2)",
            params![TASKS_KEY, value],
        ) {
            warn!("could not persist tasks: {err}");
        }
    }

    /// Reads the collection back, in stored order.
    ///
    /// A missing key is an empty collection; an unreadable store or corrupt
    /// payload is logged and also treated as empty.
    #[must_use]
    pub fn load(&self) -> Vec<Task> {
        let row: Option<String> = match self
            .conn
            .query_row(
                "SELECT value FROM store WHERE key = ?1",
                params![TASKS_KEY],
                |r| r.get(0),
            )
            .optional()
        {
            Ok(row) => row,
            Err(err) => {
                warn!("could not read task store: {err}");
                return Vec::new();
            }
        };
        let Some(raw) = row else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!("discarding corrupt task data: {err}");
                Vec::new()
            }
        }
    }
}

fn data_dir() -> Result<PathBuf, StoreError> {
    if let Ok(dir) = std::env::var("TICKLIST_DATA_DIR") {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    dirs::data_dir()
        .map(|dir| dir.join("ticklist"))
        .ok_or(StoreError::NoDataDir)
}
