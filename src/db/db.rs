use crate::libs::config::Config;
use crate::libs::error::Result;
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

pub const DB_FILE_NAME: &str = "tempo.db";

/// How long a connection waits on another writer before the operation
/// surfaces as a storage failure. The tracker and a dashboard process may
/// open the same file concurrently; a bounded wait lets them interleave
/// instead of failing on first contention.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Central database connection manager.
///
/// Resolves the database file location (config override or platform data
/// directory) and hands out configured connections. Schema creation is
/// owned by the table modules and is idempotent, so every open is safe.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database at its configured location.
    pub fn new() -> Result<Db> {
        let db_file_path = Config::read()?.db_path()?;
        Self::open(&db_file_path)
    }

    /// Opens (or creates) the database file at `path`.
    pub fn open(path: &Path) -> Result<Db> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;

        Ok(Db { conn })
    }
}
