//! SQLite Storage Handle
//! Mission: One shared connection and schema for admins and travel requests
//!
//! Both stores borrow the same connection. rusqlite calls are short and
//! synchronous, so a `parking_lot::Mutex` around the connection is enough.

use anyhow::{Context, Result};
use parking_lot::Mutex;
use rusqlite::{ffi, Connection, OpenFlags};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS admins (
    id TEXT PRIMARY KEY,
    username TEXT UNIQUE NOT NULL,
    password_hash TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS travel_requests (
    id TEXT PRIMARY KEY,
    destination TEXT,
    interests TEXT,
    num_travelers REAL,
    cost_per_person REAL,
    email TEXT,
    created_at TEXT NOT NULL
);
"#;

/// Errors a caller has to tell apart. Everything else is infrastructure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("username already exists")]
    UsernameTaken,
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl StoreError {
    /// Map a failed INSERT: only UNIQUE violations become `UsernameTaken`.
    /// PRIMARY KEY, NOT NULL and CHECK failures stay database errors.
    pub(crate) fn from_insert(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _)
                if e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                StoreError::UsernameTaken
            }
            _ => StoreError::Database(err),
        }
    }
}

/// Shared database handle
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Open (or create) the database at `db_path` and apply the schema.
    /// `:memory:` gives a private in-memory database.
    pub fn open(db_path: &str) -> Result<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        let conn = Connection::open_with_flags(db_path, flags)
            .with_context(|| format!("Failed to open database at {}", db_path))?;

        if db_path != ":memory:" {
            let journal_mode: String = conn
                .query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))
                .context("Failed to set journal mode")?;
            if !journal_mode.eq_ignore_ascii_case("wal") {
                warn!("WAL mode not active, journal_mode = {}", journal_mode);
            }
        }

        conn.execute_batch(SCHEMA_SQL)
            .context("Failed to initialize database schema")?;

        info!("Database ready at {}", db_path);

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run `f` with exclusive access to the connection.
    pub(crate) fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> T) -> T {
        let conn = self.conn.lock();
        f(&conn)
    }
}
