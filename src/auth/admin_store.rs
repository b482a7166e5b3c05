//! Admin Credential Storage
//! Mission: Persist admin usernames and password hashes with SQLite

use crate::auth::models::AdminIdentity;
use crate::db::{Database, StoreError};
use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};
use tracing::info;
use uuid::Uuid;

/// Admin storage on the shared database
#[derive(Clone)]
pub struct AdminStore {
    db: Database,
}

impl AdminStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn row_to_admin(row: &Row<'_>) -> rusqlite::Result<AdminIdentity> {
        let id: String = row.get(0)?;
        let id = Uuid::parse_str(&id).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })?;
        Ok(AdminIdentity {
            id,
            username: row.get(1)?,
            password_hash: row.get(2)?,
            created_at: row.get(3)?,
        })
    }

    /// Get admin by exact (case-sensitive) username
    pub fn find_by_username(&self, username: &str) -> Result<Option<AdminIdentity>, StoreError> {
        self.db.with_conn(|conn| {
            conn.query_row(
                "SELECT id, username, password_hash, created_at
                 FROM admins WHERE username = ?1",
                params![username],
                Self::row_to_admin,
            )
            .optional()
            .map_err(StoreError::from)
        })
    }

    /// Get admin by id
    pub fn find_by_id(&self, id: &Uuid) -> Result<Option<AdminIdentity>, StoreError> {
        self.db.with_conn(|conn| {
            conn.query_row(
                "SELECT id, username, password_hash, created_at
                 FROM admins WHERE id = ?1",
                params![id.to_string()],
                Self::row_to_admin,
            )
            .optional()
            .map_err(StoreError::from)
        })
    }

    /// Insert a new admin with an already-hashed password.
    ///
    /// The UNIQUE constraint on `username` decides conflicts, so two concurrent
    /// signups for the same name cannot both succeed.
    pub fn insert(&self, username: &str, password_hash: String) -> Result<AdminIdentity, StoreError> {
        let admin = AdminIdentity {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash,
            created_at: Utc::now().to_rfc3339(),
        };

        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO admins (id, username, password_hash, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    admin.id.to_string(),
                    admin.username,
                    admin.password_hash,
                    admin.created_at,
                ],
            )
            .map_err(StoreError::from_insert)
        })?;

        info!("Created admin: {} ({})", admin.username, admin.id);

        Ok(admin)
    }
}
