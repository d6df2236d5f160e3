//! SQLite implementation of [`MessageStore`].
//!
//! Uses [`sqlx`] with the `sqlite` feature.  Migrations are run automatically
//! on startup via [`SqliteStore::connect`].
//!
//! # Migrations path
//!
//! `sqlx::migrate!("./migrations")` resolves the path **at compile time**
//! relative to `CARGO_MANIFEST_DIR` (the crate root), so the directory is
//! embedded into the binary.  The database file location is determined at
//! runtime by the `HELLO_DATABASE_URL` environment variable and is **not**
//! related to the current working directory at runtime.
//!
//! # Queries
//!
//! The `sqlx::query` (runtime-verified) form is used deliberately so that no
//! `DATABASE_URL` environment variable is needed at compile time.

use sqlx::SqlitePool;

use super::{MessageStore, StoreError, DEFAULT_MESSAGE};

/// SQLite-backed singleton message store.
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (or create) the SQLite database at `url` and run pending migrations.
    ///
    /// `url` should be a sqlx-compatible SQLite URL, e.g.
    /// `"sqlite://hello.db?mode=rwc"` or `"sqlite::memory:"` for tests.
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let pool = SqlitePool::connect(url).await?;
        // Path is resolved relative to CARGO_MANIFEST_DIR at compile time.
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }
}

/// Split the schema-missing case out of a raw sqlx error so the caller can
/// surface a migration hint instead of a generic failure.
fn classify(e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &e {
        if db.message().contains("no such table") {
            return StoreError::SchemaMissing;
        }
    }
    StoreError::Database(e)
}

impl MessageStore for SqliteStore {
    async fn get_message(&self) -> Result<String, StoreError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT content FROM messages WHERE id = 1")
                .fetch_optional(&self.pool)
                .await
                .map_err(classify)?;

        match row {
            Some((content,)) if !content.is_empty() => Ok(content),
            // Absent (or somehow blank) row: persist the default so later
            // reads and writes see the same singleton.
            _ => self.set_message(DEFAULT_MESSAGE).await,
        }
    }

    async fn set_message(&self, content: &str) -> Result<String, StoreError> {
        let updated = sqlx::query("UPDATE messages SET content = ?1 WHERE id = 1")
            .bind(content)
            .execute(&self.pool)
            .await
            .map_err(classify)?;

        // No row yet: insert it.  OR IGNORE makes the insert a no-op if a
        // concurrent first-writer got there between our two statements, so
        // the singleton invariant holds without a transaction.
        if updated.rows_affected() == 0 {
            sqlx::query("INSERT OR IGNORE INTO messages (id, content) VALUES (1, ?1)")
                .bind(content)
                .execute(&self.pool)
                .await
                .map_err(classify)?;
        }

        Ok(content.to_owned())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
