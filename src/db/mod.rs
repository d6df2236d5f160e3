//! Database abstraction layer.
//!
//! [`MessageStore`] defines the interface for reading and replacing the
//! singleton hello message.  The default implementation is
//! [`sqlite::SqliteStore`].  To swap to another database (Postgres, MySQL,
//! …), implement [`MessageStore`] for your new type and change the concrete
//! type in [`crate::state::AppState`].
//!
//! All trait methods use `impl Future` in their signatures (stable since Rust
//! 1.75) so no extra `async-trait` crate is required.

pub mod sqlite;

use thiserror::Error;

/// Content synthesized (and persisted) when the singleton row is absent.
pub const DEFAULT_MESSAGE: &str = "Hello World from SQLite!";

/// Errors surfaced by a [`MessageStore`] implementation.
///
/// The schema-missing case is split out so the HTTP boundary can tell the
/// operator to run migrations instead of returning a generic failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The `messages` table does not exist yet.
    #[error("database table not found; run migrations")]
    SchemaMissing,

    /// Any other persistence failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Trait for the singleton message row.
///
/// Implement this trait to swap SQLite for another backend without touching
/// the service or any handler code.
pub trait MessageStore: Send + Sync + 'static {
    /// Read the message.  If the row is absent, the default content is
    /// persisted and returned, so a first read is also a first write.
    fn get_message(&self) -> impl std::future::Future<Output = Result<String, StoreError>> + Send;

    /// Replace the message (update-if-present, else insert).  Idempotent;
    /// last writer wins.  Returns the stored value unchanged.
    fn set_message(
        &self,
        content: &str,
    ) -> impl std::future::Future<Output = Result<String, StoreError>> + Send;
}
