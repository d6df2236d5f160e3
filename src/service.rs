//! Business logic for the hello message.
//!
//! [`HelloService`] sits between the HTTP handlers and the store.  The only
//! rule it owns is that stored content is trimmed and non-empty; everything
//! else is a pass-through.

use thiserror::Error;

use crate::db::{MessageStore, StoreError};

/// Errors produced by [`HelloService`].
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The submitted content was empty after trimming.
    #[error("message content cannot be empty")]
    EmptyContent,

    /// Propagated from the store.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Service over any [`MessageStore`].  Constructed per request by the
/// handlers, borrowing the shared store from [`crate::state::AppState`].
pub struct HelloService<'a, S> {
    store: &'a S,
}

impl<'a, S: MessageStore> HelloService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Read the message.  Pure pass-through.
    pub async fn get_message(&self) -> Result<String, ServiceError> {
        Ok(self.store.get_message().await?)
    }

    /// Trim and store new content, rejecting whitespace-only input.
    pub async fn set_message(&self, content: &str) -> Result<String, ServiceError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(ServiceError::EmptyContent);
        }
        Ok(self.store.set_message(trimmed).await?)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::db::DEFAULT_MESSAGE;

    /// Store stub tracking the last write; absent behaves like a fresh table.
    #[derive(Default)]
    struct StubStore {
        content: Mutex<Option<String>>,
    }

    impl MessageStore for StubStore {
        async fn get_message(&self) -> Result<String, StoreError> {
            let held = self.content.lock().expect("lock").clone();
            Ok(held.unwrap_or_else(|| DEFAULT_MESSAGE.to_owned()))
        }

        async fn set_message(&self, content: &str) -> Result<String, StoreError> {
            *self.content.lock().expect("lock") = Some(content.to_owned());
            Ok(content.to_owned())
        }
    }

    #[tokio::test]
    async fn get_passes_through() {
        let store = StubStore::default();
        let svc = HelloService::new(&store);
        assert_eq!(svc.get_message().await.expect("get"), DEFAULT_MESSAGE);
    }

    #[tokio::test]
    async fn set_trims_before_storing() {
        let store = StubStore::default();
        let svc = HelloService::new(&store);

        let stored = svc.set_message("  Hello  ").await.expect("set");
        assert_eq!(stored, "Hello");
        assert_eq!(
            store.content.lock().expect("lock").as_deref(),
            Some("Hello")
        );
    }

    #[tokio::test]
    async fn whitespace_only_content_is_rejected_without_a_write() {
        let store = StubStore::default();
        let svc = HelloService::new(&store);

        let err = svc.set_message("   \t ").await.unwrap_err();
        assert!(matches!(err, ServiceError::EmptyContent));
        assert!(store.content.lock().expect("lock").is_none());
    }
}
