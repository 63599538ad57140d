//! In-memory session store: one `Document` per editing session.
//!
//! Sessions live entirely in process memory and die with it — there is no
//! save/load and nothing survives a restart. Mutations serialize on the
//! store's write lock, which is the whole concurrency story for document
//! state.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::document::models::Document;

/// One editing session: its document plus bookkeeping.
#[derive(Debug, Clone)]
pub struct Session {
    pub document: Document,
    pub created_at: DateTime<Utc>,
}

/// Shared handle to all live sessions. Cheap to clone into handlers.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session holding the default empty document and returns its
    /// id together with a snapshot of the new session.
    pub async fn create(&self) -> (Uuid, Session) {
        let id = Uuid::new_v4();
        let session = Session {
            document: Document::default(),
            created_at: Utc::now(),
        };
        self.inner.write().await.insert(id, session.clone());
        debug!("session {id} created");
        (id, session)
    }

    /// Returns a snapshot of the session's document, if the session exists.
    pub async fn document(&self, id: Uuid) -> Option<Document> {
        self.inner.read().await.get(&id).map(|s| s.document.clone())
    }

    /// Runs `f` against the session's document under the write lock and
    /// returns its result, or `None` when the session is unknown.
    pub async fn update<T>(&self, id: Uuid, f: impl FnOnce(&mut Document) -> T) -> Option<T> {
        let mut sessions = self.inner.write().await;
        sessions.get_mut(&id).map(|s| f(&mut s.document))
    }

    /// Discards the session. Returns whether it existed.
    pub async fn remove(&self, id: Uuid) -> bool {
        let existed = self.inner.write().await.remove(&id).is_some();
        if existed {
            debug!("session {id} discarded");
        }
        existed
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.len()
    }
}
