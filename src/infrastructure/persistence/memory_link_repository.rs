//! In-memory implementation of link repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::entities::{Link, ShortId};
use crate::domain::repositories::LinkRepository;
use crate::error::StoreError;

/// Process-local link storage guarded by a single read/write lock.
///
/// Lookups share the read lock; `save` holds the write lock across its
/// existence check and insert. Contents live as long as the process.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    links: RwLock<HashMap<ShortId, Link>>,
    closed: AtomicBool,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_open(&self) -> Result<(), StoreError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(StoreError::Unavailable("store is closed".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn exists(&self, id: &ShortId) -> Result<bool, StoreError> {
        self.ensure_open()?;
        Ok(self.links.read().await.contains_key(id))
    }

    async fn save(&self, id: &ShortId, original_url: &str) -> Result<(), StoreError> {
        self.ensure_open()?;

        let mut links = self.links.write().await;
        if links.contains_key(id) {
            return Err(StoreError::Conflict(id.clone()));
        }

        let link = Link::new(id.clone(), original_url);
        debug!(id = %link.id, created_at = %link.created_at, "Link stored");
        links.insert(id.clone(), link);

        Ok(())
    }

    async fn get_by_id(&self, id: &ShortId) -> Result<String, StoreError> {
        self.ensure_open()?;
        self.links
            .read()
            .await
            .get(id)
            .map(|link| link.original_url.clone())
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    async fn count(&self) -> Result<usize, StoreError> {
        self.ensure_open()?;
        Ok(self.links.read().await.len())
    }

    async fn close(&self) -> Result<(), StoreError> {
        if !self.closed.swap(true, Ordering::AcqRel) {
            let mut links = self.links.write().await;
            info!(links = links.len(), "Closing in-memory link store");
            links.clear();
        }
        Ok(())
    }
}
