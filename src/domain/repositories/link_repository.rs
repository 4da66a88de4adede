//! Repository trait for short link data access.

use crate::domain::entities::ShortId;
use crate::error::StoreError;
use async_trait::async_trait;

/// Authoritative mapping from short id to original URL.
///
/// Implementations own the consistency of the mapping: keys are unique and a
/// stored key is never overwritten. There is no update or delete path.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Reports whether a link is stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the backend cannot answer.
    async fn exists(&self, id: &ShortId) -> Result<bool, StoreError>;

    /// Stores `original_url` under `id`.
    ///
    /// The existence check and the insert happen as one step with respect to
    /// other saves, so two concurrent saves of the same id never both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] if `id` is already stored.
    /// Returns [`StoreError::Unavailable`] when the backend cannot answer.
    async fn save(&self, id: &ShortId, original_url: &str) -> Result<(), StoreError>;

    /// Returns the original URL stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if nothing is stored under `id`.
    /// Returns [`StoreError::Unavailable`] when the backend cannot answer.
    async fn get_by_id(&self, id: &ShortId) -> Result<String, StoreError>;

    /// Counts stored links.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the backend cannot answer.
    async fn count(&self) -> Result<usize, StoreError>;

    /// Releases resources held by the store (flushes, connections).
    async fn close(&self) -> Result<(), StoreError>;
}
