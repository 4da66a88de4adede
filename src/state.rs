//! Shared state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::Shortener;
use crate::domain::repositories::LinkRepository;

/// Dependencies and settings available to every handler.
///
/// Constructed once at startup by [`crate::server::run`]; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<dyn Shortener>,
    /// Store handle used by the health check.
    pub link_repository: Arc<dyn LinkRepository>,
    /// Public prefix of short URLs, without trailing slash.
    pub base_url: Arc<str>,
    /// Exact length accepted for ids in request paths.
    pub id_length: usize,
}

impl AppState {
    pub fn new(
        shortener: Arc<dyn Shortener>,
        link_repository: Arc<dyn LinkRepository>,
        base_url: impl Into<Arc<str>>,
        id_length: usize,
    ) -> Self {
        Self {
            shortener,
            link_repository,
            base_url: base_url.into(),
            id_length,
        }
    }

    /// Composes the public short URL for `id`.
    pub fn short_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }
}
