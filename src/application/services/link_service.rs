//! Link creation and retrieval service.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::{error, warn};

use crate::domain::IdGenerator;
use crate::domain::entities::ShortId;
use crate::domain::repositories::LinkRepository;
use crate::error::{ShortenError, StoreError};

/// Create/redirect use case consumed by HTTP handlers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Shortener: Send + Sync {
    /// Stores `original_url` under a freshly generated unique id.
    ///
    /// The URL must already be validated; it is stored verbatim.
    ///
    /// # Errors
    ///
    /// - [`ShortenError::Exhausted`] when no free id was found within the attempt budget
    /// - [`ShortenError::Store`] when the store fails
    /// - [`ShortenError::Inconsistent`] when the store refuses a checked id
    /// - [`ShortenError::Cancelled`] when the service is shutting down
    async fn create_short_url(&self, original_url: &str) -> Result<ShortId, ShortenError>;

    /// Resolves a short id to its original URL.
    ///
    /// # Errors
    ///
    /// - [`ShortenError::NotFound`] for unknown ids
    /// - [`ShortenError::Store`] for any other store failure
    async fn get_original_url(&self, id: &ShortId) -> Result<String, ShortenError>;
}

/// Step of the id search loop.
#[derive(Debug)]
enum Attempt {
    /// Ask the generator for a candidate; `used` attempts are already consumed.
    Generate { used: usize },
    /// Check a candidate against the store.
    Check { used: usize, candidate: ShortId },
}

/// Service coordinating id generation and link storage.
///
/// Owns the retry policy: candidates are drawn until one is free in the store
/// or `max_attempts` candidates have been consumed. The store remains the
/// arbiter of uniqueness at save time.
pub struct LinkService<L: LinkRepository, G: IdGenerator> {
    link_repository: Arc<L>,
    id_generator: Arc<G>,
    max_attempts: usize,
    shutdown: Option<watch::Receiver<bool>>,
}

impl<L: LinkRepository, G: IdGenerator> LinkService<L, G> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>, id_generator: Arc<G>, max_attempts: usize) -> Self {
        Self {
            link_repository,
            id_generator,
            max_attempts,
            shutdown: None,
        }
    }

    /// Aborts in-flight id searches once `shutdown` turns `true`.
    pub fn with_shutdown(mut self, shutdown: watch::Receiver<bool>) -> Self {
        self.shutdown = Some(shutdown);
        self
    }

    fn is_shutting_down(&self) -> bool {
        self.shutdown.as_ref().is_some_and(|rx| *rx.borrow())
    }

    /// Finds an id that is not stored yet.
    ///
    /// Generation failures and reserved ids consume an attempt and are
    /// retried. A failing existence check ends the search immediately.
    async fn find_free_id(&self) -> Result<ShortId, ShortenError> {
        let mut state = Attempt::Generate { used: 0 };

        loop {
            state = match state {
                Attempt::Generate { used } if used >= self.max_attempts => {
                    return Err(ShortenError::Exhausted {
                        attempts: self.max_attempts,
                    });
                }
                Attempt::Generate { .. } if self.is_shutting_down() => {
                    return Err(ShortenError::Cancelled);
                }
                Attempt::Generate { used } => match self.id_generator.generate() {
                    Ok(candidate) => Attempt::Check { used, candidate },
                    Err(e) => {
                        warn!(attempt = used + 1, error = %e, "Short id generation failed");
                        Attempt::Generate { used: used + 1 }
                    }
                },
                Attempt::Check { used, candidate } if candidate.is_reserved() => {
                    warn!(id = %candidate, attempt = used + 1, "Reserved id generated, retrying");
                    Attempt::Generate { used: used + 1 }
                }
                Attempt::Check { used, candidate } => {
                    match self.link_repository.exists(&candidate).await {
                        Ok(false) => return Ok(candidate),
                        Ok(true) => {
                            warn!(id = %candidate, attempt = used + 1, "Collision detected, retrying");
                            Attempt::Generate { used: used + 1 }
                        }
                        Err(e) => {
                            error!(id = %candidate, error = %e, "Failed to check id existence");
                            return Err(ShortenError::Store(e));
                        }
                    }
                }
            };
        }
    }
}

#[async_trait]
impl<L: LinkRepository, G: IdGenerator> Shortener for LinkService<L, G> {
    async fn create_short_url(&self, original_url: &str) -> Result<ShortId, ShortenError> {
        let id = self.find_free_id().await.inspect_err(|e| {
            if !matches!(e, ShortenError::Cancelled) {
                error!(error = %e, "Could not generate unique short id");
            }
        })?;

        match self.link_repository.save(&id, original_url).await {
            Ok(()) => Ok(id),
            Err(StoreError::Conflict(_)) => {
                error!(id = %id, "Conflict during save for supposedly unique id");
                Err(ShortenError::Inconsistent(id))
            }
            Err(e) => {
                error!(id = %id, error = %e, "Failed to save URL");
                Err(ShortenError::Store(e))
            }
        }
    }

    async fn get_original_url(&self, id: &ShortId) -> Result<String, ShortenError> {
        match self.link_repository.get_by_id(id).await {
            Ok(url) => Ok(url),
            Err(StoreError::NotFound(missing)) => Err(ShortenError::NotFound(missing)),
            Err(e) => {
                error!(id = %id, error = %e, "Failed to get URL by id");
                Err(ShortenError::Store(e))
            }
        }
    }
}
