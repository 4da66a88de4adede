//! Error types for every layer of the service.
//!
//! - [`GenerateError`] - failures of the short id generator
//! - [`StoreError`] - failures reported by a [`crate::domain::repositories::LinkRepository`]
//! - [`ShortenError`] - outcome of the create/redirect use case
//! - [`AppError`] - HTTP boundary error rendered as a plain-text response
//!
//! Internal error kinds are logged where they happen and never rendered into
//! response bodies; clients only see the status code and a short message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::entities::ShortId;

/// Errors produced by an [`crate::domain::IdGenerator`].
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The secure random source could not supply bytes.
    #[error("randomness source unavailable: {0}")]
    RandomnessUnavailable(String),
}

/// Errors produced by a link store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A link with this id is already stored.
    #[error("short id {0} already exists")]
    Conflict(ShortId),

    /// No link is stored under this id.
    #[error("short id {0} not found")]
    NotFound(ShortId),

    /// The backing store cannot serve requests (closed, disconnected, ...).
    #[error("link store unavailable: {0}")]
    Unavailable(String),
}

/// Outcome errors of [`crate::application::services::Shortener`] operations.
#[derive(Debug, thiserror::Error)]
pub enum ShortenError {
    /// Every attempt produced a colliding or unusable id.
    #[error("failed to generate unique short id after {attempts} attempts")]
    Exhausted { attempts: usize },

    /// The store failed while checking, saving or reading a link.
    #[error("storage error: {0}")]
    Store(#[source] StoreError),

    /// The store refused a save for an id that passed the existence check.
    #[error("unexpected conflict during save for short id {0}")]
    Inconsistent(ShortId),

    /// No link is stored under the requested id.
    #[error("short id {0} not found")]
    NotFound(ShortId),

    /// The service began shutting down while the request was in progress.
    #[error("request cancelled: service is shutting down")]
    Cancelled,
}

/// HTTP-facing error.
///
/// Carries only the message shown to the client.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String },
    NotFound { message: String },
    Unavailable { message: String },
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns the HTTP status this error is rendered with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation { message }
            | AppError::NotFound { message }
            | AppError::Unavailable { message }
            | AppError::Internal { message } => f.write_str(message),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ShortenError> for AppError {
    fn from(err: ShortenError) -> Self {
        match err {
            ShortenError::NotFound(_) => AppError::not_found("URL not found"),
            ShortenError::Cancelled => AppError::unavailable("Service is shutting down"),
            ShortenError::Exhausted { .. }
            | ShortenError::Store(_)
            | ShortenError::Inconsistent(_) => AppError::internal("Internal server error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Validation { message }
            | AppError::NotFound { message }
            | AppError::Unavailable { message }
            | AppError::Internal { message } => message,
        };

        (status, message).into_response()
    }
}
