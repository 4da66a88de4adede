//! Request validation middleware.
//!
//! Rejects malformed input with `400 Bad Request` before any handler or
//! service code runs.

use axum::{
    body::{Body, to_bytes},
    extract::{Path, Request, State},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use crate::domain::entities::ShortId;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::validate_url;

/// Largest accepted request body for `POST /`.
pub const MAX_URL_BODY_BYTES: usize = 64 * 1024;

/// Validates the raw original URL carried in the request body.
///
/// The body must be UTF-8 text that parses as a URL with a scheme and a
/// host. On success the request continues with the body replaced by the
/// trimmed URL.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for unreadable, oversized or invalid bodies.
pub async fn url_body(request: Request, next: Next) -> Result<Response, AppError> {
    let (parts, body) = request.into_parts();

    let bytes = to_bytes(body, MAX_URL_BODY_BYTES).await.map_err(|e| {
        warn!("Failed to read request body: {}", e);
        AppError::bad_request("Cannot read request body")
    })?;

    let text = std::str::from_utf8(&bytes).map_err(|_| {
        warn!("Request body is not valid UTF-8");
        AppError::bad_request("Invalid URL format")
    })?;

    let original_url = validate_url(text).map_err(|e| {
        warn!(body = %text, "Invalid URL received: {}", e);
        AppError::bad_request("Invalid URL format")
    })?;

    debug!("URL validation successful");

    let request = Request::from_parts(parts, Body::from(original_url.to_string()));
    Ok(next.run(request).await)
}

/// Validates the `{id}` path segment against the configured id length and
/// alphabet.
///
/// On success the parsed [`ShortId`] is stored in the request extensions for
/// the handler.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when the segment is not a well-formed id.
pub async fn short_id_path(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let id = ShortId::parse(&raw_id, state.id_length).map_err(|e| {
        warn!(id = %raw_id, "Invalid ID format received: {}", e);
        AppError::bad_request("Invalid ID format")
    })?;

    debug!(id = %id, "ID validation successful");

    request.extensions_mut().insert(id);
    Ok(next.run(request).await)
}
