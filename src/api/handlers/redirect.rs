//! Handler for short URL redirect.

use axum::{
    extract::{Extension, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::domain::entities::ShortId;
use crate::error::{AppError, ShortenError};
use crate::state::AppState;

/// Redirects a short id to its original URL.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// The id is validated by [`crate::api::middleware::validate::short_id_path`]
/// before this handler runs.
///
/// # Errors
///
/// Returns 404 Not Found if the id was never created.
/// Returns 500 Internal Server Error if the store failed or the stored URL
/// cannot be sent as a `Location` header.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Extension(id): Extension<ShortId>,
) -> Result<Response, AppError> {
    let original_url = state
        .shortener
        .get_original_url(&id)
        .await
        .inspect_err(|e| {
            if matches!(e, ShortenError::NotFound(_)) {
                warn!(id = %id, "ID not found");
            }
        })?;

    let location = HeaderValue::try_from(original_url).map_err(|e| {
        error!(id = %id, "Stored URL is not a valid Location header: {}", e);
        AppError::internal("Internal server error")
    })?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}
