//! Link route configuration.

use crate::api::handlers::{redirect_handler, shorten_handler};
use crate::api::middleware::validate;
use crate::state::AppState;
use axum::{
    Router,
    handler::Handler,
    middleware,
    routing::{get, post},
};

/// Shortening and redirect routes with their input validation.
///
/// Validators wrap the handlers rather than the routes, so a wrong method
/// still gets axum's `405` instead of a validation error.
///
/// # Endpoints
///
/// - `POST /`      - Create a short URL from a plain-text body
/// - `GET  /{id}`  - Redirect to the original URL
pub fn link_routes(state: &AppState) -> Router<AppState> {
    let shorten = shorten_handler.layer(middleware::from_fn(validate::url_body));
    let redirect = redirect_handler.layer(middleware::from_fn_with_state(
        state.clone(),
        validate::short_id_path,
    ));

    Router::new()
        .route("/", post(shorten))
        .route("/{id}", get(redirect))
}
