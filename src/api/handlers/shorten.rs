//! Handler for link shortening endpoint.

use axum::{extract::State, http::StatusCode};

use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for the original URL carried in the request body.
///
/// # Endpoint
///
/// `POST /`
///
/// The body is the raw URL as plain text. It is validated by
/// [`crate::api::middleware::validate::url_body`] before this handler runs.
///
/// # Response
///
/// `201 Created` with `text/plain; charset=utf-8` body:
///
/// ```text
/// http://localhost:8080/aZ09bY18
/// ```
///
/// # Errors
///
/// Returns 500 Internal Server Error if no id could be allocated or the
/// store failed.
pub async fn shorten_handler(
    State(state): State<AppState>,
    original_url: String,
) -> Result<(StatusCode, String), AppError> {
    let id = state.shortener.create_short_url(&original_url).await?;

    Ok((StatusCode::CREATED, state.short_url(id.as_str())))
}

#[cfg(test)]
mod tests {
    use crate::application::services::MockShortener;
    use crate::domain::entities::ShortId;
    use crate::error::ShortenError;
    use crate::infrastructure::persistence::InMemoryLinkRepository;
    use crate::routes::app_router;
    use crate::state::AppState;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use std::sync::Arc;

    fn server(shortener: MockShortener) -> TestServer {
        let state = AppState::new(
            Arc::new(shortener),
            Arc::new(InMemoryLinkRepository::new()),
            "http://test.co",
            8,
        );
        TestServer::new(app_router(state)).unwrap()
    }

    #[tokio::test]
    async fn test_shorten_composes_base_url() {
        let mut shortener = MockShortener::new();
        shortener
            .expect_create_short_url()
            .withf(|url| url == "https://example.com")
            .times(1)
            .returning(|_| Ok(ShortId::new_unchecked("aZ09bY18")));

        let response = server(shortener)
            .post("/")
            .text("https://example.com")
            .await;

        response.assert_status(StatusCode::CREATED);
        assert_eq!(response.text(), "http://test.co/aZ09bY18");
    }

    #[tokio::test]
    async fn test_invalid_body_never_reaches_service() {
        let mut shortener = MockShortener::new();
        shortener.expect_create_short_url().times(0);

        let response = server(shortener).post("/").text("invalid-url").await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_inconsistency_is_internal_error() {
        let mut shortener = MockShortener::new();
        shortener
            .expect_create_short_url()
            .returning(|_| Err(ShortenError::Inconsistent(ShortId::new_unchecked("abcd1234"))));

        let response = server(shortener)
            .post("/")
            .text("https://example.com")
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.text(), "Internal server error");
    }

    #[tokio::test]
    async fn test_exhausted_is_internal_error() {
        let mut shortener = MockShortener::new();
        shortener
            .expect_create_short_url()
            .returning(|_| Err(ShortenError::Exhausted { attempts: 10 }));

        let response = server(shortener)
            .post("/")
            .text("https://example.com")
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }
}
