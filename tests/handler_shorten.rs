mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use shurs::api::middleware::validate::MAX_URL_BODY_BYTES;
use shurs::domain::entities::ShortId;
use shurs::domain::repositories::LinkRepository;
use shurs::routes::app_router;
use shurs::utils::code_generator::Base62Generator;
use std::collections::HashSet;
use tower::ServiceExt;

#[tokio::test]
async fn test_shorten_returns_short_url() {
    let app = common::spawn_app();

    let response = app.server.post("/").text("https://example.com").await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(
        response.header("content-type"),
        "text/plain; charset=utf-8"
    );

    let body = response.text();
    let id = common::id_from_short_url(&body);
    assert_eq!(id.len(), 8);
    assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));

    let stored = app
        .repository
        .get_by_id(&ShortId::parse(&id, 8).unwrap())
        .await
        .unwrap();
    assert_eq!(stored, "https://example.com");
}

#[tokio::test]
async fn test_shorten_trims_surrounding_whitespace() {
    let app = common::spawn_app();

    let response = app.server.post("/").text("  https://example.com/path\n").await;

    response.assert_status(StatusCode::CREATED);

    let id = common::id_from_short_url(&response.text());
    let stored = app
        .repository
        .get_by_id(&ShortId::parse(&id, 8).unwrap())
        .await
        .unwrap();
    assert_eq!(stored, "https://example.com/path");
}

#[tokio::test]
async fn test_shorten_invalid_url_leaves_store_unchanged() {
    let app = common::spawn_app();

    let response = app.server.post("/").text("not-a-url").await;

    response.assert_status_bad_request();
    assert_eq!(app.repository.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_empty_body() {
    let app = common::spawn_app();

    let response = app.server.post("/").text("").await;

    response.assert_status_bad_request();
    assert_eq!(app.repository.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_url_without_host() {
    let app = common::spawn_app();

    let response = app.server.post("/").text("mailto:user@example.com").await;

    response.assert_status_bad_request();
    assert_eq!(app.repository.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_does_not_leak_error_kinds() {
    let app = common::spawn_app();

    let response = app.server.post("/").text("not-a-url").await;

    assert_eq!(response.text(), "Invalid URL format");
}

#[tokio::test]
async fn test_shorten_same_url_twice_creates_two_ids() {
    let app = common::spawn_app();

    let first = app.server.post("/").text("https://example.com").await;
    let second = app.server.post("/").text("https://example.com").await;

    first.assert_status(StatusCode::CREATED);
    second.assert_status(StatusCode::CREATED);
    assert_ne!(first.text(), second.text());
    assert_eq!(app.repository.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_shorten_many_urls_yields_distinct_ids() {
    let app = common::spawn_app();
    let mut ids = HashSet::new();

    for i in 0..100 {
        let response = app
            .server
            .post("/")
            .text(format!("https://example.com/{i}"))
            .await;
        response.assert_status(StatusCode::CREATED);
        assert!(ids.insert(response.text()));
    }

    assert_eq!(app.repository.count().await.unwrap(), 100);
}

#[tokio::test]
async fn test_shorten_exhausted_attempts_returns_500() {
    let generator = common::FixedGenerator::new("taken000");
    let app = common::spawn_app_with(generator.clone(), 8, 10);

    app.repository
        .save(
            &ShortId::parse("taken000", 8).unwrap(),
            "https://existing.example",
        )
        .await
        .unwrap();

    let response = app.server.post("/").text("https://example.com").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Internal server error");
    assert_eq!(generator.call_count(), 10);
    assert_eq!(app.repository.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_shorten_during_shutdown_returns_503() {
    let app = common::spawn_app();
    app.shutdown.send(true).unwrap();

    let response = app.server.post("/").text("https://example.com").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(app.repository.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_with_closed_store_returns_500() {
    let app = common::spawn_app();
    app.repository.close().await.unwrap();

    let response = app.server.post("/").text("https://example.com").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_get_root_is_not_allowed() {
    let app = common::spawn_app();

    let response = app.server.get("/").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_shorten_oversized_body_is_rejected() {
    let (state, repository, _shutdown) =
        common::create_test_state(Base62Generator::new(8), 8, 10);

    let mut url = String::from("https://example.com/");
    url.push_str(&"a".repeat(MAX_URL_BODY_BYTES));

    let response = app_router(state)
        .oneshot(Request::post("/").body(Body::from(url)).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(repository.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_never_hands_out_health_route() {
    let generator = common::FixedGenerator::new("health");
    let app = common::spawn_app_with(generator.clone(), 6, 10);

    let response = app.server.post("/").text("https://example.com").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(generator.call_count(), 10);
    assert_eq!(app.repository.count().await.unwrap(), 0);

    let health = app.server.get("/health").await;
    health.assert_status_ok();
    assert_eq!(health.json::<serde_json::Value>()["status"], "healthy");
}

#[tokio::test]
async fn test_wrong_method_on_id_path_is_not_allowed() {
    let app = common::spawn_app();

    let response = app
        .server
        .post("/bad-id!!")
        .text("https://example.com")
        .await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
