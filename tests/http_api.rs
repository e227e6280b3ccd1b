mod common;

use axum::http::StatusCode;
use common::{StubResponses, spawn_backend, unreachable_base_url};
use serde_json::json;
use url_shortener_ui::domain::entities::ShortenRequest;
use url_shortener_ui::domain::ports::{AnalyticsApi, LinkApi};
use url_shortener_ui::error::AppError;
use url_shortener_ui::infrastructure::http::HttpShortenerApi;

#[tokio::test]
async fn test_shorten_success() {
    let backend = spawn_backend(StubResponses::default()).await;

    let request = ShortenRequest::parse("https://example.com/a/very/long/path").unwrap();
    let result = backend.api().shorten(&request).await.unwrap();

    assert_eq!(result.short_url, "https://s.ly/abc123");
    assert_eq!(
        backend.received(),
        vec![json!({ "originalUrl": "https://example.com/a/very/long/path" })]
    );
}

#[tokio::test]
async fn test_shorten_missing_short_url_is_malformed() {
    let backend = spawn_backend(StubResponses {
        shorten: (StatusCode::OK, json!({ "code": "abc123" })),
        ..Default::default()
    })
    .await;

    let request = ShortenRequest::parse("https://example.com").unwrap();
    let err = backend.api().shorten(&request).await.unwrap_err();

    assert!(matches!(err, AppError::MalformedResponse { .. }));
    assert_eq!(
        err.user_message().as_deref(),
        Some("Failed to shorten URL. Please try again.")
    );
}

#[tokio::test]
async fn test_shorten_empty_short_url_is_malformed() {
    let backend = spawn_backend(StubResponses {
        shorten: (StatusCode::OK, json!({ "shortUrl": "" })),
        ..Default::default()
    })
    .await;

    let request = ShortenRequest::parse("https://example.com").unwrap();
    let err = backend.api().shorten(&request).await.unwrap_err();

    assert!(matches!(err, AppError::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_shorten_server_error() {
    let backend = spawn_backend(StubResponses {
        shorten: (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": "boom" }),
        ),
        ..Default::default()
    })
    .await;

    let request = ShortenRequest::parse("https://example.com").unwrap();
    let err = backend.api().shorten(&request).await.unwrap_err();

    match err {
        AppError::Network { status, .. } => assert_eq!(status, Some(500)),
        other => panic!("expected network error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_shorten_unreachable_backend() {
    let api = HttpShortenerApi::new(&unreachable_base_url().await, None).unwrap();

    let request = ShortenRequest::parse("https://example.com").unwrap();
    let err = api.shorten(&request).await.unwrap_err();

    assert_eq!(err.code(), "network_error");
}

#[tokio::test]
async fn test_summary_preserves_backend_order() {
    let backend = spawn_backend(StubResponses {
        summary: (
            StatusCode::OK,
            json!({ "iOS": 10, "Desktop": 60, "Smart TV": 30 }),
        ),
        ..Default::default()
    })
    .await;

    let shares = backend.api().fetch_summary().await.unwrap().into_shares();

    let names: Vec<_> = shares.iter().map(|s| s.name.as_str()).collect();
    let colors: Vec<_> = shares.iter().map(|s| s.color.as_str()).collect();
    assert_eq!(names, ["iOS", "Desktop", "Smart TV"]);
    assert_eq!(colors, ["#F59E0B", "#3B82F6", "#999"]);
}

#[tokio::test]
async fn test_summary_non_object_is_malformed() {
    let backend = spawn_backend(StubResponses {
        summary: (StatusCode::OK, json!([45, 35, 20])),
        ..Default::default()
    })
    .await;

    let err = backend.api().fetch_summary().await.unwrap_err();
    assert!(matches!(err, AppError::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_summary_server_error() {
    let backend = spawn_backend(StubResponses {
        summary: (StatusCode::SERVICE_UNAVAILABLE, json!({})),
        ..Default::default()
    })
    .await;

    let err = backend.api().fetch_summary().await.unwrap_err();
    assert_eq!(err.code(), "network_error");
}
