use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

mod helpers;
use helpers::{create_test_app, MockDohResolver};

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .header(header::HOST, "doh.local:8080")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

async fn get_json(uri: &str) -> Value {
    let app = create_test_app(Arc::new(MockDohResolver::new()), None);
    let (status, body) = get(app, uri).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_reports_ok() {
    let json = get_json("/health").await;
    assert_eq!(json["ok"], true);
    assert!(json["t"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_providers_are_ranked() {
    let json = get_json("/providers").await;
    let providers = json["providers"].as_array().unwrap();
    assert_eq!(providers.len(), 6);
    assert_eq!(providers[0]["name"], "Cloudflare");
    assert_eq!(providers[0]["weight"], 35);
    assert_eq!(providers[0]["score"], 125.0);
}

#[tokio::test]
async fn test_stats_shape() {
    let json = get_json("/stats").await;
    assert!(json["providers"].is_array());
    assert!(json["metrics"].as_object().unwrap().is_empty());
    assert!(json["t"].is_i64());
}

#[tokio::test]
async fn test_bench_results() {
    let json = get_json("/bench").await;
    assert_eq!(json["results"][0]["provider"], "Cloudflare");
    assert_eq!(json["results"][0]["status"], 200);
    assert_eq!(json["results"][0]["rtt"], 14);
}

#[tokio::test]
async fn test_landing_uses_host_header() {
    let app = create_test_app(Arc::new(MockDohResolver::new()), None);
    let (status, body) = get(app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"Gaming DoH: http://doh.local:8080/dns-query");
}

#[tokio::test]
async fn test_landing_prefers_public_origin() {
    let app = create_test_app(
        Arc::new(MockDohResolver::new()),
        Some("https://doh.example.net/"),
    );
    let (_, body) = get(app, "/index.html").await;
    assert_eq!(body, b"Gaming DoH: https://doh.example.net/dns-query");
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let app = create_test_app(Arc::new(MockDohResolver::new()), None);
    let (status, body) = get(app, "/admin").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, b"Not Found");
}
