mod common;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use common::{engine, no_metrics, StubFetcher, STRONG_PAGE};
use leakaudit::api::router;
use leakaudit::kv::{RateLimiter, ResultCache};
use leakaudit::AppState;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app(cache_ttl_secs: u64, per_minute: u32) -> axum::Router {
    let state = Arc::new(AppState {
        engine: engine(
            StubFetcher::new(&[("https://rapid.test/", STRONG_PAGE)]),
            no_metrics(),
        ),
        cache: ResultCache::new(cache_ttl_secs),
        limiter: RateLimiter::new(per_minute),
    });
    router(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-forwarded-for", "198.51.100.7")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let response = app(0, 0)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn post_audit_returns_camel_case_result() {
    let response = app(0, 0)
        .oneshot(post_json(
            "/audit",
            json!({ "url": "rapid.test", "industry": "plumbing", "businessName": "Rapid" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["url"], "https://rapid.test/");
    assert_eq!(body["scoringMode"], "heuristic");
    assert_eq!(body["businessSnapshot"]["businessName"], "Rapid");
    assert_eq!(body["businessSnapshot"]["localIntent"], true);
    assert!(body["scores"]["overall"].as_u64().unwrap() <= 100);
    assert!(body["topFindings"].as_array().unwrap().len() <= 10);
    assert!(body.get("competitors").is_none());
}

#[tokio::test]
async fn get_audit_accepts_query_params() {
    let response = app(0, 0)
        .oneshot(
            Request::builder()
                .uri("/audit?url=rapid.test&goal=more%20bookings")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["businessSnapshot"]["salesGoal"], true);
}

#[tokio::test]
async fn rate_limit_returns_429() {
    let app = app(0, 1);
    let first = app
        .clone()
        .oneshot(post_json("/audit", json!({ "url": "rapid.test" })))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .oneshot(post_json("/audit", json!({ "url": "rapid.test" })))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(body_json(second).await["error"].is_string());
}

#[tokio::test]
async fn cached_results_bypass_the_limiter() {
    let app = app(900, 1);
    let first = body_json(
        app.clone()
            .oneshot(post_json("/audit", json!({ "url": "rapid.test" })))
            .await
            .unwrap(),
    )
    .await;
    let second = app
        .oneshot(post_json("/audit", json!({ "url": "https://rapid.test/" })))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(body_json(second).await["id"], first["id"]);
}

#[tokio::test]
async fn cached_results_keep_each_business_name() {
    let app = app(900, 0);
    let rapid = body_json(
        app.clone()
            .oneshot(post_json(
                "/audit",
                json!({ "url": "rapid.test", "businessName": "Rapid Co" }),
            ))
            .await
            .unwrap(),
    )
    .await;
    let other = body_json(
        app.oneshot(post_json(
            "/audit",
            json!({ "url": "rapid.test", "businessName": "Other Ltd" }),
        ))
        .await
        .unwrap(),
    )
    .await;

    assert_eq!(rapid["businessSnapshot"]["businessName"], "Rapid Co");
    assert_eq!(other["businessSnapshot"]["businessName"], "Other Ltd");
    assert_ne!(rapid["id"], other["id"]);
}

#[tokio::test]
async fn growth_projection_and_validation() {
    let scores = json!({
        "speed": 50, "seo": 50, "conversion": 50, "trust": 50, "visibility": 50, "overall": 50
    });
    let ok = app(0, 0)
        .oneshot(post_json(
            "/growth",
            json!({
                "monthlyVisitors": 1000.0,
                "conversionRate": 2.0,
                "averageOrderValue": 100.0,
                "scores": scores
            }),
        ))
        .await
        .unwrap();
    assert_eq!(ok.status(), StatusCode::OK);
    let body = body_json(ok).await;
    assert_eq!(body["baselineMonthlyRevenue"], 2000.0);
    assert_eq!(body["contributions"].as_array().unwrap().len(), 5);

    let bad = app(0, 0)
        .oneshot(post_json(
            "/growth",
            json!({
                "monthlyVisitors": -10.0,
                "conversionRate": 2.0,
                "averageOrderValue": 100.0,
                "scores": scores
            }),
        ))
        .await
        .unwrap();
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
}
