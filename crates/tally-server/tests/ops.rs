#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use tally_server::{app_state::AppState, config::ServerConfig, router};

async fn call(app: &Router, method: Method, uri: &str) -> (StatusCode, String) {
    let resp = app
        .clone()
        .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn healthz_ok() {
    let app = router::build_router(AppState::new(ServerConfig::default()));
    assert_eq!(call(&app, Method::GET, "/healthz").await, (StatusCode::OK, "ok".into()));
}

#[tokio::test]
async fn readyz_flips_when_draining() {
    let state = AppState::new(ServerConfig::default());
    let app = router::build_router(state.clone());

    call(&app, Method::POST, "/counters/a").await;
    let (status, body) = call(&app, Method::GET, "/readyz").await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body, json!({ "status": "ready", "counters": 1 }));

    state.set_draining();
    let (status, body) = call(&app, Method::GET, "/readyz").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["status"], "draining");
}

#[tokio::test]
async fn metrics_reflect_traffic() {
    let state = AppState::new(ServerConfig::default());
    let app = router::build_router(state.clone());

    call(&app, Method::POST, "/counters/m").await;
    call(&app, Method::POST, "/counters/m").await;
    call(&app, Method::PUT, "/counters/m").await;

    let m = state.metrics();
    assert_eq!(m.requests.get(&[("op", "create"), ("status", "201")]), 1);
    assert_eq!(m.requests.get(&[("op", "create"), ("status", "409")]), 1);
    assert_eq!(m.requests.get(&[("op", "increment"), ("status", "200")]), 1);
    assert_eq!(m.request_duration.count(&[("op", "create")]), 2);

    let (status, body) = call(&app, Method::GET, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("# TYPE tally_requests_total counter"));
    assert!(body.contains("tally_requests_total{op=\"create\",status=\"409\"} 1"));
    assert!(body.contains("# HELP tally_counters"));
    assert!(body.contains("tally_counters 1"));
    assert!(body.contains("tally_draining 0"));
}

#[tokio::test]
async fn unsupported_method_is_405() {
    let app = router::build_router(AppState::new(ServerConfig::default()));
    let (status, _) = call(&app, Method::PATCH, "/counters/x").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
