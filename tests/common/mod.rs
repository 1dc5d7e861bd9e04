// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use std::path::Path;
use std::sync::Arc;
use togedoo::config::Config;
use togedoo::routes::create_router;
use togedoo::AppState;
use tower::ServiceExt;

/// Path of the Ungfritid search endpoint on a mock server.
pub const FIND_ACTIVITIES_PATH: &str = "/api/findactivities";

/// Create a test app whose Ungfritid client points at `upstream_uri`
/// (e.g. a wiremock server) and whose catalog is the committed sample.
#[allow(dead_code)]
pub fn create_test_app(upstream_uri: &str) -> Router {
    create_test_app_with_catalog(upstream_uri, "data/activities.json")
}

/// Create a test app with an explicit catalog file.
#[allow(dead_code)]
pub fn create_test_app_with_catalog(upstream_uri: &str, catalog: impl AsRef<Path>) -> Router {
    let config = Config {
        ungfritid_base_url: format!("{upstream_uri}{FIND_ACTIVITIES_PATH}"),
        city_data_path: catalog.as_ref().to_path_buf(),
        ..Config::default()
    };
    create_router(Arc::new(AppState::new(config)))
}

/// Load the recorded Ungfritid payload for Oslo.
#[allow(dead_code)]
pub fn oslo_fixture() -> serde_json::Value {
    let raw = std::fs::read_to_string("tests/fixtures/ungfritid_oslo.json")
        .expect("Failed to read Ungfritid fixture");
    serde_json::from_str(&raw).expect("Fixture should be valid JSON")
}

/// Send a GET and return the response.
#[allow(dead_code)]
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST with a raw JSON body and return the response.
#[allow(dead_code)]
pub async fn post_json(app: Router, uri: &str, body: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn json_body(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
