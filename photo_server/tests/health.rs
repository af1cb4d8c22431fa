//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get};

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let response = get(build_test_app(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let response = get(build_test_app(), "/this-route-does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn catalog_lists_presets() {
    let response = get(build_test_app(), "/api/v1/catalog").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["quality_tiers"].as_array().unwrap().len(), 4);
    assert_eq!(json["print_media"].as_array().unwrap().len(), 5);
    assert_eq!(json["sensor_formats"][0]["coc_mm"], 0.029);
    assert_eq!(json["unit_systems"][1]["key"], "imperial");
}
