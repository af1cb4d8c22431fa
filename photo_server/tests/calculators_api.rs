//! Integration tests for the form-encoded calculator endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, build_test_app, post_form, send};

// ---------------------------------------------------------------------------
// Depth of field
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dof_calculates_in_requested_units() {
    let response = post_form(
        build_test_app(),
        "/api/v1/dof",
        &[
            ("action", "calculate"),
            ("focal_length", "50"),
            ("aperture", "8"),
            ("distance", "2"),
            ("coc", "0.029"),
            ("unit_system", "imperial"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["unit"], "imperial");
    assert_eq!(json["data"]["unit_label"], "ft");
    let near_ft = json["data"]["near_distance"].as_f64().unwrap();
    assert!((near_ft / 3.28084 - 1.6947).abs() < 0.001);
}

#[tokio::test]
async fn dof_infinite_far_limit_is_a_string() {
    let response = post_form(
        build_test_app(),
        "/api/v1/dof",
        &[
            ("action", "calculate"),
            ("focal_length", "50"),
            ("aperture", "16"),
            ("distance", "10"),
            ("coc", "0.029"),
        ],
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["data"]["far_distance"], "infinity");
    assert_eq!(json["data"]["dof_behind"], "infinity");
    assert_eq!(json["data"]["formatted"]["far_distance"], "∞");
}

#[tokio::test]
async fn dof_validation_errors_use_status_200() {
    let response = post_form(
        build_test_app(),
        "/api/v1/dof",
        &[
            ("action", "calculate"),
            ("focal_length", "0"),
            ("aperture", "8"),
            ("distance", "2"),
            ("coc", "0.029"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({"error": "Focal length must be a positive number"}));
}

#[tokio::test]
async fn unknown_action_returns_400() {
    let response = post_form(build_test_app(), "/api/v1/dof", &[("action", "explode")]).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await, serde_json::json!({"error": "Unknown action"}));
}

#[tokio::test]
async fn missing_action_returns_405() {
    let response = post_form(build_test_app(), "/api/v1/dof", &[("focal_length", "50")]).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_json(response).await, serde_json::json!({"error": "Method not allowed"}));
}

#[tokio::test]
async fn non_post_methods_return_405() {
    for uri in ["/api/v1/dof", "/api/v1/print-size", "/api/v1/equipment-investment"] {
        let response = send(build_test_app(), Method::GET, uri).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{uri}");
        assert_eq!(body_json(response).await["error"], "Method not allowed");
    }

    let response = send(build_test_app(), Method::DELETE, "/api/v1/catalog").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn post_without_form_body_returns_405() {
    let response = send(build_test_app(), Method::POST, "/api/v1/print-size").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// ---------------------------------------------------------------------------
// Print size
// ---------------------------------------------------------------------------

#[tokio::test]
async fn print_max_returns_every_tier() {
    let response = post_form(
        build_test_app(),
        "/api/v1/print-size",
        &[
            ("action", "calculate_max_print"),
            ("width_pixels", "6000"),
            ("height_pixels", "4000"),
            ("print_medium", "photo_paper"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let tiers = json["data"].as_array().unwrap();
    assert_eq!(tiers.len(), 4);
    let standard = &tiers[1];
    assert_eq!(standard["tier_info"]["key"], "standard");
    assert_eq!(standard["max_size"]["max_width_in"], 25.0);
    let height = standard["max_size"]["max_height_in"].as_f64().unwrap();
    assert!((height - 16.67).abs() < 0.01);
}

#[tokio::test]
async fn print_required_resolution_with_cameras() {
    let response = post_form(
        build_test_app(),
        "/api/v1/print-size",
        &[
            ("action", "calculate_required_resolution"),
            ("print_width", "16"),
            ("print_height", "20"),
            ("quality_tier", "standard"),
            ("print_medium", "photo_paper"),
        ],
    )
    .await;

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["required_resolution"]["required_width_px"], 3840);
    assert_eq!(data["required_resolution"]["required_height_px"], 4800);
    assert_eq!(data["required_resolution"]["required_megapixels"], 18.4);
    assert_eq!(data["camera_recommendations"][0]["megapixels"], 20.0);
    assert_eq!(data["camera_recommendations"][0]["excess_resolution"], 1.6);
}

#[tokio::test]
async fn print_assess_reports_viewing_distance() {
    let response = post_form(
        build_test_app(),
        "/api/v1/print-size",
        &[
            ("action", "assess_print_quality"),
            ("image_width", "4000"),
            ("image_height", "3000"),
            ("print_width", "24"),
            ("print_height", "18"),
            ("quality_tier", "standard"),
            ("print_medium", "canvas"),
        ],
    )
    .await;

    let json = body_json(response).await;
    let q = &json["data"]["quality_assessment"];
    // 4000/24 = 166.7 PPI against 240 × 0.7 = 168 PPI
    assert_eq!(q["actual_ppi"], 166.7);
    assert_eq!(q["target_ppi"], 168.0);
    assert_eq!(q["quality_level"], "good");
    assert_eq!(q["upsampling_needed"], true);
    // Diagonal 30" × 1.5 = 45" beats (300 / 166.7) × 24 = 43.2"
    assert_eq!(json["data"]["viewing_distance"]["recommended_distance_in"], 45.0);
}

#[tokio::test]
async fn print_out_of_range_pixels() {
    let response = post_form(
        build_test_app(),
        "/api/v1/print-size",
        &[
            ("action", "calculate_max_print"),
            ("width_pixels", "60000"),
            ("height_pixels", "4000"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["error"],
        "Image width must be between 100 and 50,000 pixels"
    );
}

// ---------------------------------------------------------------------------
// Equipment investment
// ---------------------------------------------------------------------------

#[tokio::test]
async fn investment_recommends_buy() {
    let response = post_form(
        build_test_app(),
        "/api/v1/equipment-investment",
        &[
            ("action", "calculate"),
            ("purchase_price", "3000"),
            ("daily_rental_rate", "75"),
            ("usage_per_month", "2"),
            ("insurance_annual", "0"),
            ("currency", "EUR"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["annual_ownership_cost"], 720.0);
    assert_eq!(data["annual_rental_cost"], 1800.0);
    assert_eq!(data["annual_savings"], 1080.0);
    assert_eq!(data["break_even_uses"], 48);
    assert_eq!(data["break_even_months"], 24);
    assert_eq!(data["recommendation"], "BUY");
    assert_eq!(data["currency"], "EUR");
    assert_eq!(data["formatted"]["annual_savings"], "€1,080.00");
}

#[tokio::test]
async fn investment_invalid_values_use_status_200() {
    let response = post_form(
        build_test_app(),
        "/api/v1/equipment-investment",
        &[
            ("action", "calculate"),
            ("purchase_price", "0"),
            ("daily_rental_rate", "75"),
            ("usage_per_month", "2"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["error"],
        "Purchase price must be greater than zero"
    );
}

#[tokio::test]
async fn investment_unknown_currency() {
    let response = post_form(
        build_test_app(),
        "/api/v1/equipment-investment",
        &[
            ("action", "calculate"),
            ("purchase_price", "3000"),
            ("daily_rental_rate", "75"),
            ("usage_per_month", "2"),
            ("currency", "XYZ"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["error"], "Unknown currency: XYZ");
}

#[tokio::test]
async fn investment_huge_usage_is_computed() {
    let response = post_form(
        build_test_app(),
        "/api/v1/equipment-investment",
        &[
            ("action", "calculate"),
            ("purchase_price", "3000"),
            ("daily_rental_rate", "75"),
            ("usage_per_month", "400000000"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["annual_uses"], 4_800_000_000u64);
    assert_eq!(json["data"]["break_even_months"], 1);
    assert_eq!(json["data"]["recommendation"], "BUY");
}

#[tokio::test]
async fn print_preset_keys_ignore_case() {
    let response = post_form(
        build_test_app(),
        "/api/v1/print-size",
        &[
            ("action", "calculate_required_resolution"),
            ("print_width", "8"),
            ("print_height", "10"),
            ("quality_tier", "Gallery"),
            ("print_medium", "PHOTO_PAPER"),
        ],
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["data"]["required_resolution"]["quality_tier"], "gallery");
    assert_eq!(json["data"]["required_resolution"]["required_width_px"], 2400);
}
