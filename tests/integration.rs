//! Comprehensive integration tests for the leave engine API.
//!
//! This test suite covers:
//! - Rule catalog listing and direct lookup (including the 404 path)
//! - Attendance summarization (grouping, ordering, tolerant parsing)
//! - The combined pipeline (suggestion substitution, payout rounding)
//! - Boundary coercion of messy form inputs
//! - Malformed request handling
//!
//! Every malformed-input scenario asserts the documented fallback value,
//! never an error: the engine is a best-effort estimator over messy
//! real-world exports.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use leave_engine::api::{AppState, create_router};
use leave_engine::catalog::RuleCatalog;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    create_router(AppState::new(RuleCatalog::builtin()))
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn get_path(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn pipeline_request(rule_id: &str, granted_days: Value, used_days: Value) -> Value {
    json!({
        "rule_id": rule_id,
        "service": {
            "full_years": 3,
            "full_months": 0,
            "attendance_rate": 90.0
        },
        "wage": {
            "wage_type": "monthly",
            "wage_amount": 3000000,
            "monthly_work_days": 22
        },
        "granted_days": granted_days,
        "used_days": used_days
    })
}

fn assert_decimal_field(value: &Value, expected: &str) {
    let actual = value.as_str().unwrap();
    let actual: f64 = actual.parse().unwrap();
    let expected: f64 = expected.parse().unwrap();
    assert!(
        (actual - expected).abs() < 0.01,
        "Expected {}, got {}",
        expected,
        actual
    );
}

// =============================================================================
// Rule catalog
// =============================================================================

/// IT-001: listing returns the five builtin profiles in id order
#[tokio::test]
async fn test_list_rules() {
    let (status, body) = get_path(create_router_for_test(), "/rules").await;

    assert_eq!(status, StatusCode::OK);
    let rules = body["rules"].as_array().unwrap();
    assert_eq!(rules.len(), 5);
    let ids: Vec<&str> = rules.iter().map(|r| r["id"].as_str().unwrap()).collect();
    assert_eq!(
        ids,
        vec![
            "custom",
            "gw_institute_cba",
            "gw_school_cba",
            "gw_wage_guideline",
            "law_basic",
        ]
    );
}

/// IT-002: direct lookup returns the profile
#[tokio::test]
async fn test_get_rule() {
    let (status, body) = get_path(create_router_for_test(), "/rules/gw_school_cba").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "gw_school_cba");
    assert_eq!(body["grant_type"], "gw_cba_like");
    assert_eq!(body["rounding_step"], 10);
    assert_eq!(body["rounding_mode"], "floor");
}

/// IT-003: direct lookup of an unknown id is a 404
#[tokio::test]
async fn test_get_unknown_rule_is_404() {
    let (status, body) = get_path(create_router_for_test(), "/rules/gw_2099_cba").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "RULE_NOT_FOUND");
    assert!(body["message"].as_str().unwrap().contains("gw_2099_cba"));
}

// =============================================================================
// Summarize
// =============================================================================

/// IT-010: groups are ordered and totalled
#[tokio::test]
async fn test_summarize_groups_and_orders() {
    let body = json!({
        "records": [
            {"leave_type": "sick", "duration_raw": "1일"},
            {"leave_type": "annual", "duration_raw": "6:30"},
            {"leave_type": "annual", "duration_raw": "1시간"},
            {"leave_type": "family care", "duration_raw": "30분"}
        ]
    });

    let (status, response) = post_json(create_router_for_test(), "/summarize", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["record_count"], 4);

    let groups = response["groups"].as_array().unwrap();
    let labels: Vec<&str> = groups
        .iter()
        .map(|g| g["leave_type"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["annual", "family care", "sick"]);

    assert_eq!(groups[0]["count"], 2);
    assert_eq!(groups[0]["total_minutes"], 450);
    assert_eq!(groups[0]["sum_days_hours_minutes"], "0 days 7 hours 30 minutes");
    assert_eq!(groups[0]["sum_hours_decimal"], 7.5);
    assert_eq!(groups[0]["converted_days_hours"], "0 days 7.5 hours");

    assert_eq!(groups[2]["total_minutes"], 480);
    assert_eq!(groups[2]["sum_days_hours_minutes"], "1 days 0 hours 0 minutes");
}

/// IT-011: unparsable rows count zero minutes instead of failing
#[tokio::test]
async fn test_summarize_tolerates_bad_rows() {
    let body = json!({
        "records": [
            {"leave_type": "annual", "duration_raw": "6:30"},
            {"leave_type": "annual", "duration_raw": "approx half"},
            {"leave_type": "annual", "duration_raw": ""}
        ]
    });

    let (status, response) = post_json(create_router_for_test(), "/summarize", body).await;

    assert_eq!(status, StatusCode::OK);
    let groups = response["groups"].as_array().unwrap();
    assert_eq!(groups[0]["count"], 3);
    assert_eq!(groups[0]["total_minutes"], 390);
}

/// IT-012: an empty record list is a valid request
#[tokio::test]
async fn test_summarize_empty() {
    let (status, response) =
        post_json(create_router_for_test(), "/summarize", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["record_count"], 0);
    assert!(response["groups"].as_array().unwrap().is_empty());
}

// =============================================================================
// Pipeline
// =============================================================================

/// IT-020: reference scenario through the full pipeline
#[tokio::test]
async fn test_pipeline_reference_scenario() {
    let body = pipeline_request("law_basic", json!(15), json!(10));
    let (status, response) = post_json(create_router_for_test(), "/pipeline", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["rule"]["id"], "law_basic");
    assert_eq!(response["suggestion"]["suggested_days"], 16);

    let payout = &response["payout"];
    assert_decimal_field(&payout["granted_days"], "15");
    assert_decimal_field(&payout["unused_days"], "5");
    assert_decimal_field(&payout["daily_wage_raw"], "136363.64");
    assert_decimal_field(&payout["payout_raw"], "681818.18");
    assert_eq!(payout["payout_rounded"], "681810");
    assert_eq!(payout["rounding_step"], 10);
    assert_eq!(payout["rounding_mode"], "floor");

    // Envelope metadata identifies the calculation.
    assert!(response["calculation_id"].is_string());
    assert!(response["timestamp"].is_string());
    assert_eq!(response["engine_version"], env!("CARGO_PKG_VERSION"));
}

/// IT-021: zero granted days adopt the suggestion
#[tokio::test]
async fn test_pipeline_adopts_suggestion() {
    let body = pipeline_request("law_basic", json!(0), json!(10));
    let (status, response) = post_json(create_router_for_test(), "/pipeline", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["suggestion"]["suggested_days"], 16);
    assert_decimal_field(&response["payout"]["granted_days"], "16");
    assert_decimal_field(&response["payout"]["unused_days"], "6");
}

/// IT-022: a supplied positive value beats the suggestion
#[tokio::test]
async fn test_pipeline_supplied_days_win() {
    let body = pipeline_request("law_basic", json!(20), json!(0));
    let (_, response) = post_json(create_router_for_test(), "/pipeline", body).await;

    assert_eq!(response["suggestion"]["suggested_days"], 16);
    assert_decimal_field(&response["payout"]["granted_days"], "20");
}

/// IT-023: unknown rule id falls back to law_basic, not an error
#[tokio::test]
async fn test_pipeline_unknown_rule_falls_back() {
    let body = pipeline_request("gw_2099_cba", json!(15), json!(10));
    let (status, response) = post_json(create_router_for_test(), "/pipeline", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["rule"]["id"], "law_basic");
    assert_eq!(response["payout"]["payout_rounded"], "681810");
}

/// IT-024: manual rules return a null suggestion and keep zero granted days
#[tokio::test]
async fn test_pipeline_manual_rule() {
    let body = pipeline_request("gw_wage_guideline", json!(0), json!(0));
    let (status, response) = post_json(create_router_for_test(), "/pipeline", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["rule"]["grant_type"], "manual_days");
    assert!(response["suggestion"]["suggested_days"].is_null());
    assert_decimal_field(&response["payout"]["granted_days"], "0");
    assert_eq!(response["payout"]["payout_rounded"], "0");
}

/// IT-025: CBA rule recommends the fixed day count
#[tokio::test]
async fn test_pipeline_cba_rule() {
    let body = json!({
        "rule_id": "gw_school_cba",
        "service": {"full_years": 2, "full_months": 0, "attendance_rate": 85.0},
        "wage": {"wage_type": "daily", "wage_amount": 100000},
        "granted_days": 0,
        "used_days": 6
    });
    let (_, response) = post_json(create_router_for_test(), "/pipeline", body).await;

    assert_eq!(response["suggestion"]["suggested_days"], 26);
    assert_decimal_field(&response["payout"]["unused_days"], "20");
    assert_eq!(response["payout"]["payout_rounded"], "2000000");
}

// =============================================================================
// Boundary coercion
// =============================================================================

/// IT-030: form-style string numbers are accepted
#[tokio::test]
async fn test_pipeline_string_numbers() {
    let body = json!({
        "rule_id": "law_basic",
        "service": {"full_years": "3", "full_months": "0", "attendance_rate": "90"},
        "wage": {"wage_type": "monthly", "wage_amount": "3000000", "monthly_work_days": "22"},
        "granted_days": "15",
        "used_days": "10"
    });
    let (status, response) = post_json(create_router_for_test(), "/pipeline", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["payout"]["payout_rounded"], "681810");
}

/// IT-031: junk numeric fields coerce to zero and still produce a 200
#[tokio::test]
async fn test_pipeline_junk_numbers_coerce() {
    let body = json!({
        "rule_id": "law_basic",
        "service": {"full_years": "three", "full_months": null, "attendance_rate": "??"},
        "wage": {"wage_type": "stock options", "wage_amount": "lots"},
        "granted_days": "many",
        "used_days": null
    });
    let (status, response) = post_json(create_router_for_test(), "/pipeline", body).await;

    assert_eq!(status, StatusCode::OK);
    // Zero years, zero months: the statutory first-year branch suggests 0.
    assert_eq!(response["suggestion"]["suggested_days"], 0);
    assert_decimal_field(&response["payout"]["daily_wage_raw"], "0");
    assert_eq!(response["payout"]["payout_rounded"], "0");
}

/// IT-032: an empty body object still computes
#[tokio::test]
async fn test_pipeline_empty_object() {
    let (status, response) =
        post_json(create_router_for_test(), "/pipeline", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["rule"]["id"], "law_basic");
    assert_eq!(response["payout"]["payout_rounded"], "0");
}

// =============================================================================
// Malformed requests
// =============================================================================

/// IT-040: syntactically invalid JSON is a 400
#[tokio::test]
async fn test_pipeline_invalid_json() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/pipeline")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(json["code"], "MALFORMED_JSON");
}

/// IT-041: missing content type is reported
#[tokio::test]
async fn test_pipeline_missing_content_type() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/pipeline")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(json["code"], "MISSING_CONTENT_TYPE");
}
