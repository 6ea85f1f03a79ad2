//! HTTP request handlers for the leave engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{run_pipeline, summarize_records};
use crate::models::{AttendanceRecord, ServiceInfo, WageInfo};

use super::request::{PipelineRequest, SummarizeRequest};
use super::response::{
    ApiError, ApiErrorResponse, PipelineResponse, RulesResponse, SummaryResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/rules", get(list_rules_handler))
        .route("/rules/:rule_id", get(get_rule_handler))
        .route("/summarize", post(summarize_handler))
        .route("/pipeline", post(pipeline_handler))
        .with_state(state)
}

/// Handler for GET /rules.
///
/// Lists every profile in the catalog.
async fn list_rules_handler(State(state): State<AppState>) -> Response {
    let rules = RulesResponse {
        rules: state.catalog().profiles().cloned().collect(),
    };
    (StatusCode::OK, Json(rules)).into_response()
}

/// Handler for GET /rules/:rule_id.
///
/// Strict lookup: unknown ids report 404 here so a caller can distinguish
/// "no such profile" from the silent fallback the calculation endpoints use.
async fn get_rule_handler(State(state): State<AppState>, Path(rule_id): Path<String>) -> Response {
    match state.catalog().find(&rule_id) {
        Ok(profile) => (StatusCode::OK, Json(profile.clone())).into_response(),
        Err(err) => {
            warn!(rule_id = %rule_id, "Rule profile not found");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for POST /summarize.
///
/// Aggregates attendance rows by leave category. Individual rows never fail:
/// unparsable duration text counts as zero minutes.
async fn summarize_handler(
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summarize request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let records: Vec<AttendanceRecord> = request.records.into_iter().map(Into::into).collect();

    let start_time = Instant::now();
    let groups = summarize_records(&records);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        record_count = records.len(),
        group_count = groups.len(),
        duration_us = duration.as_micros(),
        "Summarize completed"
    );

    let response = SummaryResponse {
        record_count: records.len(),
        groups,
    };
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for POST /pipeline.
///
/// Runs the combined rule/suggestion/payout pipeline. Unknown rule ids fall
/// back to the statutory-basic profile; malformed numeric fields were already
/// coerced to defaults during deserialization, so a syntactically valid
/// request always produces a 200 with a (possibly zero) estimate.
async fn pipeline_handler(
    State(state): State<AppState>,
    payload: Result<Json<PipelineRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing pipeline request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let service: ServiceInfo = request.service.into();
    let wage: WageInfo = request.wage.into();

    let start_time = Instant::now();
    let result = run_pipeline(
        state.catalog(),
        &request.rule_id,
        &service,
        &wage,
        request.granted_days,
        request.used_days,
    );
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        rule_id = %result.rule.id,
        suggested_days = ?result.suggestion.suggested_days,
        payout_rounded = %result.payout.payout_rounded,
        duration_us = duration.as_micros(),
        "Pipeline completed"
    );

    let response = PipelineResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        result,
    };
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Maps a JSON extraction rejection to the error response body.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
