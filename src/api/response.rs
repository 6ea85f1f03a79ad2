//! Response types for the leave engine API.
//!
//! This module defines the response envelopes and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{GroupSummary, PipelineResult, RuleProfile};

/// Response body for the `/pipeline` endpoint.
///
/// Wraps the pipeline result with identification metadata so a stored
/// estimate can be traced back to the engine build that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineResponse {
    /// Unique id of this calculation.
    pub calculation_id: Uuid,
    /// When the calculation ran.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the result.
    pub engine_version: String,
    /// The pipeline result (`rule`, `suggestion`, `payout`).
    #[serde(flatten)]
    pub result: PipelineResult,
}

/// Response body for the `/summarize` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Number of input rows that were aggregated.
    pub record_count: usize,
    /// Per-category totals, ascending by leave-type label.
    pub groups: Vec<GroupSummary>,
}

/// Response body for the `/rules` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesResponse {
    /// All catalog profiles, ascending by id.
    pub rules: Vec<RuleProfile>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a rule-not-found error response.
    pub fn rule_not_found(id: &str) -> Self {
        Self::with_details(
            "RULE_NOT_FOUND",
            format!("Rule profile not found: {}", id),
            format!(
                "The rule id '{}' is not in the catalog; calculation endpoints would fall \
                 back to 'law_basic'",
                id
            ),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::RuleNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::rule_not_found(&id),
            },
            EngineError::UnrecognizedDuration { text } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNRECOGNIZED_DURATION",
                    format!("Unrecognized duration text: '{}'", text),
                    "The duration text matches none of the supported notations",
                ),
            },
        }
    }
}
