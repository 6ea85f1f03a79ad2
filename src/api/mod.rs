//! HTTP API module for the leave engine.
//!
//! This module provides the REST endpoints a rendering layer calls with
//! plain key-value inputs: rule-catalog inspection, attendance
//! summarization, and the combined entitlement/payout pipeline.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PipelineRequest, SummarizeRequest};
pub use response::{ApiError, PipelineResponse, RulesResponse, SummaryResponse};
pub use state::AppState;
