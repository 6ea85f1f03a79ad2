//! Core data models for the leave engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod payout;
mod rule;
mod service;
mod wage;

pub use attendance::{AttendanceRecord, GroupSummary};
pub use payout::{EntitlementSuggestion, PayoutResult, PipelineResult};
pub use rule::{GrantType, RoundingMode, RuleProfile};
pub use service::ServiceInfo;
pub use wage::{WageInfo, WageType};
