//! Entitlement suggestion and payout result models.
//!
//! These are the serializable outputs of the engine; the pipeline combines
//! them with the resolved rule profile into a single [`PipelineResult`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{RoundingMode, RuleProfile};

/// A recommended annual-leave day count, or `None` when the rule delegates
/// entitlement to an external source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementSuggestion {
    /// The recommended day count, if the rule has a recommendation algorithm.
    pub suggested_days: Option<u32>,
    /// Human-readable explanation embedding the inputs and the result.
    pub description: String,
}

/// The result of an unused-leave payout calculation.
///
/// # Example
///
/// ```
/// use leave_engine::models::{PayoutResult, RoundingMode};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let payout = PayoutResult {
///     granted_days: Decimal::from(15),
///     used_days: Decimal::from(10),
///     unused_days: Decimal::from(5),
///     daily_wage_raw: Decimal::from_str("136363.63").unwrap(),
///     payout_raw: Decimal::from_str("681818.15").unwrap(),
///     payout_rounded: Decimal::from(681810),
///     rounding_step: 10,
///     rounding_mode: RoundingMode::Floor,
/// };
/// assert_eq!(payout.unused_days, Decimal::from(5));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutResult {
    /// Granted leave days used in the calculation.
    pub granted_days: Decimal,
    /// Leave days already taken.
    pub used_days: Decimal,
    /// Unused days, clamped at zero.
    pub unused_days: Decimal,
    /// Daily wage before any rounding.
    pub daily_wage_raw: Decimal,
    /// Daily wage times unused days, before any rounding.
    pub payout_raw: Decimal,
    /// Payout after the rule rounding stage and the fixed truncation stage.
    pub payout_rounded: Decimal,
    /// The rounding step of the applied rule, echoed for display.
    pub rounding_step: u32,
    /// The rounding mode of the applied rule, echoed for display.
    pub rounding_mode: RoundingMode,
}

/// The combined output of one pipeline invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineResult {
    /// The resolved rule profile (after any fallback).
    pub rule: RuleProfile,
    /// The entitlement recommendation for the supplied service summary.
    pub suggestion: EntitlementSuggestion,
    /// The unused-leave payout.
    pub payout: PayoutResult,
}
