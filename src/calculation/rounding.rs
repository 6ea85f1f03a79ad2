//! The two-stage monetary rounding policy.
//!
//! Stage 1 is rule-defined (step and direction from the profile); stage 2 is
//! a fixed system policy that truncates every payout to the smallest usable
//! currency denomination. Stage 2 applies unconditionally, even when the
//! rule's own step is coarser.

use rust_decimal::Decimal;

use crate::models::{RoundingMode, RuleProfile};

/// Smallest usable currency denomination for a payout.
const DENOMINATION: Decimal = Decimal::TEN;

/// Applies the rule's rounding stage followed by the fixed truncation stage.
///
/// Amounts that are non-positive after either stage come back as zero.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::apply_rounding;
/// use leave_engine::catalog::RuleCatalog;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let catalog = RuleCatalog::builtin();
/// let amount = Decimal::from_str("681818.18").unwrap();
/// let rounded = apply_rounding(amount, catalog.get("law_basic"));
/// assert_eq!(rounded, Decimal::from(681810));
/// ```
pub fn apply_rounding(amount: Decimal, rule: &RuleProfile) -> Decimal {
    let step = rule.rounding_step;

    let after_rule_stage = if step <= 1 || rule.rounding_mode == RoundingMode::None {
        amount
    } else {
        let step = Decimal::from(step);
        let scaled = amount / step;
        let scaled = match rule.rounding_mode {
            RoundingMode::Floor => scaled.floor(),
            RoundingMode::Round => scaled.round(),
            RoundingMode::Ceil => scaled.ceil(),
            RoundingMode::None => scaled,
        };
        scaled * step
    };

    if after_rule_stage <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    truncate_to_denomination(after_rule_stage)
}

/// Stage 2 alone: truncates to the nearest lower multiple of the
/// denomination.
///
/// Idempotent, and its result is always a non-negative multiple of 10.
pub fn truncate_to_denomination(amount: Decimal) -> Decimal {
    if amount <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (amount.trunc() / DENOMINATION).floor() * DENOMINATION
}
