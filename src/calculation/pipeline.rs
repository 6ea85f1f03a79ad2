//! The combined rule/suggestion/payout pipeline.

use rust_decimal::Decimal;
use tracing::debug;

use crate::catalog::RuleCatalog;
use crate::models::{PipelineResult, ServiceInfo, WageInfo};

use super::entitlement::suggest_annual_days;
use super::payout::compute_unused_payout;

/// Runs the full pipeline: rule lookup, entitlement suggestion, and payout.
///
/// When the caller-supplied `granted_days` is absent-or-zero (≤ 0 after
/// boundary coercion) and the rule produced a recommendation, the
/// recommendation becomes the granted day count. A supplied positive value
/// always wins, even when a recommendation exists.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::run_pipeline;
/// use leave_engine::catalog::RuleCatalog;
/// use leave_engine::models::{ServiceInfo, WageInfo};
/// use rust_decimal::Decimal;
///
/// let catalog = RuleCatalog::builtin();
/// let service = ServiceInfo {
///     full_years: 3,
///     full_months: 0,
///     attendance_rate: 90.0,
/// };
///
/// let result = run_pipeline(
///     &catalog,
///     "law_basic",
///     &service,
///     &WageInfo::default(),
///     Decimal::ZERO,
///     Decimal::ZERO,
/// );
/// assert_eq!(result.payout.granted_days, Decimal::from(16));
/// ```
pub fn run_pipeline(
    catalog: &RuleCatalog,
    rule_id: &str,
    service: &ServiceInfo,
    wage: &WageInfo,
    granted_days: Decimal,
    used_days: Decimal,
) -> PipelineResult {
    let rule = catalog.get(rule_id).clone();
    let suggestion = suggest_annual_days(&rule, service);

    let granted_days = match suggestion.suggested_days {
        Some(suggested) if granted_days <= Decimal::ZERO => {
            debug!(rule_id = %rule.id, suggested, "no granted days supplied, using suggestion");
            Decimal::from(suggested)
        }
        _ => granted_days,
    };

    let payout = compute_unused_payout(catalog, rule_id, wage, granted_days, used_days);

    PipelineResult {
        rule,
        suggestion,
        payout,
    }
}
