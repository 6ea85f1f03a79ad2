//! Unused-leave payout calculation.

use rust_decimal::Decimal;

use crate::catalog::RuleCatalog;
use crate::models::{PayoutResult, WageInfo};

use super::daily_wage::compute_daily_wage;
use super::rounding::apply_rounding;

/// Computes the unused-leave payout under the given rule.
///
/// Unknown rule ids resolve through the catalog fallback; granted and used
/// day counts arrive already coerced (missing or junk values become zero at
/// the boundary) and an over-consumed balance clamps to zero unused days.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::compute_unused_payout;
/// use leave_engine::catalog::RuleCatalog;
/// use leave_engine::models::{WageInfo, WageType};
/// use rust_decimal::Decimal;
///
/// let catalog = RuleCatalog::builtin();
/// let wage = WageInfo {
///     wage_type: WageType::Daily,
///     wage_amount: Decimal::from(100000),
///     hours_per_day: Decimal::ZERO,
///     monthly_work_days: Decimal::ZERO,
/// };
///
/// let payout = compute_unused_payout(
///     &catalog,
///     "law_basic",
///     &wage,
///     Decimal::from(15),
///     Decimal::from(10),
/// );
/// assert_eq!(payout.unused_days, Decimal::from(5));
/// assert_eq!(payout.payout_rounded, Decimal::from(500000));
/// ```
pub fn compute_unused_payout(
    catalog: &RuleCatalog,
    rule_id: &str,
    wage: &WageInfo,
    granted_days: Decimal,
    used_days: Decimal,
) -> PayoutResult {
    let rule = catalog.get(rule_id);

    let unused_days = (granted_days - used_days).max(Decimal::ZERO);
    let daily_wage_raw = compute_daily_wage(wage);
    let payout_raw = daily_wage_raw * unused_days;
    let payout_rounded = apply_rounding(payout_raw, rule);

    PayoutResult {
        granted_days,
        used_days,
        unused_days,
        daily_wage_raw,
        payout_raw,
        payout_rounded,
        rounding_step: rule.rounding_step,
        rounding_mode: rule.rounding_mode,
    }
}
