//! Daily ordinary-wage derivation per wage type.

use rust_decimal::Decimal;

use crate::models::{WageInfo, WageType};

/// Derives the daily ordinary wage from wage-type-specific inputs.
///
/// Missing or non-positive required inputs yield a zero wage instead of an
/// error: a zero result flows through the payout as an obviously-empty
/// estimate rather than blocking the caller.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::compute_daily_wage;
/// use leave_engine::models::{WageInfo, WageType};
/// use rust_decimal::Decimal;
///
/// let wage = WageInfo {
///     wage_type: WageType::Daily,
///     wage_amount: Decimal::from(120000),
///     hours_per_day: Decimal::ZERO,
///     monthly_work_days: Decimal::ZERO,
/// };
/// assert_eq!(compute_daily_wage(&wage), Decimal::from(120000));
/// ```
pub fn compute_daily_wage(wage: &WageInfo) -> Decimal {
    if wage.wage_amount <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    match wage.wage_type {
        WageType::Hourly => {
            if wage.hours_per_day <= Decimal::ZERO {
                Decimal::ZERO
            } else {
                wage.wage_amount * wage.hours_per_day
            }
        }
        WageType::Daily => wage.wage_amount,
        WageType::Monthly => {
            if wage.monthly_work_days <= Decimal::ZERO {
                Decimal::ZERO
            } else {
                wage.wage_amount / wage.monthly_work_days
            }
        }
    }
}
