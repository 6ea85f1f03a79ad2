//! Entitlement recommendation per rule profile.
//!
//! Each grant type selects one recommendation algorithm. The day counts are
//! deliberately simplified examples of the underlying statute/agreement; the
//! description strings restate the inputs so a reviewer can check the number
//! against the rule text.

use crate::models::{EntitlementSuggestion, GrantType, RuleProfile, ServiceInfo};

/// Attendance-rate threshold (percent) below which the simplified rules fall
/// back to one day per full month worked.
pub const ATTENDANCE_RATE_THRESHOLD: f64 = 80.0;

/// Cap on the month-based entitlement during the first service year.
pub const FIRST_YEAR_DAY_CAP: u32 = 11;

/// Base day count of the statutory rule once a full year is served.
const STATUTORY_BASE_DAYS: u32 = 15;

/// Cap on the statutory long-service addition.
const STATUTORY_EXTRA_CAP: u32 = 10;

/// Fixed day count of the CBA-style rule at or above the attendance threshold.
const CBA_STANDARD_DAYS: u32 = 26;

/// Recommends an annual-leave day count for the given rule and service
/// summary.
///
/// Rules with `manual_days` or an unconfigured grant type return
/// `suggested_days: None`; "no recommendation" is a valid business state, not
/// an error.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::suggest_annual_days;
/// use leave_engine::catalog::RuleCatalog;
/// use leave_engine::models::ServiceInfo;
///
/// let catalog = RuleCatalog::builtin();
/// let service = ServiceInfo {
///     full_years: 3,
///     full_months: 0,
///     attendance_rate: 90.0,
/// };
///
/// let suggestion = suggest_annual_days(catalog.get("law_basic"), &service);
/// assert_eq!(suggestion.suggested_days, Some(16));
/// ```
pub fn suggest_annual_days(rule: &RuleProfile, service: &ServiceInfo) -> EntitlementSuggestion {
    match rule.grant_type {
        GrantType::ManualDays => EntitlementSuggestion {
            suggested_days: None,
            description: "Annual leave days are determined externally under this rule set. \
                          Enter the granted days directly."
                .to_string(),
        },
        GrantType::LawBasic => suggest_law_basic(service),
        GrantType::GwCbaLike => suggest_cba_like(service),
        GrantType::Other => EntitlementSuggestion {
            suggested_days: None,
            description: "No recommendation logic is configured for this rule set. Enter the \
                          granted days directly."
                .to_string(),
        },
    }
}

fn suggest_law_basic(service: &ServiceInfo) -> EntitlementSuggestion {
    if service.full_years < 1 {
        let days = service.full_months.min(FIRST_YEAR_DAY_CAP);
        return EntitlementSuggestion {
            suggested_days: Some(days),
            description: format!(
                "Statutory basic: under 1 year of service with {} full months worked, \
                 recommending {} days (capped at {}).",
                service.full_months, days, FIRST_YEAR_DAY_CAP
            ),
        };
    }

    if service.attendance_rate < ATTENDANCE_RATE_THRESHOLD {
        let days = service.full_months;
        return EntitlementSuggestion {
            suggested_days: Some(days),
            description: format!(
                "Statutory basic: attendance rate {:.1}% is below {:.0}%, recommending {} \
                 days, one per full month worked.",
                service.attendance_rate, ATTENDANCE_RATE_THRESHOLD, days
            ),
        };
    }

    let extra = ((service.full_years - 1) / 2).min(STATUTORY_EXTRA_CAP);
    let days = STATUTORY_BASE_DAYS + extra;
    EntitlementSuggestion {
        suggested_days: Some(days),
        description: format!(
            "Statutory basic: {} years of service at {:.1}% attendance, recommending {} base \
             days plus {} long-service days for {} days.",
            service.full_years, service.attendance_rate, STATUTORY_BASE_DAYS, extra, days
        ),
    }
}

fn suggest_cba_like(service: &ServiceInfo) -> EntitlementSuggestion {
    if service.full_years < 1 {
        let days = service.full_months.min(FIRST_YEAR_DAY_CAP);
        return EntitlementSuggestion {
            suggested_days: Some(days),
            description: format!(
                "CBA sample: under 1 year of service with {} full months worked, recommending \
                 {} days (capped at {}).",
                service.full_months, days, FIRST_YEAR_DAY_CAP
            ),
        };
    }

    if service.attendance_rate >= ATTENDANCE_RATE_THRESHOLD {
        return EntitlementSuggestion {
            suggested_days: Some(CBA_STANDARD_DAYS),
            description: format!(
                "CBA sample: {} years of service at {:.1}% attendance, recommending the fixed \
                 {} days.",
                service.full_years, service.attendance_rate, CBA_STANDARD_DAYS
            ),
        };
    }

    let days = service.full_months;
    EntitlementSuggestion {
        suggested_days: Some(days),
        description: format!(
            "CBA sample: attendance rate {:.1}% is below {:.0}%, recommending {} days, one \
             per full month worked.",
            service.attendance_rate, ATTENDANCE_RATE_THRESHOLD, days
        ),
    }
}
