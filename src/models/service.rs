//! Service and attendance summary for entitlement recommendations.

use serde::{Deserialize, Serialize};

/// Summarized service length and attendance for one employee.
///
/// All fields default to zero; values are advisory inputs and are not
/// strictly range-checked (`full_months` is expected 0-11, `attendance_rate`
/// 0-100).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Completed years of service.
    #[serde(default)]
    pub full_years: u32,
    /// Completed months of service beyond the full years.
    #[serde(default)]
    pub full_months: u32,
    /// Attendance rate as a percentage.
    #[serde(default)]
    pub attendance_rate: f64,
}
