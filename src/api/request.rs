//! Request types for the leave engine API.
//!
//! This module defines the JSON request structures for the `/pipeline` and
//! `/summarize` endpoints. Numeric fields coerce leniently (numbers or
//! numeric strings, junk falls back to the field default), because the
//! caller is a form-driven rendering layer and a single bad field must not
//! reject the request.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::coerce;
use crate::models::{AttendanceRecord, ServiceInfo, WageInfo, WageType};

/// Request body for the `/pipeline` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineRequest {
    /// The rule profile to apply; unknown or missing ids fall back to the
    /// statutory-basic profile.
    #[serde(default)]
    pub rule_id: String,
    /// Service and attendance summary.
    #[serde(default)]
    pub service: ServiceInfoRequest,
    /// Wage information.
    #[serde(default)]
    pub wage: WageInfoRequest,
    /// Granted leave days; zero or missing adopts the rule's recommendation.
    #[serde(default, deserialize_with = "coerce::lenient_decimal")]
    pub granted_days: Decimal,
    /// Leave days already taken.
    #[serde(default, deserialize_with = "coerce::lenient_decimal")]
    pub used_days: Decimal,
}

/// Service summary in a pipeline request.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ServiceInfoRequest {
    /// Completed years of service.
    #[serde(default, deserialize_with = "coerce::lenient_u32")]
    pub full_years: u32,
    /// Completed months beyond the full years.
    #[serde(default, deserialize_with = "coerce::lenient_u32")]
    pub full_months: u32,
    /// Attendance rate as a percentage.
    #[serde(default, deserialize_with = "coerce::lenient_f64")]
    pub attendance_rate: f64,
}

/// Wage information in a pipeline request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WageInfoRequest {
    /// Wage denomination; unrecognized labels behave as monthly.
    #[serde(default, deserialize_with = "coerce::lenient_wage_type")]
    pub wage_type: WageType,
    /// The wage amount.
    #[serde(default, deserialize_with = "coerce::lenient_decimal")]
    pub wage_amount: Decimal,
    /// Contracted hours per day (hourly wages).
    #[serde(default, deserialize_with = "coerce::lenient_decimal")]
    pub hours_per_day: Decimal,
    /// Work days per month (monthly wages).
    #[serde(default, deserialize_with = "coerce::lenient_decimal")]
    pub monthly_work_days: Decimal,
}

/// Request body for the `/summarize` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummarizeRequest {
    /// The attendance rows to aggregate.
    #[serde(default)]
    pub records: Vec<AttendanceRecordRequest>,
}

/// One attendance row in a summarize request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecordRequest {
    /// Leave category label.
    #[serde(default)]
    pub leave_type: String,
    /// The raw duration column text.
    #[serde(default)]
    pub duration_raw: String,
    /// Contracted hours per day; junk or missing becomes 8.0.
    #[serde(
        default = "default_hours_per_day",
        deserialize_with = "coerce::lenient_hours_per_day"
    )]
    pub hours_per_day: f64,
}

fn default_hours_per_day() -> f64 {
    8.0
}

impl From<ServiceInfoRequest> for ServiceInfo {
    fn from(req: ServiceInfoRequest) -> Self {
        ServiceInfo {
            full_years: req.full_years,
            full_months: req.full_months,
            attendance_rate: req.attendance_rate,
        }
    }
}

impl From<WageInfoRequest> for WageInfo {
    fn from(req: WageInfoRequest) -> Self {
        WageInfo {
            wage_type: req.wage_type,
            wage_amount: req.wage_amount,
            hours_per_day: req.hours_per_day,
            monthly_work_days: req.monthly_work_days,
        }
    }
}

impl From<AttendanceRecordRequest> for AttendanceRecord {
    fn from(req: AttendanceRecordRequest) -> Self {
        AttendanceRecord {
            leave_type: req.leave_type,
            duration_raw: req.duration_raw,
            hours_per_day: req.hours_per_day,
        }
    }
}
