//! Attendance record model and group summary output.
//!
//! An [`AttendanceRecord`] is one row of an attendance-system export. The
//! duration column is free text in mixed notations; parsing is tolerant and
//! never rejects a row.

use serde::{Deserialize, Serialize};

/// One parsed row of an attendance export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Leave category label (e.g. annual leave, sick leave).
    pub leave_type: String,
    /// The original duration column text.
    pub duration_raw: String,
    /// Nominal contracted work hours per day, used to convert
    /// day-denominated durations to minutes.
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: f64,
}

fn default_hours_per_day() -> f64 {
    8.0
}

impl AttendanceRecord {
    /// Parses the raw duration text into minutes.
    ///
    /// Unparsable text yields 0; this never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::models::AttendanceRecord;
    ///
    /// let record = AttendanceRecord {
    ///     leave_type: "annual".to_string(),
    ///     duration_raw: "6:30".to_string(),
    ///     hours_per_day: 8.0,
    /// };
    /// assert_eq!(record.minutes(), 390);
    /// ```
    pub fn minutes(&self) -> u64 {
        crate::calculation::parse_duration(&self.duration_raw, self.hours_per_day)
    }
}

/// Aggregated totals for one leave category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Leave category label.
    pub leave_type: String,
    /// Number of rows in this category.
    pub count: u64,
    /// Total parsed minutes across the category.
    pub total_minutes: u64,
    /// Total rendered as "D days H hours M minutes".
    pub sum_days_hours_minutes: String,
    /// Total in decimal hours, rounded to 1 decimal place.
    pub sum_hours_decimal: f64,
    /// Total rendered as "D days H.H hours" against the contracted day length.
    pub converted_days_hours: String,
}
