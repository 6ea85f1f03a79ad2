//! Aggregation of attendance records by leave category.

use std::collections::BTreeMap;

use crate::models::{AttendanceRecord, GroupSummary};

use super::duration::parse_duration;

struct GroupAccumulator {
    count: u64,
    total_minutes: u64,
    hours_per_day: f64,
}

/// Groups records by leave type and produces per-category totals.
///
/// Output is ordered ascending by leave-type label, so repeated runs over
/// the same export render identically.
///
/// The contracted day length used to convert a group's total is
/// last-write-wins across that group's records (non-positive values keep the
/// previous one, starting from 8.0). Records of one category are assumed to
/// share contracted hours; mixed values are a known limitation of the export
/// format, not something this function tries to repair.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::summarize_records;
/// use leave_engine::models::AttendanceRecord;
///
/// let records = vec![AttendanceRecord {
///     leave_type: "annual".to_string(),
///     duration_raw: "6:30".to_string(),
///     hours_per_day: 8.0,
/// }];
///
/// let groups = summarize_records(&records);
/// assert_eq!(groups[0].sum_hours_decimal, 6.5);
/// ```
pub fn summarize_records(records: &[AttendanceRecord]) -> Vec<GroupSummary> {
    let mut groups: BTreeMap<&str, GroupAccumulator> = BTreeMap::new();

    for record in records {
        let minutes = parse_duration(&record.duration_raw, record.hours_per_day);
        let group = groups
            .entry(record.leave_type.as_str())
            .or_insert(GroupAccumulator {
                count: 0,
                total_minutes: 0,
                hours_per_day: 8.0,
            });
        group.count += 1;
        group.total_minutes += minutes;
        if record.hours_per_day > 0.0 {
            group.hours_per_day = record.hours_per_day;
        }
    }

    groups
        .into_iter()
        .map(|(leave_type, group)| build_summary(leave_type, &group))
        .collect()
}

fn build_summary(leave_type: &str, group: &GroupAccumulator) -> GroupSummary {
    let hours_per_day = group.hours_per_day;
    let total_hours = group.total_minutes as f64 / 60.0;

    // Whole contracted days, then the remainder split into hours and minutes.
    let full_days = (total_hours / hours_per_day).floor() as u64;
    let remaining_hours = total_hours - full_days as f64 * hours_per_day;
    let whole_hours = remaining_hours.trunc() as u64;
    let leftover_minutes = ((remaining_hours - whole_hours as f64) * 60.0).round() as u64;

    let sum_days_hours_minutes = format!(
        "{} days {} hours {} minutes",
        full_days, whole_hours, leftover_minutes
    );

    let sum_hours_decimal = round_1dp(total_hours);

    let converted_days = total_hours / hours_per_day;
    let converted_full_days = converted_days.trunc() as u64;
    let converted_hours = round_1dp((converted_days - converted_full_days as f64) * hours_per_day);
    let converted_days_hours = format!("{} days {:.1} hours", converted_full_days, converted_hours);

    GroupSummary {
        leave_type: leave_type.to_string(),
        count: group.count,
        total_minutes: group.total_minutes,
        sum_days_hours_minutes,
        sum_hours_decimal,
        converted_days_hours,
    }
}

fn round_1dp(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
