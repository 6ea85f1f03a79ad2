//! Tolerant parsing of attendance-export duration text.
//!
//! Attendance-system exports write the duration column in inconsistent,
//! locale-specific free text: `0일 6시간 30분`, `6시간 30분`, `1.5일`,
//! `6:30`, or a bare day count. The parser accepts as much as it can and
//! degrades to 0 minutes on anything unrecognizable, so a single malformed
//! row never aborts an aggregation.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{EngineError, EngineResult};

/// Day-unit marker used by the attendance export.
const DAY_MARKER: char = '일';

static DAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)일").expect("valid day pattern"));
static HOUR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)시간").expect("valid hour pattern"));
static MINUTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)분").expect("valid minute pattern"));

/// Parses duration text into minutes, degrading to 0 on unrecognized input.
///
/// `hours_per_day` is the nominal contracted day length, used to convert
/// day-denominated quantities.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::parse_duration;
///
/// assert_eq!(parse_duration("6:30", 8.0), 390);
/// assert_eq!(parse_duration("0일 6시간 30분", 8.0), 390);
/// assert_eq!(parse_duration("1.5일", 8.0), 720);
/// assert_eq!(parse_duration("not a duration", 8.0), 0);
/// ```
pub fn parse_duration(text: &str, hours_per_day: f64) -> u64 {
    try_parse_duration(text, hours_per_day).unwrap_or_else(|_| {
        debug!(text, "unrecognized duration text, counting 0 minutes");
        0
    })
}

/// Strict variant of [`parse_duration`].
///
/// Returns [`EngineError::UnrecognizedDuration`] instead of 0 when the text
/// matches none of the supported notations. Empty input is a recognized
/// zero-length duration, not an error.
///
/// The notations, tried in order with the first match winning:
///
/// 1. empty (after trimming) → 0 minutes
/// 2. `H:MM`, only when no day marker is present; either side may be empty
/// 3. any combination of `일` (days), `시간` (hours), `분` (minutes)
///    quantities; "present" means the pattern matched, not that the value is
///    non-zero
/// 4. a bare decimal day count ending in `일`
/// 5. a string of ASCII digits, read as a whole-number day count
pub fn try_parse_duration(text: &str, hours_per_day: f64) -> EngineResult<u64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }

    // Pattern search runs over the whitespace-stripped form so that
    // "0일 6시간" and "0일6시간" parse identically.
    let compact: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();

    // Clock notation. A day marker disqualifies this branch; a parse failure
    // falls through to the unit-marker rules instead of rejecting the row.
    if !compact.contains(DAY_MARKER) {
        if let Some((hour_part, minute_part)) = compact.split_once(':') {
            if let (Some(hours), Some(minutes)) =
                (parse_clock_part(hour_part), parse_clock_part(minute_part))
            {
                return Ok(to_whole_minutes(hours * 60.0 + minutes));
            }
        }
    }

    // Unit-marker notation: each quantity is searched for independently and
    // defaults to 0 when its marker is absent.
    let day = DAY_RE.captures(&compact);
    let hour = HOUR_RE.captures(&compact);
    let minute = MINUTE_RE.captures(&compact);
    if day.is_some() || hour.is_some() || minute.is_some() {
        let days = captured_quantity(day.as_ref());
        let hours = captured_quantity(hour.as_ref());
        let minutes = captured_quantity(minute.as_ref());
        return Ok(to_whole_minutes(
            days * hours_per_day * 60.0 + hours * 60.0 + minutes,
        ));
    }

    // Day-only notation where the quantity is not a plain decimal matched
    // above, e.g. ".5일".
    if let Some(number) = compact.strip_suffix(DAY_MARKER) {
        if let Ok(days) = number.parse::<f64>() {
            return Ok(to_whole_minutes(days * hours_per_day * 60.0));
        }
    }

    // A bare digit string counts as whole days.
    if compact.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(days) = compact.parse::<f64>() {
            return Ok(to_whole_minutes(days * hours_per_day * 60.0));
        }
    }

    Err(EngineError::UnrecognizedDuration {
        text: text.to_string(),
    })
}

fn parse_clock_part(part: &str) -> Option<f64> {
    if part.is_empty() {
        Some(0.0)
    } else {
        part.parse().ok()
    }
}

fn captured_quantity(captures: Option<&regex::Captures<'_>>) -> f64 {
    captures
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0)
}

/// Minutes are reported as a non-negative integer; fractional totals round
/// to the nearest minute and negative totals clamp to zero.
fn to_whole_minutes(total: f64) -> u64 {
    total.max(0.0).round() as u64
}
