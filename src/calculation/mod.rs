//! Calculation logic for the leave engine.
//!
//! This module contains all the calculation functions: tolerant duration
//! parsing, per-category attendance aggregation, entitlement recommendation,
//! daily-wage derivation, the two-stage monetary rounding policy, the
//! unused-leave payout, and the combined pipeline.

mod daily_wage;
mod duration;
mod entitlement;
mod payout;
mod pipeline;
mod rounding;
mod summary;

pub use daily_wage::compute_daily_wage;
pub use duration::{parse_duration, try_parse_duration};
pub use entitlement::{ATTENDANCE_RATE_THRESHOLD, FIRST_YEAR_DAY_CAP, suggest_annual_days};
pub use payout::compute_unused_payout;
pub use pipeline::run_pipeline;
pub use rounding::{apply_rounding, truncate_to_denomination};
pub use summary::summarize_records;
