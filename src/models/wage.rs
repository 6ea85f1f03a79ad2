//! Wage information for daily-wage and payout calculations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the wage amount is denominated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WageType {
    /// A monthly salary; requires `monthly_work_days` to derive a daily wage.
    #[default]
    Monthly,
    /// A daily wage, used as-is.
    Daily,
    /// An hourly wage; requires `hours_per_day` to derive a daily wage.
    Hourly,
}

impl WageType {
    /// Parses a wage type label, treating anything unrecognized as monthly.
    ///
    /// Mirrors the dispatch order of the daily-wage calculation: only the
    /// exact `hourly` and `daily` labels select those branches, everything
    /// else lands in the monthly default.
    pub fn parse_lenient(label: &str) -> Self {
        match label.trim() {
            "hourly" => WageType::Hourly,
            "daily" => WageType::Daily,
            _ => WageType::Monthly,
        }
    }
}

/// Wage inputs for one employee.
///
/// Fields that do not apply to the selected wage type are ignored; fields
/// that do apply but were not provided stay at zero, which the calculation
/// treats as "cannot compute" and degrades to a zero daily wage.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WageInfo {
    /// How `wage_amount` is denominated.
    #[serde(default)]
    pub wage_type: WageType,
    /// The wage amount in the smallest currency unit.
    #[serde(default)]
    pub wage_amount: Decimal,
    /// Contracted work hours per day; required (> 0) for hourly wages.
    #[serde(default)]
    pub hours_per_day: Decimal,
    /// Work days per month; required (> 0) for monthly wages.
    #[serde(default)]
    pub monthly_work_days: Decimal,
}
