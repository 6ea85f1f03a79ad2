//! Best-effort numeric coercion for boundary inputs.
//!
//! The engine accepts loose key-value payloads from a rendering layer, where
//! numeric fields may arrive as JSON numbers, numeric strings, nulls, or
//! garbage. Coercion happens here, once, at the boundary; every function in
//! the calculation core works on strictly-typed values.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::WageType;

/// Coerces a JSON value to a `Decimal`, falling back to `default`.
///
/// Accepts numbers and numeric strings; anything else (null, booleans,
/// arrays, unparsable text) yields the default.
pub(crate) fn decimal_or(value: &Value, default: Decimal) -> Decimal {
    match value {
        Value::Number(n) => n.to_string().parse().unwrap_or(default),
        Value::String(s) => s.trim().parse().unwrap_or(default),
        _ => default,
    }
}

/// Coerces a JSON value to an `f64`, falling back to `default`.
pub(crate) fn float_or(value: &Value, default: f64) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(default),
        Value::String(s) => s.trim().parse().unwrap_or(default),
        _ => default,
    }
}

/// Coerces a JSON value to a `u32`, falling back to `default`.
///
/// Fractional numbers truncate toward zero; negative values clamp to 0.
pub(crate) fn unsigned_or(value: &Value, default: u32) -> u32 {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.clamp(0, u32::MAX as i64) as u32
            } else if let Some(f) = n.as_f64() {
                f.trunc().clamp(0.0, u32::MAX as f64) as u32
            } else {
                default
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map(|i| i.clamp(0, u32::MAX as i64) as u32)
            .unwrap_or(default),
        _ => default,
    }
}

/// Serde adapter: lenient `Decimal` field, defaulting to zero.
pub(crate) fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(decimal_or(&value, Decimal::ZERO))
}

/// Serde adapter: lenient `f64` field, defaulting to zero.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(float_or(&value, 0.0))
}

/// Serde adapter: lenient contracted hours-per-day field, defaulting to 8.0.
pub(crate) fn lenient_hours_per_day<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(float_or(&value, 8.0))
}

/// Serde adapter: lenient `u32` field, defaulting to zero.
pub(crate) fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(unsigned_or(&value, 0))
}

/// Serde adapter: lenient wage type field, defaulting to monthly.
pub(crate) fn lenient_wage_type<'de, D>(deserializer: D) -> Result<WageType, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::String(s) => WageType::parse_lenient(s),
        _ => WageType::Monthly,
    })
}
