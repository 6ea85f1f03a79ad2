//! Rule profile model and related types.
//!
//! A rule profile bundles an entitlement-algorithm selector with a monetary
//! rounding policy. Profiles are immutable; the full set lives in the
//! [`RuleCatalog`](crate::catalog::RuleCatalog).

use serde::{Deserialize, Serialize};

/// Selects which entitlement-recommendation algorithm a rule profile uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
    /// Simplified statutory entitlement rules.
    LawBasic,
    /// Collective-bargaining-agreement style entitlement rules.
    GwCbaLike,
    /// Entitlement days are determined outside this system.
    ManualDays,
    /// No recommendation algorithm is configured.
    Other,
}

/// Direction of the rule-defined rounding stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round down to the step.
    Floor,
    /// Round to the nearest step (ties to even).
    Round,
    /// Round up to the step.
    Ceil,
    /// Skip the rule-defined rounding stage.
    None,
}

/// A named bundle of entitlement-algorithm selector and rounding policy.
///
/// # Example
///
/// ```
/// use leave_engine::models::{GrantType, RoundingMode, RuleProfile};
///
/// let rule = RuleProfile {
///     id: "law_basic".to_string(),
///     name: "Statutory basic".to_string(),
///     grant_type: GrantType::LawBasic,
///     rounding_step: 10,
///     rounding_mode: RoundingMode::Floor,
///     description: "Simplified statutory entitlement example.".to_string(),
/// };
/// assert_eq!(rule.rounding_step, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleProfile {
    /// Unique catalog key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Entitlement-algorithm selector.
    pub grant_type: GrantType,
    /// Granularity of the rule-defined rounding stage.
    #[serde(default = "default_rounding_step")]
    pub rounding_step: u32,
    /// Direction of the rule-defined rounding stage.
    #[serde(default = "default_rounding_mode")]
    pub rounding_mode: RoundingMode,
    /// Human-readable description of the rule set.
    pub description: String,
}

fn default_rounding_step() -> u32 {
    10
}

fn default_rounding_mode() -> RoundingMode {
    RoundingMode::Floor
}
