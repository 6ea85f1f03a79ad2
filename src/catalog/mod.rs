//! The built-in rule-profile catalog.
//!
//! The catalog is a fixed, read-only registry constructed once at process
//! start. There is no mutation API; lookups by unknown id fall back to the
//! statutory-basic profile so that a bad identifier can never abort a
//! calculation.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{GrantType, RoundingMode, RuleProfile};

/// Id of the profile used when a lookup misses.
pub const DEFAULT_RULE_ID: &str = "law_basic";

/// Read-only registry of named rule profiles.
///
/// # Example
///
/// ```
/// use leave_engine::catalog::{RuleCatalog, DEFAULT_RULE_ID};
///
/// let catalog = RuleCatalog::builtin();
/// let rule = catalog.get("no_such_rule");
/// assert_eq!(rule.id, DEFAULT_RULE_ID);
/// ```
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    profiles: BTreeMap<String, RuleProfile>,
    fallback: RuleProfile,
}

impl RuleCatalog {
    /// Builds the fixed built-in profile set.
    pub fn builtin() -> Self {
        let fallback = RuleProfile {
            id: "law_basic".to_string(),
            name: "Statutory basic (simplified)".to_string(),
            grant_type: GrantType::LawBasic,
            rounding_step: 10,
            rounding_mode: RoundingMode::Floor,
            description: "A simplified example of the statutory minimum entitlement rules."
                .to_string(),
        };

        let profiles = [
            fallback.clone(),
            RuleProfile {
                id: "gw_school_cba".to_string(),
                name: "School-staff CBA example".to_string(),
                grant_type: GrantType::GwCbaLike,
                rounding_step: 10,
                rounding_mode: RoundingMode::Floor,
                description: "Modeled on a school-workers collective agreement. Check the \
                              agreement text for the actual clauses."
                    .to_string(),
            },
            RuleProfile {
                id: "gw_institute_cba".to_string(),
                name: "Institute-staff CBA example".to_string(),
                grant_type: GrantType::GwCbaLike,
                rounding_step: 10,
                rounding_mode: RoundingMode::Floor,
                description: "Modeled on an institute-workers collective agreement. Adjust \
                              against the source text before relying on it."
                    .to_string(),
            },
            RuleProfile {
                id: "gw_wage_guideline".to_string(),
                name: "Ordinary-wage guideline (days set externally)".to_string(),
                grant_type: GrantType::ManualDays,
                rounding_step: 10,
                rounding_mode: RoundingMode::Floor,
                description: "Annual leave days are determined externally; this mode only \
                              computes the payout."
                    .to_string(),
            },
            RuleProfile {
                id: "custom".to_string(),
                name: "Custom (manual days and rounding)".to_string(),
                grant_type: GrantType::ManualDays,
                rounding_step: 10,
                rounding_mode: RoundingMode::Floor,
                description: "The granted days and truncation rules are managed by the user."
                    .to_string(),
            },
        ]
        .into_iter()
        .map(|profile| (profile.id.clone(), profile))
        .collect();

        Self { profiles, fallback }
    }

    /// Looks up a profile by id, falling back to [`DEFAULT_RULE_ID`] when the
    /// id is unknown.
    pub fn get(&self, rule_id: &str) -> &RuleProfile {
        match self.profiles.get(rule_id) {
            Some(profile) => profile,
            None => {
                debug!(rule_id, fallback = DEFAULT_RULE_ID, "unknown rule id, using fallback");
                &self.fallback
            }
        }
    }

    /// Strict lookup by id.
    ///
    /// Used where "no such profile" must stay observable (the direct rule
    /// inspection endpoint); the calculation paths use [`RuleCatalog::get`].
    pub fn find(&self, rule_id: &str) -> EngineResult<&RuleProfile> {
        self.profiles.get(rule_id).ok_or_else(|| EngineError::RuleNotFound {
            id: rule_id.to_string(),
        })
    }

    /// Iterates all profiles in ascending id order.
    pub fn profiles(&self) -> impl Iterator<Item = &RuleProfile> {
        self.profiles.values()
    }

    /// Number of profiles in the catalog.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether the catalog is empty (never true for the built-in set).
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// RC-001: builtin set contains the five documented profiles
    #[test]
    fn test_builtin_profile_set() {
        let catalog = RuleCatalog::builtin();
        let ids: Vec<&str> = catalog.profiles().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "custom",
                "gw_institute_cba",
                "gw_school_cba",
                "gw_wage_guideline",
                "law_basic",
            ]
        );
        assert_eq!(catalog.len(), 5);
        assert!(!catalog.is_empty());
    }

    /// RC-002: every profile has a non-empty id and description
    #[test]
    fn test_profiles_are_fully_populated() {
        let catalog = RuleCatalog::builtin();
        for profile in catalog.profiles() {
            assert!(!profile.id.is_empty());
            assert!(!profile.name.is_empty());
            assert!(!profile.description.is_empty());
            assert!(profile.rounding_step > 0);
        }
    }

    /// RC-003: known id resolves to that profile
    #[test]
    fn test_get_known_id() {
        let catalog = RuleCatalog::builtin();
        let rule = catalog.get("gw_school_cba");
        assert_eq!(rule.id, "gw_school_cba");
        assert_eq!(rule.grant_type, GrantType::GwCbaLike);
    }

    /// RC-004: unknown id falls back to law_basic without error
    #[test]
    fn test_get_unknown_id_falls_back() {
        let catalog = RuleCatalog::builtin();
        let rule = catalog.get("gw_2099_cba");
        assert_eq!(rule.id, DEFAULT_RULE_ID);
        assert_eq!(rule.grant_type, GrantType::LawBasic);
    }

    /// RC-005: strict lookup reports the miss
    #[test]
    fn test_find_unknown_id_errors() {
        let catalog = RuleCatalog::builtin();
        match catalog.find("gw_2099_cba") {
            Err(EngineError::RuleNotFound { id }) => assert_eq!(id, "gw_2099_cba"),
            other => panic!("Expected RuleNotFound, got {:?}", other),
        }
        assert!(catalog.find("custom").is_ok());
    }

    /// RC-006: manual-days profiles carry the manual grant type
    #[test]
    fn test_manual_profiles() {
        let catalog = RuleCatalog::builtin();
        assert_eq!(
            catalog.get("gw_wage_guideline").grant_type,
            GrantType::ManualDays
        );
        assert_eq!(catalog.get("custom").grant_type, GrantType::ManualDays);
    }
}
