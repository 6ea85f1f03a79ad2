//! Error types for the leave engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation core deliberately degrades to safe defaults instead of
//! failing, so these errors only surface at the strict inner seams (duration
//! parsing, direct rule lookup) and at the HTTP boundary.

use thiserror::Error;

/// The main error type for the leave engine.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::RuleNotFound {
///     id: "gw_unknown".to_string(),
/// };
/// assert_eq!(error.to_string(), "Rule profile not found: gw_unknown");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No rule profile with the given id exists in the catalog.
    #[error("Rule profile not found: {id}")]
    RuleNotFound {
        /// The rule id that was not found.
        id: String,
    },

    /// A duration string did not match any supported notation.
    #[error("Unrecognized duration text: '{text}'")]
    UnrecognizedDuration {
        /// The original duration text.
        text: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_not_found_displays_id() {
        let error = EngineError::RuleNotFound {
            id: "gw_2099_cba".to_string(),
        };
        assert_eq!(error.to_string(), "Rule profile not found: gw_2099_cba");
    }

    #[test]
    fn test_unrecognized_duration_displays_text() {
        let error = EngineError::UnrecognizedDuration {
            text: "approx. half a day".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unrecognized duration text: 'approx. half a day'"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_rule_not_found() -> EngineResult<()> {
            Err(EngineError::RuleNotFound {
                id: "missing".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_rule_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
