//! Display settings for values a calculator cannot show as digits.

use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod error;

pub use error::{ConfigError, LabelViolation};

/// Outcome of checking a label, carrying every violation found.
pub type LabelValidation = Validation<(), NonEmptyVec<LabelViolation>>;

/// Label shown for NaN results by default
pub const DEFAULT_NAN_LABEL: &str = "NaN";

/// Label shown for infinite results by default
pub const DEFAULT_INFINITY_LABEL: &str = "Infinity";

/// How non-finite results are rendered.
///
/// Negative infinity is shown as the infinity label with a leading `-`.
///
/// # Example
///
/// ```rust
/// use sumpad::config::DisplayConfig;
///
/// let config = DisplayConfig::from_json(r#"{ "nan_label": "Error" }"#).unwrap();
/// assert_eq!(config.nan_label, "Error");
/// assert_eq!(config.infinity_label, "Infinity");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Shown for NaN, e.g. the square root of a negative number
    pub nan_label: String,

    /// Shown for results that overflow
    pub infinity_label: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            nan_label: DEFAULT_NAN_LABEL.to_string(),
            infinity_label: DEFAULT_INFINITY_LABEL.to_string(),
        }
    }
}

impl DisplayConfig {
    /// Parse settings from JSON; missing fields take their defaults.
    ///
    /// Fails with every label violation at once, not just the first.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        match config.validate() {
            Validation::Success(_) => Ok(config),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }

    /// Check every label, accumulating ALL violations.
    pub fn validate(&self) -> LabelValidation {
        let checks = vec![
            check_label("nan_label", &self.nan_label),
            check_label("infinity_label", &self.infinity_label),
            check_distinct(&self.nan_label, &self.infinity_label),
        ];

        Validation::all_vec(checks).map(|_| ())
    }
}

fn check_label(field: &'static str, label: &str) -> LabelValidation {
    if label.is_empty() {
        Validation::fail(LabelViolation::Empty { field })
    } else if label.parse::<f64>().is_ok_and(f64::is_finite) {
        Validation::fail(LabelViolation::Numeric {
            field,
            label: label.to_string(),
        })
    } else {
        Validation::success(())
    }
}

// Two empty labels are already reported by `check_label`.
fn check_distinct(nan_label: &str, infinity_label: &str) -> LabelValidation {
    if !nan_label.is_empty() && nan_label == infinity_label {
        Validation::fail(LabelViolation::Ambiguous {
            label: nan_label.to_string(),
        })
    } else {
        Validation::success(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = DisplayConfig::default();
        assert_eq!(config.nan_label, DEFAULT_NAN_LABEL);
        assert_eq!(config.infinity_label, DEFAULT_INFINITY_LABEL);
        assert!(config.validate().is_success());
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config = DisplayConfig::from_json("{}").unwrap();
        assert_eq!(config, DisplayConfig::default());
    }

    #[test]
    fn partial_document_overrides_fields() {
        let config = DisplayConfig::from_json(r#"{ "infinity_label": "Overflow" }"#).unwrap();
        assert_eq!(config.nan_label, "NaN");
        assert_eq!(config.infinity_label, "Overflow");
    }

    #[test]
    fn malformed_json_is_rejected() {
        let result = DisplayConfig::from_json("{ nan_label");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn empty_label_is_rejected() {
        let result = DisplayConfig::from_json(r#"{ "nan_label": "" }"#);
        match result {
            Err(ConfigError::Invalid(violations)) => assert_eq!(
                violations,
                vec![LabelViolation::Empty { field: "nan_label" }]
            ),
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let config = DisplayConfig {
            nan_label: String::new(),
            infinity_label: String::new(),
        };

        match config.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                let fields: Vec<_> = errors
                    .iter()
                    .filter_map(|e| match e {
                        LabelViolation::Empty { field } => Some(*field),
                        _ => None,
                    })
                    .collect();
                assert_eq!(fields, vec!["nan_label", "infinity_label"]);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn from_json_reports_both_empty_labels() {
        let result = DisplayConfig::from_json(r#"{ "nan_label": "", "infinity_label": "" }"#);
        match result {
            Err(ConfigError::Invalid(violations)) => {
                assert_eq!(
                    violations,
                    vec![
                        LabelViolation::Empty { field: "nan_label" },
                        LabelViolation::Empty {
                            field: "infinity_label"
                        },
                    ]
                );
            }
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn numeric_and_duplicate_labels_are_rejected() {
        let numeric = DisplayConfig {
            nan_label: "0".to_string(),
            ..DisplayConfig::default()
        };
        assert!(numeric.validate().is_failure());

        let duplicate = DisplayConfig {
            nan_label: "E".to_string(),
            infinity_label: "E".to_string(),
        };
        match duplicate.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, LabelViolation::Ambiguous { .. })));
            }
            Validation::Success(_) => panic!("Expected failure, got success"),
        }
    }

    #[test]
    fn invalid_error_lists_every_violation() {
        let error = ConfigError::Invalid(vec![
            LabelViolation::Empty { field: "nan_label" },
            LabelViolation::Empty {
                field: "infinity_label",
            },
        ]);
        assert_eq!(
            error.to_string(),
            "Invalid display config: Display label 'nan_label' must not be empty; \
             Display label 'infinity_label' must not be empty"
        );
    }

    #[test]
    fn config_serializes_correctly() {
        let config = DisplayConfig {
            nan_label: "E".to_string(),
            infinity_label: "OF".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(DisplayConfig::from_json(&json).unwrap(), config);
    }
}
