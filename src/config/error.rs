//! Configuration error types.

use thiserror::Error;

/// A single problem with a display label
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LabelViolation {
    /// The label would render as a blank display
    #[error("Display label '{field}' must not be empty")]
    Empty { field: &'static str },

    /// The label would read as an ordinary result
    #[error("Display label '{field}' must not be a number (got '{label}')")]
    Numeric { field: &'static str, label: String },

    /// NaN and infinity would be indistinguishable
    #[error("Display labels for NaN and infinity must differ (both '{label}')")]
    Ambiguous { label: String },
}

/// Errors that can occur when loading display settings
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed into settings
    #[error("Failed to parse display config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Every label violation found, in field order
    #[error("Invalid display config: {}", join_violations(.0))]
    Invalid(Vec<LabelViolation>),
}

fn join_violations(violations: &[LabelViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
