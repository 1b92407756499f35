//! Calculator state and its derived mode and display.
//!
//! The state is three explicit fields. The display string is never stored;
//! it is derived on demand so the invariants can be checked independently of
//! text formatting.

use super::number::{format_number, parse_operand};
use super::operator::Operator;
use crate::config::DisplayConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase of the input state machine, derived from the pending operator and
/// the operand being typed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// No operator pending; possibly typing the first operand.
    Idle,
    /// Operator pending, right operand not yet typed.
    AwaitingOperand,
    /// Operator pending, right operand partially typed.
    ComposingOperand,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::AwaitingOperand => "AwaitingOperand",
            Self::ComposingOperand => "ComposingOperand",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Complete state of a calculator.
///
/// Values are immutable from the outside; new states are produced by
/// [`transition`](super::transition).
///
/// # Example
///
/// ```rust
/// use sumpad::core::{transition, CalculatorState, Key, Mode};
///
/// let state = CalculatorState::new();
/// assert_eq!(state.to_string(), "0");
///
/// let state = transition(&state, "5".parse::<Key>().unwrap());
/// let state = transition(&state, "+".parse::<Key>().unwrap());
/// assert_eq!(state.to_string(), "5 +");
/// assert_eq!(state.mode(), Mode::AwaitingOperand);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CalculatorState {
    #[serde(with = "accumulator_repr")]
    pub(crate) accumulator: f64,
    pub(crate) entry: String,
    pub(crate) operator: Option<Operator>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// The power-on state: display `0`, nothing typed, no operator.
    pub fn new() -> Self {
        Self {
            accumulator: 0.0,
            entry: String::new(),
            operator: None,
        }
    }

    /// Last committed result, the left operand of any pending operation.
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Operand text typed so far, empty if no entry is in progress.
    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn mode(&self) -> Mode {
        match (self.operator, self.entry.is_empty()) {
            (None, _) => Mode::Idle,
            (Some(_), true) => Mode::AwaitingOperand,
            (Some(_), false) => Mode::ComposingOperand,
        }
    }

    /// Value the display currently stands for: the entry if one is being
    /// typed, otherwise the accumulator.
    pub fn current_value(&self) -> f64 {
        if self.entry.is_empty() {
            self.accumulator
        } else {
            parse_operand(&self.entry)
        }
    }

    /// Render the display string.
    pub fn display(&self, config: &DisplayConfig) -> String {
        let Some(op) = self.operator else {
            return if self.entry.is_empty() {
                format_number(self.accumulator, config)
            } else {
                self.entry.clone()
            };
        };

        let left = format_number(self.accumulator, config);
        if self.entry.is_empty() {
            format!("{left} {op}")
        } else {
            format!("{left} {op} {}", self.entry)
        }
    }
}

/// Structural equality. Accumulators are compared bit-for-bit, except that
/// every NaN equals every other NaN.
impl PartialEq for CalculatorState {
    fn eq(&self, other: &Self) -> bool {
        let same_accumulator = self.accumulator.to_bits() == other.accumulator.to_bits()
            || (self.accumulator.is_nan() && other.accumulator.is_nan());
        same_accumulator
            && self.entry == other.entry
            && self.operator == other.operator
    }
}

impl Eq for CalculatorState {}

impl fmt::Display for CalculatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display(&DisplayConfig::default()))
    }
}

/// JSON has no NaN or infinity, so non-finite accumulators are written as
/// the strings `"NaN"`, `"Infinity"` and `"-Infinity"`.
mod accumulator_repr {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    const NAN: &str = "NaN";
    const INFINITY: &str = "Infinity";
    const NEG_INFINITY: &str = "-Infinity";

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Marker(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_nan() {
            serializer.serialize_str(NAN)
        } else if value.is_sign_positive() {
            serializer.serialize_str(INFINITY)
        } else {
            serializer.serialize_str(NEG_INFINITY)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Marker(marker) => match marker.as_str() {
                NAN => Ok(f64::NAN),
                INFINITY => Ok(f64::INFINITY),
                NEG_INFINITY => Ok(f64::NEG_INFINITY),
                other => Err(D::Error::custom(format!(
                    "unknown accumulator marker '{other}'"
                ))),
            },
        }
    }
}
