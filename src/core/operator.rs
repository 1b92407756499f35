//! Binary operators a calculator can hold pending.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four arithmetic operators.
///
/// Holding the pending operator as this enum (rather than as display text)
/// makes an unknown operator unrepresentable.
///
/// # Example
///
/// ```rust
/// use sumpad::core::Operator;
///
/// assert_eq!(Operator::Multiply.apply(4.0, 2.5), 10.0);
/// assert_eq!(Operator::Divide.apply(7.0, 0.0), 0.0);
/// assert_eq!(Operator::Subtract.symbol(), '-');
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Symbol shown in the display after the left operand.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Apply the operator to two operands.
    ///
    /// Division by exactly zero yields `0` instead of an infinity or NaN.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide if right == 0.0 => 0.0,
            Self::Divide => left / right,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
