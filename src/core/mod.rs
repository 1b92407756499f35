//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - The key vocabulary a keypad forwards
//! - Operators and number formatting
//! - The explicit state and its total transition function
//!
//! Nothing in this module performs I/O or logging; the stateful shell
//! lives in [`crate::engine`].

mod error;
mod key;
mod number;
mod operator;
mod state;
mod transition;

pub use error::KeyError;
pub use key::{Digit, EntryKey, Key};
pub use number::{format_finite, format_number, parse_operand};
pub use operator::Operator;
pub use state::{CalculatorState, Mode};
pub use transition::transition;
