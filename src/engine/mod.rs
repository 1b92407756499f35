//! Stateful shell around the pure calculator core.
//!
//! [`Calculator`] owns one [`CalculatorState`](crate::core::CalculatorState),
//! exposes one method per keypad action and logs every transition through
//! `tracing`. All decisions are delegated to
//! [`transition`](crate::core::transition).

mod calculator;

pub use calculator::Calculator;
