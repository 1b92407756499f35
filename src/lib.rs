//! Sumpad: a pocket-calculator input engine
//!
//! Sumpad turns a stream of keypad presses into the text a four-function
//! calculator displays. It follows the "pure core, imperative shell" split:
//! every decision lives in a pure transition function over an explicit
//! state, and a thin stateful shell applies keys and logs what happened.
//!
//! # Core Concepts
//!
//! - **Keys**: The fixed vocabulary of user actions via the `Key` enum
//! - **State**: Committed result, typed operand and pending operator
//! - **Transitions**: A total function from state and key to the next state
//! - **Chained evaluation**: Pressing an operator evaluates the pending one,
//!   so `5 + 3 * 2 =` shows `16`
//!
//! # Example
//!
//! ```rust
//! use sumpad::engine::Calculator;
//!
//! let mut calc = Calculator::new();
//! let display = calc.press_labels(["5", "+", "3", "×", "2", "="]).unwrap();
//! assert_eq!(display, "16");
//!
//! calc.clear();
//! assert_eq!(calc.press_labels(["7", "÷", "0", "="]).unwrap(), "0");
//! ```

pub mod config;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::config::DisplayConfig;
pub use crate::core::{CalculatorState, Key, Mode, Operator};
pub use crate::engine::Calculator;
