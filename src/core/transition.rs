//! Pure transition function for the calculator.
//!
//! Given the same state and key, [`transition`] always produces the same next
//! state. It is total: every key is accepted in every state, and keys that
//! have nothing to act on return the state unchanged.

use super::key::{EntryKey, Key};
use super::number::{format_finite, parse_operand};
use super::operator::Operator;
use super::state::CalculatorState;

/// Compute the state that follows `state` when `key` is pressed.
pub fn transition(state: &CalculatorState, key: Key) -> CalculatorState {
    match key {
        Key::Entry(entry_key) => enter(state, entry_key),
        Key::Operator(op) => select_operator(state, op),
        Key::Equals => equals(state),
        Key::Clear => CalculatorState::new(),
        Key::SquareRoot => square_root(state),
        Key::ToggleSign => toggle_sign(state),
    }
}

/// Result of applying the pending operator to the typed right operand, if
/// both are present. Shared by `equals` and chained operator presses.
fn evaluate_pending(state: &CalculatorState) -> Option<f64> {
    let op = state.operator?;
    if state.entry.is_empty() {
        return None;
    }
    Some(op.apply(state.accumulator, parse_operand(&state.entry)))
}

fn enter(state: &CalculatorState, key: EntryKey) -> CalculatorState {
    let mut next = state.clone();
    match key {
        EntryKey::Point if state.entry.contains('.') => {}
        EntryKey::Digit(digit) if state.entry == "0" => {
            next.entry = digit.as_char().to_string();
        }
        key => next.entry.push(key.as_char()),
    }
    next
}

fn select_operator(state: &CalculatorState, op: Operator) -> CalculatorState {
    let accumulator = if state.entry.is_empty() {
        state.accumulator
    } else {
        // Chained evaluation, or commit the first operand when nothing pends.
        evaluate_pending(state).unwrap_or_else(|| parse_operand(&state.entry))
    };

    CalculatorState {
        accumulator,
        entry: String::new(),
        operator: Some(op),
    }
}

fn equals(state: &CalculatorState) -> CalculatorState {
    match evaluate_pending(state) {
        Some(result) => CalculatorState {
            accumulator: result,
            entry: String::new(),
            operator: None,
        },
        None => state.clone(),
    }
}

fn square_root(state: &CalculatorState) -> CalculatorState {
    let result = state.current_value().sqrt();
    // Non-finite results live only in the accumulator so the next digit
    // starts a fresh entry instead of appending to a marker.
    let entry = if result.is_finite() {
        format_finite(result)
    } else {
        String::new()
    };

    CalculatorState {
        accumulator: result,
        entry,
        operator: None,
    }
}

fn toggle_sign(state: &CalculatorState) -> CalculatorState {
    if state.entry.is_empty() {
        return state.clone();
    }

    let entry = match state.entry.strip_prefix('-') {
        Some(unsigned) => unsigned.to_string(),
        None => format!("-{}", state.entry),
    };

    CalculatorState {
        entry,
        ..state.clone()
    }
}
