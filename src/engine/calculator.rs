//! Calculator engine that applies keys to its owned state.

use crate::config::DisplayConfig;
use crate::core::{
    parse_operand, transition, CalculatorState, EntryKey, Key, KeyError, Mode, Operator,
};

/// A pocket calculator: one state, mutated only by key presses.
///
/// Every operation is infallible. Keys with nothing to act on leave the
/// state unchanged.
///
/// # Example
///
/// ```rust
/// use sumpad::core::Operator;
/// use sumpad::engine::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.press_labels(["5"]).unwrap();
/// calc.operator(Operator::Add);
/// calc.press_labels(["3", "×", "2"]).unwrap();
/// assert_eq!(calc.display(), "8 * 2");
///
/// calc.equals();
/// assert_eq!(calc.display(), "16");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    state: CalculatorState,
    config: DisplayConfig,
}

impl Calculator {
    /// Create a calculator in the initial state with default display labels
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a calculator with custom display labels
    pub fn with_config(config: DisplayConfig) -> Self {
        Self {
            state: CalculatorState::new(),
            config,
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Get derived mode (pure)
    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    /// Display labels in use
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// The text to render, to be shown verbatim.
    pub fn display(&self) -> String {
        self.state.display(&self.config)
    }

    /// Apply one key press.
    pub fn press(&mut self, key: Key) {
        let next = transition(&self.state, key);

        if next == self.state {
            tracing::trace!(%key, mode = %self.state.mode(), "Key absorbed without effect");
            return;
        }

        if self.divides_by_zero(key) {
            tracing::debug!(left = self.state.accumulator(), "Division by zero evaluated as 0");
        }

        let from = self.state.mode();
        self.state = next;

        if key == Key::SquareRoot && self.state.accumulator().is_nan() {
            tracing::debug!("Square root of a negative operand evaluated as NaN");
        }

        tracing::debug!(
            %key,
            %from,
            to = %self.state.mode(),
            display = %self.display(),
            "Key applied"
        );
    }

    /// Apply keys in order and return the resulting display.
    pub fn press_all<I>(&mut self, keys: I) -> String
    where
        I: IntoIterator<Item = Key>,
    {
        for key in keys {
            self.press(key);
        }
        self.display()
    }

    /// Parse button labels and apply them in order.
    ///
    /// All labels are parsed before any is applied, so an unknown label
    /// leaves the calculator untouched.
    pub fn press_labels<I, L>(&mut self, labels: I) -> Result<String, KeyError>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let keys = labels
            .into_iter()
            .map(|label| label.as_ref().parse::<Key>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.press_all(keys))
    }

    /// Type a digit or the decimal point.
    pub fn digit(&mut self, key: EntryKey) {
        self.press(Key::Entry(key));
    }

    /// Select an operator, first evaluating any complete pending operation.
    pub fn operator(&mut self, op: Operator) {
        self.press(Key::Operator(op));
    }

    /// Evaluate the pending operation, if there is one with a right operand.
    pub fn equals(&mut self) {
        self.press(Key::Equals);
    }

    /// Return to the initial state.
    pub fn clear(&mut self) {
        self.press(Key::Clear);
    }

    /// Replace the current value with its square root.
    pub fn square_root(&mut self) {
        self.press(Key::SquareRoot);
    }

    /// Flip the sign of the operand being typed.
    pub fn toggle_sign(&mut self) {
        self.press(Key::ToggleSign);
    }

    fn divides_by_zero(&self, key: Key) -> bool {
        matches!(key, Key::Equals | Key::Operator(_))
            && self.state.operator() == Some(Operator::Divide)
            && !self.state.entry().is_empty()
            && parse_operand(self.state.entry()) == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Digit;

    fn digit(n: u8) -> EntryKey {
        EntryKey::Digit(Digit::new(n).unwrap())
    }

    #[test]
    fn starts_in_initial_state() {
        let calc = Calculator::new();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.mode(), Mode::Idle);
        assert_eq!(calc.state(), &CalculatorState::new());
    }

    #[test]
    fn named_operations_chain_left_to_right() {
        let mut calc = Calculator::new();
        calc.clear();
        calc.digit(digit(5));
        calc.operator(Operator::Add);
        calc.digit(digit(3));
        calc.operator(Operator::Multiply);
        calc.digit(digit(2));
        calc.equals();

        assert_eq!(calc.display(), "16");
        assert_eq!(calc.mode(), Mode::Idle);
    }

    #[test]
    fn divide_by_zero_displays_zero() {
        let mut calc = Calculator::new();
        calc.clear();
        calc.digit(digit(7));
        calc.operator(Operator::Divide);
        calc.digit(digit(0));
        calc.equals();

        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn square_root_of_nine() {
        let mut calc = Calculator::new();
        calc.clear();
        calc.digit(digit(9));
        calc.square_root();

        assert_eq!(calc.display(), "3");
    }

    #[test]
    fn toggle_sign_twice_restores_entry() {
        let mut calc = Calculator::new();
        calc.press_labels(["4", ".", "2"]).unwrap();
        calc.toggle_sign();
        assert_eq!(calc.display(), "-4.2");
        calc.toggle_sign();
        assert_eq!(calc.display(), "4.2");
    }

    #[test]
    fn custom_labels_render_non_finite_results() {
        let config = DisplayConfig {
            nan_label: "Error".to_string(),
            infinity_label: "Overflow".to_string(),
        };
        let mut calc = Calculator::with_config(config);

        assert_eq!(calc.press_labels(["9", "+/-", "√"]).unwrap(), "Error");
        calc.clear();

        let huge = ["1", "0", "0", "0", "0", "0", "0", "0", "0", "0"];
        calc.press_labels(huge).unwrap();
        for _ in 0..40 {
            calc.press_labels(["×", "1", "0", "0", "0", "0", "0", "0", "0", "0", "0"])
                .unwrap();
        }
        assert_eq!(calc.press_labels(["="]).unwrap(), "Overflow");
    }

    #[test]
    fn config_reports_labels_in_use() {
        assert_eq!(Calculator::new().config(), &DisplayConfig::default());

        let config = DisplayConfig {
            nan_label: "Error".to_string(),
            ..DisplayConfig::default()
        };
        let calc = Calculator::with_config(config.clone());
        assert_eq!(calc.config(), &config);
        assert_eq!(calc.config().infinity_label, "Infinity");
    }

    #[test]
    fn unknown_label_leaves_state_untouched() {
        let mut calc = Calculator::new();
        calc.press_labels(["1", "+"]).unwrap();
        let before = calc.state().clone();

        let result = calc.press_labels(["2", "%"]);

        assert_eq!(result, Err(KeyError::UnknownLabel("%".to_string())));
        assert_eq!(calc.state(), &before);
    }

    #[test]
    fn press_all_returns_display() {
        let mut calc = Calculator::new();
        let keys = [
            Key::Entry(digit(8)),
            Key::Operator(Operator::Subtract),
            Key::Entry(digit(3)),
        ];
        assert_eq!(calc.press_all(keys), "8 - 3");
    }

    #[test]
    fn absorbed_keys_do_not_change_state() {
        let mut calc = Calculator::new();
        let initial = calc.state().clone();

        calc.equals();
        calc.toggle_sign();

        assert_eq!(calc.state(), &initial);
    }
}
