//! The fixed vocabulary of user actions.
//!
//! A presentation layer forwards exactly one [`Key`] per button press.
//! Labels can be parsed with [`str::parse`], which accepts the symbols a
//! typical keypad prints on its buttons.

use super::error::KeyError;
use super::operator::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single decimal digit, `0` through `9`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Create a digit, rejecting values above nine.
    pub fn new(value: u8) -> Result<Self, KeyError> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(KeyError::DigitOutOfRange(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = KeyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// A key that edits the operand being typed: a digit or the decimal point.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum EntryKey {
    Digit(Digit),
    Point,
}

impl EntryKey {
    pub fn as_char(self) -> char {
        match self {
            Self::Digit(digit) => digit.as_char(),
            Self::Point => '.',
        }
    }
}

impl TryFrom<char> for EntryKey {
    type Error = KeyError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '.' => Ok(Self::Point),
            '0'..='9' => Ok(Self::Digit(Digit(c as u8 - b'0'))),
            other => Err(KeyError::NotAnEntryKey(other)),
        }
    }
}

/// One user action.
///
/// # Example
///
/// ```rust
/// use sumpad::core::{Key, Operator};
///
/// let key: Key = "÷".parse().unwrap();
/// assert_eq!(key, Key::Operator(Operator::Divide));
///
/// let keys: Vec<Key> = ["1", ".", "5", "+/-"]
///     .iter()
///     .map(|label| label.parse().unwrap())
///     .collect();
/// assert_eq!(keys.len(), 4);
/// assert!("%".parse::<Key>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Key {
    Entry(EntryKey),
    Operator(Operator),
    Equals,
    Clear,
    SquareRoot,
    ToggleSign,
}

impl From<EntryKey> for Key {
    fn from(key: EntryKey) -> Self {
        Self::Entry(key)
    }
}

impl From<Operator> for Key {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        let key = match label {
            "+" => Self::Operator(Operator::Add),
            "-" | "−" => Self::Operator(Operator::Subtract),
            "*" | "×" => Self::Operator(Operator::Multiply),
            "/" | "÷" => Self::Operator(Operator::Divide),
            "=" => Self::Equals,
            "C" | "c" => Self::Clear,
            "√" | "sqrt" => Self::SquareRoot,
            "+/-" | "±" => Self::ToggleSign,
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Entry(EntryKey::try_from(c).map_err(|_| {
                        KeyError::UnknownLabel(label.to_string())
                    })?),
                    _ => return Err(KeyError::UnknownLabel(label.to_string())),
                }
            }
        };
        Ok(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entry(key) => write!(f, "{}", key.as_char()),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Equals => f.write_str("="),
            Self::Clear => f.write_str("C"),
            Self::SquareRoot => f.write_str("√"),
            Self::ToggleSign => f.write_str("+/-"),
        }
    }
}
