//! Key parsing errors.

use thiserror::Error;

/// Errors that can occur when turning a button label or value into a key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("Digit value {0} is out of range, expected 0-9")]
    DigitOutOfRange(u8),

    #[error("Character '{0}' is not a digit or decimal point")]
    NotAnEntryKey(char),

    #[error("Unknown key label '{0}'")]
    UnknownLabel(String),
}
