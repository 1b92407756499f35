//! Conversions between operand text and numbers.
//!
//! Formatting follows the conventions of a pocket calculator display:
//! shortest round-trip digits, no trailing `.0`, `0` for negative zero, and
//! exponent notation (`1e+21`, `1e-7`) only for very large or very small
//! magnitudes.

use crate::config::DisplayConfig;

/// Magnitude at and above which exponent notation is used.
const EXPONENT_ABOVE: f64 = 1e21;

/// Magnitude below which exponent notation is used.
const EXPONENT_BELOW: f64 = 1e-6;

/// Parse operand text typed on the keypad.
///
/// Reads the longest leading decimal literal and ignores the rest, so an
/// exponent-form entry with a point typed after it (`"1e-7."`) keeps its
/// value. Partial entries with no digits yet (`"."`, `"-"`, `"-."`) read as
/// zero. Text with no leading literal at all reads as NaN.
pub fn parse_operand(text: &str) -> f64 {
    let literal = &text[..literal_len(text)];
    literal.parse::<f64>().unwrap_or_else(|_| {
        let unsigned = text.strip_prefix('-').unwrap_or(text);
        if unsigned.is_empty() || unsigned == "." {
            0.0
        } else {
            f64::NAN
        }
    })
}

/// Byte length of the leading `[-]digits[.digits][e[+-]digits]` literal.
fn literal_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'-' | b'+')));
    let whole = digits_from(end);
    end += whole;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits_from(end + 1);
        end += 1 + fraction;
    }

    if whole + fraction == 0 {
        return end;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let signed = usize::from(matches!(bytes.get(end + 1), Some(b'-' | b'+')));
        let exponent = digits_from(end + 1 + signed);
        if exponent > 0 {
            end += 1 + signed + exponent;
        }
    }

    end
}

/// Format a finite value. Non-finite input falls back to Rust's own
/// rendering; use [`format_number`] when the value may be NaN or infinite.
pub fn format_finite(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (EXPONENT_BELOW..EXPONENT_ABOVE).contains(&magnitude) {
        value.to_string()
    } else {
        exponential(value)
    }
}

/// Format any value, rendering NaN and infinities with the configured labels.
///
/// # Example
///
/// ```rust
/// use sumpad::config::DisplayConfig;
/// use sumpad::core::format_number;
///
/// let config = DisplayConfig::default();
/// assert_eq!(format_number(16.0, &config), "16");
/// assert_eq!(format_number(0.1 + 0.2, &config), "0.30000000000000004");
/// assert_eq!(format_number(f64::NAN, &config), "NaN");
/// assert_eq!(format_number(f64::NEG_INFINITY, &config), "-Infinity");
/// ```
pub fn format_number(value: f64, config: &DisplayConfig) -> String {
    if value.is_nan() {
        config.nan_label.clone()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            config.infinity_label.clone()
        } else {
            format!("-{}", config.infinity_label)
        }
    } else {
        format_finite(value)
    }
}

fn exponential(value: f64) -> String {
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}
