//! Keypad Demo
//!
//! Presses the button labels given on the command line and prints the
//! display after each one, like a presentation layer would render it.
//!
//! Run with: cargo run --example keypad -- 5 + 3 × 2 =
//! Set RUST_LOG=sumpad=debug to see each transition, and
//! SUMPAD_CONFIG='{"nan_label":"Error"}' to change the markers.

use sumpad::core::Key;
use sumpad::{Calculator, DisplayConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let labels: Vec<String> = std::env::args().skip(1).collect();
    if labels.is_empty() {
        println!("Usage: keypad <label>...");
        println!("Labels: 0-9 . + - × ÷ = C √ +/-");
        return;
    }

    let config = match std::env::var("SUMPAD_CONFIG") {
        Ok(json) => DisplayConfig::from_json(&json).unwrap_or_else(|e| {
            eprintln!("Ignoring SUMPAD_CONFIG: {e}");
            DisplayConfig::default()
        }),
        Err(_) => DisplayConfig::default(),
    };

    let mut calc = Calculator::with_config(config);
    println!(
        "Markers: NaN as '{}', infinity as '{}'\n",
        calc.config().nan_label,
        calc.config().infinity_label
    );
    println!("{:>6}  {}", "", calc.display());

    for label in &labels {
        match label.parse::<Key>() {
            Ok(key) => {
                calc.press(key);
                println!("{:>6}  {}", label, calc.display());
            }
            Err(e) => println!("{:>6}  (skipped: {e})", label),
        }
    }
}
