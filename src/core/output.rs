//! Error output for the command line.
//!
//! # Design Principles
//! - **Consistent color scheme**: red for errors and remediation hints
//! - **Standardized spacing**: blank line before and after an error block

use crate::core::error::StatusOfManyError;
use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints an error followed by the steps that fix it
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///   <hint line 1>
///   <hint line 2>
///
/// ```
pub fn print_error_with_hint(message: &str, hint: &[&str]) {
    println!("\n{} {}", "✕ Error:".red(), message.white());
    for line in hint {
        println!("  {}", line.red());
    }
    println!();
}

/// Report a failed run and return the process exit code.
///
/// Configuration errors are printed with their remediation hint and exit 1.
/// Anything else, such as a closed stdout, is only logged and exits 0.
pub fn report_failure(error: &StatusOfManyError) -> i32 {
    if !error.is_configuration_error() {
        log::warn!("{error}");
        return 0;
    }

    let hint = error.remediation_hint();
    if hint.is_empty() {
        print_error(&error.to_string());
    } else {
        print_error_with_hint(&error.to_string(), hint);
    }
    1
}
