//! Terminal output for bump-check.
//!
//! Errors and warnings go to stderr so CI logs surface them; progress goes
//! to stdout. `console` drops the colors when the stream is not a terminal.

use console::style;

use crate::check::CheckOutcome;
use crate::warning::BumpWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a warning in yellow.
pub fn display_warning(warning: &BumpWarning) {
    eprintln!("{} {}", style("WARNING:").yellow().bold(), warning);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with an arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Summarize a finished check.
///
/// Warnings are not repeated here; they are shown as the check finds them.
///
/// # Arguments
/// * `outcome` - Result of the check
/// * `path` - Descriptor path, for the closing line
pub fn display_outcome(outcome: &CheckOutcome, path: &str) {
    let short_base = if outcome.merge_base.len() > 7 {
        &outcome.merge_base[..7]
    } else {
        outcome.merge_base.as_str()
    };

    display_status(&format!(
        "Base version {} (merge-base {}), head version {}",
        style(&outcome.base_version).bold(),
        short_base,
        style(&outcome.head_version).bold()
    ));

    if outcome.written {
        display_success(&format!(
            "Wrote {} (bumped version {})",
            path,
            style(outcome.new_version).green()
        ));
    } else {
        display_status(&format!(
            "Dry run: {} not written (bumped version would be {})",
            path, outcome.new_version
        ));
    }
}
