//! Progress narration and diagnostics.
//!
//! Warnings and errors always go to stderr so they never mix with changelog
//! content on stdout; status lines are suppressed by the quiet flag.

use console::style;

/// Print a progress line unless quiet mode is on.
pub fn display_status(quiet: bool, message: &str) {
    if !quiet {
        println!("{} {}", style("=>").yellow(), message);
    }
}

/// Print a non-fatal warning to stderr.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), message);
}

/// Print an error to stderr.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}
