//! Styling helpers for console text.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// A `=== text ===` header.
#[must_use]
pub fn header(text: &str, color: bool) -> String {
    let plain = format!("=== {text} ===");
    if color {
        style(plain).bold().cyan().to_string()
    } else {
        plain
    }
}

/// A success line.
#[must_use]
pub fn success(text: &str, color: bool) -> String {
    if color {
        style(text).green().bold().to_string()
    } else {
        text.to_string()
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
