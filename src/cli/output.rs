//! Shared CLI output helpers for consistent operator-facing text.

use std::fmt::Display;

use owo_colors::OwoColorize;

const RULE_WIDTH: usize = 56;

/// Print a section header and separator.
pub fn section(title: &str) {
    println!();
    println!("{}", title.bold());
    println!("{}", "─".repeat(RULE_WIDTH).dimmed());
}

/// Print a simple key/value line.
pub fn key_value(label: &str, value: impl Display) {
    println!("{:<18} {value}", label.dimmed());
}

/// Print a successful status line.
pub fn ok(message: &str) {
    println!("{} {message}", "✓".green());
}

/// Print a warning status line.
pub fn warn(message: &str) {
    println!("{} {message}", "⚠".yellow());
}

/// Print a single-line note.
pub fn note(message: &str) {
    println!("{message}");
}

/// Indent a multi-line block (tables) by two spaces.
pub fn block(text: &str) {
    for line in text.lines() {
        println!("  {line}");
    }
}
