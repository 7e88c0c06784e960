//! Formatting and printing functions for console output.
//!
//! The `*_line` functions are pure and return exactly what gets printed, so the
//! console contract can be tested without capturing stdout.

use console::style;

use crate::domain::Tag;

/// `New tag name: <tag>`
pub fn new_tag_line(tag: &Tag) -> String {
    format!("New tag name: {}", tag)
}

/// `Previous tag name: <tag>`, with nothing after the colon on a first deploy
pub fn previous_tag_line(tag: Option<&Tag>) -> String {
    format!(
        "Previous tag name: {}",
        tag.map(Tag::as_str).unwrap_or_default()
    )
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

pub fn display_new_tag(tag: &Tag) {
    println!("{}", new_tag_line(tag));
}

pub fn display_previous_tag(tag: Option<&Tag>) {
    println!("{}", previous_tag_line(tag));
}

/// Print the composed chat message exactly as it will be published.
pub fn display_message(message: &str) {
    println!("{}", message);
}
