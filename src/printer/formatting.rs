//! ANSI styling for titles, prompts, warnings and errors.

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
    /// Bright red color
    pub const BRIGHT_RED: &'static str = "\x1b[91m";
    /// Bright yellow color
    pub const BRIGHT_YELLOW: &'static str = "\x1b[93m";
}

fn paint(codes: &[&str], text: &str) -> String {
    let mut painted = codes.concat();
    painted.push_str(text);
    painted.push_str(Colors::RESET);
    painted
}

/// Bold cyan, for menu titles.
pub fn format_header(text: &str) -> String {
    paint(&[Colors::BOLD, Colors::CYAN], text)
}

/// Dimmed, for input prompts.
pub fn format_prompt(text: &str) -> String {
    paint(&[Colors::DIM], text)
}

/// Bright yellow.
pub fn format_warning(text: &str) -> String {
    paint(&[Colors::BRIGHT_YELLOW], text)
}

/// Bright red, also used by the binary for fatal errors.
pub fn format_error(text: &str) -> String {
    paint(&[Colors::BRIGHT_RED], text)
}
