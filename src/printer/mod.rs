//! Output formatting for the interactive menu.
//!
//! Everything the application shows to the user is expressed as an
//! [`Output`] value and turned into text by a [`Printer`]. Keeping the
//! formatting here means the menu engine and the analysis actions never
//! deal with ANSI codes or column alignment themselves.

pub mod formatting;
mod table;

#[cfg(test)]
mod tests;

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub use formatting::Colors;
pub use table::Table;

/// A single piece of output destined for the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// Text printed as-is.
    Plain(String),

    /// Informational message, such as a menu title.
    Info(String),

    /// Something worth noticing that did not stop the operation.
    Warning(String),

    /// An operation failed or the input was rejected.
    Error(String),

    /// Column-aligned rows.
    Table(Table),

    /// Structured data shown as pretty JSON.
    Json(Value),
}

impl Output {
    /// Creates a plain text output.
    pub fn plain(message: impl Into<String>) -> Self {
        Output::Plain(message.into())
    }

    /// Creates an informational output.
    pub fn info(message: impl Into<String>) -> Self {
        Output::Info(message.into())
    }

    /// Creates a warning output.
    pub fn warning(message: impl Into<String>) -> Self {
        Output::Warning(message.into())
    }

    /// Creates an error output.
    pub fn error(message: impl Into<String>) -> Self {
        Output::Error(message.into())
    }

    /// Presents record-shaped data in the requested style.
    ///
    /// Tables stay tables, the JSON style turns every row into an object
    /// keyed by header, and the plain style prints one `key=value` line
    /// per record.
    pub fn records(table: Table, style: OutputStyle) -> Self {
        match style {
            OutputStyle::Table => Output::Table(table),
            OutputStyle::Json => Output::Json(table.to_records()),
            OutputStyle::Plain => Output::Plain(table.to_plain_lines()),
        }
    }
}

/// How record-shaped results are presented.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// Column-aligned table.
    #[default]
    Table,

    /// Array of JSON objects.
    Json,

    /// One `key=value` line per record.
    Plain,
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputStyle::Table => write!(f, "table"),
            OutputStyle::Json => write!(f, "json"),
            OutputStyle::Plain => write!(f, "plain"),
        }
    }
}

/// Turns [`Output`] values into terminal text.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Printer {
    /// Creates a printer, optionally emitting ANSI colors.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Whether this printer emits ANSI escape codes.
    pub fn color(&self) -> bool {
        self.color
    }

    /// Renders an output into the text that should be written to the terminal.
    pub fn render(&self, output: &Output) -> String {
        match output {
            Output::Plain(message) => message.clone(),
            Output::Info(message) if self.color => formatting::format_header(message),
            Output::Info(message) => message.clone(),
            Output::Warning(message) => {
                let text = format!("[WARNING] {message}");
                if self.color {
                    formatting::format_warning(&text)
                } else {
                    text
                }
            }
            Output::Error(message) => {
                let text = format!("[ERROR] {message}");
                if self.color {
                    formatting::format_error(&text)
                } else {
                    text
                }
            }
            Output::Table(table) => table.render(),
            Output::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
        }
    }
}
