use std::{
    fmt, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Errors that can occur while locating, creating or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Neither `XDG_CONFIG_HOME` nor `HOME` is set.
    #[error("cannot determine config directory: {0}")]
    NoConfigDir(io::Error),

    /// The configuration file could not be read.
    #[error("failed to read config '{}': {source}", path.display())]
    Read {
        /// File being read
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// The default configuration file could not be written.
    #[error("failed to create config '{}': {details}", path.display())]
    Create {
        /// File being created
        path: PathBuf,
        /// Failure details
        details: String,
    },

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParse {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// A field holds a value the application cannot use.
    #[error("invalid config field '{field}': {reason}")]
    InvalidField {
        /// The field that is invalid
        field: String,
        /// Reason why the field is invalid
        reason: String,
    },
}

impl ConfigError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        ConfigError::TomlParse {
            location,
            details: error.to_string(),
        }
    }

    /// Creates an invalid field error.
    pub fn invalid_field(field: &str, reason: impl fmt::Display) -> Self {
        ConfigError::InvalidField {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}
