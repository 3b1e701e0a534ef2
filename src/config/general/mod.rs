mod log_level;

pub use log_level::LogLevel;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// General configuration settings for the application.
///
/// Contains global settings that affect the overall behavior of the application,
/// such as logging and terminal colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeneralConfig {
    /// Logging level for the application.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Whether output uses ANSI colors.
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            color: default_color(),
        }
    }
}

fn default_color() -> bool {
    true
}
