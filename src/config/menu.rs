use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::menu::SessionOptions;

/// Settings of the interactive menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MenuConfig {
    /// Title shown above every menu.
    #[serde(default = "default_title")]
    pub title: String,

    /// Inputs that end the session, compared case-insensitively.
    #[serde(default = "default_quit_tokens")]
    pub quit_tokens: Vec<String>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            quit_tokens: default_quit_tokens(),
        }
    }
}

impl From<&MenuConfig> for SessionOptions {
    fn from(config: &MenuConfig) -> Self {
        Self {
            title: config.title.clone(),
            quit_tokens: config.quit_tokens.clone(),
        }
    }
}

fn default_title() -> String {
    "Data Analysis Menu".to_string()
}

fn default_quit_tokens() -> Vec<String> {
    SessionOptions::default().quit_tokens
}
