//! Configuration schema definitions and loading.
//!
//! Defines the complete configuration structure for datamenu. The file is
//! TOML, every field has a default, and command-line flags are applied on
//! top of the loaded values.

mod data;
mod error;
mod general;
mod loading;
mod menu;
mod paths;


pub use data::DataConfig;
pub use error::ConfigError;
pub use general::{GeneralConfig, LogLevel};
pub use menu::MenuConfig;
pub use paths::ConfigPaths;

use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};

/// Main configuration structure for datamenu.
///
/// Represents the complete configuration schema that can be loaded
/// from TOML files. All fields have sensible defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Interactive menu settings.
    #[serde(default)]
    pub menu: MenuConfig,

    /// Data file and preview settings.
    #[serde(default)]
    pub data: DataConfig,
}

impl Config {
    /// JSON schema describing the configuration file.
    pub fn json_schema() -> Schema {
        schema_for!(Config)
    }
}
