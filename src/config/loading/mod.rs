mod file_creation;

use std::{fs, path::Path};

use tracing::{info, instrument};

use super::{Config, ConfigError, ConfigPaths};
use file_creation::create_default_config_file;

impl Config {
    /// Loads and validates the configuration file at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML is malformed or has values of the wrong type
    /// - A value fails validation
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml(&content).map_err(|e| match e {
            ConfigError::TomlParse { details, .. } => ConfigError::toml_parse(details, Some(path)),
            other => other,
        })?;

        info!("Loaded configuration");
        Ok(config)
    }

    /// Loads the configuration at `path`, writing a default file first if none exists
    ///
    /// # Errors
    ///
    /// Returns an error if the default file cannot be created or the
    /// existing file cannot be loaded.
    pub fn load_or_create(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            info!(path = %path.display(), "No configuration file found, creating default");
            create_default_config_file(path)?;
        }

        Self::load(path)
    }

    /// Loads the configuration from its standard location, creating it if needed
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConfigDir` if the location cannot be
    /// determined, otherwise the errors of [`Config::load_or_create`].
    pub fn load_default() -> Result<Config, ConfigError> {
        let path = ConfigPaths::main_config().map_err(ConfigError::NoConfigDir)?;
        Self::load_or_create(&path)
    }

    /// Parses and validates configuration from a TOML string
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or a value fails validation.
    pub fn from_toml(content: &str) -> Result<Config, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::toml_parse(e, None))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot rule out on its own
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidField` for the first offending value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data.preview_rows == 0 {
            return Err(ConfigError::invalid_field(
                "data.preview_rows",
                "must be at least 1",
            ));
        }

        if self.menu.title.trim().is_empty() {
            return Err(ConfigError::invalid_field("menu.title", "must not be empty"));
        }

        if let Some(token) = self
            .menu
            .quit_tokens
            .iter()
            .find(|token| token.trim().is_empty() || token.parse::<usize>().is_ok())
        {
            return Err(ConfigError::invalid_field(
                "menu.quit_tokens",
                format!("'{token}' would shadow a menu id"),
            ));
        }

        Ok(())
    }
}
