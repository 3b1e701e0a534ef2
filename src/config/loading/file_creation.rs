use std::{fs, path::Path};

use crate::config::{Config, ConfigError};

const HEADER: &str = "# datamenu configuration file\n# Every value below is the default.\n\n";

/// Creates a configuration file holding the defaults if it doesn't exist
pub fn create_default_config_file(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::Create {
            path: parent.to_path_buf(),
            details: e.to_string(),
        })?;
    }

    let defaults = toml::to_string(&Config::default()).map_err(|e| ConfigError::Create {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    fs::write(path, format!("{HEADER}{defaults}")).map_err(|e| ConfigError::Create {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    Ok(())
}
