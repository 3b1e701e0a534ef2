use std::{
    env, fs,
    io::{Error, ErrorKind},
    path::PathBuf,
};

const APP_NAME: &str = "datamenu";

/// Locations of the configuration file and the application data.
///
/// Configuration follows the XDG Base Directory layout. Logs live under
/// `$HOME/.datamenu`.
pub struct ConfigPaths;

impl ConfigPaths {
    /// Returns `$XDG_CONFIG_HOME/datamenu`, or `$HOME/.config/datamenu`
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` is set
    pub fn config_dir() -> Result<PathBuf, Error> {
        let base = match env::var_os("XDG_CONFIG_HOME") {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => home_dir()?.join(".config"),
        };

        Ok(base.join(APP_NAME))
    }

    /// Returns `$HOME/.datamenu`, creating it if missing
    ///
    /// # Errors
    /// Returns an error if `HOME` is not set or the directory cannot be created
    pub fn app_data_dir() -> Result<PathBuf, Error> {
        ensure_dir(home_dir()?.join(format!(".{APP_NAME}")))
    }

    /// Returns the log directory, creating it if missing
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created
    pub fn log_dir() -> Result<PathBuf, Error> {
        ensure_dir(Self::app_data_dir()?.join("logs"))
    }

    /// Returns the path of `config.toml` inside [`ConfigPaths::config_dir`]
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    pub fn main_config() -> Result<PathBuf, Error> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}

fn home_dir() -> Result<PathBuf, Error> {
    env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| Error::new(ErrorKind::NotFound, "HOME environment variable not set"))
}

fn ensure_dir(dir: PathBuf) -> Result<PathBuf, Error> {
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}
