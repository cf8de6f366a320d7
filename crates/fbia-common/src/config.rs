use serde::{Deserialize, Serialize};

use std::path::Path;
use std::path::PathBuf;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Rewrite the serializer's `<br></br>` pairs as `<br/>`.
    pub repair_line_breaks: bool,
    /// Console log filter, overridden by `RUST_LOG`.
    pub log_level: String,
}

impl Config {
    /// Loads the configuration from the provided loader.
    pub fn load(loader: &impl Loader) -> Result<Self, ConfigError> {
        loader.load()
    }
    /// Saves the configuration using the provided saver.
    pub fn save(&self, saver: &impl Saver) -> Result<(), ConfigError> {
        saver.save(self)
    }
}

impl Default for Config {
    /// Repair on, `info` logging (`debug` in debug builds).
    fn default() -> Self {
        let log_level = if cfg!(debug_assertions) {
            "debug"
        } else {
            "info"
        };
        Self {
            repair_line_breaks: true,
            log_level: log_level.to_owned(),
        }
    }
}

/// The trait for loading configuration data.
pub trait Loader {
    /// Loads the configuration data.
    fn load(&self) -> Result<Config, ConfigError>;
}

/// The trait for saving configuration data.
pub trait Saver {
    /// Saves the configuration data.
    fn save(&self, config: &Config) -> Result<(), ConfigError>;
}

/// An implementation of [`Loader`] and [`Saver`] that reads and writes a configuration file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a new [`FileStore`] with the given path.
    ///
    /// [`Config`] data will be serialized and deserialized using the file extension.
    /// Supports `.json` and `.toml` files.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format(&self) -> Result<Format, ConfigError> {
        match self.path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            _ => Err(ConfigError::UnsupportedFormat {
                path: self.path.clone(),
            }),
        }
    }

    fn read(&self) -> Result<String, ConfigError> {
        std::fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

enum Format {
    Json,
    Toml,
}

impl Loader for FileStore {
    fn load(&self) -> Result<Config, ConfigError> {
        let format = self.format()?;
        tracing::debug!(path = %self.path.display(), "loading config");
        let contents = self.read()?;
        match format {
            Format::Json => Ok(serde_json::from_str(&contents)?),
            Format::Toml => Ok(toml::from_str(&contents)?),
        }
    }
}

impl Saver for FileStore {
    fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let contents = match self.format()? {
            Format::Json => serde_json::to_string_pretty(config)?,
            Format::Toml => toml::to_string_pretty(config)?,
        };
        tracing::debug!(path = %self.path.display(), "saving config");
        std::fs::write(&self.path, contents).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
