use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::assets::DisplaySize;
use crate::error::ConfigError;

/// Looked up in the working directory at startup.
pub const CONFIG_FILE_NAME: &str = "first_aid.json";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub fn as_tracing(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Application settings. Every field has a default, so the file is optional
/// and may name only the keys it wants to change.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    /// Image paths in the content are resolved against this directory.
    pub asset_root: PathBuf,
    pub image_width: u32,
    pub image_height: u32,
    pub max_image_bytes: u64,
    /// JSON topic list replacing the built-in catalog.
    pub content_file: Option<PathBuf>,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "First Aid Expert System".to_string(),
            window_width: 850,
            window_height: 650,
            asset_root: PathBuf::from("."),
            image_width: 400,
            image_height: 250,
            max_image_bytes: 8 * 1024 * 1024,
            content_file: None,
            log_level: LogLevel::Info,
        }
    }
}

impl AppConfig {
    /// Reads `path`, falling back to defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read, parsed or
    /// validated.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed or validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_title.trim().is_empty() {
            return Err(ConfigError::Invalid("window_title cannot be empty"));
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::Invalid("window size must be > 0"));
        }
        if self.image_width == 0 || self.image_height == 0 {
            return Err(ConfigError::Invalid("image size must be > 0"));
        }
        if self.max_image_bytes == 0 {
            return Err(ConfigError::Invalid("max_image_bytes must be > 0"));
        }
        Ok(())
    }

    #[must_use]
    pub fn image_size(&self) -> DisplaySize {
        DisplaySize {
            width: self.image_width,
            height: self.image_height,
        }
    }
}
