use crate::builtin::CURSED_ARENA;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error as ThisError;

/// Preference key the selected theme id is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "spectral-theme";

///
/// ConfigError
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

///
/// SpectralConfig
///
/// Root of `spectral.toml`. Every table is optional and unknown keys are
/// rejected.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpectralConfig {
    pub theme: ThemeConfig,
}

impl SpectralConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.theme.validate()?;

        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&raw)
    }
}

///
/// ThemeConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Theme used when no preference is stored or the stored id is unknown.
    pub default_theme: String,
    pub storage_key: String,

    /// Treat unparseable palette colors as audit failures.
    pub strict_colors: bool,
}

impl ThemeConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.default_theme.trim().is_empty() {
            return Err(ConfigError::Invalid("theme.default_theme is empty".into()));
        }
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("theme.storage_key is empty".into()));
        }

        Ok(())
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_theme: CURSED_ARENA.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            strict_colors: false,
        }
    }
}

///
/// TESTS
///
