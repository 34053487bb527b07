use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use tapjourney_types::ui::UiOptions;

/// Environment override forcing the high-contrast palette.
pub const HIGH_CONTRAST_ENV: &str = "TAPJOURNEY_HIGH_CONTRAST";
/// Environment override forcing ASCII-only rendering.
pub const ASCII_ONLY_ENV: &str = "TAPJOURNEY_ASCII";

/// Contents of `~/.tapjourney/config.toml`.
///
/// ```toml
/// [app]
/// ascii_only = false
/// high_contrast = true
/// reduced_motion = false
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct JourneyConfig {
    pub app: Option<AppConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs, borders and scene art.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable the dialog entrance animations.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl JourneyConfig {
    /// Load the config from its default location. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// UI options from the `[app]` table, before environment overrides.
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
                reduced_motion: app.reduced_motion,
            })
            .unwrap_or_default()
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".tapjourney").join("config.toml"))
}

/// Resolve the effective UI options: config file first, then environment.
#[must_use]
pub fn resolve_ui_options(config: Option<&JourneyConfig>) -> UiOptions {
    let base = config.map(JourneyConfig::ui_options).unwrap_or_default();
    apply_env_overrides(base, |key| env::var(key).ok())
}

/// Environment variables can only switch options on.
pub fn apply_env_overrides<F>(mut options: UiOptions, lookup: F) -> UiOptions
where
    F: Fn(&str) -> Option<String>,
{
    if lookup(HIGH_CONTRAST_ENV).is_some_and(|raw| is_truthy(&raw)) {
        options.high_contrast = true;
    }
    if lookup(ASCII_ONLY_ENV).is_some_and(|raw| is_truthy(&raw)) {
        options.ascii_only = true;
    }
    options
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
