//! Settings file location and load/save helpers.

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const APP_DIR_NAME: &str = "simpledraw";
const CONFIG_FILE_NAME: &str = "settings.json";

/// Resolves the settings file and reads/writes it
pub struct SettingsManager;

impl SettingsManager {
    /// Platform config directory for SimpleDraw.
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config directory on this platform".to_string())
            })
    }

    /// Path of the settings file.
    pub fn config_file_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Create the config directory if missing.
    pub fn ensure_config_dir() -> SettingsResult<PathBuf> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir)
            .map_err(|e| SettingsError::ConfigDirectory(format!("{}: {}", dir.display(), e)))?;
        Ok(dir)
    }

    /// Load from `path`, falling back to defaults when the file is missing or bad.
    pub fn load_or_default(path: &Path) -> Config {
        if !path.exists() {
            debug!("No settings at {}, using defaults", path.display());
            return Config::default();
        }

        match Config::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring unreadable settings {}: {}", path.display(), e);
                Config::default()
            }
        }
    }

    /// Load from the platform settings file.
    pub fn load() -> Config {
        match Self::config_file_path() {
            Ok(path) => Self::load_or_default(&path),
            Err(e) => {
                warn!("{}", e);
                Config::default()
            }
        }
    }

    /// Write `config` to the platform settings file.
    pub fn save(config: &Config) -> SettingsResult<()> {
        Self::ensure_config_dir()?;
        config.save_to_file(&Self::config_file_path()?)
    }
}
