//! Export preferences
//!
//! Stored as JSON or TOML (picked by file extension) and validated on load
//! and save. Sections:
//! - Export settings (last saved file, last format)
//! - Recording defaults (trial, subject, electrode prefilled in the dialog)

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use simpledraw_core::{ExportFormat, RecordingInfo, SaveOutcome};
use std::path::{Path, PathBuf};

/// Folder name used under the pictures directory when nothing was saved yet.
pub const DEFAULT_FOLDER_NAME: &str = "Simple Draw";

/// Default save directory: `<pictures or home>/Simple Draw`.
pub fn default_save_directory() -> PathBuf {
    dirs::picture_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_FOLDER_NAME)
}

/// Where and how the last export happened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Full path of the last saved file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_save_path: Option<PathBuf>,
    /// Extension of the last saved file, suggested for the next save
    pub last_save_extension: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            last_save_path: None,
            last_save_extension: ExportFormat::Png.extension().to_string(),
        }
    }
}

impl ExportSettings {
    /// Previous save path as the dialog expects it (empty when never saved).
    pub fn previous_path(&self) -> String {
        self.last_save_path
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Recording metadata prefilled in the next dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingDefaults {
    pub trial: i32,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub electrode: String,
}

impl Default for RecordingDefaults {
    fn default() -> Self {
        Self {
            trial: 1,
            subject: String::new(),
            electrode: String::new(),
        }
    }
}

impl From<&RecordingDefaults> for RecordingInfo {
    fn from(defaults: &RecordingDefaults) -> Self {
        RecordingInfo::new(
            defaults.trial,
            defaults.subject.clone(),
            defaults.electrode.clone(),
        )
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub export: ExportSettings,
    #[serde(default)]
    pub recording: RecordingDefaults,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match config_extension(path)? {
            "json" => serde_json::from_str(&content)?,
            _ => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match config_extension(path)? {
            "json" => serde_json::to_string_pretty(self)?,
            _ => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if ExportFormat::from_extension(&self.export.last_save_extension).is_none() {
            return Err(SettingsError::InvalidSetting {
                key: "export.last_save_extension".to_string(),
                reason: format!("unknown format '{}'", self.export.last_save_extension),
            });
        }

        if let Some(path) = &self.export.last_save_path {
            if path.file_name().is_none() {
                return Err(SettingsError::InvalidSetting {
                    key: "export.last_save_path".to_string(),
                    reason: format!("'{}' does not name a file", path.display()),
                });
            }
        }

        Ok(())
    }

    /// Remember a successful save so the next dialog starts from it.
    pub fn record_save(&mut self, outcome: &SaveOutcome) {
        self.export.last_save_path = Some(outcome.path.clone());
        self.export.last_save_extension = outcome.extension.clone();
        let recording = outcome.recording();
        self.recording = RecordingDefaults {
            trial: recording.trial,
            subject: recording.subject,
            electrode: recording.electrode,
        };
    }

    /// Recording metadata to prefill.
    pub fn recording_info(&self) -> RecordingInfo {
        RecordingInfo::from(&self.recording)
    }
}

fn config_extension(path: &Path) -> SettingsResult<&'static str> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ok("json"),
        Some("toml") => Ok("toml"),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or_default().to_string(),
        )),
    }
}
