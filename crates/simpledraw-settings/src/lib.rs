//! SimpleDraw Settings Crate
//!
//! Persists export preferences between save dialogs: where the last file
//! went, which format it used, and the recording metadata entered last.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{default_save_directory, Config, ExportSettings, RecordingDefaults};
pub use error::{SettingsError, SettingsResult};
pub use manager::SettingsManager;
