//! # SimpleDraw
//!
//! Export side of the SimpleDraw drawing app: the "Save as" dialog that
//! names a drawing after the recording it belongs to and writes it as PNG,
//! JPEG or SVG.
//!
//! ## Architecture
//!
//! SimpleDraw is organized as a workspace with multiple crates:
//!
//! 1. **simpledraw-core** - Errors, formats, save requests, filename rules, canvas model
//! 2. **simpledraw-export** - File writer: rasterization, encoding, SVG, media index
//! 3. **simpledraw-settings** - Persisted export preferences
//! 4. **simpledraw-ui** - Toolkit-independent save dialog controller
//! 5. **simpledraw** - This facade, plus logging setup

pub use simpledraw_core::{
    is_valid_filename, suggested_filename, CanvasSnapshot, ExportError, ExportFormat,
    RecordingInfo, Rgba, SaveOutcome, SaveRequest, Stroke, ValidationError,
};

pub use simpledraw_export::{
    save_in_background, spawn_save, Encoding, FileWriter, MediaIndex, NoopMediaIndex,
    RecentExports, JPEG_QUALITY,
};

pub use simpledraw_settings::{
    default_save_directory, Config, ExportSettings, RecordingDefaults, SettingsError,
    SettingsManager,
};

pub use simpledraw_ui::{
    humanize_path, Clock, ConfirmOutcome, DialogHost, DialogParams, DialogPhase,
    DirectoryPicker, FixedClock, Notice, Notifier, SaveImageDialog, SystemClock,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
