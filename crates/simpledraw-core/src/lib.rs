//! # SimpleDraw Core
//!
//! Core types shared by the SimpleDraw export crates: the error taxonomy,
//! export formats, recording metadata and save requests, filename rules,
//! and the canvas snapshot model the writers sample.

pub mod canvas;
pub mod error;
pub mod filename;
pub mod format;
pub mod recording;
pub mod types;

pub use canvas::{CanvasSnapshot, Rgba, Stroke};
pub use error::{ExportError, ValidationError};
pub use filename::{
    format_timestamp, is_valid_filename, suggested_filename, ILLEGAL_CHARACTERS, TIMESTAMP_FORMAT,
};
pub use format::ExportFormat;
pub use recording::{RecordingInfo, SaveOutcome, SaveRequest};

// Re-export type aliases for convenience
pub use types::{
    shared, shared_vec, thread_safe_vec, ListenerList, SaveCallback, Shared, SharedVec,
    ThreadSafeVec,
};
