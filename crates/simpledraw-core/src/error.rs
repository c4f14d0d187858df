//! Error handling for SimpleDraw exports
//!
//! Provides error types for both halves of a save:
//! - Validation errors (user input in the save dialog)
//! - Export errors (directory creation, encoding, writing)
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Validation error type
///
/// Raised while the user edits the save dialog or confirms it. None of these
/// close the dialog; they are shown as a transient notice and the user can
/// correct the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field was cleared
    #[error("{field} cannot be empty")]
    EmptyField {
        /// Name of the field that was left empty.
        field: String,
    },

    /// A numeric text field holds something that is not a number
    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber {
        /// Name of the numeric field.
        field: String,
        /// The rejected text.
        value: String,
    },

    /// The filename box is empty on confirm
    #[error("Filename cannot be empty")]
    EmptyFilename,

    /// The filename contains characters the file system will not accept
    #[error("Filename contains invalid characters: {filename}")]
    InvalidFilenameCharacters {
        /// The rejected file name, extension included.
        filename: String,
    },
}

/// Export error type
///
/// Represents failures of the file writer. The dialog reports every one of
/// these with the same generic notice and stays open.
#[derive(Error, Debug, Clone)]
pub enum ExportError {
    /// The destination's parent directory was missing and could not be created
    #[error("Failed to create directory {path:?}: {reason}")]
    DirectoryCreation {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O failure.
        reason: String,
    },

    /// The destination extension has no encoder
    #[error("Unsupported export format: {extension}")]
    UnsupportedFormat {
        /// The extension that was requested (may be empty).
        extension: String,
    },

    /// The canvas could not be rendered
    #[error("Invalid canvas: {reason}")]
    InvalidCanvas {
        /// Why the canvas could not be rendered.
        reason: String,
    },

    /// The encoder failed to produce bytes
    #[error("Encoding failed: {reason}")]
    Encode {
        /// Encoder failure message.
        reason: String,
    },

    /// The encoded bytes could not be written
    #[error("Failed to write {path:?}: {reason}")]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O failure.
        reason: String,
    },

    /// The background task running the write was lost
    #[error("Export task failed: {reason}")]
    Task {
        /// Join failure message.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::EmptyField {
            field: "Subject".to_string(),
        };
        assert_eq!(err.to_string(), "Subject cannot be empty");

        let err = ValidationError::InvalidNumber {
            field: "Trial".to_string(),
            value: "three".to_string(),
        };
        assert_eq!(err.to_string(), "Trial must be a number, got 'three'");

        assert_eq!(
            ValidationError::EmptyFilename.to_string(),
            "Filename cannot be empty"
        );
    }

    #[test]
    fn test_export_error_display() {
        let err = ExportError::UnsupportedFormat {
            extension: "bmp".to_string(),
        };
        assert_eq!(err.to_string(), "Unsupported export format: bmp");

        let err = ExportError::Encode {
            reason: "buffer too small".to_string(),
        };
        assert_eq!(err.to_string(), "Encoding failed: buffer too small");
    }
}
