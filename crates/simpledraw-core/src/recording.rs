//! Recording metadata and the save request built from it.

use crate::error::ValidationError;
use crate::filename::{is_valid_filename, suggested_filename};
use crate::format::ExportFormat;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Metadata identifying the recording a drawing belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingInfo {
    /// Trial number
    pub trial: i32,
    /// Subject identifier
    pub subject: String,
    /// Electrode name
    pub electrode: String,
}

impl RecordingInfo {
    pub fn new(trial: i32, subject: impl Into<String>, electrode: impl Into<String>) -> Self {
        Self {
            trial,
            subject: subject.into(),
            electrode: electrode.into(),
        }
    }

    /// Suggested file name (without extension) for this recording at `at`.
    pub fn suggested_filename(&self, at: NaiveDateTime) -> String {
        suggested_filename(self, at)
    }
}

/// One export operation, built when the user confirms the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub recording: RecordingInfo,
    /// Directory the file is written into
    pub directory: PathBuf,
    /// File name without extension
    pub filename: String,
    pub format: ExportFormat,
}

impl SaveRequest {
    /// Build a request, rejecting empty or illegal file names.
    pub fn new(
        recording: RecordingInfo,
        directory: impl Into<PathBuf>,
        filename: impl Into<String>,
        format: ExportFormat,
    ) -> Result<Self, ValidationError> {
        let filename = filename.into();
        if filename.is_empty() {
            return Err(ValidationError::EmptyFilename);
        }

        let request = Self {
            recording,
            directory: directory.into(),
            filename,
            format,
        };

        let file_name = request.file_name();
        if !is_valid_filename(&file_name) {
            return Err(ValidationError::InvalidFilenameCharacters {
                filename: file_name,
            });
        }

        Ok(request)
    }

    /// File name with extension, e.g. `3_P1_Fz_2024-01-01_10-00-00.png`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.filename, self.format.extension())
    }

    /// Full destination path: `directory/filename.ext`.
    pub fn destination(&self) -> PathBuf {
        self.directory.join(self.file_name())
    }
}

/// What the dialog reports to its host after a successful save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    /// Absolute path of the written file
    pub path: PathBuf,
    /// Extension of the written file (`png`, `jpg` or `svg`)
    pub extension: String,
    pub subject: String,
    pub electrode: String,
    pub trial: i32,
}

impl SaveOutcome {
    /// Outcome for `request`, written to `path`.
    pub fn new(request: &SaveRequest, path: PathBuf) -> Self {
        Self {
            path,
            extension: request.format.extension().to_string(),
            subject: request.recording.subject.clone(),
            electrode: request.recording.electrode.clone(),
            trial: request.recording.trial,
        }
    }

    /// Recording metadata carried by the outcome.
    pub fn recording(&self) -> RecordingInfo {
        RecordingInfo::new(self.trial, self.subject.clone(), self.electrode.clone())
    }
}
