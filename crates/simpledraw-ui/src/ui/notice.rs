//! Transient user-facing messages (toasts).

use simpledraw_core::ValidationError;
use std::path::PathBuf;

/// A message the host shows briefly and then discards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Input was rejected; the dialog stays open
    Invalid(ValidationError),
    /// A raster file was written
    Saved(PathBuf),
    /// The write failed; the dialog stays open
    UnknownError,
}

impl From<ValidationError> for Notice {
    fn from(err: ValidationError) -> Self {
        Notice::Invalid(err)
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::Invalid(err) => write!(f, "{}", err),
            Notice::Saved(path) => write!(f, "{} saved successfully.", path.display()),
            Notice::UnknownError => write!(f, "An unknown error occurred"),
        }
    }
}
