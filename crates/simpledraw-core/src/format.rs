//! Export formats offered by the save dialog.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// File format a canvas can be exported to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Lossless raster image
    #[default]
    Png,
    /// Lossy raster image
    Jpeg,
    /// Vector drawing
    Svg,
}

impl ExportFormat {
    /// Extension written after the file name, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Svg => "svg",
        }
    }

    /// True for formats written by the vector serializer.
    pub fn is_vector(self) -> bool {
        matches!(self, Self::Svg)
    }

    /// Parse an extension (with or without a leading dot, any case).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "svg" => Some(Self::Svg),
            _ => None,
        }
    }

    /// Format for a path, taken from its extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Format preselected for a host-suggested extension.
    ///
    /// Anything that is not `jpg` or `svg` falls back to PNG.
    pub fn from_suggested(ext: &str) -> Self {
        match ext {
            "jpg" => Self::Jpeg,
            "svg" => Self::Svg,
            _ => Self::Png,
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Png => write!(f, "PNG"),
            Self::Jpeg => write!(f, "JPG"),
            Self::Svg => write!(f, "SVG"),
        }
    }
}
