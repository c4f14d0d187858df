//! File writer
//!
//! Turns a canvas snapshot into a file at a destination path:
//! 1. Create the parent directory if it is missing
//! 2. Pick an encoding from the destination extension
//! 3. Encode in memory and write the bytes in a single attempt
//! 4. Ask the media index to rescan the new file

use crate::media::{MediaIndex, NoopMediaIndex};
use crate::{raster, svg};
use image::ImageFormat;
use simpledraw_core::{CanvasSnapshot, ExportError, ExportFormat};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// How a destination path will be encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Written by the SVG serializer
    Vector,
    /// Rasterized and encoded by the `image` crate
    Raster(ImageFormat),
}

impl Encoding {
    /// Encoding for `path`, decided by its extension.
    pub fn for_path(path: &Path) -> Result<Self, ExportError> {
        if ExportFormat::from_path(path).is_some_and(ExportFormat::is_vector) {
            return Ok(Self::Vector);
        }

        ImageFormat::from_path(path)
            .map(Self::Raster)
            .map_err(|_| ExportError::UnsupportedFormat {
                extension: path
                    .extension()
                    .map(|e| e.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            })
    }

    /// Produce the file contents for `snapshot`.
    pub fn encode(self, snapshot: &CanvasSnapshot) -> Result<Vec<u8>, ExportError> {
        match self {
            Self::Vector => Ok(svg::render_svg(snapshot).into_bytes()),
            Self::Raster(format) => {
                let image = raster::render_snapshot(snapshot)?;
                raster::encode_raster(&image, format)
            }
        }
    }
}

/// Create `path`'s parent directory (and its ancestors) if missing.
pub fn ensure_parent_dir(path: &Path) -> Result<(), ExportError> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if parent.is_dir() {
        return Ok(());
    }

    debug!("Creating export directory {}", parent.display());
    std::fs::create_dir_all(parent).map_err(|e| ExportError::DirectoryCreation {
        path: parent.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Writes canvas snapshots to disk
#[derive(Clone)]
pub struct FileWriter {
    media: Arc<dyn MediaIndex>,
}

impl FileWriter {
    /// Writer that notifies `media` after each successful write.
    pub fn new(media: Arc<dyn MediaIndex>) -> Self {
        Self { media }
    }

    /// Save `snapshot` to `path`, returning the absolute path written.
    pub fn save(&self, path: &Path, snapshot: &CanvasSnapshot) -> Result<PathBuf, ExportError> {
        ensure_parent_dir(path)?;

        let encoding = Encoding::for_path(path)?;
        let bytes = encoding.encode(snapshot)?;

        std::fs::write(path, &bytes).map_err(|e| ExportError::Write {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        if let Err(e) = self.media.scan(&absolute) {
            warn!("Media rescan failed for {}: {}", absolute.display(), e);
        }

        info!(
            "Saved {} ({:?}, {} bytes)",
            absolute.display(),
            encoding,
            bytes.len()
        );
        Ok(absolute)
    }

    /// Save and report only whether it worked.
    pub fn save_file(&self, path: &Path, snapshot: &CanvasSnapshot) -> bool {
        match self.save(path, snapshot) {
            Ok(_) => true,
            Err(e) => {
                error!("Failed to save {}: {}", path.display(), e);
                false
            }
        }
    }
}

impl Default for FileWriter {
    fn default() -> Self {
        Self::new(Arc::new(NoopMediaIndex))
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter").finish_non_exhaustive()
    }
}
