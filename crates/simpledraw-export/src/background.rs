//! Background saves
//!
//! Encoding and writing can take long enough to stall a UI thread, so hosts
//! may run them on tokio's blocking pool. A started save cannot be cancelled.

use crate::writer::FileWriter;
use simpledraw_core::{CanvasSnapshot, ExportError};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Start saving `snapshot` to `path` on the blocking pool.
///
/// Must be called from within a tokio runtime.
pub fn spawn_save(
    writer: FileWriter,
    path: PathBuf,
    snapshot: Arc<CanvasSnapshot>,
) -> JoinHandle<Result<PathBuf, ExportError>> {
    debug!("Dispatching background save to {}", path.display());
    tokio::task::spawn_blocking(move || writer.save(&path, &snapshot))
}

/// Save on the blocking pool and wait for the result.
pub async fn save_in_background(
    writer: FileWriter,
    path: PathBuf,
    snapshot: Arc<CanvasSnapshot>,
) -> Result<PathBuf, ExportError> {
    spawn_save(writer, path, snapshot)
        .await
        .map_err(|e| ExportError::Task {
            reason: e.to_string(),
        })?
}

#[cfg(test)]
mod tests {
    use super::*;
    use simpledraw_core::Rgba;

    #[tokio::test]
    async fn test_background_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bg.svg");
        let snapshot = Arc::new(CanvasSnapshot::new(8, 8, Rgba::WHITE));

        let written = save_in_background(FileWriter::default(), path.clone(), snapshot)
            .await
            .unwrap();

        assert!(written.ends_with("bg.svg"));
        assert!(path.is_file());
    }

    #[tokio::test]
    async fn test_background_save_reports_failure() {
        let snapshot = Arc::new(CanvasSnapshot::new(8, 8, Rgba::WHITE));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bg.unknown");

        let err = save_in_background(FileWriter::default(), path, snapshot)
            .await
            .unwrap_err();
        assert!(matches!(err, ExportError::UnsupportedFormat { .. }));
    }
}
