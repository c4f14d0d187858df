//! Media index notification
//!
//! After a file is written the host's media index is asked to pick it up so
//! galleries and file browsers show it without a manual refresh.

use simpledraw_core::{thread_safe_vec, ThreadSafeVec};
use std::io;
use std::path::{Path, PathBuf};

/// Something that indexes freshly written media files.
///
/// Called from whichever thread performed the write.
pub trait MediaIndex: Send + Sync {
    /// Register `path` with the index.
    fn scan(&self, path: &Path) -> io::Result<()>;
}

/// Index that does nothing, for hosts without a media database.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMediaIndex;

impl MediaIndex for NoopMediaIndex {
    fn scan(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }
}

/// In-process index of recently exported files, newest first.
#[derive(Debug, Clone)]
pub struct RecentExports {
    entries: ThreadSafeVec<PathBuf>,
    capacity: usize,
}

impl RecentExports {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: thread_safe_vec(),
            capacity,
        }
    }

    /// Snapshot of the indexed paths, newest first.
    pub fn entries(&self) -> Vec<PathBuf> {
        self.entries.lock().clone()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.lock().iter().any(|p| p == path)
    }
}

impl Default for RecentExports {
    fn default() -> Self {
        Self::new(10)
    }
}

impl MediaIndex for RecentExports {
    fn scan(&self, path: &Path) -> io::Result<()> {
        if !path.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is not a file", path.display()),
            ));
        }

        let mut entries = self.entries.lock();
        entries.retain(|p| p != path);
        entries.insert(0, path.to_path_buf());
        entries.truncate(self.capacity);
        Ok(())
    }
}
