//! # SimpleDraw Export
//!
//! Writes a [`CanvasSnapshot`](simpledraw_core::CanvasSnapshot) to disk.
//!
//! - [`writer`]: the file writer (directory creation, format dispatch, media rescan)
//! - [`raster`]: tiny-skia rasterization and PNG/JPEG encoding
//! - [`svg`]: vector serialization
//! - [`media`]: the media-index seam notified after each write
//! - [`background`]: running a save on a blocking tokio task

pub mod background;
pub mod media;
pub mod raster;
pub mod svg;
pub mod writer;

pub use background::{save_in_background, spawn_save};
pub use media::{MediaIndex, NoopMediaIndex, RecentExports};
pub use raster::{encode_raster, render_snapshot, JPEG_QUALITY};
pub use svg::render_svg;
pub use writer::{ensure_parent_dir, Encoding, FileWriter};
