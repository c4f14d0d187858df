//! Dialog controllers and the host seams they talk through.

pub mod host;
pub mod notice;
pub mod paths;
pub mod save_image_dialog;
