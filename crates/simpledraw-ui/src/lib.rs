//! SimpleDraw UI Crate
//!
//! Widget-toolkit independent controllers. The host toolkit owns the actual
//! widgets and forwards their events here; the controllers answer through
//! the [`ui::host`] seams.

pub mod ui;

pub use ui::host::{Clock, DialogHost, DirectoryPicker, FixedClock, Notifier, SystemClock};
pub use ui::notice::Notice;
pub use ui::paths::{humanize_path, initial_directory};
pub use ui::save_image_dialog::{ConfirmOutcome, DialogParams, DialogPhase, SaveImageDialog};
