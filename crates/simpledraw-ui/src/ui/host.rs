//! Host seams
//!
//! What the dialog needs from the application hosting it: a way to show
//! notices, a directory chooser, the current time, and a file writer.

use crate::ui::notice::Notice;
use chrono::NaiveDateTime;
use simpledraw_export::FileWriter;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Shows transient notices (toasts)
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// Opens the host's directory chooser
pub trait DirectoryPicker {
    /// Open a chooser starting at `start`; call `on_pick` if the user picks one.
    fn pick_directory(&self, start: &Path, on_pick: Box<dyn FnOnce(PathBuf)>);
}

/// Source of the timestamp used in suggested filenames
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// A clock stuck at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Everything the dialog borrows from its host
#[derive(Clone)]
pub struct DialogHost {
    pub notifier: Rc<dyn Notifier>,
    pub picker: Rc<dyn DirectoryPicker>,
    pub clock: Rc<dyn Clock>,
    pub writer: FileWriter,
}

impl DialogHost {
    /// Host with the system clock and a writer without media indexing.
    pub fn new(notifier: Rc<dyn Notifier>, picker: Rc<dyn DirectoryPicker>) -> Self {
        Self {
            notifier,
            picker,
            clock: Rc::new(SystemClock),
            writer: FileWriter::default(),
        }
    }

    pub fn with_clock(mut self, clock: Rc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_writer(mut self, writer: FileWriter) -> Self {
        self.writer = writer;
        self
    }
}
