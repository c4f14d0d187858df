//! Save Image Dialog Controller
//!
//! Backs the "Save as" dialog: three text fields (trial, subject, electrode)
//! that regenerate a suggested filename, a directory row, a format selector,
//! and the confirm flow that hands a [`SaveRequest`] to the file writer.
//!
//! The controller lives on the UI thread. A confirm can run the write inline
//! ([`SaveImageDialog::confirm`]) or split around a background write
//! ([`SaveImageDialog::begin_save`] / [`SaveImageDialog::finish_save`]).

use crate::ui::host::DialogHost;
use crate::ui::notice::Notice;
use crate::ui::paths::{humanize_path, initial_directory};
use simpledraw_core::{
    shared, shared_vec, CanvasSnapshot, ExportError, ExportFormat, ListenerList, RecordingInfo,
    SaveCallback, SaveOutcome, SaveRequest, Shared, ValidationError,
};
use simpledraw_settings::Config;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub const TRIAL_FIELD: &str = "Trial";
pub const SUBJECT_FIELD: &str = "Subject";
pub const ELECTRODE_FIELD: &str = "Electrode";

/// Lifecycle of one dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    /// Accepting input
    Open,
    /// A save is in flight; further confirms are ignored
    Writing,
    /// Dismissed, either after a save or by cancel
    Closed,
}

/// What a confirm led to
#[derive(Debug, Clone)]
pub enum ConfirmOutcome {
    /// File written, callback fired, dialog closed
    Saved(SaveOutcome),
    /// Input rejected before writing; dialog stays open
    Rejected(ValidationError),
    /// Write failed; dialog stays open
    Failed(ExportError),
    /// Dialog was not accepting a confirm
    Ignored,
}

/// Inputs the host supplies when opening the dialog
#[derive(Debug, Clone)]
pub struct DialogParams {
    /// Extension to preselect (`png`, `jpg`, `svg`)
    pub suggested_extension: String,
    /// Full path of the previously saved file, empty if none
    pub previous_path: String,
    pub recording: RecordingInfo,
    pub snapshot: Arc<CanvasSnapshot>,
}

impl DialogParams {
    /// Parameters prefilled from persisted settings.
    pub fn from_config(config: &Config, snapshot: Arc<CanvasSnapshot>) -> Self {
        Self {
            suggested_extension: config.export.last_save_extension.clone(),
            previous_path: config.export.previous_path(),
            recording: config.recording_info(),
            snapshot,
        }
    }
}

#[derive(Debug)]
struct DialogState {
    recording: RecordingInfo,
    directory: PathBuf,
    filename: String,
    format: ExportFormat,
    phase: DialogPhase,
}

/// Controller for the save dialog
pub struct SaveImageDialog {
    state: Shared<DialogState>,
    host: DialogHost,
    snapshot: Arc<CanvasSnapshot>,
    on_saved: Shared<Option<SaveCallback>>,
    filename_listeners: ListenerList<String>,
    path_listeners: ListenerList<String>,
}

impl SaveImageDialog {
    /// Open the dialog. `on_saved` fires once, after a successful save.
    pub fn new<F>(params: DialogParams, host: DialogHost, on_saved: F) -> Self
    where
        F: FnOnce(SaveOutcome) + 'static,
    {
        let directory = initial_directory(&params.previous_path);
        let format = ExportFormat::from_suggested(&params.suggested_extension);
        let filename = params.recording.suggested_filename(host.clock.now());

        debug!(
            "Opening save dialog in {} as {} with '{}'",
            directory.display(),
            format,
            filename
        );

        Self {
            state: shared(DialogState {
                recording: params.recording,
                directory,
                filename,
                format,
                phase: DialogPhase::Open,
            }),
            host,
            snapshot: params.snapshot,
            on_saved: shared(Some(Box::new(on_saved) as SaveCallback)),
            filename_listeners: shared_vec(),
            path_listeners: shared_vec(),
        }
    }

    /// Register a callback for each regenerated filename
    pub fn on_filename_changed<F>(&self, callback: F)
    where
        F: Fn(String) + 'static,
    {
        self.filename_listeners.borrow_mut().push(Rc::new(callback));
    }

    /// Register a callback for each directory change (receives the display path)
    pub fn on_path_changed<F>(&self, callback: F)
    where
        F: Fn(String) + 'static,
    {
        self.path_listeners.borrow_mut().push(Rc::new(callback));
    }

    pub fn trial(&self) -> i32 {
        self.state.borrow().recording.trial
    }

    pub fn subject(&self) -> String {
        self.state.borrow().recording.subject.clone()
    }

    pub fn electrode(&self) -> String {
        self.state.borrow().recording.electrode.clone()
    }

    pub fn recording(&self) -> RecordingInfo {
        self.state.borrow().recording.clone()
    }

    /// Current contents of the filename box
    pub fn filename(&self) -> String {
        self.state.borrow().filename.clone()
    }

    pub fn directory(&self) -> PathBuf {
        self.state.borrow().directory.clone()
    }

    /// Directory as shown in the dialog
    pub fn display_path(&self) -> String {
        humanize_path(&self.state.borrow().directory)
    }

    pub fn format(&self) -> ExportFormat {
        self.state.borrow().format
    }

    pub fn phase(&self) -> DialogPhase {
        self.state.borrow().phase
    }

    pub fn is_open(&self) -> bool {
        self.phase() != DialogPhase::Closed
    }

    pub fn snapshot(&self) -> &Arc<CanvasSnapshot> {
        &self.snapshot
    }

    /// Trial field edited
    pub fn set_trial_text(&self, text: &str) -> Result<(), ValidationError> {
        if text.is_empty() {
            return self.reject(empty_field(TRIAL_FIELD));
        }
        let trial = text
            .parse::<i32>()
            .map_err(|_| ValidationError::InvalidNumber {
                field: TRIAL_FIELD.to_string(),
                value: text.to_string(),
            });
        match trial {
            Ok(trial) => {
                self.state.borrow_mut().recording.trial = trial;
                self.regenerate_filename();
                Ok(())
            }
            Err(err) => self.reject(err),
        }
    }

    /// Subject field edited
    pub fn set_subject_text(&self, text: &str) -> Result<(), ValidationError> {
        if text.is_empty() {
            return self.reject(empty_field(SUBJECT_FIELD));
        }
        self.state.borrow_mut().recording.subject = text.to_string();
        self.regenerate_filename();
        Ok(())
    }

    /// Electrode field edited
    pub fn set_electrode_text(&self, text: &str) -> Result<(), ValidationError> {
        if text.is_empty() {
            return self.reject(empty_field(ELECTRODE_FIELD));
        }
        self.state.borrow_mut().recording.electrode = text.to_string();
        self.regenerate_filename();
        Ok(())
    }

    /// Filename box edited directly
    pub fn set_filename(&self, text: &str) {
        self.state.borrow_mut().filename = text.to_string();
    }

    /// Format radio button selected
    pub fn select_format(&self, format: ExportFormat) {
        debug!("Export format set to {}", format);
        self.state.borrow_mut().format = format;
    }

    /// Path row clicked: ask the host for a directory
    pub fn choose_directory(&self) {
        let start = self.directory();
        let state = self.state.clone();
        let listeners = self.path_listeners.clone();
        self.host.picker.pick_directory(
            &start,
            Box::new(move |dir| apply_directory(&state, &listeners, dir)),
        );
    }

    /// Host reports a picked directory
    pub fn directory_chosen(&self, directory: PathBuf) {
        apply_directory(&self.state, &self.path_listeners, directory);
    }

    /// Save request for the current input, without side effects.
    pub fn build_request(&self) -> Result<SaveRequest, ValidationError> {
        let state = self.state.borrow();
        SaveRequest::new(
            state.recording.clone(),
            state.directory.clone(),
            state.filename.clone(),
            state.format,
        )
    }

    /// Validate and enter the writing phase.
    ///
    /// Returns `None` (after notifying) if input is invalid, or silently if
    /// the dialog is not open.
    pub fn begin_save(&self) -> Option<SaveRequest> {
        self.try_begin_save().ok()
    }

    fn try_begin_save(&self) -> Result<SaveRequest, ConfirmOutcome> {
        let phase = self.phase();
        if phase != DialogPhase::Open {
            debug!("Confirm ignored while {:?}", phase);
            return Err(ConfirmOutcome::Ignored);
        }

        match self.build_request() {
            Ok(request) => {
                self.state.borrow_mut().phase = DialogPhase::Writing;
                Ok(request)
            }
            Err(err) => {
                self.notify_invalid(&err);
                Err(ConfirmOutcome::Rejected(err))
            }
        }
    }

    /// Apply the writer's result for `request`.
    pub fn finish_save(
        &self,
        request: &SaveRequest,
        result: Result<PathBuf, ExportError>,
    ) -> ConfirmOutcome {
        match result {
            Ok(path) => {
                let outcome = SaveOutcome::new(request, path);
                info!("Saved drawing to {}", outcome.path.display());

                if !request.format.is_vector() {
                    self.host
                        .notifier
                        .notify(&Notice::Saved(outcome.path.clone()));
                }

                self.state.borrow_mut().phase = DialogPhase::Closed;
                let callback = self.on_saved.borrow_mut().take();
                if let Some(callback) = callback {
                    callback(outcome.clone());
                }
                ConfirmOutcome::Saved(outcome)
            }
            Err(err) => {
                error!("Saving {} failed: {}", request.destination().display(), err);
                self.state.borrow_mut().phase = DialogPhase::Open;
                self.host.notifier.notify(&Notice::UnknownError);
                ConfirmOutcome::Failed(err)
            }
        }
    }

    /// OK pressed: validate, write inline, and report.
    pub fn confirm(&self) -> ConfirmOutcome {
        let request = match self.try_begin_save() {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };
        let result = self
            .host
            .writer
            .save(&request.destination(), &self.snapshot);
        self.finish_save(&request, result)
    }

    /// OK pressed: validate, write on the blocking pool, and report.
    ///
    /// Must be awaited on the UI thread's runtime.
    pub async fn confirm_in_background(&self) -> ConfirmOutcome {
        let request = match self.try_begin_save() {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };
        let result = simpledraw_export::save_in_background(
            self.host.writer.clone(),
            request.destination(),
            self.snapshot.clone(),
        )
        .await;
        self.finish_save(&request, result)
    }

    /// Cancel pressed
    pub fn cancel(&self) {
        let mut state = self.state.borrow_mut();
        if state.phase == DialogPhase::Open {
            debug!("Save dialog cancelled");
            state.phase = DialogPhase::Closed;
        }
    }

    fn regenerate_filename(&self) {
        let now = self.host.clock.now();
        let filename = {
            let mut state = self.state.borrow_mut();
            let filename = state.recording.suggested_filename(now);
            state.filename = filename.clone();
            filename
        };
        emit(&self.filename_listeners, &filename);
    }

    fn notify_invalid(&self, err: &ValidationError) {
        warn!("Rejected input: {}", err);
        self.host.notifier.notify(&Notice::from(err.clone()));
    }

    fn reject(&self, err: ValidationError) -> Result<(), ValidationError> {
        self.notify_invalid(&err);
        Err(err)
    }
}

fn empty_field(field: &str) -> ValidationError {
    ValidationError::EmptyField {
        field: field.to_string(),
    }
}

fn apply_directory(
    state: &Shared<DialogState>,
    listeners: &ListenerList<String>,
    directory: PathBuf,
) {
    debug!("Save directory set to {}", directory.display());
    let display = humanize_path(&directory);
    state.borrow_mut().directory = directory;
    emit(listeners, &display);
}

/// Call every listener with `value`.
///
/// Works on a copy of the list so listeners may register further listeners.
fn emit(listeners: &ListenerList<String>, value: &str) {
    let current: Vec<_> = listeners.borrow().iter().cloned().collect();
    for listener in current {
        listener(value.to_string());
    }
}
