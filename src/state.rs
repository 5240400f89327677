use std::path::PathBuf;

use crate::config::AnalysisConfig;
use crate::data::loader::read_upload;
use crate::data::model::UploadedFile;
use crate::pipeline::{run_analysis, RunOutcome};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The per-session UI state, independent of rendering.
///
/// Form inputs change freely between runs; `last_run` is only ever replaced
/// by [`AppState::analyze`].
#[derive(Debug, Default)]
pub struct AppState {
    pub config: AnalysisConfig,

    /// Uploaded workbooks, in the order they were added.
    pub uploads: Vec<UploadedFile>,

    /// Raw text of the key field.
    pub key_input: String,

    /// Outcome of the most recent Analyze click.
    pub last_run: Option<RunOutcome>,

    /// Problem reading a file from disk, shown next to the upload list.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn add_upload(&mut self, file: UploadedFile) {
        log::info!("Uploaded {} ({} bytes)", file.name, file.bytes.len());
        self.uploads.push(file);
    }

    /// Read each path from disk and add it. Failures are reported in
    /// `status_message`; the readable files are still added.
    pub fn add_paths(&mut self, paths: impl IntoIterator<Item = PathBuf>) {
        let mut failures = Vec::new();
        for path in paths {
            match read_upload(&path) {
                Ok(file) => self.add_upload(file),
                Err(e) => {
                    log::error!("Failed to read upload: {e:#}");
                    failures.push(format!("{e:#}"));
                }
            }
        }
        self.status_message = if failures.is_empty() {
            None
        } else {
            Some(failures.join("\n"))
        };
    }

    pub fn remove_upload(&mut self, index: usize) {
        if index < self.uploads.len() {
            let removed = self.uploads.remove(index);
            log::info!("Removed {}", removed.name);
        }
    }

    pub fn clear_uploads(&mut self) {
        self.uploads.clear();
        self.status_message = None;
    }

    /// Run the pipeline on the current inputs, replacing the previous outcome.
    pub fn analyze(&mut self) {
        let outcome = run_analysis(&self.uploads, &self.key_input, &self.config);
        if let Err(e) = &outcome.result {
            log::info!("Analysis stopped: {e}");
        }
        self.last_run = Some(outcome);
    }
}
