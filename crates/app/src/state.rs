//! State management for the window
//!
//! [`ShellState`] owns everything the panels show and implements the actions
//! bound to buttons and keys. Rendering lives in `window.rs`; nothing here
//! touches egui beyond the dialog structs, so the behavior is unit tested.

use crate::modals::{MessageDialog, Modal, Severity};
use crate::types::*;
use crate::utils::preview_text;
use crate::widgets::FilePicker;
use agent_host::CommandDelegate;
use services::file_listing::list_entry_names;
use shared::settings::AppConfig;
use shared::transcript::{Speaker, TranscriptEntry};
use std::fs;
use std::path::PathBuf;

pub struct ShellState {
    pub config: AppConfig,
    /// Directory listed by the Files tab and used as the dialog start point
    pub working_dir: PathBuf,
    pub status: String,
    pub active_tab: WorkspaceTab,
    pub file_entries: Vec<String>,
    pub selected_file: Option<usize>,
    pub input_text: String,
    pub transcript: Vec<TranscriptEntry>,
    pub error_dialog: MessageDialog,
    pub about_dialog: MessageDialog,
    delegate: Box<dyn CommandDelegate>,
    picker: Box<dyn FilePicker>,
}

impl ShellState {
    /// Build the state and load the initial file listing.
    pub fn new(
        config: AppConfig,
        working_dir: PathBuf,
        delegate: Box<dyn CommandDelegate>,
        picker: Box<dyn FilePicker>,
    ) -> Self {
        let mut state = Self {
            config,
            working_dir,
            status: READY_STATUS.to_string(),
            active_tab: WorkspaceTab::Files,
            file_entries: Vec::new(),
            selected_file: None,
            input_text: String::new(),
            transcript: Vec::new(),
            error_dialog: MessageDialog::new("error_dialog", Severity::Error),
            about_dialog: MessageDialog::new("about_dialog", Severity::Info),
            delegate,
            picker,
        };
        state.refresh_files();
        state
    }

    fn log(&mut self, speaker: Speaker, text: String) {
        self.transcript.push(TranscriptEntry::now(speaker, text));
    }

    /// True while a dialog must be dismissed before panels accept input.
    pub fn is_blocked(&self) -> bool {
        self.error_dialog.is_open() || self.about_dialog.is_open()
    }

    /// Send the input line to the delegate and record both sides.
    pub fn send(&mut self) {
        let text = self.input_text.trim().to_string();
        if text.is_empty() {
            return;
        }

        self.log(Speaker::User, format!("You: {}", text));
        self.input_text.clear();

        match self.delegate.process(&text) {
            Ok(response) => self.log(Speaker::Agent, format!("Agent: {}", response)),
            Err(e) => {
                tracing::warn!(error = %e, "delegate failed");
                self.log(Speaker::Error, format!("Error: {}: {}", e.type_name(), e));
            }
        }
    }

    /// Rebuild the file list from the working directory.
    pub fn refresh_files(&mut self) {
        self.file_entries.clear();
        self.selected_file = None;
        match list_entry_names(&self.working_dir) {
            Ok(names) => {
                self.file_entries = names;
                self.status = FILES_REFRESHED_STATUS.to_string();
            }
            Err(e) => {
                tracing::warn!(dir = %self.working_dir.display(), error = %e, "file listing failed");
                self.status = format!("File load error: {}", e);
            }
        }
    }

    /// Pick a file and show the start of its text in the transcript.
    pub fn open_file(&mut self) {
        let Some(path) = self.picker.pick_file("Open File", &self.working_dir) else {
            return;
        };

        match fs::read_to_string(&path) {
            Ok(content) => {
                let preview = preview_text(&content, OPEN_PREVIEW_CHARS);
                self.log(
                    Speaker::System,
                    format!("Opened {}\n{}", path.display(), preview),
                );
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "open failed");
                self.error_dialog
                    .show("Error", format!("Failed to open file:\n{}", e));
            }
        }
    }

    /// Pick a file and note its path. The file is not read.
    pub fn attach_file(&mut self) {
        if let Some(path) = self.picker.pick_file("Attach File", &self.working_dir) {
            self.log(Speaker::System, format!("Attached file: {}", path.display()));
        }
    }

    pub fn show_about(&mut self) {
        let title = format!("About {}", self.config.app_name);
        let body = format!(
            "{}\nVersion {}\n\nDesktop AI assistant with guided startup recovery",
            self.config.app_name, self.config.version
        );
        self.about_dialog.show(title, body);
    }
}
