//! File picker using rfd (rust file dialog).
//!
//! Provides the native "pick one file" dialog behind the Open and Attach
//! actions. The window talks to [`FilePicker`] so tests can script choices.

use std::path::{Path, PathBuf};

/// Prompts the user for a single file.
pub trait FilePicker {
    /// Blocks until the user picks a file or cancels (`None`).
    fn pick_file(&mut self, title: &str, start_dir: &Path) -> Option<PathBuf>;
}

/// Native dialog backed by rfd.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeFilePicker;

impl NativeFilePicker {
    pub fn new() -> Self {
        Self
    }
}

impl FilePicker for NativeFilePicker {
    fn pick_file(&mut self, title: &str, start_dir: &Path) -> Option<PathBuf> {
        let result = rfd::FileDialog::new()
            .set_title(title)
            .set_directory(start_dir)
            .pick_file();

        match &result {
            Some(path) => tracing::debug!(path = %path.display(), "file picked"),
            None => tracing::debug!(title, "file dialog cancelled"),
        }
        result
    }
}
