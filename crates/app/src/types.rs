//! Core types for the window
//!
//! Tabs and the fixed strings the panels display.

/// Status line text before any action runs
pub const READY_STATUS: &str = "Ready - Auto-Recovery Enabled";
/// Status line text after a successful directory refresh
pub const FILES_REFRESHED_STATUS: &str = "Files refreshed";
pub const INPUT_HINT: &str = "Type a command or message…";
pub const PLUGINS_PLACEHOLDER: &str = "Plugin Manager (Coming soon)";
/// Characters of file content shown when a file is opened
pub const OPEN_PREVIEW_CHARS: usize = 1000;

/// Tabs of the left-hand workspace panel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WorkspaceTab {
    #[default]
    Files,
    Plugins,
}

impl WorkspaceTab {
    pub fn label(&self) -> &'static str {
        match self {
            WorkspaceTab::Files => "Files",
            WorkspaceTab::Plugins => "Plugins",
        }
    }
}
