//! Closed classification of startup failures.
//!
//! Each failure is tagged with an [`ErrorKind`] where it happens, so the
//! launcher can print a remediation hint without inspecting message text.

use std::fmt;
use std::io;

/// Category of a startup failure. First match wins when reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required runtime capability is missing
    DependencyMissing,
    /// The OS refused access to a file or directory
    FilesystemPermission,
    /// An expected file or directory does not exist
    FilesystemMissing,
    /// `config.json` exists but is not a valid record
    InvalidConfig,
    /// Window construction, display or the event loop failed
    UiFramework,
    Unclassified,
}

impl ErrorKind {
    /// Classify an I/O error by its OS-level kind.
    pub fn from_io(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => ErrorKind::FilesystemPermission,
            io::ErrorKind::NotFound => ErrorKind::FilesystemMissing,
            _ => ErrorKind::Unclassified,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ErrorKind::DependencyMissing => "Missing runtime dependency detected",
            ErrorKind::FilesystemPermission => "Permission denied",
            ErrorKind::FilesystemMissing => "Missing file detected",
            ErrorKind::InvalidConfig => "Invalid configuration detected",
            ErrorKind::UiFramework => "Windowing system issue detected",
            ErrorKind::Unclassified => "Unknown error",
        }
    }

    /// One suggestion per kind.
    pub fn remediation(&self) -> &'static str {
        match self {
            ErrorKind::DependencyMissing => {
                "Solution: install the missing components listed above, then relaunch"
            }
            ErrorKind::FilesystemPermission => "Solution: run with appropriate permissions",
            ErrorKind::FilesystemMissing => "Solution: ensure all application files are present",
            ErrorKind::InvalidConfig => {
                "Solution: fix or delete config.json so a default one is written"
            }
            ErrorKind::UiFramework => {
                "Solution: check that a graphical session is available and the graphics drivers work"
            }
            ErrorKind::Unclassified => "Please check the error chain above",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
