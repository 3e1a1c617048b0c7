//! Environment provisioning run before the window opens.
//!
//! Three steps, each independent:
//! - runtime capability checks ([`ensure_dependencies`])
//! - working directory layout ([`ensure_directories`])
//! - default configuration record ([`ensure_config`], [`load_config`])

use shared::errors::ErrorKind;
use shared::settings::{AppConfig, CONFIG_FILE_NAME};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Subdirectories created under the application root.
pub const WORKING_DIRECTORIES: [&str; 5] = ["core", "plugins", "data", "logs", "temp"];

/// A runtime capability the application needs before it can open a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub name: &'static str,
    /// What the user should do when it is missing
    pub hint: &'static str,
}

/// Capabilities the desktop shell depends on.
pub fn required_capabilities() -> Vec<Requirement> {
    vec![
        Requirement {
            name: "graphical-display",
            hint: "start the application from a desktop session (DISPLAY or WAYLAND_DISPLAY must be set)",
        },
        Requirement {
            name: "working-directory",
            hint: "launch from an existing, readable directory",
        },
    ]
}

/// Decides whether a requirement is already satisfied.
pub trait Probe {
    fn is_present(&self, requirement: &Requirement) -> bool;
}

/// Makes one attempt to satisfy a missing requirement.
pub trait Installer {
    fn install(&self, requirement: &Requirement) -> Result<(), ProvisionError>;
}

/// Probes the running host.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProbe;

impl Probe for SystemProbe {
    fn is_present(&self, requirement: &Requirement) -> bool {
        match requirement.name {
            "graphical-display" => has_graphical_display(),
            "working-directory" => std::env::current_dir().map(|p| p.is_dir()).unwrap_or(false),
            other => {
                tracing::warn!(requirement = other, "no probe for requirement");
                false
            }
        }
    }
}

fn has_graphical_display() -> bool {
    if cfg!(any(target_os = "macos", target_os = "windows")) {
        return true;
    }
    ["DISPLAY", "WAYLAND_DISPLAY"].iter().any(|key| {
        std::env::var(key)
            .map(|v| !v.trim().is_empty())
            .unwrap_or(false)
    })
}

/// Never touches the host; every attempt fails with the requirement's hint.
#[derive(Debug, Default, Clone, Copy)]
pub struct ManualInstaller;

impl Installer for ManualInstaller {
    fn install(&self, requirement: &Requirement) -> Result<(), ProvisionError> {
        Err(ProvisionError::InstallUnsupported {
            name: requirement.name.to_string(),
            hint: requirement.hint.to_string(),
        })
    }
}

/// Outcome for a single requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyStatus {
    Present,
    Installed,
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct DependencyReport {
    pub entries: Vec<(String, DependencyStatus)>,
}

impl DependencyReport {
    /// False when any install attempt failed.
    pub fn is_satisfied(&self) -> bool {
        !self
            .entries
            .iter()
            .any(|(_, status)| matches!(status, DependencyStatus::Failed(_)))
    }

    pub fn failed(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, status)| matches!(status, DependencyStatus::Failed(_)))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn installed(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, status)| *status == DependencyStatus::Installed)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Check every requirement; attempt each missing one exactly once.
///
/// All missing requirements are attempted even after a failure, so the
/// report names every problem at once.
pub fn ensure_dependencies(
    requirements: &[Requirement],
    probe: &dyn Probe,
    installer: &dyn Installer,
) -> DependencyReport {
    let mut report = DependencyReport::default();

    let missing: Vec<&Requirement> = requirements
        .iter()
        .filter(|req| {
            let present = probe.is_present(req);
            if present {
                report
                    .entries
                    .push((req.name.to_string(), DependencyStatus::Present));
            }
            !present
        })
        .collect();

    if missing.is_empty() {
        return report;
    }

    let names: Vec<&str> = missing.iter().map(|r| r.name).collect();
    tracing::warn!(missing = ?names, "missing runtime dependencies");

    for req in missing {
        let status = match installer.install(req) {
            Ok(()) => {
                tracing::info!(requirement = req.name, "installed");
                DependencyStatus::Installed
            }
            Err(e) => {
                tracing::error!(requirement = req.name, error = %e, "install failed");
                DependencyStatus::Failed(e.to_string())
            }
        };
        report.entries.push((req.name.to_string(), status));
    }

    report
}

/// Create the working directory layout under `root`. Safe to call repeatedly.
pub fn ensure_directories(root: &Path) -> Result<(), ProvisionError> {
    for name in WORKING_DIRECTORIES {
        let path = root.join(name);
        fs::create_dir_all(&path).map_err(|source| ProvisionError::Directory {
            path: path.clone(),
            source,
        })?;
    }
    tracing::debug!(root = %root.display(), "directory structure verified");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigStatus {
    Created,
    /// A file was already there; its content was not inspected
    Existing,
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

/// Write the default record when `config.json` is absent.
pub fn ensure_config(root: &Path) -> Result<ConfigStatus, ProvisionError> {
    let path = config_path(root);
    if path.exists() {
        return Ok(ConfigStatus::Existing);
    }

    let json = serde_json::to_string_pretty(&AppConfig::default())
        .map_err(ProvisionError::ConfigSerialize)?;
    fs::write(&path, json).map_err(|source| ProvisionError::ConfigWrite {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), "created default config");
    Ok(ConfigStatus::Created)
}

/// Read `config.json`; a present file must parse.
pub fn load_config(root: &Path) -> Result<AppConfig, ProvisionError> {
    let path = config_path(root);
    let bytes = fs::read(&path).map_err(|source| ProvisionError::ConfigRead {
        path: path.clone(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ProvisionError::ConfigParse { path, source })
}

#[derive(Debug, thiserror::Error)]
pub enum ProvisionError {
    #[error("Cannot install {name} automatically: {hint}")]
    InstallUnsupported { name: String, hint: String },

    #[error("Failed to create directory {}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize default config")]
    ConfigSerialize(#[source] serde_json::Error),

    #[error("Failed to write {}", .path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid JSON", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ProvisionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProvisionError::InstallUnsupported { .. } => ErrorKind::DependencyMissing,
            ProvisionError::Directory { source, .. }
            | ProvisionError::ConfigWrite { source, .. }
            | ProvisionError::ConfigRead { source, .. } => ErrorKind::from_io(source),
            ProvisionError::ConfigParse { .. } => ErrorKind::InvalidConfig,
            ProvisionError::ConfigSerialize(_) => ErrorKind::Unclassified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;

    struct FakeProbe {
        present: HashSet<&'static str>,
    }

    impl FakeProbe {
        fn with(present: &[&'static str]) -> Self {
            Self {
                present: present.iter().copied().collect(),
            }
        }
    }

    impl Probe for FakeProbe {
        fn is_present(&self, requirement: &Requirement) -> bool {
            self.present.contains(requirement.name)
        }
    }

    #[derive(Default)]
    struct RecordingInstaller {
        fail: HashSet<&'static str>,
        attempts: RefCell<Vec<String>>,
    }

    impl Installer for RecordingInstaller {
        fn install(&self, requirement: &Requirement) -> Result<(), ProvisionError> {
            self.attempts.borrow_mut().push(requirement.name.to_string());
            if self.fail.contains(requirement.name) {
                Err(ProvisionError::InstallUnsupported {
                    name: requirement.name.to_string(),
                    hint: "exit status 1".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn reqs(names: &[&'static str]) -> Vec<Requirement> {
        names
            .iter()
            .map(|&name| Requirement { name, hint: "" })
            .collect()
    }

    #[test]
    fn test_all_present_skips_installer() {
        let requirements = reqs(&["display", "network", "audio"]);
        let probe = FakeProbe::with(&["display", "network", "audio"]);
        let installer = RecordingInstaller::default();

        let report = ensure_dependencies(&requirements, &probe, &installer);
        assert!(report.is_satisfied());
        assert!(installer.attempts.borrow().is_empty());
    }

    #[test]
    fn test_missing_installed_once_each() {
        let requirements = reqs(&["display", "network", "audio"]);
        let probe = FakeProbe::with(&["network"]);
        let installer = RecordingInstaller::default();

        let report = ensure_dependencies(&requirements, &probe, &installer);
        assert!(report.is_satisfied());
        assert_eq!(*installer.attempts.borrow(), vec!["display", "audio"]);
        assert_eq!(report.installed(), vec!["display", "audio"]);
    }

    #[test]
    fn test_any_failure_fails_overall() {
        let requirements = reqs(&["display", "network", "audio"]);
        let probe = FakeProbe::with(&[]);
        let installer = RecordingInstaller {
            fail: ["network"].into_iter().collect(),
            ..Default::default()
        };

        let report = ensure_dependencies(&requirements, &probe, &installer);
        assert!(!report.is_satisfied());
        assert_eq!(report.failed(), vec!["network"]);
        assert_eq!(installer.attempts.borrow().len(), 3);
    }

    #[test]
    fn test_manual_installer_fails_fast() {
        let requirements = required_capabilities();
        let probe = FakeProbe::with(&[]);
        let report = ensure_dependencies(&requirements, &probe, &ManualInstaller);
        assert!(!report.is_satisfied());
        assert_eq!(report.failed().len(), requirements.len());
        let err = ManualInstaller.install(&requirements[0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DependencyMissing);
    }

    #[test]
    fn test_ensure_directories_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        ensure_directories(dir.path()).unwrap();
        ensure_directories(dir.path()).unwrap();

        for name in WORKING_DIRECTORIES {
            assert!(dir.path().join(name).is_dir(), "{name} missing");
        }
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 5);
    }

    #[test]
    fn test_ensure_directories_reports_blocking_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("logs"), "not a dir").unwrap();
        let err = ensure_directories(dir.path()).unwrap_err();
        assert!(matches!(err, ProvisionError::Directory { ref path, .. } if path.ends_with("logs")));
    }

    #[test]
    fn test_ensure_config_creates_default() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(ensure_config(dir.path()).unwrap(), ConfigStatus::Created);
        assert_eq!(load_config(dir.path()).unwrap(), AppConfig::default());

        let text = fs::read_to_string(config_path(dir.path())).unwrap();
        assert!(text.contains("\n  \"app_name\""), "expected indented JSON");
    }

    #[test]
    fn test_ensure_config_never_overwrites_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_path(dir.path());
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(ensure_config(dir.path()).unwrap(), ConfigStatus::Existing);
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");

        let err = load_config(dir.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FilesystemMissing);
    }
}
