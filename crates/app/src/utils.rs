//! Utility functions for the launcher and window
//!
//! Application root resolution and text helpers.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Overrides the application root when set.
pub const ROOT_ENV: &str = "VENALLA_HOME";

/// Directory that holds `config.json` and the working directories.
///
/// Fixed per installation: the directory of the executable, unless
/// overridden. The launch directory is never used.
pub fn app_root() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    resolve_root(std::env::var_os(ROOT_ENV), exe_dir)
}

fn resolve_root(env_value: Option<OsString>, exe_dir: Option<PathBuf>) -> PathBuf {
    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        return PathBuf::from(value);
    }
    if let Some(dir) = exe_dir.filter(|d| !d.as_os_str().is_empty()) {
        return dir;
    }
    // Executable location unknown: fall back to the per-user data directory
    directories::ProjectDirs::from("com.local", "Venalla", "Venalla")
        .map(|proj| proj.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// First `limit` characters of `content`, with "..." appended when cut.
pub fn preview_text(content: &str, limit: usize) -> String {
    match content.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}...", &content[..idx]),
        None => content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_override_wins() {
        let root = resolve_root(Some("/opt/venalla".into()), Some("/home/me".into()));
        assert_eq!(root, PathBuf::from("/opt/venalla"));
    }

    #[test]
    fn test_empty_env_falls_back_to_exe_dir() {
        let root = resolve_root(Some(OsString::new()), Some("/opt/venalla/bin".into()));
        assert_eq!(root, PathBuf::from("/opt/venalla/bin"));
    }

    #[test]
    fn test_root_ignores_launch_directory() {
        let dir = tempfile::tempdir().unwrap();
        let before = app_root();
        let original = std::env::current_dir().unwrap();

        std::env::set_current_dir(dir.path()).unwrap();
        let after = app_root();
        std::env::set_current_dir(original).unwrap();

        assert_eq!(before, after);
        if std::env::var_os(ROOT_ENV).is_none() {
            assert_ne!(after, dir.path());
        }
    }

    #[test]
    fn test_unknown_exe_dir_uses_data_dir() {
        let root = resolve_root(None, None);
        assert!(root.is_absolute() || root == PathBuf::from("."));
        assert_ne!(root, PathBuf::new());
    }

    #[test]
    fn test_preview_truncates_long_content() {
        let content = "x".repeat(1500);
        let preview = preview_text(&content, 1000);
        assert_eq!(preview.len(), 1003);
        assert!(preview.ends_with("..."));
        assert_eq!(&preview[..1000], &content[..1000]);
    }

    #[test]
    fn test_preview_keeps_short_content() {
        let content = "y".repeat(500);
        assert_eq!(preview_text(&content, 1000), content);
    }

    #[test]
    fn test_preview_exact_limit_has_no_marker() {
        let content = "z".repeat(1000);
        assert_eq!(preview_text(&content, 1000), content);
    }

    #[test]
    fn test_preview_counts_chars_not_bytes() {
        let content = "é".repeat(1200);
        let preview = preview_text(&content, 1000);
        assert_eq!(preview.chars().count(), 1003);
    }
}
