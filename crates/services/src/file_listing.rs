use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Names of the direct entries of `dir`, in the order the OS yields them.
///
/// Not recursive and not sorted. Any read error aborts the listing.
pub fn list_entry_names(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for dent in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let dent = dent?;
        names.push(dent.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_lists_direct_entries_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "hello").unwrap();
        fs::create_dir(dir.path().join("b")).unwrap();
        fs::write(dir.path().join("b").join("nested.txt"), "deep").unwrap();

        let mut names = list_entry_names(dir.path()).unwrap();
        names.sort();
        assert_eq!(names, vec!["a.txt".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_order_matches_read_dir() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["z", "m", "a"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        let expected: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(list_entry_names(dir.path()).unwrap(), expected);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = list_entry_names(&dir.path().join("missing")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
