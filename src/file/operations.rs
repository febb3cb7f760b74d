use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{RelocateError, Result};

/// Read a file's contents as UTF-8 text
///
/// Fails if the path is missing, unreadable, or not valid UTF-8. There is no
/// retry and no fallback path.
pub fn read_file_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    debug!("Reading file: {}", path.display());

    fs::read_to_string(path).map_err(|e| RelocateError::io_error(e, Some(path)))
}

/// Write string content to a file, truncating existing content
pub fn write_file_sync(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing {} bytes to file: {}", content.len(), path.display());

    fs::write(path, content).map_err(|e| RelocateError::io_error(e, Some(path)))
}

/// Check if a file exists
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    path.exists() && path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("page.js");

        write_file_sync(&file_path, "const x = 1;\n").unwrap();
        assert!(file_exists(&file_path));

        let content = read_file_to_string(&file_path).unwrap();
        assert_eq!(content, "const x = 1;\n");
    }

    #[test]
    fn test_write_truncates_existing_content() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("page.js");

        write_file_sync(&file_path, "a much longer original body\n").unwrap();
        write_file_sync(&file_path, "short\n").unwrap();

        assert_eq!(read_file_to_string(&file_path).unwrap(), "short\n");
    }

    #[test]
    fn test_missing_file_error_carries_path() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("does-not-exist.js");

        let err = read_file_to_string(&file_path).unwrap_err();
        assert_eq!(err.path(), Some(&file_path));
    }
}
