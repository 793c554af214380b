//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use turbogen_core::{application::ports::Filesystem, error::TurbogenResult};

/// Production filesystem implementation using `std::fs`.
///
/// Directories come out with the platform defaults (`0o755` under a normal
/// umask on Unix), files with `0o644`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> TurbogenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> TurbogenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> turbogen_core::error::TurbogenError {
    use turbogen_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_reports_existence() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();

        let dir = tmp.path().join("a/b/c");
        fs.create_dir_all(&dir).unwrap();
        assert!(fs.exists(&dir));

        let file = dir.join("x.txt");
        fs.write_file(&file, "hello").unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "hello");
    }

    #[test]
    fn existing_directory_is_not_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        fs.create_dir_all(tmp.path()).unwrap();
    }

    #[test]
    fn write_into_missing_parent_fails_with_path_context() {
        let tmp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let target = tmp.path().join("missing/x.txt");

        let err = fs.write_file(&target, "hello").unwrap_err();
        assert!(err.to_string().contains("missing"));
    }
}
