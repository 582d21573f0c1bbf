//! Atomic file writes so an interrupted write never leaves a truncated file

use appdir_core::{Error, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::debug;
use uuid::Uuid;

/// Permission bits of every file the converter writes
#[cfg(unix)]
pub const FILE_MODE: u32 = 0o644;

/// Replace `path` with `content` in one rename.
///
/// Parent directories are created as needed. The content goes to a fresh
/// sibling file first, so readers see either the old file or the new one.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let parent = path.parent().ok_or_else(|| {
        Error::configuration(format!("'{}' has no parent directory", path.display()))
    })?;
    fs::create_dir_all(parent)
        .map_err(|e| Error::file_system(parent, "create parent directory", e))?;

    // Sibling of the target so the rename stays on one filesystem
    let staged = parent.join(format!(".{}.tmp", Uuid::new_v4()));
    if let Err(e) = write_new_file(&staged, content) {
        let _ = fs::remove_file(&staged);
        return Err(e);
    }

    if let Err(e) = fs::rename(&staged, path) {
        let _ = fs::remove_file(&staged);
        return Err(Error::file_system(path, "atomic rename", e));
    }

    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Create `path`, which must not exist yet, with [`FILE_MODE`] and flush
/// `content` to disk
fn write_new_file(path: &Path, content: &[u8]) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    let mut file = options
        .open(path)
        .map_err(|e| Error::file_system(path, "create temporary file", e))?;
    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| Error::file_system(path, "write temporary file", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        write_atomic(&file_path, b"Hello, World!").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "Hello, World!");
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("a").join("b").join("test.txt");

        write_atomic(&file_path, b"Test").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "Test");
    }

    #[test]
    fn test_atomic_write_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        fs::write(&file_path, "Old content that is longer").unwrap();
        write_atomic(&file_path, b"New content").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "New content");
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        write_atomic(&temp_dir.path().join("one.json"), b"{}").unwrap();

        let names: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["one.json".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_atomic_write_uses_fixed_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("mode.json");
        write_atomic(&file_path, b"{}").unwrap();

        // The umask can only clear bits from the creation mode
        let mode = fs::metadata(&file_path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode & !FILE_MODE, 0);
        assert_ne!(mode & 0o600, 0);
    }
}
