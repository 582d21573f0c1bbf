use appdir_config::find_app;
use appdir_core::{Error, Result};
use std::path::{Path, PathBuf};

/// Root of the app containing `start`, or the current directory
pub fn execute(start: Option<&Path>) -> Result<PathBuf> {
    let start = match start {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()
            .map_err(|e| Error::file_system(".", "resolve current directory", e))?,
    };

    find_app(&start)?.ok_or_else(|| {
        Error::configuration(format!("no app found at or above {}", start.display()))
    })
}
