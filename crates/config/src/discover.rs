//! Locating the app a path belongs to

use appdir_core::{Result, FILE_CONFIG, KEY_CONFIG_VERSION};
use appdir_utils::parse_document;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Find the nearest directory at or above `start` that holds an app.
///
/// A directory is an app root when its `config.json` carries a
/// `config_version`. A `config.json` that cannot be parsed does not mark an
/// app root; the search continues above it.
pub fn find_app(start: &Path) -> Result<Option<PathBuf>> {
    let mut current = start.to_path_buf();

    loop {
        let config = current.join(FILE_CONFIG);
        if config.is_file() {
            match parse_document(&config) {
                Ok(Some(doc)) if doc.contains_key(KEY_CONFIG_VERSION) => {
                    debug!(root = %current.display(), "found app");
                    return Ok(Some(current));
                }
                Ok(_) => {}
                Err(e) => debug!(path = %config.display(), error = %e, "skipping unreadable config"),
            }
        }

        if !current.pop() {
            break;
        }
    }

    Ok(None)
}
