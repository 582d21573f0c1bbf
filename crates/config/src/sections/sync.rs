//! `sync/`: device sync configuration

use super::ensure_dir;
use appdir_core::{Document, Result, DIR_SYNC, FILE_CONFIG};
use appdir_utils::{is_dir, parse_document, write_document};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Document>,
}

pub fn parse(root: &Path) -> Result<Option<SyncConfig>> {
    let dir = root.join(DIR_SYNC);
    if !is_dir(&dir)? {
        return Ok(None);
    }
    Ok(Some(SyncConfig {
        config: parse_document(&dir.join(FILE_CONFIG))?,
    }))
}

pub fn write(root: &Path, sync: Option<&SyncConfig>) -> Result<()> {
    let Some(sync) = sync else {
        return Ok(());
    };
    let dir = root.join(DIR_SYNC);
    ensure_dir(&dir)?;
    if let Some(config) = &sync.config {
        write_document(&dir.join(FILE_CONFIG), config)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_sync_round_trip() {
        let temp = TempDir::new().unwrap();
        let sync = SyncConfig {
            config: json!({"development_mode_enabled": true}).as_object().cloned(),
        };
        write(temp.path(), Some(&sync)).unwrap();
        assert_eq!(parse(temp.path()).unwrap(), Some(sync));
    }

    #[test]
    fn test_sync_without_config_file() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), Some(&SyncConfig::default())).unwrap();
        assert!(temp.path().join(DIR_SYNC).is_dir());
        assert_eq!(parse(temp.path()).unwrap(), Some(SyncConfig::default()));
    }
}
