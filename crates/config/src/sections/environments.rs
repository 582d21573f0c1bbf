//! `environments/<name>.json`: per-environment value overrides

use super::{ensure_dir, require_document};
use crate::names::validate_segment;
use appdir_core::{Document, Result, DIR_ENVIRONMENTS, EXT_JSON};
use appdir_utils::{entry_name, is_dir, walk, write_document, WalkOptions};
use std::collections::BTreeMap;
use std::path::Path;

/// Environment documents keyed by environment name
pub type Environments = BTreeMap<String, Document>;

const SECTION: &str = "environments";

pub fn parse(root: &Path) -> Result<Option<Environments>> {
    let dir = root.join(DIR_ENVIRONMENTS);
    if !is_dir(&dir)? {
        return Ok(None);
    }

    let mut environments = Environments::new();
    walk(&dir, &WalkOptions::files_with_extension(EXT_JSON), |entry| {
        let file_name = entry_name(entry)?;
        let name = file_name
            .strip_suffix(".json")
            .unwrap_or(&file_name)
            .to_string();
        environments.insert(name, require_document(entry.path())?);
        Ok(())
    })?;
    Ok(Some(environments))
}

pub fn validate(environments: Option<&Environments>) -> Result<()> {
    environments
        .into_iter()
        .flat_map(|envs| envs.keys())
        .try_for_each(|name| validate_segment(SECTION, name))
}

pub fn write(root: &Path, environments: Option<&Environments>) -> Result<()> {
    validate(environments)?;
    write_validated(root, environments)
}

pub(crate) fn write_validated(root: &Path, environments: Option<&Environments>) -> Result<()> {
    let Some(environments) = environments else {
        return Ok(());
    };
    let dir = root.join(DIR_ENVIRONMENTS);
    ensure_dir(&dir)?;
    for (name, doc) in environments {
        write_document(&dir.join(format!("{name}.{EXT_JSON}")), doc)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use appdir_core::Error;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_environments_round_trip() {
        let temp = TempDir::new().unwrap();
        let mut envs = Environments::new();
        envs.insert(
            "production".to_string(),
            json!({"values": {"tier": "paid"}}).as_object().cloned().unwrap(),
        );
        envs.insert("development".to_string(), Document::new());

        write(temp.path(), Some(&envs)).unwrap();
        assert_eq!(parse(temp.path()).unwrap(), Some(envs));
    }

    #[test]
    fn test_non_json_files_ignored() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(DIR_ENVIRONMENTS);
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("README.md"), "notes").unwrap();

        assert_eq!(parse(temp.path()).unwrap(), Some(Environments::new()));
    }

    #[test]
    fn test_invalid_environment_name_rejected() {
        let temp = TempDir::new().unwrap();
        let mut envs = Environments::new();
        envs.insert("../escape".to_string(), Document::new());

        let err = write(temp.path(), Some(&envs)).unwrap_err();
        assert!(matches!(err, Error::InvalidName { .. }));
        assert!(!temp.path().join(DIR_ENVIRONMENTS).exists());
    }
}
