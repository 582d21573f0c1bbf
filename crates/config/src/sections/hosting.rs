//! `hosting/`: static hosting metadata

use super::ensure_dir;
use appdir_core::{Document, Result, DIR_HOSTING, FILE_HOSTING_METADATA};
use appdir_utils::{is_dir, parse_document, write_document};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hosting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Document>,
}

pub fn parse(root: &Path) -> Result<Option<Hosting>> {
    let dir = root.join(DIR_HOSTING);
    if !is_dir(&dir)? {
        return Ok(None);
    }
    Ok(Some(Hosting {
        metadata: parse_document(&dir.join(FILE_HOSTING_METADATA))?,
    }))
}

pub fn write(root: &Path, hosting: Option<&Hosting>) -> Result<()> {
    let Some(hosting) = hosting else {
        return Ok(());
    };
    let dir = root.join(DIR_HOSTING);
    ensure_dir(&dir)?;
    if let Some(metadata) = &hosting.metadata {
        write_document(&dir.join(FILE_HOSTING_METADATA), metadata)?;
    }
    Ok(())
}
