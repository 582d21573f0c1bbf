//! Sections stored as one `<name>.json` per entry (`values/`, `triggers/`)

use super::{ensure_dir, require_document};
use crate::names::{require_segment, NameClaims};
use crate::options::CollisionPolicy;
use appdir_core::{Document, Result, EXT_JSON, KEY_NAME};
use appdir_utils::{walk, write_document, WalkOptions};
use std::path::Path;

/// Parse every `*.json` file directly under `root/<section>`
pub fn parse(root: &Path, section: &str) -> Result<Vec<Document>> {
    let mut docs = Vec::new();
    walk(
        &root.join(section),
        &WalkOptions::files_with_extension(EXT_JSON),
        |entry| {
            docs.push(require_document(entry.path())?);
            Ok(())
        },
    )?;
    Ok(docs)
}

/// File name an entry is written to
pub fn file_name(doc: &Document, section: &str) -> Result<String> {
    let name = require_segment(doc, section, KEY_NAME)?;
    Ok(format!("{name}.{EXT_JSON}"))
}

pub fn validate(docs: &[Document], section: &str, policy: CollisionPolicy) -> Result<()> {
    let mut claims = NameClaims::new(section, policy);
    docs.iter()
        .try_for_each(|doc| claims.claim(file_name(doc, section)?))
}

pub fn write(
    root: &Path,
    section: &str,
    docs: &[Document],
    policy: CollisionPolicy,
) -> Result<()> {
    validate(docs, section, policy)?;
    write_validated(root, section, docs)
}

pub(crate) fn write_validated(root: &Path, section: &str, docs: &[Document]) -> Result<()> {
    let dir = root.join(section);
    ensure_dir(&dir)?;
    for doc in docs {
        write_document(&dir.join(file_name(doc, section)?), doc)?;
    }
    Ok(())
}
