//! `functions/`: function configs and their source files
//!
//! `functions/config.json` holds an array of per-function configs. Source
//! files may be nested at any depth below `functions/` for namespacing and
//! are keyed by their `/`-separated path relative to that directory.

use crate::names::validate_relative_path;
use appdir_core::{Document, Error, Result, DIR_FUNCTIONS, FILE_CONFIG};
use appdir_utils::{
    is_dir, parse_document_array, read_source, walk, write_document, write_source, WalkOptions,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Component, Path};
use tracing::debug;

const SECTION: &str = "functions";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Functions {
    #[serde(rename = "config", default, skip_serializing_if = "Vec::is_empty")]
    pub configs: Vec<Document>,
    /// Source code keyed by relative path, e.g. `"auth/onLogin.js"`
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub sources: BTreeMap<String, String>,
}

pub fn parse(root: &Path, source_extension: &str) -> Result<Option<Functions>> {
    let dir = root.join(DIR_FUNCTIONS);
    if !is_dir(&dir)? {
        return Ok(None);
    }

    let configs = parse_document_array(&dir.join(FILE_CONFIG))?;

    let mut sources = BTreeMap::new();
    walk(
        &dir,
        &WalkOptions::files_with_extension(source_extension).recursive(),
        |entry| {
            let key = relative_key(&dir, entry.path())?;
            let source = read_source(entry.path())?
                .ok_or_else(|| Error::missing_file(entry.path()))?;
            sources.insert(key, source);
            Ok(())
        },
    )?;

    debug!(
        configs = configs.len(),
        sources = sources.len(),
        "parsed functions"
    );
    Ok(Some(Functions { configs, sources }))
}

/// `/`-joined path of `path` relative to `base`, independent of platform
fn relative_key(base: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(base).map_err(|_| {
        Error::configuration(format!(
            "'{}' is not below '{}'",
            path.display(),
            base.display()
        ))
    })?;

    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str().ok_or_else(|| {
                Error::configuration(format!("'{}' is not valid UTF-8", path.display()))
            })?),
            _ => {
                return Err(Error::invalid_name(
                    SECTION,
                    relative.to_string_lossy(),
                    "unexpected path component",
                ))
            }
        }
    }
    Ok(parts.join("/"))
}

pub fn validate(functions: Option<&Functions>) -> Result<()> {
    let Some(functions) = functions else {
        return Ok(());
    };
    for path in functions.sources.keys() {
        validate_relative_path(SECTION, path)?;
        if path.split('/').next() == Some(FILE_CONFIG) {
            return Err(Error::invalid_name(
                SECTION,
                path,
                "reserved for the function configs",
            ));
        }
        // Keys sort right after their own directory prefix
        let directory = format!("{path}/");
        if let Some(nested) = functions
            .sources
            .range(directory.clone()..)
            .map(|(key, _)| key)
            .next()
            .filter(|key| key.starts_with(&directory))
        {
            return Err(Error::invalid_name(
                SECTION,
                nested,
                "a parent path is also a source file",
            ));
        }
    }
    Ok(())
}

/// Write the section; an absent section is written as an empty one
pub fn write(root: &Path, functions: Option<&Functions>) -> Result<()> {
    validate(functions)?;
    write_validated(root, functions)
}

pub(crate) fn write_validated(root: &Path, functions: Option<&Functions>) -> Result<()> {
    let empty = Functions::default();
    let functions = functions.unwrap_or(&empty);

    let dir = root.join(DIR_FUNCTIONS);
    write_document(&dir.join(FILE_CONFIG), &functions.configs)?;
    for (path, source) in &functions.sources {
        let target = path.split('/').fold(dir.clone(), |acc, part| acc.join(part));
        write_source(&target, source)?;
    }
    Ok(())
}
