//! JSON document codec
//!
//! Reads tolerate absent files by returning "no data" instead of failing.
//! Writes are pretty-printed with two-space indentation, sorted keys and a
//! trailing newline, so writing the same value twice is byte-identical.

use crate::atomic_file::write_atomic;
use appdir_core::{Document, Error, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Parse a JSON object from `path`.
///
/// Returns `Ok(None)` when the file does not exist. An empty file is an
/// empty document. Invalid JSON, or a top-level value that is not an object,
/// is a [`Error::MalformedDocument`] naming the file.
pub fn parse_document(path: &Path) -> Result<Option<Document>> {
    let Some(contents) = read_optional(path)? else {
        return Ok(None);
    };
    if contents.trim().is_empty() {
        return Ok(Some(Document::new()));
    }

    match serde_json::from_str(&contents).map_err(|e| Error::malformed_json(path, e))? {
        Value::Object(doc) => Ok(Some(doc)),
        other => Err(Error::malformed(
            path,
            format!("expected a JSON object, found {}", kind(&other)),
        )),
    }
}

/// Parse a JSON array of objects from `path`.
///
/// An absent or empty file yields an empty sequence.
pub fn parse_document_array(path: &Path) -> Result<Vec<Document>> {
    let Some(contents) = read_optional(path)? else {
        return Ok(Vec::new());
    };
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }

    let items = match serde_json::from_str(&contents).map_err(|e| Error::malformed_json(path, e))? {
        Value::Array(items) => items,
        other => {
            return Err(Error::malformed(
                path,
                format!("expected a JSON array, found {}", kind(&other)),
            ))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(doc) => Ok(doc),
            other => Err(Error::malformed(
                path,
                format!("element {index}: expected a JSON object, found {}", kind(&other)),
            )),
        })
        .collect()
}

/// Read a source file verbatim, `Ok(None)` when it does not exist
pub fn read_source(path: &Path) -> Result<Option<String>> {
    read_optional(path)
}

/// Render a value the way every document on disk is formatted.
///
/// The value passes through [`Value`] first so struct fields are emitted in
/// the same lexicographic key order as open documents.
pub fn render_document<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let value = serde_json::to_value(value)?;
    let mut rendered = serde_json::to_string_pretty(&value)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Serialize `value` to `path`, creating parent directories and replacing
/// any existing file.
pub fn write_document<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let rendered = render_document(value)?;
    write_atomic(path, rendered.as_bytes())
}

/// Write source text to `path` unchanged
pub fn write_source(path: &Path, source: &str) -> Result<()> {
    write_atomic(path, source.as_bytes())
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::file_system(path, "read", e)),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
