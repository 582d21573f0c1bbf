//! Naming primitives shared by every section writer
//!
//! Entity directory and file names are read out of the entity's own
//! document. Everything that turns a document field into a path goes
//! through [`require_segment`], and duplicate names within a section are
//! caught by [`NameClaims`].

use crate::options::CollisionPolicy;
use appdir_core::{Document, Error, Result};
use serde_json::Value;
use std::collections::BTreeSet;

/// Extract a string field from `doc` or fail with a missing-field error
pub fn require_str<'a>(doc: &'a Document, section: &str, field: &str) -> Result<&'a str> {
    doc.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| Error::missing_field(section, field, "a string"))
}

/// Extract a string field that will become a single path component
pub fn require_segment<'a>(doc: &'a Document, section: &str, field: &str) -> Result<&'a str> {
    let name = require_str(doc, section, field)?;
    validate_segment(section, name)?;
    Ok(name)
}

/// Validates that `name` can be used as one directory or file name
pub fn validate_segment(section: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_name(section, name, "name is empty"));
    }
    if name == "." || name == ".." {
        return Err(Error::invalid_name(section, name, "name is a relative path component"));
    }
    if name.contains(['/', '\\']) {
        return Err(Error::invalid_name(section, name, "name contains a path separator"));
    }
    if name.contains('\0') {
        return Err(Error::invalid_name(section, name, "name contains a NUL byte"));
    }
    Ok(())
}

/// Fails when `name` equals a file the writer creates beside it
pub fn reject_reserved(section: &str, name: &str, reserved: &[&str]) -> Result<()> {
    if reserved.contains(&name) {
        return Err(Error::invalid_name(
            section,
            name,
            "name is reserved for a file in the same directory",
        ));
    }
    Ok(())
}

/// Validates a `/`-separated relative path, component by component
pub fn validate_relative_path(section: &str, path: &str) -> Result<()> {
    path.split('/')
        .try_for_each(|component| validate_segment(section, component))
        .map_err(|_| Error::invalid_name(section, path, "not a relative path below the section"))
}

/// Tracks the names already used within one section
#[derive(Debug)]
pub struct NameClaims {
    section: String,
    policy: CollisionPolicy,
    seen: BTreeSet<String>,
}

impl NameClaims {
    pub fn new(section: impl Into<String>, policy: CollisionPolicy) -> Self {
        Self {
            section: section.into(),
            policy,
            seen: BTreeSet::new(),
        }
    }

    /// Record `name`, failing on a repeat unless the policy lets the later
    /// entity overwrite the earlier one
    pub fn claim(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if self.seen.contains(&name) {
            return match self.policy {
                CollisionPolicy::Reject => Err(Error::name_collision(&self.section, name)),
                CollisionPolicy::LastWriteWins => {
                    tracing::warn!(
                        section = %self.section,
                        name = %name,
                        "duplicate name, later entry overwrites earlier one"
                    );
                    Ok(())
                }
            };
        }
        self.seen.insert(name);
        Ok(())
    }
}
