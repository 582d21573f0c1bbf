//! Incoming webhooks: `<dir>/<webhook>/config.json` plus `source.js`
//!
//! On disk the webhook's source code sits beside its config; in memory it is
//! merged into the config under the `"source"` key.

use super::require_document;
use crate::names::{reject_reserved, require_segment, require_str, NameClaims};
use crate::options::CollisionPolicy;
use appdir_core::{Document, Error, Result, FILE_CONFIG, FILE_SOURCE, KEY_NAME, KEY_SOURCE};
use appdir_utils::{read_source, walk, write_document, write_source, WalkOptions};
use serde_json::Value;
use std::path::Path;

/// Parse every webhook directory directly under `dir`
pub fn parse(dir: &Path) -> Result<Vec<Document>> {
    let mut webhooks = Vec::new();
    walk(dir, &WalkOptions::dirs(), |entry| {
        let webhook_dir = entry.path();
        let mut webhook = require_document(&webhook_dir.join(FILE_CONFIG))?;

        let source_path = webhook_dir.join(FILE_SOURCE);
        let source = read_source(&source_path)?.ok_or_else(|| Error::missing_file(&source_path))?;
        webhook.insert(KEY_SOURCE.to_string(), Value::String(source));

        webhooks.push(webhook);
        Ok(())
    })?;
    Ok(webhooks)
}

pub fn validate(webhooks: &[Document], section: &str, policy: CollisionPolicy) -> Result<()> {
    let mut claims = NameClaims::new(section, policy);
    webhooks.iter().try_for_each(|webhook| {
        require_str(webhook, section, KEY_SOURCE)?;
        let name = require_segment(webhook, section, KEY_NAME)?;
        // Endpoint webhooks share a directory with the endpoint's config.json
        reject_reserved(section, name, &[FILE_CONFIG, FILE_SOURCE])?;
        claims.claim(name)
    })
}

/// Write validated webhooks below `dir`
pub(crate) fn write_validated(dir: &Path, webhooks: &[Document], section: &str) -> Result<()> {
    for webhook in webhooks {
        let webhook_dir = dir.join(require_segment(webhook, section, KEY_NAME)?);
        let source = require_str(webhook, section, KEY_SOURCE)?;

        let mut config = webhook.clone();
        config.remove(KEY_SOURCE);

        write_document(&webhook_dir.join(FILE_CONFIG), &config)?;
        write_source(&webhook_dir.join(FILE_SOURCE), source)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn webhook(name: &str, source: &str) -> Document {
        json!({
            "name": name,
            "run_as_authed_user": false,
            "options": {"httpMethod": "POST", "validationMethod": "NO_VALIDATION"},
            "source": source,
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[test]
    fn test_source_is_split_out_and_merged_back() {
        let temp = TempDir::new().unwrap();
        let hooks = vec![webhook("onPush", "exports = function(payload) {};\n")];

        validate(&hooks, "http_endpoints", CollisionPolicy::Reject).unwrap();
        write_validated(temp.path(), &hooks, "http_endpoints").unwrap();

        let config = fs::read_to_string(temp.path().join("onPush").join(FILE_CONFIG)).unwrap();
        assert!(!config.contains("\"source\""));
        let source = fs::read_to_string(temp.path().join("onPush").join(FILE_SOURCE)).unwrap();
        assert_eq!(source, "exports = function(payload) {};\n");

        assert_eq!(parse(temp.path()).unwrap(), hooks);
    }

    #[test]
    fn test_missing_source_field_rejected() {
        let mut hook = webhook("noSource", "");
        hook.remove(KEY_SOURCE);

        let err = validate(&[hook], "http_endpoints", CollisionPolicy::Reject).unwrap_err();
        assert!(matches!(err, Error::MissingField { ref field, .. } if field == "source"));
    }

    #[test]
    fn test_missing_source_file_fails_load() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("orphan");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join(FILE_CONFIG), r#"{"name": "orphan"}"#).unwrap();

        let err = parse(temp.path()).unwrap_err();
        assert!(matches!(err, Error::MissingFile { .. }));
    }

    #[test]
    fn test_webhook_named_like_endpoint_file_rejected() {
        for name in [FILE_CONFIG, FILE_SOURCE] {
            let hooks = vec![webhook(name, "exports = () => {};\n")];
            let err = validate(&hooks, "http_endpoints", CollisionPolicy::Reject).unwrap_err();
            assert!(matches!(err, Error::InvalidName { name: ref n, .. } if n == name));
        }
    }
}
