//! `http_endpoints/<name>/`: HTTP endpoints and their incoming webhooks

use super::{ensure_dir, require_document, webhooks};
use crate::names::{require_segment, NameClaims};
use crate::options::CollisionPolicy;
use appdir_core::{Document, Result, DIR_HTTP_ENDPOINTS, FILE_CONFIG, KEY_NAME};
use appdir_utils::{walk, write_document, WalkOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

const SECTION: &str = "http_endpoints";
const WEBHOOK_SECTION: &str = "http_endpoints.incoming_webhooks";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpEndpoint {
    /// Endpoint config, named by its `"name"` field
    #[serde(default)]
    pub config: Document,
    /// Webhook configs, each carrying its source code under `"source"`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub incoming_webhooks: Vec<Document>,
}

pub fn parse(root: &Path) -> Result<Vec<HttpEndpoint>> {
    let mut endpoints = Vec::new();
    walk(&root.join(DIR_HTTP_ENDPOINTS), &WalkOptions::dirs(), |entry| {
        let dir = entry.path();
        let endpoint = HttpEndpoint {
            config: require_document(&dir.join(FILE_CONFIG))?,
            incoming_webhooks: webhooks::parse(dir)?,
        };
        debug!(
            endpoint = %dir.display(),
            webhooks = endpoint.incoming_webhooks.len(),
            "parsed http endpoint"
        );
        endpoints.push(endpoint);
        Ok(())
    })?;
    Ok(endpoints)
}

pub fn validate(endpoints: &[HttpEndpoint], policy: CollisionPolicy) -> Result<()> {
    let mut claims = NameClaims::new(SECTION, policy);
    endpoints.iter().try_for_each(|endpoint| {
        claims.claim(require_segment(&endpoint.config, SECTION, KEY_NAME)?)?;
        webhooks::validate(&endpoint.incoming_webhooks, WEBHOOK_SECTION, policy)
    })
}

pub fn write(root: &Path, endpoints: &[HttpEndpoint], policy: CollisionPolicy) -> Result<()> {
    validate(endpoints, policy)?;
    write_validated(root, endpoints)
}

pub(crate) fn write_validated(root: &Path, endpoints: &[HttpEndpoint]) -> Result<()> {
    let dir = root.join(DIR_HTTP_ENDPOINTS);
    ensure_dir(&dir)?;
    for endpoint in endpoints {
        let endpoint_dir = dir.join(require_segment(&endpoint.config, SECTION, KEY_NAME)?);
        write_document(&endpoint_dir.join(FILE_CONFIG), &endpoint.config)?;
        webhooks::write_validated(&endpoint_dir, &endpoint.incoming_webhooks, WEBHOOK_SECTION)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use appdir_core::Error;
    use serde_json::{json, Value};
    use std::fs;
    use tempfile::TempDir;

    fn doc(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    fn github_endpoint() -> HttpEndpoint {
        HttpEndpoint {
            config: doc(json!({"name": "github", "type": "github", "config": {}})),
            incoming_webhooks: vec![doc(json!({
                "name": "onPush",
                "respond_result": true,
                "source": "exports = async function(payload) { return payload; };\n",
            }))],
        }
    }

    #[test]
    fn test_http_endpoint_round_trip() {
        let temp = TempDir::new().unwrap();
        let endpoints = vec![github_endpoint()];

        write(temp.path(), &endpoints, CollisionPolicy::Reject).unwrap();

        let base = temp.path().join("http_endpoints/github");
        assert!(base.join("config.json").is_file());
        assert!(base.join("onPush/config.json").is_file());
        assert!(base.join("onPush/source.js").is_file());
        assert_eq!(parse(temp.path()).unwrap(), endpoints);
    }

    #[test]
    fn test_endpoint_without_config_fails_load() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("http_endpoints/empty")).unwrap();

        let err = parse(temp.path()).unwrap_err();
        assert!(matches!(err, Error::MissingFile { .. }));
    }

    #[test]
    fn test_missing_endpoint_name() {
        let temp = TempDir::new().unwrap();
        let mut endpoint = github_endpoint();
        endpoint.config.remove(KEY_NAME);

        let err = write(temp.path(), &[endpoint], CollisionPolicy::Reject).unwrap_err();
        assert!(matches!(err, Error::MissingField { ref section, .. } if section == SECTION));
        assert!(!temp.path().join(DIR_HTTP_ENDPOINTS).exists());
    }

    #[test]
    fn test_duplicate_webhook_names_rejected() {
        let temp = TempDir::new().unwrap();
        let mut endpoint = github_endpoint();
        let hook = endpoint.incoming_webhooks[0].clone();
        endpoint.incoming_webhooks.push(hook);

        let err = write(temp.path(), &[endpoint], CollisionPolicy::Reject).unwrap_err();
        assert!(matches!(err, Error::NameCollision { ref section, .. } if section == WEBHOOK_SECTION));
    }
}
