//! `services/<name>/`: third-party services with incoming webhooks and rules

use super::{ensure_dir, named, require_document, webhooks};
use crate::names::{require_segment, NameClaims};
use crate::options::CollisionPolicy;
use appdir_core::{
    Document, Result, DIR_INCOMING_WEBHOOKS, DIR_RULES, DIR_SERVICES, FILE_CONFIG, KEY_NAME,
};
use appdir_utils::{walk, write_document, WalkOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;

const SECTION: &str = "services";
const WEBHOOK_SECTION: &str = "services.incoming_webhooks";
const RULE_SECTION: &str = "services.rules";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub config: Document,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub incoming_webhooks: Vec<Document>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Document>,
}

pub fn parse(root: &Path) -> Result<Vec<Service>> {
    let mut services = Vec::new();
    walk(&root.join(DIR_SERVICES), &WalkOptions::dirs(), |entry| {
        let dir = entry.path();
        services.push(Service {
            config: require_document(&dir.join(FILE_CONFIG))?,
            incoming_webhooks: webhooks::parse(&dir.join(DIR_INCOMING_WEBHOOKS))?,
            rules: named::parse(dir, DIR_RULES)?,
        });
        Ok(())
    })?;
    Ok(services)
}

pub fn validate(services: &[Service], policy: CollisionPolicy) -> Result<()> {
    let mut claims = NameClaims::new(SECTION, policy);
    services.iter().try_for_each(|service| {
        claims.claim(require_segment(&service.config, SECTION, KEY_NAME)?)?;
        webhooks::validate(&service.incoming_webhooks, WEBHOOK_SECTION, policy)?;
        named::validate(&service.rules, RULE_SECTION, policy)
    })
}

pub fn write(root: &Path, services: &[Service], policy: CollisionPolicy) -> Result<()> {
    validate(services, policy)?;
    write_validated(root, services)
}

pub(crate) fn write_validated(root: &Path, services: &[Service]) -> Result<()> {
    let dir = root.join(DIR_SERVICES);
    ensure_dir(&dir)?;
    for service in services {
        let service_dir = dir.join(require_segment(&service.config, SECTION, KEY_NAME)?);
        write_document(&service_dir.join(FILE_CONFIG), &service.config)?;

        if !service.incoming_webhooks.is_empty() {
            webhooks::write_validated(
                &service_dir.join(DIR_INCOMING_WEBHOOKS),
                &service.incoming_webhooks,
                WEBHOOK_SECTION,
            )?;
        }
        if !service.rules.is_empty() {
            named::write_validated(&service_dir, DIR_RULES, &service.rules)?;
        }
    }
    Ok(())
}
