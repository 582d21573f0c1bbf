//! `secrets/`: secret declarations for the app and its services

use super::ensure_dir;
use appdir_core::{
    Document, Result, DIR_SECRETS, FILE_APP_SERVICES_SECRETS, FILE_SERVICES_SECRETS,
};
use appdir_utils::{is_dir, parse_document, write_document};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Secrets {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_services: Option<Document>,
    /// Per-service secrets keyed by service name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Document>,
}

pub fn parse(root: &Path) -> Result<Option<Secrets>> {
    let dir = root.join(DIR_SECRETS);
    if !is_dir(&dir)? {
        return Ok(None);
    }
    Ok(Some(Secrets {
        app_services: parse_document(&dir.join(FILE_APP_SERVICES_SECRETS))?,
        services: parse_document(&dir.join(FILE_SERVICES_SECRETS))?,
    }))
}

pub fn write(root: &Path, secrets: Option<&Secrets>) -> Result<()> {
    let Some(secrets) = secrets else {
        return Ok(());
    };
    let dir = root.join(DIR_SECRETS);
    ensure_dir(&dir)?;
    if let Some(app_services) = &secrets.app_services {
        write_document(&dir.join(FILE_APP_SERVICES_SECRETS), app_services)?;
    }
    if let Some(services) = &secrets.services {
        write_document(&dir.join(FILE_SERVICES_SECRETS), services)?;
    }
    Ok(())
}
