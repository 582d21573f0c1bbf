//! `auth/`: authentication providers and custom user data

use super::ensure_dir;
use appdir_core::{Document, Result, DIR_AUTH, FILE_CUSTOM_USER_DATA, FILE_PROVIDERS};
use appdir_utils::{is_dir, parse_document, write_document};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Auth {
    /// Provider configs keyed by provider name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub providers: Option<Document>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_user_data: Option<Document>,
}

pub fn parse(root: &Path) -> Result<Option<Auth>> {
    let dir = root.join(DIR_AUTH);
    if !is_dir(&dir)? {
        return Ok(None);
    }

    Ok(Some(Auth {
        providers: parse_document(&dir.join(FILE_PROVIDERS))?,
        custom_user_data: parse_document(&dir.join(FILE_CUSTOM_USER_DATA))?,
    }))
}

pub fn write(root: &Path, auth: Option<&Auth>) -> Result<()> {
    let Some(auth) = auth else {
        return Ok(());
    };

    let dir = root.join(DIR_AUTH);
    ensure_dir(&dir)?;
    if let Some(providers) = &auth.providers {
        write_document(&dir.join(FILE_PROVIDERS), providers)?;
    }
    if let Some(custom_user_data) = &auth.custom_user_data {
        write_document(&dir.join(FILE_CUSTOM_USER_DATA), custom_user_data)?;
    }
    Ok(())
}
