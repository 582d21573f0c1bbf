//! Root-level app metadata stored in `<root>/config.json`

use appdir_core::{
    ConfigVersion, DeploymentModel, Error, Location, Result, FILE_CONFIG,
};
use appdir_utils::{parse_document, write_document};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Scalar fields describing the app as a whole
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppMetadata {
    #[serde(default)]
    pub config_version: ConfigVersion,

    /// Remote identifier, empty until the app has been created remotely
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub app_id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Location::is_unset")]
    pub location: Location,

    #[serde(default, skip_serializing_if = "DeploymentModel::is_unset")]
    pub deployment_model: DeploymentModel,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_request_origins: Vec<String>,
}

/// Read the root `config.json`, `Ok(None)` when there is none
pub fn load_config_metadata(root: &Path) -> Result<Option<AppMetadata>> {
    let path = root.join(FILE_CONFIG);
    let Some(doc) = parse_document(&path)? else {
        return Ok(None);
    };
    serde_json::from_value(Value::Object(doc))
        .map(Some)
        .map_err(|e| Error::malformed_json(&path, e))
}

/// Write the root `config.json`, creating `root` if needed
pub fn write_config_metadata(root: &Path, metadata: &AppMetadata) -> Result<()> {
    write_document(&root.join(FILE_CONFIG), metadata)
}
