//! The in-memory app model
//!
//! [`AppModel`] aggregates the root metadata and every section. It is also
//! the payload handed to remote collaborators, so it serializes as one JSON
//! document with section fields omitted when absent or empty.

use crate::metadata::AppMetadata;
use crate::options::CollisionPolicy;
use crate::sections::environments::Environments;
use crate::sections::{
    data_sources, environments, functions, graphql, http_endpoints, named, services, Auth,
    DataSource, Functions, GraphQl, Hosting, HttpEndpoint, Secrets, Service, SyncConfig,
};
use appdir_core::{
    Document, Result, DIR_TRIGGERS, DIR_VALUES, EXT_JSON, KEY_COLLECTION, KEY_DATABASE,
    KEY_FIELD_NAME, KEY_NAME, KEY_ON_TYPE,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppModel {
    #[serde(flatten)]
    pub metadata: AppMetadata,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<Document>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triggers: Vec<Document>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_sources: Vec<DataSource>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub http_endpoints: Vec<HttpEndpoint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<Service>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<Auth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub functions: Option<Functions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graphql: Option<GraphQl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync: Option<SyncConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secrets: Option<Secrets>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environments: Option<Environments>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosting: Option<Hosting>,
}

impl AppModel {
    /// Check every name the writers will derive, without touching the disk
    pub fn validate(&self, policy: CollisionPolicy) -> Result<()> {
        environments::validate(self.environments.as_ref())?;
        named::validate(&self.values, DIR_VALUES, policy)?;
        graphql::validate(self.graphql.as_ref(), policy)?;
        services::validate(&self.services, policy)?;
        functions::validate(self.functions.as_ref())?;
        data_sources::validate(&self.data_sources, policy)?;
        http_endpoints::validate(&self.http_endpoints, policy)?;
        named::validate(&self.triggers, DIR_TRIGGERS, policy)
    }

    /// Sort every sequence into the order a load produces.
    ///
    /// Loading lists entries by directory or file name, so a model written
    /// and loaded back only compares equal to a canonical model.
    pub fn canonicalize(&mut self) {
        sort_by_file_name(&mut self.values);
        sort_by_file_name(&mut self.triggers);

        self.data_sources
            .sort_by_cached_key(|ds| str_field(&ds.config, KEY_NAME));
        for data_source in &mut self.data_sources {
            data_source.rules.sort_by_cached_key(|rule| {
                (str_field(rule, KEY_DATABASE), str_field(rule, KEY_COLLECTION))
            });
        }

        self.http_endpoints
            .sort_by_cached_key(|endpoint| str_field(&endpoint.config, KEY_NAME));
        for endpoint in &mut self.http_endpoints {
            endpoint
                .incoming_webhooks
                .sort_by_cached_key(|webhook| str_field(webhook, KEY_NAME));
        }

        self.services
            .sort_by_cached_key(|service| str_field(&service.config, KEY_NAME));
        for service in &mut self.services {
            service
                .incoming_webhooks
                .sort_by_cached_key(|webhook| str_field(webhook, KEY_NAME));
            sort_by_file_name(&mut service.rules);
        }

        if let Some(graphql) = &mut self.graphql {
            graphql.custom_resolvers.sort_by_cached_key(|resolver| {
                format!(
                    "{}_{}.{EXT_JSON}",
                    str_field(resolver, KEY_ON_TYPE),
                    str_field(resolver, KEY_FIELD_NAME)
                )
            });
        }
    }

    /// A canonical copy of this model
    #[must_use]
    pub fn canonicalized(mut self) -> Self {
        self.canonicalize();
        self
    }
}

fn str_field(doc: &Document, field: &str) -> String {
    doc.get(field)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

/// `<name>.json` entries sort by the file name, which differs from sorting
/// by name when a name is a prefix of another (`a.json` > `a-b.json`).
fn sort_by_file_name(docs: &mut [Document]) {
    docs.sort_by_cached_key(|doc| format!("{}.{EXT_JSON}", str_field(doc, KEY_NAME)));
}
