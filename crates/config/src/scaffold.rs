//! Building new apps in memory

use crate::metadata::AppMetadata;
use crate::model::AppModel;
use crate::sections::environments::Environments;
use crate::sections::{Auth, DataSource, Functions, GraphQl};
use appdir_core::{ConfigVersion, DeploymentModel, Document, Location};
use serde_json::{json, Value};

/// Environments every new app starts with
pub const DEFAULT_ENVIRONMENTS: [&str; 5] =
    ["no-environment", "development", "testing", "qa", "production"];

impl AppModel {
    /// A new app with the default environments, GraphQL settings, empty
    /// functions and auth with custom user data disabled
    pub fn new_app(
        name: impl Into<String>,
        app_id: impl Into<String>,
        location: Location,
        deployment_model: DeploymentModel,
        environment: Option<String>,
        config_version: ConfigVersion,
    ) -> Self {
        let environments: Environments = DEFAULT_ENVIRONMENTS
            .iter()
            .map(|env| (env.to_string(), object(json!({"values": {}}))))
            .collect();

        Self {
            metadata: AppMetadata {
                config_version,
                app_id: app_id.into(),
                name: name.into(),
                location,
                deployment_model,
                environment,
                allowed_request_origins: Vec::new(),
            },
            environments: Some(environments),
            graphql: Some(GraphQl {
                config: object(json!({"use_natural_pluralization": true})),
                custom_resolvers: Vec::new(),
            }),
            functions: Some(Functions::default()),
            auth: Some(Auth {
                providers: Some(Document::new()),
                custom_user_data: Some(object(json!({"enabled": false}))),
            }),
            ..Self::default()
        }
    }

    /// Add or replace an auth provider, creating the auth section if needed
    pub fn add_auth_provider(&mut self, name: impl Into<String>, provider: Document) {
        self.auth
            .get_or_insert_with(Auth::default)
            .providers
            .get_or_insert_with(Document::new)
            .insert(name.into(), Value::Object(provider));
    }

    /// Add a data source without rules
    pub fn add_data_source(&mut self, config: Document) {
        self.data_sources.push(DataSource {
            config,
            rules: Vec::new(),
        });
    }
}

fn object(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        _ => Document::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{load_app, write_app};
    use tempfile::TempDir;

    fn new_app() -> AppModel {
        AppModel::new_app(
            "todo",
            "",
            Location::UsVirginia,
            DeploymentModel::Global,
            None,
            ConfigVersion::LATEST,
        )
    }

    #[test]
    fn test_new_app_defaults() {
        let app = new_app();

        let environments = app.environments.as_ref().unwrap();
        assert_eq!(environments.len(), 5);
        assert_eq!(environments["qa"], object(json!({"values": {}})));
        assert_eq!(
            app.graphql.as_ref().unwrap().config["use_natural_pluralization"],
            true
        );
        assert_eq!(
            app.auth.as_ref().unwrap().custom_user_data,
            Some(object(json!({"enabled": false})))
        );
        assert_eq!(app.functions, Some(Functions::default()));
    }

    #[test]
    fn test_new_app_survives_write_and_load() {
        let temp = TempDir::new().unwrap();
        let mut app = new_app();
        app.add_auth_provider("anon-user", object(json!({"name": "anon-user", "type": "anon-user"})));
        app.add_data_source(object(json!({"name": "mongodb-atlas", "type": "mongodb-atlas"})));

        write_app(temp.path(), &app).unwrap();
        assert_eq!(load_app(temp.path()).unwrap(), app.canonicalized());
    }

    #[test]
    fn test_add_auth_provider_replaces_existing() {
        let mut app = AppModel::default();
        app.add_auth_provider("api-key", object(json!({"disabled": true})));
        app.add_auth_provider("api-key", object(json!({"disabled": false})));

        let providers = app.auth.unwrap().providers.unwrap();
        assert_eq!(providers.len(), 1);
        assert_eq!(providers["api-key"]["disabled"], false);
    }
}
