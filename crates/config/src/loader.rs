//! Loading an app directory into an [`AppModel`]

use crate::metadata::load_config_metadata;
use crate::model::AppModel;
use crate::options::LoadOptions;
use crate::sections::{
    auth, data_sources, environments, functions, graphql, hosting, http_endpoints, named,
    secrets, services, sync,
};
use appdir_core::{Error, Result, DIR_TRIGGERS, DIR_VALUES, FILE_CONFIG};
use appdir_utils::is_dir;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Loads the app rooted at a directory
#[derive(Debug, Clone)]
pub struct AppLoader {
    root: PathBuf,
    options: LoadOptions,
}

impl AppLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            options: LoadOptions::default(),
        }
    }

    /// Set the extension (without the dot) of function source files
    pub fn source_extension(mut self, extension: impl Into<String>) -> Self {
        self.options.source_extension = extension.into();
        self
    }

    pub fn options(mut self, options: LoadOptions) -> Self {
        self.options = options;
        self
    }

    /// Load the app.
    ///
    /// The root must be a directory holding `config.json`. Every other
    /// section is optional and left empty when its directory is missing.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn load(&self) -> Result<AppModel> {
        let root = self.root.as_path();
        if !is_dir(root)? {
            return Err(Error::not_a_directory(root));
        }
        let metadata =
            load_config_metadata(root)?.ok_or_else(|| Error::missing_file(root.join(FILE_CONFIG)))?;

        let model = AppModel {
            metadata,
            secrets: secrets::parse(root)?,
            environments: environments::parse(root)?,
            values: named::parse(root, DIR_VALUES)?,
            auth: auth::parse(root)?,
            sync: sync::parse(root)?,
            functions: functions::parse(root, &self.options.source_extension)?,
            triggers: named::parse(root, DIR_TRIGGERS)?,
            graphql: graphql::parse(root)?,
            services: services::parse(root)?,
            data_sources: data_sources::parse(root)?,
            http_endpoints: http_endpoints::parse(root)?,
            hosting: hosting::parse(root)?,
        };

        debug!(
            name = %model.metadata.name,
            values = model.values.len(),
            triggers = model.triggers.len(),
            data_sources = model.data_sources.len(),
            http_endpoints = model.http_endpoints.len(),
            services = model.services.len(),
            "loaded app"
        );
        Ok(model)
    }
}

/// Load the app at `root` with default options
pub fn load_app(root: &Path) -> Result<AppModel> {
    AppLoader::new(root).load()
}
