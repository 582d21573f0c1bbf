use appdir_config::{write_app, AppModel};
use appdir_core::{ConfigVersion, DeploymentModel, Error, Location, Result, FILE_CONFIG};
use std::path::Path;
use tracing::info;

pub struct InitOptions {
    pub name: String,
    pub location: Location,
    pub deployment_model: DeploymentModel,
    pub environment: Option<String>,
    pub force: bool,
}

/// Scaffold a new app in `dir`
pub fn execute(dir: &Path, options: InitOptions) -> Result<()> {
    let config = dir.join(FILE_CONFIG);
    if config.exists() && !options.force {
        return Err(Error::configuration(format!(
            "{} already exists. Use --force to overwrite.",
            config.display()
        )));
    }

    let app = AppModel::new_app(
        options.name,
        "",
        options.location,
        options.deployment_model,
        options.environment,
        ConfigVersion::LATEST,
    );
    write_app(dir, &app)?;

    info!(dir = %dir.display(), name = %app.metadata.name, "created app");
    Ok(())
}
