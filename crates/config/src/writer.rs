//! Writing an [`AppModel`] out as an app directory

use crate::metadata::write_config_metadata;
use crate::model::AppModel;
use crate::options::{CollisionPolicy, WriteOptions};
use crate::sections::{
    auth, data_sources, environments, functions, graphql, hosting, http_endpoints, named,
    secrets, services, sync,
};
use appdir_core::{Error, Result, DIR_TRIGGERS, DIR_VALUES};
use appdir_utils::is_dir;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tempfile::{Builder, TempDir};
use tracing::{debug, instrument};

const STAGING_PREFIX: &str = ".appdir-staging-";
const BACKUP_PREFIX: &str = ".appdir-backup-";

#[cfg(unix)]
const DIR_MODE: u32 = 0o755;

/// Writes an app model to a directory
#[derive(Debug, Clone)]
pub struct AppWriter {
    root: PathBuf,
    options: WriteOptions,
}

impl AppWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            options: WriteOptions::default(),
        }
    }

    /// How to handle two entities deriving the same file name
    pub fn on_collision(mut self, policy: CollisionPolicy) -> Self {
        self.options.on_collision = policy;
        self
    }

    /// Build the tree in a staging directory and swap it into place
    pub fn staged(mut self, staged: bool) -> Self {
        self.options.staged = staged;
        self
    }

    pub fn options(mut self, options: WriteOptions) -> Self {
        self.options = options;
        self
    }

    /// Validate the whole model, then write it.
    ///
    /// Nothing is written when validation fails. A failure after that point
    /// leaves the files written so far in place, unless the writer is staged.
    #[instrument(skip(self, model), fields(root = %self.root.display(), staged = self.options.staged))]
    pub fn write(&self, model: &AppModel) -> Result<()> {
        model.validate(self.options.on_collision)?;

        if self.options.staged {
            self.write_staged(model)
        } else {
            write_tree(&self.root, model)
        }
    }

    fn write_staged(&self, model: &AppModel) -> Result<()> {
        let root = resolve_root(&self.root)?;
        let parent = root
            .parent()
            .ok_or_else(|| Error::configuration("cannot stage a write to the filesystem root"))?;
        fs::create_dir_all(parent)
            .map_err(|e| Error::file_system(parent, "create directory", e))?;

        let staging = temp_dir_in(parent, STAGING_PREFIX)?;
        write_tree(staging.path(), model)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(staging.path(), fs::Permissions::from_mode(DIR_MODE))
                .map_err(|e| Error::file_system(staging.path(), "set permissions", e))?;
        }

        if !is_dir(&root)? {
            return rename(staging.path(), &root);
        }

        // The previous tree is removed when `backup` drops
        let backup = temp_dir_in(parent, BACKUP_PREFIX)?;
        let previous = backup.path().join("previous");
        rename(&root, &previous)?;
        if let Err(e) = rename(staging.path(), &root) {
            rename(&previous, &root)?;
            return Err(e);
        }

        debug!(root = %root.display(), "swapped staged tree into place");
        Ok(())
    }
}

/// Write every section in a fixed order
fn write_tree(root: &Path, model: &AppModel) -> Result<()> {
    write_config_metadata(root, &model.metadata)?;
    secrets::write(root, model.secrets.as_ref())?;
    environments::write_validated(root, model.environments.as_ref())?;
    named::write_validated(root, DIR_VALUES, &model.values)?;
    graphql::write_validated(root, model.graphql.as_ref())?;
    services::write_validated(root, &model.services)?;
    functions::write_validated(root, model.functions.as_ref())?;
    auth::write(root, model.auth.as_ref())?;
    sync::write(root, model.sync.as_ref())?;
    data_sources::write_validated(root, &model.data_sources)?;
    http_endpoints::write_validated(root, &model.http_endpoints)?;
    named::write_validated(root, DIR_TRIGGERS, &model.triggers)?;
    hosting::write(root, model.hosting.as_ref())?;

    debug!(root = %root.display(), "wrote app");
    Ok(())
}

/// Absolute form of `root` without `.` or `..` components, so that its
/// parent is the directory that actually contains it
fn resolve_root(root: &Path) -> Result<PathBuf> {
    let absolute = if root.is_absolute() {
        root.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(root))
            .map_err(|e| Error::file_system(root, "resolve current directory", e))?
    };

    match fs::canonicalize(&absolute) {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let mut resolved = PathBuf::new();
            for component in absolute.components() {
                match component {
                    Component::CurDir => {}
                    Component::ParentDir => {
                        resolved.pop();
                    }
                    other => resolved.push(other),
                }
            }
            Ok(resolved)
        }
        Err(e) => Err(Error::file_system(&absolute, "canonicalize", e)),
    }
}

fn temp_dir_in(parent: &Path, prefix: &str) -> Result<TempDir> {
    Builder::new()
        .prefix(prefix)
        .tempdir_in(parent)
        .map_err(|e| Error::file_system(parent, "create temporary directory", e))
}

fn rename(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|e| Error::file_system(to, "rename", e))
}

/// Write `model` to `root` with default options
pub fn write_app(root: &Path, model: &AppModel) -> Result<()> {
    AppWriter::new(root).write(model)
}
