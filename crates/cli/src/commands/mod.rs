use appdir_config::CollisionPolicy;
use appdir_core::{DeploymentModel, Location, Result};
use clap::Subcommand;
use std::path::PathBuf;

pub mod find;
pub mod init;
pub mod inspect;
pub mod normalize;

#[derive(Subcommand)]
pub enum Commands {
    /// Load an app directory and print it as one JSON document
    Inspect {
        /// App root directory
        dir: PathBuf,
    },

    /// Load an app directory and write it back in canonical form
    Normalize {
        /// App root directory
        dir: PathBuf,

        /// Build the new tree beside the app and swap it into place
        #[arg(long)]
        staged: bool,

        /// Let later entities overwrite earlier ones that share a file name
        #[arg(long)]
        last_write_wins: bool,
    },

    /// Create a new app directory with default settings
    Init {
        /// Directory to create the app in
        dir: PathBuf,

        /// App name
        #[arg(long)]
        name: String,

        /// Deployment location (e.g. US-VA, IE)
        #[arg(long)]
        location: Option<Location>,

        /// GLOBAL or LOCAL
        #[arg(long)]
        deployment_model: Option<DeploymentModel>,

        /// Environment the app runs as
        #[arg(long)]
        environment: Option<String>,

        /// Overwrite an app that already exists in the directory
        #[arg(short, long)]
        force: bool,
    },

    /// Print the root of the app containing a path
    Find {
        /// Where to start searching (defaults to the current directory)
        path: Option<PathBuf>,
    },
}

impl Commands {
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Inspect { dir } => {
                print!("{}", inspect::execute(&dir)?);
                Ok(())
            }
            Commands::Normalize {
                dir,
                staged,
                last_write_wins,
            } => {
                let policy = if last_write_wins {
                    CollisionPolicy::LastWriteWins
                } else {
                    CollisionPolicy::Reject
                };
                normalize::execute(&dir, staged, policy)
            }
            Commands::Init {
                dir,
                name,
                location,
                deployment_model,
                environment,
                force,
            } => init::execute(
                &dir,
                init::InitOptions {
                    name,
                    location: location.unwrap_or_default(),
                    deployment_model: deployment_model.unwrap_or_default(),
                    environment,
                    force,
                },
            ),
            Commands::Find { path } => {
                let root = find::execute(path.as_deref())?;
                println!("{}", root.display());
                Ok(())
            }
        }
    }
}
