//! Conversion between app configuration directories and [`AppModel`]
//!
//! Each section of an app (auth, functions, data sources, ...) lives in its
//! own subdirectory and is handled by one module under [`sections`]. The
//! aggregate entry points are [`load_app`] and [`write_app`], or the
//! configurable [`AppLoader`] and [`AppWriter`].

pub mod discover;
pub mod loader;
pub mod metadata;
pub mod model;
pub mod names;
pub mod options;
pub mod scaffold;
pub mod sections;
pub mod writer;

pub use discover::find_app;
pub use loader::{load_app, AppLoader};
pub use metadata::{load_config_metadata, write_config_metadata, AppMetadata};
pub use model::AppModel;
pub use options::{CollisionPolicy, LoadOptions, WriteOptions};
pub use sections::{
    Auth, DataSource, Functions, GraphQl, Hosting, HttpEndpoint, Secrets, Service, SyncConfig,
};
pub use writer::{write_app, AppWriter};
