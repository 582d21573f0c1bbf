//! One module per configuration section
//!
//! Every module exposes `parse` (directory to memory) and `write`. Sections
//! that derive file or directory names from entity fields also expose
//! `validate`, and their `write` validates before persisting. The aggregate
//! writer validates the whole model up front and then calls
//! `write_validated`, so nothing touches the disk before every section is
//! known to be writable.

pub mod auth;
pub mod data_sources;
pub mod environments;
pub mod functions;
pub mod graphql;
pub mod hosting;
pub mod http_endpoints;
pub mod named;
pub mod secrets;
pub mod services;
pub mod sync;
pub mod webhooks;

pub use auth::Auth;
pub use data_sources::DataSource;
pub use functions::Functions;
pub use graphql::GraphQl;
pub use hosting::Hosting;
pub use http_endpoints::HttpEndpoint;
pub use secrets::Secrets;
pub use services::Service;
pub use sync::SyncConfig;

use appdir_core::{Document, Error, Result};
use appdir_utils::parse_document;
use std::fs;
use std::path::Path;

/// Parse a document the layout requires to be present
pub(crate) fn require_document(path: &Path) -> Result<Document> {
    parse_document(path)?.ok_or_else(|| Error::missing_file(path))
}

/// Create a section directory, even when it will stay empty
pub(crate) fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| Error::file_system(dir, "create directory", e))
}
