//! Core domain types, errors, and constants for the `appdir` workspace.
//!
//! ## Key Components
//!
//! - **`errors`**: Defines the primary `Error` enum and `Result` type alias,
//!   centralizing every failure mode of loading or writing an app directory.
//! - **`types`**: The open-ended `Document` type and the small enums stored in
//!   the root `config.json` (`Location`, `DeploymentModel`, `ConfigVersion`).
//! - **`constants`**: The fixed, case-sensitive file and directory names of
//!   the on-disk layout.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result},
    types::*,
};
