//! Load and write settings

use appdir_core::DEFAULT_SOURCE_EXTENSION;

/// What to do when two entities of one section derive the same name on disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Fail the write before anything in the section is written
    #[default]
    Reject,
    /// Write every entity in order, so the last one wins
    LastWriteWins,
}

/// Settings for loading an app directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Extension (without the dot) of function source files
    pub source_extension: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
        }
    }
}

/// Settings for writing an app directory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    pub on_collision: CollisionPolicy,
    /// Build the whole tree in a staging directory and swap it into place.
    ///
    /// The root is replaced wholesale, so files the model does not describe
    /// are dropped. Without staging, a failed write can leave a partially
    /// updated tree behind.
    pub staged: bool,
}
