use std::path::PathBuf;

/// Result type alias for appdir operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for loading and writing app directories
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File system operations
    #[error("file system {operation} operation failed for '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// A path that must be a directory is something else
    #[error("expected a directory at '{path}'")]
    NotADirectory { path: PathBuf },

    /// Invalid JSON, or valid JSON of the wrong top-level shape
    #[error("malformed document '{path}': {message}")]
    MalformedDocument {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// A file the layout requires is absent
    #[error("missing required file '{path}'")]
    MissingFile { path: PathBuf },

    /// A document lacks a field needed to derive a path
    #[error("{section}: missing required field '{field}' (expected {expected})")]
    MissingField {
        section: String,
        field: String,
        expected: &'static str,
    },

    /// A derived name cannot be used as a single path segment
    #[error("{section}: invalid name '{name}': {reason}")]
    InvalidName {
        section: String,
        name: String,
        reason: &'static str,
    },

    /// Two entities of one section derive the same directory or file name
    #[error("{section}: more than one entry resolves to '{name}'")]
    NameCollision { section: String, name: String },

    /// JSON serialization/deserialization errors outside of a file context
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json {
            message: error.to_string(),
            source: error,
        }
    }
}

// Helper methods for creating errors with context
impl Error {
    /// Create a file system error with context
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    #[must_use]
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Error::NotADirectory { path: path.into() }
    }

    /// Create a malformed document error without an underlying parser error
    #[must_use]
    pub fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::MalformedDocument {
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a malformed document error from a serde_json failure
    #[must_use]
    pub fn malformed_json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Error::MalformedDocument {
            path: path.into(),
            message: source.to_string(),
            source: Some(source),
        }
    }

    #[must_use]
    pub fn missing_file(path: impl Into<PathBuf>) -> Self {
        Error::MissingFile { path: path.into() }
    }

    /// Create a missing-required-field error
    #[must_use]
    pub fn missing_field(
        section: impl Into<String>,
        field: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Error::MissingField {
            section: section.into(),
            field: field.into(),
            expected,
        }
    }

    #[must_use]
    pub fn invalid_name(
        section: impl Into<String>,
        name: impl Into<String>,
        reason: &'static str,
    ) -> Self {
        Error::InvalidName {
            section: section.into(),
            name: name.into(),
            reason,
        }
    }

    #[must_use]
    pub fn name_collision(section: impl Into<String>, name: impl Into<String>) -> Self {
        Error::NameCollision {
            section: section.into(),
            name: name.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// The file or directory an error refers to, when it has one
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Error::FileSystem { path, .. }
            | Error::NotADirectory { path }
            | Error::MalformedDocument { path, .. }
            | Error::MissingFile { path } => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message_names_section_and_field() {
        let err = Error::missing_field("data_sources", "name", "a string");
        assert_eq!(
            err.to_string(),
            "data_sources: missing required field 'name' (expected a string)"
        );
        assert!(err.path().is_none());
    }

    #[test]
    fn test_malformed_json_carries_path() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::malformed_json("auth/providers.json", source);
        assert_eq!(
            err.path(),
            Some(std::path::Path::new("auth/providers.json"))
        );
        assert!(err.to_string().starts_with("malformed document 'auth/providers.json'"));
    }

    #[test]
    fn test_file_system_error_display() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::file_system("/tmp/app", "read", io);
        assert_eq!(
            err.to_string(),
            "file system read operation failed for '/tmp/app': denied"
        );
    }
}
