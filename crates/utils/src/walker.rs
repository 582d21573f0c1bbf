//! Deterministic directory traversal
//!
//! Every section parser discovers its entities by walking a section
//! directory. Entries are always visited in lexicographic file-name order so
//! loading the same tree yields the same sequence on every platform.

use appdir_core::{Error, Result};
use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Which entries a walk visits
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkOptions {
    /// Visit directories only
    pub only_dirs: bool,
    /// Visit only files carrying this extension (without the leading dot)
    pub extension: Option<String>,
    /// Descend into the whole subtree instead of the immediate children
    pub recursive: bool,
}

impl WalkOptions {
    /// Immediate child directories
    pub fn dirs() -> Self {
        Self {
            only_dirs: true,
            ..Self::default()
        }
    }

    /// Immediate child files with the given extension
    pub fn files_with_extension(extension: impl Into<String>) -> Self {
        Self {
            extension: Some(extension.into()),
            ..Self::default()
        }
    }

    /// Extend the walk to the full subtree
    pub fn recursive(mut self) -> Self {
        self.recursive = true;
        self
    }

    fn matches(&self, entry: &DirEntry) -> bool {
        let file_type = entry.file_type();
        if self.only_dirs && !file_type.is_dir() {
            return false;
        }
        match &self.extension {
            Some(ext) => {
                file_type.is_file() && entry.path().extension() == Some(OsStr::new(ext.as_str()))
            }
            None => true,
        }
    }
}

/// Walk `root`, calling `visitor` for every entry selected by `options`.
///
/// A missing `root` is not an error: the walk simply visits nothing, which is
/// how callers detect an absent section. A `root` that exists but is not a
/// directory is an error. The first error returned by `visitor` stops the
/// walk and is propagated unchanged.
pub fn walk<F>(root: &Path, options: &WalkOptions, mut visitor: F) -> Result<()>
where
    F: FnMut(&DirEntry) -> Result<()>,
{
    if !is_dir(root)? {
        debug!(root = %root.display(), "directory absent, nothing to walk");
        return Ok(());
    }

    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name();
    if !options.recursive {
        walker = walker.max_depth(1);
    }

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            match e.into_io_error() {
                Some(io) => Error::file_system(path, "walk directory", io),
                None => Error::configuration(format!(
                    "filesystem loop detected at '{}'",
                    path.display()
                )),
            }
        })?;

        if options.matches(&entry) {
            visitor(&entry)?;
        }
    }

    Ok(())
}

/// `Ok(false)` when `path` does not exist, `Ok(true)` for a directory, and
/// an error for anything else at that path.
pub fn is_dir(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(true),
        Ok(_) => Err(Error::not_a_directory(path)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::file_system(path, "stat", e)),
    }
}

/// Name of a walked entry as UTF-8; non-UTF-8 names cannot be mapped onto
/// document fields and are rejected.
pub fn entry_name(entry: &DirEntry) -> Result<String> {
    entry.file_name().to_str().map(str::to_string).ok_or_else(|| {
        Error::configuration(format!(
            "'{}' is not valid UTF-8",
            entry.path().display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn collect(root: &Path, options: &WalkOptions) -> Vec<PathBuf> {
        let mut seen = Vec::new();
        walk(root, options, |entry| {
            seen.push(entry.path().strip_prefix(root).unwrap().to_path_buf());
            Ok(())
        })
        .unwrap();
        seen
    }

    fn fixture() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("b/inner")).unwrap();
        fs::create_dir_all(root.join("a")).unwrap();
        fs::write(root.join("z.json"), "{}").unwrap();
        fs::write(root.join("c.js"), "").unwrap();
        fs::write(root.join("b/inner/deep.js"), "").unwrap();
        fs::write(root.join("b/notes.txt"), "").unwrap();
        temp
    }

    #[test]
    fn test_missing_root_visits_nothing() {
        let temp = TempDir::new().unwrap();
        let seen = collect(&temp.path().join("absent"), &WalkOptions::default());
        assert!(seen.is_empty());
    }

    #[test]
    fn test_root_that_is_a_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file.json");
        fs::write(&file, "{}").unwrap();

        let err = walk(&file, &WalkOptions::default(), |_| Ok(())).unwrap_err();
        assert!(matches!(err, Error::NotADirectory { .. }));
    }

    #[test]
    fn test_single_level_is_sorted() {
        let temp = fixture();
        let seen = collect(temp.path(), &WalkOptions::default());
        assert_eq!(
            seen,
            vec![
                PathBuf::from("a"),
                PathBuf::from("b"),
                PathBuf::from("c.js"),
                PathBuf::from("z.json"),
            ]
        );
    }

    #[test]
    fn test_only_dirs() {
        let temp = fixture();
        let seen = collect(temp.path(), &WalkOptions::dirs());
        assert_eq!(seen, vec![PathBuf::from("a"), PathBuf::from("b")]);
    }

    #[test]
    fn test_recursive_extension_filter() {
        let temp = fixture();
        let seen = collect(
            temp.path(),
            &WalkOptions::files_with_extension("js").recursive(),
        );
        assert_eq!(
            seen,
            vec![PathBuf::from("b/inner/deep.js"), PathBuf::from("c.js")]
        );
    }

    #[test]
    fn test_visitor_error_aborts_walk() {
        let temp = fixture();
        let mut visits = 0;
        let err = walk(temp.path(), &WalkOptions::default(), |_| {
            visits += 1;
            Err(Error::configuration("stop"))
        })
        .unwrap_err();

        assert_eq!(visits, 1);
        assert!(matches!(err, Error::Configuration { .. }));
    }
}
