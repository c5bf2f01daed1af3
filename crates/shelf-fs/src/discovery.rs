//! Source discovery from a search-path value
//!
//! A search path is a list of directories joined with the platform path
//! separator (`:` on Unix, `;` on Windows). Each directory is scanned
//! non-recursively for files carrying the shelf extension.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Check whether a path's file name ends with `.<extension>`.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    let suffix = format!(".{extension}");
    path.file_name()
        .and_then(OsStr::to_str)
        .is_some_and(|name| name.ends_with(&suffix))
}

/// List every shelf source on a search path.
///
/// Results keep the order of the search-path entries and, within an entry,
/// the order the directory listing returned. A missing or empty value yields
/// no sources. A directory that cannot be listed is an error.
pub fn discover_sources(search_value: Option<&OsStr>, extension: &str) -> Result<Vec<PathBuf>> {
    let Some(value) = search_value.filter(|v| !v.is_empty()) else {
        return Ok(Vec::new());
    };

    let mut sources = Vec::new();
    for dir in std::env::split_paths(value) {
        if dir.as_os_str().is_empty() {
            tracing::debug!("Skipping empty search path entry");
            continue;
        }

        let entries = fs::read_dir(&dir).map_err(|e| Error::io(&dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(&dir, e))?;
            let path = entry.path();
            if has_extension(&path, extension) {
                sources.push(path);
            }
        }
    }

    tracing::debug!(count = sources.len(), "Discovered shelf sources");
    Ok(sources)
}

/// Read the search path from an environment variable and discover sources.
pub fn discover_from_env(var: &str, extension: &str) -> Result<Vec<PathBuf>> {
    let value = std::env::var_os(var);
    discover_sources(value.as_deref(), extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_extension() {
        assert!(has_extension(Path::new("/a/b/tools.shelf"), "shelf"));
        assert!(has_extension(Path::new("tools.shelf"), "shelf"));
        assert!(!has_extension(Path::new("/a/b/tools.xml"), "shelf"));
        assert!(!has_extension(Path::new("/a/b/tools.shelf.bak"), "shelf"));
        assert!(!has_extension(Path::new("/a/b/toolsshelf"), "shelf"));
    }

    #[test]
    fn test_missing_value_is_empty() {
        let sources = discover_sources(None, "shelf").unwrap();
        assert!(sources.is_empty());
    }

    #[test]
    fn test_empty_value_is_empty() {
        let sources = discover_sources(Some(OsStr::new("")), "shelf").unwrap();
        assert!(sources.is_empty());
    }
}
