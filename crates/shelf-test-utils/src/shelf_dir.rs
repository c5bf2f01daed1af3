//! [`ShelfDir`] fixture for tests that need shelf files on disk.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding shelf sources, removed on drop.
///
/// # Example
///
/// ```rust,no_run
/// use shelf_test_utils::{ShelfDir, ShelfSource};
///
/// let dir = ShelfDir::new();
/// let path = dir.write("item.shelf", &ShelfSource::new().to_xml());
/// assert!(path.is_file());
/// ```
pub struct ShelfDir {
    temp_dir: TempDir,
}

impl Default for ShelfDir {
    fn default() -> Self {
        Self::new()
    }
}

impl ShelfDir {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create (if needed) and return a subdirectory.
    pub fn subdir(&self, name: &str) -> PathBuf {
        let dir = self.root().join(name);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Write a file relative to the root, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Search-path value listing the given subdirectories in order.
    pub fn search_path(&self, subdirs: &[&str]) -> std::ffi::OsString {
        std::env::join_paths(subdirs.iter().map(|s| self.root().join(s))).unwrap()
    }
}
