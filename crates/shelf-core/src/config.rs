//! Manager configuration
//!
//! Every key is optional in the TOML file; missing keys keep their default.
//!
//! ```toml
//! search_var = "DYNAMIC_SHELF_PATH"
//! extension = "shelf"
//! temp_dir_name = "dynamic_shelf"
//! indent = 4
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{Error, Result};
use shelf_fs::{DEFAULT_EXTENSION, DEFAULT_SEARCH_VAR, DEFAULT_TEMP_DIR_NAME};

/// Default indentation width of written shelves
pub const DEFAULT_INDENT: usize = 4;

/// Settings for discovering, merging and writing shelves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelfConfig {
    /// Environment variable holding the search path
    pub search_var: String,
    /// Extension (without dot) of shelf sources
    pub extension: String,
    /// Subdirectory of the system temp dir for generated shelves
    pub temp_dir_name: String,
    /// Indentation width of written shelves
    pub indent: usize,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            search_var: DEFAULT_SEARCH_VAR.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            temp_dir_name: DEFAULT_TEMP_DIR_NAME.to_string(),
            indent: DEFAULT_INDENT,
        }
    }
}

impl ShelfConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = shelf_fs::io::read_text(path)?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse {
            path: "<inline>".into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShelfConfig::default();
        assert_eq!(config.search_var, "DYNAMIC_SHELF_PATH");
        assert_eq!(config.extension, "shelf");
        assert_eq!(config.temp_dir_name, "dynamic_shelf");
        assert_eq!(config.indent, 4);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ShelfConfig::from_toml_str("search_var = \"STUDIO_SHELVES\"\nindent = 2\n")
            .unwrap();
        assert_eq!(config.search_var, "STUDIO_SHELVES");
        assert_eq!(config.indent, 2);
        assert_eq!(config.extension, "shelf");
    }

    #[test]
    fn test_invalid_toml() {
        let result = ShelfConfig::from_toml_str("indent = \"wide\"");
        assert!(matches!(result, Err(Error::ConfigParse { .. })));
    }
}
