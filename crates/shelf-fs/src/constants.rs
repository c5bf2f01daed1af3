//! Default names shared across the workspace.

/// Environment variable holding the shelf search path.
pub const DEFAULT_SEARCH_VAR: &str = "DYNAMIC_SHELF_PATH";

/// File extension (without the dot) of shelf source files.
pub const DEFAULT_EXTENSION: &str = "shelf";

/// Subdirectory of the system temp directory that receives generated shelves.
pub const DEFAULT_TEMP_DIR_NAME: &str = "dynamic_shelf";
