//! Filesystem layer for Dynamic Shelf
//!
//! Finds shelf source files on a search path, resolves where the merged
//! shelf is written, and writes it atomically.

pub mod constants;
pub mod destination;
pub mod discovery;
pub mod error;
pub mod io;

pub use constants::{DEFAULT_EXTENSION, DEFAULT_SEARCH_VAR, DEFAULT_TEMP_DIR_NAME};
pub use destination::{resolve_destination, temp_shelf_dir, write_to_destination};
pub use discovery::{discover_from_env, discover_sources, has_extension};
pub use error::{Error, Result};
