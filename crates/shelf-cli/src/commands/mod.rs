//! Command implementations for shelf-cli

pub mod build;
pub mod check;
pub mod sources;

pub use build::run_build;
pub use check::run_check;
pub use sources::run_sources;

use colored::Colorize;
use shelf_core::{Diagnostic, ShelfConfig, ShelfManager};
use std::path::PathBuf;

use crate::error::Result;

/// Create a manager from the search path, then register extra sources.
pub(crate) fn prepare_manager(config: ShelfConfig, extra: &[PathBuf]) -> Result<ShelfManager> {
    let mut manager = ShelfManager::from_env(config)?;
    for path in extra {
        manager.register_source(path);
    }
    Ok(manager)
}

/// Print warning-level diagnostics to stderr.
pub(crate) fn report_warnings(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics.iter().filter(|d| d.is_warning()) {
        eprintln!("{} {}", "warning:".yellow().bold(), diagnostic);
    }
}
