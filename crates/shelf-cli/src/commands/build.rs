//! Build command

use std::path::{Path, PathBuf};

use shelf_core::ShelfConfig;

use super::{prepare_manager, report_warnings};
use crate::error::Result;

/// Run the build command, printing the written path on stdout
pub fn run_build(config: ShelfConfig, sources: &[PathBuf], output: Option<&Path>) -> Result<()> {
    let mut manager = prepare_manager(config, sources)?;
    let written = manager.write_shelf(output)?;

    report_warnings(manager.diagnostics());
    println!("{}", written.display());
    Ok(())
}
