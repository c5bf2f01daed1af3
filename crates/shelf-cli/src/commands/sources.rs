//! Sources command

use colored::Colorize;
use shelf_core::ShelfConfig;
use std::path::PathBuf;

use super::{prepare_manager, report_warnings};
use crate::error::Result;

/// Run the sources command
pub fn run_sources(config: ShelfConfig, extra: &[PathBuf], json: bool) -> Result<()> {
    let search_var = config.search_var.clone();
    let manager = prepare_manager(config, extra)?;
    report_warnings(manager.diagnostics());

    if json {
        println!("{}", serde_json::to_string_pretty(manager.sources())?);
        return Ok(());
    }

    if manager.sources().is_empty() {
        println!(
            "{} No shelf sources found. Set {} or pass {}.",
            "note:".dimmed(),
            search_var.cyan(),
            "--source".cyan()
        );
        return Ok(());
    }

    for (index, path) in manager.sources().iter().enumerate() {
        println!("{:>3}  {}", index + 1, path.display());
    }
    Ok(())
}
