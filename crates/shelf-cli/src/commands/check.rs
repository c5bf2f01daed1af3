//! Check command

use colored::Colorize;
use serde::Serialize;
use shelf_core::{Diagnostic, Severity, ShelfConfig};
use std::path::PathBuf;

use super::prepare_manager;
use crate::error::{CliError, Result};

#[derive(Serialize)]
struct CheckReport<'a> {
    sources: &'a [PathBuf],
    shelves: usize,
    tools: usize,
    diagnostics: &'a [Diagnostic],
}

/// Run the check command
///
/// Fails when any source produced a warning.
pub fn run_check(config: ShelfConfig, extra: &[PathBuf], json: bool) -> Result<()> {
    let mut manager = prepare_manager(config, extra)?;
    manager.build();

    let document = manager.build_document();
    let report = CheckReport {
        sources: manager.sources(),
        shelves: document.shelves().count(),
        tools: document.tools().count(),
        diagnostics: manager.diagnostics(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for diagnostic in report.diagnostics {
            let tag = match diagnostic.severity {
                Severity::Warning => "warning:".yellow().bold(),
                Severity::Debug => "note:".dimmed(),
            };
            println!("{tag} {diagnostic}");
        }
        println!(
            "{} {} sources, {} shelves, {} tools",
            "Checked:".bold(),
            report.sources.len(),
            report.shelves,
            report.tools
        );
    }

    let warnings = report.diagnostics.iter().filter(|d| d.is_warning()).count();
    if warnings > 0 {
        return Err(CliError::user(format!("{warnings} warning(s) found")));
    }
    Ok(())
}
