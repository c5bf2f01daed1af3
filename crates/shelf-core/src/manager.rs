//! Shelf manager
//!
//! The manager owns the list of registered sources and the merged state:
//! shelf name -> {tool name -> record} plus shelf labels. Sources are folded
//! in registration order and a later source wins whenever two sources define
//! a tool of the same name on the same shelf. The later record replaces the
//! earlier one whole; payloads are not combined.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use shelf_content::{Diagnostic, DiagnosticKind, LabelMap, ShelfDocument, ShelfFragment, ShelfMap};

use crate::{Result, ShelfConfig};

/// Collects shelf sources and merges them into one shelf set
#[derive(Debug, Default)]
pub struct ShelfManager {
    config: ShelfConfig,
    sources: Vec<PathBuf>,
    shelves: ShelfMap,
    labels: LabelMap,
    diagnostics: Vec<Diagnostic>,
}

impl ShelfManager {
    /// Create a manager with no sources.
    pub fn new(config: ShelfConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Create a manager seeded with the sources found on the search path
    /// named by `config.search_var`.
    ///
    /// Fails if a search path directory cannot be listed.
    pub fn from_env(config: ShelfConfig) -> Result<Self> {
        let sources = shelf_fs::discover_from_env(&config.search_var, &config.extension)?;
        Ok(Self::with_sources(config, sources))
    }

    /// Create a manager seeded from an explicit search-path value.
    pub fn with_search_path(config: ShelfConfig, search_value: Option<&OsStr>) -> Result<Self> {
        let sources = shelf_fs::discover_sources(search_value, &config.extension)?;
        Ok(Self::with_sources(config, sources))
    }

    fn with_sources(config: ShelfConfig, sources: Vec<PathBuf>) -> Self {
        tracing::debug!(count = sources.len(), "Seeding shelf manager");
        Self {
            config,
            sources,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &ShelfConfig {
        &self.config
    }

    /// Register one more source file.
    ///
    /// Paths that are not existing files, or lack the shelf extension, are
    /// rejected with a diagnostic. Returns whether the path was accepted.
    pub fn register_source(&mut self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();

        if !path.is_file() {
            self.diagnostics.push(Diagnostic::warning(
                DiagnosticKind::SourceMissing,
                Some(path),
                "Shelf file does not exist",
            ));
            return false;
        }

        if !shelf_fs::has_extension(path, &self.config.extension) {
            self.diagnostics.push(Diagnostic::warning(
                DiagnosticKind::WrongExtension,
                Some(path),
                format!("File is not a .{} file", self.config.extension),
            ));
            return false;
        }

        self.sources.push(path.to_path_buf());
        true
    }

    /// Registered sources, in fold order.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Merge one parsed source into the accumulated state.
    pub fn fold(&mut self, fragment: ShelfFragment) {
        let ShelfFragment { shelves, labels } = fragment;

        for (shelf_name, tools) in shelves {
            match self.shelves.get_mut(&shelf_name) {
                // IndexMap::extend keeps the position of keys already present.
                Some(existing) => existing.extend(tools),
                None => {
                    self.shelves.insert(shelf_name, tools);
                }
            }
        }

        self.labels.extend(labels);
    }

    /// Rebuild the merged state from every registered source.
    ///
    /// Parse diagnostics are appended to [`diagnostics`](Self::diagnostics).
    pub fn build(&mut self) {
        tracing::debug!(sources = self.sources.len(), "Building shelves");
        self.shelves.clear();
        self.labels.clear();

        let sources = self.sources.clone();
        for path in &sources {
            let (fragment, diagnostics) =
                shelf_content::parse_file(path, &self.config.extension).into_parts();
            self.diagnostics.extend(diagnostics);
            self.fold(fragment);
        }
    }

    /// Merged shelves, in first-seen order.
    pub fn shelves(&self) -> &ShelfMap {
        &self.shelves
    }

    /// Merged shelf labels.
    pub fn labels(&self) -> &LabelMap {
        &self.labels
    }

    /// Diagnostics gathered by registration and builds so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Lay out the merged state as an output document.
    pub fn build_document(&self) -> ShelfDocument {
        ShelfDocument::build(&self.shelves, &self.labels)
    }

    /// Render the merged state to XML text.
    pub fn render(&self) -> Result<String> {
        Ok(self.build_document().render(self.config.indent)?)
    }

    /// Write the merged state and return the written path.
    ///
    /// Without a path, a new file is created under the temp shelf directory
    /// and removed again if the write fails.
    pub fn write(&self, path: Option<&Path>) -> Result<PathBuf> {
        let content = self.render()?;
        let destination = shelf_fs::write_to_destination(
            path,
            &self.config.temp_dir_name,
            &self.config.extension,
            content.as_bytes(),
        )?;

        tracing::info!(path = %destination.display(), "Wrote shelf");
        Ok(destination)
    }

    /// Rebuild from all sources, then write.
    pub fn write_shelf(&mut self, path: Option<&Path>) -> Result<PathBuf> {
        self.build();
        self.write(path)
    }
}
