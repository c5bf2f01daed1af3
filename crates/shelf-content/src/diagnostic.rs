//! Diagnostics reported while reading shelf sources
//!
//! Structural problems in a source never abort a run. They are collected
//! here and handed back next to the parsed value, and each one is also
//! emitted as a `tracing` event.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// How serious a diagnostic is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational, nothing was lost
    Debug,
    /// Input was skipped
    Warning,
}

/// What went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Source path does not exist or is not a file
    SourceMissing,
    /// Source path does not carry the shelf extension
    WrongExtension,
    /// Source could not be read
    SourceUnreadable,
    /// Source is not well-formed XML
    InvalidXml,
    /// A `toolshelf` element has no name
    MissingGroupName,
    /// A `toolshelf` element lists no members
    EmptyGroup,
    /// A `tool` element lacks `name`, `label` or `icon`
    MalformedTool,
    /// A named tool is not a member of any shelf
    UnreferencedTool,
    /// A tool child element with an unknown tag
    UnknownChild,
}

/// A single diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    /// Source the diagnostic refers to, if any
    pub origin: Option<PathBuf>,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(
        kind: DiagnosticKind,
        origin: Option<&Path>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Warning, kind, origin, message)
    }

    pub fn debug(kind: DiagnosticKind, origin: Option<&Path>, message: impl Into<String>) -> Self {
        Self::new(Severity::Debug, kind, origin, message)
    }

    fn new(
        severity: Severity,
        kind: DiagnosticKind,
        origin: Option<&Path>,
        message: impl Into<String>,
    ) -> Self {
        let diagnostic = Self {
            severity,
            kind,
            origin: origin.map(Path::to_path_buf),
            message: message.into(),
        };
        diagnostic.trace();
        diagnostic
    }

    fn trace(&self) {
        let origin = self
            .origin
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        match self.severity {
            Severity::Warning => {
                tracing::warn!(kind = ?self.kind, origin = %origin, "{}", self.message)
            }
            Severity::Debug => {
                tracing::debug!(kind = ?self.kind, origin = %origin, "{}", self.message)
            }
        }
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.origin {
            Some(origin) => write!(f, "{}: {}", origin.display(), self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// A value together with the diagnostics produced while computing it
#[derive(Debug, Clone)]
pub struct Parsed<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Parsed<T> {
    pub fn new(value: T, diagnostics: Vec<Diagnostic>) -> Self {
        Self { value, diagnostics }
    }

    /// Whether any warning-level diagnostic was produced
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_warning)
    }

    /// Diagnostics of the given kind
    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.kind == kind)
    }

    pub fn into_parts(self) -> (T, Vec<Diagnostic>) {
        (self.value, self.diagnostics)
    }
}

/// Collects diagnostics for one source
#[derive(Debug, Default)]
pub(crate) struct DiagnosticSink {
    origin: Option<PathBuf>,
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink {
    pub(crate) fn new(origin: Option<&Path>) -> Self {
        Self {
            origin: origin.map(Path::to_path_buf),
            diagnostics: Vec::new(),
        }
    }

    pub(crate) fn warn(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let diagnostic = Diagnostic::warning(kind, self.origin.as_deref(), message);
        self.diagnostics.push(diagnostic);
    }

    pub(crate) fn debug(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let diagnostic = Diagnostic::debug(kind, self.origin.as_deref(), message);
        self.diagnostics.push(diagnostic);
    }

    pub(crate) fn finish<T>(self, value: T) -> Parsed<T> {
        Parsed::new(value, self.diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_origin() {
        let diagnostic = Diagnostic::warning(
            DiagnosticKind::MalformedTool,
            Some(Path::new("/shelves/a.shelf")),
            "Tool 'x' is missing icon",
        );
        assert_eq!(diagnostic.to_string(), "/shelves/a.shelf: Tool 'x' is missing icon");
    }

    #[test]
    fn test_sink_collects_in_order() {
        let mut sink = DiagnosticSink::new(None);
        sink.warn(DiagnosticKind::InvalidXml, "bad");
        sink.debug(DiagnosticKind::EmptyGroup, "empty");

        let parsed = sink.finish(());
        assert!(parsed.has_warnings());
        assert_eq!(parsed.diagnostics.len(), 2);
        assert_eq!(parsed.diagnostics[1].kind, DiagnosticKind::EmptyGroup);
        assert_eq!(parsed.of_kind(DiagnosticKind::InvalidXml).count(), 1);
    }
}
