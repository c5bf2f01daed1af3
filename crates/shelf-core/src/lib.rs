//! Shelf merging for Dynamic Shelf
//!
//! [`ShelfManager`] collects shelf sources, folds them into one merged shelf
//! set, and writes the result for the host application to load.

pub mod config;
pub mod error;
pub mod manager;

pub use config::ShelfConfig;
pub use error::{Error, Result};
pub use manager::ShelfManager;

pub use shelf_content::{Diagnostic, DiagnosticKind, Severity, ShelfDocument, ShelfFragment};
