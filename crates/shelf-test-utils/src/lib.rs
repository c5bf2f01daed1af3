//! Shared test utilities for the dynamic-shelf workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`shelf_dir`]: [`ShelfDir`] temporary directory of shelf sources
//! - [`source`]: [`ShelfSource`] builder for shelf XML text

pub mod shelf_dir;
pub mod source;

pub use shelf_dir::ShelfDir;
pub use source::ShelfSource;
