//! Shelf document model, parser, and serializer
//!
//! A shelf source declares `tool` elements and `toolshelf` groups that list
//! their members by name. This crate reads such sources into
//! [`ShelfFragment`]s and renders merged state back into the same XML shape.

pub mod diagnostic;
pub mod document;
pub mod error;
pub mod model;
pub mod parser;
pub mod payload;
pub mod render;
pub mod xml;

pub use diagnostic::{Diagnostic, DiagnosticKind, Parsed, Severity};
pub use document::{DocumentNode, ShelfDecl, ShelfDocument};
pub use error::{Error, Result};
pub use model::{
    HelpText, HelpUrl, LabelMap, Payload, Script, ShelfFragment, ShelfMap, ToolMap,
    ToolRecord, title_case,
};
pub use parser::{parse_file, parse_str};
pub use payload::{
    FLAT_FIELDS, FieldSource, FlatKind, PAYLOAD_KINDS, PayloadField, PayloadKind, flat_kind,
    payload_kind,
};
