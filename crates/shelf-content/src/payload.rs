//! Payload table
//!
//! Each tool child element that carries typed data is described by a
//! [`PayloadKind`]: its tag, where each of its fields is read from, and how
//! the collected fields become a [`Payload`]. Supporting a new payload means
//! adding an entry to [`PAYLOAD_KINDS`].
//!
//! Older sources may also name a plain tool field with a child element
//! (`<label/>` inside a `tool`). Such a child carries no data; the value is
//! copied from the tool's own attribute of the same name. Those fields live
//! in [`FLAT_FIELDS`]. For the built-in fields the attribute has already been
//! read, so an entry only changes the record once a field is added that is
//! not one of the mandatory attributes.

use std::collections::HashMap;

use crate::model::{DEFAULT_SCRIPT_TYPE, HelpText, HelpUrl, Payload, Script, ToolRecord};
use crate::xml::Element;

/// Where a payload field's value comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// The child element's text content
    Text,
    /// An attribute of the child element with the field's name
    Attribute,
}

/// One field of a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadField {
    pub name: &'static str,
    pub source: FieldSource,
}

impl PayloadField {
    const fn text(name: &'static str) -> Self {
        Self {
            name,
            source: FieldSource::Text,
        }
    }

    const fn attribute(name: &'static str) -> Self {
        Self {
            name,
            source: FieldSource::Attribute,
        }
    }
}

/// Field values gathered from one child element
#[derive(Debug, Default)]
pub struct FieldValues<'a> {
    values: HashMap<&'static str, &'a str>,
}

impl<'a> FieldValues<'a> {
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.values.get(name).copied()
    }

    fn body(&self) -> String {
        self.get("body").unwrap_or_default().to_string()
    }
}

/// Description of one payload child element
pub struct PayloadKind {
    pub tag: &'static str,
    pub fields: &'static [PayloadField],
    build: fn(&FieldValues<'_>) -> Payload,
}

impl std::fmt::Debug for PayloadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayloadKind")
            .field("tag", &self.tag)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

impl PayloadKind {
    /// Read the payload from a child element.
    pub fn extract(&self, element: &Element) -> Payload {
        let mut values = FieldValues::default();
        for field in self.fields {
            let value = match field.source {
                FieldSource::Text => element.text.as_deref(),
                FieldSource::Attribute => element.attr(field.name),
            };
            if let Some(value) = value {
                values.values.insert(field.name, value);
            }
        }
        (self.build)(&values)
    }
}

fn build_script(values: &FieldValues<'_>) -> Payload {
    let script_type = values.get("scriptType").unwrap_or(DEFAULT_SCRIPT_TYPE);
    Payload::Script(Script::new(script_type, values.body()))
}

fn build_help_text(values: &FieldValues<'_>) -> Payload {
    Payload::HelpText(HelpText::new(values.body()))
}

fn build_help_url(values: &FieldValues<'_>) -> Payload {
    Payload::HelpUrl(HelpUrl::new(values.body()))
}

/// Every payload the parser understands.
pub const PAYLOAD_KINDS: &[PayloadKind] = &[
    PayloadKind {
        tag: Script::TAG,
        fields: &[
            PayloadField::attribute("scriptType"),
            PayloadField::text("body"),
        ],
        build: build_script,
    },
    PayloadKind {
        tag: HelpText::TAG,
        fields: &[PayloadField::text("body")],
        build: build_help_text,
    },
    PayloadKind {
        tag: HelpUrl::TAG,
        fields: &[PayloadField::text("body")],
        build: build_help_url,
    },
];

/// Find the payload kind for a child element tag.
pub fn payload_kind(tag: &str) -> Option<&'static PayloadKind> {
    PAYLOAD_KINDS.iter().find(|kind| kind.tag == tag)
}

/// A tool field a legacy child element may name
pub struct FlatKind {
    pub tag: &'static str,
    set: fn(&mut ToolRecord, &str),
}

impl std::fmt::Debug for FlatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatKind")
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}

impl FlatKind {
    pub const fn new(tag: &'static str, set: fn(&mut ToolRecord, &str)) -> Self {
        Self { tag, set }
    }

    /// Copy the tool element's attribute named by this field into `record`.
    ///
    /// Returns `false` when the tool has no such attribute.
    pub fn apply(&self, tool: &Element, record: &mut ToolRecord) -> bool {
        match tool.attr(self.tag) {
            Some(value) => {
                (self.set)(record, value);
                true
            }
            None => false,
        }
    }
}

/// Every tool field a legacy child element may name.
pub const FLAT_FIELDS: &[FlatKind] = &[
    FlatKind::new("name", |record, value| record.name = value.to_string()),
    FlatKind::new("label", |record, value| record.label = value.to_string()),
    FlatKind::new("icon", |record, value| record.icon = value.to_string()),
];

/// Find the flat field for a child element tag.
pub fn flat_kind(tag: &str) -> Option<&'static FlatKind> {
    FLAT_FIELDS.iter().find(|kind| kind.tag == tag)
}
