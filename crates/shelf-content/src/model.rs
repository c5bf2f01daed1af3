//! In-memory shelf model

use indexmap::IndexMap;
use serde::Serialize;

/// Root element of a shelf document
pub const ROOT_TAG: &str = "shelfDocument";
/// Tool declaration element
pub const TOOL_TAG: &str = "tool";
/// Shelf (group) declaration element
pub const SHELF_TAG: &str = "toolshelf";
/// Membership reference inside a shelf declaration
pub const MEMBER_TAG: &str = "memberTool";

/// Default `scriptType` of a script payload
pub const DEFAULT_SCRIPT_TYPE: &str = "python";

/// Tool name -> record, in insertion order
pub type ToolMap = IndexMap<String, ToolRecord>;
/// Shelf name -> tools, in insertion order
pub type ShelfMap = IndexMap<String, ToolMap>;
/// Shelf name -> display label
pub type LabelMap = IndexMap<String, String>;

/// Script run when the tool is activated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Script {
    pub script_type: String,
    pub body: String,
}

impl Script {
    pub const TAG: &'static str = "script";

    pub fn new(script_type: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            script_type: script_type.into(),
            body: body.into(),
        }
    }

    /// A script with the default script type.
    pub fn python(body: impl Into<String>) -> Self {
        Self::new(DEFAULT_SCRIPT_TYPE, body)
    }
}

impl Default for Script {
    fn default() -> Self {
        Self::python("")
    }
}

/// Inline help shown for the tool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HelpText {
    pub body: String,
}

impl HelpText {
    pub const TAG: &'static str = "helpText";

    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

/// Link to external help for the tool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HelpUrl {
    pub body: String,
}

impl HelpUrl {
    pub const TAG: &'static str = "helpURL";

    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

/// One typed payload read from a tool child element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Script(Script),
    HelpText(HelpText),
    HelpUrl(HelpUrl),
}

/// A tool as it appears on a shelf
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolRecord {
    pub name: String,
    pub label: String,
    pub icon: String,
    pub script: Option<Script>,
    pub help_text: Option<HelpText>,
    pub help_url: Option<HelpUrl>,
}

impl ToolRecord {
    pub fn new(name: impl Into<String>, label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            icon: icon.into(),
            script: None,
            help_text: None,
            help_url: None,
        }
    }

    pub fn with_script(mut self, script: Script) -> Self {
        self.script = Some(script);
        self
    }

    pub fn with_help_text(mut self, help_text: HelpText) -> Self {
        self.help_text = Some(help_text);
        self
    }

    pub fn with_help_url(mut self, help_url: HelpUrl) -> Self {
        self.help_url = Some(help_url);
        self
    }

    /// Fill the slot matching the payload's kind, replacing any previous value.
    pub fn set_payload(&mut self, payload: Payload) {
        match payload {
            Payload::Script(script) => self.script = Some(script),
            Payload::HelpText(help_text) => self.help_text = Some(help_text),
            Payload::HelpUrl(help_url) => self.help_url = Some(help_url),
        }
    }

    pub fn has_payloads(&self) -> bool {
        self.script.is_some() || self.help_text.is_some() || self.help_url.is_some()
    }
}

/// What one source contributes to a merge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShelfFragment {
    /// Shelves with at least one valid tool
    pub shelves: ShelfMap,
    /// Labels of every named, non-empty shelf declaration
    pub labels: LabelMap,
}

impl ShelfFragment {
    pub fn is_empty(&self) -> bool {
        self.shelves.is_empty() && self.labels.is_empty()
    }

    pub fn tool(&self, shelf: &str, tool: &str) -> Option<&ToolRecord> {
        self.shelves.get(shelf).and_then(|tools| tools.get(tool))
    }
}

/// Title-case a shelf name the way default shelf labels are derived.
///
/// Every run of letters starts upper-case and continues lower-case; any
/// non-letter character starts a new run.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_word = false;
    for c in name.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
