//! Shelf source parser
//!
//! Turns one source document into a [`ShelfFragment`]. Problems with the
//! input are reported as diagnostics and the offending part is skipped, so a
//! bad source never prevents the others from merging.

use std::path::Path;

use indexmap::IndexMap;

use crate::diagnostic::{DiagnosticKind, DiagnosticSink, Parsed};
use crate::model::{
    LabelMap, MEMBER_TAG, SHELF_TAG, ShelfFragment, ShelfMap, TOOL_TAG, ToolRecord,
    title_case,
};
use crate::payload::{flat_kind, payload_kind};
use crate::xml::{self, Element};

/// Parse a shelf source file.
///
/// Missing files, files without the shelf extension, unreadable files and
/// malformed XML all yield an empty fragment with a warning.
pub fn parse_file(path: &Path, extension: &str) -> Parsed<ShelfFragment> {
    let mut sink = DiagnosticSink::new(Some(path));
    tracing::info!(path = %path.display(), "Reading tools from shelf source");

    if !path.is_file() {
        sink.warn(DiagnosticKind::SourceMissing, "Shelf source does not exist");
        return sink.finish(ShelfFragment::default());
    }

    if !shelf_fs::has_extension(path, extension) {
        sink.warn(
            DiagnosticKind::WrongExtension,
            format!("Shelf source is not a .{extension} file"),
        );
        return sink.finish(ShelfFragment::default());
    }

    match shelf_fs::io::read_text(path) {
        Ok(source) => parse_into(&source, sink),
        Err(e) => {
            sink.warn(DiagnosticKind::SourceUnreadable, e.to_string());
            sink.finish(ShelfFragment::default())
        }
    }
}

/// Parse shelf source text. `origin` only labels diagnostics.
pub fn parse_str(source: &str, origin: Option<&Path>) -> Parsed<ShelfFragment> {
    parse_into(source, DiagnosticSink::new(origin))
}

fn parse_into(source: &str, mut sink: DiagnosticSink) -> Parsed<ShelfFragment> {
    let root = match xml::parse_document(source) {
        Ok(root) => root,
        Err(e) => {
            sink.warn(DiagnosticKind::InvalidXml, format!("Invalid XML: {e}"));
            return sink.finish(ShelfFragment::default());
        }
    };

    let (members, labels) = collect_shelves(&root, &mut sink);
    let mut attached = attach_tools(&root, &members, &mut sink);

    let mut shelves = ShelfMap::new();
    for shelf_name in members.keys() {
        let Some(elements) = attached.swap_remove(shelf_name) else {
            continue;
        };
        let tools: IndexMap<_, _> = elements
            .into_iter()
            .filter_map(|(tool_name, element)| {
                convert_tool(element, &mut sink).map(|record| (tool_name, record))
            })
            .collect();
        if !tools.is_empty() {
            shelves.insert(shelf_name.clone(), tools);
        }
    }

    sink.finish(ShelfFragment { shelves, labels })
}

/// Gather member names and labels of every usable shelf declaration.
fn collect_shelves(
    root: &Element,
    sink: &mut DiagnosticSink,
) -> (IndexMap<String, Vec<String>>, LabelMap) {
    let mut members: IndexMap<String, Vec<String>> = IndexMap::new();
    let mut labels = LabelMap::new();

    for shelf in root.children_named(SHELF_TAG) {
        let Some(name) = shelf.attr("name").filter(|n| !n.is_empty()) else {
            sink.warn(
                DiagnosticKind::MissingGroupName,
                "Ignoring shelf declaration without a name",
            );
            continue;
        };

        let label = shelf
            .attr("label")
            .filter(|l| !l.is_empty())
            .map_or_else(|| title_case(name), str::to_string);

        let member_elements: Vec<&Element> = shelf.children_named(MEMBER_TAG).collect();
        if member_elements.is_empty() {
            sink.debug(
                DiagnosticKind::EmptyGroup,
                format!("Shelf '{name}' has no member tools"),
            );
            continue;
        }

        let names = member_elements
            .iter()
            .filter_map(|member| member.attr("name"))
            .filter(|n| !n.is_empty())
            .map(str::to_string);
        members.entry(name.to_string()).or_default().extend(names);
        labels.insert(name.to_string(), label);
    }

    (members, labels)
}

/// Attach each named tool element to every shelf listing it as a member.
fn attach_tools<'a>(
    root: &'a Element,
    members: &IndexMap<String, Vec<String>>,
    sink: &mut DiagnosticSink,
) -> IndexMap<String, IndexMap<String, &'a Element>> {
    let mut attached: IndexMap<String, IndexMap<String, &Element>> = IndexMap::new();

    for tool in root.children_named(TOOL_TAG) {
        let Some(tool_name) = tool.attr("name").filter(|n| !n.is_empty()) else {
            sink.warn(
                DiagnosticKind::MalformedTool,
                "Ignoring tool declaration without a name",
            );
            continue;
        };

        let mut referenced = false;
        for (shelf_name, names) in members {
            if names.iter().any(|n| n == tool_name) {
                attached
                    .entry(shelf_name.clone())
                    .or_default()
                    .insert(tool_name.to_string(), tool);
                referenced = true;
            }
        }

        if !referenced {
            sink.debug(
                DiagnosticKind::UnreferencedTool,
                format!("Tool '{tool_name}' is not a member of any shelf"),
            );
        }
    }

    attached
}

fn convert_tool(element: &Element, sink: &mut DiagnosticSink) -> Option<ToolRecord> {
    let (Some(name), Some(label), Some(icon)) = (
        element.attr("name"),
        element.attr("label"),
        element.attr("icon"),
    ) else {
        let missing: Vec<&str> = ["name", "label", "icon"]
            .into_iter()
            .filter(|attr| element.attr(attr).is_none())
            .collect();
        sink.warn(
            DiagnosticKind::MalformedTool,
            format!(
                "Malformed tool '{}': missing {}",
                element.attr("name").unwrap_or("<unnamed>"),
                missing.join(", ")
            ),
        );
        return None;
    };

    tracing::debug!(tool = name, "Converting tool");
    let mut record = ToolRecord::new(name, label, icon);

    for child in &element.children {
        if let Some(kind) = payload_kind(&child.tag) {
            record.set_payload(kind.extract(child));
        } else if let Some(field) = flat_kind(&child.tag) {
            field.apply(element, &mut record);
        } else {
            sink.debug(
                DiagnosticKind::UnknownChild,
                format!("Ignoring <{}> in tool '{name}'", child.tag),
            );
        }
    }

    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Script;

    #[test]
    fn test_parse_single_tool() {
        let parsed = parse_str(
            r#"<shelfDocument>
  <tool name="a" label="A" icon="ICON_A">
    <script scriptType="python"><![CDATA[print(1)]]></script>
  </tool>
  <toolshelf name="g1" label="Group One">
    <memberTool name="a"/>
  </toolshelf>
</shelfDocument>"#,
            None,
        );

        assert!(parsed.diagnostics.is_empty());
        let fragment = parsed.value;
        let tool = fragment.tool("g1", "a").unwrap();
        assert_eq!(tool.label, "A");
        assert_eq!(tool.icon, "ICON_A");
        assert_eq!(tool.script, Some(Script::python("print(1)")));
        assert_eq!(fragment.labels.get("g1").map(String::as_str), Some("Group One"));
    }

    #[test]
    fn test_duplicate_shelf_declarations_extend_membership() {
        let parsed = parse_str(
            r#"<shelfDocument>
  <tool name="a" label="A" icon="I"/>
  <tool name="b" label="B" icon="I"/>
  <toolshelf name="g"><memberTool name="a"/></toolshelf>
  <toolshelf name="g" label="Second"><memberTool name="b"/></toolshelf>
</shelfDocument>"#,
            None,
        );

        let fragment = parsed.value;
        let names: Vec<_> = fragment.shelves["g"].keys().cloned().collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(fragment.labels["g"], "Second");
    }

    #[test]
    fn test_legacy_flat_child_reads_tool_attribute() {
        let parsed = parse_str(
            r#"<shelfDocument>
  <tool name="a" label="A" icon="I"><label>ignored text</label><unknown/></tool>
  <toolshelf name="g"><memberTool name="a"/></toolshelf>
</shelfDocument>"#,
            None,
        );

        assert_eq!(parsed.value.tool("g", "a").unwrap().label, "A");
        assert_eq!(parsed.of_kind(DiagnosticKind::UnknownChild).count(), 1);
    }

    #[test]
    fn test_shelves_keep_declaration_order() {
        let parsed = parse_str(
            r#"<shelfDocument>
  <tool name="a" label="A" icon="I"/>
  <tool name="b" label="B" icon="I"/>
  <toolshelf name="second"><memberTool name="b"/></toolshelf>
  <toolshelf name="first"><memberTool name="a"/></toolshelf>
</shelfDocument>"#,
            None,
        );

        let names: Vec<_> = parsed.value.shelves.keys().cloned().collect();
        assert_eq!(names, vec!["second", "first"]);
    }
}
