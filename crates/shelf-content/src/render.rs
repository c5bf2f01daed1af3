//! XML rendering of a [`ShelfDocument`]
//!
//! Output is fully determined by the document: attributes keep a fixed
//! order, indentation is fixed, and payload bodies are written verbatim as
//! CDATA.

use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, Event};

use crate::document::{DocumentNode, ShelfDecl, ShelfDocument};
use crate::error::{Error, Result};
use crate::model::{HelpText, HelpUrl, MEMBER_TAG, ROOT_TAG, SHELF_TAG, Script, TOOL_TAG, ToolRecord};

type XmlWriter = Writer<Vec<u8>>;

/// Render a document to XML text.
pub fn render(document: &ShelfDocument, indent: usize) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', indent);

    emit(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    emit(&mut writer, Event::Start(BytesStart::new(ROOT_TAG)))?;
    for node in &document.nodes {
        match node {
            DocumentNode::Tool(tool) => write_tool(&mut writer, tool)?,
            DocumentNode::Shelf(shelf) => write_shelf(&mut writer, shelf)?,
        }
    }
    emit(&mut writer, Event::End(BytesEnd::new(ROOT_TAG)))?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    String::from_utf8(bytes).map_err(|e| Error::serialize(e.to_string()))
}

fn emit(writer: &mut XmlWriter, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| Error::serialize(e.to_string()))
}

fn write_tool(writer: &mut XmlWriter, tool: &ToolRecord) -> Result<()> {
    let start = BytesStart::new(TOOL_TAG).with_attributes([
        ("name", tool.name.as_str()),
        ("label", tool.label.as_str()),
        ("icon", tool.icon.as_str()),
    ]);

    if !tool.has_payloads() {
        return emit(writer, Event::Empty(start));
    }

    emit(writer, Event::Start(start))?;
    if let Some(script) = &tool.script {
        write_payload(
            writer,
            Script::TAG,
            &[("scriptType", script.script_type.as_str())],
            &script.body,
        )?;
    }
    if let Some(help_text) = &tool.help_text {
        write_payload(writer, HelpText::TAG, &[], &help_text.body)?;
    }
    if let Some(help_url) = &tool.help_url {
        write_payload(writer, HelpUrl::TAG, &[], &help_url.body)?;
    }
    emit(writer, Event::End(BytesEnd::new(TOOL_TAG)))
}

fn write_payload(
    writer: &mut XmlWriter,
    tag: &str,
    attributes: &[(&str, &str)],
    body: &str,
) -> Result<()> {
    let start = BytesStart::new(tag).with_attributes(attributes.iter().copied());
    emit(writer, Event::Start(start))?;
    for segment in cdata_segments(body) {
        emit(writer, Event::CData(BytesCData::new(segment)))?;
    }
    emit(writer, Event::End(BytesEnd::new(tag)))
}

fn write_shelf(writer: &mut XmlWriter, shelf: &ShelfDecl) -> Result<()> {
    let start = BytesStart::new(SHELF_TAG).with_attributes([
        ("name", shelf.name.as_str()),
        ("label", shelf.label.as_str()),
    ]);
    emit(writer, Event::Start(start))?;
    for member in &shelf.members {
        let reference = BytesStart::new(MEMBER_TAG).with_attributes([("name", member.as_str())]);
        emit(writer, Event::Empty(reference))?;
    }
    emit(writer, Event::End(BytesEnd::new(SHELF_TAG)))
}

/// Split a body so no CDATA section contains `]]>`.
fn cdata_segments(body: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut rest = body;
    while let Some(pos) = rest.find("]]>") {
        let (head, tail) = rest.split_at(pos + 2);
        segments.push(head);
        rest = tail;
    }
    segments.push(rest);
    segments
}
