//! Tests for rendering shelf documents

use pretty_assertions::assert_eq;
use shelf_content::{
    DocumentNode, HelpText, HelpUrl, LabelMap, Script, ShelfDocument, ShelfMap, ToolMap,
    ToolRecord, parse_str,
};

fn sample_shelves() -> ShelfMap {
    let mut g1 = ToolMap::new();
    g1.insert(
        "a".into(),
        ToolRecord::new("a", "A & Co", "ICON_A")
            .with_script(Script::python("if x < 1 and y > 2:\n    print(\"]]>\")"))
            .with_help_text(HelpText::new("Help for A"))
            .with_help_url(HelpUrl::new("https://example.com/a")),
    );
    g1.insert("b".into(), ToolRecord::new("b", "B", "ICON_B"));

    let mut g2 = ToolMap::new();
    g2.insert("b".into(), ToolRecord::new("b", "B", "ICON_B"));

    let mut shelves = ShelfMap::new();
    shelves.insert("g1".into(), g1);
    shelves.insert("g2".into(), g2);
    shelves
}

#[test]
fn test_render_is_deterministic() {
    let document = ShelfDocument::build(&sample_shelves(), &LabelMap::new());

    let first = document.render(4).unwrap();
    let second = document.render(4).unwrap();

    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_rendered_output_parses_back() {
    let shelves = sample_shelves();
    let mut labels = LabelMap::new();
    labels.insert("g1".into(), "Group One".into());
    labels.insert("g2".into(), "G2".into());

    let xml = ShelfDocument::build(&shelves, &labels).render(2).unwrap();
    let parsed = parse_str(&xml, None);

    assert!(parsed.diagnostics.is_empty(), "{:?}", parsed.diagnostics);
    assert_eq!(parsed.value.shelves, shelves);
    assert_eq!(parsed.value.labels, labels);
}

#[test]
fn test_shared_tool_is_rendered_once() {
    let xml = ShelfDocument::build(&sample_shelves(), &LabelMap::new())
        .render(4)
        .unwrap();

    assert_eq!(xml.matches(r#"<tool name="b""#).count(), 1);
    assert_eq!(xml.matches(r#"<memberTool name="b"/>"#).count(), 2);
}

#[test]
fn test_body_is_written_as_cdata() {
    let xml = ShelfDocument::build(&sample_shelves(), &LabelMap::new())
        .render(4)
        .unwrap();

    assert!(xml.contains("<![CDATA[if x < 1 and y > 2:\n    print(\"]]"));
    assert!(xml.contains(r#"label="A &amp; Co""#));
}

#[test]
fn test_build_document_nodes() {
    let document = ShelfDocument::build(&sample_shelves(), &LabelMap::new());

    assert_eq!(document.tools().count(), 2);
    assert_eq!(document.shelves().count(), 2);
    assert!(matches!(document.nodes[2], DocumentNode::Shelf(ref s) if s.name == "g1"));
}
