//! Output document
//!
//! A [`ShelfDocument`] is the flat, ordered list of elements a merged shelf
//! set renders to. Tools come first, each exactly once, followed by the
//! shelf declaration that first references them.

use std::collections::HashSet;

use crate::error::Result;
use crate::model::{LabelMap, ShelfMap, ToolRecord, title_case};
use crate::render;

/// A shelf declaration in the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfDecl {
    pub name: String,
    pub label: String,
    /// Member tool names, in shelf order
    pub members: Vec<String>,
}

/// One top-level element of the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentNode {
    Tool(ToolRecord),
    Shelf(ShelfDecl),
}

/// Ordered top-level elements of a shelf document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShelfDocument {
    pub nodes: Vec<DocumentNode>,
}

impl ShelfDocument {
    /// Lay out merged shelves for output.
    ///
    /// Shelves keep their map order and tools their per-shelf order. A tool
    /// shared by several shelves is written once, before the first shelf
    /// that lists it; later shelves only reference it.
    pub fn build(shelves: &ShelfMap, labels: &LabelMap) -> Self {
        let mut nodes = Vec::new();
        let mut written: HashSet<&str> = HashSet::new();

        for (shelf_name, tools) in shelves {
            for (tool_name, tool) in tools {
                if written.insert(tool_name.as_str()) {
                    nodes.push(DocumentNode::Tool(tool.clone()));
                }
            }

            let label = labels
                .get(shelf_name)
                .filter(|l| !l.is_empty())
                .cloned()
                .unwrap_or_else(|| title_case(shelf_name));

            nodes.push(DocumentNode::Shelf(ShelfDecl {
                name: shelf_name.clone(),
                label,
                members: tools.keys().cloned().collect(),
            }));
        }

        Self { nodes }
    }

    pub fn tools(&self) -> impl Iterator<Item = &ToolRecord> {
        self.nodes.iter().filter_map(|node| match node {
            DocumentNode::Tool(tool) => Some(tool),
            DocumentNode::Shelf(_) => None,
        })
    }

    pub fn shelves(&self) -> impl Iterator<Item = &ShelfDecl> {
        self.nodes.iter().filter_map(|node| match node {
            DocumentNode::Shelf(shelf) => Some(shelf),
            DocumentNode::Tool(_) => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Render to XML text with the given indentation width.
    pub fn render(&self, indent: usize) -> Result<String> {
        render::render(self, indent)
    }
}
