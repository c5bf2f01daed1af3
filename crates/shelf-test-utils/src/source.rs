//! [`ShelfSource`] builder for shelf XML text.

/// Builds the text of a shelf source document.
///
/// Elements are written in the order the builder methods are called.
#[derive(Debug, Default, Clone)]
pub struct ShelfSource {
    elements: Vec<String>,
}

impl ShelfSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tool with no payloads.
    pub fn tool(self, name: &str, label: &str, icon: &str) -> Self {
        self.raw(&format!(
            r#"<tool name="{name}" label="{label}" icon="{icon}"/>"#
        ))
    }

    /// A tool with a python script payload.
    pub fn tool_with_script(self, name: &str, label: &str, icon: &str, body: &str) -> Self {
        self.raw(&format!(
            r#"<tool name="{name}" label="{label}" icon="{icon}">
    <script scriptType="python"><![CDATA[{body}]]></script>
  </tool>"#
        ))
    }

    /// A shelf declaration; `label` of `None` omits the attribute.
    pub fn shelf(self, name: &str, label: Option<&str>, members: &[&str]) -> Self {
        let label = label
            .map(|l| format!(r#" label="{l}""#))
            .unwrap_or_default();
        let members: String = members
            .iter()
            .map(|m| format!("\n    <memberTool name=\"{m}\"/>"))
            .collect();
        self.raw(&format!(
            "<toolshelf name=\"{name}\"{label}>{members}\n  </toolshelf>"
        ))
    }

    /// Any element text, inserted verbatim.
    pub fn raw(mut self, element: &str) -> Self {
        self.elements.push(element.to_string());
        self
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<shelfDocument>\n");
        for element in &self.elements {
            xml.push_str("  ");
            xml.push_str(element);
            xml.push('\n');
        }
        xml.push_str("</shelfDocument>\n");
        xml
    }
}
