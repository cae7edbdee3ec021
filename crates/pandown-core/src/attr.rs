//! Attributes for inline elements
//!
//! Pandoc attaches an attribute bag (identifier, classes, key-value pairs)
//! to spans, links and code. The bag renders in two syntaxes: the bare form
//! placed inside `{...}` in Markdown output, and the HTML attribute form
//! used when an element is rendered as an HTML tag.

use std::fmt;

use indexmap::IndexMap;

/// Attributes attachable to an inline element.
///
/// Key-value pairs keep insertion order so both renderings are
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attr {
    /// Element identifier (rendered as `#id`)
    pub id: Option<String>,

    /// Class names (each rendered as `.class`)
    pub classes: Vec<String>,

    /// Key-value pairs, in insertion order
    pub attributes: IndexMap<String, String>,
}

impl Attr {
    /// Create an empty attribute bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an attribute bag with an identifier
    pub fn with_id(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Self::default()
        }
    }

    /// Create an attribute bag with class names
    pub fn with_classes(classes: &[&str]) -> Self {
        Self {
            classes: classes.iter().map(|c| (*c).to_string()).collect(),
            ..Self::default()
        }
    }

    /// Set a key-value attribute, replacing any previous value for the key
    pub fn set(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    /// Check if no identifier, classes or key-values are set
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.classes.is_empty() && self.attributes.is_empty()
    }

    /// Render as an HTML attribute string, e.g. `id="x" class="a b" k="v"`.
    ///
    /// Attribute values are escaped; the caller decides the surrounding
    /// whitespace.
    pub fn as_html(&self) -> String {
        let mut parts = Vec::new();

        if let Some(id) = &self.id {
            parts.push(format!("id=\"{}\"", escape_html_attr(id)));
        }
        if !self.classes.is_empty() {
            parts.push(format!(
                "class=\"{}\"",
                escape_html_attr(&self.classes.join(" "))
            ));
        }
        for (name, value) in &self.attributes {
            parts.push(format!("{}=\"{}\"", name, escape_html_attr(value)));
        }

        parts.join(" ")
    }
}

impl fmt::Display for Attr {
    /// Bare attribute syntax: `#id .class1 .class2 key="value"`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if let Some(id) = &self.id {
            parts.push(format!("#{id}"));
        }
        parts.extend(self.classes.iter().map(|c| format!(".{c}")));
        parts.extend(
            self.attributes
                .iter()
                .map(|(name, value)| format!("{name}=\"{value}\"")),
        );

        f.write_str(&parts.join(" "))
    }
}

/// Escape an HTML attribute value
fn escape_html_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let attr = Attr::new();
        assert!(attr.is_empty());
        assert_eq!(attr.to_string(), "");
        assert_eq!(attr.as_html(), "");
    }

    #[test]
    fn test_bare_form() {
        let mut attr = Attr::with_id("intro");
        attr.classes.push("note".to_string());
        attr.classes.push("wide".to_string());
        attr.set("role", "doc");

        assert_eq!(attr.to_string(), "#intro .note .wide role=\"doc\"");
    }

    #[test]
    fn test_bare_form_skips_absent_parts() {
        let attr = Attr::with_classes(&["note"]);
        assert_eq!(attr.to_string(), ".note");
    }

    #[test]
    fn test_html_form() {
        let mut attr = Attr::with_id("intro");
        attr.classes.push("note".to_string());
        attr.classes.push("wide".to_string());
        attr.set("role", "doc");

        assert_eq!(attr.as_html(), "id=\"intro\" class=\"note wide\" role=\"doc\"");
    }

    #[test]
    fn test_html_form_escapes_values() {
        let mut attr = Attr::new();
        attr.set("title", "a \"b\" <c> & d");

        assert_eq!(attr.as_html(), "title=\"a &quot;b&quot; &lt;c&gt; &amp; d\"");
    }

    #[test]
    fn test_set_replaces_value_in_place() {
        let mut attr = Attr::new();
        attr.set("a", "1");
        attr.set("b", "2");
        attr.set("a", "3");

        assert_eq!(attr.to_string(), "a=\"3\" b=\"2\"");
    }
}
