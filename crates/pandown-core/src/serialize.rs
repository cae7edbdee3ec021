//! Inline element serialization
//!
//! Converts inline elements into Markdown text, or an HTML `<code>`
//! fragment for `CodeTag`. Rendering is a pure projection of each
//! element's fields; the output is meant for embedding inside a larger
//! generated document.

use std::fmt;

use crate::ast::{Inline, InlineContent};

/// Separator placed between the elements of a joined sequence
const SEP: &str = " ";

impl fmt::Display for Inline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inline::Inlines(elements) => f.write_str(&join_inline_content(elements)),

            Inline::Str(text) => f.write_str(text),

            Inline::Span { content, attr } => {
                let attr = attr.as_ref().map(ToString::to_string).unwrap_or_default();
                write!(
                    f,
                    "[{}]{{{}}}",
                    inline_content_to_string(content.as_ref()),
                    attr
                )
            }

            Inline::Link {
                content,
                target,
                title,
                attr,
            } => {
                let content = inline_content_to_string(content.as_ref());
                let title = title
                    .as_ref()
                    .map(|t| format!(" \"{t}\""))
                    .unwrap_or_default();
                let attr = attr.as_ref().map(|a| format!("{{{a}}}")).unwrap_or_default();
                write!(f, "[{content}]({target}{title}){attr}")
            }

            Inline::Code { text, attr } => {
                let attr = attr.as_ref().map(|a| format!("{{{a}}}")).unwrap_or_default();
                write!(f, "`{text}`{attr}")
            }

            Inline::CodeTag { text, attr } => {
                let attr = attr
                    .as_ref()
                    .map(|a| format!(" {}", a.as_html()))
                    .unwrap_or_default();
                write!(f, "<code{attr}>{text}</code>")
            }

            Inline::Strong(content) => {
                write!(f, "**{}**", inline_content_to_string(content.as_ref()))
            }

            Inline::Emph(content) => {
                write!(f, "*{}*", inline_content_to_string(content.as_ref()))
            }
        }
    }
}

impl fmt::Display for InlineContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InlineContent::Text(text) => f.write_str(text),
            InlineContent::Element(element) => element.fmt(f),
            InlineContent::Seq(elements) => f.write_str(&join_inline_content(elements)),
        }
    }
}

/// Join a sequence of inline content into one string.
///
/// Each element is rendered and the renderings are joined with a single
/// space. Blank elements are dropped first so they never produce doubled
/// separators. Order is preserved and no other whitespace is touched.
pub fn join_inline_content(content: &[InlineContent]) -> String {
    content
        .iter()
        .filter(|c| !c.is_blank())
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(SEP)
}

/// Convert optional inline content to a string.
///
/// Absent content converts to `""`. A single element converts to its own
/// rendering; a sequence joins the rendering of each element with a space.
pub fn inline_content_to_string(content: Option<&InlineContent>) -> String {
    match content {
        None => String::new(),
        Some(content) => content.to_string(),
    }
}
