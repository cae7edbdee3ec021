//! Inline element model
//!
//! This module defines the inline constructs of Pandoc-flavored Markdown.
//! Elements are plain immutable values; rendering lives in `serialize`.

use crate::attr::Attr;

/// Content accepted wherever an element nests other inlines.
///
/// Callers may supply a bare string, a single inline element, or an ordered
/// sequence mixing both. The `From` conversions below let content fields
/// take any of these shapes without pre-flattening.
#[derive(Debug, Clone, PartialEq)]
pub enum InlineContent {
    /// Plain text
    Text(String),

    /// A single inline element
    Element(Box<Inline>),

    /// An ordered sequence of nested content
    Seq(Vec<InlineContent>),
}

/// An inline Markdown element
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    /// Sequence of inline elements
    Inlines(Vec<InlineContent>),

    /// Plain text
    Str(String),

    /// Bracketed span with attributes
    Span {
        content: Option<InlineContent>,
        attr: Option<Attr>,
    },

    /// Link with content, target URL, and optional title
    Link {
        content: Option<InlineContent>,
        target: String,
        title: Option<String>,
        attr: Option<Attr>,
    },

    /// Inline code
    Code {
        text: String,
        attr: Option<Attr>,
    },

    /// Inline code rendered as an HTML tag
    CodeTag {
        text: String,
        attr: Option<Attr>,
    },

    /// Strong emphasis (bold)
    Strong(Option<InlineContent>),

    /// Emphasis (italic)
    Emph(Option<InlineContent>),
}

impl Inline {
    /// Create a plain text element
    pub fn str(text: &str) -> Self {
        Inline::Str(text.to_string())
    }

    /// Create a sequence of inline elements
    pub fn inlines(elements: Vec<InlineContent>) -> Self {
        Inline::Inlines(elements)
    }

    /// Create a span without attributes
    pub fn span(content: impl Into<InlineContent>) -> Self {
        Inline::Span {
            content: Some(content.into()),
            attr: None,
        }
    }

    /// Create a span with attributes
    pub fn span_with_attr(content: impl Into<InlineContent>, attr: Attr) -> Self {
        Inline::Span {
            content: Some(content.into()),
            attr: Some(attr),
        }
    }

    /// Create a link without title or attributes
    pub fn link(content: impl Into<InlineContent>, target: &str) -> Self {
        Inline::Link {
            content: Some(content.into()),
            target: target.to_string(),
            title: None,
            attr: None,
        }
    }

    /// Create inline code without attributes
    pub fn code(text: &str) -> Self {
        Inline::Code {
            text: text.to_string(),
            attr: None,
        }
    }

    /// Create inline code rendered as an HTML tag
    pub fn code_tag(text: &str) -> Self {
        Inline::CodeTag {
            text: text.to_string(),
            attr: None,
        }
    }

    /// Create strongly emphasized content
    pub fn strong(content: impl Into<InlineContent>) -> Self {
        Inline::Strong(Some(content.into()))
    }

    /// Create emphasized content
    pub fn emph(content: impl Into<InlineContent>) -> Self {
        Inline::Emph(Some(content.into()))
    }

    /// Check if this element renders to an empty string.
    ///
    /// Only text and sequences can be blank; every other variant always
    /// emits its delimiters.
    pub fn is_blank(&self) -> bool {
        match self {
            Inline::Inlines(elements) => elements.iter().all(InlineContent::is_blank),
            Inline::Str(text) => text.is_empty(),
            Inline::Span { .. }
            | Inline::Link { .. }
            | Inline::Code { .. }
            | Inline::CodeTag { .. }
            | Inline::Strong(_)
            | Inline::Emph(_) => false,
        }
    }
}

impl InlineContent {
    /// Check if this content renders to an empty string
    pub fn is_blank(&self) -> bool {
        match self {
            InlineContent::Text(text) => text.is_empty(),
            InlineContent::Element(element) => element.is_blank(),
            InlineContent::Seq(elements) => elements.iter().all(InlineContent::is_blank),
        }
    }
}

impl From<&str> for InlineContent {
    fn from(text: &str) -> Self {
        InlineContent::Text(text.to_string())
    }
}

impl From<String> for InlineContent {
    fn from(text: String) -> Self {
        InlineContent::Text(text)
    }
}

impl From<Inline> for InlineContent {
    fn from(element: Inline) -> Self {
        InlineContent::Element(Box::new(element))
    }
}

impl From<Vec<InlineContent>> for InlineContent {
    fn from(elements: Vec<InlineContent>) -> Self {
        InlineContent::Seq(elements)
    }
}
