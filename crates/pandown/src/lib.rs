//! # pandown
//!
//! Build Pandoc-flavored Markdown inline fragments from structured content.
//!
//! ## Design
//!
//! The inline element model and its serialization live in `pandown-core`;
//! this crate adds the front end that normalizes untyped values (JSON) into
//! that model. Content fields accept a bare string, a single element, or a
//! mixed sequence, so callers never pre-flatten nested content themselves.
//!
//! ## Example (typed)
//!
//! ```rust
//! use pandown::{Attr, Inline};
//!
//! let code = Inline::Code {
//!     text: "get_object()".to_string(),
//!     attr: Some(Attr::with_classes(&["python"])),
//! };
//!
//! assert_eq!(code.to_string(), "`get_object()`{.python}");
//! ```
//!
//! ## Example (untyped)
//!
//! ```rust
//! use pandown::{inline_content_from_value, inline_content_to_string};
//! use serde_json::json;
//!
//! let value = json!(["See", "the docs"]);
//! let content = inline_content_from_value(&value).unwrap();
//!
//! assert_eq!(inline_content_to_string(content.as_ref()), "See the docs");
//! ```

mod value;

pub use pandown_core::{
    inline_content_to_string, join_inline_content, Attr, Inline, InlineContent,
};
pub use value::inline_content_from_value;

/// Error type for pandown operations
#[derive(Debug, thiserror::Error)]
pub enum PandownError {
    /// A value whose shape has no inline meaning was given as content
    #[error("Could not process type: {0}")]
    TypeMismatch(&'static str),
}

pub type Result<T> = std::result::Result<T, PandownError>;
