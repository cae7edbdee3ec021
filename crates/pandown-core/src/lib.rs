//! pandown-core - Pandoc-flavored Markdown inline elements
//!
//! This crate provides the core data structures and serialization for the
//! inline half of Pandoc-flavored Markdown. It is used by `pandown` (which
//! feeds it from untyped values) and by anything that assembles inline
//! fragments programmatically, such as a block-level document writer.
//!
//! # Architecture
//!
//! ```text
//! Untyped Value ──normalize──▶ ┌──────────────┐
//!                              │              │
//!                              │ Inline model │ ──▶ Markdown String
//! Typed constructors ─────────▶│              │
//!                              └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use pandown_core::{Inline, InlineContent, inline_content_to_string};
//!
//! let content: Vec<InlineContent> = vec![
//!     "Download".into(),
//!     Inline::link("the manual", "https://example.com/manual.pdf").into(),
//! ];
//!
//! let markdown = inline_content_to_string(Some(&content.into()));
//! assert_eq!(markdown, "Download [the manual](https://example.com/manual.pdf)");
//! ```

mod ast;
mod attr;
mod serialize;

pub use ast::{Inline, InlineContent};
pub use attr::Attr;
pub use serialize::{inline_content_to_string, join_inline_content};
