//! `markup-tree` is a library for representing CommonMark and GFM documents as persistent, thread-safe trees that
//! can be parsed, built programmatically, analyzed and rewritten.
//!
//! Trees consist of two layers, in the tradition of Swift's
//! [libsyntax](https://github.com/apple/swift/tree/5e2c815edfd758f9b1309ce07bfc01c4bc20ec23/lib/Syntax) and
//! [`rowan`](https://github.com/rust-analyzer/rowan/):
//! - the inner, _raw_ tree of immutable [`RawMarkup`] nodes holds each node's kind, payload, children and source
//!   range. Raw nodes are atomically reference counted and shared between every version of a document that did not
//!   edit them.
//! - the outer, _positioned_ tree of [`Markup`] nodes is materialized while navigating. A positioned node knows its
//!   index in its parent and the chain of raw ancestors up to the root.
//!
//! Editing is done by path copying: replacing a node rebuilds only the nodes on the path from it to the root, and
//! yields a new root. The original tree stays valid and untouched, so any number of threads can derive independent
//! edits from the same version without locking.
//!
//! Every node has a [`MarkupId`]. Navigation preserves identities, while the edited node and each of its ancestors
//! get a new identity, which makes it cheap to tell whether a subtree changed between versions.
//!
//! On top of the untyped layer, typed wrappers like [`Paragraph`] or [`Link`] provide payload accessors. There is one
//! wrapper per [`MarkupKind`], and all of them implement [`MarkupNode`]. [`MarkupVisitor`], [`MarkupWalker`] and
//! [`MarkupRewriter`] provide double-dispatch traversal.
//!
//! ## Getting Started
//! ```
//! use markup_tree::*;
//!
//! let document = Document::new([
//!     Block::from(Heading::new(1, [Text::new("Title")])),
//!     Paragraph::new([Text::new("Hello, "), Text::new("world")]).into(),
//! ]);
//!
//! // edit the second text of the paragraph
//! let text = document.as_markup().child_through([1, 1]).map(Text::from_markup).unwrap();
//! let mut edited = text.clone();
//! edited.set_string("markup");
//! let new_document = Document::from_markup(edited.root());
//!
//! // the heading was not touched and is shared between both versions
//! let heading = |document: &Document| document.blocks().next().unwrap();
//! assert!(heading(&new_document).is_identical(&heading(&document)));
//! assert!(!new_document.is_identical(&document));
//! assert_eq!(text.string(), "world");
//! ```
//!
//! With the `parse` feature, [`Document::parse`] builds a tree from source text, using
//! [`pulldown-cmark`](https://docs.rs/pulldown-cmark) as the parsing engine.
#![forbid(unconditional_recursion, future_incompatible)]
#![deny(unsafe_code)]
#![cfg_attr(doc_cfg, feature(doc_cfg))]

#[macro_use]
mod macros;

pub mod identity;
mod raw;
mod markup;
mod kinds;
mod visit;
mod dump;

#[cfg(feature = "parse")]
mod parse;
#[cfg(feature = "serde1")]
mod serde_impls;

// Reexport types for working with source ranges.
pub use text_size::{TextLen, TextRange, TextSize};

/// A range of source text in bytes, relative to the start of the parsed document.
pub type SourceRange = TextRange;

pub use crate::{
    dump::DumpOptions,
    identity::{IdAllocator, MarkupId},
    kinds::*,
    markup::{ChildStep, Markup, MarkupChildren, PathError},
    raw::{Checkbox, ChildKinds, ColumnAlignment, MarkupBuilder, MarkupKind, RawMarkup, RawMarkupData},
    visit::{MarkupRewriter, MarkupVisitor, MarkupWalker},
};

#[cfg(feature = "parse")]
pub use crate::parse::ParseOptions;
