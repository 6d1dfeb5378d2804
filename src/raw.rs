//! Implementation of the inner, "raw" tree.
//! The [`MarkupBuilder`] is the main entry point for parsers constructing [`RawMarkup`] trees.

pub(super) mod builder;
mod data;
mod node;

pub use self::{
    builder::MarkupBuilder,
    data::{Checkbox, ChildKinds, ColumnAlignment, MarkupKind, RawMarkupData},
    node::RawMarkup,
};
