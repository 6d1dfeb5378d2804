//! Implementation of the outer, "positioned" tree.
//!
//! A [`Markup`] node is a [`RawMarkup`](crate::RawMarkup) together with its address in one version of a tree.
//! Use [`Markup::new_root`] to construct a positioned tree on top of a raw tree, navigate it with
//! [`Markup::child`] and [`Markup::parent`], and edit it with [`Markup::replace_self`], which returns a new tree
//! version that shares every untouched subtree with the old one.

mod iter;
pub use iter::MarkupChildren;
mod node;
pub use node::Markup;
mod path;
pub use path::{ChildStep, PathError};
