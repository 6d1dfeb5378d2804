use std::{
    fmt,
    hash::{Hash, Hasher},
    iter,
    ops::Range,
};

use tracing::trace;

use super::{iter::MarkupChildren, ChildStep, PathError};
use crate::{
    identity::MarkupId,
    raw::{MarkupKind, RawMarkup, RawMarkupData},
    SourceRange,
};

#[derive(Debug, Clone)]
struct Ancestor {
    raw:             RawMarkup,
    index_in_parent: usize,
}

/// A node in the outer, "positioned" markup tree.
///
/// A `Markup` is a [`RawMarkup`] seen from one particular address in one particular version of a tree: it
/// knows its index in its parent and carries the chain of raw ancestors up to the root, which is what makes
/// [`parent`](Markup::parent) and path-copying edits possible without parent pointers on the raw nodes.
///
/// Positioned nodes are created on demand while navigating and own their ancestor chain. All edits leave
/// `self` untouched and return a positioned node in a new tree version instead.
#[derive(Clone)]
pub struct Markup {
    raw:             RawMarkup,
    index_in_parent: usize,
    ancestors:       Vec<Ancestor>,
}

impl Markup {
    /// Build a positioned tree on top of a raw tree, e.g. one handed over by a parser.
    #[inline]
    pub fn new_root(raw: RawMarkup) -> Markup {
        Markup {
            raw,
            index_in_parent: 0,
            ancestors: Vec::new(),
        }
    }

    /// The underlying raw node.
    #[inline]
    pub fn raw(&self) -> &RawMarkup {
        &self.raw
    }

    /// Consumes this node, returning the underlying raw node.
    #[inline]
    pub fn into_raw(self) -> RawMarkup {
        self.raw
    }

    /// The identity of this node.
    #[inline]
    pub fn id(&self) -> MarkupId {
        self.raw.id()
    }

    /// The kind tag of this node.
    #[inline]
    pub fn kind(&self) -> MarkupKind {
        self.raw.kind()
    }

    /// The kind-specific payload of this node.
    #[inline]
    pub fn data(&self) -> &RawMarkupData {
        self.raw.data()
    }

    /// The range of source text this node was parsed from, if any.
    #[inline]
    pub fn range(&self) -> Option<SourceRange> {
        self.raw.range()
    }

    /// The index of this node among its parent's children; `0` for the root.
    #[inline]
    pub fn index_in_parent(&self) -> usize {
        self.index_in_parent
    }

    /// The number of ancestors of this node.
    #[inline]
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    /// Whether this node has no parent.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.ancestors.is_empty()
    }

    /// The number of children of this node.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.raw.child_count()
    }

    /// The child at `index`, or `None` if `index` is out of bounds.
    #[inline]
    pub fn child(&self, index: usize) -> Option<Markup> {
        let raw = self.raw.child(index)?;
        Some(self.positioned_child(index, raw.clone()))
    }

    /// The child at `index` of a kind whose containment rule requires it to exist.
    ///
    /// ## Panics
    /// If `index` is out of bounds.
    pub(crate) fn structural_child(&self, index: usize) -> Markup {
        match self.child(index) {
            Some(child) => child,
            None => panic!("{:?} has no child at index {} ({} children)", self.kind(), index, self.child_count()),
        }
    }

    pub(super) fn positioned_child(&self, index: usize, raw: RawMarkup) -> Markup {
        let mut ancestors = Vec::with_capacity(self.ancestors.len() + 1);
        ancestors.extend_from_slice(&self.ancestors);
        ancestors.push(Ancestor {
            raw:             self.raw.clone(),
            index_in_parent: self.index_in_parent,
        });
        Markup {
            raw,
            index_in_parent: index,
            ancestors,
        }
    }

    /// Returns an iterator over the children of this node.
    #[inline]
    pub fn children(&self) -> MarkupChildren<'_> {
        MarkupChildren::new(self)
    }

    /// The parent node of this node, except if this node is the root.
    #[inline]
    pub fn parent(&self) -> Option<Markup> {
        let (parent, rest) = self.ancestors.split_last()?;
        Some(Markup {
            raw:             parent.raw.clone(),
            index_in_parent: parent.index_in_parent,
            ancestors:       rest.to_vec(),
        })
    }

    /// Returns an iterator along the chain of parents of this node, nearest first.
    #[inline]
    pub fn ancestors(&self) -> impl Iterator<Item = Markup> {
        iter::successors(self.parent(), Markup::parent)
    }

    /// The root of the tree this node belongs to.
    pub fn root(&self) -> Markup {
        match self.ancestors.first() {
            Some(root) => Markup::new_root(root.raw.clone()),
            None => self.clone(),
        }
    }

    /// Descends from this node along `path`.
    ///
    /// # Errors
    /// If a step's index is out of bounds, or the child at a step is not of the step's expected kind.
    pub fn child_through<I>(&self, path: I) -> Result<Markup, PathError>
    where
        I: IntoIterator,
        I::Item: Into<ChildStep>,
    {
        let mut current = self.clone();
        for step in path {
            current = current.checked_child(step.into())?;
        }
        Ok(current)
    }

    fn checked_child(&self, step: ChildStep) -> Result<Markup, PathError> {
        let child = self.child(step.index).ok_or(PathError::IndexOutOfBounds {
            parent:      self.kind(),
            index:       step.index,
            child_count: self.child_count(),
        })?;
        match step.expected_kind {
            Some(expected) if expected != child.kind() => Err(PathError::UnexpectedKind {
                index: step.index,
                expected,
                found: child.kind(),
            }),
            _ => Ok(child),
        }
    }

    /// Whether `self` and `other` are the same logical node, i.e. have the same identity.
    #[inline]
    pub fn is_identical(&self, other: &Markup) -> bool {
        self.id() == other.id()
    }

    /// Whether the subtrees rooted at `self` and `other` are structurally equal.
    /// See [`RawMarkup::has_same_structure`].
    #[inline]
    pub fn has_same_structure(&self, other: &Markup) -> bool {
        self.raw.has_same_structure(&other.raw)
    }

    /// A copy of this subtree as the root of a standalone value. Every node of the copy has a fresh identity.
    pub fn detached_from_parent(&self) -> Markup {
        Markup::new_root(self.raw.deep_reidentified())
    }

    /// Returns a positioned node at this node's address in a new tree version, in which this node has been
    /// replaced by `new_raw`.
    ///
    /// Every ancestor of this node is rebuilt with the affected child swapped out, receiving a new identity;
    /// all other subtrees are shared with the current version. The complexity of the operation is proportional
    /// to the depth of the node, not to the size of the tree.
    ///
    /// Nodes of `new_raw` that are referenced from anywhere else, e.g. from this very tree, are placed as
    /// copies with fresh identities, so that no identity occurs twice in the new tree version.
    ///
    /// ## Panics
    /// If the parent of this node does not admit a child of `new_raw`'s kind at this position.
    #[inline]
    pub fn replace_self(&self, new_raw: RawMarkup) -> Markup {
        self.replace_self_with(new_raw.into_exclusive(), false)
    }

    fn replace_self_with(&self, new_raw: RawMarkup, preserve_range: bool) -> Markup {
        // an edited node never keeps the identity of the node it replaces
        let mut new_raw = if new_raw.id() == self.id() { new_raw.reidentified() } else { new_raw };
        if preserve_range && new_raw.range().is_none() && self.range().is_some() {
            new_raw = new_raw.with_range(self.range());
        }

        let mut rebuilt = Vec::with_capacity(self.ancestors.len());
        let mut current = new_raw.clone();
        let mut index = self.index_in_parent;
        for ancestor in self.ancestors.iter().rev() {
            current = ancestor.raw.substituting_child(index, current);
            rebuilt.push(Ancestor {
                raw:             current.clone(),
                index_in_parent: ancestor.index_in_parent,
            });
            index = ancestor.index_in_parent;
        }
        rebuilt.reverse();
        trace!(kind = ?new_raw.kind(), depth = rebuilt.len(), "replaced markup node");

        Markup {
            raw:             new_raw,
            index_in_parent: self.index_in_parent,
            ancestors:       rebuilt,
        }
    }

    /// Replaces the descendant at the end of `path` with `new_child`, returning this node as it is in the new
    /// tree version.
    ///
    /// If `preserve_range` is set and `new_child` has no source range, it inherits the range of the node it
    /// replaces. Shared nodes of `new_child` are copied as in [`replace_self`](Markup::replace_self).
    ///
    /// # Errors
    /// If `path` does not lead to a node, see [`child_through`](Markup::child_through).
    ///
    /// ## Panics
    /// If the parent of the replaced descendant does not admit `new_child` at that position.
    pub fn substituting_child<I>(&self, new_child: RawMarkup, path: I, preserve_range: bool) -> Result<Markup, PathError>
    where
        I: IntoIterator,
        I::Item: Into<ChildStep>,
    {
        let target = self.child_through(path)?;
        let replaced = target.replace_self_with(new_child.into_exclusive(), preserve_range);
        Ok(replaced.ancestor_at_depth(self.depth()))
    }

    fn ancestor_at_depth(mut self, depth: usize) -> Markup {
        if depth >= self.ancestors.len() {
            return self;
        }
        let ancestor = self.ancestors.swap_remove(depth);
        self.ancestors.truncate(depth);
        Markup {
            raw:             ancestor.raw,
            index_in_parent: ancestor.index_in_parent,
            ancestors:       self.ancestors,
        }
    }

    /// Replaces this node by one with `data` as its payload and the same children.
    pub(crate) fn replacing_data(&self, data: RawMarkupData) -> Markup {
        // the new node shares its children with the node it replaces
        self.replace_self_with(self.raw.with_data(data), false)
    }

    /// Replaces this node by one with the same payload and `children`.
    pub(crate) fn replacing_children(&self, children: Vec<RawMarkup>) -> Markup {
        self.replace_self_with(RawMarkup::new(self.data().clone(), None, children), false)
    }

    /// Replaces the children in `range` by `incoming`.
    ///
    /// ## Panics
    /// If `range` is out of bounds.
    pub(crate) fn replacing_children_in_range(&self, range: Range<usize>, incoming: Vec<RawMarkup>) -> Markup {
        let mut children = self.raw.copy_children();
        assert!(
            range.start <= range.end && range.end <= children.len(),
            "range {:?} out of bounds for {:?} with {} children",
            range,
            self.kind(),
            children.len()
        );
        children.splice(range, incoming);
        self.replacing_children(children)
    }

    /// The raw node to use when placing this node under a new parent. A node taken out of a tree, or a root
    /// that is still referenced elsewhere, is copied with fresh identities throughout.
    pub(crate) fn into_adopted_raw(self) -> RawMarkup {
        if self.is_root() {
            self.raw.into_unshared()
        } else {
            self.raw.deep_reidentified()
        }
    }
}

impl fmt::Debug for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}#{}", self.kind(), self.id())?;
        if let Some(range) = self.range() {
            write!(f, "@{:?}", range)?;
        }
        Ok(())
    }
}

// Identity semantics for hash & eq
impl PartialEq for Markup {
    fn eq(&self, other: &Markup) -> bool {
        self.is_identical(other)
    }
}

impl Eq for Markup {}

impl Hash for Markup {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}
