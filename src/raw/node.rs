use std::{
    fmt,
    hash::{Hash, Hasher},
    mem, slice,
};

use fxhash::{FxHashSet, FxHasher32};
use triomphe::Arc;

use crate::{
    identity::{IdAllocator, MarkupId},
    raw::{MarkupKind, RawMarkupData},
    SourceRange,
};

#[derive(Debug)]
struct RawMarkupHead {
    id:              MarkupId,
    data:            RawMarkupData,
    range:           Option<SourceRange>,
    structural_hash: u32,
    subtree_count:   usize,
}

#[derive(Debug)]
struct RawMarkupInner {
    head:     RawMarkupHead,
    children: Vec<RawMarkup>,
}

/// Immutable node in the inner, "raw" markup tree.
///
/// A raw node knows its payload, its children and the source range it was parsed from, but nothing about its
/// parent or position. Cloning is a reference count increment: every tree version that did not edit a subtree
/// shares the very same raw nodes for it.
#[derive(Clone)]
pub struct RawMarkup {
    inner: Arc<RawMarkupInner>,
}

impl RawMarkup {
    /// Creates a node with a fresh identity from the process-wide allocator.
    ///
    /// A child whose subtree repeats an identity found in an earlier child's subtree, e.g. the same node passed
    /// twice, is copied with fresh identities throughout, so that no identity occurs twice in the new subtree.
    ///
    /// ## Panics
    /// If the payload is invalid (see [`RawMarkupData`]) or one of the `children` is not admitted by the
    /// structural-containment rule of the payload's kind.
    pub fn new<I>(data: RawMarkupData, range: Option<SourceRange>, children: I) -> RawMarkup
    where
        I: IntoIterator<Item = RawMarkup>,
    {
        Self::new_in(IdAllocator::global(), data, range, children)
    }

    /// Like [`new`](RawMarkup::new), but draws the identity from `ids`.
    pub fn new_in<I>(ids: &IdAllocator, data: RawMarkupData, range: Option<SourceRange>, children: I) -> RawMarkup
    where
        I: IntoIterator<Item = RawMarkup>,
    {
        let mut children: Vec<RawMarkup> = children.into_iter().collect();
        distinct_identities(&mut children);
        Self::from_distinct_children(ids, data, range, children)
    }

    /// Like [`new_in`](RawMarkup::new_in), for children that are known not to share any node, such as the
    /// freshly built children of a [`MarkupBuilder`](crate::MarkupBuilder).
    pub(super) fn from_distinct_children(
        ids: &IdAllocator,
        data: RawMarkupData,
        range: Option<SourceRange>,
        children: Vec<RawMarkup>,
    ) -> RawMarkup {
        if let Err(message) = check(&data, &children) {
            panic!("invalid {:?} node: {}", data.kind(), message);
        }
        Self::assemble(ids.next(), data, range, children)
    }

    /// Like [`new`](RawMarkup::new), but reports invariant violations instead of panicking.
    #[cfg(feature = "serde1")]
    pub(crate) fn try_new(
        data: RawMarkupData,
        range: Option<SourceRange>,
        mut children: Vec<RawMarkup>,
    ) -> Result<RawMarkup, String> {
        check(&data, &children)?;
        distinct_identities(&mut children);
        Ok(Self::assemble(IdAllocator::global().next(), data, range, children))
    }

    fn assemble(id: MarkupId, data: RawMarkupData, range: Option<SourceRange>, children: Vec<RawMarkup>) -> Self {
        let mut hasher = FxHasher32::default();
        data.hash(&mut hasher);
        children.len().hash(&mut hasher);
        let mut subtree_count = 1;
        for child in &children {
            child.structural_hash().hash(&mut hasher);
            subtree_count += child.subtree_count();
        }
        RawMarkup {
            inner: Arc::new(RawMarkupInner {
                head: RawMarkupHead {
                    id,
                    data,
                    range,
                    structural_hash: hasher.finish() as u32,
                    subtree_count,
                },
                children,
            }),
        }
    }

    #[inline]
    fn head(&self) -> &RawMarkupHead {
        &self.inner.head
    }

    /// The identity of this node.
    #[inline]
    pub fn id(&self) -> MarkupId {
        self.head().id
    }

    /// The kind tag of this node.
    #[inline]
    pub fn kind(&self) -> MarkupKind {
        self.head().data.kind()
    }

    /// The kind-specific payload of this node.
    #[inline]
    pub fn data(&self) -> &RawMarkupData {
        &self.head().data
    }

    /// The range of source text this node was parsed from, if any.
    #[inline]
    pub fn range(&self) -> Option<SourceRange> {
        self.head().range
    }

    /// The children of this node, in order.
    #[inline]
    pub fn children(&self) -> slice::Iter<'_, RawMarkup> {
        self.inner.children.iter()
    }

    /// The child at `index`, if there is one.
    #[inline]
    pub fn child(&self, index: usize) -> Option<&RawMarkup> {
        self.inner.children.get(index)
    }

    /// The number of children of this node.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.inner.children.len()
    }

    /// The number of nodes in the subtree rooted at this node, including this node.
    #[inline]
    pub fn subtree_count(&self) -> usize {
        self.head().subtree_count
    }

    /// Hash over payload and children, ignoring identities and source ranges.
    #[inline]
    pub fn structural_hash(&self) -> u32 {
        self.head().structural_hash
    }

    /// The current children, for building a node whose payload changes but whose children do not.
    pub fn copy_children(&self) -> Vec<RawMarkup> {
        self.inner.children.clone()
    }

    /// Whether `self` and `other` are the very same node object.
    #[inline]
    pub fn ptr_eq(&self, other: &RawMarkup) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Structural equality: same kind, payload and (recursively) children. Identities and source ranges are
    /// not compared.
    pub fn has_same_structure(&self, other: &RawMarkup) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        if self.structural_hash() != other.structural_hash()
            || self.subtree_count() != other.subtree_count()
            || self.data() != other.data()
        {
            return false;
        }
        self.children().zip(other.children()).all(|(left, right)| left.has_same_structure(right))
    }

    /// Returns a new node with this node's payload and source range, but with the given `children` and a fresh
    /// identity.
    ///
    /// ## Panics
    /// If one of the `children` is not admitted by the structural-containment rule of this node's kind.
    pub fn with_children<I>(&self, children: I) -> RawMarkup
    where
        I: IntoIterator<Item = RawMarkup>,
    {
        Self::new(self.data().clone(), self.range(), children)
    }

    /// Like [`with_children`](RawMarkup::with_children), without checking the containment rule.
    pub(crate) fn with_children_unchecked(&self, mut children: Vec<RawMarkup>) -> RawMarkup {
        distinct_identities(&mut children);
        Self::assemble(IdAllocator::global().next(), self.data().clone(), self.range(), children)
    }

    /// Returns a new node with the given payload, this node's children, no source range and a fresh identity.
    ///
    /// ## Panics
    /// If the payload is invalid or its kind does not admit this node's children.
    pub fn with_data(&self, data: RawMarkupData) -> RawMarkup {
        Self::new(data, None, self.copy_children())
    }

    /// Returns this node with its child at `index` replaced by `child`, under a fresh identity.
    ///
    /// Only the new child is checked against the containment rule; the other children were admitted when this
    /// node was built. `child` must not share any node with the other children, see
    /// [`into_exclusive`](RawMarkup::into_exclusive).
    ///
    /// ## Panics
    /// If `index` is out of bounds or `child` is not admitted at `index`.
    pub(crate) fn substituting_child(&self, index: usize, child: RawMarkup) -> RawMarkup {
        assert!(
            index < self.child_count(),
            "child index {} out of bounds for {:?} with {} children",
            index,
            self.kind(),
            self.child_count()
        );
        assert!(
            self.kind().child_kinds().admits(index, child.kind()),
            "{:?} cannot contain {:?} at index {}",
            self.kind(),
            child.kind(),
            index
        );
        let mut children = self.copy_children();
        children[index] = child;
        Self::assemble(IdAllocator::global().next(), self.data().clone(), self.range(), children)
    }

    /// The same node with a fresh identity. Children are shared, not copied.
    pub(crate) fn reidentified(&self) -> RawMarkup {
        RawMarkup {
            inner: Arc::new(RawMarkupInner {
                head:     RawMarkupHead {
                    id:              IdAllocator::global().next(),
                    data:            self.data().clone(),
                    range:           self.range(),
                    structural_hash: self.structural_hash(),
                    subtree_count:   self.subtree_count(),
                },
                children: self.copy_children(),
            }),
        }
    }

    /// A copy of this subtree in which every node has a fresh identity.
    pub(crate) fn deep_reidentified(&self) -> RawMarkup {
        RawMarkup {
            inner: Arc::new(RawMarkupInner {
                head:     RawMarkupHead {
                    id:              IdAllocator::global().next(),
                    data:            self.data().clone(),
                    range:           self.range(),
                    structural_hash: self.structural_hash(),
                    subtree_count:   self.subtree_count(),
                },
                children: self.children().map(RawMarkup::deep_reidentified).collect(),
            }),
        }
    }

    /// This node as a value to place under a new parent: if anything else references it, it may already be part
    /// of a tree, and a copy with fresh identities throughout is returned instead.
    ///
    /// Descendants of an unshared node are trusted to be unshared as well.
    pub(crate) fn into_unshared(self) -> RawMarkup {
        if Arc::count(&self.inner) == 1 {
            self
        } else {
            self.deep_reidentified()
        }
    }

    /// Like [`into_unshared`](RawMarkup::into_unshared), but checks every node of the subtree: nodes only
    /// reachable through `self` keep their identity, every shared node is copied with fresh identities along
    /// with its descendants.
    pub(crate) fn into_exclusive(mut self) -> RawMarkup {
        match Arc::get_mut(&mut self.inner) {
            Some(inner) => {
                let children = mem::take(&mut inner.children);
                inner.children = children.into_iter().map(RawMarkup::into_exclusive).collect();
                self
            }
            None => self.deep_reidentified(),
        }
    }

    fn collect_identities(&self, ids: &mut Vec<MarkupId>) {
        ids.push(self.id());
        for child in self.children() {
            child.collect_identities(ids);
        }
    }

    /// The same node, identity included, with a different source range.
    pub(crate) fn with_range(&self, range: Option<SourceRange>) -> RawMarkup {
        RawMarkup {
            inner: Arc::new(RawMarkupInner {
                head:     RawMarkupHead {
                    id: self.id(),
                    data: self.data().clone(),
                    range,
                    structural_hash: self.structural_hash(),
                    subtree_count: self.subtree_count(),
                },
                children: self.copy_children(),
            }),
        }
    }
}

fn check(data: &RawMarkupData, children: &[RawMarkup]) -> Result<(), String> {
    data.check()?;
    let kind = data.kind();
    let rule = kind.child_kinds();
    for (index, child) in children.iter().enumerate() {
        if !rule.admits(index, child.kind()) {
            return Err(format!("{:?} cannot contain {:?} at index {}", kind, child.kind(), index));
        }
    }
    if kind == MarkupKind::Table && children.len() != 2 {
        return Err(format!("a table needs a head and a body, got {} children", children.len()));
    }
    Ok(())
}

// One identity must not occur at two places of a tree. A child whose subtree repeats an identity of an earlier
// sibling's subtree (e.g. the same node object handed in twice) is copied with identities of its own.
fn distinct_identities(children: &mut [RawMarkup]) {
    if children.len() < 2 {
        return;
    }
    let mut seen = FxHashSet::default();
    let mut subtree = Vec::new();
    for child in children.iter_mut() {
        subtree.clear();
        child.collect_identities(&mut subtree);
        if subtree.iter().any(|id| seen.contains(id)) {
            *child = child.deep_reidentified();
            subtree.clear();
            child.collect_identities(&mut subtree);
        }
        seen.extend(subtree.iter().copied());
    }
}

impl fmt::Debug for RawMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawMarkup")
            .field("id", &self.id())
            .field("data", self.data())
            .field("range", &self.range())
            .field("children", &self.inner.children)
            .finish()
    }
}

// Structural semantics for hash & eq
impl PartialEq for RawMarkup {
    fn eq(&self, other: &Self) -> bool {
        self.has_same_structure(other)
    }
}

impl Eq for RawMarkup {}

impl Hash for RawMarkup {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.structural_hash().hash(state);
    }
}
