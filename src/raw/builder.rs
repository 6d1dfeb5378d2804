use crate::{
    identity::IdAllocator,
    raw::{MarkupKind, RawMarkup, RawMarkupData},
    SourceRange,
};

/// A builder for raw trees, driven by a parser.
///
/// Start nodes with [`start_node`](MarkupBuilder::start_node), add [`leaf`](MarkupBuilder::leaf)s and nested
/// nodes, then [`finish_node`](MarkupBuilder::finish_node). When the whole tree is constructed, call
/// [`finish`](MarkupBuilder::finish) to obtain the root.
///
/// # Examples
/// ```
/// # use markup_tree::*;
/// let mut builder = MarkupBuilder::new();
/// builder.start_node(RawMarkupData::Document, None);
/// builder.start_node(RawMarkupData::Paragraph, None);
/// builder.leaf(RawMarkupData::Text { string: "Hello".into() }, None);
/// builder.finish_node();
/// builder.finish_node();
/// let document = Document::from_markup(Markup::new_root(builder.finish()));
/// assert_eq!(document.child_count(), 1);
/// ```
#[derive(Debug)]
pub struct MarkupBuilder<'ids> {
    ids:      &'ids IdAllocator,
    parents:  Vec<(RawMarkupData, Option<SourceRange>, usize)>,
    children: Vec<RawMarkup>,
}

impl MarkupBuilder<'static> {
    /// Creates a builder drawing identities from the process-wide allocator.
    pub fn new() -> Self {
        Self::with_allocator(IdAllocator::global())
    }
}

impl Default for MarkupBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'ids> MarkupBuilder<'ids> {
    /// Creates a builder drawing identities from `ids`.
    pub fn with_allocator(ids: &'ids IdAllocator) -> Self {
        Self {
            ids,
            parents: Vec::with_capacity(8),
            children: Vec::with_capacity(8),
        }
    }

    /// Add a childless node to the current branch.
    ///
    /// ## Panics
    /// If the payload is invalid.
    #[inline]
    pub fn leaf(&mut self, data: RawMarkupData, range: Option<SourceRange>) {
        let node = RawMarkup::new_in(self.ids, data, range, None);
        self.children.push(node);
    }

    /// Start new node and make it current.
    #[inline]
    pub fn start_node(&mut self, data: RawMarkupData, range: Option<SourceRange>) {
        let len = self.children.len();
        self.parents.push((data, range, len));
    }

    /// Finish the current branch and restore the previous branch as current.
    ///
    /// ## Panics
    /// If no node is open, or if the finished node's payload or children violate its kind's invariants.
    #[inline]
    pub fn finish_node(&mut self) {
        let (data, range, first_child) = self.parents.pop().expect("`finish_node` called without an open node");
        let children: Vec<RawMarkup> = self.children.drain(first_child..).collect();
        let node = RawMarkup::from_distinct_children(self.ids, data, range, children);
        self.children.push(node);
    }

    /// The number of nodes started but not yet finished.
    #[inline]
    pub fn depth(&self) -> usize {
        self.parents.len()
    }

    /// The kind of the innermost open node, if any.
    #[inline]
    pub fn current_kind(&self) -> Option<MarkupKind> {
        self.parents.last().map(|(data, _, _)| data.kind())
    }

    /// The number of children the innermost open node has so far.
    #[inline]
    pub fn current_child_count(&self) -> usize {
        let first_child = self.parents.last().map_or(0, |&(_, _, first_child)| first_child);
        self.children.len() - first_child
    }

    /// The payload of the innermost open node of `kind`, for parsers that learn about a node's payload only
    /// after starting it.
    pub fn open_node_data_mut(&mut self, kind: MarkupKind) -> Option<&mut RawMarkupData> {
        self.parents.iter_mut().rev().map(|(data, _, _)| data).find(|data| data.kind() == kind)
    }

    /// Complete building the tree.
    ///
    /// ## Panics
    /// If calls to [`start_node`](MarkupBuilder::start_node) and [`finish_node`](MarkupBuilder::finish_node)
    /// were not balanced, or if the builder does not hold exactly one root node.
    #[inline]
    pub fn finish(mut self) -> RawMarkup {
        assert!(self.parents.is_empty(), "{} nodes were started but not finished", self.parents.len());
        assert_eq!(self.children.len(), 1, "a markup tree has exactly one root");
        self.children.pop().unwrap()
    }
}
