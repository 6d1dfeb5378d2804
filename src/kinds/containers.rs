use std::{iter, ops::Range};

use super::*;

/// An iterator over the children of a container, wrapped as the container's child type.
///
/// The kind of each child is checked as it is produced.
pub type TypedChildren<'m, T> = iter::Map<MarkupChildren<'m>, fn(Markup) -> T>;

/// A node kind whose children all belong to one family, e.g. blocks or list items.
///
/// Editing operations replace `self` with the edited node in a new tree version.
pub trait MarkupContainer: MarkupNode {
    /// The family of the children.
    type Child: MarkupNode + Into<Markup>;

    /// The children of this node, wrapped as [`Child`](MarkupContainer::Child).
    ///
    /// ## Panics
    /// While iterating, if a rewrite placed a child of the wrong family in this node.
    fn typed_children(&self) -> TypedChildren<'_, Self::Child> {
        self.children().map(<Self::Child as MarkupNode>::from_markup as fn(Markup) -> Self::Child)
    }

    /// Replaces all children of this node.
    fn set_children<I>(&mut self, children: I)
    where
        I: IntoIterator,
        I::Item: Into<Self::Child>,
    {
        let children = adopt(children.into_iter().map(Into::<Self::Child>::into));
        *self = Self::from_markup(self.as_markup().replacing_children(children));
    }

    /// Replaces the children in `range` by `incoming`.
    ///
    /// ## Panics
    /// If `range` is out of bounds.
    fn replace_children_in_range<I>(&mut self, range: Range<usize>, incoming: I)
    where
        I: IntoIterator,
        I::Item: Into<Self::Child>,
    {
        let incoming = adopt(incoming.into_iter().map(Into::<Self::Child>::into));
        *self = Self::from_markup(self.as_markup().replacing_children_in_range(range, incoming));
    }

    /// Adds `child` after the last child of this node.
    fn append_child(&mut self, child: impl Into<Self::Child>) {
        let child: Self::Child = child.into();
        let end = self.child_count();
        self.replace_children_in_range(end..end, Some(child));
    }
}

macro_rules! impl_container {
    ($child:ident: $($kind:ident),+ $(,)?) => {$(
        impl MarkupContainer for $kind {
            type Child = $child;
        }
    )+};
}

impl_container!(Block:
    Document,
    BlockQuote,
    CustomBlock,
    ListItem,
    BlockDirective,
    DoxygenDiscussion,
    DoxygenNote,
    DoxygenAbstract,
    DoxygenParameter,
    DoxygenReturns,
);
impl_container!(Inline:
    Heading,
    Paragraph,
    Emphasis,
    Strong,
    Strikethrough,
    Image,
    Link,
    InlineAttributes,
    TableCell,
);
impl_container!(ListItem: OrderedList, UnorderedList);
impl_container!(TableCell: TableHead, TableRow);
impl_container!(TableRow: TableBody);

/// A node whose children are blocks.
pub trait BlockContainer: MarkupContainer<Child = Block> {
    /// The children of this node as blocks.
    fn blocks(&self) -> TypedChildren<'_, Block> {
        self.typed_children()
    }
}

impl<T: MarkupContainer<Child = Block>> BlockContainer for T {}

/// A node whose children are inlines.
pub trait InlineContainer: MarkupContainer<Child = Inline> {
    /// The children of this node as inlines.
    fn inlines(&self) -> TypedChildren<'_, Inline> {
        self.typed_children()
    }
}

impl<T: MarkupContainer<Child = Inline>> InlineContainer for T {}

/// A list.
pub trait ListItemContainer: MarkupContainer<Child = ListItem> {
    /// The items of this list.
    fn list_items(&self) -> TypedChildren<'_, ListItem> {
        self.typed_children()
    }
}

impl<T: MarkupContainer<Child = ListItem>> ListItemContainer for T {}

/// A table head or row.
pub trait TableCellContainer: MarkupContainer<Child = TableCell> {
    /// The cells of this row, left to right.
    fn cells(&self) -> TypedChildren<'_, TableCell> {
        self.typed_children()
    }
}

impl<T: MarkupContainer<Child = TableCell>> TableCellContainer for T {}

impl TableBody {
    /// The rows, top to bottom.
    pub fn rows(&self) -> TypedChildren<'_, TableRow> {
        self.typed_children()
    }
}
