//! Typed wrappers around [`Markup`] nodes, one per [`MarkupKind`].
//!
//! A wrapper is a positioned node whose kind has been checked once, at [`cast`](MarkupNode::cast) time, and which
//! in return exposes accessors for the kind's payload. Wrappers are values: setters take `&mut self` and replace
//! the wrapped node by its edited version, leaving every other handle on the old tree version untouched.
//!
//! ```
//! # use markup_tree::*;
//! let mut heading = Heading::new(1, [Text::new("Intro")]);
//! let before = heading.clone();
//! heading.set_level(2);
//! assert_eq!(heading.level(), 2);
//! assert_eq!(before.level(), 1);
//! assert!(!heading.is_identical(&before));
//! ```

use std::fmt;

use crate::{
    dump::DumpOptions,
    identity::MarkupId,
    markup::{Markup, MarkupChildren},
    raw::{MarkupKind, RawMarkup, RawMarkupData},
    visit::{MarkupVisitor, MarkupWalker},
    SourceRange,
};

mod block;
mod containers;
mod inline;
mod table;

pub use block::*;
pub use containers::{
    BlockContainer, InlineContainer, ListItemContainer, MarkupContainer, TableCellContainer, TypedChildren,
};
pub use inline::*;
pub use table::*;

/// Common interface of all typed wrappers.
pub trait MarkupNode: Clone + fmt::Debug {
    /// Whether markup of `kind` can be wrapped as `Self`.
    fn can_cast(kind: MarkupKind) -> bool;

    /// Wraps `markup` if its kind matches, returns `None` otherwise.
    fn cast(markup: Markup) -> Option<Self>;

    /// The wrapped positioned node.
    fn as_markup(&self) -> &Markup;

    /// Consumes the wrapper, returning the wrapped positioned node.
    fn into_markup(self) -> Markup;

    /// Calls the method of `visitor` that corresponds to this node's kind.
    fn accept<V: MarkupVisitor>(&self, visitor: &mut V) -> V::Result;

    /// Wraps `markup`.
    ///
    /// ## Panics
    /// If the kind of `markup` does not match `Self`.
    fn from_markup(markup: Markup) -> Self {
        let kind = markup.kind();
        match Self::cast(markup) {
            Some(node) => node,
            None => panic!("cannot wrap {:?} markup as {}", kind, std::any::type_name::<Self>()),
        }
    }

    /// The identity of the wrapped node.
    #[inline]
    fn id(&self) -> MarkupId {
        self.as_markup().id()
    }

    /// The kind of the wrapped node.
    #[inline]
    fn kind(&self) -> MarkupKind {
        self.as_markup().kind()
    }

    /// The range of source text the wrapped node was parsed from, if any.
    #[inline]
    fn range(&self) -> Option<SourceRange> {
        self.as_markup().range()
    }

    /// The number of children of the wrapped node.
    #[inline]
    fn child_count(&self) -> usize {
        self.as_markup().child_count()
    }

    /// The untyped children of the wrapped node.
    #[inline]
    fn children(&self) -> MarkupChildren<'_> {
        self.as_markup().children()
    }

    /// The parent of the wrapped node, or `None` at the root.
    #[inline]
    fn parent(&self) -> Option<Markup> {
        self.as_markup().parent()
    }

    /// The root of the tree containing the wrapped node.
    #[inline]
    fn root(&self) -> Markup {
        self.as_markup().root()
    }

    /// Whether both wrappers hold the same logical node.
    #[inline]
    fn is_identical<N: MarkupNode>(&self, other: &N) -> bool {
        self.as_markup().is_identical(other.as_markup())
    }

    /// Whether both wrappers hold structurally equal subtrees.
    #[inline]
    fn has_same_structure<N: MarkupNode>(&self, other: &N) -> bool {
        self.as_markup().has_same_structure(other.as_markup())
    }

    /// A tree-shaped dump of the wrapped subtree, see [`DumpOptions`].
    fn debug_description(&self, options: DumpOptions) -> String {
        self.as_markup().debug_description(options)
    }

    /// The wrapped subtree as a standalone value with a fresh identity.
    fn detached_from_parent(&self) -> Self {
        Self::from_markup(self.as_markup().detached_from_parent())
    }
}

/// Marker for kinds that can be children of a block container.
pub trait BlockMarkup: MarkupNode {}

/// Marker for kinds that can be children of an inline container.
pub trait InlineMarkup: MarkupNode {
    /// The text content of this inline subtree, with all formatting removed.
    ///
    /// Soft breaks contribute a space and line breaks a newline. Symbol links contribute their destination.
    fn plain_text(&self) -> String {
        let mut collector = PlainText::default();
        collector.visit(self.as_markup());
        collector.text
    }
}

#[derive(Default)]
struct PlainText {
    text: String,
}

impl MarkupWalker for PlainText {
    fn visit_text(&mut self, text: &Text) {
        self.text.push_str(text.string());
    }

    fn visit_inline_code(&mut self, code: &InlineCode) {
        self.text.push_str(code.code());
    }

    fn visit_custom_inline(&mut self, custom: &CustomInline) {
        self.text.push_str(custom.text());
    }

    fn visit_symbol_link(&mut self, link: &SymbolLink) {
        if let Some(destination) = link.destination() {
            self.text.push_str(destination);
        }
    }

    fn visit_soft_break(&mut self, _: &SoftBreak) {
        self.text.push(' ');
    }

    fn visit_line_break(&mut self, _: &LineBreak) {
        self.text.push('\n');
    }
}

macro_rules! markup_family {
    ($(#[$attr:meta])* $family:ident: $marker:ident { $($kind:ident),+ $(,)? }) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $family {
            $($kind($kind),)+
        }

        impl MarkupNode for $family {
            fn can_cast(kind: MarkupKind) -> bool {
                matches!(kind, $(MarkupKind::$kind)|+)
            }

            fn cast(markup: Markup) -> Option<Self> {
                let node = match markup.kind() {
                    $(MarkupKind::$kind => $family::$kind($kind::cast(markup)?),)+
                    _ => return None,
                };
                Some(node)
            }

            fn as_markup(&self) -> &Markup {
                match self {
                    $($family::$kind(it) => it.as_markup(),)+
                }
            }

            fn into_markup(self) -> Markup {
                match self {
                    $($family::$kind(it) => it.into_markup(),)+
                }
            }

            fn accept<V: MarkupVisitor>(&self, visitor: &mut V) -> V::Result {
                match self {
                    $($family::$kind(it) => it.accept(visitor),)+
                }
            }
        }

        impl $marker for $family {}

        $(
            impl $marker for $kind {}

            impl From<$kind> for $family {
                #[inline]
                fn from(node: $kind) -> $family {
                    $family::$kind(node)
                }
            }
        )+

        impl From<$family> for Markup {
            #[inline]
            fn from(node: $family) -> Markup {
                node.into_markup()
            }
        }
    };
}

markup_family! {
    /// Any node that can be a child of a block container.
    Block: BlockMarkup {
        BlockQuote,
        CodeBlock,
        CustomBlock,
        HtmlBlock,
        ThematicBreak,
        Heading,
        ListItem,
        OrderedList,
        UnorderedList,
        Paragraph,
        BlockDirective,
        Table,
        DoxygenDiscussion,
        DoxygenNote,
        DoxygenAbstract,
        DoxygenParameter,
        DoxygenReturns,
    }
}

markup_family! {
    /// Any node that can be a child of an inline container.
    Inline: InlineMarkup {
        Text,
        Emphasis,
        Strong,
        Strikethrough,
        Image,
        InlineCode,
        InlineHtml,
        LineBreak,
        SoftBreak,
        Link,
        SymbolLink,
        CustomInline,
        InlineAttributes,
    }
}

/// Takes ownership of typed nodes for placing them under a new parent.
fn adopt<I>(children: I) -> Vec<RawMarkup>
where
    I: IntoIterator,
    I::Item: Into<Markup>,
{
    children.into_iter().map(|child| child.into().into_adopted_raw()).collect()
}

/// A new standalone tree of a single node with `data` and `children`.
fn new_root(data: RawMarkupData, children: Vec<RawMarkup>) -> Markup {
    Markup::new_root(RawMarkup::new(data, None, children))
}

#[cold]
#[track_caller]
pub(crate) fn payload_mismatch(expected: &str, data: &RawMarkupData) -> ! {
    panic!("expected {} payload, found {:?}", expected, data.kind())
}
