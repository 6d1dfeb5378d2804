//! Double-dispatch traversal of markup trees.
//!
//! [`MarkupVisitor`] has one method per [`MarkupKind`], each of which falls back to
//! [`default_visit`](MarkupVisitor::default_visit). [`Markup::accept`] picks the method matching the node's
//! kind at runtime. Two refinements cover the common cases:
//!
//! - a [`MarkupWalker`] reads a tree, descending into every child unless a per-kind method is overridden without
//!   calling [`descend_into`](MarkupWalker::descend_into);
//! - a [`MarkupRewriter`] transforms a tree bottom-up, where returning `None` deletes a node and returning another
//!   node substitutes it.

use crate::{
    kinds::*,
    markup::Markup,
    raw::{MarkupKind, RawMarkup},
};

macro_rules! define_visitors {
    ($($kind:ident => $visit:ident,)+) => {
        /// A visitor over positioned markup nodes, with one method per node kind.
        ///
        /// Every per-kind method defaults to [`default_visit`](MarkupVisitor::default_visit).
        pub trait MarkupVisitor: Sized {
            /// The result of visiting a node.
            type Result;

            /// The fallback for every node kind whose method is not overridden.
            fn default_visit(&mut self, markup: &Markup) -> Self::Result;

            /// Visits `markup` through the method that matches its kind.
            #[inline]
            fn visit(&mut self, markup: &Markup) -> Self::Result {
                markup.accept(self)
            }

            $(
                #[doc = concat!("Visits a [`", stringify!($kind), "`] node.")]
                #[inline]
                fn $visit(&mut self, node: &$kind) -> Self::Result {
                    self.default_visit(node.as_markup())
                }
            )+
        }

        impl Markup {
            /// Calls the method of `visitor` that corresponds to the kind of this node.
            pub fn accept<V: MarkupVisitor>(&self, visitor: &mut V) -> V::Result {
                match self.kind() {
                    $(MarkupKind::$kind => visitor.$visit(&$kind::from_markup(self.clone())),)+
                }
            }
        }

        /// A read-only traversal that visits every node of a tree in pre-order.
        ///
        /// The default behavior for every kind is to [`descend_into`](MarkupWalker::descend_into) the node's
        /// children. A walker overriding the method for a kind stops the descent below nodes of that kind, unless
        /// the override calls `descend_into` itself.
        ///
        /// # Examples
        /// ```
        /// # use markup_tree::*;
        /// #[derive(Default)]
        /// struct CountText(usize);
        ///
        /// impl MarkupWalker for CountText {
        ///     fn visit_text(&mut self, _: &Text) {
        ///         self.0 += 1;
        ///     }
        /// }
        ///
        /// let document = Document::new([Paragraph::new([Text::new("a"), Text::new("b")])]);
        /// let mut counter = CountText::default();
        /// counter.visit(document.as_markup());
        /// assert_eq!(counter.0, 2);
        /// ```
        pub trait MarkupWalker: Sized {
            /// Visits `markup` through the method that matches its kind.
            #[inline]
            fn visit(&mut self, markup: &Markup) {
                markup.accept(&mut Walking(self))
            }

            /// Visits every child of `markup`, in order.
            fn descend_into(&mut self, markup: &Markup) {
                for child in markup.children() {
                    self.visit(&child);
                }
            }

            /// The fallback for every node kind whose method is not overridden.
            #[inline]
            fn default_visit(&mut self, markup: &Markup) {
                self.descend_into(markup)
            }

            $(
                #[doc = concat!("Visits a [`", stringify!($kind), "`] node.")]
                #[inline]
                fn $visit(&mut self, node: &$kind) {
                    self.default_visit(node.as_markup())
                }
            )+
        }

        struct Walking<'w, W>(&'w mut W);

        impl<W: MarkupWalker> MarkupVisitor for Walking<'_, W> {
            type Result = ();

            #[inline]
            fn default_visit(&mut self, markup: &Markup) {
                self.0.default_visit(markup)
            }

            $(
                #[inline]
                fn $visit(&mut self, node: &$kind) {
                    self.0.$visit(node)
                }
            )+
        }

        /// A traversal that produces a rewritten tree.
        ///
        /// Every method returns the node that takes the place of the visited node: `None` deletes it, a different
        /// node substitutes it. By default, a node's children are rewritten and the node is rebuilt from the
        /// surviving results. Nodes whose children all come back unchanged are returned as they are.
        ///
        /// Rebuilt nodes are not checked against the structural-containment rules. A rewrite that, say, puts a
        /// paragraph into a paragraph only fails when the result is accessed through a typed wrapper.
        ///
        /// # Examples
        /// ```
        /// # use markup_tree::*;
        /// struct Unbold;
        ///
        /// impl MarkupRewriter for Unbold {
        ///     fn visit_strong(&mut self, _: &Strong) -> Option<Markup> {
        ///         None
        ///     }
        /// }
        ///
        /// let paragraph = Paragraph::new([
        ///     Inline::from(Text::new("a ")),
        ///     Strong::new([Text::new("b")]).into(),
        ///     Text::new(" c").into(),
        /// ]);
        /// let rewritten = Unbold.visit(paragraph.as_markup()).map(Paragraph::from_markup).unwrap();
        /// assert_eq!(rewritten.child_count(), 2);
        /// ```
        pub trait MarkupRewriter: Sized {
            /// Visits `markup` through the method that matches its kind.
            #[inline]
            fn visit(&mut self, markup: &Markup) -> Option<Markup> {
                markup.accept(&mut Rewriting(self))
            }

            /// Rewrites every child of `markup` and rebuilds it from the results.
            fn default_visit(&mut self, markup: &Markup) -> Option<Markup> {
                let mut changed = false;
                let mut children = Vec::with_capacity(markup.child_count());
                for child in markup.children() {
                    match self.visit(&child) {
                        Some(result) if result.raw().ptr_eq(child.raw()) => children.push(child.into_raw()),
                        Some(result) => {
                            changed = true;
                            children.push(result.into_adopted_raw());
                        }
                        None => changed = true,
                    }
                }
                if !changed {
                    return Some(markup.clone());
                }
                let rebuilt: RawMarkup = markup.raw().with_children_unchecked(children);
                Some(Markup::new_root(rebuilt))
            }

            $(
                #[doc = concat!("Rewrites a [`", stringify!($kind), "`] node.")]
                #[inline]
                fn $visit(&mut self, node: &$kind) -> Option<Markup> {
                    self.default_visit(node.as_markup())
                }
            )+
        }

        struct Rewriting<'r, R>(&'r mut R);

        impl<R: MarkupRewriter> MarkupVisitor for Rewriting<'_, R> {
            type Result = Option<Markup>;

            #[inline]
            fn default_visit(&mut self, markup: &Markup) -> Option<Markup> {
                self.0.default_visit(markup)
            }

            $(
                #[inline]
                fn $visit(&mut self, node: &$kind) -> Option<Markup> {
                    self.0.$visit(node)
                }
            )+
        }
    };
}

for_each_markup_kind!(define_visitors);
