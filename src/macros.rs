/// Invokes `$callback!` with the list of all markup kinds, each paired with the name of its visitor method.
macro_rules! for_each_markup_kind {
    ($callback:ident) => {
        $callback! {
            Document => visit_document,
            BlockQuote => visit_block_quote,
            CodeBlock => visit_code_block,
            CustomBlock => visit_custom_block,
            HtmlBlock => visit_html_block,
            ThematicBreak => visit_thematic_break,
            Heading => visit_heading,
            ListItem => visit_list_item,
            OrderedList => visit_ordered_list,
            UnorderedList => visit_unordered_list,
            Paragraph => visit_paragraph,
            BlockDirective => visit_block_directive,
            Table => visit_table,
            TableHead => visit_table_head,
            TableBody => visit_table_body,
            TableRow => visit_table_row,
            TableCell => visit_table_cell,
            DoxygenDiscussion => visit_doxygen_discussion,
            DoxygenNote => visit_doxygen_note,
            DoxygenAbstract => visit_doxygen_abstract,
            DoxygenParameter => visit_doxygen_parameter,
            DoxygenReturns => visit_doxygen_returns,
            Text => visit_text,
            Emphasis => visit_emphasis,
            Strong => visit_strong,
            Strikethrough => visit_strikethrough,
            Image => visit_image,
            InlineCode => visit_inline_code,
            InlineHtml => visit_inline_html,
            LineBreak => visit_line_break,
            SoftBreak => visit_soft_break,
            Link => visit_link,
            SymbolLink => visit_symbol_link,
            CustomInline => visit_custom_inline,
            InlineAttributes => visit_inline_attributes,
        }
    };
}

/// Defines a typed wrapper around [`Markup`](crate::Markup) for a single kind.
macro_rules! markup_node {
    ($(#[$attr:meta])* $name:ident => $visit:ident) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            markup: $crate::Markup,
        }

        impl $crate::MarkupNode for $name {
            #[inline]
            fn can_cast(kind: $crate::MarkupKind) -> bool {
                kind == $crate::MarkupKind::$name
            }

            #[inline]
            fn cast(markup: $crate::Markup) -> Option<Self> {
                if Self::can_cast(markup.kind()) {
                    Some(Self { markup })
                } else {
                    None
                }
            }

            #[inline]
            fn as_markup(&self) -> &$crate::Markup {
                &self.markup
            }

            #[inline]
            fn into_markup(self) -> $crate::Markup {
                self.markup
            }

            #[inline]
            fn accept<V: $crate::MarkupVisitor>(&self, visitor: &mut V) -> V::Result {
                visitor.$visit(self)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Debug::fmt(&self.markup, f)
            }
        }

        impl From<$name> for $crate::Markup {
            #[inline]
            fn from(node: $name) -> $crate::Markup {
                node.markup
            }
        }
    };
}

/// Reads a field of a wrapper's payload.
macro_rules! payload {
    ($node:expr, $variant:ident { $($field:ident),+ } => $value:expr) => {
        match $node.markup.data() {
            $crate::RawMarkupData::$variant { $($field),+ , .. } => $value,
            data => $crate::kinds::payload_mismatch(stringify!($variant), data),
        }
    };
}
