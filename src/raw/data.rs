use std::fmt;

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// The kind tag of a markup node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub enum MarkupKind {
    Document,
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
    TableHead,
    TableBody,
    TableRow,
    TableCell,
    DoxygenDiscussion,
    DoxygenNote,
    DoxygenAbstract,
    DoxygenParameter,
    DoxygenReturns,
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

impl MarkupKind {
    /// Whether nodes of this kind may appear as children of a block container.
    pub fn is_block(self) -> bool {
        use MarkupKind::*;
        matches!(
            self,
            BlockQuote
                | CodeBlock
                | CustomBlock
                | HtmlBlock
                | ThematicBreak
                | Heading
                | ListItem
                | OrderedList
                | UnorderedList
                | Paragraph
                | BlockDirective
                | Table
                | DoxygenDiscussion
                | DoxygenNote
                | DoxygenAbstract
                | DoxygenParameter
                | DoxygenReturns
        )
    }

    /// Whether nodes of this kind may appear as children of an inline container.
    pub fn is_inline(self) -> bool {
        use MarkupKind::*;
        matches!(
            self,
            Text | Emphasis
                | Strong
                | Strikethrough
                | Image
                | InlineCode
                | InlineHtml
                | LineBreak
                | SoftBreak
                | Link
                | SymbolLink
                | CustomInline
                | InlineAttributes
        )
    }

    /// The family of nodes that nodes of this kind may contain.
    pub fn child_kinds(self) -> ChildKinds {
        use MarkupKind::*;
        match self {
            Document | BlockQuote | CustomBlock | ListItem | BlockDirective | DoxygenDiscussion | DoxygenNote
            | DoxygenAbstract | DoxygenParameter | DoxygenReturns => ChildKinds::Blocks,
            Heading | Paragraph | TableCell | Emphasis | Strong | Strikethrough | Image | Link | InlineAttributes => {
                ChildKinds::Inlines
            }
            OrderedList | UnorderedList => ChildKinds::ListItems,
            TableHead | TableRow => ChildKinds::TableCells,
            TableBody => ChildKinds::TableRows,
            Table => ChildKinds::TableSections,
            CodeBlock | HtmlBlock | ThematicBreak | Text | InlineCode | InlineHtml | LineBreak | SoftBreak
            | SymbolLink | CustomInline => ChildKinds::None,
        }
    }
}

impl fmt::Display for MarkupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Structural-containment rule of a node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildKinds {
    /// Leaf kinds never have children.
    None,
    Blocks,
    Inlines,
    ListItems,
    TableCells,
    TableRows,
    /// Exactly a [`TableHead`](MarkupKind::TableHead) followed by a [`TableBody`](MarkupKind::TableBody).
    TableSections,
}

impl ChildKinds {
    /// Whether a child of `kind` is admitted at position `index` of a parent following this rule.
    pub fn admits(self, index: usize, kind: MarkupKind) -> bool {
        match self {
            ChildKinds::None => false,
            ChildKinds::Blocks => kind.is_block(),
            ChildKinds::Inlines => kind.is_inline(),
            ChildKinds::ListItems => kind == MarkupKind::ListItem,
            ChildKinds::TableCells => kind == MarkupKind::TableCell,
            ChildKinds::TableRows => kind == MarkupKind::TableRow,
            ChildKinds::TableSections => match index {
                0 => kind == MarkupKind::TableHead,
                1 => kind == MarkupKind::TableBody,
                _ => false,
            },
        }
    }
}

/// State of a task list item's checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub enum Checkbox {
    Checked,
    Unchecked,
}

/// Horizontal alignment of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub enum ColumnAlignment {
    Left,
    Center,
    Right,
}

/// Kind-specific payload of a raw node.
///
/// The variant determines the node's [`MarkupKind`]. Structural equality of nodes compares this payload, but
/// never identities or source ranges.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize), serde(tag = "kind"))]
pub enum RawMarkupData {
    Document,
    BlockQuote,
    CodeBlock { language: Option<String>, code: String },
    CustomBlock,
    HtmlBlock { raw_html: String },
    ThematicBreak,
    /// `level` starts at `1`.
    Heading { level: u32 },
    ListItem { checkbox: Option<Checkbox> },
    /// `start_index` starts at `1`.
    OrderedList { start_index: u32 },
    UnorderedList,
    Paragraph,
    BlockDirective { name: String, argument_text: String },
    Table { column_alignments: Vec<Option<ColumnAlignment>> },
    TableHead,
    TableBody,
    TableRow,
    /// A span of `0` marks a cell covered by a neighbouring cell's span.
    TableCell { colspan: u32, rowspan: u32 },
    DoxygenDiscussion,
    DoxygenNote,
    DoxygenAbstract,
    DoxygenParameter { name: String },
    DoxygenReturns,
    Text { string: String },
    Emphasis,
    Strong,
    Strikethrough,
    Image { source: Option<String>, title: Option<String> },
    InlineCode { code: String },
    InlineHtml { raw_html: String },
    LineBreak,
    SoftBreak,
    Link { destination: Option<String>, title: Option<String> },
    SymbolLink { destination: Option<String> },
    CustomInline { text: String },
    InlineAttributes { attributes: String },
}

impl RawMarkupData {
    /// The kind tag of this payload.
    pub fn kind(&self) -> MarkupKind {
        match self {
            RawMarkupData::Document => MarkupKind::Document,
            RawMarkupData::BlockQuote => MarkupKind::BlockQuote,
            RawMarkupData::CodeBlock { .. } => MarkupKind::CodeBlock,
            RawMarkupData::CustomBlock => MarkupKind::CustomBlock,
            RawMarkupData::HtmlBlock { .. } => MarkupKind::HtmlBlock,
            RawMarkupData::ThematicBreak => MarkupKind::ThematicBreak,
            RawMarkupData::Heading { .. } => MarkupKind::Heading,
            RawMarkupData::ListItem { .. } => MarkupKind::ListItem,
            RawMarkupData::OrderedList { .. } => MarkupKind::OrderedList,
            RawMarkupData::UnorderedList => MarkupKind::UnorderedList,
            RawMarkupData::Paragraph => MarkupKind::Paragraph,
            RawMarkupData::BlockDirective { .. } => MarkupKind::BlockDirective,
            RawMarkupData::Table { .. } => MarkupKind::Table,
            RawMarkupData::TableHead => MarkupKind::TableHead,
            RawMarkupData::TableBody => MarkupKind::TableBody,
            RawMarkupData::TableRow => MarkupKind::TableRow,
            RawMarkupData::TableCell { .. } => MarkupKind::TableCell,
            RawMarkupData::DoxygenDiscussion => MarkupKind::DoxygenDiscussion,
            RawMarkupData::DoxygenNote => MarkupKind::DoxygenNote,
            RawMarkupData::DoxygenAbstract => MarkupKind::DoxygenAbstract,
            RawMarkupData::DoxygenParameter { .. } => MarkupKind::DoxygenParameter,
            RawMarkupData::DoxygenReturns => MarkupKind::DoxygenReturns,
            RawMarkupData::Text { .. } => MarkupKind::Text,
            RawMarkupData::Emphasis => MarkupKind::Emphasis,
            RawMarkupData::Strong => MarkupKind::Strong,
            RawMarkupData::Strikethrough => MarkupKind::Strikethrough,
            RawMarkupData::Image { .. } => MarkupKind::Image,
            RawMarkupData::InlineCode { .. } => MarkupKind::InlineCode,
            RawMarkupData::InlineHtml { .. } => MarkupKind::InlineHtml,
            RawMarkupData::LineBreak => MarkupKind::LineBreak,
            RawMarkupData::SoftBreak => MarkupKind::SoftBreak,
            RawMarkupData::Link { .. } => MarkupKind::Link,
            RawMarkupData::SymbolLink { .. } => MarkupKind::SymbolLink,
            RawMarkupData::CustomInline { .. } => MarkupKind::CustomInline,
            RawMarkupData::InlineAttributes { .. } => MarkupKind::InlineAttributes,
        }
    }

    /// Checks the payload's own requirements, independent of any children.
    pub(crate) fn check(&self) -> Result<(), String> {
        match *self {
            RawMarkupData::Heading { level: 0 } => Err("heading level must be at least 1".to_string()),
            RawMarkupData::OrderedList { start_index: 0 } => {
                Err("ordered list start index must be at least 1".to_string())
            }
            _ => Ok(()),
        }
    }
}
