use super::{adopt, new_root, Block, Inline};
use crate::raw::{Checkbox, RawMarkupData};

// Payload-less kinds whose children are blocks.
macro_rules! block_container {
    ($($(#[$attr:meta])* $name:ident => $visit:ident,)+) => {$(
        markup_node! {
            $(#[$attr])*
            $name => $visit
        }

        impl $name {
            /// Creates a standalone node with the given children.
            pub fn new<I>(blocks: I) -> Self
            where
                I: IntoIterator,
                I::Item: Into<Block>,
            {
                let markup = new_root(RawMarkupData::$name, adopt(blocks.into_iter().map(Into::<Block>::into)));
                Self { markup }
            }
        }
    )+};
}

block_container! {
    /// The root of a parsed document.
    Document => visit_document,
    /// A block quote, `> like this`.
    BlockQuote => visit_block_quote,
    /// A block-level element with custom semantics, not produced by the parser.
    CustomBlock => visit_custom_block,
    /// The discussion section of a documentation comment.
    DoxygenDiscussion => visit_doxygen_discussion,
    /// A note in a documentation comment.
    DoxygenNote => visit_doxygen_note,
    /// The abstract of a documentation comment.
    DoxygenAbstract => visit_doxygen_abstract,
    /// The description of a return value in a documentation comment.
    DoxygenReturns => visit_doxygen_returns,
}

markup_node! {
    /// A fenced or indented code block.
    CodeBlock => visit_code_block
}

impl CodeBlock {
    /// Creates a code block. `language` is the info string of a fenced block.
    pub fn new(language: Option<&str>, code: impl Into<String>) -> Self {
        let data = RawMarkupData::CodeBlock {
            language: language.map(str::to_owned),
            code:     code.into(),
        };
        Self {
            markup: new_root(data, Vec::new()),
        }
    }

    /// The info string of a fenced code block, if any.
    pub fn language(&self) -> Option<&str> {
        payload!(self, CodeBlock { language } => language.as_deref())
    }

    /// The code, including its final line break.
    pub fn code(&self) -> &str {
        payload!(self, CodeBlock { code } => code.as_str())
    }

    /// Replaces the info string.
    pub fn set_language(&mut self, language: Option<&str>) {
        let data = RawMarkupData::CodeBlock {
            language: language.map(str::to_owned),
            code:     self.code().to_owned(),
        };
        self.markup = self.markup.replacing_data(data);
    }

    /// Replaces the code.
    pub fn set_code(&mut self, code: impl Into<String>) {
        let data = RawMarkupData::CodeBlock {
            language: self.language().map(str::to_owned),
            code:     code.into(),
        };
        self.markup = self.markup.replacing_data(data);
    }
}

markup_node! {
    /// A block of raw HTML.
    HtmlBlock => visit_html_block
}

impl HtmlBlock {
    /// Creates a block of raw HTML.
    pub fn new(raw_html: impl Into<String>) -> Self {
        let data = RawMarkupData::HtmlBlock { raw_html: raw_html.into() };
        Self {
            markup: new_root(data, Vec::new()),
        }
    }

    /// The HTML, verbatim.
    pub fn raw_html(&self) -> &str {
        payload!(self, HtmlBlock { raw_html } => raw_html.as_str())
    }

    /// Replaces the HTML.
    pub fn set_raw_html(&mut self, raw_html: impl Into<String>) {
        self.markup = self.markup.replacing_data(RawMarkupData::HtmlBlock { raw_html: raw_html.into() });
    }
}

markup_node! {
    /// A thematic break, `***`.
    ThematicBreak => visit_thematic_break
}

impl ThematicBreak {
    /// Creates a thematic break.
    pub fn new() -> Self {
        Self {
            markup: new_root(RawMarkupData::ThematicBreak, Vec::new()),
        }
    }
}

impl Default for ThematicBreak {
    fn default() -> Self {
        Self::new()
    }
}

markup_node! {
    /// An ATX or setext heading.
    Heading => visit_heading
}

impl Heading {
    /// Creates a heading of the given `level`.
    ///
    /// ## Panics
    /// If `level` is `0`.
    pub fn new<I>(level: u32, inlines: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Inline>,
    {
        let children = adopt(inlines.into_iter().map(Into::<Inline>::into));
        Self {
            markup: new_root(RawMarkupData::Heading { level }, children),
        }
    }

    /// The heading level, starting at `1`.
    pub fn level(&self) -> u32 {
        payload!(self, Heading { level } => *level)
    }

    /// ## Panics
    /// If `level` is `0`.
    pub fn set_level(&mut self, level: u32) {
        self.markup = self.markup.replacing_data(RawMarkupData::Heading { level });
    }
}

markup_node! {
    /// An item of an ordered or unordered list.
    ListItem => visit_list_item
}

impl ListItem {
    /// Creates a list item with the given blocks and an optional task checkbox.
    pub fn new<I>(checkbox: Option<Checkbox>, blocks: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Block>,
    {
        let children = adopt(blocks.into_iter().map(Into::<Block>::into));
        Self {
            markup: new_root(RawMarkupData::ListItem { checkbox }, children),
        }
    }

    /// The checkbox of a task list item.
    pub fn checkbox(&self) -> Option<Checkbox> {
        payload!(self, ListItem { checkbox } => *checkbox)
    }

    /// Adds, changes or removes the checkbox.
    pub fn set_checkbox(&mut self, checkbox: Option<Checkbox>) {
        self.markup = self.markup.replacing_data(RawMarkupData::ListItem { checkbox });
    }
}

markup_node! {
    /// A numbered list.
    OrderedList => visit_ordered_list
}

impl OrderedList {
    /// Creates a list numbered from `1`.
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = ListItem>,
    {
        Self::starting_at(1, items)
    }

    /// Creates a list numbered from `start_index`.
    ///
    /// ## Panics
    /// If `start_index` is `0`.
    pub fn starting_at<I>(start_index: u32, items: I) -> Self
    where
        I: IntoIterator<Item = ListItem>,
    {
        Self {
            markup: new_root(RawMarkupData::OrderedList { start_index }, adopt(items)),
        }
    }

    /// The number of the first item.
    pub fn start_index(&self) -> u32 {
        payload!(self, OrderedList { start_index } => *start_index)
    }

    /// ## Panics
    /// If `start_index` is `0`.
    pub fn set_start_index(&mut self, start_index: u32) {
        self.markup = self.markup.replacing_data(RawMarkupData::OrderedList { start_index });
    }
}

markup_node! {
    /// A bulleted list.
    UnorderedList => visit_unordered_list
}

impl UnorderedList {
    /// Creates a list of the given items.
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = ListItem>,
    {
        Self {
            markup: new_root(RawMarkupData::UnorderedList, adopt(items)),
        }
    }
}

markup_node! {
    /// A paragraph.
    Paragraph => visit_paragraph
}

impl Paragraph {
    /// Creates a paragraph of the given inlines.
    pub fn new<I>(inlines: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Inline>,
    {
        let children = adopt(inlines.into_iter().map(Into::<Inline>::into));
        Self {
            markup: new_root(RawMarkupData::Paragraph, children),
        }
    }
}

markup_node! {
    /// A named block of blocks, `@name(arguments) { ... }`.
    BlockDirective => visit_block_directive
}

impl BlockDirective {
    /// Creates a directive named `name` with the given arguments and blocks.
    pub fn new<I>(name: impl Into<String>, argument_text: impl Into<String>, blocks: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Block>,
    {
        let data = RawMarkupData::BlockDirective {
            name:          name.into(),
            argument_text: argument_text.into(),
        };
        Self {
            markup: new_root(data, adopt(blocks.into_iter().map(Into::<Block>::into))),
        }
    }

    /// The directive name, without the leading `@`.
    pub fn name(&self) -> &str {
        payload!(self, BlockDirective { name } => name.as_str())
    }

    /// The unparsed text between the parentheses following the name.
    pub fn argument_text(&self) -> &str {
        payload!(self, BlockDirective { argument_text } => argument_text.as_str())
    }

    /// Renames the directive.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let data = RawMarkupData::BlockDirective {
            name:          name.into(),
            argument_text: self.argument_text().to_owned(),
        };
        self.markup = self.markup.replacing_data(data);
    }

    /// Replaces the unparsed argument text.
    pub fn set_argument_text(&mut self, argument_text: impl Into<String>) {
        let data = RawMarkupData::BlockDirective {
            name:          self.name().to_owned(),
            argument_text: argument_text.into(),
        };
        self.markup = self.markup.replacing_data(data);
    }
}

markup_node! {
    /// The description of a named parameter in a documentation comment.
    DoxygenParameter => visit_doxygen_parameter
}

impl DoxygenParameter {
    /// Creates the description of the parameter `name`.
    pub fn new<I>(name: impl Into<String>, blocks: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Block>,
    {
        let data = RawMarkupData::DoxygenParameter { name: name.into() };
        Self {
            markup: new_root(data, adopt(blocks.into_iter().map(Into::<Block>::into))),
        }
    }

    /// The name of the described parameter.
    pub fn name(&self) -> &str {
        payload!(self, DoxygenParameter { name } => name.as_str())
    }

    /// Renames the described parameter.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.markup = self.markup.replacing_data(RawMarkupData::DoxygenParameter { name: name.into() });
    }
}
