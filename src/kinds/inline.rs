use super::{adopt, new_root, Inline, InlineMarkup, MarkupNode};
use crate::raw::RawMarkupData;

// Payload-less kinds whose children are inlines.
macro_rules! inline_container {
    ($($(#[$attr:meta])* $name:ident => $visit:ident,)+) => {$(
        markup_node! {
            $(#[$attr])*
            $name => $visit
        }

        impl $name {
            /// Creates a standalone node with the given children.
            pub fn new<I>(inlines: I) -> Self
            where
                I: IntoIterator,
                I::Item: Into<Inline>,
            {
                let markup = new_root(RawMarkupData::$name, adopt(inlines.into_iter().map(Into::<Inline>::into)));
                Self { markup }
            }
        }
    )+};
}

inline_container! {
    /// Emphasized text, `*like this*`.
    Emphasis => visit_emphasis,
    /// Strongly emphasized text, `**like this**`.
    Strong => visit_strong,
    /// Struck-through text, `~~like this~~`.
    Strikethrough => visit_strikethrough,
}

// Payload-less leaves.
macro_rules! inline_leaf {
    ($($(#[$attr:meta])* $name:ident => $visit:ident,)+) => {$(
        markup_node! {
            $(#[$attr])*
            $name => $visit
        }

        impl $name {
            /// Creates a standalone node.
            pub fn new() -> Self {
                Self {
                    markup: new_root(RawMarkupData::$name, Vec::new()),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    )+};
}

inline_leaf! {
    /// A hard line break.
    LineBreak => visit_line_break,
    /// A line break in the source that renders as a space.
    SoftBreak => visit_soft_break,
}

markup_node! {
    /// Plain text.
    Text => visit_text
}

impl Text {
    /// Creates a text node.
    pub fn new(string: impl Into<String>) -> Self {
        let data = RawMarkupData::Text { string: string.into() };
        Self {
            markup: new_root(data, Vec::new()),
        }
    }

    /// The text, without markup.
    pub fn string(&self) -> &str {
        payload!(self, Text { string } => string.as_str())
    }

    /// Replaces the text.
    pub fn set_string(&mut self, string: impl Into<String>) {
        self.markup = self.markup.replacing_data(RawMarkupData::Text { string: string.into() });
    }
}

markup_node! {
    /// An image. The children are the image's description.
    Image => visit_image
}

impl Image {
    /// Creates an image. The inlines are its description.
    pub fn new<I>(source: Option<&str>, title: Option<&str>, inlines: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Inline>,
    {
        let data = RawMarkupData::Image {
            source: source.map(str::to_owned),
            title:  title.map(str::to_owned),
        };
        Self {
            markup: new_root(data, adopt(inlines.into_iter().map(Into::<Inline>::into))),
        }
    }

    /// The location of the image, if any.
    pub fn source(&self) -> Option<&str> {
        payload!(self, Image { source } => source.as_deref())
    }

    /// The title of the image, if any.
    pub fn title(&self) -> Option<&str> {
        payload!(self, Image { title } => title.as_deref())
    }

    /// Replaces the image location.
    pub fn set_source(&mut self, source: Option<&str>) {
        let data = RawMarkupData::Image {
            source: source.map(str::to_owned),
            title:  self.title().map(str::to_owned),
        };
        self.markup = self.markup.replacing_data(data);
    }

    /// Replaces the title.
    pub fn set_title(&mut self, title: Option<&str>) {
        let data = RawMarkupData::Image {
            source: self.source().map(str::to_owned),
            title:  title.map(str::to_owned),
        };
        self.markup = self.markup.replacing_data(data);
    }
}

markup_node! {
    /// A code span, `` `like this` ``.
    InlineCode => visit_inline_code
}

impl InlineCode {
    /// Creates a code span.
    pub fn new(code: impl Into<String>) -> Self {
        let data = RawMarkupData::InlineCode { code: code.into() };
        Self {
            markup: new_root(data, Vec::new()),
        }
    }

    /// The code, without the backticks.
    pub fn code(&self) -> &str {
        payload!(self, InlineCode { code } => code.as_str())
    }

    /// Replaces the code.
    pub fn set_code(&mut self, code: impl Into<String>) {
        self.markup = self.markup.replacing_data(RawMarkupData::InlineCode { code: code.into() });
    }
}

markup_node! {
    /// A single raw HTML tag.
    InlineHtml => visit_inline_html
}

impl InlineHtml {
    /// Creates an inline HTML fragment.
    pub fn new(raw_html: impl Into<String>) -> Self {
        let data = RawMarkupData::InlineHtml { raw_html: raw_html.into() };
        Self {
            markup: new_root(data, Vec::new()),
        }
    }

    /// The HTML, verbatim.
    pub fn raw_html(&self) -> &str {
        payload!(self, InlineHtml { raw_html } => raw_html.as_str())
    }

    /// Replaces the HTML.
    pub fn set_raw_html(&mut self, raw_html: impl Into<String>) {
        self.markup = self.markup.replacing_data(RawMarkupData::InlineHtml { raw_html: raw_html.into() });
    }
}

markup_node! {
    /// A link. The children are the link text.
    Link => visit_link
}

impl Link {
    /// Creates a link to `destination` with the given link text and no title.
    pub fn new<I>(destination: Option<&str>, inlines: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Inline>,
    {
        let data = RawMarkupData::Link {
            destination: destination.map(str::to_owned),
            title:       None,
        };
        Self {
            markup: new_root(data, adopt(inlines.into_iter().map(Into::<Inline>::into))),
        }
    }

    /// The link target, if any.
    pub fn destination(&self) -> Option<&str> {
        payload!(self, Link { destination } => destination.as_deref())
    }

    /// The link title, if any.
    pub fn title(&self) -> Option<&str> {
        payload!(self, Link { title } => title.as_deref())
    }

    /// Replaces the link target.
    pub fn set_destination(&mut self, destination: Option<&str>) {
        let data = RawMarkupData::Link {
            destination: destination.map(str::to_owned),
            title:       self.title().map(str::to_owned),
        };
        self.markup = self.markup.replacing_data(data);
    }

    /// Replaces the link title.
    pub fn set_title(&mut self, title: Option<&str>) {
        let data = RawMarkupData::Link {
            destination: self.destination().map(str::to_owned),
            title:       title.map(str::to_owned),
        };
        self.markup = self.markup.replacing_data(data);
    }

    /// Whether the link text is the destination itself, as for `<https://example.com>`.
    pub fn is_autolink(&self) -> bool {
        match (self.destination(), self.child_count()) {
            (Some(destination), 1) => self.plain_text() == destination,
            _ => false,
        }
    }
}

markup_node! {
    /// A link to a symbol, ``` ``like::this`` ```.
    SymbolLink => visit_symbol_link
}

impl SymbolLink {
    /// Creates a link to the symbol `destination`.
    pub fn new(destination: Option<&str>) -> Self {
        let data = RawMarkupData::SymbolLink {
            destination: destination.map(str::to_owned),
        };
        Self {
            markup: new_root(data, Vec::new()),
        }
    }

    /// The linked symbol, if any.
    pub fn destination(&self) -> Option<&str> {
        payload!(self, SymbolLink { destination } => destination.as_deref())
    }

    /// Replaces the linked symbol.
    pub fn set_destination(&mut self, destination: Option<&str>) {
        let data = RawMarkupData::SymbolLink {
            destination: destination.map(str::to_owned),
        };
        self.markup = self.markup.replacing_data(data);
    }
}

markup_node! {
    /// An inline element with custom semantics, not produced by the parser.
    CustomInline => visit_custom_inline
}

impl CustomInline {
    /// Creates a custom inline element with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        let data = RawMarkupData::CustomInline { text: text.into() };
        Self {
            markup: new_root(data, Vec::new()),
        }
    }

    /// The text of the element.
    pub fn text(&self) -> &str {
        payload!(self, CustomInline { text } => text.as_str())
    }

    /// Replaces the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.markup = self.markup.replacing_data(RawMarkupData::CustomInline { text: text.into() });
    }
}

markup_node! {
    /// Inlines annotated with an attribute string, `^[like this](attribute: value)`.
    InlineAttributes => visit_inline_attributes
}

impl InlineAttributes {
    /// Creates a node annotating `inlines` with `attributes`.
    pub fn new<I>(attributes: impl Into<String>, inlines: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Inline>,
    {
        let data = RawMarkupData::InlineAttributes {
            attributes: attributes.into(),
        };
        Self {
            markup: new_root(data, adopt(inlines.into_iter().map(Into::<Inline>::into))),
        }
    }

    /// The attribute string, verbatim.
    pub fn attributes(&self) -> &str {
        payload!(self, InlineAttributes { attributes } => attributes.as_str())
    }

    /// Replaces the attribute string.
    pub fn set_attributes(&mut self, attributes: impl Into<String>) {
        let data = RawMarkupData::InlineAttributes {
            attributes: attributes.into(),
        };
        self.markup = self.markup.replacing_data(data);
    }
}
