//! Building trees from CommonMark source text.
//!
//! The parsing itself is done by [`pulldown_cmark`]; this module maps its event stream onto a [`MarkupBuilder`].

use std::ops::Range;

use pulldown_cmark::{Alignment, CodeBlockKind, CowStr, Event, Options, Parser, Tag};
use tracing::debug;

use crate::{
    identity::IdAllocator,
    kinds::{Document, MarkupNode},
    markup::Markup,
    raw::{Checkbox, ColumnAlignment, MarkupBuilder, MarkupKind, RawMarkupData},
    SourceRange, TextSize,
};

/// The GitHub Flavored Markdown extensions to recognize while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseOptions {
    pub tables:        bool,
    pub strikethrough: bool,
    pub task_lists:    bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            tables:        true,
            strikethrough: true,
            task_lists:    true,
        }
    }
}

impl ParseOptions {
    /// Only the CommonMark core, without any extensions.
    pub fn commonmark() -> Self {
        Self {
            tables:        false,
            strikethrough: false,
            task_lists:    false,
        }
    }

    fn to_pulldown(self) -> Options {
        let mut options = Options::empty();
        options.set(Options::ENABLE_TABLES, self.tables);
        options.set(Options::ENABLE_STRIKETHROUGH, self.strikethrough);
        options.set(Options::ENABLE_TASKLISTS, self.task_lists);
        options
    }
}

impl Document {
    /// Parses `source` with all supported extensions enabled.
    ///
    /// ```
    /// # use markup_tree::*;
    /// let document = Document::parse("# Hello\n\n*world*\n");
    /// assert_eq!(document.child_count(), 2);
    /// assert_eq!(document.range(), Some(SourceRange::new(0.into(), 17.into())));
    /// ```
    pub fn parse(source: &str) -> Document {
        Self::parse_with_options(source, ParseOptions::default())
    }

    /// Parses `source`, recognizing the extensions enabled in `options`.
    pub fn parse_with_options(source: &str, options: ParseOptions) -> Document {
        Self::parse_in(source, options, IdAllocator::global())
    }

    /// Parses `source`, drawing the identities of the parsed nodes from `ids`.
    pub fn parse_in(source: &str, options: ParseOptions, ids: &IdAllocator) -> Document {
        let mut sink = EventSink::new(ids);
        sink.builder.start_node(RawMarkupData::Document, source_range(0..source.len()));
        for (event, range) in Parser::new_ext(source, options.to_pulldown()).into_offset_iter() {
            sink.event(event, range);
        }
        sink.flush_text();
        sink.close_implicit_paragraph();
        sink.builder.finish_node();
        let root = sink.builder.finish();
        debug!(nodes = root.subtree_count(), bytes = source.len(), "parsed document");
        Document::from_markup(Markup::new_root(root))
    }
}

fn source_range(range: Range<usize>) -> Option<SourceRange> {
    let start = TextSize::try_from(range.start).ok()?;
    let end = TextSize::try_from(range.end).ok()?;
    Some(SourceRange::new(start, end))
}

/// What a start event turned into, to be undone by the matching end event.
enum Frame {
    /// A node of the builder was started.
    Node,
    /// A table was started; its body is opened lazily with the first row.
    Table { body_open: bool },
    /// A code or HTML block whose content is collected into a leaf.
    Literal,
    /// Ignored or unsupported element whose content (if any) is passed through to the parent.
    Transparent,
}

struct Literal {
    data:  RawMarkupData,
    text:  String,
    range: Range<usize>,
}

struct EventSink<'ids> {
    builder:            MarkupBuilder<'ids>,
    frames:             Vec<Frame>,
    // adjacent text events are merged into a single text node
    pending_text:       Option<(String, Range<usize>)>,
    literal:            Option<Literal>,
    // builder depth of the paragraph opened for the inline content of a tight list item
    implicit_paragraph: Option<usize>,
}

impl<'ids> EventSink<'ids> {
    fn new(ids: &'ids IdAllocator) -> Self {
        Self {
            builder:            MarkupBuilder::with_allocator(ids),
            frames:             Vec::new(),
            pending_text:       None,
            literal:            None,
            implicit_paragraph: None,
        }
    }

    fn event(&mut self, event: Event<'_>, range: Range<usize>) {
        if let Some(literal) = &mut self.literal {
            match event {
                Event::Text(text) | Event::Html(text) => {
                    literal.text.push_str(&text);
                    return;
                }
                Event::End(_) => {}
                _ => return,
            }
        }

        match event {
            Event::Start(tag) => self.start(tag, range),
            Event::End(_) => self.end(),
            Event::Text(text) => self.text(text, range),
            Event::Code(code) => self.inline_leaf(RawMarkupData::InlineCode { code: code.into_string() }, range),
            Event::Html(html) | Event::InlineHtml(html) => {
                self.inline_leaf(RawMarkupData::InlineHtml { raw_html: html.into_string() }, range)
            }
            Event::SoftBreak => self.inline_leaf(RawMarkupData::SoftBreak, range),
            Event::HardBreak => self.inline_leaf(RawMarkupData::LineBreak, range),
            Event::Rule => {
                self.before_block();
                self.builder.leaf(RawMarkupData::ThematicBreak, source_range(range));
            }
            Event::TaskListMarker(checked) => {
                let checkbox = if checked { Checkbox::Checked } else { Checkbox::Unchecked };
                if let Some(data) = self.builder.open_node_data_mut(MarkupKind::ListItem) {
                    *data = RawMarkupData::ListItem { checkbox: Some(checkbox) };
                }
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>, range: Range<usize>) {
        let data = match tag {
            Tag::Paragraph => RawMarkupData::Paragraph,
            Tag::Heading { level, .. } => RawMarkupData::Heading { level: level as u32 },
            Tag::BlockQuote(_) => RawMarkupData::BlockQuote,
            Tag::CodeBlock(kind) => {
                let language = match kind {
                    CodeBlockKind::Fenced(info) => Some(info.trim().to_owned()).filter(|info| !info.is_empty()),
                    CodeBlockKind::Indented => None,
                };
                self.start_literal(RawMarkupData::CodeBlock { language, code: String::new() }, range);
                return;
            }
            Tag::HtmlBlock => {
                self.start_literal(RawMarkupData::HtmlBlock { raw_html: String::new() }, range);
                return;
            }
            Tag::List(Some(start)) => {
                let start_index = u32::try_from(start).unwrap_or(u32::MAX).max(1);
                RawMarkupData::OrderedList { start_index }
            }
            Tag::List(None) => RawMarkupData::UnorderedList,
            Tag::Item => RawMarkupData::ListItem { checkbox: None },
            Tag::Table(alignments) => {
                let column_alignments = alignments.into_iter().map(column_alignment).collect();
                self.before_block();
                self.builder.start_node(RawMarkupData::Table { column_alignments }, source_range(range));
                self.frames.push(Frame::Table { body_open: false });
                return;
            }
            Tag::TableHead => RawMarkupData::TableHead,
            Tag::TableRow => {
                if let Some(Frame::Table { body_open }) = self.frames.last_mut() {
                    if !*body_open {
                        *body_open = true;
                        self.builder.start_node(RawMarkupData::TableBody, None);
                    }
                }
                RawMarkupData::TableRow
            }
            Tag::TableCell => RawMarkupData::TableCell { colspan: 1, rowspan: 1 },
            Tag::Emphasis => RawMarkupData::Emphasis,
            Tag::Strong => RawMarkupData::Strong,
            Tag::Strikethrough => RawMarkupData::Strikethrough,
            Tag::Link { dest_url, title, .. } => RawMarkupData::Link {
                destination: non_empty(dest_url),
                title:       non_empty(title),
            },
            Tag::Image { dest_url, title, .. } => RawMarkupData::Image {
                source: non_empty(dest_url),
                title:  non_empty(title),
            },
            _ => {
                self.flush_text();
                self.frames.push(Frame::Transparent);
                return;
            }
        };

        if data.kind().is_inline() {
            self.before_inline();
        } else if data.kind().is_block() {
            self.before_block();
        } else {
            self.flush_text();
        }
        self.builder.start_node(data, source_range(range));
        self.frames.push(Frame::Node);
    }

    fn end(&mut self) {
        self.flush_text();
        match self.frames.pop() {
            Some(Frame::Node) => {
                self.close_implicit_paragraph();
                self.builder.finish_node();
            }
            Some(Frame::Table { body_open }) => {
                if !body_open {
                    self.builder.start_node(RawMarkupData::TableBody, None);
                }
                // body, then table
                self.builder.finish_node();
                self.builder.finish_node();
            }
            Some(Frame::Literal) => {
                if let Some(Literal { data, text, range }) = self.literal.take() {
                    let data = match data {
                        RawMarkupData::CodeBlock { language, .. } => RawMarkupData::CodeBlock { language, code: text },
                        _ => RawMarkupData::HtmlBlock { raw_html: text },
                    };
                    self.builder.leaf(data, source_range(range));
                }
            }
            Some(Frame::Transparent) | None => {}
        }
    }

    fn start_literal(&mut self, data: RawMarkupData, range: Range<usize>) {
        self.before_block();
        self.literal = Some(Literal {
            data,
            text: String::new(),
            range,
        });
        self.frames.push(Frame::Literal);
    }

    fn text(&mut self, text: CowStr<'_>, range: Range<usize>) {
        if let Some((pending, pending_range)) = &mut self.pending_text {
            if pending_range.end == range.start {
                pending.push_str(&text);
                pending_range.end = range.end;
                return;
            }
        }
        self.before_inline();
        self.pending_text = Some((text.into_string(), range));
    }

    fn inline_leaf(&mut self, data: RawMarkupData, range: Range<usize>) {
        self.before_inline();
        self.builder.leaf(data, source_range(range));
    }

    fn flush_text(&mut self) {
        if let Some((string, range)) = self.pending_text.take() {
            self.builder.leaf(RawMarkupData::Text { string }, source_range(range));
        }
    }

    fn before_inline(&mut self) {
        self.flush_text();
        if self.builder.current_kind() == Some(MarkupKind::ListItem) {
            self.builder.start_node(RawMarkupData::Paragraph, None);
            self.implicit_paragraph = Some(self.builder.depth());
        }
    }

    fn before_block(&mut self) {
        self.flush_text();
        self.close_implicit_paragraph();
    }

    fn close_implicit_paragraph(&mut self) {
        if self.implicit_paragraph.is_some() && self.implicit_paragraph == Some(self.builder.depth()) {
            self.implicit_paragraph = None;
            self.builder.finish_node();
        }
    }
}

fn column_alignment(alignment: Alignment) -> Option<ColumnAlignment> {
    match alignment {
        Alignment::None => None,
        Alignment::Left => Some(ColumnAlignment::Left),
        Alignment::Center => Some(ColumnAlignment::Center),
        Alignment::Right => Some(ColumnAlignment::Right),
    }
}

fn non_empty(text: CowStr<'_>) -> Option<String> {
    Some(text.into_string()).filter(|text| !text.is_empty())
}
