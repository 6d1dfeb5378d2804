//! Tree-shaped debug output.

use std::fmt::Write;

use crate::{
    markup::Markup,
    raw::{Checkbox, ColumnAlignment, RawMarkupData},
    visit::MarkupWalker,
};

/// What to annotate each line of a [`debug_description`](Markup::debug_description) with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DumpOptions {
    /// Print `@start..end` after nodes that have a source range.
    pub source_ranges: bool,
    /// Print `#id` after every node.
    pub identifiers:   bool,
}

impl DumpOptions {
    /// Annotate with both source ranges and identities.
    pub fn everything() -> Self {
        Self {
            source_ranges: true,
            identifiers:   true,
        }
    }
}

impl Markup {
    /// A tree-shaped dump of the subtree rooted at this node, one node per line.
    ///
    /// # Examples
    /// ```
    /// # use markup_tree::*;
    /// let document = Document::new([
    ///     Block::from(Paragraph::new([Inline::from(Text::new("a ")), Strong::new([Text::new("b")]).into()])),
    ///     ThematicBreak::new().into(),
    /// ]);
    /// assert_eq!(
    ///     document.debug_description(DumpOptions::default()),
    ///     "Document\n├─ Paragraph\n│  ├─ Text \"a \"\n│  └─ Strong\n│     └─ Text \"b\"\n└─ ThematicBreak"
    /// );
    /// ```
    pub fn debug_description(&self, options: DumpOptions) -> String {
        let mut dumper = TreeDumper {
            options,
            output: String::new(),
            last_child: Vec::new(),
        };
        dumper.visit(self);
        dumper.output
    }
}

struct TreeDumper {
    options:    DumpOptions,
    output:     String,
    // one entry per ancestor level below the dump root: whether the node at that level is its parent's last child
    last_child: Vec<bool>,
}

impl TreeDumper {
    fn indent(&self, levels: &[bool]) -> String {
        levels.iter().map(|&last| if last { "   " } else { "│  " }).collect()
    }

    fn line_prefix(&self) -> String {
        match self.last_child.split_last() {
            Some((&last, outer)) => {
                let mut prefix = self.indent(outer);
                prefix.push_str(if last { "└─ " } else { "├─ " });
                prefix
            }
            None => String::new(),
        }
    }
}

impl MarkupWalker for TreeDumper {
    fn default_visit(&mut self, markup: &Markup) {
        if !self.output.is_empty() {
            self.output.push('\n');
        }
        let prefix = self.line_prefix();
        self.output.push_str(&prefix);
        let (summary, body) = describe(markup.data());
        self.output.push_str(&summary);
        if self.options.source_ranges {
            if let Some(range) = markup.range() {
                let _ = write!(self.output, " @{:?}", range);
            }
        }
        if self.options.identifiers {
            let _ = write!(self.output, " #{}", markup.id());
        }
        if let Some(body) = body {
            let indent = self.indent(&self.last_child);
            for line in body.lines() {
                self.output.push('\n');
                self.output.push_str(&indent);
                self.output.push_str(line);
            }
        }

        let child_count = markup.child_count();
        for (index, child) in markup.children().enumerate() {
            self.last_child.push(index + 1 == child_count);
            self.visit(&child);
            self.last_child.pop();
        }
    }
}

fn describe(data: &RawMarkupData) -> (String, Option<&str>) {
    let kind = data.kind();
    let summary = match data {
        RawMarkupData::CodeBlock { language: Some(language), code } => {
            return (format!("{} language: {}", kind, language), Some(code.as_str()));
        }
        RawMarkupData::CodeBlock { language: None, code } => return (kind.to_string(), Some(code.as_str())),
        RawMarkupData::HtmlBlock { raw_html } => return (kind.to_string(), Some(raw_html.as_str())),
        RawMarkupData::Heading { level } => format!("{} level: {}", kind, level),
        RawMarkupData::ListItem { checkbox: Some(checkbox) } => {
            let mark = match checkbox {
                Checkbox::Checked => "[x]",
                Checkbox::Unchecked => "[ ]",
            };
            format!("{} checkbox: {}", kind, mark)
        }
        RawMarkupData::OrderedList { start_index } if *start_index != 1 => {
            format!("{} start: {}", kind, start_index)
        }
        RawMarkupData::BlockDirective { name, argument_text } if argument_text.is_empty() => {
            format!("{} name: {:?}", kind, name)
        }
        RawMarkupData::BlockDirective { name, argument_text } => {
            format!("{} name: {:?} argument: {:?}", kind, name, argument_text)
        }
        RawMarkupData::Table { column_alignments } => {
            let mut summary = format!("{} alignments: |", kind);
            for alignment in column_alignments {
                summary.push(match alignment {
                    None => '-',
                    Some(ColumnAlignment::Left) => 'l',
                    Some(ColumnAlignment::Center) => 'c',
                    Some(ColumnAlignment::Right) => 'r',
                });
                summary.push('|');
            }
            summary
        }
        RawMarkupData::TableCell { colspan, rowspan } if (*colspan, *rowspan) != (1, 1) => {
            format!("{} colspan: {} rowspan: {}", kind, colspan, rowspan)
        }
        RawMarkupData::DoxygenParameter { name } => format!("{} name: {}", kind, name),
        RawMarkupData::Text { string } => format!("{} {:?}", kind, string),
        RawMarkupData::Image { source, title } => {
            let mut summary = kind.to_string();
            if let Some(source) = source {
                let _ = write!(summary, " source: {:?}", source);
            }
            if let Some(title) = title {
                let _ = write!(summary, " title: {:?}", title);
            }
            summary
        }
        RawMarkupData::InlineCode { code } => format!("{} `{}`", kind, code),
        RawMarkupData::InlineHtml { raw_html } => format!("{} {}", kind, raw_html),
        RawMarkupData::Link { destination, title } => {
            let mut summary = kind.to_string();
            if let Some(destination) = destination {
                let _ = write!(summary, " destination: {:?}", destination);
            }
            if let Some(title) = title {
                let _ = write!(summary, " title: {:?}", title);
            }
            summary
        }
        RawMarkupData::SymbolLink { destination: Some(destination) } => {
            format!("{} destination: {}", kind, destination)
        }
        RawMarkupData::CustomInline { text } => format!("{} {:?}", kind, text),
        RawMarkupData::InlineAttributes { attributes } => format!("{} attributes: {:?}", kind, attributes),
        _ => kind.to_string(),
    };
    (summary, None)
}
