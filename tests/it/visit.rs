use super::*;

struct Unbold;

impl MarkupRewriter for Unbold {
    fn visit_strong(&mut self, _: &Strong) -> Option<Markup> {
        None
    }
}

#[derive(Default)]
struct Texts(Vec<String>);

impl MarkupWalker for Texts {
    fn visit_text(&mut self, text: &Text) {
        self.0.push(text.string().to_string());
    }
}

#[test]
fn overriding_a_kind_stops_descent() {
    #[derive(Default)]
    struct SkipLinks(Texts);

    impl MarkupWalker for SkipLinks {
        fn visit_text(&mut self, text: &Text) {
            self.0.visit_text(text);
        }

        fn visit_link(&mut self, _: &Link) {}
    }

    let paragraph = Paragraph::new([
        Inline::from(Text::new("see ")),
        Link::new(Some("https://example.com"), [Text::new("here")]).into(),
        Text::new(".").into(),
    ]);

    let mut skipping = SkipLinks::default();
    skipping.visit(paragraph.as_markup());
    assert_eq!(skipping.0 .0, vec!["see ", "."]);

    let mut all = Texts::default();
    all.visit(paragraph.as_markup());
    assert_eq!(all.0, vec!["see ", "here", "."]);
}

#[test]
fn overrides_can_descend_explicitly() {
    #[derive(Default)]
    struct EmphasizedTexts {
        depth: usize,
        found: Vec<String>,
    }

    impl MarkupWalker for EmphasizedTexts {
        fn visit_emphasis(&mut self, emphasis: &Emphasis) {
            self.depth += 1;
            self.descend_into(emphasis.as_markup());
            self.depth -= 1;
        }

        fn visit_text(&mut self, text: &Text) {
            if self.depth > 0 {
                self.found.push(text.string().to_string());
            }
        }
    }

    let document = Document::new([
        Paragraph::new([Inline::from(Text::new("plain")), Emphasis::new([Text::new("loud")]).into()]),
        Paragraph::new([Emphasis::new([Inline::from(Strong::new([Text::new("louder")]))])]),
    ]);
    let mut walker = EmphasizedTexts::default();
    walker.visit(document.as_markup());
    assert_eq!(walker.found, vec!["loud", "louder"]);
}

#[test]
fn deleting_a_kind() {
    let paragraph = Paragraph::new([
        Inline::from(Text::new("a ")),
        Strong::new([Text::new("b")]).into(),
        Text::new(" c").into(),
    ]);
    let rewritten = Unbold.visit(paragraph.as_markup()).map(Paragraph::from_markup).unwrap();

    let expected = Paragraph::new([Text::new("a "), Text::new(" c")]);
    assert!(rewritten.has_same_structure(&expected));
    assert!(!rewritten.is_identical(&paragraph));
    // survivors are shared with the input
    let first = paragraph.as_markup().child(0).unwrap();
    assert!(rewritten.as_markup().child(0).unwrap().raw().ptr_eq(first.raw()));
}

#[test]
fn deleting_nested_occurrences() {
    let document = Document::new([
        Block::from(Paragraph::new([
            Inline::from(Strong::new([Inline::from(Emphasis::new([Strong::new([Text::new("x")])]))])),
            Emphasis::new([Inline::from(Text::new("y")), Strong::new([Text::new("z")]).into()]).into(),
        ])),
        BlockQuote::new([Paragraph::new([Strong::new([Text::new("w")])])]).into(),
    ]);
    assert_eq!(count_kind(document.as_markup(), MarkupKind::Strong), 4);

    let rewritten = Unbold.visit(document.as_markup()).unwrap();
    assert_eq!(count_kind(&rewritten, MarkupKind::Strong), 0);
    assert_eq!(count_kind(&rewritten, MarkupKind::Emphasis), 1);
    assert_eq!(rewritten.child_through([1, 0]).unwrap().child_count(), 0);
    assert_eq!(count_kind(document.as_markup(), MarkupKind::Strong), 4);
}

#[test]
fn identity_rewrite() {
    struct Nothing;
    impl MarkupRewriter for Nothing {}

    let document = Document::new([
        Block::from(Heading::new(2, [Text::new("h")])),
        UnorderedList::new([ListItem::new(Some(Checkbox::Checked), [Paragraph::new([Text::new("done")])])]).into(),
    ]);
    let rewritten = Nothing.visit(document.as_markup()).unwrap();
    assert!(rewritten.has_same_structure(document.as_markup()));
    assert!(rewritten.raw().ptr_eq(document.as_markup().raw()));
}

#[test]
fn substituting_nodes() {
    struct Shout;

    impl MarkupRewriter for Shout {
        fn visit_text(&mut self, text: &Text) -> Option<Markup> {
            Some(Text::new(text.string().to_uppercase()).into_markup())
        }

        fn visit_inline_code(&mut self, code: &InlineCode) -> Option<Markup> {
            Some(Text::new(code.code()).into_markup())
        }
    }

    let document = Document::new([
        Block::from(Paragraph::new([Inline::from(Text::new("run ")), InlineCode::new("ls").into()])),
        ThematicBreak::new().into(),
    ]);
    let rewritten = Shout.visit(document.as_markup()).map(Document::from_markup).unwrap();

    let mut texts = Texts::default();
    texts.visit(rewritten.as_markup());
    assert_eq!(texts.0, vec!["RUN ", "ls"]);

    let old_break = document.as_markup().child(1).unwrap();
    assert!(rewritten.as_markup().child(1).unwrap().is_identical(&old_break));
    assert_unique_identities(rewritten.as_markup());
}

#[test]
fn tables_are_visited_head_first() {
    let cell = |text: &str| TableCell::new([Text::new(text)]);
    let table = Table::new(
        vec![None, Some(ColumnAlignment::Right)],
        TableHead::new([cell("h1"), cell("h2")]),
        TableBody::new([TableRow::new([cell("a1"), cell("a2")]), TableRow::new([cell("b1"), cell("b2")])]),
    );

    let mut texts = Texts::default();
    texts.visit(table.as_markup());
    assert_eq!(texts.0, vec!["h1", "h2", "a1", "a2", "b1", "b2"]);
}

#[test]
fn visitors_compute_results() {
    struct Depth;

    impl MarkupVisitor for Depth {
        type Result = usize;

        fn default_visit(&mut self, markup: &Markup) -> usize {
            1 + markup.children().map(|child| self.visit(&child)).max().unwrap_or(0)
        }
    }

    let document = Document::new([
        Block::from(Paragraph::new([Text::new("shallow")])),
        BlockQuote::new([Paragraph::new([Emphasis::new([Text::new("deep")])])]).into(),
    ]);
    assert_eq!(Depth.visit(document.as_markup()), 5);
    assert_eq!(document.accept(&mut Depth), 5);
}

#[test]
fn substituting_one_value_everywhere() {
    struct Redact(Markup);

    impl MarkupRewriter for Redact {
        fn visit_text(&mut self, _: &Text) -> Option<Markup> {
            Some(self.0.clone())
        }
    }

    let document = Document::new([
        Block::from(Paragraph::new([Inline::from(Text::new("a")), Emphasis::new([Text::new("b")]).into()])),
        Paragraph::new([Text::new("c")]).into(),
    ]);
    let replacement = Emphasis::new([Text::new("***")]).into_markup();
    let rewritten = Redact(replacement.clone()).visit(document.as_markup()).unwrap();

    assert_eq!(count_kind(&rewritten, MarkupKind::Emphasis), 4);
    assert_unique_identities(&rewritten);
    let first = rewritten.child_through([0, 0]).unwrap();
    let last = rewritten.child_through([1, 0]).unwrap();
    assert!(first.has_same_structure(&last));
    assert!(!first.is_identical(&last));
    assert!(!first.is_identical(&replacement));
}
