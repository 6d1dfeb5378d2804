use pretty_assertions::assert_eq;

use super::*;

const README: &str = "# Title\n\nSome *emphasis* and ~~struck~~ text.\n\n- [x] first\n- second\n\n> quoted\n";

#[test]
fn document_structure() {
    let document = Document::parse(README);
    assert_eq!(
        document.debug_description(DumpOptions::default()),
        r#"Document
├─ Heading level: 1
│  └─ Text "Title"
├─ Paragraph
│  ├─ Text "Some "
│  ├─ Emphasis
│  │  └─ Text "emphasis"
│  ├─ Text " and "
│  ├─ Strikethrough
│  │  └─ Text "struck"
│  └─ Text " text."
├─ UnorderedList
│  ├─ ListItem checkbox: [x]
│  │  └─ Paragraph
│  │     └─ Text "first"
│  └─ ListItem
│     └─ Paragraph
│        └─ Text "second"
└─ BlockQuote
   └─ Paragraph
      └─ Text "quoted""#
    );
    assert_unique_identities(document.as_markup());
}

#[test]
fn commonmark_only() {
    let document = Document::parse_with_options("~~a~~\n\n| x |\n|---|\n", ParseOptions::commonmark());
    assert_eq!(count_kind(document.as_markup(), MarkupKind::Strikethrough), 0);
    assert_eq!(count_kind(document.as_markup(), MarkupKind::Table), 0);
    assert!(document.blocks().all(|block| block.kind() == MarkupKind::Paragraph));
}

#[test]
fn editing_a_parsed_document() {
    let document = Document::parse(README);
    let mut title = text_at(&document, &[0, 0]);
    let heading_range = document.as_markup().child(0).unwrap().range();
    title.set_string("Renamed");
    let edited = Document::from_markup(title.root());

    // the edited node is no longer backed by source text, its ancestors still are
    assert_eq!(title.range(), None);
    assert_eq!(edited.as_markup().child(0).unwrap().range(), heading_range);
    assert_eq!(edited.range(), document.range());

    for index in 1..document.child_count() {
        let old = document.as_markup().child(index).unwrap();
        let new = edited.as_markup().child(index).unwrap();
        assert!(new.raw().ptr_eq(old.raw()));
        assert_eq!(new.range(), old.range());
    }
}

#[test]
fn rewriting_a_parsed_document() {
    struct Plain;

    impl MarkupRewriter for Plain {
        fn visit_emphasis(&mut self, _: &Emphasis) -> Option<Markup> {
            None
        }

        fn visit_strikethrough(&mut self, _: &Strikethrough) -> Option<Markup> {
            None
        }
    }

    let document = Document::parse(README);
    let rewritten = Plain.visit(document.as_markup()).map(Document::from_markup).unwrap();
    let paragraph = Paragraph::from_markup(rewritten.as_markup().child(1).unwrap());
    let text: String = paragraph.inlines().map(|inline| inline.plain_text()).collect();
    assert_eq!(text, "Some  and  text.");
    assert!(rewritten.as_markup().child(0).unwrap().is_identical(&document.as_markup().child(0).unwrap()));
}
