use pretty_assertions::assert_eq;

use super::*;

#[test]
fn two_paragraphs_with_identities() {
    let document = two_paragraphs();
    let ids = identities(document.as_markup());
    let expected = format!(
        "Document #{}\n├─ Paragraph #{}\n│  └─ Text \"A\" #{}\n└─ Paragraph #{}\n   └─ Text \"B\" #{}",
        ids[0], ids[1], ids[2], ids[3], ids[4]
    );
    assert_eq!(document.debug_description(DumpOptions::everything()), expected);
}

#[test]
fn lists_and_inlines() {
    let document = Document::new([
        Block::from(Heading::new(1, [Inline::from(Text::new("Notes ")), InlineCode::new("v2").into()])),
        OrderedList::starting_at(3, [
            ListItem::new(Some(Checkbox::Checked), [Paragraph::new([Text::new("done")])]),
            ListItem::new(Some(Checkbox::Unchecked), [Paragraph::new([
                Inline::from(Link::new(Some("https://example.com"), [Text::new("todo")])),
                SoftBreak::new().into(),
                Image::new(Some("cat.png"), Some("a cat"), [Text::new("cat")]).into(),
            ])]),
        ])
        .into(),
        BlockDirective::new("Comment", "", [Paragraph::new([Text::new("hidden")])]).into(),
    ]);

    assert_eq!(
        document.debug_description(DumpOptions::default()),
        r#"Document
├─ Heading level: 1
│  ├─ Text "Notes "
│  └─ InlineCode `v2`
├─ OrderedList start: 3
│  ├─ ListItem checkbox: [x]
│  │  └─ Paragraph
│  │     └─ Text "done"
│  └─ ListItem checkbox: [ ]
│     └─ Paragraph
│        ├─ Link destination: "https://example.com"
│        │  └─ Text "todo"
│        ├─ SoftBreak
│        └─ Image source: "cat.png" title: "a cat"
│           └─ Text "cat"
└─ BlockDirective name: "Comment"
   └─ Paragraph
      └─ Text "hidden""#
    );
}

#[test]
fn tables() {
    let cell = |text: &str| TableCell::new([Text::new(text)]);
    let table = Table::new(
        vec![Some(ColumnAlignment::Left), None],
        TableHead::new([TableCell::spanning(2, 1, [Text::new("both")]), TableCell::spanning(0, 1, None::<Text>)]),
        TableBody::new([TableRow::new([cell("a"), cell("b")])]),
    );

    assert_eq!(
        table.debug_description(DumpOptions::default()),
        r#"Table alignments: |l|-|
├─ TableHead
│  ├─ TableCell colspan: 2 rowspan: 1
│  │  └─ Text "both"
│  └─ TableCell colspan: 0 rowspan: 1
└─ TableBody
   └─ TableRow
      ├─ TableCell
      │  └─ Text "a"
      └─ TableCell
         └─ Text "b""#
    );
}

#[test]
fn dumping_a_subtree() {
    let document = Document::new([BlockQuote::new([CodeBlock::new(None, "let x = 1;\nlet y = 2;")])]);
    let quote = document.as_markup().child(0).unwrap();
    assert_eq!(quote.debug_description(DumpOptions::default()), "BlockQuote\n└─ CodeBlock\n   let x = 1;\n   let y = 2;");
}
