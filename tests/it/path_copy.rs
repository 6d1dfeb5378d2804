use super::*;

#[test]
fn editing_a_leaf_rebuilds_the_spine() {
    let document = two_paragraphs();
    let original_ids = identities(document.as_markup());

    let mut text = text_at(&document, &[0, 0]);
    let old_text_id = text.id();
    text.set_string("Z");
    let edited = Document::from_markup(text.root());

    // new identities along the path to the root
    assert_ne!(edited.id(), document.id());
    let first = edited.as_markup().child(0).unwrap();
    assert_ne!(first.id(), document.as_markup().child(0).unwrap().id());
    assert_ne!(text.id(), old_text_id);
    assert_eq!(text_at(&edited, &[0, 0]).string(), "Z");

    // the untouched sibling is shared
    let old_second = document.as_markup().child(1).unwrap();
    let new_second = edited.as_markup().child(1).unwrap();
    assert!(new_second.is_identical(&old_second));
    assert!(new_second.raw().ptr_eq(old_second.raw()));

    // and the original version is unchanged
    assert_eq!(identities(document.as_markup()), original_ids);
    assert_eq!(text_at(&document, &[0, 0]).string(), "A");
}

#[test]
fn deep_edits_share_siblings_at_every_level() {
    let document = Document::new([BlockQuote::new([
        Block::from(Paragraph::new([Text::new("before")])),
        BlockQuote::new([
            Block::from(Paragraph::new([
                Inline::from(Text::new("x ")),
                Emphasis::new([Text::new("deep")]).into(),
            ])),
            ThematicBreak::new().into(),
        ])
        .into(),
    ])]);

    let path = [0, 1, 0, 1, 0];
    let mut text = text_at(&document, &path);
    text.set_string("changed");
    let edited = text.root();

    let old_chain: Vec<_> = text_at(&document, &path).as_markup().ancestors().collect();
    let new_chain: Vec<_> = text.as_markup().ancestors().collect();
    assert_eq!(old_chain.len(), new_chain.len());
    for (old, new) in old_chain.iter().zip(&new_chain) {
        assert_eq!(old.kind(), new.kind());
        assert!(!old.is_identical(new));
    }

    let shared = [&[0, 0][..], &[0, 1, 1], &[0, 1, 0, 0]];
    for path in shared {
        let old = document.as_markup().child_through(path.iter().copied()).unwrap();
        let new = edited.child_through(path.iter().copied()).unwrap();
        assert!(old.raw().ptr_eq(new.raw()), "{:?} was copied", path);
    }
    assert_unique_identities(&edited);
}

#[test]
fn payload_edits_change_identity() {
    let document = Document::new([
        Block::from(Heading::new(1, [Text::new("t")])),
        CodeBlock::new(Some("rust"), "fn main() {}").into(),
        OrderedList::new([ListItem::new(None, [Paragraph::new([Link::new(Some("a"), [Text::new("b")])])])]).into(),
    ]);

    let mut heading = Heading::from_markup(document.as_markup().child(0).unwrap());
    let before = heading.id();
    heading.set_level(2);
    assert_ne!(heading.id(), before);
    assert_eq!(heading.level(), 2);

    let mut code = CodeBlock::from_markup(document.as_markup().child(1).unwrap());
    let before = code.id();
    code.set_language(None);
    assert_ne!(code.id(), before);
    assert_eq!(code.language(), None);
    assert_eq!(code.code(), "fn main() {}");

    let mut link = document
        .as_markup()
        .child_through([2, 0, 0, 0])
        .map(Link::from_markup)
        .unwrap();
    let before = link.id();
    link.set_destination(Some("https://example.com"));
    assert_ne!(link.id(), before);
    assert_eq!(link.child_count(), 1);
    let list = OrderedList::from_markup(link.root().child(2).unwrap());
    assert_eq!(list.start_index(), 1);
}

#[test]
fn substituting_descendants() {
    let document = two_paragraphs();
    let replacement = Text::new("C").into_markup().into_raw();
    let replacement_id = replacement.id();
    let edited = document.as_markup().substituting_child(replacement, [1, 0], false).unwrap();

    assert!(edited.is_root());
    assert_eq!(text_at(&Document::from_markup(edited.clone()), &[1, 0]).string(), "C");
    assert_eq!(edited.child_through([1, 0]).unwrap().id(), replacement_id);

    let err = document
        .as_markup()
        .substituting_child(Text::new("C").into_markup().into_raw(), [2], false)
        .unwrap_err();
    assert_eq!(err, PathError::IndexOutOfBounds {
        parent:      MarkupKind::Document,
        index:       2,
        child_count: 2,
    });

    let err = document
        .as_markup()
        .substituting_child(Text::new("C").into_markup().into_raw(), [(0, MarkupKind::Heading)], false)
        .unwrap_err();
    assert!(matches!(err, PathError::UnexpectedKind {
        index: 0,
        expected: MarkupKind::Heading,
        found: MarkupKind::Paragraph,
    }));
}

#[test]
fn substituting_a_held_node_copies_it() {
    let document = two_paragraphs();
    let replacement = Text::new("C").into_markup().into_raw();
    let edited = document
        .as_markup()
        .substituting_child(replacement.clone(), [1, 0], false)
        .unwrap();

    let placed = edited.child_through([1, 0]).unwrap();
    assert_ne!(placed.id(), replacement.id());
    assert_eq!(placed.data(), replacement.data());

    // placing the same value twice still yields distinct nodes
    let twice = edited.substituting_child(replacement.clone(), [0, 0], false).unwrap();
    assert_unique_identities(&twice);
}

#[test]
fn repeated_children_get_distinct_identities() {
    let paragraph = Paragraph::new([Emphasis::new([Text::new("x")])]);
    let document = Document::new([paragraph.clone(), paragraph.clone()]);

    assert_unique_identities(document.as_markup());
    let first = document.as_markup().child_through([0, 0, 0]).unwrap();
    let second = document.as_markup().child_through([1, 0, 0]).unwrap();
    assert!(first.has_same_structure(&second));
    assert!(!first.is_identical(&second));
    assert_eq!(paragraph.as_markup().child_count(), 1);
}

#[test]
fn replacing_with_a_subtree_of_the_same_tree() {
    let document = Document::new([
        Block::from(Paragraph::new([Inline::from(Text::new("A")), Strong::new([Text::new("bold")]).into()])),
        Paragraph::new([Text::new("B")]).into(),
    ]);
    let source = document.as_markup().child(0).unwrap();
    let target = document.as_markup().child(1).unwrap();

    let edited = target.replace_self(source.raw().clone()).root();
    assert_unique_identities(&edited);
    let copy = edited.child(1).unwrap();
    assert!(copy.has_same_structure(&source));
    assert!(!copy.child_through([1, 0]).unwrap().is_identical(&source.child_through([1, 0]).unwrap()));
    assert!(edited.child(0).unwrap().raw().ptr_eq(source.raw()));
}

#[test]
fn moving_a_node_within_a_tree() {
    let document = two_paragraphs();
    let mut first = Paragraph::from_markup(document.as_markup().child(0).unwrap());
    let second = Paragraph::from_markup(document.as_markup().child(1).unwrap());

    // the second paragraph's text, placed again under the first paragraph
    first.append_child(text_at(&second, &[0]));
    let edited = first.root();

    assert_eq!(edited.child(0).unwrap().child_count(), 2);
    assert_unique_identities(&edited);
    let moved = edited.child_through([0, 1]).unwrap();
    let original = edited.child_through([1, 0]).unwrap();
    assert!(moved.has_same_structure(&original));
    assert!(!moved.is_identical(&original));
}

#[test]
fn moving_a_subtree_within_a_tree() {
    let document = Document::new([
        Block::from(BlockQuote::new([Paragraph::new([Emphasis::new([Text::new("moved")])])])),
        BlockQuote::new(None::<Block>).into(),
    ]);
    let paragraph = document.as_markup().child_through([0, 0]).map(Paragraph::from_markup).unwrap();
    let mut target = document.as_markup().child(1).map(BlockQuote::from_markup).unwrap();

    target.append_child(paragraph.clone());
    let edited = target.root();

    assert_unique_identities(&edited);
    let moved = edited.child_through([1, 0]).unwrap();
    assert!(moved.has_same_structure(paragraph.as_markup()));
    let original = paragraph.as_markup().child_through([0, 0]).unwrap();
    assert!(!moved.child_through([0, 0]).unwrap().is_identical(&original));
}

#[test]
#[should_panic(expected = "cannot contain")]
fn replacing_with_a_misplaced_kind() {
    let document = two_paragraphs();
    let text = document.as_markup().child_through([0, 0]).unwrap();
    text.replace_self(ThematicBreak::new().into_markup().into_raw());
}
