use serde_json::json;

use super::*;

fn sample() -> Document {
    Document::new([
        Block::from(Heading::new(2, [Inline::from(Text::new("Title")), Strong::new([Text::new("!")]).into()])),
        Table::new(
            vec![Some(ColumnAlignment::Center)],
            TableHead::new([TableCell::new([Text::new("h")])]),
            TableBody::new([TableRow::new([TableCell::new([InlineCode::new("x")])])]),
        )
        .into(),
        UnorderedList::new([ListItem::new(Some(Checkbox::Unchecked), [Paragraph::new([Text::new("todo")])])]).into(),
    ])
}

#[test]
fn round_trip() {
    let document = sample();
    let json = serde_json::to_string(document.as_markup()).unwrap();
    let restored: Markup = serde_json::from_str(&json).unwrap();

    assert!(restored.has_same_structure(document.as_markup()));
    assert!(!restored.is_identical(document.as_markup()));
    assert_unique_identities(&restored);
    assert_eq!(
        restored.debug_description(DumpOptions::default()),
        document.debug_description(DumpOptions::default())
    );
}

#[test]
fn format() {
    let paragraph = Paragraph::new([Text::new("a")]);
    let value = serde_json::to_value(paragraph.as_markup()).unwrap();
    assert_eq!(
        value,
        json!({
            "data": { "kind": "Paragraph" },
            "range": null,
            "children": [{
                "data": { "kind": "Text", "string": "a" },
                "range": null,
                "children": [],
            }],
        })
    );
}

#[test]
fn missing_fields_default() {
    let markup: Markup = serde_json::from_value(json!({
        "data": { "kind": "Document" },
        "children": [{ "data": { "kind": "ThematicBreak" } }],
    }))
    .unwrap();
    assert_eq!(markup.child_count(), 1);
    assert_eq!(markup.range(), None);
}

#[test]
fn invalid_payload() {
    let result = serde_json::from_value::<Markup>(json!({
        "data": { "kind": "Heading", "level": 0 },
    }));
    let message = result.unwrap_err().to_string();
    assert!(message.contains("invalid Heading node"), "{}", message);
}

#[test]
fn invalid_containment() {
    let result = serde_json::from_value::<Markup>(json!({
        "data": { "kind": "Paragraph" },
        "children": [{ "data": { "kind": "Paragraph" } }],
    }));
    let message = result.unwrap_err().to_string();
    assert!(message.contains("invalid Paragraph node"), "{}", message);
}
