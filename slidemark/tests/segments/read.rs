//! Reading Slides segments into the IR and Markdown

use insta::assert_snapshot;
use slidemark::ir::nodes::Element;
use slidemark::native::{Bullet, TextContent, TextElement, TextStyle};
use slidemark::style::Color;
use slidemark::{to_ir, TextContainer};
use std::path::PathBuf;

fn load_fixture(name: &str) -> TextContent {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("segments")
        .join("fixtures")
        .join(name);
    let json =
        std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
    serde_json::from_str(&json).unwrap_or_else(|e| panic!("Failed to decode {path:?}: {e}"))
}

#[test]
fn test_bulleted_then_numbered_are_separate_lists() {
    let segments = vec![
        TextElement::paragraph_marker(0, Some(Bullet::new("list-a", 0, "●"))),
        TextElement::text_run(0, "Bullet item\n", TextStyle::default()),
        TextElement::paragraph_marker(12, Some(Bullet::new("list-b", 0, "1."))),
        TextElement::text_run(12, "Numbered item\n", TextStyle::default()),
    ];
    let doc = to_ir(&segments);

    let ordered: Vec<bool> = doc
        .elements
        .iter()
        .map(|element| match element {
            Element::List(list) => list.ordered,
            Element::Paragraph(p) => panic!("unexpected paragraph {p:?}"),
        })
        .collect();
    assert_eq!(ordered, vec![false, true]);
}

#[test]
fn test_api_response_to_markdown() {
    let text = load_fixture("text_box.json");
    assert!(text.has_text());
    assert_snapshot!(text.read_markdown(), @r"
    **Overview**
    - Revenue is up
      - see [report](https://example.com/q3)
    1. *Hire 2*
    Page 7
    ");
}

#[test]
fn test_api_response_structure() {
    let doc = load_fixture("text_box.json").to_ir();
    assert_eq!(doc.elements.len(), 4);

    let Element::List(list) = &doc.elements[1] else {
        panic!("expected the bulleted list second");
    };
    assert!(!list.ordered);
    assert_eq!(list.items.len(), 2);
    assert_eq!(list.items[1].nesting_level, 1);

    let revenue = &list.items[0].paragraphs[0].runs[0];
    assert_eq!(
        revenue.style.rich.foreground_color,
        Some(Color::from_rgb_float(0.8, 0.2, 0.0))
    );
}

#[test]
fn test_api_response_plain_text() {
    assert_eq!(
        load_fixture("text_box.json").plain_text(),
        "Overview\nRevenue is up\nsee report\nHire 2 \nPage 7\n"
    );
}

#[test]
fn test_api_response_styles() {
    let styles = load_fixture("text_box.json").styles(true);
    let sizes: Vec<Option<f64>> = styles.iter().map(|s| s.font_size_pt).collect();
    assert_eq!(sizes[0], Some(18.0));
    assert!(styles.iter().any(|s| s.underline));
}
