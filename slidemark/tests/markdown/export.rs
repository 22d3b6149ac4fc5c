//! Export tests for Markdown format (Slides text → Markdown)

use insta::assert_snapshot;
use slidemark::ir::nodes::{Document, Element, List, ListItem, Paragraph};
use slidemark::native::{Bullet, TextContent, TextElement, TextStyle};
use slidemark::style::{FullStyle, MarkdownStyle, Run};
use slidemark::{ir_to_markdown, ir_to_markdown_with, MarkdownOptions, Numbering, TextContainer};

fn bold() -> FullStyle {
    FullStyle {
        markdown: MarkdownStyle {
            bold: true,
            ..MarkdownStyle::default()
        },
        ..FullStyle::default()
    }
}

fn paragraph_doc(runs: Vec<Run>) -> Document {
    Document {
        elements: vec![Element::Paragraph(Paragraph::new(runs))],
    }
}

#[test]
fn test_adjacent_bold_runs_merge() {
    let doc = paragraph_doc(vec![Run::new("Hello ", bold()), Run::new("World", bold())]);
    assert_eq!(ir_to_markdown(&doc), "**Hello World**");
}

#[test]
fn test_placeholder_run_merges_into_bold_sentence() {
    let doc = paragraph_doc(vec![
        Run::new("Creating new profile tiers for ", bold()),
        Run::new("{customer_name}", bold()),
    ]);
    let md = ir_to_markdown(&doc);
    assert_eq!(md, "**Creating new profile tiers for {customer_name}**");
    assert!(!md.contains("****"));
}

#[test]
fn test_mixed_paragraph_and_lists() {
    let doc = Document {
        elements: vec![
            Element::Paragraph(Paragraph::new(vec![
                Run::plain("Intro with "),
                Run::new("emphasis", bold()),
            ])),
            Element::List(List {
                ordered: false,
                items: vec![
                    ListItem::new(0, vec![Paragraph::new(vec![Run::plain("one")])]),
                    ListItem::new(1, vec![Paragraph::new(vec![Run::plain("nested")])]),
                ],
            }),
            Element::List(List {
                ordered: true,
                items: vec![
                    ListItem::new(0, vec![Paragraph::new(vec![Run::plain("first")])]),
                    ListItem::new(0, vec![Paragraph::new(vec![Run::plain("second")])]),
                ],
            }),
        ],
    };
    assert_snapshot!(ir_to_markdown(&doc), @r"
    Intro with **emphasis**
    - one
      - nested
    1. first
    1. second
    ");
}

fn text_box() -> TextContent {
    let bold = TextStyle {
        bold: Some(true),
        ..TextStyle::default()
    };
    let code = TextStyle {
        font_family: Some("Courier New".to_string()),
        ..TextStyle::default()
    };
    TextContent {
        text_elements: vec![
            TextElement::paragraph_marker(0, None),
            TextElement::text_run(0, "Status ", TextStyle::default()),
            TextElement::text_run(7, "green", bold.clone()),
            TextElement::text_run(12, "\n", TextStyle::default()),
            TextElement::paragraph_marker(13, Some(Bullet::new("l1", 0, "a."))),
            TextElement::text_run(13, "run ", TextStyle::default()),
            TextElement::text_run(17, "make", code),
            TextElement::text_run(21, "\n", TextStyle::default()),
            TextElement::paragraph_marker(22, Some(Bullet::new("l1", 0, "b."))),
            TextElement::text_run(22, "ship it\n", bold),
        ],
    }
}

#[test]
fn test_container_reads_as_markdown() {
    assert_snapshot!(text_box().read_markdown(), @r"
    Status **green**
    1. run `make`
    1. **ship it**
    ");
}

#[test]
fn test_glyph_numbering_keeps_ordinals() {
    let options = MarkdownOptions {
        numbering: Numbering::Glyph,
    };
    let md = text_box().read_markdown_with(&options).unwrap();
    assert_snapshot!(md, @r"
    Status **green**
    1. run `make`
    2. **ship it**
    ");
}

#[test]
fn test_empty_document_is_empty_string() {
    assert_eq!(ir_to_markdown(&Document::default()), "");
    let options = MarkdownOptions::default();
    assert_eq!(ir_to_markdown_with(&Document::default(), &options).unwrap(), "");
}
