//! Import tests for Markdown format (Markdown → Slides operations)
//!
//! These tests verify the operations produced for a Markdown source: the
//! inserted text, the styles on each insert, and the bullet requests.

use slidemark::native::{BulletGlyphPreset, TextStyle};
use slidemark::ops::inserted_text;
use slidemark::{
    markdown_to_operations, operations_to_requests, BulletRange, Operation, StyledInsert,
    WriteOptions,
};

const REPORT: &str = "This is ***very*** *important* report\n* It illustrates **bullet points**\n* And even `code` blocks\n";

fn md_to_ops(md: &str) -> Vec<Operation> {
    markdown_to_operations(md, &WriteOptions::default()).expect("Should parse markdown")
}

fn find<'a>(ops: &'a [Operation], content: &str) -> &'a StyledInsert {
    ops.iter()
        .filter_map(Operation::as_insert)
        .find(|insert| insert.content == content)
        .unwrap_or_else(|| panic!("no insert with content {content:?}"))
}

fn bullets(ops: &[Operation]) -> Vec<&BulletRange> {
    ops.iter().filter_map(Operation::as_bullets).collect()
}

#[test]
fn test_report_with_bullet_list() {
    let ops = md_to_ops(REPORT);

    assert_eq!(
        inserted_text(&ops),
        "This is very important report\n\tIt illustrates bullet points\n\tAnd even code blocks\n"
    );

    let groups = bullets(&ops);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].start_index, 30);
    assert_eq!(groups[0].end_index, 82);
    assert_eq!(groups[0].preset, BulletGlyphPreset::BulletDiscCircleSquare);
}

#[test]
fn test_report_styles() {
    let ops = md_to_ops(REPORT);

    let very = find(&ops, "very");
    assert_eq!(very.style.bold, Some(true));
    assert_eq!(very.style.italic, Some(true));

    let important = find(&ops, "important");
    assert_eq!(important.style.italic, Some(true));
    assert_eq!(important.style.bold, None);

    assert_eq!(find(&ops, "bullet points").style.bold, Some(true));
    assert_eq!(
        find(&ops, "code").style.font_family.as_deref(),
        Some("Courier New")
    );
    assert_eq!(find(&ops, " report").style, TextStyle::default());
}

#[test]
fn test_inserts_are_contiguous() {
    let ops = md_to_ops(REPORT);
    let mut expected_start = 0;
    for insert in ops.iter().filter_map(Operation::as_insert) {
        assert_eq!(insert.start_index, expected_start);
        assert!(insert.end_index > insert.start_index);
        expected_start = insert.end_index;
    }
}

#[test]
fn test_two_lists_two_groups_highest_first() {
    let ops = md_to_ops("- alpha\n- beta\n\nBetween\n\n1. one\n2. two\n");
    let groups = bullets(&ops);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].preset, BulletGlyphPreset::NumberedDigitAlphaRoman);
    assert_eq!(groups[1].preset, BulletGlyphPreset::BulletDiscCircleSquare);
    assert!(groups[0].start_index > groups[1].end_index);
}

#[test]
fn test_custom_presets() {
    let options = WriteOptions {
        bullet_preset: BulletGlyphPreset::BulletStarCircleSquare,
        numbered_preset: BulletGlyphPreset::NumberedUpperromanUpperalphaDigit,
        ..WriteOptions::default()
    };
    let ops = markdown_to_operations("- a\n\n1. b\n", &options).unwrap();
    let presets: Vec<_> = bullets(&ops).iter().map(|b| b.preset).collect();
    assert_eq!(
        presets,
        vec![
            BulletGlyphPreset::NumberedUpperromanUpperalphaDigit,
            BulletGlyphPreset::BulletStarCircleSquare
        ]
    );
}

#[test]
fn test_custom_heading_style_is_bold() {
    let options = WriteOptions {
        heading_style: Some(TextStyle {
            underline: Some(true),
            ..TextStyle::default()
        }),
        ..WriteOptions::default()
    };
    let ops = markdown_to_operations("## Agenda\n", &options).unwrap();
    let heading = find(&ops, "Agenda");
    assert_eq!(heading.style.bold, Some(true));
    assert_eq!(heading.style.underline, Some(true));
}

#[test]
fn test_requests_follow_operation_order() {
    let ops = md_to_ops("- item\n");
    let requests = operations_to_requests("box", &ops, true);
    let kinds: Vec<String> = serde_json::to_value(&requests)
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|request| request.as_object().unwrap().keys().next().unwrap().clone())
        .collect();
    assert_eq!(
        kinds,
        vec![
            "insertText",
            "updateTextStyle",
            "insertText",
            "updateTextStyle",
            "insertText",
            "updateTextStyle",
            "createParagraphBullets"
        ]
    );
}

#[test]
fn test_empty_item_keeps_its_own_paragraph() {
    let ops = md_to_ops("-\n- b\n");

    assert_eq!(inserted_text(&ops), "\t\n\tb\n");

    let groups = bullets(&ops);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].start_index, 0);
    assert_eq!(groups[0].end_index, 5);
}
