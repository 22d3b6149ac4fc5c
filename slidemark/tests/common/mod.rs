//! Properties of run consolidation, marker placement and style conversion.

use proptest::prelude::*;
use slidemark::common::consolidate::consolidate_runs;
use slidemark::convert::native_style_to_rich;
use slidemark::format_run;
use slidemark::ir::nodes::{Document, Element, Paragraph};
use slidemark::ir_to_markdown;
use slidemark::native::{Dimension, Link, TextStyle, Unit};
use slidemark::style::{Color, FullStyle, MarkdownStyle, Run};

fn markdown_style() -> impl Strategy<Value = MarkdownStyle> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        prop::option::of("https://[a-z]{1,8}\\.com"),
    )
        .prop_map(|(bold, italic, strikethrough, is_code, hyperlink)| MarkdownStyle {
            bold,
            italic,
            strikethrough,
            is_code,
            hyperlink,
        })
}

fn run() -> impl Strategy<Value = Run> {
    ("[a-z ]{0,6}", markdown_style()).prop_map(|(content, markdown)| {
        Run::new(
            content,
            FullStyle {
                markdown,
                ..FullStyle::default()
            },
        )
    })
}

fn bold() -> FullStyle {
    FullStyle {
        markdown: MarkdownStyle {
            bold: true,
            ..MarkdownStyle::default()
        },
        ..FullStyle::default()
    }
}

proptest! {
    #[test]
    fn test_consolidation_is_idempotent(runs in prop::collection::vec(run(), 0..12)) {
        let once = consolidate_runs(&runs);
        let twice = consolidate_runs(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_consolidation_preserves_text(runs in prop::collection::vec(run(), 0..12)) {
        let original: String = runs.iter().map(|r| r.content.as_str()).collect();
        let merged: String = consolidate_runs(&runs).iter().map(|r| r.content.as_str()).collect();
        prop_assert_eq!(original, merged);
    }

    #[test]
    fn test_whitespace_is_never_formatted(
        content in "[ \t\n]{0,12}",
        markdown in markdown_style(),
    ) {
        let style = FullStyle { markdown, ..FullStyle::default() };
        let rendered = format_run(&content, &style);
        prop_assert_eq!(rendered.len(), content.len());
        prop_assert_eq!(rendered, content);
    }

    #[test]
    fn test_markers_hug_the_text(
        leading in "[ \t]{0,3}",
        word in "[A-Za-z0-9]{1,8}",
        trailing in "[ \t]{0,3}",
    ) {
        let content = format!("{leading}{word}{trailing}");
        prop_assert_eq!(
            format_run(&content, &bold()),
            format!("{leading}**{word}**{trailing}")
        );
    }

    #[test]
    fn test_same_style_runs_never_double_markers(
        words in prop::collection::vec("[a-z]{1,5} ?", 1..8),
    ) {
        let runs = words.into_iter().map(|w| Run::new(w, bold())).collect();
        let doc = Document {
            elements: vec![Element::Paragraph(Paragraph::new(runs))],
        };
        let md = ir_to_markdown(&doc);
        prop_assert!(!md.contains("****"), "{}", md);
        prop_assert!(!md.contains("** **"), "{}", md);
    }

    #[test]
    fn test_color_tuple_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        prop_assert_eq!(Color::from_rgb_tuple((r, g, b)).to_rgb_tuple(), (r, g, b));
    }

    #[test]
    fn test_hex_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let color = Color::from_rgb_tuple((r, g, b));
        prop_assert_eq!(Color::from_hex(&color.to_hex()).unwrap(), color);
    }

    #[test]
    fn test_points_round_trip(pt in 0.0f64..400.0) {
        prop_assert_eq!(Dimension::pt(pt).to_pt(), pt);
    }

    #[test]
    fn test_markdown_fields_do_not_change_rich_style(
        bold in prop::option::of(any::<bool>()),
        italic in prop::option::of(any::<bool>()),
        strikethrough in prop::option::of(any::<bool>()),
        url in prop::option::of("https://[a-z]{1,8}\\.com"),
    ) {
        let base = TextStyle {
            font_size: Some(Dimension::pt(14.0)),
            underline: Some(true),
            ..TextStyle::default()
        };
        let styled = TextStyle {
            bold,
            italic,
            strikethrough,
            link: url.map(Link::url),
            ..base.clone()
        };
        prop_assert_eq!(native_style_to_rich(Some(&base)), native_style_to_rich(Some(&styled)));
    }
}

#[test]
fn test_emu_converts_to_points() {
    let dimension = Dimension {
        magnitude: 12700.0 * 24.0,
        unit: Unit::Emu,
    };
    assert_eq!(dimension.to_pt(), 24.0);
}

#[test]
fn test_half_channel_truncates() {
    assert_eq!(Color::from_rgb_float(0.5, 0.5, 0.5).to_rgb_tuple(), (127, 127, 127));
}
