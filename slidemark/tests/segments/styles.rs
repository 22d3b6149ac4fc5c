//! Native style mapping

use slidemark::convert::{full_style_to_native, native_style_to_full, rich_style_to_native};
use slidemark::native::{
    BaselineOffset, Dimension, Link, OptionalColor, TextStyle, WeightedFontFamily,
};
use slidemark::style::{MarkdownStyle, RichStyle};

#[test]
fn test_code_without_family_is_courier_new() {
    let markdown = MarkdownStyle {
        is_code: true,
        ..MarkdownStyle::default()
    };
    let native = rich_style_to_native(&RichStyle::default(), Some(&markdown));
    assert_eq!(native.font_family.as_deref(), Some("Courier New"));
}

#[test]
fn test_round_trip_keeps_everything_but_explicit_false() {
    let original = TextStyle {
        bold: Some(true),
        italic: Some(false),
        strikethrough: Some(false),
        underline: Some(true),
        small_caps: Some(false),
        font_family: Some("Roboto".to_string()),
        font_size: Some(Dimension::pt(11.0)),
        weighted_font_family: Some(WeightedFontFamily {
            font_family: "Roboto".to_string(),
            weight: 500,
        }),
        foreground_color: Some(OptionalColor::rgb(0.25, 0.5, 0.75)),
        background_color: None,
        baseline_offset: Some(BaselineOffset::Superscript),
        link: Some(Link::url("https://example.com")),
    };

    let round_tripped = full_style_to_native(&native_style_to_full(Some(&original)));

    let expected = TextStyle {
        italic: None,
        strikethrough: None,
        small_caps: None,
        ..original
    };
    assert_eq!(round_tripped, expected);
}

#[test]
fn test_monospace_family_reads_as_code() {
    for family in ["Courier New", "consolas", "JetBrains Mono"] {
        let style = TextStyle {
            font_family: Some(family.to_string()),
            ..TextStyle::default()
        };
        assert!(
            native_style_to_full(Some(&style)).markdown.is_code,
            "{family} should be monospace"
        );
    }
}
