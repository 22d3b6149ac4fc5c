//! Bidirectional mapping between Slides [`TextStyle`] and the split style model.
//!
//! Reading splits a native style into its [`MarkdownStyle`] and [`RichStyle`]
//! parts. Writing recombines them. The mapping is asymmetric in one respect:
//! booleans that are `false` are written back as unset, never as an explicit
//! `false`, so the written style does not override inherited defaults.

use crate::native::{
    BaselineOffset as NativeBaselineOffset, Dimension, Link, OptionalColor, TextStyle,
    WeightedFontFamily,
};
use crate::style::{
    is_monospace_family, BaselineOffset, Color, FullStyle, MarkdownStyle, RichStyle,
};

/// Font family written for code spans when no family is given.
pub const CODE_FONT_FAMILY: &str = "Courier New";
/// Family paired with a bare font weight.
pub const DEFAULT_WEIGHTED_FAMILY: &str = "Arial";

pub fn native_style_to_full(style: Option<&TextStyle>) -> FullStyle {
    let Some(style) = style else {
        return FullStyle::default();
    };

    let markdown = MarkdownStyle {
        bold: style.bold.unwrap_or(false),
        italic: style.italic.unwrap_or(false),
        strikethrough: style.strikethrough.unwrap_or(false),
        is_code: style
            .font_family
            .as_deref()
            .map(is_monospace_family)
            .unwrap_or(false),
        hyperlink: style.link.as_ref().and_then(|link| link.url.clone()),
    };

    let rich = RichStyle {
        font_family: style.font_family.clone(),
        font_size_pt: style.font_size.as_ref().map(Dimension::to_pt),
        font_weight: style.weighted_font_family.as_ref().map(|wff| wff.weight),
        foreground_color: optional_color_to_color(style.foreground_color.as_ref()),
        background_color: optional_color_to_color(style.background_color.as_ref()),
        underline: style.underline.unwrap_or(false),
        small_caps: style.small_caps.unwrap_or(false),
        baseline_offset: baseline_to_abstract(style.baseline_offset),
        ..RichStyle::default()
    };

    FullStyle { markdown, rich }
}

/// Only the rich part of a native style, used for style uniqueness checks.
pub fn native_style_to_rich(style: Option<&TextStyle>) -> RichStyle {
    native_style_to_full(style).rich
}

pub fn full_style_to_native(style: &FullStyle) -> TextStyle {
    rich_style_to_native(&style.rich, Some(&style.markdown))
}

/// Combine a rich style with an optional markdown part into a native style.
pub fn rich_style_to_native(rich: &RichStyle, markdown: Option<&MarkdownStyle>) -> TextStyle {
    let flag = |value: bool| value.then_some(true);

    let mut font_family = rich.font_family.clone();
    if font_family.is_none() && markdown.is_some_and(|md| md.is_code) {
        font_family = Some(CODE_FONT_FAMILY.to_string());
    }

    let weighted_font_family = rich.font_weight.map(|weight| WeightedFontFamily {
        font_family: font_family
            .clone()
            .unwrap_or_else(|| DEFAULT_WEIGHTED_FAMILY.to_string()),
        weight,
    });

    TextStyle {
        bold: markdown.and_then(|md| flag(md.bold)),
        italic: markdown.and_then(|md| flag(md.italic)),
        strikethrough: markdown.and_then(|md| flag(md.strikethrough)),
        underline: flag(rich.underline),
        small_caps: flag(rich.small_caps),
        font_family,
        font_size: rich.font_size_pt.map(Dimension::pt),
        weighted_font_family,
        foreground_color: rich.foreground_color.as_ref().map(color_to_optional_color),
        background_color: rich.background_color.as_ref().map(color_to_optional_color),
        baseline_offset: baseline_to_native(rich.baseline_offset),
        link: markdown
            .and_then(|md| md.hyperlink.as_deref())
            .map(Link::url),
    }
}

/// Minimal native style carrying only the markdown-derivable properties.
pub fn markdown_style_to_native(markdown: &MarkdownStyle) -> TextStyle {
    TextStyle {
        bold: markdown.bold.then_some(true),
        italic: markdown.italic.then_some(true),
        strikethrough: markdown.strikethrough.then_some(true),
        font_family: markdown.is_code.then(|| CODE_FONT_FAMILY.to_string()),
        link: markdown.hyperlink.as_deref().map(Link::url),
        ..TextStyle::default()
    }
}

fn optional_color_to_color(color: Option<&OptionalColor>) -> Option<Color> {
    let rgb = color?.opaque_color.as_ref()?.rgb_color.as_ref()?;
    Some(Color::from_rgb_float(
        rgb.red.unwrap_or(0.0),
        rgb.green.unwrap_or(0.0),
        rgb.blue.unwrap_or(0.0),
    ))
}

fn color_to_optional_color(color: &Color) -> OptionalColor {
    OptionalColor::rgb(color.red, color.green, color.blue)
}

fn baseline_to_abstract(baseline: Option<NativeBaselineOffset>) -> BaselineOffset {
    match baseline {
        Some(NativeBaselineOffset::Superscript) => BaselineOffset::Superscript,
        Some(NativeBaselineOffset::Subscript) => BaselineOffset::Subscript,
        _ => BaselineOffset::None,
    }
}

fn baseline_to_native(baseline: BaselineOffset) -> Option<NativeBaselineOffset> {
    match baseline {
        BaselineOffset::Superscript => Some(NativeBaselineOffset::Superscript),
        BaselineOffset::Subscript => Some(NativeBaselineOffset::Subscript),
        BaselineOffset::None => None,
    }
}
