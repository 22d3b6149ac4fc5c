//! Google Slides text model.
//!
//! These types mirror the JSON the Slides REST API returns for the `text`
//! property of a shape or table cell, restricted to what the conversion core
//! reads or produces. Unknown fields are ignored on input.
//!
//! A text container is a flat sequence of [`TextElement`]s. Each paragraph
//! begins with a zero-width paragraph marker (carrying the bullet, if any)
//! followed by the text runs of that paragraph; the last run of a paragraph
//! ends with `\n`.

pub mod glyph;
pub mod text_style;

pub use text_style::{
    BaselineOffset, Dimension, Link, OpaqueColor, OptionalColor, RgbColor, TextStyle, Unit,
    WeightedFontFamily,
};

use serde::{Deserialize, Serialize};

/// The `text` object of a shape or table cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    #[serde(default)]
    pub text_elements: Vec<TextElement>,
}

/// One segment of a text container.
///
/// The API signals the segment type by which of `paragraphMarker`, `textRun`
/// or `autoText` is present; that choice is decoded once, into [`ElementKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    #[serde(default)]
    pub start_index: usize,
    #[serde(default)]
    pub end_index: usize,
    #[serde(flatten)]
    pub kind: ElementKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    ParagraphMarker(ParagraphMarker),
    TextRun(TextRun),
    AutoText(AutoText),
}

impl TextElement {
    pub fn text_run(start_index: usize, content: impl Into<String>, style: TextStyle) -> Self {
        let content = content.into();
        let end_index = start_index + utf16_len(&content);
        TextElement {
            start_index,
            end_index,
            kind: ElementKind::TextRun(TextRun {
                content,
                style: Some(style),
            }),
        }
    }

    pub fn paragraph_marker(index: usize, bullet: Option<Bullet>) -> Self {
        TextElement {
            start_index: index,
            end_index: index,
            kind: ElementKind::ParagraphMarker(ParagraphMarker { bullet }),
        }
    }

    /// Text and style of a run-like segment (text runs and auto text).
    pub fn styled_text(&self) -> Option<(&str, Option<&TextStyle>)> {
        match &self.kind {
            ElementKind::TextRun(run) => Some((run.content.as_str(), run.style.as_ref())),
            ElementKind::AutoText(auto) => Some((auto.content.as_str(), auto.style.as_ref())),
            ElementKind::ParagraphMarker(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphMarker {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullet: Option<Bullet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

/// Dynamic text such as a slide number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutoText {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bullet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nesting_level: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glyph: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullet_style: Option<TextStyle>,
}

impl Bullet {
    pub fn new(list_id: impl Into<String>, nesting_level: usize, glyph: impl Into<String>) -> Self {
        Bullet {
            list_id: Some(list_id.into()),
            nesting_level: Some(nesting_level),
            glyph: Some(glyph.into()),
            bullet_style: None,
        }
    }
}

/// Glyph presets accepted by `createParagraphBullets`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BulletGlyphPreset {
    BulletDiscCircleSquare,
    BulletDiamondxArrow3dSquare,
    BulletCheckbox,
    BulletArrowDiamondDisc,
    BulletStarCircleSquare,
    BulletArrow3dCircleSquare,
    BulletLefttriangleDiamondDisc,
    BulletDiamondxHollowdiamondSquare,
    BulletDiamondCircleSquare,
    NumberedDigitAlphaRoman,
    NumberedDigitAlphaRomanParens,
    NumberedDigitNested,
    NumberedUpperalphaAlphaRoman,
    NumberedUpperromanUpperalphaDigit,
    NumberedZerodigitAlphaRoman,
}

impl BulletGlyphPreset {
    pub const ALL: [BulletGlyphPreset; 15] = [
        BulletGlyphPreset::BulletDiscCircleSquare,
        BulletGlyphPreset::BulletDiamondxArrow3dSquare,
        BulletGlyphPreset::BulletCheckbox,
        BulletGlyphPreset::BulletArrowDiamondDisc,
        BulletGlyphPreset::BulletStarCircleSquare,
        BulletGlyphPreset::BulletArrow3dCircleSquare,
        BulletGlyphPreset::BulletLefttriangleDiamondDisc,
        BulletGlyphPreset::BulletDiamondxHollowdiamondSquare,
        BulletGlyphPreset::BulletDiamondCircleSquare,
        BulletGlyphPreset::NumberedDigitAlphaRoman,
        BulletGlyphPreset::NumberedDigitAlphaRomanParens,
        BulletGlyphPreset::NumberedDigitNested,
        BulletGlyphPreset::NumberedUpperalphaAlphaRoman,
        BulletGlyphPreset::NumberedUpperromanUpperalphaDigit,
        BulletGlyphPreset::NumberedZerodigitAlphaRoman,
    ];

    pub fn is_numbered(&self) -> bool {
        matches!(
            self,
            BulletGlyphPreset::NumberedDigitAlphaRoman
                | BulletGlyphPreset::NumberedDigitAlphaRomanParens
                | BulletGlyphPreset::NumberedDigitNested
                | BulletGlyphPreset::NumberedUpperalphaAlphaRoman
                | BulletGlyphPreset::NumberedUpperromanUpperalphaDigit
                | BulletGlyphPreset::NumberedZerodigitAlphaRoman
        )
    }
}

/// Length of `text` in UTF-16 code units, the unit the Slides API indexes by.
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}
