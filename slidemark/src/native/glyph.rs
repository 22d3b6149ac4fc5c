//! Bullet glyph classification.
//!
//! The Slides API reports the rendered glyph of each bullet (`●`, `1.`, `b.`,
//! `iv.`), not the list type. A glyph containing any digit or letter is a
//! numbered glyph; everything else is a plain bullet.
//!
//! Recovering the ordinal of a numbered glyph uses two ten-entry tables
//! (lower-case Roman numerals and Latin letters), so only ordinals 1-10 are
//! recoverable for non-digit glyphs.

use crate::error::ConversionError;

const ROMAN: [&str; 10] = ["i", "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix", "x"];
const LATIN: [&str; 10] = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphKind {
    Bulleted,
    Numbered,
}

pub fn classify(glyph: &str) -> GlyphKind {
    if glyph.chars().any(char::is_alphanumeric) {
        GlyphKind::Numbered
    } else {
        GlyphKind::Bulleted
    }
}

pub fn is_numbered(glyph: &str) -> bool {
    classify(glyph) == GlyphKind::Numbered
}

/// Recover the 1-based ordinal of a numbered glyph.
pub fn ordinal(glyph: &str) -> Result<u32, ConversionError> {
    let number_part = glyph.strip_suffix('.').unwrap_or(glyph);

    if !number_part.is_empty() && number_part.chars().all(|c| c.is_ascii_digit()) {
        return number_part
            .parse()
            .map_err(|_| ConversionError::UnsupportedGlyph(glyph.to_string()));
    }

    let lowered = number_part.to_lowercase();
    // Roman is checked first, so "i" is 1 rather than the ninth letter
    ROMAN
        .iter()
        .chain(LATIN.iter())
        .position(|candidate| *candidate == lowered)
        .map(|position| (position % 10) as u32 + 1)
        .ok_or_else(|| ConversionError::UnsupportedGlyph(glyph.to_string()))
}

/// Markdown list marker (`"3. "`) for a numbered glyph.
pub fn numbered_marker(glyph: &str) -> Result<String, ConversionError> {
    Ok(format!("{}. ", ordinal(glyph)?))
}
