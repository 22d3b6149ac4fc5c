//! Error types for conversion operations

use std::fmt;

/// Errors that can occur while converting between Markdown and styled runs
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// Markdown construct with no styled-run mapping (tables, images, code blocks...)
    UnsupportedConstruct(String),
    /// Bullet glyph whose ordinal cannot be recovered
    UnsupportedGlyph(String),
    /// Color string that is not `#rrggbb`
    InvalidColor(String),
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::UnsupportedConstruct(kind) => {
                write!(f, "Unsupported markdown element: {kind}")
            }
            ConversionError::UnsupportedGlyph(glyph) => {
                write!(f, "Unsupported glyph format: '{glyph}'")
            }
            ConversionError::InvalidColor(raw) => {
                write!(f, "Invalid color '{raw}': expected #rrggbb")
            }
        }
    }
}

impl std::error::Error for ConversionError {}
