//! Split style model.
//!
//!     Text style is carried as two disjoint vectors:
//!
//!     - [`MarkdownStyle`]: what Markdown can express (bold, italic, strikethrough, code, links).
//!       This part lives in the Markdown text itself.
//!     - [`RichStyle`]: everything else (fonts, colors, baseline, decorations). Markdown cannot
//!       carry it, so the read direction keeps it alongside the content instead.
//!
//!     Only the markdown vector decides whether two runs are "the same style" for consolidation.

mod color;

pub use color::Color;

use serde::{Deserialize, Serialize};

/// Font families treated as code when reading runs back.
pub const MONOSPACE_FONTS: &[&str] = &[
    "courier new",
    "courier",
    "monospace",
    "consolas",
    "monaco",
    "lucida console",
    "dejavu sans mono",
    "source code pro",
    "fira code",
    "jetbrains mono",
];

/// Whether a font family is one of the known monospace families (case-insensitive).
pub fn is_monospace_family(family: &str) -> bool {
    let lowered = family.to_lowercase();
    MONOSPACE_FONTS.contains(&lowered.as_str())
}

/// Vertical text offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaselineOffset {
    #[default]
    None,
    Superscript,
    Subscript,
}

/// Properties that can be encoded in Markdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownStyle {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub is_code: bool,
    pub hyperlink: Option<String>,
}

/// Properties that cannot be encoded in Markdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RichStyle {
    pub font_family: Option<String>,
    /// Always in points
    pub font_size_pt: Option<f64>,
    /// 100-900, 400 is normal, 700 is bold
    pub font_weight: Option<u32>,
    pub foreground_color: Option<Color>,
    pub background_color: Option<Color>,
    pub underline: bool,
    pub small_caps: bool,
    pub all_caps: bool,
    pub baseline_offset: BaselineOffset,
    /// In points
    pub character_spacing: Option<f64>,
    pub shadow: bool,
    pub emboss: bool,
    pub imprint: bool,
    pub double_strike: bool,
}

impl RichStyle {
    pub fn is_monospace(&self) -> bool {
        self.font_family
            .as_deref()
            .map(is_monospace_family)
            .unwrap_or(false)
    }

    /// True when no property is set.
    pub fn is_default(&self) -> bool {
        *self == RichStyle::default()
    }
}

/// Markdown and rich parts of a run's style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FullStyle {
    pub markdown: MarkdownStyle,
    pub rich: RichStyle,
}

impl FullStyle {
    pub fn same_markdown_style(&self, other: &FullStyle) -> bool {
        self.markdown == other.markdown
    }
}

/// A contiguous span of text with uniform style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub content: String,
    #[serde(default)]
    pub style: FullStyle,
}

impl Run {
    pub fn new(content: impl Into<String>, style: FullStyle) -> Self {
        Run {
            content: content.into(),
            style,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Run::new(content, FullStyle::default())
    }
}
