//! Slides `TextStyle` and the value types it references.
//!
//! Every field is optional: an absent field inherits from the paragraph or
//! placeholder defaults, so writers must leave fields unset rather than
//! emitting explicit `false` values.

use serde::{Deserialize, Serialize};

/// EMUs per typographic point.
pub const EMU_PER_PT: f64 = 12700.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<OptionalColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<OptionalColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline_offset: Option<BaselineOffset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_caps: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weighted_font_family: Option<WeightedFontFamily>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Unit {
    #[default]
    #[serde(rename = "UNIT_UNSPECIFIED")]
    Unspecified,
    Emu,
    Pt,
}

/// A magnitude in a single unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    #[serde(default)]
    pub magnitude: f64,
    #[serde(default)]
    pub unit: Unit,
}

impl Dimension {
    pub fn pt(magnitude: f64) -> Self {
        Dimension {
            magnitude,
            unit: Unit::Pt,
        }
    }

    pub fn emu(magnitude: f64) -> Self {
        Dimension {
            magnitude,
            unit: Unit::Emu,
        }
    }

    /// Magnitude in points. An unspecified unit is taken to be points already.
    pub fn to_pt(&self) -> f64 {
        match self.unit {
            Unit::Emu => self.magnitude / EMU_PER_PT,
            Unit::Pt | Unit::Unspecified => self.magnitude,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionalColor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opaque_color: Option<OpaqueColor>,
}

impl OptionalColor {
    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        OptionalColor {
            opaque_color: Some(OpaqueColor {
                rgb_color: Some(RgbColor {
                    red: Some(red),
                    green: Some(green),
                    blue: Some(blue),
                }),
                theme_color: None,
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpaqueColor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rgb_color: Option<RgbColor>,
    /// Theme colors (`DARK1`, `ACCENT2`, ...) have no RGB value until rendered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
}

/// RGB components in 0.0-1.0. The API omits zero-valued components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RgbColor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub red: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub green: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blue: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide_index: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_object_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_link: Option<String>,
}

impl Link {
    pub fn url(url: impl Into<String>) -> Self {
        Link {
            url: Some(url.into()),
            ..Link::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedFontFamily {
    pub font_family: String,
    pub weight: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BaselineOffset {
    BaselineOffsetUnspecified,
    None,
    Superscript,
    Subscript,
}
