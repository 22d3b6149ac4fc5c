//! Platform-agnostic color in the 0.0-1.0 scale used by the Slides API.

use crate::error::ConversionError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Default for Color {
    fn default() -> Self {
        Color {
            red: 0.0,
            green: 0.0,
            blue: 0.0,
            alpha: 1.0,
        }
    }
}

impl Color {
    /// Build from 0-255 components.
    pub fn from_rgb_tuple(rgb: (u8, u8, u8)) -> Self {
        Color {
            red: f64::from(rgb.0) / 255.0,
            green: f64::from(rgb.1) / 255.0,
            blue: f64::from(rgb.2) / 255.0,
            ..Color::default()
        }
    }

    pub fn from_rgb_float(red: f64, green: f64, blue: f64) -> Self {
        Color {
            red,
            green,
            blue,
            ..Color::default()
        }
    }

    /// Convert to 0-255 components. Values are truncated, not rounded:
    /// 0.5 maps to 127.
    pub fn to_rgb_tuple(&self) -> (u8, u8, u8) {
        (
            channel_to_byte(self.red),
            channel_to_byte(self.green),
            channel_to_byte(self.blue),
        )
    }

    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb_tuple();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(raw: &str) -> Result<Self, ConversionError> {
        let digits = raw.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ConversionError::InvalidColor(raw.to_string()));
        }
        let component = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ConversionError::InvalidColor(raw.to_string()))
        };
        Ok(Color::from_rgb_tuple((
            component(0..2)?,
            component(2..4)?,
            component(4..6)?,
        )))
    }
}

fn channel_to_byte(value: f64) -> u8 {
    // `as` saturates, so out-of-range inputs clamp to 0/255
    (value * 255.0) as u8
}
