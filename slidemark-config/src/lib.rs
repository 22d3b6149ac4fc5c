//! Shared configuration loader for the slidemark toolchain.
//!
//! `defaults/slidemark.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`SlidemarkConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use slidemark::native::BulletGlyphPreset;
use slidemark::{FallbackPolicy, MarkdownOptions, Numbering, WriteOptions};
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/slidemark.default.toml");

/// Top-level configuration consumed by slidemark applications.
#[derive(Debug, Clone, Deserialize)]
pub struct SlidemarkConfig {
    pub write: WriteConfig,
    pub read: ReadConfig,
    pub output: OutputConfig,
}

/// Markdown → Slides knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct WriteConfig {
    pub bullet_preset: BulletGlyphPreset,
    pub numbered_preset: BulletGlyphPreset,
    pub start_index: usize,
    pub fallback: FallbackSetting,
    pub styled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum FallbackSetting {
    #[serde(rename = "propagate")]
    Propagate,
    #[serde(rename = "plain-text")]
    PlainText,
}

impl From<FallbackSetting> for FallbackPolicy {
    fn from(setting: FallbackSetting) -> Self {
        match setting {
            FallbackSetting::Propagate => FallbackPolicy::Propagate,
            FallbackSetting::PlainText => FallbackPolicy::PlainText,
        }
    }
}

impl From<&WriteConfig> for WriteOptions {
    fn from(config: &WriteConfig) -> Self {
        WriteOptions {
            start_index: config.start_index,
            bullet_preset: config.bullet_preset,
            numbered_preset: config.numbered_preset,
            fallback: config.fallback.into(),
            ..WriteOptions::default()
        }
    }
}

/// Slides → Markdown knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadConfig {
    pub numbering: NumberingSetting,
    pub skip_whitespace_styles: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum NumberingSetting {
    #[serde(rename = "uniform")]
    Uniform,
    #[serde(rename = "glyph")]
    Glyph,
}

impl From<&ReadConfig> for MarkdownOptions {
    fn from(config: &ReadConfig) -> Self {
        MarkdownOptions {
            numbering: match config.numbering {
                NumberingSetting::Uniform => Numbering::Uniform,
                NumberingSetting::Glyph => Numbering::Glyph,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub pretty_json: bool,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<SlidemarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SlidemarkConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(
            config.write.bullet_preset,
            BulletGlyphPreset::BulletDiscCircleSquare
        );
        assert_eq!(
            config.write.numbered_preset,
            BulletGlyphPreset::NumberedDigitAlphaRoman
        );
        assert_eq!(config.write.start_index, 0);
        assert_eq!(config.write.fallback, FallbackSetting::Propagate);
        assert!(config.write.styled);
        assert_eq!(config.read.numbering, NumberingSetting::Uniform);
        assert!(config.read.skip_whitespace_styles);
        assert!(config.output.pretty_json);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("read.numbering", "glyph")
            .expect("override to apply")
            .set_override("write.fallback", "plain-text")
            .expect("override to apply")
            .set_override("write.bullet_preset", "BULLET_STAR_CIRCLE_SQUARE")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.read.numbering, NumberingSetting::Glyph);
        assert_eq!(config.write.fallback, FallbackSetting::PlainText);
        assert_eq!(
            config.write.bullet_preset,
            BulletGlyphPreset::BulletStarCircleSquare
        );
    }

    #[test]
    fn rejects_unknown_preset() {
        let result = Loader::new()
            .set_override("write.numbered_preset", "NUMBERED_EMOJI")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn write_config_converts_to_write_options() {
        let config = Loader::new()
            .set_override("write.start_index", 12_i64)
            .expect("override to apply")
            .build()
            .expect("config to build");
        let options: WriteOptions = (&config.write).into();
        assert_eq!(options.start_index, 12);
        assert_eq!(options.fallback, FallbackPolicy::Propagate);
        assert_eq!(options.heading_style, None);
    }

    #[test]
    fn read_config_converts_to_markdown_options() {
        let config = load_defaults().expect("defaults to deserialize");
        let options: MarkdownOptions = (&config.read).into();
        assert_eq!(options.numbering, Numbering::Uniform);
    }
}
