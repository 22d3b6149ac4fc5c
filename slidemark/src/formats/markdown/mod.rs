//! Markdown format implementation
//!
//! This module implements bidirectional conversion between Slides styled text
//! and CommonMark Markdown with the GFM strikethrough extension.
//!
//! # Library Choice
//!
//! We use the `comrak` crate for Markdown parsing. Serialization is hand
//! written: output is built run by run, and the placement of emphasis markers
//! around whitespace has to be controlled exactly.
//!
//! # Element Mapping Table
//!
//! | Slides text                 | Markdown                | Export Notes                      | Import Notes                          |
//! |-----------------------------|-------------------------|-----------------------------------|---------------------------------------|
//! | Paragraph                   | Paragraph               | One line per paragraph            | Runs + trailing `\n`                  |
//! | Bulleted list (`listId`)    | `- item`                | Two spaces per nesting level      | Tab placeholders + bullet request     |
//! | Numbered list               | `1. item`               | `1. ` or ordinal from glyph       | Tab placeholders + numbered request   |
//! | Bold run                    | `**bold**`              | Spaces kept outside markers       | Strong sets bold                      |
//! | Italic run                  | `*italic*`              | Bold+italic → `***x***`           | Emphasis toggles italic               |
//! | Strikethrough run           | `~~text~~`              | Innermost marker                  | GFM extension                         |
//! | Monospace run               | `` `code` ``            | Any known monospace family        | Courier New, reddish foreground       |
//! | Linked run                  | `[text](url)`           | Takes precedence over all markers | Sets `link.url`                       |
//! | Bold run (heading)          | `# Heading`             | Not produced                      | Heading style, level ignored          |
//!
//! # Lossy Conversions
//!
//! - Rich styling (font size, color, underline...) is not representable and is dropped on export
//! - Adjacent runs with equal Markdown styling are merged; the first run's rich style wins
//! - Heading levels → bold text
//! - Multiple blank lines → a single empty paragraph
//!
//! Code blocks, block quotes, tables, images, thematic breaks and raw HTML have
//! no mapping and fail the import with
//! [`ConversionError::UnsupportedConstruct`](crate::error::ConversionError).

pub mod parser;
pub mod serializer;

pub use parser::{
    markdown_to_operations, markdown_to_operations_best_effort, FallbackPolicy, WriteOptions,
};
pub use serializer::{format_run, ir_to_markdown, ir_to_markdown_with, MarkdownOptions, Numbering};
