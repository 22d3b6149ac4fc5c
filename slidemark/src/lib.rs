//! Markdown interoperability for Google Slides text
//!
//!     This crate converts between Markdown and the styled text-run model of Google Slides
//!     text containers (shapes, table cells), in both directions.
//!
//!     This is a pure lib: it powers slidemark-cli but is shell agnostic. It never talks to the
//!     Slides API either; it consumes the JSON a container returns and produces the operations
//!     (or batchUpdate request bodies) a caller sends back.
//!
//! Architecture
//!
//!     Read:   Slides segments → IR (./ir) → consolidated runs → Markdown
//!     Write:  Markdown → comrak AST → styled inserts + bullet requests (./ops)
//!
//!     The style model (./style) splits every run's style in two: the part Markdown can express
//!     (bold, italic, strikethrough, code, link) and the rich rest (font, size, colors...). Only
//!     the Markdown part decides whether adjacent runs merge. Converters between the Slides
//!     TextStyle and the split model live in ./convert.rs.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── style                   # Markdown + rich style model, colors
//!     ├── native                  # Slides API text shapes, bullet glyphs
//!     ├── convert.rs              # native ↔ split style
//!     ├── ir                      # Intermediate Representation
//!     ├── common                  # Segment grouping and run consolidation
//!     ├── formats
//!     │   └── markdown
//!     │       ├── parser.rs       # Markdown → operations
//!     │       ├── serializer.rs   # IR → Markdown
//!     │       └── mod.rs
//!     ├── ops.rs                  # Write-side operations
//!     ├── requests.rs             # batchUpdate request bodies
//!     ├── container.rs            # TextContainer read trait
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── common                  # consolidation properties
//!     ├── markdown                # import / export
//!     └── segments                # native segments → IR
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Core Algorithms
//!
//!     Slides text is flat: paragraph markers carry bullets, runs carry styles. Reading regroups it
//!     into paragraphs and lists (./common/segments_to_ir.rs); lists stay flat, with a nesting
//!     level per item, matching the API's own bullet model.
//!
//!     Writing is two-phase: the AST walk collects styled pieces and list groups, then indices are
//!     assigned and groups become bullet requests, highest range first.

pub mod common;
pub mod container;
pub mod convert;
pub mod error;
pub mod formats;
pub mod ir;
pub mod native;
pub mod ops;
pub mod requests;
pub mod style;

pub use container::TextContainer;
pub use error::ConversionError;
pub use formats::markdown::{
    format_run, ir_to_markdown, ir_to_markdown_with, markdown_to_operations,
    markdown_to_operations_best_effort, FallbackPolicy, MarkdownOptions, Numbering, WriteOptions,
};
pub use ops::{BulletRange, Operation, StyledInsert};
pub use requests::{clear_text_request, operations_to_requests, write_markdown_requests, Request};

/// Groups Slides segments into the Intermediate Representation (IR).
///
/// # Information Loss
///
/// The IR keeps only what Markdown can use. The following is lost:
/// - Segment indices and auto-text kinds
/// - Bullet list ids (lists are told apart by position only)
/// - Paragraph-level styling
pub fn to_ir(segments: &[native::TextElement]) -> ir::nodes::Document {
    common::segments_to_ir::segments_to_ir(segments)
}
