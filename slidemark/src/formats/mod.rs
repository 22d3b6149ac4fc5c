//! Format implementations
//!
//! Markdown is the only text format: it is read from and written to Slides
//! text containers.

pub mod markdown;
