//! Markdown format tests
//!
//! Tests for Slides text ↔ Markdown conversion in both directions.

mod export;
mod import;
