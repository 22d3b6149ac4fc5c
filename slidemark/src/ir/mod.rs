//! Intermediate Representation (IR) for styled text.
//!
//! This module defines a platform-neutral representation of a text container,
//! sitting between the Slides run model and Markdown source.

pub mod nodes;
