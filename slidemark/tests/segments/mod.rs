//! Native segment tests
//!
//! Tests for reading Slides text segments into the IR and for the native
//! style mapping.

mod read;
mod styles;
