//! Core data structures for the Intermediate Representation (IR).
//!
//! The tree is deliberately shallow: a document is a sequence of paragraphs
//! and lists, and list nesting is a level number on each item rather than a
//! list nested inside a list. The Slides bullet model is flat in the same way,
//! so bullet ranges can be computed without walking a recursive structure.

use crate::style::Run;
use serde::{Deserialize, Serialize};

/// Represents the root of a text container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub elements: Vec<Element>,
}

/// A top-level block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Paragraph(Paragraph),
    List(List),
}

/// Represents a paragraph of styled runs. An empty paragraph is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub runs: Vec<Run>,
}

/// Represents a list of items. All items share `ordered`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub items: Vec<ListItem>,
    pub ordered: bool,
}

/// Represents an item in a list.
///
/// Paragraphs after the first are continuation lines under the same bullet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub paragraphs: Vec<Paragraph>,
    pub nesting_level: usize,
    /// Glyph the source rendered for this item, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glyph: Option<String>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Paragraph {
    pub fn new(runs: Vec<Run>) -> Self {
        Paragraph { runs }
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Concatenated content of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.content.as_str()).collect()
    }
}

impl ListItem {
    pub fn new(nesting_level: usize, paragraphs: Vec<Paragraph>) -> Self {
        ListItem {
            paragraphs,
            nesting_level,
            glyph: None,
        }
    }
}
