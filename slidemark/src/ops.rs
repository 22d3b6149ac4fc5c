//! Operations produced by the write direction.
//!
//! Converting Markdown yields an ordered list of operations for an external
//! executor: styled text inserts in document order, followed by bullet
//! requests. Bullets cannot be created while inserting text, so each list
//! becomes a separate request over the index range its text occupies.

use crate::native::{BulletGlyphPreset, TextStyle};
use serde::{Deserialize, Serialize};

/// Insert `content` at `start_index` and style `[start_index, end_index)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyledInsert {
    pub start_index: usize,
    pub end_index: usize,
    pub content: String,
    pub style: TextStyle,
}

/// Apply a bullet preset to the paragraphs overlapping `[start_index, end_index)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletRange {
    pub start_index: usize,
    pub end_index: usize,
    pub preset: BulletGlyphPreset,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    InsertText(StyledInsert),
    CreateBullets(BulletRange),
}

impl Operation {
    pub fn as_insert(&self) -> Option<&StyledInsert> {
        match self {
            Operation::InsertText(insert) => Some(insert),
            Operation::CreateBullets(_) => None,
        }
    }

    pub fn as_bullets(&self) -> Option<&BulletRange> {
        match self {
            Operation::CreateBullets(range) => Some(range),
            Operation::InsertText(_) => None,
        }
    }
}

/// Concatenated text of all inserts, in order.
pub fn inserted_text(ops: &[Operation]) -> String {
    ops.iter()
        .filter_map(Operation::as_insert)
        .map(|insert| insert.content.as_str())
        .collect()
}
