//! Slides `batchUpdate` request bodies.
//!
//! Operations are executor-agnostic; this module renders them into the JSON
//! requests the Slides API accepts, addressed to one shape by object id. The
//! transport that sends them is out of scope.

use crate::container::TextContainer;
use crate::convert::{native_style_to_rich, rich_style_to_native};
use crate::error::ConversionError;
use crate::formats::markdown::{markdown_to_operations_best_effort, WriteOptions};
use crate::native::{BulletGlyphPreset, TextStyle};
use crate::ops::Operation;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Field mask selecting every style field.
pub const ALL_FIELDS: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RangeType {
    FixedRange,
    FromStartIndex,
    All,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    #[serde(rename = "type")]
    pub kind: RangeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_index: Option<usize>,
}

impl Range {
    pub fn fixed(start_index: usize, end_index: usize) -> Self {
        Range {
            kind: RangeType::FixedRange,
            start_index: Some(start_index),
            end_index: Some(end_index),
        }
    }

    pub fn all() -> Self {
        Range {
            kind: RangeType::All,
            start_index: None,
            end_index: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertTextRequest {
    pub object_id: String,
    pub text: String,
    pub insertion_index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTextStyleRequest {
    pub object_id: String,
    pub text_range: Range,
    pub style: TextStyle,
    pub fields: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParagraphBulletsRequest {
    pub object_id: String,
    pub text_range: Range,
    pub bullet_preset: BulletGlyphPreset,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTextRequest {
    pub object_id: String,
    pub text_range: Range,
}

/// One entry of a `batchUpdate` `requests` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Request {
    InsertText(InsertTextRequest),
    UpdateTextStyle(UpdateTextStyleRequest),
    CreateParagraphBullets(CreateParagraphBulletsRequest),
    DeleteText(DeleteTextRequest),
}

/// Render operations as requests against `object_id`.
///
/// Each insert becomes an `insertText` followed, when `styled`, by an
/// `updateTextStyle` over the inserted range.
pub fn operations_to_requests(object_id: &str, ops: &[Operation], styled: bool) -> Vec<Request> {
    let mut requests = Vec::with_capacity(ops.len() * 2);
    for op in ops {
        match op {
            Operation::InsertText(insert) => {
                requests.push(Request::InsertText(InsertTextRequest {
                    object_id: object_id.to_string(),
                    text: insert.content.clone(),
                    insertion_index: insert.start_index,
                }));
                if styled {
                    requests.push(Request::UpdateTextStyle(UpdateTextStyleRequest {
                        object_id: object_id.to_string(),
                        text_range: Range::fixed(insert.start_index, insert.end_index),
                        style: insert.style.clone(),
                        fields: ALL_FIELDS.to_string(),
                    }));
                }
            }
            Operation::CreateBullets(range) => {
                requests.push(Request::CreateParagraphBullets(
                    CreateParagraphBulletsRequest {
                        object_id: object_id.to_string(),
                        text_range: Range::fixed(range.start_index, range.end_index),
                        bullet_preset: range.preset,
                    },
                ));
            }
        }
    }
    requests
}

/// Request deleting all text of `object_id`.
pub fn clear_text_request(object_id: &str) -> Request {
    Request::DeleteText(DeleteTextRequest {
        object_id: object_id.to_string(),
        text_range: Range::all(),
    })
}

/// Requests replacing (or extending, with `append`) the text of a container.
///
/// Existing text is cleared first unless appending or the container is empty.
/// `styled = false` omits the style updates, leaving plain text.
///
/// When `options.base_style` is left at its default, inserted text takes the
/// rich part (font, size, colors...) of the container's first run, so
/// overwriting a styled box keeps its look.
pub fn write_markdown_requests<C: TextContainer + ?Sized>(
    container: &C,
    object_id: &str,
    markdown: &str,
    options: &WriteOptions,
    append: bool,
    styled: bool,
) -> Result<Vec<Request>, ConversionError> {
    let mut requests = Vec::new();
    if container.has_text() && !append {
        requests.push(clear_text_request(object_id));
    }

    let inherited = inherited_options(container, options);
    let options = inherited.as_ref().unwrap_or(options);
    let ops = markdown_to_operations_best_effort(markdown, options)?;
    requests.extend(operations_to_requests(object_id, &ops, styled));

    debug!(
        object_id,
        append,
        requests = requests.len(),
        "built write requests"
    );
    Ok(requests)
}

fn inherited_options<C: TextContainer + ?Sized>(
    container: &C,
    options: &WriteOptions,
) -> Option<WriteOptions> {
    if options.base_style != TextStyle::default() {
        return None;
    }
    let rich = native_style_to_rich(container.style());
    Some(WriteOptions {
        base_style: rich_style_to_native(&rich, None),
        ..options.clone()
    })
}
