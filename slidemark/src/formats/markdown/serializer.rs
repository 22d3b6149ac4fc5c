//! Markdown serialization (IR → Markdown)
//!
//! Pipeline: Slides segments → IR → consolidated runs → Markdown lines
//!
//! Each paragraph is rendered by consolidating its runs, formatting each run
//! to a Markdown fragment, and joining the fragments. Lists render one line
//! per item, indented two spaces per nesting level.
//!
//! # Marker Placement
//!
//! Emphasis markers must hug non-whitespace text: `**text **` is not valid
//! emphasis. Leading and trailing spaces or tabs of a run are therefore moved
//! outside the markers, and trailing newlines are re-appended after the
//! closing marker. Whitespace-only runs are emitted verbatim.

use crate::common::consolidate::consolidate_runs;
use crate::error::ConversionError;
use crate::ir::nodes::{Document, Element, List, Paragraph};
use crate::native::glyph;
use crate::style::FullStyle;

/// How ordered list items are numbered in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Numbering {
    /// Every ordered item is written as `1. `; Markdown renumbers on render.
    #[default]
    Uniform,
    /// The ordinal is recovered from the item's glyph (`c.` → `3. `).
    Glyph,
}

#[derive(Debug, Clone, Default)]
pub struct MarkdownOptions {
    pub numbering: Numbering,
}

/// Serialize an IR document to Markdown with default options.
pub fn ir_to_markdown(doc: &Document) -> String {
    render(doc, &uniform_marker).unwrap_or_default()
}

/// Serialize an IR document to Markdown.
///
/// Fails only with [`Numbering::Glyph`], when an ordered item's glyph has no
/// recoverable ordinal.
pub fn ir_to_markdown_with(
    doc: &Document,
    options: &MarkdownOptions,
) -> Result<String, ConversionError> {
    match options.numbering {
        Numbering::Uniform => render(doc, &uniform_marker),
        Numbering::Glyph => render(doc, &glyph_marker),
    }
}

type MarkerFn = dyn Fn(Option<&str>) -> Result<String, ConversionError>;

fn uniform_marker(_glyph: Option<&str>) -> Result<String, ConversionError> {
    Ok("1. ".to_string())
}

fn glyph_marker(item_glyph: Option<&str>) -> Result<String, ConversionError> {
    match item_glyph {
        Some(g) => glyph::numbered_marker(g),
        None => uniform_marker(None),
    }
}

fn render(doc: &Document, ordered_marker: &MarkerFn) -> Result<String, ConversionError> {
    let mut lines = Vec::new();
    for element in &doc.elements {
        match element {
            Element::Paragraph(paragraph) => lines.extend(paragraph_to_markdown(paragraph)),
            Element::List(list) => lines.extend(list_to_markdown(list, ordered_marker)?),
        }
    }
    Ok(join_lines(&lines))
}

fn join_lines(lines: &[String]) -> String {
    lines.join("\n").trim_end().to_string()
}

/// Render one paragraph, or `None` when it produces no visible text.
fn paragraph_to_markdown(paragraph: &Paragraph) -> Option<String> {
    if paragraph.runs.is_empty() {
        return None;
    }

    let rendered: String = consolidate_runs(&paragraph.runs)
        .iter()
        .map(|run| format_run(&run.content, &run.style))
        .collect();

    let trimmed = rendered.trim_end();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn list_to_markdown(
    list: &List,
    ordered_marker: &MarkerFn,
) -> Result<Vec<String>, ConversionError> {
    let mut lines = Vec::new();
    for item in &list.items {
        let indent = "  ".repeat(item.nesting_level);
        let bullet = if list.ordered {
            ordered_marker(item.glyph.as_deref())?
        } else {
            "- ".to_string()
        };

        for (i, paragraph) in item.paragraphs.iter().enumerate() {
            let Some(text) = paragraph_to_markdown(paragraph) else {
                continue;
            };
            if i == 0 {
                lines.push(format!("{indent}{bullet}{text}"));
            } else {
                // Continuation line under the same bullet
                lines.push(format!("{indent}  {text}"));
            }
        }
    }
    Ok(lines)
}

fn is_space_or_tab(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Render one run's content with its Markdown markers.
pub fn format_run(content: &str, style: &FullStyle) -> String {
    let md = &style.markdown;

    if content.trim_matches(|c| c == ' ' || c == '\t' || c == '\n').is_empty() {
        return content.to_string();
    }

    // Links take precedence over every other marker
    if let Some(url) = &md.hyperlink {
        let clean = content.trim();
        if clean.is_empty() {
            return content.to_string();
        }
        return format!("[{clean}]({url})");
    }

    if md.is_code || style.rich.is_monospace() {
        let clean = content.trim();
        if clean.is_empty() {
            return content.to_string();
        }
        return format!("`{clean}`");
    }

    let leading_len = content.len() - content.trim_start_matches(is_space_or_tab).len();
    let leading_space = &content[..leading_len];

    let without_newlines = content.trim_end_matches('\n');
    let trailing_newlines = &content[without_newlines.len()..];

    let core_end = without_newlines.trim_end_matches(is_space_or_tab).len();
    let trailing_space = &without_newlines[core_end.max(leading_len)..];

    let core = &without_newlines[leading_len..core_end.max(leading_len)];

    let mut wrapped = core.to_string();
    if !wrapped.is_empty() {
        if md.strikethrough {
            wrapped = format!("~~{wrapped}~~");
        }
        if md.bold && md.italic {
            wrapped = format!("***{wrapped}***");
        } else if md.bold {
            wrapped = format!("**{wrapped}**");
        } else if md.italic {
            wrapped = format!("*{wrapped}*");
        }
    }

    format!("{leading_space}{wrapped}{trailing_space}{trailing_newlines}")
}
