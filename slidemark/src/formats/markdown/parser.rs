//! Markdown parsing (Markdown → Slides operations)
//!
//! Pipeline: Markdown string → Comrak AST → styled pieces + list groups → Operations
//!
//! The walk threads an accumulated [`TextStyle`] down the AST. Phase 1 collects
//! styled text pieces in document order and records one group per top-level
//! list, as a span over the pieces it produced. Phase 2 assigns UTF-16 indices
//! to every piece and turns each group into a bullet request over its range.
//!
//! Bullet requests are emitted highest range first: creating bullets consumes
//! the leading tab placeholders of each item, which shifts every later index.

use crate::error::ConversionError;
use crate::native::{utf16_len, BulletGlyphPreset, Link, OptionalColor, TextStyle};
use crate::ops::{BulletRange, Operation, StyledInsert};
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};
use tracing::{debug, warn};

/// Font family applied to inline code.
pub const CODE_SPAN_FONT: &str = "Courier New";
/// Foreground color applied to inline code, as `(red, green, blue)`.
pub const CODE_SPAN_COLOR: (f64, f64, f64) = (0.8, 0.2, 0.2);

/// What [`markdown_to_operations_best_effort`] does when conversion fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Return the error.
    #[default]
    Propagate,
    /// Log a warning and insert the raw input as one plain run.
    PlainText,
}

#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Style every run starts from.
    pub base_style: TextStyle,
    /// Style of heading text. Defaults to `base_style`; bold is always forced.
    pub heading_style: Option<TextStyle>,
    /// Index of the first inserted character.
    pub start_index: usize,
    pub bullet_preset: BulletGlyphPreset,
    pub numbered_preset: BulletGlyphPreset,
    pub fallback: FallbackPolicy,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            base_style: TextStyle::default(),
            heading_style: None,
            start_index: 0,
            bullet_preset: BulletGlyphPreset::BulletDiscCircleSquare,
            numbered_preset: BulletGlyphPreset::NumberedDigitAlphaRoman,
            fallback: FallbackPolicy::Propagate,
        }
    }
}

impl WriteOptions {
    fn resolved_heading_style(&self) -> TextStyle {
        let mut style = self
            .heading_style
            .clone()
            .unwrap_or_else(|| self.base_style.clone());
        style.bold = Some(true);
        style
    }
}

/// Convert Markdown to styled inserts followed by bullet requests.
pub fn markdown_to_operations(
    text: &str,
    options: &WriteOptions,
) -> Result<Vec<Operation>, ConversionError> {
    let arena = Arena::new();
    let comrak_options = default_comrak_options();
    let root = parse_document(&arena, text, &comrak_options);

    let mut walker = Walker {
        heading_style: options.resolved_heading_style(),
        lines: text.lines().collect(),
        pieces: Vec::new(),
        groups: Vec::new(),
    };
    walker.document(root, &options.base_style)?;

    let ops = walker.into_operations(options);
    debug!(
        input_len = text.len(),
        operations = ops.len(),
        "converted markdown to operations"
    );
    Ok(ops)
}

/// [`markdown_to_operations`] with `options.fallback` applied on failure.
pub fn markdown_to_operations_best_effort(
    text: &str,
    options: &WriteOptions,
) -> Result<Vec<Operation>, ConversionError> {
    match markdown_to_operations(text, options) {
        Ok(ops) => Ok(ops),
        Err(err) => match options.fallback {
            FallbackPolicy::Propagate => Err(err),
            FallbackPolicy::PlainText => {
                warn!(error = %err, "markdown conversion failed, inserting plain text");
                Ok(plain_text_operations(text, options))
            }
        },
    }
}

fn plain_text_operations(text: &str, options: &WriteOptions) -> Vec<Operation> {
    if text.is_empty() {
        return Vec::new();
    }
    vec![Operation::InsertText(StyledInsert {
        start_index: options.start_index,
        end_index: options.start_index + utf16_len(text),
        content: text.to_string(),
        style: options.base_style.clone(),
    })]
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options
}

#[derive(Debug)]
struct Piece {
    content: String,
    style: TextStyle,
}

/// A top-level list, as the span of pieces `first..=last` it produced.
#[derive(Debug)]
struct ListGroup {
    ordered: bool,
    first: usize,
    last: usize,
}

struct Walker<'s> {
    heading_style: TextStyle,
    /// Source lines, for locating blank-line gaps.
    lines: Vec<&'s str>,
    pieces: Vec<Piece>,
    groups: Vec<ListGroup>,
}

impl Walker<'_> {
    fn push(&mut self, content: impl Into<String>, style: &TextStyle) {
        self.pieces.push(Piece {
            content: content.into(),
            style: style.clone(),
        });
    }

    fn document<'a>(
        &mut self,
        root: &'a AstNode<'a>,
        style: &TextStyle,
    ) -> Result<(), ConversionError> {
        if let Some(first) = root.first_child() {
            if start_line(first) > 1 {
                self.push("\n", style);
            }
        }

        self.blocks(root, style, 0)?;

        if let Some(last) = root.last_child() {
            if self.lines.len() > self.content_end(last) {
                self.push("\n", style);
            }
        }
        Ok(())
    }

    /// Walk block children, emitting one newline per blank-line gap between siblings.
    fn blocks<'a>(
        &mut self,
        parent: &'a AstNode<'a>,
        style: &TextStyle,
        depth: usize,
    ) -> Result<(), ConversionError> {
        let mut previous_end: Option<usize> = None;
        for child in parent.children() {
            if let Some(end) = previous_end {
                if start_line(child) > end + 1 {
                    self.push("\n", style);
                }
            }
            self.block(child, style, depth)?;
            previous_end = Some(self.content_end(child));
        }
        Ok(())
    }

    /// Last source line of `node` that is not blank.
    ///
    /// Containers closed by a following block report the blank line before it
    /// as their end.
    fn content_end<'a>(&self, node: &'a AstNode<'a>) -> usize {
        let start = start_line(node);
        let mut line = node.data.borrow().sourcepos.end.line;
        while line > start
            && self
                .lines
                .get(line - 1)
                .is_some_and(|text| text.trim().is_empty())
        {
            line -= 1;
        }
        line
    }

    fn block<'a>(
        &mut self,
        node: &'a AstNode<'a>,
        style: &TextStyle,
        depth: usize,
    ) -> Result<(), ConversionError> {
        let value = node.data.borrow().value.clone();
        match value {
            NodeValue::Paragraph => {
                self.inlines(node, style)?;
                self.push("\n", style);
            }

            NodeValue::Heading(_) => {
                let heading_style = self.heading_style.clone();
                self.inlines(node, &heading_style)?;
                self.push("\n", style);
            }

            NodeValue::List(list) => {
                let first = self.pieces.len();
                for item in node.children() {
                    self.block(item, style, depth + 1)?;
                }
                if depth == 0 && self.pieces.len() > first {
                    self.groups.push(ListGroup {
                        ordered: matches!(list.list_type, ListType::Ordered),
                        first,
                        last: self.pieces.len() - 1,
                    });
                }
            }

            NodeValue::Item(_) => {
                // Placeholder tabs, consumed when the bullets are created
                for _ in 0..depth {
                    self.push("\t", style);
                }
                if node.first_child().is_none() {
                    // An empty item still ends its own paragraph
                    self.push("\n", style);
                }
                self.blocks(node, style, depth)?;
            }

            other => return Err(unsupported(&other)),
        }
        Ok(())
    }

    fn inlines<'a>(
        &mut self,
        parent: &'a AstNode<'a>,
        style: &TextStyle,
    ) -> Result<(), ConversionError> {
        for child in parent.children() {
            self.inline(child, style)?;
        }
        Ok(())
    }

    fn inline<'a>(
        &mut self,
        node: &'a AstNode<'a>,
        style: &TextStyle,
    ) -> Result<(), ConversionError> {
        let value = node.data.borrow().value.clone();
        match value {
            NodeValue::Text(text) => self.push(text, style),

            NodeValue::SoftBreak | NodeValue::LineBreak => self.push("\n", style),

            NodeValue::Code(code) => {
                let mut code_style = style.clone();
                code_style.font_family = Some(CODE_SPAN_FONT.to_string());
                code_style.weighted_font_family = None;
                let (red, green, blue) = CODE_SPAN_COLOR;
                code_style.foreground_color = Some(OptionalColor::rgb(red, green, blue));
                self.push(code.literal, &code_style);
            }

            NodeValue::Emph => {
                let mut emph_style = style.clone();
                emph_style.italic = Some(!style.italic.unwrap_or(false));
                self.inlines(node, &emph_style)?;
            }

            NodeValue::Strong => {
                let mut strong_style = style.clone();
                strong_style.bold = Some(true);
                self.inlines(node, &strong_style)?;
            }

            NodeValue::Strikethrough => {
                let mut strike_style = style.clone();
                strike_style.strikethrough = Some(true);
                self.inlines(node, &strike_style)?;
            }

            NodeValue::Link(link) => {
                let mut link_style = style.clone();
                link_style.link = Some(Link::url(link.url));
                self.inlines(node, &link_style)?;
            }

            other => return Err(unsupported(&other)),
        }
        Ok(())
    }

    fn into_operations(self, options: &WriteOptions) -> Vec<Operation> {
        let mut ranges = Vec::with_capacity(self.pieces.len());
        let mut ops = Vec::with_capacity(self.pieces.len() + self.groups.len());

        let mut index = options.start_index;
        for piece in self.pieces {
            let end = index + utf16_len(&piece.content);
            ranges.push((index, end));
            ops.push(Operation::InsertText(StyledInsert {
                start_index: index,
                end_index: end,
                content: piece.content,
                style: piece.style,
            }));
            index = end;
        }

        let mut bullets: Vec<BulletRange> = self
            .groups
            .iter()
            .map(|group| BulletRange {
                start_index: ranges[group.first].0,
                end_index: ranges[group.last].1,
                preset: if group.ordered {
                    options.numbered_preset
                } else {
                    options.bullet_preset
                },
            })
            .collect();
        bullets.sort_by(|a, b| b.start_index.cmp(&a.start_index));

        ops.extend(bullets.into_iter().map(Operation::CreateBullets));
        ops
    }
}

fn start_line<'a>(node: &'a AstNode<'a>) -> usize {
    node.data.borrow().sourcepos.start.line
}

fn unsupported(value: &NodeValue) -> ConversionError {
    let kind = match value {
        NodeValue::BlockQuote => "block quote",
        NodeValue::CodeBlock(_) => "code block",
        NodeValue::HtmlBlock(_) => "HTML block",
        NodeValue::HtmlInline(_) => "inline HTML",
        NodeValue::ThematicBreak => "thematic break",
        NodeValue::Table(_) | NodeValue::TableRow(_) | NodeValue::TableCell => "table",
        NodeValue::Image(_) => "image",
        NodeValue::FrontMatter(_) => "front matter",
        NodeValue::FootnoteDefinition(_) | NodeValue::FootnoteReference(_) => "footnote",
        _ => "unknown",
    };
    ConversionError::UnsupportedConstruct(kind.to_string())
}
