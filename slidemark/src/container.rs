//! Read access to a Slides text container.
//!
//! Anything that can hand out its styled segments (a shape's text, a table
//! cell) gets Markdown and plain-text reading through [`TextContainer`].

use crate::convert::native_style_to_rich;
use crate::error::ConversionError;
use crate::formats::markdown::{ir_to_markdown, ir_to_markdown_with, MarkdownOptions};
use crate::ir::nodes::Document;
use crate::native::{ElementKind, TextContent, TextElement, TextStyle};
use crate::style::RichStyle;
use tracing::debug;

pub trait TextContainer {
    /// Segments in document order.
    fn styled_segments(&self) -> &[TextElement];

    fn to_ir(&self) -> Document {
        crate::to_ir(self.styled_segments())
    }

    fn read_markdown(&self) -> String {
        let doc = self.to_ir();
        debug!(elements = doc.elements.len(), "reading container as markdown");
        ir_to_markdown(&doc)
    }

    fn read_markdown_with(&self, options: &MarkdownOptions) -> Result<String, ConversionError> {
        ir_to_markdown_with(&self.to_ir(), options)
    }

    /// Raw text of every run, without styling.
    fn plain_text(&self) -> String {
        self.styled_segments()
            .iter()
            .filter_map(|segment| segment.styled_text())
            .map(|(content, _)| content)
            .collect()
    }

    /// Style of the first text run, the style new text inherits.
    fn style(&self) -> Option<&TextStyle> {
        self.styled_segments()
            .iter()
            .find_map(|segment| match &segment.kind {
                ElementKind::TextRun(run) => Some(run),
                _ => None,
            })
            .and_then(|run| run.style.as_ref())
    }

    fn has_text(&self) -> bool {
        self.styled_segments()
            .last()
            .is_some_and(|segment| segment.end_index > 0)
    }

    /// Distinct rich styles in order of first appearance.
    ///
    /// With `skip_whitespace`, runs containing only whitespace are ignored,
    /// unless every run is whitespace.
    fn styles(&self, skip_whitespace: bool) -> Vec<RichStyle> {
        let collect = |skip: bool| {
            let mut styles: Vec<RichStyle> = Vec::new();
            for (content, style) in self
                .styled_segments()
                .iter()
                .filter_map(|segment| segment.styled_text())
            {
                if skip && content.trim().is_empty() {
                    continue;
                }
                let rich = native_style_to_rich(style);
                if !styles.contains(&rich) {
                    styles.push(rich);
                }
            }
            styles
        };

        let styles = collect(skip_whitespace);
        if styles.is_empty() && skip_whitespace {
            collect(false)
        } else {
            styles
        }
    }
}

impl TextContainer for TextContent {
    fn styled_segments(&self) -> &[TextElement] {
        &self.text_elements
    }
}

impl TextContainer for [TextElement] {
    fn styled_segments(&self) -> &[TextElement] {
        self
    }
}
