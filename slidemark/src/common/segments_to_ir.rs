//! Groups a flat sequence of Slides text segments into the IR tree.
//!
//! # The High-Level Concept
//!
//! A Slides text container is flat: paragraph markers and text runs follow one
//! another, and the only structure is the bullet descriptor on each paragraph
//! marker. Reconstructing paragraphs and lists means tracking two pieces of
//! open state while walking the segments:
//!
//! - the paragraph currently being filled with runs, and
//! - the list currently open (identified by the `listId` of its bullets).
//!
//! # The Algorithm
//!
//! 1. **Paragraph marker without bullet:**
//!    - Flush the pending paragraph, close any open list into the document
//!    - Subsequent runs build a free-standing paragraph
//!
//! 2. **Paragraph marker with bullet:**
//!    - Flush the pending paragraph
//!    - Same `listId` as the open list: append a new item at the bullet's nesting level
//!    - Otherwise: close the open list and start a new one with this item
//!
//! 3. **Text run (or auto text):**
//!    - Convert the native style to a [`FullStyle`](crate::style::FullStyle)
//!    - Each `\n` inside the content ends the current paragraph; the text before
//!      it joins the paragraph, the newline itself is structural and dropped
//!
//! 4. **Completion:**
//!    - Flush the pending paragraph and close the open list
//!
//! List membership is decided by `listId`, never by nesting level, so a
//! nested item and its parent land in the same [`List`] element with different
//! `nesting_level` values.

use crate::convert::native_style_to_full;
use crate::ir::nodes::{Document, Element, List, ListItem, Paragraph};
use crate::native::glyph;
use crate::native::{Bullet, ElementKind, TextElement};
use crate::style::{FullStyle, Run};

/// Converts Slides text segments into an IR [`Document`].
pub fn segments_to_ir(segments: &[TextElement]) -> Document {
    let mut builder = Builder::default();

    for segment in segments {
        match &segment.kind {
            ElementKind::ParagraphMarker(marker) => match &marker.bullet {
                Some(bullet) => builder.start_list_item(bullet),
                None => builder.start_plain_paragraph(),
            },
            ElementKind::TextRun(_) | ElementKind::AutoText(_) => {
                if let Some((content, style)) = segment.styled_text() {
                    builder.push_text(content, native_style_to_full(style));
                }
            }
        }
    }

    builder.finish()
}

#[derive(Debug)]
struct OpenList {
    list_id: Option<String>,
    list: List,
}

#[derive(Debug, Default)]
struct Builder {
    document: Document,
    paragraph: Paragraph,
    open_list: Option<OpenList>,
}

impl Builder {
    fn start_plain_paragraph(&mut self) {
        self.flush_pending();
        self.close_list();
    }

    fn start_list_item(&mut self, bullet: &Bullet) {
        self.flush_pending();

        let continues_open_list = matches!(
            &self.open_list,
            Some(open) if open.list_id == bullet.list_id
        );
        if !continues_open_list {
            self.close_list();
            let ordered = bullet.glyph.as_deref().is_some_and(glyph::is_numbered);
            self.open_list = Some(OpenList {
                list_id: bullet.list_id.clone(),
                list: List {
                    items: Vec::new(),
                    ordered,
                },
            });
        }

        if let Some(open) = self.open_list.as_mut() {
            open.list.items.push(ListItem {
                paragraphs: Vec::new(),
                nesting_level: bullet.nesting_level.unwrap_or(0),
                glyph: bullet.glyph.clone(),
            });
        }
    }

    fn push_text(&mut self, content: &str, style: FullStyle) {
        let mut pieces = content.split('\n').peekable();
        while let Some(piece) = pieces.next() {
            if !piece.is_empty() {
                self.paragraph.runs.push(Run::new(piece, style.clone()));
            }
            // Every piece except the last was followed by a newline
            if pieces.peek().is_some() {
                self.end_paragraph();
            }
        }
    }

    /// Close the current paragraph at a line break, even when it is empty.
    fn end_paragraph(&mut self) {
        let paragraph = std::mem::take(&mut self.paragraph);
        match self.open_list.as_mut() {
            Some(open) => {
                if let Some(item) = open.list.items.last_mut() {
                    if !paragraph.is_empty() {
                        item.paragraphs.push(paragraph);
                    }
                } else if !paragraph.is_empty() {
                    self.document.elements.push(Element::Paragraph(paragraph));
                }
            }
            None => self.document.elements.push(Element::Paragraph(paragraph)),
        }
    }

    /// Flush a paragraph that was not terminated by a newline.
    fn flush_pending(&mut self) {
        if !self.paragraph.is_empty() {
            self.end_paragraph();
        }
    }

    fn close_list(&mut self) {
        if let Some(open) = self.open_list.take() {
            if !open.list.items.is_empty() {
                self.document.elements.push(Element::List(open.list));
            }
        }
    }

    fn finish(mut self) -> Document {
        self.flush_pending();
        self.close_list();
        self.document
    }
}
