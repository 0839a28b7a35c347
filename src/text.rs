//! Glyph-grid text measurement.
//!
//! A deliberately simple layout model so the crate has a real end-to-end
//! measurement path: every display column (via unicode-width, so CJK and
//! emoji count double) advances half the text size horizontally, and every
//! line is 1.2x the size tall. Words wrap greedily at the container's
//! content width; a word wider than the whole line stays unbroken and
//! overflows horizontally, which is what the fit search measures against.

use unicode_width::UnicodeWidthStr;

use crate::layout::{Edges, Rect};
use crate::measure::{HostLayout, ScrollSize};

/// Display columns occupied by a string.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Horizontal advance of one display column at `size`, in pixels.
pub const fn column_px(size: u16) -> u16 {
    size.div_ceil(2)
}

/// Height of one line at `size`, in pixels.
pub const fn line_px(size: u16) -> u16 {
    size + size / 5
}

/// Greedy word wrap at `max_cols` display columns. Words wider than a full
/// line get their own line, unbroken. Hard newlines are respected.
pub fn wrap_words(s: &str, max_cols: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for input_line in s.split('\n') {
        let mut current = String::new();
        let mut current_cols = 0;

        for word in input_line.split_whitespace() {
            let word_cols = display_width(word);
            let space_cols = if current.is_empty() { 0 } else { 1 };

            if current_cols + space_cols + word_cols > max_cols && !current.is_empty() {
                lines.push(current);
                current = word.to_string();
                current_cols = word_cols;
            } else {
                if !current.is_empty() {
                    current.push(' ');
                    current_cols += 1;
                }
                current.push_str(word);
                current_cols += word_cols;
            }
        }

        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Scroll extent of `content` at `size`, wrapping at `wrap_px` when given.
pub fn measure(content: &str, size: u16, wrap_px: Option<u16>) -> ScrollSize {
    let col = column_px(size).max(1);

    let lines = match wrap_px {
        Some(px) => wrap_words(content, (px / col).max(1) as usize),
        None => content.split('\n').map(str::to_string).collect(),
    };

    let widest = lines
        .iter()
        .map(|line| display_width(line))
        .max()
        .unwrap_or(0);

    ScrollSize {
        width: u16::try_from(widest)
            .unwrap_or(u16::MAX)
            .saturating_mul(col),
        height: u16::try_from(lines.len())
            .unwrap_or(u16::MAX)
            .saturating_mul(line_px(size).max(1)),
    }
}

/// Single-cell host: one padded container with one text element inside,
/// measured with the glyph-grid model.
///
/// The reference [`HostLayout`] implementation; also what the tests and the
/// demo drive. Either element can be removed at any time to model teardown.
#[derive(Debug)]
pub struct TextCell {
    container_id: String,
    text_id: String,
    padding: Edges,
    container: Option<Rect>,
    text: Option<String>,
    applied: u16,
}

impl TextCell {
    /// Create a cell with no laid-out container and no text content.
    pub fn new(container_id: impl Into<String>, text_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            text_id: text_id.into(),
            padding: Edges::default(),
            container: None,
            text: None,
            applied: 0,
        }
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    /// Lay the container out at the given rect.
    pub fn place(&mut self, rect: Rect) {
        self.container = Some(rect);
    }

    pub fn remove_container(&mut self) {
        self.container = None;
    }

    pub fn set_text(&mut self, content: impl Into<String>) {
        self.text = Some(content.into());
    }

    pub fn remove_text(&mut self) {
        self.text = None;
    }

    /// Size last applied by a fit pass (0 before any pass).
    pub fn applied_size(&self) -> u16 {
        self.applied
    }
}

impl HostLayout for TextCell {
    fn content_box(&self, id: &str) -> Option<Rect> {
        if id != self.container_id {
            return None;
        }
        self.container.map(|rect| rect.content_box(self.padding))
    }

    fn set_text_size(&mut self, id: &str, size: u16) -> bool {
        if id != self.text_id || self.text.is_none() {
            return false;
        }
        self.applied = size;
        true
    }

    fn scroll_size(&self, id: &str) -> Option<ScrollSize> {
        if id != self.text_id {
            return None;
        }
        let content = self.text.as_deref()?;
        let wrap_px = self
            .container
            .map(|rect| rect.content_box(self.padding).width);
        Some(measure(content, self.applied, wrap_px))
    }
}
