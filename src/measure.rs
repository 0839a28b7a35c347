//! Host-facing measurement seam.

use crate::layout::Rect;

/// Measured scroll extent of a text element at its applied size, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollSize {
    pub width: u16,
    pub height: u16,
}

impl ScrollSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Live layout access for fit passes.
///
/// Implemented by the host over its element tree. Elements are addressed by
/// id and may be absent at any time, so every method is fallible and is
/// re-checked on every pass. Measurements reflect current layout, never a
/// cached value.
pub trait HostLayout {
    /// Content-box of an element (outer box minus padding). `None` when the
    /// element is absent or not yet laid out.
    fn content_box(&self, id: &str) -> Option<Rect>;

    /// Apply a text size to an element. Returns false when the element is
    /// absent. The applied size persists until the next call.
    fn set_text_size(&mut self, id: &str, size: u16) -> bool;

    /// Scroll extent of an element at its currently applied size.
    fn scroll_size(&self, id: &str) -> Option<ScrollSize>;
}
