//! Resize observation.
//!
//! The fit adapter registers a [`FitTrigger`] against the container's id;
//! the observer raises it whenever that element's size changes. The adapter
//! consumes the trigger on the next layout flush, so rapid successive
//! resizes collapse into a single pending pass.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::layout::Rect;

/// Shared flag raised by a resize notification and consumed by the adapter
/// on the next layout flush.
#[derive(Debug, Clone, Default)]
pub struct FitTrigger {
    raised: Arc<AtomicBool>,
}

impl FitTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the trigger. Raising an already-raised trigger is a no-op.
    pub fn raise(&self) {
        self.raised.store(true, Ordering::SeqCst);
    }

    /// Consume the trigger, returning whether it was raised.
    pub fn take(&self) -> bool {
        self.raised.swap(false, Ordering::SeqCst)
    }

    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }
}

/// Source of element-resize notifications.
///
/// `observe` associates a trigger with an element id; the implementation
/// raises that trigger whenever the element's size changes. `unobserve`
/// releases the association; releasing an id that is not observed must not
/// fail.
pub trait ResizeObserver {
    fn observe(&mut self, id: &str, trigger: FitTrigger);
    fn unobserve(&mut self, id: &str);
}

#[derive(Debug)]
struct Watched {
    trigger: FitTrigger,
    last: Option<(u16, u16)>,
}

/// Frame-driven [`ResizeObserver`].
///
/// Like focus and scroll state, this is host-managed state that persists
/// across frames: the host reports each observed element's rect once per
/// frame after layout, and a size change from the previous report raises
/// the registered trigger. The first report after `observe` counts as a
/// change.
#[derive(Debug, Default)]
pub struct ResizeTracker {
    watched: HashMap<String, Watched>,
}

impl ResizeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report an element's laid-out rect for this frame.
    pub fn report(&mut self, id: &str, rect: Rect) {
        let Some(watched) = self.watched.get_mut(id) else {
            return;
        };
        let size = (rect.width, rect.height);
        if watched.last != Some(size) {
            log::debug!(
                "[resize] {} changed to {}x{}",
                id,
                rect.width,
                rect.height
            );
            watched.last = Some(size);
            watched.trigger.raise();
        }
    }

    pub fn is_observing(&self, id: &str) -> bool {
        self.watched.contains_key(id)
    }
}

impl ResizeObserver for ResizeTracker {
    fn observe(&mut self, id: &str, trigger: FitTrigger) {
        self.watched.insert(
            id.to_string(),
            Watched {
                trigger,
                last: None,
            },
        );
    }

    fn unobserve(&mut self, id: &str) {
        self.watched.remove(id);
    }
}
