//! Best-fit size search.
//!
//! A bounded integer binary search for the largest size whose measured
//! content still fits its container. The search assumes the overflow
//! predicate is monotonic in size (overflowing at every size at or above
//! some threshold, fitting below it). Text reflow can violate this in edge
//! cases, since wrapping may change scroll height non-monotonically with
//! size; the search is not corrected for that and converges to *a* fitting
//! size, not necessarily the largest one, when it happens.

use crate::config::FitConfig;
use crate::layout::Rect;
use crate::measure::ScrollSize;

/// Slack allowed between measured content and the container, in pixels.
pub const TOLERANCE: u16 = 1;

/// Overflow test for one measured candidate: either dimension exceeding the
/// container's content box by more than [`TOLERANCE`] rejects it.
pub fn exceeds(scroll: ScrollSize, content: Rect) -> bool {
    scroll.width > content.width.saturating_add(TOLERANCE)
        || scroll.height > content.height.saturating_add(TOLERANCE)
}

/// Largest size in `[min_size, max_size]` for which `overflows` is false,
/// or `min_size` when every candidate overflows (the caller accepts visual
/// overflow as the floor behavior).
///
/// The predicate is expected to apply the candidate size to the text
/// element and measure it against live layout; that mutation persists
/// between probes and is not restored, so the caller must re-apply the
/// winner (the last probe may have been a losing candidate).
///
/// Runs `O(log((max_size - min_size) / step))` probes. `config` must
/// satisfy [`FitConfig::validate`].
pub fn best_fit(config: FitConfig, mut overflows: impl FnMut(u16) -> bool) -> u16 {
    let mut low = config.min_size;
    let mut high = config.max_size;
    let mut best = config.min_size;

    while low <= high {
        let mid = low + (high - low) / 2;
        if overflows(mid) {
            // too big, shrink
            match mid.checked_sub(config.step) {
                Some(next) => high = next,
                None => break,
            }
        } else {
            // fits, try larger
            best = mid;
            match mid.checked_add(config.step) {
                Some(next) => low = next,
                None => break,
            }
        }
    }

    best
}
