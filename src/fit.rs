//! Auto-fit lifecycle adapter.
//!
//! Binds the fit search to a container/text element pair in the host tree.
//! The adapter decides *when* a pass runs: once after the first layout
//! following [`AutoFit::attach`], and again after any layout flush that
//! follows a container resize. The host drives it with two calls per frame:
//! feed the observer current rects, then call [`AutoFit::after_layout`].

use crate::config::{ConfigError, FitConfig};
use crate::engine;
use crate::measure::HostLayout;
use crate::observe::{FitTrigger, ResizeObserver};
use crate::state::State;

/// Attachment phase. Only `Attached` permits fit passes; `Detached` is
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Unattached,
    Attached,
    Detached,
}

/// Fits a text element's size to its container.
///
/// Owns the observable size cell and the single resize observation. The
/// cell starts at `max_size` and is overwritten by every completed pass;
/// a pass with a missing container or text element is a silent no-op that
/// leaves the previous size in place.
pub struct AutoFit {
    container_id: String,
    text_id: String,
    config: FitConfig,
    size: State<u16>,
    trigger: FitTrigger,
    phase: Phase,
}

impl AutoFit {
    /// Create an adapter for the given element pair. Rejects degenerate
    /// bounds rather than searching incorrectly.
    pub fn new(
        container_id: impl Into<String>,
        text_id: impl Into<String>,
        config: FitConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            container_id: container_id.into(),
            text_id: text_id.into(),
            size: State::new(config.max_size),
            trigger: FitTrigger::new(),
            config,
            phase: Phase::Unattached,
        })
    }

    /// Observable current size. Clones share the same cell.
    pub fn size(&self) -> &State<u16> {
        &self.size
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn text_id(&self) -> &str {
        &self.text_id
    }

    /// Attach to the host: observe the container and schedule the initial
    /// pass for the first layout flush. Attaching in any other phase does
    /// nothing.
    pub fn attach(&mut self, observer: &mut dyn ResizeObserver) {
        if self.phase != Phase::Unattached {
            log::debug!("[autofit] attach ignored in phase {:?}", self.phase);
            return;
        }
        observer.observe(&self.container_id, self.trigger.clone());
        // first after_layout runs the initial pass
        self.trigger.raise();
        self.phase = Phase::Attached;
        log::debug!(
            "[autofit] attached to container {} / text {}",
            self.container_id,
            self.text_id
        );
    }

    /// Detach and release the observation. Idempotent; the observation is
    /// released exactly once.
    pub fn detach(&mut self, observer: &mut dyn ResizeObserver) {
        if self.phase == Phase::Attached {
            observer.unobserve(&self.container_id);
            log::debug!("[autofit] detached from container {}", self.container_id);
        }
        self.phase = Phase::Detached;
    }

    /// Layout-flush entry point: the host calls this once per frame after
    /// layout. Runs a pass when one is pending; returns the applied size if
    /// a pass completed.
    pub fn after_layout(&mut self, host: &mut dyn HostLayout) -> Option<u16> {
        if self.phase != Phase::Attached {
            return None;
        }
        if !self.trigger.take() {
            return None;
        }
        self.run_pass(host)
    }

    /// Run a fit pass immediately against current layout, outside the
    /// scheduled cadence. No-op unless attached.
    pub fn request_fit(&mut self, host: &mut dyn HostLayout) -> Option<u16> {
        if self.phase != Phase::Attached {
            return None;
        }
        self.run_pass(host)
    }

    fn run_pass(&mut self, host: &mut dyn HostLayout) -> Option<u16> {
        let Some(content) = host.content_box(&self.container_id) else {
            log::debug!("[autofit] skip: container {} absent", self.container_id);
            return None;
        };
        if content.is_empty() {
            log::debug!(
                "[autofit] skip: container {} has no laid-out area",
                self.container_id
            );
            return None;
        }
        if host.scroll_size(&self.text_id).is_none() {
            log::debug!("[autofit] skip: text {} absent", self.text_id);
            return None;
        }

        let text_id = &self.text_id;
        let mut vanished = false;
        let best = engine::best_fit(self.config, |candidate| {
            if !host.set_text_size(text_id, candidate) {
                vanished = true;
                return true;
            }
            match host.scroll_size(text_id) {
                Some(scroll) => engine::exceeds(scroll, content),
                None => {
                    vanished = true;
                    true
                }
            }
        });
        if vanished {
            log::debug!("[autofit] skip: text {} vanished mid-pass", text_id);
            return None;
        }

        // last probe may have been a losing candidate
        host.set_text_size(text_id, best);
        self.size.set(best);
        log::debug!(
            "[autofit] text {} fit at {}px in {}x{}",
            text_id,
            best,
            content.width,
            content.height
        );
        Some(best)
    }
}
