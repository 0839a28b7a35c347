//! Auto-fit text sizing for element-tree UIs.
//!
//! Finds the largest text size, within configured bounds, whose measured
//! content still fits its container, and keeps that size current as the
//! container resizes. The search runs against live layout through the
//! [`HostLayout`] seam; the [`AutoFit`] adapter decides when passes run and
//! publishes the result through an observable [`State`] cell.

pub mod config;
pub mod engine;
pub mod fit;
pub mod layout;
pub mod measure;
pub mod observe;
pub mod state;
pub mod text;

pub use config::{ConfigError, FitConfig};
pub use fit::{AutoFit, Phase};
pub use layout::{Edges, Rect};
pub use measure::{HostLayout, ScrollSize};
pub use observe::{FitTrigger, ResizeObserver, ResizeTracker};
pub use state::{NotifyHandle, State};
pub use text::TextCell;
