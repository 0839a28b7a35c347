//! Fit search configuration.

use thiserror::Error;

/// Bounds and granularity for the fit search.
///
/// Immutable for the lifetime of one adapter instance; validated when the
/// adapter is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitConfig {
    /// Largest candidate size, inclusive.
    pub max_size: u16,
    /// Smallest candidate size, inclusive. Also the floor returned when
    /// nothing fits.
    pub min_size: u16,
    /// Search granularity.
    pub step: u16,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            max_size: 32,
            min_size: 8,
            step: 1,
        }
    }
}

impl FitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_size(mut self, value: u16) -> Self {
        self.max_size = value;
        self
    }

    pub fn min_size(mut self, value: u16) -> Self {
        self.min_size = value;
        self
    }

    pub fn step(mut self, value: u16) -> Self {
        self.step = value;
        self
    }

    /// Check the search invariants: ordered bounds and a positive step.
    /// The search loops incorrectly on degenerate bounds, so these are
    /// rejected up front instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step == 0 {
            return Err(ConfigError::ZeroStep);
        }
        if self.min_size > self.max_size {
            return Err(ConfigError::InvertedBounds {
                min: self.min_size,
                max: self.max_size,
            });
        }
        Ok(())
    }
}

/// Configuration rejection reasons.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// `min_size` exceeds `max_size`.
    #[error("min_size {min} exceeds max_size {max}")]
    InvertedBounds { min: u16, max: u16 },

    /// A zero step never advances the search.
    #[error("step must be at least 1")]
    ZeroStep,
}
