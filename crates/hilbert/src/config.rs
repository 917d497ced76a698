//! Configuration for Hilbert spectral analysis.

use std::fmt;
use std::str::FromStr;

use crate::error::HilbertError;

/// How amplitude-weighted smoothing treats samples within half a window of
/// either end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SmoothingBoundary {
    /// Edge samples keep their unsmoothed value.
    #[default]
    Unsmoothed,
    /// Edge samples are smoothed over the part of the window that lies
    /// inside the sequence.
    Shrink,
}

impl SmoothingBoundary {
    /// Canonical lowercase name of the policy.
    pub fn name(&self) -> &'static str {
        match self {
            SmoothingBoundary::Unsmoothed => "unsmoothed",
            SmoothingBoundary::Shrink => "shrink",
        }
    }
}

impl fmt::Display for SmoothingBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SmoothingBoundary {
    type Err = HilbertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unsmoothed" => Ok(SmoothingBoundary::Unsmoothed),
            "shrink" => Ok(SmoothingBoundary::Shrink),
            _ => Err(HilbertError::InvalidConfig(format!(
                "unknown smoothing boundary: {s:?}"
            ))),
        }
    }
}

/// Configuration for [`analyze`](crate::analyze).
///
/// # Example
///
/// ```
/// use epimode_hilbert::{SmoothingBoundary, SpectralConfig};
///
/// let config = SpectralConfig::new()
///     .with_dt(1.0)
///     .with_window(14)
///     .with_boundary(SmoothingBoundary::Shrink);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct SpectralConfig {
    /// Sampling interval.
    dt: f64,
    /// Smoothing window length in samples.
    window: usize,
    /// Edge policy for smoothing.
    boundary: SmoothingBoundary,
}

impl SpectralConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `dt = 1.0`, `window = 30`, `boundary = Unsmoothed`.
    pub fn new() -> Self {
        Self {
            dt: 1.0,
            window: 30,
            boundary: SmoothingBoundary::Unsmoothed,
        }
    }

    /// Sets the sampling interval.
    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Sets the smoothing window length.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Sets the smoothing edge policy.
    pub fn with_boundary(mut self, boundary: SmoothingBoundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Returns the sampling interval.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the smoothing window length.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Returns the smoothing edge policy.
    pub fn boundary(&self) -> SmoothingBoundary {
        self.boundary
    }

    /// Validates this configuration.
    ///
    /// Returns an error if `dt` is non-finite or not strictly positive.
    pub fn validate(&self) -> Result<(), HilbertError> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(HilbertError::InvalidConfig(format!(
                "dt must be finite and > 0, got {}",
                self.dt
            )));
        }
        Ok(())
    }
}

impl Default for SpectralConfig {
    fn default() -> Self {
        Self::new()
    }
}
