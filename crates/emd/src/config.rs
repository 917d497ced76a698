//! Configuration for the empirical mode decomposition.

use std::fmt;
use std::str::FromStr;

use crate::error::EmdError;

/// Interpolation scheme used to build the upper and lower envelopes.
///
/// Both schemes pass through every detected extremum. The choice is always
/// explicit: requesting a name with no implementation is an error, never a
/// silent substitution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EnvelopeMethod {
    /// Natural cubic spline through the extrema.
    #[default]
    CubicSpline,
    /// Piecewise linear interpolation between the extrema.
    Linear,
}

impl EnvelopeMethod {
    /// Canonical lowercase name of the method.
    pub fn name(&self) -> &'static str {
        match self {
            EnvelopeMethod::CubicSpline => "cubic",
            EnvelopeMethod::Linear => "linear",
        }
    }
}

impl fmt::Display for EnvelopeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EnvelopeMethod {
    type Err = EmdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cubic" | "cubic_spline" | "spline" => Ok(EnvelopeMethod::CubicSpline),
            "linear" => Ok(EnvelopeMethod::Linear),
            _ => Err(EmdError::UnsupportedEnvelope(s.to_string())),
        }
    }
}

/// Configuration for [`decompose`](crate::decompose).
///
/// # Example
///
/// ```
/// use epimode_emd::{EmdConfig, EnvelopeMethod};
///
/// let config = EmdConfig::new()
///     .with_max_iterations(500)
///     .with_std_threshold(0.1)
///     .with_envelope(EnvelopeMethod::Linear);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct EmdConfig {
    /// Sifting iteration budget per mode.
    max_iterations: usize,
    /// Normalized-change threshold below which a sift has converged.
    std_threshold: f64,
    /// Ceiling on the number of extracted modes.
    max_modes: usize,
    /// Standard deviation below which a sequence counts as flat.
    residual_tolerance: f64,
    /// Envelope interpolation scheme.
    envelope: EnvelopeMethod,
}

impl EmdConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `max_iterations = 1000`, `std_threshold = 0.2`,
    /// `max_modes = 10`, `residual_tolerance = 1e-10`,
    /// `envelope = CubicSpline`.
    pub fn new() -> Self {
        Self {
            max_iterations: 1000,
            std_threshold: 0.2,
            max_modes: 10,
            residual_tolerance: 1e-10,
            envelope: EnvelopeMethod::CubicSpline,
        }
    }

    /// Sets the sifting iteration budget per mode.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the sifting convergence threshold.
    pub fn with_std_threshold(mut self, std_threshold: f64) -> Self {
        self.std_threshold = std_threshold;
        self
    }

    /// Sets the maximum number of extracted modes.
    pub fn with_max_modes(mut self, max_modes: usize) -> Self {
        self.max_modes = max_modes;
        self
    }

    /// Sets the flatness tolerance for residuals and candidate modes.
    pub fn with_residual_tolerance(mut self, residual_tolerance: f64) -> Self {
        self.residual_tolerance = residual_tolerance;
        self
    }

    /// Sets the envelope interpolation scheme.
    pub fn with_envelope(mut self, envelope: EnvelopeMethod) -> Self {
        self.envelope = envelope;
        self
    }

    /// Returns the sifting iteration budget.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Returns the sifting convergence threshold.
    pub fn std_threshold(&self) -> f64 {
        self.std_threshold
    }

    /// Returns the maximum number of extracted modes.
    pub fn max_modes(&self) -> usize {
        self.max_modes
    }

    /// Returns the flatness tolerance.
    pub fn residual_tolerance(&self) -> f64 {
        self.residual_tolerance
    }

    /// Returns the envelope interpolation scheme.
    pub fn envelope(&self) -> EnvelopeMethod {
        self.envelope
    }

    /// Validates this configuration.
    ///
    /// Returns an error if `max_iterations < 1`, or if `std_threshold` or
    /// `residual_tolerance` is non-finite or negative.
    pub fn validate(&self) -> Result<(), EmdError> {
        if self.max_iterations < 1 {
            return Err(EmdError::InvalidConfig(
                "max_iterations must be >= 1".to_string(),
            ));
        }
        if !self.std_threshold.is_finite() || self.std_threshold < 0.0 {
            return Err(EmdError::InvalidConfig(format!(
                "std_threshold must be finite and >= 0, got {}",
                self.std_threshold
            )));
        }
        if !self.residual_tolerance.is_finite() || self.residual_tolerance < 0.0 {
            return Err(EmdError::InvalidConfig(format!(
                "residual_tolerance must be finite and >= 0, got {}",
                self.residual_tolerance
            )));
        }
        Ok(())
    }
}

impl Default for EmdConfig {
    fn default() -> Self {
        Self::new()
    }
}
