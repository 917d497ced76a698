//! Instantaneous amplitude and frequency of a single mode.

use std::f64::consts::PI;

use num_complex::Complex;

use crate::analytic::{HilbertTransform, unwrap_phase};

/// Per-sample amplitude and frequency of one mode.
///
/// Both sequences have the same length as the mode.
#[derive(Clone, Debug, PartialEq)]
pub struct InstantaneousRecord {
    /// Magnitude of the analytic signal.
    pub amplitude: Vec<f64>,
    /// Instantaneous frequency in cycles per unit of `dt`.
    pub frequency: Vec<f64>,
}

/// Computes the instantaneous amplitude and frequency of `mode`.
///
/// Frequency is `diff(unwrapped phase) / (2π·dt)`; the last value is
/// repeated so the sequence keeps the mode's length. Frequencies may be
/// negative where the phase runs backwards.
///
/// # Example
///
/// ```
/// use epimode_hilbert::instantaneous;
///
/// let mode: Vec<f64> = (0..140).map(|i| (2.0 * std::f64::consts::PI * i as f64 / 7.0).sin()).collect();
/// let record = instantaneous(&mode, 1.0);
/// assert!((record.frequency[70] - 1.0 / 7.0).abs() < 1e-6);
/// ```
pub fn instantaneous(mode: &[f64], dt: f64) -> InstantaneousRecord {
    let analytic = HilbertTransform::new(mode.len()).analytic(mode);
    from_analytic(&analytic, dt)
}

/// Derives amplitude and frequency from a precomputed analytic signal.
pub(crate) fn from_analytic(analytic: &[Complex<f64>], dt: f64) -> InstantaneousRecord {
    let mut amplitude: Vec<f64> = analytic.iter().map(|c| c.norm()).collect();
    let angles: Vec<f64> = analytic.iter().map(|c| c.arg()).collect();
    let phase = unwrap_phase(&angles);

    let scale = 1.0 / (2.0 * PI * dt);
    let mut frequency: Vec<f64> = phase.windows(2).map(|w| (w[1] - w[0]) * scale).collect();
    match frequency.last().copied() {
        Some(last) => frequency.push(last),
        None => frequency.resize(phase.len(), 0.0),
    }

    let len = amplitude.len().min(frequency.len());
    amplitude.truncate(len);
    frequency.truncate(len);

    InstantaneousRecord {
        amplitude,
        frequency,
    }
}
