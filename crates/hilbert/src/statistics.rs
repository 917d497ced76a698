//! Per-mode summary statistics.

use epimode_stats::{mean, weighted_mean};
use serde::Serialize;

/// Summary of one mode's instantaneous frequency and amplitude.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ModeStatistics {
    /// Amplitude-weighted mean frequency (0.0 when total amplitude is zero).
    pub mean_frequency: f64,
    /// `1 / mean_frequency`, or 0.0 when the mean frequency is zero.
    pub mean_period: f64,
    /// Unweighted mean amplitude.
    pub mean_amplitude: f64,
}

/// Summarizes a mode's (smoothed) frequency and amplitude sequences.
pub fn summarize(frequency: &[f64], amplitude: &[f64]) -> ModeStatistics {
    let mean_frequency = weighted_mean(frequency, amplitude).unwrap_or(0.0);
    let mean_period = if mean_frequency != 0.0 {
        1.0 / mean_frequency
    } else {
        0.0
    };
    ModeStatistics {
        mean_frequency,
        mean_period,
        mean_amplitude: mean(amplitude),
    }
}

/// Summary statistics for all true modes, one entry per mode.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SummaryStatistics {
    /// Amplitude-weighted mean frequency per mode.
    pub mean_frequencies: Vec<f64>,
    /// Mean period per mode.
    pub mean_periods: Vec<f64>,
    /// Mean amplitude per mode.
    pub mean_amplitudes: Vec<f64>,
}

impl SummaryStatistics {
    /// Returns the number of modes summarized.
    pub fn len(&self) -> usize {
        self.mean_frequencies.len()
    }

    /// Returns `true` if no modes are summarized.
    pub fn is_empty(&self) -> bool {
        self.mean_frequencies.is_empty()
    }

    /// Returns the statistics of mode `index`.
    pub fn get(&self, index: usize) -> Option<ModeStatistics> {
        Some(ModeStatistics {
            mean_frequency: *self.mean_frequencies.get(index)?,
            mean_period: *self.mean_periods.get(index)?,
            mean_amplitude: *self.mean_amplitudes.get(index)?,
        })
    }

    /// Iterates over per-mode statistics.
    pub fn iter(&self) -> impl Iterator<Item = ModeStatistics> + '_ {
        (0..self.len()).filter_map(|i| self.get(i))
    }
}

impl FromIterator<ModeStatistics> for SummaryStatistics {
    fn from_iter<I: IntoIterator<Item = ModeStatistics>>(iter: I) -> Self {
        let mut out = SummaryStatistics::default();
        for s in iter {
            out.mean_frequencies.push(s.mean_frequency);
            out.mean_periods.push(s.mean_period);
            out.mean_amplitudes.push(s.mean_amplitude);
        }
        out
    }
}
