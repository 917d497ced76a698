//! The per-signal analysis bundle.

use epimode_emd::{Decomposition, SiftReport, StopReason};
use epimode_hilbert::{HilbertSpectrum, SummaryStatistics};
use serde::Serialize;

use crate::error::AnalysisError;

/// Everything computed for one named signal.
///
/// `imfs` holds the extracted modes followed by the residual, so
/// `imfs.len() == n_imfs + 1`. `frequency_matrix` and `amplitude_matrix`
/// are indexed `[sample][mode]` with one column per true mode (the residual
/// is never analysed).
#[derive(Clone, Debug, Serialize)]
pub struct AnalysisResult {
    /// Name the signal was analysed under.
    pub signal_name: String,
    /// Input samples.
    pub original_signal: Vec<f64>,
    /// Sampling interval.
    pub dt: f64,
    /// Modes from fastest to slowest, residual last.
    pub imfs: Vec<Vec<f64>>,
    /// Number of true modes (residual excluded).
    pub n_imfs: usize,
    /// Smoothed instantaneous frequency, `[sample][mode]`.
    pub frequency_matrix: Vec<Vec<f64>>,
    /// Instantaneous amplitude, `[sample][mode]`.
    pub amplitude_matrix: Vec<Vec<f64>>,
    /// Per-mode summary statistics.
    pub statistics: SummaryStatistics,
    /// Share of total energy per component, residual last.
    pub energy_fractions: Vec<f64>,
    /// Sift diagnostics per true mode.
    pub sift_reports: Vec<SiftReport>,
    /// Why mode extraction stopped.
    pub stop_reason: StopReason,
    /// Whether the residual is numerically flat.
    pub residual_is_flat: bool,
    /// Largest absolute deviation of `sum(imfs)` from the input.
    pub reconstruction_error: f64,
}

impl AnalysisResult {
    pub(crate) fn new(
        name: &str,
        samples: &[f64],
        dt: f64,
        decomposition: &Decomposition,
        spectrum: HilbertSpectrum,
    ) -> Self {
        Self {
            signal_name: name.to_string(),
            original_signal: samples.to_vec(),
            dt,
            imfs: decomposition.to_matrix(),
            n_imfs: decomposition.n_imfs(),
            frequency_matrix: spectrum.frequency_rows(),
            amplitude_matrix: spectrum.amplitude_rows(),
            statistics: spectrum.statistics().clone(),
            energy_fractions: decomposition.energy_fractions().to_vec(),
            sift_reports: decomposition.sift_reports().to_vec(),
            stop_reason: decomposition.stop_reason(),
            residual_is_flat: decomposition.residual_is_flat(),
            reconstruction_error: decomposition.reconstruction_error(),
        }
    }

    /// Returns the residual trend.
    pub fn residual(&self) -> &[f64] {
        self.imfs.last().map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the number of samples.
    pub fn n_samples(&self) -> usize {
        self.original_signal.len()
    }

    /// Smoothed frequency sequence of true mode `mode`.
    pub fn mode_frequencies(&self, mode: usize) -> Option<Vec<f64>> {
        column(&self.frequency_matrix, mode, self.n_imfs)
    }

    /// Amplitude sequence of true mode `mode`.
    pub fn mode_amplitudes(&self, mode: usize) -> Option<Vec<f64>> {
        column(&self.amplitude_matrix, mode, self.n_imfs)
    }

    /// Serializes the bundle to pretty-printed JSON.
    ///
    /// Non-finite values (such as the `final_sd` of a sift that never
    /// iterated) are written as `null`.
    pub fn to_json(&self) -> Result<String, AnalysisError> {
        serde_json::to_string_pretty(self).map_err(|e| AnalysisError::Serialization {
            reason: e.to_string(),
        })
    }
}

fn column(rows: &[Vec<f64>], mode: usize, n_modes: usize) -> Option<Vec<f64>> {
    if mode >= n_modes {
        return None;
    }
    rows.iter().map(|row| row.get(mode).copied()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use epimode_emd::{EmdConfig, Signal, decompose};
    use epimode_hilbert::{SpectralConfig, analyze};

    fn bundle() -> AnalysisResult {
        let samples: Vec<f64> = (0..120)
            .map(|i| (i as f64 * 0.9).sin() + 0.3 * (i as f64 * 0.15).sin())
            .collect();
        let signal = Signal::new(samples.clone()).unwrap();
        let decomposition = decompose(&signal, &EmdConfig::default()).unwrap();
        let spectrum = analyze(&decomposition.to_matrix(), &SpectralConfig::default()).unwrap();
        AnalysisResult::new("test", &samples, 1.0, &decomposition, spectrum)
    }

    #[test]
    fn shapes_are_consistent() {
        let r = bundle();
        assert_eq!(r.imfs.len(), r.n_imfs + 1);
        assert_eq!(r.frequency_matrix.len(), 120);
        assert_eq!(r.amplitude_matrix.len(), 120);
        assert!(r.frequency_matrix.iter().all(|row| row.len() == r.n_imfs));
        assert_eq!(r.statistics.len(), r.n_imfs);
        assert_eq!(r.energy_fractions.len(), r.n_imfs + 1);
        assert_eq!(r.sift_reports.len(), r.n_imfs);
        assert_eq!(r.residual().len(), 120);
    }

    #[test]
    fn mode_columns_match_spectrum() {
        let r = bundle();
        assert!(r.n_imfs > 0);
        let col = r.mode_frequencies(0).unwrap();
        assert_eq!(col.len(), 120);
        assert_eq!(col[10], r.frequency_matrix[10][0]);
        let amp = r.mode_amplitudes(r.n_imfs - 1).unwrap();
        assert_eq!(amp[57], r.amplitude_matrix[57][r.n_imfs - 1]);
        assert!(r.mode_frequencies(r.n_imfs).is_none());
    }

    #[test]
    fn to_json_contains_fields() {
        let json = bundle().to_json().unwrap();
        assert!(json.contains("\"signal_name\": \"test\""));
        assert!(json.contains("\"mean_frequencies\""));
        assert!(json.contains("\"energy_fractions\""));
        assert!(json.contains("\"stop_reason\""));
        assert!(json.contains("\"frequency_matrix\""));
        assert!(json.contains("\"amplitude_matrix\""));
    }
}
