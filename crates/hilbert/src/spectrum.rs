//! Hilbert spectrum of a mode collection.

use tracing::debug;

use crate::analytic::HilbertTransform;
use crate::config::SpectralConfig;
use crate::error::HilbertError;
use crate::instantaneous::from_analytic;
use crate::smoothing::wafa_smooth;
use crate::statistics::{SummaryStatistics, summarize};

/// Instantaneous frequency and amplitude of every true mode.
///
/// Stored column-major: one sequence per mode. Use
/// [`frequency`](Self::frequency) / [`amplitude`](Self::amplitude) for
/// `[sample, mode]` indexing or the `*_rows` methods for full
/// sample-major matrices.
#[derive(Clone, Debug)]
pub struct HilbertSpectrum {
    n_samples: usize,
    raw_frequencies: Vec<Vec<f64>>,
    frequencies: Vec<Vec<f64>>,
    amplitudes: Vec<Vec<f64>>,
    statistics: SummaryStatistics,
}

impl HilbertSpectrum {
    /// Returns the number of samples per mode.
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Returns the number of true modes analysed.
    pub fn n_modes(&self) -> usize {
        self.frequencies.len()
    }

    /// Smoothed frequency at `[sample, mode]`.
    pub fn frequency(&self, sample: usize, mode: usize) -> Option<f64> {
        self.frequencies.get(mode)?.get(sample).copied()
    }

    /// Amplitude at `[sample, mode]`.
    pub fn amplitude(&self, sample: usize, mode: usize) -> Option<f64> {
        self.amplitudes.get(mode)?.get(sample).copied()
    }

    /// Smoothed frequency sequences, one per mode.
    pub fn frequencies(&self) -> &[Vec<f64>] {
        &self.frequencies
    }

    /// Frequency sequences before amplitude-weighted smoothing.
    pub fn raw_frequencies(&self) -> &[Vec<f64>] {
        &self.raw_frequencies
    }

    /// Amplitude sequences, one per mode.
    pub fn amplitudes(&self) -> &[Vec<f64>] {
        &self.amplitudes
    }

    /// Smoothed frequencies as a `[sample][mode]` matrix.
    pub fn frequency_rows(&self) -> Vec<Vec<f64>> {
        transpose(&self.frequencies, self.n_samples)
    }

    /// Amplitudes as a `[sample][mode]` matrix.
    pub fn amplitude_rows(&self) -> Vec<Vec<f64>> {
        transpose(&self.amplitudes, self.n_samples)
    }

    /// Per-mode summary statistics.
    pub fn statistics(&self) -> &SummaryStatistics {
        &self.statistics
    }
}

fn transpose(columns: &[Vec<f64>], n_samples: usize) -> Vec<Vec<f64>> {
    (0..n_samples)
        .map(|i| columns.iter().map(|c| c[i]).collect())
        .collect()
}

/// Computes the Hilbert spectrum of a mode collection.
///
/// The last element of `modes` is the residual and is not analysed. Each
/// remaining mode gets its instantaneous amplitude and frequency, the
/// frequency is smoothed with [`wafa_smooth`](crate::wafa_smooth), and
/// summary statistics are taken over the smoothed frequency. A collection
/// holding only the residual yields an empty spectrum.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`HilbertError::InvalidConfig`] | `config` fails validation |
/// | [`HilbertError::EmptyModes`] | `modes` is empty |
/// | [`HilbertError::LengthMismatch`] | modes differ in length |
/// | [`HilbertError::NonFiniteData`] | a mode contains NaN or infinity |
pub fn analyze<M: AsRef<[f64]>>(
    modes: &[M],
    config: &SpectralConfig,
) -> Result<HilbertSpectrum, HilbertError> {
    config.validate()?;

    let first = modes.first().ok_or(HilbertError::EmptyModes)?;
    let n = first.as_ref().len();
    for (i, m) in modes.iter().enumerate() {
        let m = m.as_ref();
        if m.len() != n {
            return Err(HilbertError::LengthMismatch {
                expected: n,
                got: m.len(),
                mode: i,
            });
        }
        if !m.iter().all(|v| v.is_finite()) {
            return Err(HilbertError::NonFiniteData(i));
        }
    }

    let true_modes = &modes[..modes.len() - 1];
    let transform = HilbertTransform::new(n);

    let mut raw_frequencies = Vec::with_capacity(true_modes.len());
    let mut frequencies = Vec::with_capacity(true_modes.len());
    let mut amplitudes = Vec::with_capacity(true_modes.len());

    for mode in true_modes {
        let analytic = transform.analytic(mode.as_ref());
        let record = from_analytic(&analytic, config.dt());
        let smoothed = wafa_smooth(
            &record.frequency,
            &record.amplitude,
            config.window(),
            config.boundary(),
        );
        raw_frequencies.push(record.frequency);
        frequencies.push(smoothed);
        amplitudes.push(record.amplitude);
    }

    let statistics: SummaryStatistics = frequencies
        .iter()
        .zip(amplitudes.iter())
        .map(|(f, a)| summarize(f, a))
        .collect();

    debug!(
        n_modes = frequencies.len(),
        n_samples = n,
        window = config.window(),
        "hilbert spectrum computed"
    );

    Ok(HilbertSpectrum {
        n_samples: n,
        raw_frequencies,
        frequencies,
        amplitudes,
        statistics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn sine(n: usize, period: f64, amp: f64) -> Vec<f64> {
        (0..n)
            .map(|i| amp * (2.0 * PI * i as f64 / period).sin())
            .collect()
    }

    #[test]
    fn residual_is_excluded() {
        let modes = vec![sine(200, 10.0, 1.0), sine(200, 40.0, 2.0), vec![5.0; 200]];
        let spectrum = analyze(&modes, &SpectralConfig::default()).unwrap();
        assert_eq!(spectrum.n_modes(), 2);
        assert_eq!(spectrum.n_samples(), 200);
        assert_eq!(spectrum.statistics().len(), 2);
    }

    #[test]
    fn only_residual_gives_empty_spectrum() {
        let modes = vec![vec![1.0; 50]];
        let spectrum = analyze(&modes, &SpectralConfig::default()).unwrap();
        assert_eq!(spectrum.n_modes(), 0);
        assert!(spectrum.statistics().is_empty());
        assert_eq!(spectrum.frequency_rows().len(), 50);
        assert!(spectrum.frequency_rows()[0].is_empty());
    }

    #[test]
    fn empty_collection_is_an_error() {
        let modes: Vec<Vec<f64>> = Vec::new();
        let err = analyze(&modes, &SpectralConfig::default()).unwrap_err();
        assert_eq!(err, HilbertError::EmptyModes);
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let modes = vec![vec![0.0; 10], vec![0.0; 9]];
        let err = analyze(&modes, &SpectralConfig::default()).unwrap_err();
        assert_eq!(
            err,
            HilbertError::LengthMismatch {
                expected: 10,
                got: 9,
                mode: 1
            }
        );
    }

    #[test]
    fn non_finite_is_an_error() {
        let modes = vec![vec![0.0, f64::NAN, 1.0, 2.0], vec![0.0; 4]];
        let err = analyze(&modes, &SpectralConfig::default()).unwrap_err();
        assert_eq!(err, HilbertError::NonFiniteData(0));
    }

    #[test]
    fn invalid_dt_is_an_error() {
        let modes = vec![vec![0.0; 10], vec![0.0; 10]];
        let err = analyze(&modes, &SpectralConfig::new().with_dt(0.0)).unwrap_err();
        assert!(matches!(err, HilbertError::InvalidConfig(_)));
    }

    #[test]
    fn indexing_matches_rows() {
        let modes = vec![sine(120, 12.0, 1.0), sine(120, 30.0, 1.0), vec![0.0; 120]];
        let spectrum = analyze(&modes, &SpectralConfig::default()).unwrap();
        let rows = spectrum.frequency_rows();
        let amp_rows = spectrum.amplitude_rows();
        assert_eq!(rows.len(), 120);
        assert_eq!(rows[0].len(), 2);
        for s in [0, 59, 119] {
            for m in 0..2 {
                assert_eq!(rows[s][m], spectrum.frequency(s, m).unwrap());
                assert_eq!(amp_rows[s][m], spectrum.amplitude(s, m).unwrap());
            }
        }
        assert!(spectrum.frequency(120, 0).is_none());
        assert!(spectrum.amplitude(0, 2).is_none());
    }

    #[test]
    fn periodic_modes_recover_frequency() {
        let modes = vec![sine(240, 12.0, 1.0), sine(240, 48.0, 4.0), vec![0.0; 240]];
        let spectrum = analyze(&modes, &SpectralConfig::default()).unwrap();
        let stats = spectrum.statistics();
        assert_abs_diff_eq!(stats.mean_frequencies[0], 1.0 / 12.0, epsilon = 1e-6);
        assert_abs_diff_eq!(stats.mean_periods[0], 12.0, epsilon = 1e-4);
        assert_abs_diff_eq!(stats.mean_frequencies[1], 1.0 / 48.0, epsilon = 1e-6);
        assert_abs_diff_eq!(stats.mean_amplitudes[1], 4.0, epsilon = 1e-6);
        assert_eq!(spectrum.raw_frequencies().len(), 2);
    }
}
