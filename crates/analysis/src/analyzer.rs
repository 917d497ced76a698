//! Top-level analyzer: decomposition, spectral analysis and storage.

use std::sync::Arc;

use epimode_emd::{EmdConfig, Signal, decompose};
use epimode_hilbert::{SpectralConfig, analyze};
use tracing::{debug, info};

use crate::error::AnalysisError;
use crate::result::AnalysisResult;
use crate::store::ResultStore;

/// Runs the full pipeline on named signals and keeps the results.
///
/// Each call to [`analyze_signal`](Self::analyze_signal) is independent;
/// the only shared state is the owned [`ResultStore`], so one analyzer can
/// serve several threads through `&self`.
///
/// # Example
///
/// ```
/// use epimode_analysis::Analyzer;
///
/// let analyzer = Analyzer::default();
/// let cases: Vec<f64> = (0..140)
///     .map(|i| 50.0 + 10.0 * (2.0 * std::f64::consts::PI * i as f64 / 7.0).sin())
///     .collect();
/// let result = analyzer.analyze_signal("cases", &cases, 1.0).unwrap();
/// assert!(result.reconstruction_error < 1e-9);
/// assert_eq!(analyzer.list_analyzed_signals(), vec!["cases"]);
/// ```
#[derive(Debug, Default)]
pub struct Analyzer {
    emd: EmdConfig,
    spectral: SpectralConfig,
    store: ResultStore,
}

impl Analyzer {
    /// Creates an analyzer with the given configurations and an empty
    /// store.
    pub fn new(emd: EmdConfig, spectral: SpectralConfig) -> Self {
        Self {
            emd,
            spectral,
            store: ResultStore::new(),
        }
    }

    /// Returns the decomposition configuration.
    pub fn emd_config(&self) -> &EmdConfig {
        &self.emd
    }

    /// Returns the spectral configuration.
    pub fn spectral_config(&self) -> &SpectralConfig {
        &self.spectral
    }

    /// Decomposes `samples`, computes their Hilbert spectrum and stores the
    /// bundle under `name`, replacing any earlier entry.
    ///
    /// `dt` overrides the sampling interval of the spectral configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Emd`] if the signal is too short, contains
    /// non-finite values or the decomposition configuration is invalid,
    /// and [`AnalysisError::Hilbert`] if `dt` is not positive. Nothing is
    /// stored on error.
    pub fn analyze_signal(
        &self,
        name: &str,
        samples: &[f64],
        dt: f64,
    ) -> Result<Arc<AnalysisResult>, AnalysisError> {
        info!(signal = name, n_samples = samples.len(), dt, "analysis started");

        let spectral = self.spectral.clone().with_dt(dt);
        spectral.validate()?;

        let signal = Signal::new(samples.to_vec())?;
        let decomposition = decompose(&signal, &self.emd)?;
        debug!(
            signal = name,
            n_imfs = decomposition.n_imfs(),
            stop_reason = ?decomposition.stop_reason(),
            "decomposition complete"
        );

        let spectrum = analyze(&decomposition.to_matrix(), &spectral)?;
        let result = Arc::new(AnalysisResult::new(
            name,
            samples,
            dt,
            &decomposition,
            spectrum,
        ));

        if self.store.insert(name, Arc::clone(&result)).is_some() {
            debug!(signal = name, "replaced earlier result");
        }
        info!(
            signal = name,
            n_imfs = result.n_imfs,
            reconstruction_error = result.reconstruction_error,
            "analysis complete"
        );
        Ok(result)
    }

    /// Returns the stored bundle for `name`.
    pub fn get_analysis_results(&self, name: &str) -> Option<Arc<AnalysisResult>> {
        self.store.get(name)
    }

    /// Returns the names of all stored analyses in sorted order.
    pub fn list_analyzed_signals(&self) -> Vec<String> {
        self.store.names()
    }

    /// Discards every stored analysis.
    pub fn clear_results(&self) {
        self.store.clear();
    }

    /// Returns the underlying result store.
    pub fn store(&self) -> &ResultStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use epimode_emd::EmdError;
    use epimode_hilbert::HilbertError;

    fn wave(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| (i as f64 * 0.8).sin() + 0.2 * i as f64)
            .collect()
    }

    #[test]
    fn stores_under_name() {
        let analyzer = Analyzer::default();
        let r = analyzer.analyze_signal("flu", &wave(100), 1.0).unwrap();
        let got = analyzer.get_analysis_results("flu").unwrap();
        assert!(Arc::ptr_eq(&r, &got));
        assert_eq!(analyzer.store().len(), 1);
    }

    #[test]
    fn short_signal_is_rejected_and_not_stored() {
        let analyzer = Analyzer::default();
        let err = analyzer.analyze_signal("tiny", &[1.0, 2.0, 3.0], 1.0).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::Emd(EmdError::InsufficientLength { len: 3, min: 4 })
        );
        assert!(analyzer.get_analysis_results("tiny").is_none());
    }

    #[test]
    fn non_positive_dt_is_rejected() {
        let analyzer = Analyzer::default();
        let err = analyzer.analyze_signal("x", &wave(50), -1.0).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Hilbert(HilbertError::InvalidConfig(_))
        ));
        assert!(analyzer.store().is_empty());
    }

    #[test]
    fn invalid_emd_config_is_rejected() {
        let analyzer = Analyzer::new(
            EmdConfig::new().with_max_iterations(0),
            SpectralConfig::default(),
        );
        let err = analyzer.analyze_signal("x", &wave(50), 1.0).unwrap_err();
        assert!(matches!(err, AnalysisError::Emd(EmdError::InvalidConfig(_))));
    }

    #[test]
    fn dt_is_recorded() {
        let analyzer = Analyzer::default();
        let r = analyzer.analyze_signal("weekly", &wave(80), 7.0).unwrap();
        assert_eq!(r.dt, 7.0);
        assert_eq!(analyzer.spectral_config().dt(), 1.0);
    }

    #[test]
    fn clear_results_empties_listing() {
        let analyzer = Analyzer::default();
        analyzer.analyze_signal("a", &wave(60), 1.0).unwrap();
        analyzer.analyze_signal("b", &wave(60), 1.0).unwrap();
        assert_eq!(analyzer.list_analyzed_signals(), vec!["a", "b"]);
        analyzer.clear_results();
        assert!(analyzer.list_analyzed_signals().is_empty());
    }

    #[test]
    fn analyzer_is_send_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<Analyzer>();
    }
}
