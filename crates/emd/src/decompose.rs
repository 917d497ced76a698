//! Mode extraction loop and the decomposition result.

use epimode_stats::{population_sd, sum_squares};
use serde::Serialize;
use tracing::debug;

use crate::config::EmdConfig;
use crate::error::EmdError;
use crate::extrema::find_extrema;
use crate::series::Signal;
use crate::sift::{SiftReport, sift};

/// Why mode extraction stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The residual's standard deviation fell below the tolerance.
    FlatResidual,
    /// The residual had fewer than two maxima or minima.
    Degenerate,
    /// The configured mode ceiling was reached.
    ModeLimit,
    /// A sifted candidate was flat and was discarded.
    FlatCandidate,
}

/// Result of an empirical mode decomposition.
///
/// Holds the intrinsic mode functions ordered from highest to lowest
/// frequency and the residual trend. The residual is always present, so
/// `sum(imfs) + residual` reproduces the input.
#[derive(Clone, Debug)]
pub struct Decomposition {
    imfs: Vec<Vec<f64>>,
    residual: Vec<f64>,
    sift_reports: Vec<SiftReport>,
    stop_reason: StopReason,
    residual_is_flat: bool,
    reconstruction_error: f64,
    energy_fractions: Vec<f64>,
}

impl Decomposition {
    /// Creates a new `Decomposition`, deriving reconstruction error and
    /// energy fractions against `original`.
    pub(crate) fn new(
        imfs: Vec<Vec<f64>>,
        residual: Vec<f64>,
        sift_reports: Vec<SiftReport>,
        stop_reason: StopReason,
        residual_tolerance: f64,
        original: &[f64],
    ) -> Self {
        let residual_is_flat = population_sd(&residual) < residual_tolerance;

        let mut reconstruction_error = 0.0_f64;
        for (i, &x) in original.iter().enumerate() {
            let sum: f64 = imfs.iter().map(|m| m[i]).sum::<f64>() + residual[i];
            reconstruction_error = reconstruction_error.max((x - sum).abs());
        }

        let energies: Vec<f64> = imfs
            .iter()
            .map(|m| sum_squares(m))
            .chain(std::iter::once(sum_squares(&residual)))
            .collect();
        let total: f64 = energies.iter().sum();
        let energy_fractions = energies
            .iter()
            .map(|&e| if total > 0.0 { e / total } else { 0.0 })
            .collect();

        Self {
            imfs,
            residual,
            sift_reports,
            stop_reason,
            residual_is_flat,
            reconstruction_error,
            energy_fractions,
        }
    }

    /// Returns the intrinsic mode functions, fastest first.
    pub fn imfs(&self) -> &[Vec<f64>] {
        &self.imfs
    }

    /// Returns the mode at `index` (0 is the fastest), or `None` if out of
    /// range.
    pub fn imf(&self, index: usize) -> Option<&[f64]> {
        self.imfs.get(index).map(|v| v.as_slice())
    }

    /// Returns the number of true modes (the residual is not counted).
    pub fn n_imfs(&self) -> usize {
        self.imfs.len()
    }

    /// Returns the residual trend.
    pub fn residual(&self) -> &[f64] {
        &self.residual
    }

    /// Returns the number of components: modes plus the residual.
    pub fn n_components(&self) -> usize {
        self.imfs.len() + 1
    }

    /// Returns an iterator over all components (modes then residual).
    pub fn components(&self) -> impl Iterator<Item = &[f64]> {
        self.imfs
            .iter()
            .map(|v| v.as_slice())
            .chain(std::iter::once(self.residual.as_slice()))
    }

    /// Copies all components into one vector per component, residual last.
    pub fn to_matrix(&self) -> Vec<Vec<f64>> {
        self.components().map(|c| c.to_vec()).collect()
    }

    /// Sums all components back into a signal.
    pub fn reconstruct(&self) -> Vec<f64> {
        let mut out = self.residual.clone();
        for imf in &self.imfs {
            for (o, &v) in out.iter_mut().zip(imf.iter()) {
                *o += v;
            }
        }
        out
    }

    /// Maximum absolute difference between the input and the sum of all
    /// components.
    pub fn reconstruction_error(&self) -> f64 {
        self.reconstruction_error
    }

    /// Share of total energy (`sum(x^2)`) held by each component, residual
    /// last. All zeros when the input has no energy.
    pub fn energy_fractions(&self) -> &[f64] {
        &self.energy_fractions
    }

    /// Per-mode sifting diagnostics, aligned with [`imfs`](Self::imfs).
    pub fn sift_reports(&self) -> &[SiftReport] {
        &self.sift_reports
    }

    /// Why extraction stopped.
    pub fn stop_reason(&self) -> StopReason {
        self.stop_reason
    }

    /// Returns `true` if the residual's standard deviation is below the
    /// configured tolerance.
    pub fn residual_is_flat(&self) -> bool {
        self.residual_is_flat
    }
}

/// Decomposes `signal` into intrinsic mode functions and a residual.
///
/// Modes are extracted by repeated sifting of the running residual until
/// the residual is flat, lacks the extrema for an envelope, or the mode
/// ceiling is reached. Non-convergence of a sift is a warning, never an
/// error.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`EmdError::InvalidConfig`] | `config` fails validation |
///
/// # Example
///
/// ```
/// use epimode_emd::{EmdConfig, Signal, decompose};
///
/// let data: Vec<f64> = (0..200).map(|i| (i as f64 * 0.7).sin() + 0.01 * i as f64).collect();
/// let signal = Signal::new(data).unwrap();
/// let result = decompose(&signal, &EmdConfig::default()).unwrap();
/// assert!(result.reconstruction_error() < 1e-9);
/// ```
pub fn decompose(signal: &Signal, config: &EmdConfig) -> Result<Decomposition, EmdError> {
    config.validate()?;

    let data = signal.as_slice();
    let tol = config.residual_tolerance();
    let mut residual = data.to_vec();
    let mut imfs: Vec<Vec<f64>> = Vec::new();
    let mut reports = Vec::new();

    let stop_reason = loop {
        if imfs.len() >= config.max_modes() {
            break StopReason::ModeLimit;
        }
        if population_sd(&residual) < tol {
            break StopReason::FlatResidual;
        }
        let ext = find_extrema(&residual);
        if !ext.supports_envelopes() {
            debug!(
                mode = imfs.len(),
                maxima = ext.maxima().len(),
                minima = ext.minima().len(),
                "too few extrema; remainder becomes residual"
            );
            break StopReason::Degenerate;
        }

        let (mode, report) = sift(&residual, config, imfs.len());
        if population_sd(&mode) < tol {
            debug!(mode = imfs.len(), "flat candidate discarded");
            break StopReason::FlatCandidate;
        }

        for (r, &m) in residual.iter_mut().zip(mode.iter()) {
            *r -= m;
        }
        debug!(
            mode = imfs.len(),
            iterations = report.iterations(),
            outcome = ?report.outcome(),
            "mode extracted"
        );
        imfs.push(mode);
        reports.push(report);
    };

    debug!(n_imfs = imfs.len(), reason = ?stop_reason, "decomposition complete");
    Ok(Decomposition::new(
        imfs,
        residual,
        reports,
        stop_reason,
        tol,
        data,
    ))
}
