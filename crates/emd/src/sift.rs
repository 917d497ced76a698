//! Sifting: iterative envelope-mean subtraction extracting one mode.

use serde::Serialize;
use tracing::{trace, warn};

use crate::config::EmdConfig;
use crate::envelope::{Side, envelope};
use crate::extrema::find_extrema;

/// How a sift ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SiftOutcome {
    /// The normalized change dropped below the threshold.
    Converged,
    /// The iteration budget ran out; the last candidate was accepted.
    BudgetExhausted,
    /// The candidate lost the extrema needed for an envelope; it was
    /// accepted as-is.
    EnvelopeUnavailable,
}

/// Diagnostics for the sift that produced one mode.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SiftReport {
    iterations: usize,
    outcome: SiftOutcome,
    final_sd: f64,
}

impl SiftReport {
    /// Number of envelope-mean subtractions performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// How the sift ended.
    pub fn outcome(&self) -> SiftOutcome {
        self.outcome
    }

    /// Returns `true` if the sift met the convergence threshold.
    pub fn converged(&self) -> bool {
        self.outcome == SiftOutcome::Converged
    }

    /// Normalized change measured on the last iteration (NaN if no
    /// iteration ran).
    pub fn final_sd(&self) -> f64 {
        self.final_sd
    }
}

/// Extracts one mode from `residual`.
///
/// Never fails: budget exhaustion and envelope loss both accept the current
/// candidate and are recorded in the returned [`SiftReport`].
pub(crate) fn sift(residual: &[f64], config: &EmdConfig, mode_index: usize) -> (Vec<f64>, SiftReport) {
    let mut h = residual.to_vec();
    let mut iterations = 0;
    let mut final_sd = f64::NAN;
    let mut outcome = SiftOutcome::BudgetExhausted;

    while iterations < config.max_iterations() {
        let ext = find_extrema(&h);
        let upper = envelope(&h, ext.maxima(), Side::Upper, config.envelope());
        let lower = envelope(&h, ext.minima(), Side::Lower, config.envelope());
        let (Some(upper), Some(lower)) = (upper, lower) else {
            outcome = SiftOutcome::EnvelopeUnavailable;
            break;
        };

        let candidate: Vec<f64> = h
            .iter()
            .zip(upper.iter().zip(lower.iter()))
            .map(|(&x, (&u, &l))| x - (u + l) / 2.0)
            .collect();

        let sd = normalized_change(&h, &candidate);
        h = candidate;
        iterations += 1;
        final_sd = sd;
        trace!(mode = mode_index, iteration = iterations, sd, "sift iteration");

        if sd < config.std_threshold() {
            outcome = SiftOutcome::Converged;
            break;
        }
    }

    if outcome == SiftOutcome::BudgetExhausted {
        warn!(
            mode = mode_index,
            iterations,
            sd = final_sd,
            threshold = config.std_threshold(),
            "sifting did not converge; accepting last candidate"
        );
    }

    (
        h,
        SiftReport {
            iterations,
            outcome,
            final_sd,
        },
    )
}

/// Normalized change between successive sift candidates:
/// `sum((prev - next)^2) / sum(prev^2)`, or 0.0 when `prev` is all zeros.
pub(crate) fn normalized_change(prev: &[f64], next: &[f64]) -> f64 {
    let num: f64 = prev
        .iter()
        .zip(next.iter())
        .map(|(&a, &b)| (a - b) * (a - b))
        .sum();
    let den: f64 = prev.iter().map(|&a| a * a).sum();
    if den > 0.0 { num / den } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn normalized_change_basic() {
        // (1 + 0) / (4 + 1) = 0.2
        assert_abs_diff_eq!(
            normalized_change(&[2.0, 1.0], &[1.0, 1.0]),
            0.2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn normalized_change_zero_prev() {
        assert_eq!(normalized_change(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn pure_sine_converges_quickly() {
        let data: Vec<f64> = (0..140)
            .map(|i| 3.0 * (2.0 * PI * i as f64 / 7.0).sin())
            .collect();
        let (mode, report) = sift(&data, &EmdConfig::default(), 0);
        assert!(report.converged());
        assert!(report.iterations() <= 3, "iterations = {}", report.iterations());
        for (m, x) in mode.iter().zip(data.iter()) {
            assert_abs_diff_eq!(*m, *x, epsilon = 1e-6);
        }
    }

    #[test]
    fn budget_exhaustion_is_recovered() {
        let data: Vec<f64> = (0..200)
            .map(|i| {
                let t = i as f64;
                (t * 0.9).sin() + 0.8 * (t * 0.13).sin() + 0.01 * t
            })
            .collect();
        let config = EmdConfig::new().with_max_iterations(1).with_std_threshold(0.0);
        let (mode, report) = sift(&data, &config, 0);
        assert_eq!(report.outcome(), SiftOutcome::BudgetExhausted);
        assert_eq!(report.iterations(), 1);
        assert!(!report.converged());
        assert_eq!(mode.len(), data.len());
        assert!(report.final_sd().is_finite());
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn budget_exhaustion_logs_warning() {
        let data: Vec<f64> = (0..120)
            .map(|i| (i as f64 * 0.7).sin() + 0.5 * (i as f64 * 0.11).sin())
            .collect();
        let config = EmdConfig::new().with_max_iterations(1).with_std_threshold(0.0);
        let buf = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buf.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .finish();
        let (_, report) =
            tracing::subscriber::with_default(subscriber, || sift(&data, &config, 3));
        assert_eq!(report.outcome(), SiftOutcome::BudgetExhausted);

        let logged = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("WARN"), "{logged}");
        assert!(logged.contains("sifting did not converge"), "{logged}");
        assert!(logged.contains("mode=3"), "{logged}");
    }

    #[test]
    fn converged_sift_stays_quiet() {
        let data: Vec<f64> = (0..200).map(|i| (i as f64 * 0.9).sin()).collect();
        let buf = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buf.clone())
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .finish();
        let (_, report) =
            tracing::subscriber::with_default(subscriber, || sift(&data, &EmdConfig::default(), 0));
        assert_ne!(report.outcome(), SiftOutcome::BudgetExhausted);
        assert!(buf.0.lock().unwrap().is_empty());
    }

    #[test]
    fn envelope_loss_keeps_current_candidate() {
        let data: Vec<f64> = (0..30).map(|i| i as f64).collect();
        let (mode, report) = sift(&data, &EmdConfig::default(), 0);
        assert_eq!(report.outcome(), SiftOutcome::EnvelopeUnavailable);
        assert_eq!(report.iterations(), 0);
        assert!(report.final_sd().is_nan());
        assert_eq!(mode, data);
    }

    #[test]
    fn report_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SiftReport>();
    }
}
