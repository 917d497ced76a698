//! Analytic signal via the FFT-based Hilbert transform, and phase
//! unwrapping.

use std::f64::consts::PI;
use std::sync::Arc;

use num_complex::Complex;
use rustfft::{Fft, FftPlanner};

/// Planned forward/inverse FFT pair for one signal length.
///
/// Planning dominates the cost for short series, so one transform is built
/// per spectrum and reused across all modes of equal length.
pub struct HilbertTransform {
    len: usize,
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
}

impl HilbertTransform {
    /// Plans transforms for signals of length `len`.
    pub fn new(len: usize) -> Self {
        let mut planner = FftPlanner::new();
        Self {
            len,
            forward: planner.plan_fft_forward(len),
            inverse: planner.plan_fft_inverse(len),
        }
    }

    /// Returns the planned signal length.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if planned for empty signals.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Computes the analytic signal `x + i·H[x]`.
    ///
    /// The real part reproduces `signal`. Negative frequencies are zeroed
    /// and positive ones doubled; the DC bin and, for even lengths, the
    /// Nyquist bin are kept as-is.
    ///
    /// A signal whose length differs from the planned one is transformed
    /// with a fresh plan, so the output always has `signal.len()` samples.
    pub fn analytic(&self, signal: &[f64]) -> Vec<Complex<f64>> {
        let n = signal.len();
        if n != self.len {
            return HilbertTransform::new(n).analytic(signal);
        }
        if n == 0 {
            return Vec::new();
        }

        let mut buf: Vec<Complex<f64>> = signal.iter().map(|&x| Complex::new(x, 0.0)).collect();
        self.forward.process(&mut buf);

        let half = n / 2;
        for (k, c) in buf.iter_mut().enumerate() {
            let gain = if k == 0 || (n % 2 == 0 && k == half) {
                1.0
            } else if k <= (n - 1) / 2 {
                2.0
            } else {
                0.0
            };
            *c *= gain;
        }

        self.inverse.process(&mut buf);

        // rustfft is unnormalized
        let norm = 1.0 / n as f64;
        buf.into_iter().map(|c| c * norm).collect()
    }
}

/// Computes the analytic signal of `signal` with a one-off FFT plan.
///
/// Prefer [`HilbertTransform`] when transforming many signals of the same
/// length.
///
/// # Example
///
/// ```
/// use epimode_hilbert::analytic_signal;
///
/// let x: Vec<f64> = (0..64).map(|i| (i as f64 * std::f64::consts::PI / 8.0).cos()).collect();
/// let a = analytic_signal(&x);
/// assert!((a[3].norm() - 1.0).abs() < 1e-9);
/// ```
pub fn analytic_signal(signal: &[f64]) -> Vec<Complex<f64>> {
    HilbertTransform::new(signal.len()).analytic(signal)
}

/// Unwraps a phase sequence by removing jumps larger than π.
///
/// Each difference between consecutive samples is mapped into `[-π, π)`
/// (a jump of exactly π keeps its sign) and the accumulated correction is
/// added to every later sample.
pub fn unwrap_phase(phase: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(phase.len());
    let Some(&first) = phase.first() else {
        return out;
    };
    out.push(first);

    let mut correction = 0.0;
    for w in phase.windows(2) {
        let d = w[1] - w[0];
        if d.abs() >= PI {
            let mut wrapped = (d + PI).rem_euclid(2.0 * PI) - PI;
            if wrapped == -PI && d > 0.0 {
                wrapped = PI;
            }
            correction += wrapped - d;
        }
        out.push(w[1] + correction);
    }
    out
}
