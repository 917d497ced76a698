//! Weighted-amplitude frequency averaging (WAFA).

use epimode_stats::weighted_mean;

use crate::config::SmoothingBoundary;

/// Smooths `frequency` with an amplitude-weighted centered moving average.
///
/// Sample `j` becomes `sum(a_k * f_k) / sum(a_k)` over
/// `k in [j - window/2, j + window/2]`. Averages always read the
/// unsmoothed input. A window whose total amplitude is zero leaves the
/// sample unchanged.
///
/// With [`SmoothingBoundary::Unsmoothed`] only `j in [window/2, N - window/2)`
/// is smoothed; with [`SmoothingBoundary::Shrink`] the edge samples are
/// averaged over the in-range part of their window.
///
/// The two slices are paired up to the shorter length; the output has the
/// length of `frequency`.
pub fn wafa_smooth(
    frequency: &[f64],
    amplitude: &[f64],
    window: usize,
    boundary: SmoothingBoundary,
) -> Vec<f64> {
    let mut smoothed = frequency.to_vec();
    let n = frequency.len().min(amplitude.len());
    if n == 0 {
        return smoothed;
    }
    let half = window / 2;

    let (start, end) = match boundary {
        SmoothingBoundary::Unsmoothed => (half, n.saturating_sub(half)),
        SmoothingBoundary::Shrink => (0, n),
    };

    for (j, out) in smoothed.iter_mut().enumerate().take(end).skip(start) {
        let lo = j.saturating_sub(half);
        let hi = (j + half).min(n - 1);
        if let Some(v) = weighted_mean(&frequency[lo..=hi], &amplitude[lo..=hi]) {
            *out = v;
        }
    }
    smoothed
}
