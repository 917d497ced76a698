//! Upper and lower envelope construction through detected extrema.

use crate::config::EnvelopeMethod;
use crate::extrema::Extremum;
use crate::spline::NaturalSpline;

/// Which side of the signal an envelope bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Upper,
    Lower,
}

/// Builds an envelope over `signal` through `points`.
///
/// One extra knot is placed at each end of the signal. Its value is the
/// straight-line extrapolation of the two nearest extrema, clamped so an
/// upper envelope never falls below the end sample and a lower envelope
/// never rises above it.
///
/// Returns `None` when fewer than two extrema are available.
pub(crate) fn envelope(
    signal: &[f64],
    points: &[Extremum],
    side: Side,
    method: EnvelopeMethod,
) -> Option<Vec<f64>> {
    let n = signal.len();
    if points.len() < 2 || n < 2 {
        return None;
    }

    let first = 0.0;
    let last = (n - 1) as f64;
    let left = end_value(points[0], points[1], first, signal[0], side);
    let right = end_value(
        points[points.len() - 1],
        points[points.len() - 2],
        last,
        signal[n - 1],
        side,
    );

    let mut xs = Vec::with_capacity(points.len() + 2);
    let mut ys = Vec::with_capacity(points.len() + 2);
    xs.push(first);
    ys.push(left);
    for p in points {
        xs.push(p.position);
        ys.push(p.value);
    }
    xs.push(last);
    ys.push(right);

    match method {
        EnvelopeMethod::CubicSpline => NaturalSpline::fit(&xs, &ys).map(|s| s.eval_grid(n)),
        EnvelopeMethod::Linear => Some(linear_grid(&xs, &ys, n)),
    }
}

/// Extrapolates the line through `near` and `far` to `at`, then clamps it
/// against the end sample.
fn end_value(near: Extremum, far: Extremum, at: f64, sample: f64, side: Side) -> f64 {
    let slope = (far.value - near.value) / (far.position - near.position);
    let extrapolated = near.value + slope * (at - near.position);
    match side {
        Side::Upper => extrapolated.max(sample),
        Side::Lower => extrapolated.min(sample),
    }
}

/// Piecewise-linear interpolation of strictly increasing knots at
/// `0, 1, ..., len - 1`.
fn linear_grid(xs: &[f64], ys: &[f64], len: usize) -> Vec<f64> {
    let last = xs.len() - 2;
    let mut k = 0;
    (0..len)
        .map(|i| {
            let t = i as f64;
            while k < last && t > xs[k + 1] {
                k += 1;
            }
            let w = (t - xs[k]) / (xs[k + 1] - xs[k]);
            ys[k] + w * (ys[k + 1] - ys[k])
        })
        .collect()
}
