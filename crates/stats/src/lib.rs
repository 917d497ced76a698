//! Statistical helper functions for the epimode crates.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Population standard deviation (N denominator, matching NumPy's `std()`).
/// Returns 0.0 if empty.
pub fn population_sd(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    let ss = data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>();
    (ss / data.len() as f64).sqrt()
}

/// Sum of squared values (signal energy).
pub fn sum_squares(data: &[f64]) -> f64 {
    data.iter().map(|&x| x * x).sum()
}

/// Weighted mean `sum(w * x) / sum(w)`.
///
/// Pairs beyond the shorter slice are ignored. Returns `None` when the total
/// weight is not strictly positive.
pub fn weighted_mean(values: &[f64], weights: &[f64]) -> Option<f64> {
    let (num, den) = values
        .iter()
        .zip(weights.iter())
        .fold((0.0, 0.0), |(num, den), (&x, &w)| (num + w * x, den + w));
    if den > 0.0 { Some(num / den) } else { None }
}

/// Largest absolute element-wise difference between two slices.
///
/// Compares up to the length of the shorter slice; 0.0 for empty input.
pub fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0_f64, f64::max)
}

/// Pearson correlation coefficient over the pairs where both values are
/// finite.
///
/// Returns `None` for fewer than 3 such pairs or when either side is
/// constant.
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    let (xs, ys): (Vec<f64>, Vec<f64>) = x
        .iter()
        .zip(y.iter())
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .map(|(&a, &b)| (a, b))
        .unzip();
    if xs.len() < 3 {
        return None;
    }

    let (mx, my) = (mean(&xs), mean(&ys));
    let (sxy, sxx, syy) = xs
        .iter()
        .zip(ys.iter())
        .fold((0.0, 0.0, 0.0), |(sxy, sxx, syy), (&a, &b)| {
            let (dx, dy) = (a - mx, b - my);
            (sxy + dx * dy, sxx + dx * dx, syy + dy * dy)
        });
    let denom = (sxx * syy).sqrt();
    (denom > 0.0).then(|| sxy / denom)
}
