//! Natural cubic spline interpolation on strictly increasing knots.

/// A natural cubic spline (zero second derivative at both ends).
#[derive(Clone, Debug)]
pub(crate) struct NaturalSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivatives at the knots.
    m: Vec<f64>,
}

impl NaturalSpline {
    /// Fits a spline through `(xs[k], ys[k])`.
    ///
    /// Returns `None` if fewer than two knots are given, the slices differ in
    /// length, or the knots are not strictly increasing.
    pub(crate) fn fit(xs: &[f64], ys: &[f64]) -> Option<Self> {
        let n = xs.len();
        if n < 2 || ys.len() != n {
            return None;
        }
        if xs.windows(2).any(|w| w[1] <= w[0]) {
            return None;
        }

        let mut m = vec![0.0; n];
        if n > 2 {
            // Tridiagonal system for interior second derivatives, solved
            // with the Thomas algorithm.
            let inner = n - 2;
            let mut diag = vec![0.0; inner];
            let mut upper = vec![0.0; inner];
            let mut rhs = vec![0.0; inner];
            for k in 1..n - 1 {
                let h0 = xs[k] - xs[k - 1];
                let h1 = xs[k + 1] - xs[k];
                let r = k - 1;
                diag[r] = 2.0 * (h0 + h1);
                upper[r] = h1;
                rhs[r] = 6.0 * ((ys[k + 1] - ys[k]) / h1 - (ys[k] - ys[k - 1]) / h0);
            }

            for r in 1..inner {
                let lower = xs[r + 1] - xs[r];
                let w = lower / diag[r - 1];
                diag[r] -= w * upper[r - 1];
                rhs[r] -= w * rhs[r - 1];
            }
            m[inner] = rhs[inner - 1] / diag[inner - 1];
            for r in (0..inner - 1).rev() {
                m[r + 1] = (rhs[r] - upper[r] * m[r + 2]) / diag[r];
            }
        }

        Some(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            m,
        })
    }

    /// Evaluates the spline at `0, 1, ..., len - 1`.
    ///
    /// Points outside the knot range are extrapolated from the end
    /// polynomial pieces.
    pub(crate) fn eval_grid(&self, len: usize) -> Vec<f64> {
        let last = self.xs.len() - 2;
        let mut k = 0;
        (0..len)
            .map(|i| {
                let t = i as f64;
                while k < last && t > self.xs[k + 1] {
                    k += 1;
                }
                self.eval_piece(k, t)
            })
            .collect()
    }

    fn eval_piece(&self, k: usize, t: f64) -> f64 {
        let h = self.xs[k + 1] - self.xs[k];
        let a = (self.xs[k + 1] - t) / h;
        let b = (t - self.xs[k]) / h;
        a * self.ys[k]
            + b * self.ys[k + 1]
            + ((a * a * a - a) * self.m[k] + (b * b * b - b) * self.m[k + 1]) * h * h / 6.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn passes_through_knots() {
        let xs = [0.0, 2.0, 3.5, 6.0, 9.0];
        let ys = [1.0, -2.0, 4.0, 0.5, 3.0];
        let spline = NaturalSpline::fit(&xs, &ys).unwrap();
        let grid = spline.eval_grid(10);
        assert_abs_diff_eq!(grid[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(grid[2], -2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(grid[6], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(grid[9], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn reproduces_straight_line() {
        let xs = [0.0, 1.5, 4.0, 7.0, 11.0];
        let ys: Vec<f64> = xs.iter().map(|&x| 3.0 - 0.5 * x).collect();
        let spline = NaturalSpline::fit(&xs, &ys).unwrap();
        for (i, v) in spline.eval_grid(12).iter().enumerate() {
            assert_abs_diff_eq!(*v, 3.0 - 0.5 * i as f64, epsilon = 1e-10);
        }
    }

    #[test]
    fn two_knots_is_linear() {
        let spline = NaturalSpline::fit(&[0.0, 4.0], &[0.0, 8.0]).unwrap();
        let grid = spline.eval_grid(5);
        assert_eq!(grid.len(), 5);
        for (i, v) in grid.iter().enumerate() {
            assert_abs_diff_eq!(*v, 2.0 * i as f64, epsilon = 1e-12);
        }
    }

    #[test]
    fn smooth_between_knots() {
        // Samples of sin on a coarse grid; the spline should stay close at
        // the midpoints.
        let xs: Vec<f64> = (0..=10).map(|i| i as f64 * 2.0).collect();
        let ys: Vec<f64> = xs.iter().map(|&x| (x * 0.2).sin()).collect();
        let spline = NaturalSpline::fit(&xs, &ys).unwrap();
        let grid = spline.eval_grid(21);
        for i in (5..16).step_by(2) {
            assert_abs_diff_eq!(grid[i], (i as f64 * 0.2).sin(), epsilon = 1e-2);
        }
    }

    #[test]
    fn rejects_bad_knots() {
        assert!(NaturalSpline::fit(&[0.0], &[1.0]).is_none());
        assert!(NaturalSpline::fit(&[0.0, 1.0], &[1.0]).is_none());
        assert!(NaturalSpline::fit(&[0.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_none());
        assert!(NaturalSpline::fit(&[2.0, 1.0], &[1.0, 2.0]).is_none());
    }
}
