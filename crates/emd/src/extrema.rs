//! Local extremum detection.

/// A local extremum of a sampled sequence.
///
/// `position` is fractional when the extremum is a flat plateau: the
/// plateau's midpoint is used.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extremum {
    /// Sample position (plateau midpoint for flat extrema).
    pub position: f64,
    /// Sample value at the extremum.
    pub value: f64,
}

/// Local maxima and minima of a sequence, in increasing position order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Extrema {
    maxima: Vec<Extremum>,
    minima: Vec<Extremum>,
}

impl Extrema {
    /// Returns the local maxima.
    pub fn maxima(&self) -> &[Extremum] {
        &self.maxima
    }

    /// Returns the local minima.
    pub fn minima(&self) -> &[Extremum] {
        &self.minima
    }

    /// Returns `true` when both kinds number at least two, the minimum
    /// needed to build an envelope on each side.
    pub fn supports_envelopes(&self) -> bool {
        self.maxima.len() >= 2 && self.minima.len() >= 2
    }
}

/// Finds the interior local maxima and minima of `data`.
///
/// A sample (or run of equal samples) is a maximum when it is strictly
/// greater than both neighbours of the run, and a minimum when strictly
/// smaller. The first and last samples are never extrema, and a run that
/// touches either end is ignored.
///
/// # Example
///
/// ```
/// use epimode_emd::find_extrema;
///
/// let ext = find_extrema(&[0.0, 2.0, 0.0, -1.0, 0.0]);
/// assert_eq!(ext.maxima().len(), 1);
/// assert_eq!(ext.minima().len(), 1);
/// assert_eq!(ext.minima()[0].position, 3.0);
/// ```
pub fn find_extrema(data: &[f64]) -> Extrema {
    let n = data.len();
    let mut extrema = Extrema::default();
    if n < 3 {
        return extrema;
    }

    let mut i = 1;
    while i < n - 1 {
        // Extend over a plateau of equal values.
        let value = data[i];
        let mut j = i;
        while j + 1 < n && data[j + 1] == value {
            j += 1;
        }
        if j + 1 >= n {
            break;
        }

        let left = data[i - 1];
        let right = data[j + 1];
        let position = (i + j) as f64 / 2.0;
        if value > left && value > right {
            extrema.maxima.push(Extremum { position, value });
        } else if value < left && value < right {
            extrema.minima.push(Extremum { position, value });
        }
        i = j + 1;
    }
    extrema
}
