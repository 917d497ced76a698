//! Validated input signal.

use crate::error::EmdError;

/// Minimum number of samples accepted by [`Signal::new`].
pub const MIN_SIGNAL_LEN: usize = 4;

/// A validated, uniformly sampled signal of finite `f64` values.
///
/// Wraps a `Vec<f64>` and guarantees:
/// - length >= [`MIN_SIGNAL_LEN`]
/// - all values are finite (no NaN or infinity)
///
/// # Example
///
/// ```
/// use epimode_emd::Signal;
///
/// let signal = Signal::new(vec![1.0, 3.0, 2.0, 5.0]).unwrap();
/// assert_eq!(signal.len(), 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Signal {
    data: Vec<f64>,
}

impl Signal {
    /// Creates a new `Signal` after validating the data.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`EmdError::InsufficientLength`] | `data.len() < 4` |
    /// | [`EmdError::NonFiniteData`] | any element is NaN or infinite |
    pub fn new(data: Vec<f64>) -> Result<Self, EmdError> {
        if data.len() < MIN_SIGNAL_LEN {
            return Err(EmdError::InsufficientLength {
                len: data.len(),
                min: MIN_SIGNAL_LEN,
            });
        }
        if !data.iter().all(|v| v.is_finite()) {
            return Err(EmdError::NonFiniteData);
        }
        Ok(Self { data })
    }

    /// Returns the samples as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the signal is empty.
    ///
    /// Note: a valid `Signal` is never empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consumes the signal and returns the underlying samples.
    pub fn into_inner(self) -> Vec<f64> {
        self.data
    }
}

impl AsRef<[f64]> for Signal {
    fn as_ref(&self) -> &[f64] {
        &self.data
    }
}

impl TryFrom<&[f64]> for Signal {
    type Error = EmdError;

    fn try_from(data: &[f64]) -> Result<Self, Self::Error> {
        Self::new(data.to_vec())
    }
}
