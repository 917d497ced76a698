//! Error types for the epimode-hilbert crate.

/// Error type for all fallible operations in the epimode-hilbert crate.
///
/// A smoothing window with zero total amplitude is not an error: the
/// unsmoothed value is kept.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HilbertError {
    /// Returned when the mode collection is empty (not even a residual).
    #[error("mode collection is empty")]
    EmptyModes,

    /// Returned when a mode's length differs from the first mode's.
    #[error("mode {mode} has {got} samples, expected {expected}")]
    LengthMismatch {
        /// Length of the first mode.
        expected: usize,
        /// Length of the offending mode.
        got: usize,
        /// Index of the offending mode.
        mode: usize,
    },

    /// Returned when a mode contains NaN or infinite samples.
    #[error("mode {0} contains non-finite values")]
    NonFiniteData(usize),

    /// Returned when a configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
