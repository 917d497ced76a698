//! Error types for the epimode-emd crate.

/// Error type for all fallible operations in the epimode-emd crate.
///
/// Only structural problems with the input or the configuration are
/// reported here. Numerical edge cases met while sifting (too few extrema,
/// an exhausted iteration budget) are recovered inside the decomposition
/// and reported through [`SiftReport`](crate::SiftReport) and
/// [`StopReason`](crate::StopReason) instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EmdError {
    /// Returned when the input signal is shorter than the minimum length.
    #[error("insufficient length: got {len} samples, need at least {min}")]
    InsufficientLength {
        /// Number of samples provided.
        len: usize,
        /// Minimum number of samples required.
        min: usize,
    },

    /// Returned when the input contains NaN or infinite samples.
    #[error("input signal contains non-finite values")]
    NonFiniteData,

    /// Returned when a configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Returned when an envelope interpolation method is requested by a name
    /// that has no implementation.
    #[error("unsupported envelope method: {0}")]
    UnsupportedEnvelope(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_insufficient_length() {
        let err = EmdError::InsufficientLength { len: 3, min: 4 };
        assert_eq!(
            err.to_string(),
            "insufficient length: got 3 samples, need at least 4"
        );
    }

    #[test]
    fn error_non_finite_data() {
        let err = EmdError::NonFiniteData;
        assert_eq!(err.to_string(), "input signal contains non-finite values");
    }

    #[test]
    fn error_invalid_config() {
        let err = EmdError::InvalidConfig("max_iterations must be >= 1".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: max_iterations must be >= 1"
        );
    }

    #[test]
    fn error_unsupported_envelope() {
        let err = EmdError::UnsupportedEnvelope("akima".into());
        assert_eq!(err.to_string(), "unsupported envelope method: akima");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<EmdError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<EmdError>();
    }
}
