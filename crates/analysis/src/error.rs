//! Error types for the epimode-analysis crate.

use epimode_emd::EmdError;
use epimode_hilbert::HilbertError;

/// Error type for all fallible operations in the epimode-analysis crate.
///
/// Wraps decomposition and spectral errors, and covers result
/// serialization failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    /// Decomposition error.
    #[error(transparent)]
    Emd(#[from] EmdError),

    /// Hilbert spectral analysis error.
    #[error(transparent)]
    Hilbert(#[from] HilbertError),

    /// Returned when a result cannot be serialized.
    #[error("serialization failed: {reason}")]
    Serialization {
        /// Description of the serialization failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_emd_transparent() {
        let err = AnalysisError::from(EmdError::InsufficientLength { len: 2, min: 4 });
        assert_eq!(
            err.to_string(),
            "insufficient length: got 2 samples, need at least 4"
        );
    }

    #[test]
    fn error_hilbert_transparent() {
        let err = AnalysisError::from(HilbertError::EmptyModes);
        assert_eq!(err.to_string(), "mode collection is empty");
    }

    #[test]
    fn error_serialization() {
        let err = AnalysisError::Serialization {
            reason: "bad float".into(),
        };
        assert_eq!(err.to_string(), "serialization failed: bad float");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<AnalysisError>();
    }
}
