//! # epimode-analysis
//!
//! Named-signal analysis: empirical mode decomposition followed by Hilbert
//! spectral analysis, with every result kept in an explicit store for
//! later retrieval.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["samples, name, dt"] -->|"Signal::new()"| B["Signal"]
//!     B -->|"decompose()"| C["Decomposition"]
//!     C -->|"to_matrix()"| D["modes + residual"]
//!     D -->|"analyze()"| E["HilbertSpectrum"]
//!     C --> F["AnalysisResult"]
//!     E --> F
//!     F -->|"insert(name)"| G["ResultStore"]
//! ```
//!
//! ## Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`Analyzer`] | Owns configurations and the store; runs the pipeline |
//! | [`AnalysisResult`] | Per-signal bundle, serializable to JSON |
//! | [`ResultStore`] | Thread-safe name to result map |
//! | [`AnalysisError`] | Wraps decomposition and spectral errors |

mod analyzer;
mod error;
mod result;
mod store;

pub use analyzer::Analyzer;
pub use error::AnalysisError;
pub use result::AnalysisResult;
pub use store::ResultStore;
