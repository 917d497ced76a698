//! # epimode-emd
//!
//! Empirical mode decomposition (EMD) of noisy, non-stationary series such
//! as daily case counts.
//!
//! ## Decomposition Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["Signal::new(data)?"] -->|"validate"| B["Signal"]
//!     B -->|"decompose(&signal, &config)?"| C["Decomposition"]
//!     C --> D[".imfs(): fastest first"]
//!     C --> E[".residual()"]
//!     C --> F[".energy_fractions()"]
//!     C --> G[".sift_reports()"]
//! ```
//!
//! Each mode is extracted by sifting: the mean of the upper and lower
//! envelopes through the local extrema is subtracted until the normalized
//! change between iterations drops below `std_threshold`. Extraction stops
//! when the residual is flat, has fewer than two maxima or minima, or the
//! mode ceiling is reached.
//!
//! ## Envelope Methods
//!
//! | Method | Name | Interpolation |
//! |--------|------|---------------|
//! | [`EnvelopeMethod::CubicSpline`] | `cubic` | natural cubic spline |
//! | [`EnvelopeMethod::Linear`] | `linear` | piecewise linear |
//!
//! ## Quick Start
//!
//! ```ignore
//! use epimode_emd::{EmdConfig, Signal, decompose};
//!
//! let signal = Signal::new(data)?;
//! let result = decompose(&signal, &EmdConfig::default())?;
//!
//! for imf in result.imfs() {
//!     println!("len = {}", imf.len());
//! }
//! ```

mod config;
mod decompose;
mod envelope;
mod error;
mod extrema;
mod series;
mod sift;
mod spline;

pub use config::{EmdConfig, EnvelopeMethod};
pub use decompose::{Decomposition, StopReason, decompose};
pub use error::EmdError;
pub use extrema::{Extrema, Extremum, find_extrema};
pub use series::{MIN_SIGNAL_LEN, Signal};
pub use sift::{SiftOutcome, SiftReport};
