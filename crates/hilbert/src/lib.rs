//! # epimode-hilbert
//!
//! Hilbert spectral analysis of intrinsic mode functions: instantaneous
//! amplitude and frequency per sample, amplitude-weighted smoothing and
//! per-mode summary statistics.
//!
//! ## Analysis Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["modes (residual last)"] -->|"analytic_signal()"| B["x + i·H[x]"]
//!     B -->|"|a|, unwrap(arg a)"| C["InstantaneousRecord"]
//!     C -->|"wafa_smooth()"| D["smoothed frequency"]
//!     D -->|"summarize()"| E["SummaryStatistics"]
//!     A -->|"analyze(&modes, &config)?"| F["HilbertSpectrum"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use epimode_hilbert::{SpectralConfig, analyze};
//!
//! let spectrum = analyze(&modes, &SpectralConfig::default())?;
//! for stats in spectrum.statistics().iter() {
//!     println!("period = {:.1}", stats.mean_period);
//! }
//! ```

mod analytic;
mod config;
mod error;
mod instantaneous;
mod smoothing;
mod spectrum;
mod statistics;

pub use analytic::{HilbertTransform, analytic_signal, unwrap_phase};
pub use config::{SmoothingBoundary, SpectralConfig};
pub use error::HilbertError;
pub use instantaneous::{InstantaneousRecord, instantaneous};
pub use smoothing::wafa_smooth;
pub use spectrum::{HilbertSpectrum, analyze};
pub use statistics::{ModeStatistics, SummaryStatistics, summarize};
