//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};

use epimode_emd::{EmdConfig, EnvelopeMethod};
use epimode_hilbert::{SmoothingBoundary, SpectralConfig};

use crate::config::{DecomposeToml, SpectralToml};

/// Converts the `[decompose]` section into an `EmdConfig`.
pub fn build_emd_config(t: &DecomposeToml) -> Result<EmdConfig> {
    let envelope: EnvelopeMethod = t
        .envelope
        .parse()
        .with_context(|| format!("invalid [decompose] envelope {:?}", t.envelope))?;
    let config = EmdConfig::new()
        .with_max_iterations(t.max_iterations)
        .with_std_threshold(t.std_threshold)
        .with_max_modes(t.max_modes)
        .with_residual_tolerance(t.residual_tolerance)
        .with_envelope(envelope);
    config.validate().context("invalid [decompose] section")?;
    Ok(config)
}

/// Converts the `[spectral]` section into a `SpectralConfig`, applying the
/// optional CLI sampling-interval override.
pub fn build_spectral_config(t: &SpectralToml, dt_override: Option<f64>) -> Result<SpectralConfig> {
    let boundary: SmoothingBoundary = t
        .boundary
        .parse()
        .with_context(|| format!("invalid [spectral] boundary {:?}", t.boundary))?;
    let config = SpectralConfig::new()
        .with_dt(dt_override.unwrap_or(t.dt))
        .with_window(t.window)
        .with_boundary(boundary);
    config.validate().context("invalid [spectral] section")?;
    Ok(config)
}
