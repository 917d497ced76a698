use serde::Deserialize;

/// Top-level Epimode configuration.
///
/// Every section is optional; missing fields take the library defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EpimodeConfig {
    /// Empirical mode decomposition settings.
    #[serde(default)]
    pub decompose: DecomposeToml,

    /// Hilbert spectral analysis settings.
    #[serde(default)]
    pub spectral: SpectralToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecomposeToml {
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    #[serde(default = "default_std_threshold")]
    pub std_threshold: f64,
    #[serde(default = "default_max_modes")]
    pub max_modes: usize,
    #[serde(default = "default_residual_tolerance")]
    pub residual_tolerance: f64,
    #[serde(default = "default_envelope")]
    pub envelope: String,
}

impl Default for DecomposeToml {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            std_threshold: default_std_threshold(),
            max_modes: default_max_modes(),
            residual_tolerance: default_residual_tolerance(),
            envelope: default_envelope(),
        }
    }
}

fn default_max_iterations() -> usize {
    1000
}
fn default_std_threshold() -> f64 {
    0.2
}
fn default_max_modes() -> usize {
    10
}
fn default_residual_tolerance() -> f64 {
    1e-10
}
fn default_envelope() -> String {
    "cubic".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpectralToml {
    #[serde(default = "default_dt")]
    pub dt: f64,
    #[serde(default = "default_window")]
    pub window: usize,
    #[serde(default = "default_boundary")]
    pub boundary: String,
}

impl Default for SpectralToml {
    fn default() -> Self {
        Self {
            dt: default_dt(),
            window: default_window(),
            boundary: default_boundary(),
        }
    }
}

fn default_dt() -> f64 {
    1.0
}
fn default_window() -> usize {
    30
}
fn default_boundary() -> String {
    "unsmoothed".to_string()
}
