//! Analyze command: decompose one signal and report its Hilbert spectrum.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use epimode_analysis::{AnalysisResult, Analyzer};

use crate::cli::AnalyzeArgs;
use crate::config::EpimodeConfig;
use crate::convert;
use crate::input;

/// Run the analysis pipeline.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let _cmd = info_span!("analyze").entered();

    // 1. Load optional TOML config
    let config = match args.config {
        Some(ref path) => load_config(path)?,
        None => EpimodeConfig::default(),
    };
    let emd_cfg = convert::build_emd_config(&config.decompose)?;
    let spectral_cfg = convert::build_spectral_config(&config.spectral, args.dt)?;
    let dt = spectral_cfg.dt();

    // 2. Read samples
    info!(path = %args.input.display(), "reading samples");
    let samples = input::read_samples(&args.input)?;
    let name = args.name.clone().unwrap_or_else(|| signal_name(&args.input));
    info!(name = %name, n = samples.len(), "loaded signal");

    // 3. Analyze
    let analyzer = Analyzer::new(emd_cfg, spectral_cfg);
    let result = analyzer
        .analyze_signal(&name, &samples, dt)
        .with_context(|| format!("analysis of {name:?} failed"))?;
    log_summary(&result);

    // 4. Write JSON bundle
    if let Some(ref out) = args.output {
        let json = result.to_json()?;
        std::fs::write(out, json)
            .with_context(|| format!("failed to write output: {}", out.display()))?;
        info!(path = %out.display(), "wrote result bundle");
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<EpimodeConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse epimode TOML")
}

/// Default signal name: the input file stem.
fn signal_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "signal".to_string())
}

fn log_summary(result: &AnalysisResult) {
    info!(
        n_imfs = result.n_imfs,
        stop_reason = ?result.stop_reason,
        residual_is_flat = result.residual_is_flat,
        reconstruction_error = result.reconstruction_error,
        "decomposition summary"
    );
    for (i, stats) in result.statistics.iter().enumerate() {
        let energy = result.energy_fractions.get(i).copied().unwrap_or(0.0);
        info!(
            mode = i,
            mean_frequency = stats.mean_frequency,
            mean_period = stats.mean_period,
            mean_amplitude = stats.mean_amplitude,
            energy_share = energy,
            "mode"
        );
    }
    if let Some(&energy) = result.energy_fractions.last() {
        info!(energy_share = energy, "residual");
    }
}
