//! Plain-text sample reader.

use std::path::Path;

use anyhow::{Context, Result, bail};

/// Parses samples separated by whitespace, commas or newlines.
///
/// Lines whose first non-blank character is `#` are comments.
pub fn parse_samples(text: &str) -> Result<Vec<f64>> {
    let mut samples = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        for token in line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let value: f64 = token
                .parse()
                .with_context(|| format!("line {}: invalid number {token:?}", lineno + 1))?;
            samples.push(value);
        }
    }
    Ok(samples)
}

/// Reads and parses a sample file.
pub fn read_samples(path: &Path) -> Result<Vec<f64>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input: {}", path.display()))?;
    let samples = parse_samples(&text)
        .with_context(|| format!("failed to parse input: {}", path.display()))?;
    if samples.is_empty() {
        bail!("input file contains no samples: {}", path.display());
    }
    Ok(samples)
}
