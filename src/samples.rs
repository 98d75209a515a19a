//! Latency sample ingestion.
//!
//! Reads one sample per line from a file or stdin. A line is either a bare
//! number of seconds ("0.1234") or a humantime duration ("12ms", "1s 500ms").
//! Blank lines and lines starting with '#' are skipped.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read latency samples (seconds) from `path`, or stdin when `None`.
pub fn read_samples(path: Option<&Path>) -> Result<Vec<f64>> {
    match path {
        Some(p) => {
            let file =
                File::open(p).with_context(|| format!("open sample file {}", p.display()))?;
            parse_samples(BufReader::new(file))
        }
        None => parse_samples(std::io::stdin().lock()),
    }
}

/// Parse samples from `reader`. Malformed lines fail with the 1-based line
/// number in the error chain.
pub fn parse_samples<R: BufRead>(reader: R) -> Result<Vec<f64>> {
    let mut samples = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("read sample line")?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let secs = parse_line(trimmed)
            .with_context(|| format!("invalid latency sample on line {}", idx + 1))?;
        samples.push(secs);
    }
    Ok(samples)
}

fn parse_line(s: &str) -> Result<f64> {
    if let Ok(v) = s.parse::<f64>() {
        if !v.is_finite() || v < 0.0 {
            anyhow::bail!("latency must be a non-negative finite number of seconds");
        }
        return Ok(v);
    }
    let d = humantime::parse_duration(s)
        .with_context(|| format!("not a number of seconds or a duration: {s:?}"))?;
    Ok(d.as_secs_f64())
}
