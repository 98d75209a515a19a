//! Text summary builder for CLI output.
//!
//! Computes summary statistics and formats human-readable lines for text mode.

use crate::metrics;
use anyhow::{Context, Result};
use hdrhistogram::Histogram;

const BAR_WIDTH: u64 = 40;
const HISTOGRAM_BUCKETS: u64 = 10;

/// Pre-formatted lines for text output.
pub struct TextSummary {
    pub lines: Vec<String>,
}

/// Build a text summary from latency samples given in seconds.
pub fn build_text_summary(samples: &[f64]) -> Result<TextSummary> {
    let stats = metrics::summarize(samples).context("no latency samples to summarize")?;

    let mut lines = Vec::new();
    lines.push("Summary:".to_string());
    lines.push(format!("  Count:    {}", stats.count));
    lines.push(format!("  Fastest:  {:.4} ms", stats.fastest * 1000.0));
    lines.push(format!("  Slowest:  {:.4} ms", stats.slowest * 1000.0));
    lines.push(format!("  Average:  {:.4} ms", stats.mean * 1000.0));
    lines.push(format!("  Stddev:   {:.4} ms", stats.stddev * 1000.0));

    lines.push(String::new());
    lines.push("Response time histogram:".to_string());
    lines.extend(histogram_lines(samples)?);

    lines.push(String::new());
    lines.push("Latency distribution:".to_string());
    for (p, v) in metrics::percentiles(samples, metrics::DISTRIBUTION_PERCENTILES) {
        lines.push(format!("  {p}% in {:.4} ms", v * 1000.0));
    }

    Ok(TextSummary { lines })
}

/// Bucketed response-time lines with bars scaled to the fullest bucket.
fn histogram_lines(samples: &[f64]) -> Result<Vec<String>> {
    let mut histogram = Histogram::<u64>::new(3).context("create latency histogram")?;
    for &s in samples {
        let micros = (s * 1_000_000.0).round() as u64;
        histogram.record(micros).context("record latency sample")?;
    }

    let step = (histogram.max() / HISTOGRAM_BUCKETS).max(1);
    let buckets: Vec<(u64, u64)> = histogram
        .iter_linear(step)
        .map(|v| (v.value_iterated_to(), v.count_since_last_iteration()))
        .collect();
    let fullest = buckets.iter().map(|&(_, c)| c).max().unwrap_or(0).max(1);

    let lines = buckets
        .into_iter()
        .map(|(upper_micros, count)| {
            let bar = "∎".repeat((count * BAR_WIDTH / fullest) as usize);
            format!("  {:>10.4} ms [{count:>5}]  |{bar}", upper_micros as f64 / 1000.0)
        })
        .collect();
    Ok(lines)
}
