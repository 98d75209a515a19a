//! Perf-dashboard report construction and artifact writing.

use crate::metrics;
use crate::model::{DataItem, PerfLabels, PerfMetrics, PerfReport};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Schema version understood by the perf dashboard.
pub const REPORT_VERSION: &str = "v1";

/// Metric label the dashboard keys on.
pub const METRIC_NAME: &str = "APIResponsiveness";

/// Build the report document from latency samples given in seconds.
///
/// Percentile values are converted to milliseconds and rounded to four
/// decimal places; a percentile missing from the computed result counts
/// as zero.
pub fn build_report(samples: &[f64]) -> PerfReport {
    let computed = metrics::percentiles(samples, metrics::REPORT_PERCENTILES);
    let in_millis = |target: f64| -> f64 {
        computed
            .iter()
            .find(|(p, _)| *p == target)
            .map(|(_, v)| v * 1000.0)
            .unwrap_or(0.0)
    };
    PerfReport {
        version: REPORT_VERSION.into(),
        data_items: vec![DataItem {
            data: PerfMetrics {
                perc50: round4(in_millis(50.0)),
                perc90: round4(in_millis(90.0)),
                perc99: round4(in_millis(99.0)),
            },
            labels: PerfLabels {
                metric: METRIC_NAME.into(),
            },
            unit: "ms".into(),
        }],
    }
}

fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

/// File name for a report generated at `now`, truncated to second
/// resolution. The RFC3339 stamp keeps colons as-is; the dashboard's
/// collector accepts them even though some filesystems do not.
pub fn report_file_name(now: OffsetDateTime) -> String {
    let stamp = now
        .replace_nanosecond(0)
        .unwrap_or(now)
        .format(&Rfc3339)
        .unwrap_or_else(|_| "now".into());
    format!("etcd_perf_{stamp}.json")
}

/// Serialize `report` and write it under `artifacts_dir`.
///
/// Directory creation is attempted first; a failure there is logged and the
/// write is still attempted. A write failure comes back as an error value so
/// the caller can surface it without failing the surrounding run.
pub fn write_report(report: &PerfReport, artifacts_dir: &Path) -> Result<PathBuf> {
    if let Err(e) = fs::create_dir_all(artifacts_dir) {
        eprintln!("Error creating artifacts directory: {e}");
    }
    let dest = artifacts_dir.join(report_file_name(OffsetDateTime::now_utc()));
    let body = serde_json::to_vec_pretty(report).context("serialize perf report")?;
    fs::write(&dest, body).with_context(|| format!("write perf report to {}", dest.display()))?;
    Ok(dest)
}
