use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Resolved configuration for a report run.
///
/// The artifacts directory is resolved once at the CLI boundary (flag, then
/// `ARTIFACTS`, then the default); nothing below this struct consults the
/// environment.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub artifacts_dir: PathBuf,
    pub write: bool,
}

/// Summary statistics over a set of latency samples, in the samples' unit.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleStats {
    pub count: usize,
    pub fastest: f64,
    pub slowest: f64,
    pub mean: f64,
    pub stddev: f64,
}

/// Percentile block of a data item. Values are milliseconds, rounded to
/// four decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PerfMetrics {
    pub perc50: f64,
    pub perc90: f64,
    pub perc99: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PerfLabels {
    pub metric: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataItem {
    pub data: PerfMetrics,
    pub labels: PerfLabels,
    pub unit: String,
}

/// Top-level report document consumed by the perf dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerfReport {
    pub version: String,
    pub data_items: Vec<DataItem>,
}
