use crate::model::SampleStats;

/// Percentiles reported in the perf-dashboard artifact.
pub const REPORT_PERCENTILES: &[f64] = &[50.0, 90.0, 99.0];

/// Percentiles listed in the text-mode latency distribution.
pub const DISTRIBUTION_PERCENTILES: &[f64] = &[10.0, 25.0, 50.0, 75.0, 90.0, 95.0, 99.0, 99.9];

/// Compute the requested percentiles from `samples`, returned as
/// `(percentile, value)` pairs in the samples' own unit.
///
/// Selection is nearest-rank over an ascending sort: the value at index
/// `ceil(n * p / 100)` (1-based, clamped to the sample range). An empty
/// input yields 0.0 for every requested percentile; a single sample is
/// returned for all of them.
pub fn percentiles(samples: &[f64], fractions: &[f64]) -> Vec<(f64, f64)> {
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    fractions
        .iter()
        .map(|&p| (p, percentile_sorted(&sorted, p)))
        .collect()
}

fn percentile_sorted(sorted: &[f64], fraction: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let rank = (sorted.len() as f64 * fraction / 100.0).ceil() as usize;
    sorted[rank.clamp(1, sorted.len()) - 1]
}

/// Summary statistics (count, fastest, slowest, mean, population stddev)
/// over `samples`. Returns `None` for an empty input.
pub fn summarize(samples: &[f64]) -> Option<SampleStats> {
    if samples.is_empty() {
        return None;
    }
    let count = samples.len();
    let mut fastest = f64::INFINITY;
    let mut slowest = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for &s in samples {
        fastest = fastest.min(s);
        slowest = slowest.max(s);
        sum += s;
    }
    let mean = sum / count as f64;
    let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / count as f64;
    Some(SampleStats {
        count,
        fastest,
        slowest,
        mean,
        stddev: variance.sqrt(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentiles_sorted_input() {
        // [0.1..1.0] in steps of 0.1, n=10
        // p50: rank ceil(10 * 0.50) = 5 -> 0.5
        // p90: rank ceil(10 * 0.90) = 9 -> 0.9
        // p99: rank ceil(10 * 0.99) = 10 -> 1.0
        let samples: Vec<f64> = (1..=10).map(|i| i as f64 / 10.0).collect();
        let got = percentiles(&samples, REPORT_PERCENTILES);
        assert_eq!(got, vec![(50.0, 0.5), (90.0, 0.9), (99.0, 1.0)]);
    }

    #[test]
    fn percentiles_unsorted_input() {
        let samples = vec![0.5, 0.1, 0.3, 0.2, 0.4];
        let got = percentiles(&samples, &[50.0]);
        assert_eq!(got, vec![(50.0, 0.3)]);
    }

    #[test]
    fn percentiles_empty_returns_zero() {
        let got = percentiles(&[], REPORT_PERCENTILES);
        assert_eq!(got, vec![(50.0, 0.0), (90.0, 0.0), (99.0, 0.0)]);
    }

    #[test]
    fn percentiles_single_sample_for_all_fractions() {
        let got = percentiles(&[0.042], DISTRIBUTION_PERCENTILES);
        assert!(got.iter().all(|&(_, v)| v == 0.042));
    }

    #[test]
    fn percentiles_are_deterministic() {
        let samples = vec![0.9, 0.03, 0.5, 0.5, 0.12, 0.7];
        let a = percentiles(&samples, REPORT_PERCENTILES);
        let b = percentiles(&samples, REPORT_PERCENTILES);
        assert_eq!(a, b);
    }

    #[test]
    fn summarize_basic_stats() {
        let stats = summarize(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(stats.count, 4);
        assert_eq!(stats.fastest, 1.0);
        assert_eq!(stats.slowest, 4.0);
        assert_eq!(stats.mean, 2.5);
        // population stddev of [1,2,3,4] = sqrt(1.25)
        assert!((stats.stddev - 1.25f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn summarize_empty_is_none() {
        assert!(summarize(&[]).is_none());
    }
}
