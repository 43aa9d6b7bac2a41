use serde::{Deserialize, Serialize};
use crate::bins::{value_range, Histogram};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramSummary {
    pub count: u64,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub mean: Option<f64>,
    pub occupied_buckets: usize,
    pub peak_bucket: Option<usize>,
    pub peak_count: u64,
}

pub fn summarize(values: &[i64], hist: &Histogram) -> HistogramSummary {
    let range = value_range(values);
    let mean = if values.is_empty() {
        None
    } else {
        let total: i128 = values.iter().map(|&v| v as i128).sum();
        Some(total as f64 / values.len() as f64)
    };
    // lowest index wins ties
    let peak = hist
        .iter()
        .enumerate()
        .filter(|(_, &c)| c > 0)
        .fold(None, |best: Option<(usize, u64)>, (i, &c)| match best {
            Some((_, bc)) if bc >= c => best,
            _ => Some((i, c)),
        });
    HistogramSummary {
        count: values.len() as u64,
        min: range.map(|r| r.min),
        max: range.map(|r| r.max),
        mean,
        occupied_buckets: hist.iter().filter(|&&c| c > 0).count(),
        peak_bucket: peak.map(|p| p.0),
        peak_count: peak.map_or(0, |p| p.1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bins::bin_histogram;

    fn run(values: &[i64]) -> HistogramSummary {
        summarize(values, &bin_histogram(values))
    }

    #[test]
    fn empty_input() {
        let s = run(&[]);
        assert_eq!(s.count, 0);
        assert_eq!(s.min, None);
        assert_eq!(s.mean, None);
        assert_eq!(s.occupied_buckets, 0);
        assert_eq!(s.peak_bucket, None);
        assert_eq!(s.peak_count, 0);
    }

    #[test]
    fn degenerate_input() {
        let s = run(&[3, 3, 3]);
        assert_eq!((s.min, s.max), (Some(3), Some(3)));
        assert_eq!(s.peak_bucket, Some(0));
        assert_eq!(s.peak_count, 3);
        assert_eq!(s.occupied_buckets, 1);
    }

    #[test]
    fn peak_prefers_lowest_index() {
        let s = run(&[0, 0, 255, 255, 100]);
        assert_eq!(s.peak_bucket, Some(0));
        assert_eq!(s.peak_count, 2);
        assert_eq!(s.occupied_buckets, 3);
        assert!((s.mean.unwrap() - 122.0).abs() < 1e-9);
    }

    #[test]
    fn mean_does_not_overflow() {
        let s = run(&[i64::MAX, i64::MAX]);
        assert!((s.mean.unwrap() - i64::MAX as f64).abs() < 1e3);
    }
}
