use serde::{Deserialize, Serialize};

pub const BUCKET_COUNT: usize = 256;

/// Highest bucket index; also the multiplier of the affine mapping.
const SCALE: i128 = (BUCKET_COUNT - 1) as i128;

/// Counts per bucket, index 0 holds the minimum and 255 the maximum.
pub type Histogram = [u64; BUCKET_COUNT];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: i64,
    pub max: i64,
}

impl ValueRange {
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// `max - min`, widened so the full i64 span fits.
    fn span(&self) -> i128 {
        self.max as i128 - self.min as i128
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub index: usize,
    pub range_start: Option<i64>,
    pub range_end: Option<i64>,
    pub count: u64,
}

pub fn value_range(values: &[i64]) -> Option<ValueRange> {
    let (&first, rest) = values.split_first()?;
    let (min, max) = rest
        .iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    Some(ValueRange { min, max })
}

/// Bucket for `x`, which must lie inside `range`.
pub fn bucket_index(x: i64, range: ValueRange) -> usize {
    if range.is_degenerate() {
        return 0;
    }
    let offset = x as i128 - range.min as i128;
    (offset * SCALE).div_euclid(range.span()) as usize
}

pub fn bin_histogram(values: &[i64]) -> Histogram {
    let mut hist = [0u64; BUCKET_COUNT];
    let Some(range) = value_range(values) else {
        return hist;
    };
    if range.is_degenerate() {
        hist[0] = values.len() as u64;
        return hist;
    }
    for &x in values {
        hist[bucket_index(x, range)] += 1;
    }
    hist
}

/// Closed interval of integers that land in bucket `index`, `None` when no
/// integer does.
pub fn bucket_bounds(index: usize, range: ValueRange) -> Option<(i64, i64)> {
    if index >= BUCKET_COUNT {
        return None;
    }
    if range.is_degenerate() {
        return (index == 0).then_some((range.min, range.min));
    }
    let span = range.span();
    let i = index as i128;
    let lo = (i * span + SCALE - 1).div_euclid(SCALE);
    let hi = ((i + 1) * span - 1).div_euclid(SCALE).min(span);
    if lo > hi {
        return None;
    }
    let base = range.min as i128;
    // offsets are within [0, span], so both ends stay inside [min, max]
    Some(((base + lo) as i64, (base + hi) as i64))
}

pub fn histogram_bins(hist: &Histogram, range: Option<ValueRange>) -> Vec<HistogramBin> {
    hist.iter()
        .enumerate()
        .map(|(index, &count)| {
            let bounds = range.and_then(|r| bucket_bounds(index, r));
            HistogramBin {
                index,
                range_start: bounds.map(|b| b.0),
                range_end: bounds.map(|b| b.1),
                count,
            }
        })
        .collect()
}
