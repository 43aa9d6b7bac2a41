pub mod bins;
pub mod export;
pub mod reader;
pub mod summary;

pub use hist256_common::{Hist256Error, Result};
pub use bins::{
    bin_histogram, bucket_bounds, bucket_index, histogram_bins, value_range, Histogram,
    HistogramBin, ValueRange, BUCKET_COUNT,
};
pub use export::{export_csv, export_json, format_literal, print_summary};
pub use reader::{parse_values, read_values, STDIN_PATH};
pub use summary::{summarize, HistogramSummary};
