use std::io::Write;
use std::path::Path;
use hist256_common::Result;
use tracing::info;
use crate::bins::{Histogram, HistogramBin};
use crate::summary::HistogramSummary;

/// `[c0, c1, ..., c255]`
pub fn format_literal(hist: &Histogram) -> String {
    let parts: Vec<String> = hist.iter().map(|c| c.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

fn fmt_opt<T: ToString>(v: Option<T>) -> String {
    v.map_or_else(|| "-".into(), |x| x.to_string())
}

pub fn print_summary(summary: &HistogramSummary) {
    println!("{:<18} {}", "Values:", summary.count);
    println!("{:<18} {}", "Min:", fmt_opt(summary.min));
    println!("{:<18} {}", "Max:", fmt_opt(summary.max));
    println!("{:<18} {}", "Mean:", summary.mean.map_or("-".into(), |m| format!("{m:.3}")));
    println!("{:<18} {}/256", "Occupied buckets:", summary.occupied_buckets);
    println!("{:<18} {} ({} values)", "Peak bucket:", fmt_opt(summary.peak_bucket), summary.peak_count);
}

pub fn export_json(
    output_path: &Path,
    source: &str,
    hist: &Histogram,
    summary: &HistogramSummary,
    bins: &[HistogramBin],
) -> Result<()> {
    let doc = serde_json::json!({
        "source": source,
        "summary": summary,
        "counts": &hist[..],
        "bins": bins,
    });
    let mut file = std::fs::File::create(output_path)?;
    serde_json::to_writer_pretty(&mut file, &doc)?;
    writeln!(file)?;
    info!(path = %output_path.display(), "wrote JSON export");
    Ok(())
}

pub fn export_csv(output_path: &Path, bins: &[HistogramBin]) -> Result<()> {
    let mut file = std::fs::File::create(output_path)?;
    writeln!(file, "bucket,range_start,range_end,count")?;
    for bin in bins {
        writeln!(file, "{},{},{},{}",
            bin.index,
            fmt_opt(bin.range_start),
            fmt_opt(bin.range_end),
            bin.count,
        )?;
    }
    info!(path = %output_path.display(), rows = bins.len(), "wrote CSV export");
    Ok(())
}
