use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use hist256_common::{Hist256Error, InputConfig, Result};
use tracing::debug;

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// One integer per line; blank and comment lines are skipped.
pub fn parse_values<R: BufRead>(reader: R, cfg: &InputConfig) -> Result<Vec<i64>> {
    let mut values = Vec::new();
    let mut skipped = 0usize;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let s = line.trim();
        if s.is_empty() || cfg.is_comment(s) {
            skipped += 1;
            continue;
        }
        let v: i64 = s.parse().map_err(|e: std::num::ParseIntError| Hist256Error::Parse {
            line: idx + 1,
            text: s.to_owned(),
            message: e.to_string(),
        })?;
        values.push(v);
    }
    debug!(values = values.len(), skipped, "parsed input");
    Ok(values)
}

pub fn read_values(path: &Path, cfg: &InputConfig) -> Result<Vec<i64>> {
    if path.as_os_str() == STDIN_PATH {
        let stdin = std::io::stdin();
        return parse_values(stdin.lock(), cfg);
    }
    let file = File::open(path)?;
    debug!(path = %path.display(), "reading values");
    parse_values(BufReader::new(file), cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> Result<Vec<i64>> {
        parse_values(Cursor::new(text), &InputConfig::default())
    }

    #[test] fn empty_source() { assert!(parse("").unwrap().is_empty()); }
    #[test] fn one_per_line() { assert_eq!(parse("1\n-2\n3\n").unwrap(), vec![1, -2, 3]); }
    #[test] fn no_trailing_newline() { assert_eq!(parse("7\n8").unwrap(), vec![7, 8]); }
    #[test] fn trims_whitespace_and_crlf() { assert_eq!(parse("  4 \r\n\t5\r\n").unwrap(), vec![4, 5]); }
    #[test] fn skips_blank_lines() { assert_eq!(parse("\n1\n\n   \n2\n").unwrap(), vec![1, 2]); }
    #[test] fn skips_comments() { assert_eq!(parse("# header\n10\n  # indented\n20\n").unwrap(), vec![10, 20]); }

    #[test]
    fn comment_prefix_disabled() {
        let cfg = InputConfig { comment_prefix: String::new() };
        let err = parse_values(Cursor::new("1\n#2\n"), &cfg).unwrap_err();
        assert!(matches!(err, Hist256Error::Parse { line: 2, .. }));
    }

    #[test]
    fn bad_line_reports_position() {
        match parse("1\n2\nthree\n4\n").unwrap_err() {
            Hist256Error::Parse { line, text, .. } => {
                assert_eq!(line, 3);
                assert_eq!(text, "three");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn out_of_range_is_parse_error() {
        assert!(matches!(parse("99999999999999999999\n"), Err(Hist256Error::Parse { line: 1, .. })));
    }

    #[test]
    fn extremes_parse() {
        let text = format!("{}\n{}\n", i64::MIN, i64::MAX);
        assert_eq!(parse(&text).unwrap(), vec![i64::MIN, i64::MAX]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_values(&dir.path().join("absent.txt"), &InputConfig::default()).unwrap_err();
        assert!(matches!(err, Hist256Error::Io(_)));
    }
}
