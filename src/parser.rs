//! Report line parser
//!
//! Turns the human-readable output of the allocation-tracking benchmark suite
//! into [`BenchmarkRecord`]s:
//!
//! ```text
//! name │ Time: 123.45 ns │ Alloc: 256 B (2 calls) │ Dealloc: 256 B (2 calls) │ Net: 0 B
//! ```
//!
//! Blank lines, horizontal rules, `timestamp` banners and anything else that
//! does not fit the grammar are skipped without error.

use crate::error::{AnalysisError, Result};
use crate::record::{BenchmarkRecord, TimeUnit};
use regex::Regex;
use std::path::Path;

const RECORD_PATTERN: &str = concat!(
    r"^(?P<name>.+?)\s+│\s+Time:\s+(?P<time>[\d.]+)\s+(?P<unit>\w+)\s+│\s+",
    r"Alloc:\s+(?P<alloc>\d+)\s+B\s+\(\s*(?P<alloc_calls>\d+)\s+calls\)\s+│\s+",
    r"Dealloc:\s+(?P<dealloc>\d+)\s+B\s+\(\s*(?P<dealloc_calls>\d+)\s+calls\)\s+│\s+",
    r"Net:\s+(?P<net>[+-]?\d+)\s+B",
);

/// Records parsed from one report, in file order
#[derive(Debug, Clone, Default)]
pub struct ParsedReport {
    pub records: Vec<BenchmarkRecord>,
    /// Lines that were neither data nor recognized decoration
    pub skipped_lines: usize,
    /// Records whose time unit was not recognized (kept as nanoseconds)
    pub unrecognized_units: usize,
}

impl ParsedReport {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Line-oriented parser for benchmark memory reports
#[derive(Debug, Clone)]
pub struct ReportParser {
    pattern: Regex,
}

impl Default for ReportParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportParser {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(RECORD_PATTERN).expect("record pattern is valid"),
        }
    }

    /// True for lines that are decoration rather than data
    fn is_decoration(line: &str) -> bool {
        line.is_empty()
            || line.starts_with(|c: char| ('\u{2500}'..='\u{257F}').contains(&c))
            || line.to_lowercase().contains("timestamp")
    }

    /// Parse a single line; `None` for decoration or non-matching text
    pub fn parse_line(&self, line: &str) -> Option<(BenchmarkRecord, TimeUnit)> {
        let line = line.trim();
        if Self::is_decoration(line) {
            return None;
        }

        let caps = self.pattern.captures(line)?;
        let magnitude: f64 = caps["time"].parse().ok()?;
        let unit = TimeUnit::from_token(&caps["unit"]);

        let record = BenchmarkRecord {
            name: caps["name"].trim().to_string(),
            time_ns: unit.to_nanos(magnitude),
            alloc_bytes: caps["alloc"].parse().ok()?,
            alloc_calls: caps["alloc_calls"].parse().ok()?,
            dealloc_bytes: caps["dealloc"].parse().ok()?,
            dealloc_calls: caps["dealloc_calls"].parse().ok()?,
            net_bytes: caps["net"].parse().ok()?,
        };

        Some((record, unit))
    }

    /// Parse every line, keeping records in input order
    ///
    /// Never fails: an input without a single record yields an empty report.
    pub fn parse_lines<'a, I>(&self, lines: I) -> ParsedReport
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut report = ParsedReport::default();

        for (index, raw) in lines.into_iter().enumerate() {
            match self.parse_line(raw) {
                Some((record, unit)) => {
                    if unit == TimeUnit::Unrecognized {
                        tracing::warn!(
                            "line {}: unrecognized time unit for '{}', treating value as nanoseconds",
                            index + 1,
                            record.name
                        );
                        report.unrecognized_units += 1;
                    }
                    report.records.push(record);
                }
                None => {
                    let trimmed = raw.trim();
                    if !Self::is_decoration(trimmed) {
                        tracing::trace!("line {}: no match, skipped", index + 1);
                        report.skipped_lines += 1;
                    }
                }
            }
        }

        tracing::debug!(
            records = report.records.len(),
            skipped = report.skipped_lines,
            unrecognized_units = report.unrecognized_units,
            "parsed report"
        );

        report
    }

    pub fn parse_str(&self, text: &str) -> ParsedReport {
        self.parse_lines(text.lines())
    }

    /// Read and parse a report file
    ///
    /// Distinguishes a missing file from a file that yields no records.
    pub fn parse_file(&self, path: &Path) -> Result<ParsedReport> {
        if !path.exists() {
            return Err(AnalysisError::InputMissing {
                path: path.to_path_buf(),
            });
        }

        let text = std::fs::read_to_string(path)?;
        let report = self.parse_str(&text);

        if report.is_empty() {
            return Err(AnalysisError::NoRecords {
                path: path.to_path_buf(),
            });
        }

        Ok(report)
    }
}
