//! benchscope - timing and allocation analysis for benchmark memory reports
//!
//! This library parses the line-oriented report produced by an
//! allocation-tracking benchmark suite into normalized records, classifies
//! them by name, and answers summary, ranking and per-category queries.
//! Console, CSV, JSON and SVG sinks consume the results.

pub mod category;
pub mod cli;
pub mod config;
pub mod csv_output;
pub mod error;
pub mod json_output;
pub mod parser;
pub mod record;
pub mod stats;
pub mod summary;
pub mod svg_output;

pub use category::Category;
pub use error::AnalysisError;
pub use parser::{ParsedReport, ReportParser};
pub use record::{BenchmarkRecord, Metric, TimeUnit};
pub use stats::{BenchmarkAnalyzer, SortOrder};
