//! Benchmark records and the numeric views derived from them

use crate::category::Category;
use serde::{Deserialize, Serialize};

/// Default smoothing constant for efficiency ratios with a zero denominator
pub const DEFAULT_EPSILON: f64 = 0.001;

/// Time unit token found in a report line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Nanos,
    Micros,
    Millis,
    Seconds,
    /// Any other token; the magnitude is taken as nanoseconds unchanged
    Unrecognized,
}

impl TimeUnit {
    /// Resolve a unit token (`ns`, `µs`/`us`, `ms`, `s`)
    pub fn from_token(token: &str) -> Self {
        match token {
            "ns" => TimeUnit::Nanos,
            // U+00B5 MICRO SIGN and U+03BC GREEK SMALL LETTER MU both appear in the wild
            "µs" | "μs" | "us" => TimeUnit::Micros,
            "ms" => TimeUnit::Millis,
            "s" => TimeUnit::Seconds,
            _ => TimeUnit::Unrecognized,
        }
    }

    /// Multiplier that converts a magnitude in this unit to nanoseconds
    pub fn nanos_factor(self) -> f64 {
        match self {
            TimeUnit::Nanos | TimeUnit::Unrecognized => 1.0,
            TimeUnit::Micros => 1_000.0,
            TimeUnit::Millis => 1_000_000.0,
            TimeUnit::Seconds => 1_000_000_000.0,
        }
    }

    pub fn to_nanos(self, magnitude: f64) -> f64 {
        magnitude * self.nanos_factor()
    }
}

/// One measured benchmark invocation
///
/// Records are built once by the parser and never mutated afterwards. Time is
/// stored in nanoseconds only; every other view is computed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    pub name: String,
    pub time_ns: f64,
    pub alloc_bytes: u64,
    pub alloc_calls: u64,
    pub dealloc_bytes: u64,
    pub dealloc_calls: u64,
    /// Net bytes as reported (not recomputed from alloc/dealloc)
    pub net_bytes: i64,
}

impl BenchmarkRecord {
    pub fn time_us(&self) -> f64 {
        self.time_ns / 1_000.0
    }

    pub fn time_ms(&self) -> f64 {
        self.time_ns / 1_000_000.0
    }

    pub fn category(&self) -> Category {
        Category::classify(&self.name)
    }

    /// Average bytes requested per allocation call
    pub fn bytes_per_alloc(&self, epsilon: f64) -> f64 {
        self.alloc_bytes as f64 / (self.alloc_calls as f64 + epsilon)
    }

    /// Nanoseconds spent per allocated byte
    pub fn ns_per_byte(&self, epsilon: f64) -> f64 {
        self.time_ns / (self.alloc_bytes as f64 + epsilon)
    }

    /// Render this record back into a report line, with time expressed in `ns`
    pub fn to_report_line(&self) -> String {
        format!(
            "{} │ Time: {} ns │ Alloc: {} B ({} calls) │ Dealloc: {} B ({} calls) │ Net: {} B",
            self.name,
            self.time_ns,
            self.alloc_bytes,
            self.alloc_calls,
            self.dealloc_bytes,
            self.dealloc_calls,
            self.net_bytes
        )
    }
}

/// A single numeric view over a record, used for rankings and rollups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    TimeNs,
    TimeUs,
    TimeMs,
    AllocBytes,
    AllocCalls,
    DeallocBytes,
    DeallocCalls,
    NetBytes,
    BytesPerAlloc,
    NsPerByte,
}

impl Metric {
    pub const ALL: [Metric; 10] = [
        Metric::TimeNs,
        Metric::TimeUs,
        Metric::TimeMs,
        Metric::AllocBytes,
        Metric::AllocCalls,
        Metric::DeallocBytes,
        Metric::DeallocCalls,
        Metric::NetBytes,
        Metric::BytesPerAlloc,
        Metric::NsPerByte,
    ];

    /// Evaluate this metric for a record; `epsilon` only affects efficiency ratios
    pub fn value(self, record: &BenchmarkRecord, epsilon: f64) -> f64 {
        match self {
            Metric::TimeNs => record.time_ns,
            Metric::TimeUs => record.time_us(),
            Metric::TimeMs => record.time_ms(),
            Metric::AllocBytes => record.alloc_bytes as f64,
            Metric::AllocCalls => record.alloc_calls as f64,
            Metric::DeallocBytes => record.dealloc_bytes as f64,
            Metric::DeallocCalls => record.dealloc_calls as f64,
            Metric::NetBytes => record.net_bytes as f64,
            Metric::BytesPerAlloc => record.bytes_per_alloc(epsilon),
            Metric::NsPerByte => record.ns_per_byte(epsilon),
        }
    }

    /// Column-style identifier (`time_us`, `alloc_bytes`, ...)
    pub fn key(self) -> &'static str {
        match self {
            Metric::TimeNs => "time_ns",
            Metric::TimeUs => "time_us",
            Metric::TimeMs => "time_ms",
            Metric::AllocBytes => "alloc_bytes",
            Metric::AllocCalls => "alloc_calls",
            Metric::DeallocBytes => "dealloc_bytes",
            Metric::DeallocCalls => "dealloc_calls",
            Metric::NetBytes => "net_bytes",
            Metric::BytesPerAlloc => "bytes_per_alloc",
            Metric::NsPerByte => "ns_per_byte",
        }
    }

    /// True for metrics measured in bytes
    pub fn is_byte_count(self) -> bool {
        matches!(
            self,
            Metric::AllocBytes | Metric::DeallocBytes | Metric::NetBytes
        )
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
