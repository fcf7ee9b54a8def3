//! JSON summary export
//!
//! Machine-readable counterpart of the console summary.

use crate::error::Result;
use crate::record::{BenchmarkRecord, Metric};
use crate::stats::{BenchmarkAnalyzer, CategoryRollup, SummaryStatistics};
use serde::Serialize;
use std::path::Path;

/// A ranked record reduced to what a consumer needs
#[derive(Debug, Clone, Serialize)]
pub struct JsonRankedEntry {
    pub name: String,
    pub category: String,
    pub time_us: f64,
    pub alloc_bytes: u64,
}

/// Complete JSON summary document
#[derive(Debug, Clone, Serialize)]
pub struct JsonSummary {
    pub summary: SummaryStatistics,
    /// Sorted distinct category labels
    pub categories: Vec<String>,
    pub total_alloc_bytes: u64,
    pub total_dealloc_bytes: u64,
    pub epsilon: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub unrecognized_units: usize,
    pub slowest: Vec<JsonRankedEntry>,
    pub most_memory: Vec<JsonRankedEntry>,
    pub category_rollup: Vec<CategoryRollup>,
}

fn is_zero(value: &usize) -> bool {
    *value == 0
}

impl JsonSummary {
    pub fn build(
        analyzer: &BenchmarkAnalyzer,
        top_n: usize,
        unrecognized_units: usize,
    ) -> Result<Self> {
        let entries = |records: Vec<&BenchmarkRecord>| -> Vec<JsonRankedEntry> {
            records
                .into_iter()
                .map(|r| JsonRankedEntry {
                    name: r.name.clone(),
                    category: r.category().label().to_string(),
                    time_us: r.time_us(),
                    alloc_bytes: r.alloc_bytes,
                })
                .collect()
        };

        Ok(Self {
            summary: analyzer.summary()?,
            categories: analyzer
                .categories()
                .iter()
                .map(|c| c.label().to_string())
                .collect(),
            total_alloc_bytes: analyzer.total_alloc_bytes(),
            total_dealloc_bytes: analyzer.total_dealloc_bytes(),
            epsilon: analyzer.epsilon(),
            unrecognized_units,
            slowest: entries(analyzer.slowest(top_n)?),
            most_memory: entries(analyzer.most_memory(top_n)?),
            category_rollup: analyzer.category_rollup(&[
                Metric::TimeUs,
                Metric::AllocBytes,
                Metric::AllocCalls,
                Metric::NetBytes,
            ])?,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        tracing::info!("Summary exported to: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ReportParser;

    fn analyzer() -> BenchmarkAnalyzer {
        let report = ReportParser::new().parse_str(
            "\
metadata_lookup │ Time: 80 ns │ Alloc: 32 B (1 calls) │ Dealloc: 32 B (1 calls) │ Net: 0 B
honeypot_reply │ Time: 4.5 µs │ Alloc: 4096 B (3 calls) │ Dealloc: 1024 B (1 calls) │ Net: 3072 B
",
        );
        BenchmarkAnalyzer::new(report.records)
    }

    #[test]
    fn test_json_summary_fields() {
        let summary = JsonSummary::build(&analyzer(), 1, 0).unwrap();
        assert_eq!(summary.summary.count, 2);
        assert_eq!(summary.categories, vec!["Honeypot", "Metadata"]);
        assert_eq!(summary.total_alloc_bytes, 4128);
        assert_eq!(summary.total_dealloc_bytes, 1056);
        assert_eq!(summary.slowest.len(), 1);
        assert_eq!(summary.slowest[0].name, "honeypot_reply");
        assert_eq!(summary.category_rollup.len(), 2);
    }

    #[test]
    fn test_json_serialization() {
        let json = JsonSummary::build(&analyzer(), 5, 0)
            .unwrap()
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["summary"]["count"], 2);
        assert_eq!(value["summary"]["time_us"]["max"]["name"], "honeypot_reply");
        assert_eq!(value["category_rollup"][0]["category"], "Honeypot");
        assert_eq!(
            value["category_rollup"][0]["metrics"]["net_bytes"]["sum"],
            3072.0
        );
        assert!(value.get("unrecognized_units").is_none());
    }

    #[test]
    fn test_json_rollup_category_matches_label() {
        let report = ReportParser::new().parse_str(
            "\
ring_push │ Time: 90 ns │ Alloc: 64 B (1 calls) │ Dealloc: 64 B (1 calls) │ Net: 0 B
error_creation_basic │ Time: 45 ns │ Alloc: 64 B (1 calls) │ Dealloc: 64 B (1 calls) │ Net: 0 B
unicode_payload │ Time: 300 ns │ Alloc: 128 B (2 calls) │ Dealloc: 128 B (2 calls) │ Net: 0 B
",
        );
        let analyzer = BenchmarkAnalyzer::new(report.records);
        let json = JsonSummary::build(&analyzer, 5, 0)
            .unwrap()
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let categories = value["categories"].as_array().unwrap();
        let rollups = value["category_rollup"].as_array().unwrap();
        assert_eq!(categories.len(), rollups.len());
        for (label, rollup) in categories.iter().zip(rollups) {
            assert_eq!(&rollup["category"], label);
        }
        assert_eq!(rollups[2]["category"], "Ring Buffer");

        let ring = value["slowest"]
            .as_array()
            .unwrap()
            .iter()
            .find(|e| e["name"] == "ring_push")
            .unwrap();
        assert_eq!(ring["category"], rollups[2]["category"]);
    }

    #[test]
    fn test_json_reports_unrecognized_units() {
        let json = JsonSummary::build(&analyzer(), 5, 3)
            .unwrap()
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["unrecognized_units"], 3);
    }
}
