// End-to-end library tests: report text -> parser -> analyzer -> sinks

use benchscope::csv_output::CsvOutput;
use benchscope::json_output::JsonSummary;
use benchscope::{
    AnalysisError, BenchmarkAnalyzer, Category, Metric, ReportParser, SortOrder,
};
use std::path::Path;

const FIXTURE: &str = "tests/fixtures/benchmark_memory_results.txt";

fn fixture_analyzer() -> BenchmarkAnalyzer {
    let report = ReportParser::new()
        .parse_file(Path::new(FIXTURE))
        .expect("fixture parses");
    BenchmarkAnalyzer::new(report.records)
}

// ============================================================================
// Three-record scenario
// ============================================================================

const SCENARIO: &str = "\
op_alpha │ Time: 120.5 ns │ Alloc: 256 B (2 calls) │ Dealloc: 256 B (2 calls) │ Net: 0 B
op_beta  │ Time: 2.3 µs │ Alloc: 1024 B (4 calls) │ Dealloc: 512 B (1 calls) │ Net: 512 B
op_gamma │ Time: 1.0 ms │ Alloc: 0 B (0 calls) │ Dealloc: 0 B (0 calls) │ Net: 0 B
";

#[test]
fn test_scenario_end_to_end() {
    let report = ReportParser::new().parse_str(SCENARIO);
    assert_eq!(report.records.len(), 3);

    let times: Vec<f64> = report.records.iter().map(|r| r.time_ns).collect();
    assert_eq!(times, vec![120.5, 2300.0, 1_000_000.0]);

    let analyzer = BenchmarkAnalyzer::new(report.records);
    assert_eq!(analyzer.slowest(1).unwrap()[0].name, "op_gamma");
    assert_eq!(analyzer.fastest(1).unwrap()[0].name, "op_alpha");
    assert_eq!(analyzer.total_alloc_bytes(), 1280);
}

#[test]
fn test_scenario_net_bytes_trusted_from_source() {
    // Net is reported, not recomputed: 0 alloc - 0 dealloc but claims 7
    let report = ReportParser::new().parse_str(
        "odd │ Time: 1 ns │ Alloc: 0 B (0 calls) │ Dealloc: 0 B (0 calls) │ Net: 7 B",
    );
    assert_eq!(report.records[0].net_bytes, 7);
}

// ============================================================================
// Realistic fixture
// ============================================================================

#[test]
fn test_fixture_record_count_and_order() {
    let analyzer = fixture_analyzer();
    assert_eq!(analyzer.count(), 22);
    assert_eq!(analyzer.records()[0].name, "create_simple_error");
    assert_eq!(analyzer.records()[21].name, "heap_allocation_batch");
}

#[test]
fn test_fixture_every_category_present() {
    let analyzer = fixture_analyzer();
    let labels: Vec<&str> = analyzer.categories().iter().map(|c| c.label()).collect();
    assert_eq!(
        labels,
        vec![
            "Display",
            "Edge Cases",
            "Error Creation",
            "Honeypot",
            "Logging",
            "Memory",
            "Metadata",
            "Obfuscation",
            "Other",
            "Ring Buffer",
            "Timing",
        ]
    );
}

#[test]
fn test_fixture_rollup_counts_sum_to_total() {
    let analyzer = fixture_analyzer();
    let rollups = analyzer
        .category_rollup(&[Metric::TimeUs, Metric::AllocBytes])
        .unwrap();

    let total: usize = rollups.iter().map(|r| r.count).sum();
    assert_eq!(total, analyzer.count());

    let ring = rollups
        .iter()
        .find(|r| r.category == Category::RingBuffer)
        .unwrap();
    // "string" contains "ring", so the *_strings benchmarks land here too
    assert_eq!(ring.count, 6);
}

#[test]
fn test_fixture_rankings() {
    let analyzer = fixture_analyzer();

    assert_eq!(
        analyzer.slowest(1).unwrap()[0].name,
        "timing_normalization/fast_error_with_norm"
    );
    assert_eq!(
        analyzer.fastest(1).unwrap()[0].name,
        "zero_allocation_static_strings"
    );
    assert_eq!(analyzer.most_memory(1).unwrap()[0].name, "Attack Burst 100");

    // Several records allocate nothing; the earliest one wins the tie
    let least: Vec<&str> = analyzer
        .least_memory(4)
        .unwrap()
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(
        least,
        vec![
            "Access 4 Metadata Fields",
            "internal_log_access",
            "obfuscation/obfuscate_code",
            "zero_allocation_static_strings",
        ]
    );
}

#[test]
fn test_fixture_summary_bounds() {
    let analyzer = fixture_analyzer();
    let summary = analyzer.summary().unwrap();

    for record in analyzer.records() {
        assert!(summary.time_us.min.value <= record.time_us());
        assert!(record.time_us() <= summary.time_us.max.value);
    }
    assert_eq!(summary.time_us.max.value, 1000.0);
    assert_eq!(summary.alloc_bytes.max.value, 204_800.0);
    assert_eq!(analyzer.total_alloc_bytes(), 391_040);
}

#[test]
fn test_fixture_negative_net_parsed() {
    let analyzer = fixture_analyzer();
    let eviction = analyzer
        .records()
        .iter()
        .find(|r| r.name == "ring_buffer_with_eviction")
        .unwrap();
    assert_eq!(eviction.net_bytes, -4096);

    let lowest = analyzer
        .top_n(Metric::NetBytes, SortOrder::Ascending, 1)
        .unwrap();
    assert_eq!(lowest[0].name, "ring_buffer_with_eviction");
}

#[test]
fn test_fixture_csv_has_row_per_record() {
    let analyzer = fixture_analyzer();
    let csv = CsvOutput::new(analyzer.records()).to_csv();
    assert_eq!(csv.lines().count(), analyzer.count() + 1);
    assert!(csv.contains("Attack Burst 100,Other,"));
}

#[test]
fn test_fixture_json_summary() {
    let analyzer = fixture_analyzer();
    let json = JsonSummary::build(&analyzer, 10, 0).unwrap().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["summary"]["count"], 22);
    assert_eq!(value["slowest"].as_array().unwrap().len(), 10);
    assert_eq!(value["category_rollup"].as_array().unwrap().len(), 11);
}

// ============================================================================
// Whole-file failure modes
// ============================================================================

#[test]
fn test_missing_file_is_input_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = ReportParser::new()
        .parse_file(&dir.path().join("absent.txt"))
        .unwrap_err();
    assert!(matches!(err, AnalysisError::InputMissing { .. }));
}

#[test]
fn test_file_without_records_is_no_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty_results.txt");
    std::fs::write(
        &path,
        "════════\nBenchmark Results - Unix timestamp: 0\n════════\n\nnothing to see\n",
    )
    .unwrap();

    let err = ReportParser::new().parse_file(&path).unwrap_err();
    assert!(matches!(err, AnalysisError::NoRecords { .. }));
}
