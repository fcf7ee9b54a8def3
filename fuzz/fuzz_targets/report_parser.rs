#![no_main]

use benchscope::{BenchmarkAnalyzer, ReportParser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    // Arbitrary text must never panic; whatever parses must be analyzable
    let report = ReportParser::new().parse_str(&text);
    if !report.is_empty() {
        let analyzer = BenchmarkAnalyzer::new(report.records);
        assert!(analyzer.summary().is_ok());
        assert!(analyzer.category_rollup(&[]).is_ok());
    }
});
