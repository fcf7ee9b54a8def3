//! Console summary of an analysis run

use crate::error::Result;
use crate::record::Metric;
use crate::stats::BenchmarkAnalyzer;
use std::path::Path;

const RULE_WIDTH: usize = 80;

fn banner(out: &mut String, title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    out.push_str(&format!("\n{}\n{}\n{}\n", rule, title, rule));
}

/// Render the summary statistics block printed after parsing
///
/// `unrecognized_units` is only shown when non-zero.
pub fn render_summary(
    analyzer: &BenchmarkAnalyzer,
    top_n: usize,
    unrecognized_units: usize,
) -> Result<String> {
    let summary = analyzer.summary()?;
    let mut out = String::new();

    banner(&mut out, "BENCHMARK SUMMARY STATISTICS");

    out.push_str(&format!("\nTotal Benchmarks: {}\n", summary.count));
    let categories: Vec<&str> = analyzer.categories().iter().map(|c| c.label()).collect();
    out.push_str(&format!("Categories: {}\n", categories.join(", ")));
    if unrecognized_units > 0 {
        out.push_str(&format!(
            "Warning: {} record(s) used an unrecognized time unit (treated as ns)\n",
            unrecognized_units
        ));
    }

    let time = &summary.time_us;
    out.push_str("\n--- Timing Statistics (microseconds) ---\n");
    out.push_str(&format!("Mean:   {:.2} µs\n", time.mean));
    out.push_str(&format!("Median: {:.2} µs\n", time.median));
    out.push_str(&format!(
        "Min:    {:.2} µs  ({})\n",
        time.min.value, time.min.name
    ));
    out.push_str(&format!(
        "Max:    {:.2} µs  ({})\n",
        time.max.value, time.max.name
    ));

    let alloc = &summary.alloc_bytes;
    out.push_str("\n--- Memory Allocation Statistics ---\n");
    out.push_str(&format!("Mean Alloc:   {:.0} bytes\n", alloc.mean));
    out.push_str(&format!("Median Alloc: {:.0} bytes\n", alloc.median));
    out.push_str(&format!(
        "Max Alloc:    {:.0} bytes  ({})\n",
        alloc.max.value, alloc.max.name
    ));

    out.push_str(&format!("\n--- Top {} Slowest Benchmarks ---\n", top_n));
    for record in analyzer.slowest(top_n)? {
        out.push_str(&format!(
            "  {:<45} {:>8.2} µs  {:>8} B\n",
            record.name,
            record.time_us(),
            record.alloc_bytes
        ));
    }

    out.push_str(&format!("\n--- Top {} Most Memory Intensive ---\n", top_n));
    for record in analyzer.most_memory(top_n)? {
        out.push_str(&format!(
            "  {:<45} {:>8} B  {:>8.2} µs\n",
            record.name,
            record.alloc_bytes,
            record.time_us()
        ));
    }

    out.push_str("\n--- Category Breakdown ---\n");
    out.push_str(&format!(
        "{:<16} {:>6} {:>14} {:>14} {:>14} {:>14}\n",
        "category", "count", "mean µs", "median µs", "mean B", "median B"
    ));
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    for rollup in analyzer.category_rollup(&[Metric::TimeUs, Metric::AllocBytes])? {
        let (Some(time), Some(alloc)) = (rollup.get(Metric::TimeUs), rollup.get(Metric::AllocBytes))
        else {
            continue;
        };
        out.push_str(&format!(
            "{:<16} {:>6} {:>14.2} {:>14.2} {:>14.2} {:>14.2}\n",
            rollup.category.label(),
            rollup.count,
            time.mean,
            time.median,
            alloc.mean,
            alloc.median
        ));
    }

    Ok(out)
}

/// Listing of the artifacts a run produced, printed last
pub fn render_artifacts(output_dir: &Path, files: &[(String, &str)]) -> String {
    let mut out = String::new();
    banner(&mut out, "ANALYSIS COMPLETE");
    out.push_str(&format!("\nOutput directory: {}\n", output_dir.display()));
    out.push_str("\nGenerated files:\n");
    for (file, description) in files {
        out.push_str(&format!("  • {:<30} - {}\n", file, description));
    }
    out
}
