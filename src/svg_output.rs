//! SVG chart rendering
//!
//! Six standalone SVG documents visualizing the analyzed records: timing
//! distribution, allocation patterns, category comparisons, the
//! timing/memory correlation, allocation efficiency and best/worst rankings.

use crate::category::Category;
use crate::error::Result;
use crate::record::{BenchmarkRecord, Metric};
use crate::stats::{BenchmarkAnalyzer, HistogramBin, MetricAggregate, SortOrder};
use std::path::{Path, PathBuf};

/// Chart files written by [`ChartRenderer::render_all`], with descriptions
pub const CHART_FILES: [(&str, &str); 6] = [
    ("01_timing_overview.svg", "Timing distribution and category medians"),
    ("02_memory_overview.svg", "Memory allocation patterns"),
    ("03_category_comparison.svg", "Category-level metrics"),
    ("04_timing_vs_memory.svg", "Correlation scatter plot"),
    ("05_allocation_efficiency.svg", "Efficiency metrics"),
    ("06_top_performers.svg", "Best/worst benchmarks"),
];

const HISTOGRAM_BINS: usize = 30;
const EFFICIENCY_LABEL_CHARS: usize = 40;
const PERFORMER_LABEL_CHARS: usize = 35;

/// tab10 palette, cycled per category in the scatter plot
const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

#[derive(Debug, Clone, Copy)]
struct Frame {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Frame {
    fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Split into a grid and return cell (`row`, `col`)
    fn cell(&self, rows: usize, cols: usize, row: usize, col: usize) -> Frame {
        let width = self.width / cols as f64;
        let height = self.height / rows as f64;
        Frame::new(
            self.x + width * col as f64,
            self.y + height * row as f64,
            width,
            height,
        )
    }
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn truncate(name: &str, max_chars: usize) -> String {
    name.chars().take(max_chars).collect()
}

/// Compact axis tick label
fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if magnitude >= 1_000.0 {
        format!("{:.1}k", value / 1_000.0)
    } else if magnitude >= 10.0 || magnitude == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// Minimal SVG document builder
struct SvgCanvas {
    width: f64,
    height: f64,
    body: String,
}

impl SvgCanvas {
    fn new(width: f64, height: f64) -> Self {
        let mut canvas = Self {
            width,
            height,
            body: String::new(),
        };
        canvas.rect(0.0, 0.0, width, height, "#ffffff", 1.0);
        canvas
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: &str, opacity: f64) {
        self.body.push_str(&format!(
            "  <rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\" fill-opacity=\"{}\"/>\n",
            x,
            y,
            width.max(0.0),
            height.max(0.0),
            fill,
            opacity
        ));
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str) {
        self.body.push_str(&format!(
            "  <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
            x1, y1, x2, y2, stroke
        ));
    }

    fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        self.body.push_str(&format!(
            "  <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.1}\" fill=\"{}\" fill-opacity=\"0.6\" stroke=\"black\" stroke-width=\"0.5\"/>\n",
            cx, cy, r, fill
        ));
    }

    fn text(&mut self, x: f64, y: f64, size: f64, anchor: &str, content: &str) {
        self.body.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"{}\" text-anchor=\"{}\">{}</text>\n",
            x,
            y,
            size,
            anchor,
            escape_xml(content)
        ));
    }

    fn title(&mut self, x: f64, y: f64, content: &str) {
        self.body.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"14\" font-weight=\"bold\" text-anchor=\"middle\">{}</text>\n",
            x,
            y,
            escape_xml(content)
        ));
    }

    fn vertical_text(&mut self, x: f64, y: f64, content: &str) {
        self.body.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\" text-anchor=\"middle\" transform=\"rotate(-90 {:.1} {:.1})\">{}</text>\n",
            x,
            y,
            x,
            y,
            escape_xml(content)
        ));
    }

    /// Title, axis box and axis captions; returns the inner plot area
    fn panel(&mut self, frame: Frame, title: &str, x_label: &str, y_label: &str, left: f64) -> Frame {
        self.title(frame.x + frame.width / 2.0, frame.y + 20.0, title);

        let plot = Frame::new(
            frame.x + left,
            frame.y + 36.0,
            frame.width - left - 20.0,
            frame.height - 36.0 - 44.0,
        );

        self.line(plot.x, plot.y + plot.height, plot.x + plot.width, plot.y + plot.height, "#333333");
        self.line(plot.x, plot.y, plot.x, plot.y + plot.height, "#333333");

        self.text(
            plot.x + plot.width / 2.0,
            frame.y + frame.height - 8.0,
            11.0,
            "middle",
            x_label,
        );
        if !y_label.is_empty() {
            self.vertical_text(frame.x + 14.0, plot.y + plot.height / 2.0, y_label);
        }

        plot
    }

    fn finish(self) -> String {
        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">\n",
            w = self.width,
            h = self.height
        ));
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }
}

/// Horizontal bars, one per item, top to bottom; handles negative values
fn horizontal_bars(
    canvas: &mut SvgCanvas,
    frame: Frame,
    title: &str,
    x_label: &str,
    items: &[(String, f64)],
    color: &str,
) {
    let plot = canvas.panel(frame, title, x_label, "", 200.0);
    if items.is_empty() {
        return;
    }

    let lo = items.iter().map(|(_, v)| *v).fold(0.0_f64, f64::min);
    let hi = items.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let span = if hi > lo { hi - lo } else { 1.0 };
    let scale = |v: f64| plot.x + (v - lo) / span * plot.width;
    let zero_x = scale(0.0);

    let slot = plot.height / items.len() as f64;
    let bar_height = slot * 0.7;

    for (i, (label, value)) in items.iter().enumerate() {
        let y = plot.y + slot * i as f64 + (slot - bar_height) / 2.0;
        let end_x = scale(*value);
        canvas.rect(zero_x.min(end_x), y, (end_x - zero_x).abs(), bar_height, color, 0.8);
        canvas.text(plot.x - 6.0, y + bar_height / 2.0 + 3.0, 9.0, "end", label);
    }

    canvas.text(plot.x, plot.y + plot.height + 14.0, 9.0, "middle", &format_value(lo));
    canvas.text(
        plot.x + plot.width,
        plot.y + plot.height + 14.0,
        9.0,
        "middle",
        &format_value(hi),
    );
}

fn histogram(canvas: &mut SvgCanvas, frame: Frame, title: &str, x_label: &str, bins: &[HistogramBin]) {
    let plot = canvas.panel(frame, title, x_label, "Frequency", 60.0);
    let (Some(first), Some(last)) = (bins.first(), bins.last()) else {
        return;
    };

    let max_count = bins.iter().map(|b| b.count).max().unwrap_or(0).max(1) as f64;
    let width = plot.width / bins.len() as f64;

    for (i, bin) in bins.iter().enumerate() {
        let height = bin.count as f64 / max_count * plot.height;
        canvas.rect(
            plot.x + width * i as f64,
            plot.y + plot.height - height,
            width - 1.0,
            height,
            "steelblue",
            0.7,
        );
    }

    canvas.text(plot.x, plot.y + plot.height + 14.0, 9.0, "middle", &format_value(first.lower));
    canvas.text(
        plot.x + plot.width,
        plot.y + plot.height + 14.0,
        9.0,
        "middle",
        &format_value(last.upper),
    );
    canvas.text(plot.x - 6.0, plot.y + 4.0, 9.0, "end", &format_value(max_count));
}

/// Two vertical bars per record index
fn paired_bars(
    canvas: &mut SvgCanvas,
    frame: Frame,
    title: &str,
    series: [(&str, &str, &[f64]); 2],
) {
    let plot = canvas.panel(frame, title, "Benchmark Index", "Bytes", 60.0);
    let count = series[0].2.len().max(series[1].2.len());
    if count == 0 {
        return;
    }

    let max = series
        .iter()
        .flat_map(|(_, _, values)| values.iter().copied())
        .fold(0.0_f64, f64::max)
        .max(1.0);
    let slot = plot.width / count as f64;
    let bar_width = slot * 0.4;

    for (offset, (label, color, values)) in series.iter().enumerate() {
        for (i, value) in values.iter().enumerate() {
            let height = value / max * plot.height;
            canvas.rect(
                plot.x + slot * i as f64 + slot * 0.1 + bar_width * offset as f64,
                plot.y + plot.height - height,
                bar_width,
                height,
                color,
                0.8,
            );
        }

        let legend_y = plot.y + 14.0 + 16.0 * offset as f64;
        canvas.rect(plot.x + plot.width - 110.0, legend_y - 9.0, 10.0, 10.0, color, 0.8);
        canvas.text(plot.x + plot.width - 94.0, legend_y, 10.0, "start", label);
    }

    canvas.text(plot.x - 6.0, plot.y + 4.0, 9.0, "end", &format_value(max));
}

/// Axis transform for the scatter plot
#[derive(Debug, Clone, Copy)]
struct AxisScale {
    log: bool,
    lo: f64,
    hi: f64,
    floor: f64,
}

impl AxisScale {
    fn new(values: &[f64], log: bool) -> Self {
        let floor = values
            .iter()
            .copied()
            .filter(|v| *v > 0.0)
            .fold(f64::INFINITY, f64::min);
        let floor = if floor.is_finite() { floor } else { 1.0 };

        let mut scale = Self {
            log,
            lo: 0.0,
            hi: 0.0,
            floor,
        };
        let transformed: Vec<f64> = values.iter().map(|v| scale.transform(*v)).collect();
        scale.lo = transformed.iter().copied().fold(f64::INFINITY, f64::min);
        scale.hi = transformed.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if !scale.lo.is_finite() || scale.hi <= scale.lo {
            scale.lo = scale.lo.min(0.0);
            scale.hi = scale.lo + 1.0;
        }
        scale
    }

    fn transform(&self, value: f64) -> f64 {
        if self.log {
            value.max(self.floor).log10()
        } else {
            value
        }
    }

    /// Position within `[0, 1]`
    fn unit(&self, value: f64) -> f64 {
        (self.transform(value) - self.lo) / (self.hi - self.lo)
    }
}

/// Renders all charts for one analyzer
#[derive(Debug)]
pub struct ChartRenderer<'a> {
    analyzer: &'a BenchmarkAnalyzer,
    top_n: usize,
    efficiency_top_n: usize,
}

impl<'a> ChartRenderer<'a> {
    pub fn new(analyzer: &'a BenchmarkAnalyzer, top_n: usize, efficiency_top_n: usize) -> Self {
        Self {
            analyzer,
            top_n,
            efficiency_top_n,
        }
    }

    /// Per-category aggregate of one metric, sorted ascending
    fn category_series(
        &self,
        metric: Metric,
        pick: fn(&MetricAggregate) -> f64,
    ) -> Result<Vec<(String, f64)>> {
        let mut series: Vec<(String, f64)> = self
            .analyzer
            .category_rollup(&[metric])?
            .iter()
            .filter_map(|rollup| {
                rollup
                    .get(metric)
                    .map(|aggregate| (rollup.category.label().to_string(), pick(aggregate)))
            })
            .collect();
        series.sort_by(|a, b| a.1.total_cmp(&b.1));
        Ok(series)
    }

    fn ranked(&self, metric: Metric, order: SortOrder, n: usize, chars: usize) -> Result<Vec<(String, f64)>> {
        let epsilon = self.analyzer.epsilon();
        Ok(self
            .analyzer
            .top_n(metric, order, n)?
            .into_iter()
            .map(|r: &BenchmarkRecord| (truncate(&r.name, chars), metric.value(r, epsilon)))
            .collect())
    }

    pub fn timing_overview(&self) -> Result<String> {
        let mut canvas = SvgCanvas::new(1400.0, 600.0);
        let page = Frame::new(0.0, 0.0, 1400.0, 600.0);

        let bins = self.analyzer.histogram(Metric::TimeUs, HISTOGRAM_BINS)?;
        histogram(&mut canvas, page.cell(1, 2, 0, 0), "Timing Distribution", "Time (µs)", &bins);

        let medians = self.category_series(Metric::TimeUs, |a| a.median)?;
        horizontal_bars(
            &mut canvas,
            page.cell(1, 2, 0, 1),
            "Median Timing by Category",
            "Median Time (µs)",
            &medians,
            "lightblue",
        );

        Ok(canvas.finish())
    }

    pub fn memory_overview(&self) -> Result<String> {
        let mut canvas = SvgCanvas::new(1400.0, 600.0);
        let page = Frame::new(0.0, 0.0, 1400.0, 600.0);

        let alloc = self.analyzer.values(Metric::AllocBytes);
        let dealloc = self.analyzer.values(Metric::DeallocBytes);
        paired_bars(
            &mut canvas,
            page.cell(1, 2, 0, 0),
            "Memory Allocation vs Deallocation",
            [
                ("Allocated", "coral", alloc.as_slice()),
                ("Deallocated", "lightgreen", dealloc.as_slice()),
            ],
        );

        let net = self.category_series(Metric::NetBytes, |a| a.sum)?;
        horizontal_bars(
            &mut canvas,
            page.cell(1, 2, 0, 1),
            "Net Memory Change by Category",
            "Net Bytes",
            &net,
            "mediumpurple",
        );

        Ok(canvas.finish())
    }

    pub fn category_comparison(&self) -> Result<String> {
        let mut canvas = SvgCanvas::new(1400.0, 1000.0);
        let page = Frame::new(0.0, 0.0, 1400.0, 1000.0);

        let panels = [
            (Metric::TimeUs, "Average Timing by Category", "Mean Time (µs)", "steelblue"),
            (
                Metric::AllocBytes,
                "Average Memory Allocation by Category",
                "Mean Allocated Bytes",
                "coral",
            ),
            (
                Metric::AllocCalls,
                "Average Allocation Calls by Category",
                "Mean Allocation Calls",
                "mediumseagreen",
            ),
        ];
        for (i, (metric, title, x_label, color)) in panels.into_iter().enumerate() {
            let series = self.category_series(metric, |a| a.mean)?;
            horizontal_bars(&mut canvas, page.cell(2, 2, i / 2, i % 2), title, x_label, &series, color);
        }

        let mut counts: Vec<(String, f64)> = self
            .analyzer
            .category_rollup(&[])?
            .iter()
            .map(|rollup| (rollup.category.label().to_string(), rollup.count as f64))
            .collect();
        counts.sort_by(|a, b| a.1.total_cmp(&b.1));
        horizontal_bars(
            &mut canvas,
            page.cell(2, 2, 1, 1),
            "Benchmark Count by Category",
            "Number of Benchmarks",
            &counts,
            "mediumpurple",
        );

        Ok(canvas.finish())
    }

    pub fn timing_vs_memory(&self) -> Result<String> {
        let mut canvas = SvgCanvas::new(1200.0, 800.0);
        let frame = Frame::new(0.0, 0.0, 1200.0, 800.0);
        let plot = canvas.panel(frame, "Timing vs Memory Allocation", "Time (µs)", "Allocated Bytes", 60.0);

        let x_scale = AxisScale::new(
            &self.analyzer.values(Metric::TimeUs),
            self.analyzer.log_scale_hint(Metric::TimeUs)?,
        );
        let y_scale = AxisScale::new(
            &self.analyzer.values(Metric::AllocBytes),
            self.analyzer.log_scale_hint(Metric::AllocBytes)?,
        );

        let categories = self.analyzer.categories();
        let color_of = |category: Category| {
            let index = categories.iter().position(|c| *c == category).unwrap_or(0);
            PALETTE[index % PALETTE.len()]
        };

        for record in self.analyzer.records() {
            let x = plot.x + x_scale.unit(record.time_us()) * plot.width;
            let y = plot.y + plot.height - y_scale.unit(record.alloc_bytes as f64) * plot.height;
            canvas.circle(x, y, 6.0, color_of(record.category()));
        }

        for (i, category) in categories.iter().enumerate() {
            let y = plot.y + 14.0 + 16.0 * i as f64;
            canvas.circle(plot.x + plot.width - 130.0, y - 4.0, 5.0, color_of(*category));
            canvas.text(plot.x + plot.width - 118.0, y, 10.0, "start", category.label());
        }

        let axis_note = |log: bool| if log { " (log scale)" } else { "" };
        canvas.text(
            plot.x + plot.width,
            plot.y + plot.height + 14.0,
            9.0,
            "end",
            &format!("x{}  y{}", axis_note(x_scale.log), axis_note(y_scale.log)),
        );

        Ok(canvas.finish())
    }

    pub fn allocation_efficiency(&self) -> Result<String> {
        let mut canvas = SvgCanvas::new(1400.0, 600.0);
        let page = Frame::new(0.0, 0.0, 1400.0, 600.0);
        let n = self.efficiency_top_n;

        let per_call = self.ranked(Metric::BytesPerAlloc, SortOrder::Descending, n, EFFICIENCY_LABEL_CHARS)?;
        horizontal_bars(
            &mut canvas,
            page.cell(1, 2, 0, 0),
            &format!("Top {}: Largest Average Allocations", n),
            "Bytes per Allocation Call",
            &per_call,
            "teal",
        );

        let per_byte = self.ranked(Metric::NsPerByte, SortOrder::Descending, n, EFFICIENCY_LABEL_CHARS)?;
        horizontal_bars(
            &mut canvas,
            page.cell(1, 2, 0, 1),
            &format!("Top {}: Slowest per Byte Allocated", n),
            "Nanoseconds per Byte Allocated",
            &per_byte,
            "darkgoldenrod",
        );

        Ok(canvas.finish())
    }

    pub fn top_performers(&self) -> Result<String> {
        let mut canvas = SvgCanvas::new(1400.0, 1000.0);
        let page = Frame::new(0.0, 0.0, 1400.0, 1000.0);
        let n = self.top_n;

        let panels = [
            (Metric::TimeUs, SortOrder::Ascending, "Fastest Benchmarks", "Time (µs)", "green"),
            (Metric::TimeUs, SortOrder::Descending, "Slowest Benchmarks", "Time (µs)", "red"),
            (
                Metric::AllocBytes,
                SortOrder::Ascending,
                "Least Memory Usage",
                "Allocated Bytes",
                "lightblue",
            ),
            (
                Metric::AllocBytes,
                SortOrder::Descending,
                "Highest Memory Usage",
                "Allocated Bytes",
                "orange",
            ),
        ];

        for (i, (metric, order, title, x_label, color)) in panels.into_iter().enumerate() {
            let items = self.ranked(metric, order, n, PERFORMER_LABEL_CHARS)?;
            horizontal_bars(
                &mut canvas,
                page.cell(2, 2, i / 2, i % 2),
                &format!("Top {} {}", n, title),
                x_label,
                &items,
                color,
            );
        }

        Ok(canvas.finish())
    }

    /// Render every chart into `dir`, returning the written paths
    pub fn render_all(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let documents = [
            self.timing_overview()?,
            self.memory_overview()?,
            self.category_comparison()?,
            self.timing_vs_memory()?,
            self.allocation_efficiency()?,
            self.top_performers()?,
        ];

        let mut written = Vec::with_capacity(documents.len());
        for ((file, _), svg) in CHART_FILES.iter().zip(documents) {
            let path = dir.join(file);
            std::fs::write(&path, svg)?;
            tracing::debug!("wrote chart {}", path.display());
            written.push(path);
        }

        tracing::info!("Charts saved to: {}", dir.display());
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ReportParser;

    const REPORT: &str = "\
error_creation_simple │ Time: 52 ns │ Alloc: 48 B (1 calls) │ Dealloc: 48 B (1 calls) │ Net: 0 B
with_metadata_<4> │ Time: 310 ns │ Alloc: 512 B (6 calls) │ Dealloc: 512 B (6 calls) │ Net: 0 B
forensic_log_write │ Time: 1.2 µs │ Alloc: 2048 B (9 calls) │ Dealloc: 2048 B (9 calls) │ Net: 0 B
ring_buffer_drain │ Time: 18 µs │ Alloc: 0 B (0 calls) │ Dealloc: 640 B (5 calls) │ Net: -640 B
honeypot_delay & jitter │ Time: 2.5 ms │ Alloc: 96 B (2 calls) │ Dealloc: 0 B (0 calls) │ Net: 96 B
";

    fn analyzer() -> BenchmarkAnalyzer {
        BenchmarkAnalyzer::new(ReportParser::new().parse_str(REPORT).records)
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("<g>"), "&lt;g&gt;");
        assert_eq!(escape_xml("a&b"), "a&amp;b");
        assert_eq!(escape_xml("\"q\""), "&quot;q&quot;");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("µµµµ", 2), "µµ");
        assert_eq!(truncate("short", 35), "short");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(0.126), "0.13");
        assert_eq!(format_value(250.0), "250");
        assert_eq!(format_value(2_500.0), "2.5k");
        assert_eq!(format_value(-3_000_000.0), "-3.0M");
    }

    #[test]
    fn test_frame_grid() {
        let page = Frame::new(0.0, 0.0, 100.0, 50.0);
        let cell = page.cell(2, 2, 1, 1);
        assert_eq!((cell.x, cell.y, cell.width, cell.height), (50.0, 25.0, 50.0, 25.0));
    }

    #[test]
    fn test_every_chart_is_well_formed() {
        let analyzer = analyzer();
        let renderer = ChartRenderer::new(&analyzer, 10, 15);
        let documents = [
            renderer.timing_overview().unwrap(),
            renderer.memory_overview().unwrap(),
            renderer.category_comparison().unwrap(),
            renderer.timing_vs_memory().unwrap(),
            renderer.allocation_efficiency().unwrap(),
            renderer.top_performers().unwrap(),
        ];

        for svg in &documents {
            assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
            assert!(svg.trim_end().ends_with("</svg>"));
            assert!(!svg.contains("NaN"));
            assert!(!svg.contains("\"inf") && !svg.contains("\"-inf"));
        }
    }

    #[test]
    fn test_labels_are_escaped() {
        let analyzer = analyzer();
        let svg = ChartRenderer::new(&analyzer, 10, 15).top_performers().unwrap();
        assert!(svg.contains("with_metadata_&lt;4&gt;"));
        assert!(svg.contains("honeypot_delay &amp; jitter"));
        assert!(!svg.contains("with_metadata_<4>"));
    }

    #[test]
    fn test_category_chart_lists_present_categories() {
        let analyzer = analyzer();
        let svg = ChartRenderer::new(&analyzer, 10, 15)
            .category_comparison()
            .unwrap();
        for label in ["Error Creation", "Metadata", "Logging", "Ring Buffer", "Honeypot"] {
            assert!(svg.contains(label), "missing {}", label);
        }
        assert!(!svg.contains(">Other<"));
    }

    #[test]
    fn test_efficiency_labels_truncated() {
        let long_name = "a".repeat(60);
        let line = format!(
            "{} │ Time: 1 ns │ Alloc: 8 B (1 calls) │ Dealloc: 8 B (1 calls) │ Net: 0 B",
            long_name
        );
        let analyzer = BenchmarkAnalyzer::new(ReportParser::new().parse_str(&line).records);
        let svg = ChartRenderer::new(&analyzer, 10, 15)
            .allocation_efficiency()
            .unwrap();
        assert!(svg.contains(&"a".repeat(40)));
        assert!(!svg.contains(&"a".repeat(41)));
    }

    #[test]
    fn test_render_all_writes_six_files() {
        let dir = tempfile::tempdir().unwrap();
        let analyzer = analyzer();
        let written = ChartRenderer::new(&analyzer, 10, 15)
            .render_all(dir.path())
            .unwrap();

        assert_eq!(written.len(), CHART_FILES.len());
        for (file, _) in CHART_FILES {
            assert!(dir.path().join(file).exists(), "missing {}", file);
        }
    }
}
