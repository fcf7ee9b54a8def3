use anyhow::{Context, Result};
use benchscope::{
    cli::Cli,
    config::AnalyzerConfig,
    csv_output::CsvOutput,
    json_output::JsonSummary,
    summary,
    svg_output::{ChartRenderer, CHART_FILES},
    BenchmarkAnalyzer, ReportParser,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber; `RUST_LOG` applies unless --debug is set
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Defaults, then the optional TOML file, then command-line flags
fn load_config(args: &Cli) -> Result<AnalyzerConfig> {
    let base = match &args.config {
        Some(path) => AnalyzerConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => AnalyzerConfig::default(),
    };

    let config = args.apply(base);
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.debug);

    let config = load_config(&args)?;
    tracing::debug!(?config, "resolved configuration");

    let rule = "=".repeat(80);
    println!("{}", rule);
    println!("BENCHMARK ANALYSIS TOOL");
    println!("{}", rule);
    println!("\nParsing: {}", config.input.display());

    let report = ReportParser::new().parse_file(&config.input)?;
    println!("Found {} benchmark entries", report.records.len());

    let unrecognized_units = if config.strict_units {
        report.unrecognized_units
    } else {
        0
    };
    let analyzer = BenchmarkAnalyzer::new(report.records).with_epsilon(config.epsilon);

    print!(
        "{}",
        summary::render_summary(&analyzer, config.top_n, unrecognized_units)?
    );

    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    let mut artifacts: Vec<(String, &str)> = Vec::new();

    if config.charts {
        println!("\nGenerating charts in: {}", config.output_dir.display());
        let written = ChartRenderer::new(&analyzer, config.top_n, config.efficiency_top_n)
            .render_all(&config.output_dir)?;
        println!("\n✓ Charts saved to: {}", config.output_dir.display());
        artifacts.extend(
            written
                .iter()
                .zip(CHART_FILES.iter())
                .map(|(path, (file, description))| {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| file.to_string());
                    (name, *description)
                }),
        );
    }

    if config.csv {
        let path = config.csv_path();
        CsvOutput::new(analyzer.records())
            .write_to(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("✓ Data exported to: {}", path.display());
        artifacts.push(("benchmark_data.csv".to_string(), "Raw data export"));
    }

    if config.json {
        let path = config.json_path();
        JsonSummary::build(&analyzer, config.top_n, unrecognized_units)?
            .write_to(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("✓ Summary exported to: {}", path.display());
        artifacts.push(("benchmark_summary.json".to_string(), "Summary statistics"));
    }

    print!(
        "{}",
        summary::render_artifacts(&config.output_dir, &artifacts)
    );

    Ok(())
}
