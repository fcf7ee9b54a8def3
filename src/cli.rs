//! CLI argument parsing for benchscope

use crate::config::AnalyzerConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "benchscope")]
#[command(version)]
#[command(about = "Analyze allocation-tracking benchmark reports", long_about = None)]
pub struct Cli {
    /// Benchmark report to parse [default: benchmark_memory_results.txt]
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Directory for charts and exports [default: benchmark_analysis]
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// TOML configuration file; flags given here take precedence
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Smoothing constant for efficiency ratios (default: 0.001)
    #[arg(long = "epsilon", value_name = "EPSILON")]
    pub epsilon: Option<f64>,

    /// Number of entries in the slowest / most-memory listings (default: 10)
    #[arg(short = 'n', long = "top", value_name = "N")]
    pub top: Option<usize>,

    /// Skip SVG chart generation
    #[arg(long = "no-charts")]
    pub no_charts: bool,

    /// Skip the CSV export
    #[arg(long = "no-csv")]
    pub no_csv: bool,

    /// Also write a JSON summary
    #[arg(long = "json")]
    pub json: bool,

    /// Report records whose time unit was not recognized
    #[arg(long = "strict-units")]
    pub strict_units: bool,

    /// Enable debug tracing on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// Overlay command-line flags onto a base configuration
    pub fn apply(&self, mut config: AnalyzerConfig) -> AnalyzerConfig {
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        if let Some(epsilon) = self.epsilon {
            config.epsilon = epsilon;
        }
        if let Some(top) = self.top {
            config.top_n = top;
        }
        if self.no_charts {
            config.charts = false;
        }
        if self.no_csv {
            config.csv = false;
        }
        if self.json {
            config.json = true;
        }
        if self.strict_units {
            config.strict_units = true;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["benchscope"]);
        assert!(cli.input.is_none());
        assert!(cli.output_dir.is_none());
        assert!(!cli.no_charts);
        assert!(!cli.debug);

        let config = cli.apply(AnalyzerConfig::default());
        assert_eq!(config, AnalyzerConfig::default());
    }

    #[test]
    fn test_cli_paths() {
        let cli = Cli::parse_from(["benchscope", "-i", "results.txt", "-o", "out"]);
        let config = cli.apply(AnalyzerConfig::default());
        assert_eq!(config.input, PathBuf::from("results.txt"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_cli_epsilon_and_top() {
        let cli = Cli::parse_from(["benchscope", "--epsilon", "0.5", "--top", "3"]);
        let config = cli.apply(AnalyzerConfig::default());
        assert_eq!(config.epsilon, 0.5);
        assert_eq!(config.top_n, 3);
    }

    #[test]
    fn test_cli_toggles() {
        let cli = Cli::parse_from([
            "benchscope",
            "--no-charts",
            "--no-csv",
            "--json",
            "--strict-units",
        ]);
        let config = cli.apply(AnalyzerConfig::default());
        assert!(!config.charts);
        assert!(!config.csv);
        assert!(config.json);
        assert!(config.strict_units);
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let base = AnalyzerConfig {
            top_n: 25,
            json: true,
            ..Default::default()
        };
        let cli = Cli::parse_from(["benchscope", "--top", "5"]);
        let config = cli.apply(base);
        assert_eq!(config.top_n, 5);
        assert!(config.json);
    }

    #[test]
    fn test_cli_top_rescues_invalid_file_value() {
        let base = AnalyzerConfig::from_toml("top_n = 0").unwrap();
        let cli = Cli::parse_from(["benchscope", "--top", "5"]);
        let config = cli.apply(base);
        assert_eq!(config.top_n, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_debug_flag() {
        let cli = Cli::parse_from(["benchscope", "--debug"]);
        assert!(cli.debug);
    }
}
