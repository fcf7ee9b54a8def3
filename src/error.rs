//! Error taxonomy for report analysis
//!
//! Malformed report lines are never errors: the parser drops them silently.
//! Only whole-file conditions and empty aggregate queries surface here.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, parsing or querying a benchmark report
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("{} not found! Please run the benchmarks first to generate results.", path.display())]
    InputMissing { path: PathBuf },

    #[error("No benchmark entries found in {}", path.display())]
    NoRecords { path: PathBuf },

    #[error("Insufficient data for {query}: at least one record is required")]
    InsufficientData { query: &'static str },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
