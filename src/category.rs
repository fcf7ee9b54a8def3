//! Name-based benchmark classification
//!
//! Rules are evaluated top to bottom against the lowercased benchmark name and
//! the first match wins, so a name containing both `metadata` and `log` is
//! classified as [`Category::Metadata`].

use serde::{Deserialize, Serialize};

/// Coarse grouping label derived from a benchmark name
///
/// Serializes as its [`label`](Category::label).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Error Creation")]
    ErrorCreation,
    Metadata,
    Logging,
    Display,
    Honeypot,
    Timing,
    Obfuscation,
    #[serde(rename = "Ring Buffer")]
    RingBuffer,
    Memory,
    #[serde(rename = "Edge Cases")]
    EdgeCases,
    Other,
}

type Rule = (fn(&str) -> bool, Category);

/// Ordered classification table; earlier entries take priority
pub const CATEGORY_RULES: [Rule; 10] = [
    (
        |n| n.contains("error") && n.contains("creation"),
        Category::ErrorCreation,
    ),
    (|n| n.contains("metadata"), Category::Metadata),
    (|n| n.contains("log"), Category::Logging),
    (
        |n| n.contains("display") || n.contains("format"),
        Category::Display,
    ),
    (|n| n.contains("honeypot"), Category::Honeypot),
    (|n| n.contains("timing"), Category::Timing),
    (|n| n.contains("obfuscation"), Category::Obfuscation),
    (
        |n| n.contains("ring") || n.contains("buffer"),
        Category::RingBuffer,
    ),
    (
        |n| n.contains("allocation") || n.contains("memory"),
        Category::Memory,
    ),
    (
        |n| n.contains("unicode") || n.contains("chain"),
        Category::EdgeCases,
    ),
];

impl Category {
    /// Classify a benchmark name (case-insensitive)
    pub fn classify(name: &str) -> Self {
        let lowered = name.to_lowercase();
        CATEGORY_RULES
            .iter()
            .find(|(matches, _)| matches(&lowered))
            .map(|&(_, category)| category)
            .unwrap_or(Category::Other)
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::ErrorCreation => "Error Creation",
            Category::Metadata => "Metadata",
            Category::Logging => "Logging",
            Category::Display => "Display",
            Category::Honeypot => "Honeypot",
            Category::Timing => "Timing",
            Category::Obfuscation => "Obfuscation",
            Category::RingBuffer => "Ring Buffer",
            Category::Memory => "Memory",
            Category::EdgeCases => "Edge Cases",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
