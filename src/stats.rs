//! Statistics engine over parsed benchmark records
//!
//! All queries are read-only views over the record sequence. Count-style
//! queries accept an empty sequence; anything that needs an actual value
//! (mean, median, extremes, rankings) returns
//! [`AnalysisError::InsufficientData`] instead of producing NaN.

use crate::category::Category;
use crate::error::{AnalysisError, Result};
use crate::record::{BenchmarkRecord, Metric, DEFAULT_EPSILON};
use serde::Serialize;
use std::collections::BTreeMap;

/// Ranking direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// An extreme value and the first record (in input order) that attains it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extreme {
    pub value: f64,
    pub name: String,
}

/// Descriptive statistics for one metric
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSummary {
    pub mean: f64,
    pub median: f64,
    pub min: Extreme,
    pub max: Extreme,
}

/// Report-wide summary: timing in microseconds and allocated bytes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub count: usize,
    pub time_us: MetricSummary,
    pub alloc_bytes: MetricSummary,
}

/// Per-group aggregate of one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricAggregate {
    pub mean: f64,
    pub median: f64,
    pub sum: f64,
}

/// Aggregates for all records sharing a category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRollup {
    pub category: Category,
    pub count: usize,
    pub metrics: BTreeMap<Metric, MetricAggregate>,
}

impl CategoryRollup {
    pub fn get(&self, metric: Metric) -> Option<&MetricAggregate> {
        self.metrics.get(&metric)
    }
}

/// One equal-width histogram bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Arithmetic mean
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(AnalysisError::InsufficientData { query: "mean" });
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median; the average of the two middle values for even lengths
pub fn median(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(AnalysisError::InsufficientData { query: "median" });
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Aggregation and ranking queries over a finalized record sequence
#[derive(Debug, Clone)]
pub struct BenchmarkAnalyzer {
    records: Vec<BenchmarkRecord>,
    epsilon: f64,
}

impl BenchmarkAnalyzer {
    pub fn new(records: Vec<BenchmarkRecord>) -> Self {
        Self {
            records,
            epsilon: DEFAULT_EPSILON,
        }
    }

    /// Override the efficiency-ratio smoothing constant
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Metric values in input order
    pub fn values(&self, metric: Metric) -> Vec<f64> {
        self.records
            .iter()
            .map(|r| metric.value(r, self.epsilon))
            .collect()
    }

    /// Sum of a metric over every record (0 for an empty sequence)
    pub fn total(&self, metric: Metric) -> f64 {
        self.values(metric).iter().sum()
    }

    /// Exact byte total, saturating at `u64::MAX`
    pub fn total_alloc_bytes(&self) -> u64 {
        self.records
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.alloc_bytes))
    }

    pub fn total_dealloc_bytes(&self) -> u64 {
        self.records
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.dealloc_bytes))
    }

    /// Distinct categories present, ordered by label
    pub fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = self.records.iter().map(|r| r.category()).collect();
        categories.sort_by_key(|c| c.label());
        categories.dedup();
        categories
    }

    /// Minimum and maximum of a metric; ties go to the earliest record
    pub fn extremes(&self, metric: Metric) -> Result<(Extreme, Extreme)> {
        let mut iter = self.records.iter();
        let first = iter
            .next()
            .ok_or(AnalysisError::InsufficientData { query: "min/max" })?;

        let first_value = metric.value(first, self.epsilon);
        let (mut min, mut max) = ((first_value, first), (first_value, first));

        for record in iter {
            let value = metric.value(record, self.epsilon);
            if value < min.0 {
                min = (value, record);
            }
            if value > max.0 {
                max = (value, record);
            }
        }

        Ok((
            Extreme {
                value: min.0,
                name: min.1.name.clone(),
            },
            Extreme {
                value: max.0,
                name: max.1.name.clone(),
            },
        ))
    }

    pub fn summarize(&self, metric: Metric) -> Result<MetricSummary> {
        let values = self.values(metric);
        let (min, max) = self.extremes(metric)?;
        Ok(MetricSummary {
            mean: mean(&values)?,
            median: median(&values)?,
            min,
            max,
        })
    }

    pub fn summary(&self) -> Result<SummaryStatistics> {
        Ok(SummaryStatistics {
            count: self.count(),
            time_us: self.summarize(Metric::TimeUs)?,
            alloc_bytes: self.summarize(Metric::AllocBytes)?,
        })
    }

    /// Up to `n` records ordered by `metric`
    ///
    /// The sort is stable, so records with equal values keep their input order.
    pub fn top_n(&self, metric: Metric, order: SortOrder, n: usize) -> Result<Vec<&BenchmarkRecord>> {
        if self.records.is_empty() {
            return Err(AnalysisError::InsufficientData { query: "top-N ranking" });
        }

        let mut keyed: Vec<(f64, &BenchmarkRecord)> = self
            .records
            .iter()
            .map(|r| (metric.value(r, self.epsilon), r))
            .collect();

        match order {
            SortOrder::Ascending => keyed.sort_by(|a, b| a.0.total_cmp(&b.0)),
            SortOrder::Descending => keyed.sort_by(|a, b| b.0.total_cmp(&a.0)),
        }

        Ok(keyed.into_iter().take(n).map(|(_, r)| r).collect())
    }

    pub fn slowest(&self, n: usize) -> Result<Vec<&BenchmarkRecord>> {
        self.top_n(Metric::TimeNs, SortOrder::Descending, n)
    }

    pub fn fastest(&self, n: usize) -> Result<Vec<&BenchmarkRecord>> {
        self.top_n(Metric::TimeNs, SortOrder::Ascending, n)
    }

    pub fn most_memory(&self, n: usize) -> Result<Vec<&BenchmarkRecord>> {
        self.top_n(Metric::AllocBytes, SortOrder::Descending, n)
    }

    pub fn least_memory(&self, n: usize) -> Result<Vec<&BenchmarkRecord>> {
        self.top_n(Metric::AllocBytes, SortOrder::Ascending, n)
    }

    /// Group records by category and aggregate each requested metric
    ///
    /// Only categories with members are reported, ordered by label.
    pub fn category_rollup(&self, metrics: &[Metric]) -> Result<Vec<CategoryRollup>> {
        let mut groups: BTreeMap<&'static str, (Category, Vec<&BenchmarkRecord>)> = BTreeMap::new();
        for record in &self.records {
            let category = record.category();
            groups
                .entry(category.label())
                .or_insert_with(|| (category, Vec::new()))
                .1
                .push(record);
        }

        let mut rollups = Vec::with_capacity(groups.len());
        for (category, members) in groups.into_values() {
            let mut aggregates = BTreeMap::new();
            for &metric in metrics {
                let values: Vec<f64> = members
                    .iter()
                    .map(|r| metric.value(r, self.epsilon))
                    .collect();
                aggregates.insert(
                    metric,
                    MetricAggregate {
                        mean: mean(&values)?,
                        median: median(&values)?,
                        sum: values.iter().sum(),
                    },
                );
            }
            rollups.push(CategoryRollup {
                category,
                count: members.len(),
                metrics: aggregates,
            });
        }

        Ok(rollups)
    }

    /// Whether a metric spans more than two orders of magnitude
    ///
    /// Byte metrics use `min + 1` as the denominator so zero-allocation
    /// records don't force a log axis on their own.
    pub fn log_scale_hint(&self, metric: Metric) -> Result<bool> {
        let (min, max) = self.extremes(metric)?;
        let denominator = if metric.is_byte_count() {
            min.value + 1.0
        } else {
            min.value
        };
        Ok(max.value / denominator > 100.0)
    }

    /// Equal-width histogram over `[min, max]`; the last bin is closed
    pub fn histogram(&self, metric: Metric, bins: usize) -> Result<Vec<HistogramBin>> {
        let (min, max) = self.extremes(metric)?;
        let bins = bins.max(1);

        let (lower, upper) = if min.value == max.value {
            (min.value - 0.5, max.value + 0.5)
        } else {
            (min.value, max.value)
        };
        let width = (upper - lower) / bins as f64;

        let mut histogram: Vec<HistogramBin> = (0..bins)
            .map(|i| HistogramBin {
                lower: lower + width * i as f64,
                upper: lower + width * (i + 1) as f64,
                count: 0,
            })
            .collect();

        for value in self.values(metric) {
            let index = (((value - lower) / width) as usize).min(bins - 1);
            histogram[index].count += 1;
        }

        Ok(histogram)
    }
}
