//! Append-only, in-memory log of performance results.

use serde::Serialize;

use crate::core::{Category, PerformanceResult};

/// Results in the order their runs completed. No deduplication and no capacity bound;
/// callers export and `clear` when they see fit.
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    results: Vec<PerformanceResult>,
}

/// Aggregate over every stored result of one algorithm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmSummary {
    pub name: &'static str,
    pub category: Category,
    pub runs: usize,
    pub mean_ms: f64,
    pub best_ms: f64,
}

impl ResultStore {
    pub fn new() -> Self {
        ResultStore::default()
    }

    pub fn push(&mut self, result: PerformanceResult) {
        self.results.push(result);
    }

    pub fn results(&self) -> &[PerformanceResult] {
        &self.results
    }

    pub fn iter(&self) -> impl Iterator<Item = &PerformanceResult> {
        self.results.iter()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn clear(&mut self) {
        self.results.clear();
    }

    /// Mean `execution_time_ms` over all results of `algorithm_name`.
    pub fn average_execution_time(&self, algorithm_name: &str) -> Option<f64> {
        let (sum, count) = self
            .results
            .iter()
            .filter(|r| r.algorithm.name == algorithm_name)
            .fold((0.0, 0usize), |(sum, count), r| (sum + r.execution_time_ms, count + 1));
        (count > 0).then(|| sum / count as f64)
    }

    /// Name of the fastest result measured on exactly `input_size`.
    /// On equal times the earliest stored result wins.
    pub fn fastest_algorithm(&self, input_size: usize) -> Option<&'static str> {
        self.results
            .iter()
            .filter(|r| r.input_size == input_size)
            .min_by(|a, b| a.execution_time_ms.total_cmp(&b.execution_time_ms))
            .map(|r| r.algorithm.name)
    }

    pub fn by_category(&self, category: Category) -> Vec<&PerformanceResult> {
        self.results
            .iter()
            .filter(|r| r.algorithm.category == category)
            .collect()
    }

    /// One summary per algorithm, ordered by first appearance.
    pub fn summaries(&self) -> Vec<AlgorithmSummary> {
        let mut out: Vec<AlgorithmSummary> = Vec::new();
        for r in &self.results {
            match out.iter_mut().find(|s| s.name == r.algorithm.name) {
                Some(summary) => {
                    summary.mean_ms += r.execution_time_ms;
                    summary.runs += 1;
                    summary.best_ms = summary.best_ms.min(r.execution_time_ms);
                }
                None => out.push(AlgorithmSummary {
                    name: r.algorithm.name,
                    category: r.algorithm.category,
                    runs: 1,
                    mean_ms: r.execution_time_ms,
                    best_ms: r.execution_time_ms,
                }),
            }
        }
        // mean_ms holds the running sum until here
        for summary in &mut out {
            summary.mean_ms /= summary.runs as f64;
        }
        out
    }
}

impl Extend<PerformanceResult> for ResultStore {
    fn extend<I: IntoIterator<Item = PerformanceResult>>(&mut self, iter: I) {
        self.results.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ResultStore {
    type Item = &'a PerformanceResult;
    type IntoIter = std::slice::Iter<'a, PerformanceResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}
