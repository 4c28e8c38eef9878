//! Measurement protocol and result records.

use serde::Serialize;

use super::descriptor::{AlgorithmDescriptor, Category};

/// Run configuration for benchmarks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunConfig {
    pub warmup_runs: u32,
    pub measured_runs: u32,
}

impl RunConfig {
    pub const WARMUP_RUNS: u32 = 1;
    pub const SORTING_RUNS: u32 = 10;
    pub const SEARCHING_RUNS: u32 = 100;
    pub const GRAPH_RUNS: u32 = 10;

    /// The fixed protocol for a category: one warm-up plus the category's measured runs.
    pub fn for_category(category: Category) -> Self {
        let measured_runs = match category {
            Category::Sorting => Self::SORTING_RUNS,
            Category::Searching => Self::SEARCHING_RUNS,
            Category::Graph => Self::GRAPH_RUNS,
        };
        RunConfig {
            warmup_runs: Self::WARMUP_RUNS,
            measured_runs,
        }
    }
}

/// One measured outcome: which algorithm, how long on average, on how large an input.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PerformanceResult {
    pub algorithm: &'static AlgorithmDescriptor,
    pub execution_time_ms: f64,
    pub input_size: usize,
}

impl PerformanceResult {
    pub fn new(
        algorithm: &'static AlgorithmDescriptor,
        execution_time_ms: f64,
        input_size: usize,
    ) -> Self {
        debug_assert!(execution_time_ms >= 0.0);
        PerformanceResult {
            algorithm,
            execution_time_ms,
            input_size,
        }
    }

    pub fn name(&self) -> &'static str {
        self.algorithm.name
    }

    pub fn category(&self) -> Category {
        self.algorithm.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::descriptor::QUICK_SORT;

    #[test]
    fn test_run_config_per_category() {
        let sorting = RunConfig::for_category(Category::Sorting);
        assert_eq!(sorting.warmup_runs, 1);
        assert_eq!(sorting.measured_runs, 10);

        assert_eq!(RunConfig::for_category(Category::Searching).measured_runs, 100);
        assert_eq!(RunConfig::for_category(Category::Graph).measured_runs, 10);
    }

    #[test]
    fn test_performance_result_serializes_descriptor() {
        let result = PerformanceResult::new(&QUICK_SORT, 1.25, 1000);
        let json = serde_json::to_value(result).unwrap();

        assert_eq!(json["algorithm"]["name"], "Quick Sort");
        assert_eq!(json["algorithm"]["category"], "sorting");
        assert_eq!(json["execution_time_ms"], 1.25);
        assert_eq!(json["input_size"], 1000);
    }
}
