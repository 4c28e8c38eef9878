//! Multi-variant comparison on a shared logical input.

use serde::Serialize;
use tracing::info;

use super::store::ResultStore;
use super::workload::{Variant, Workload, run};
use crate::core::{AlgorithmDescriptor, Category};
use crate::{BenchError, BenchResult};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RankedEntry {
    pub algorithm: &'static AlgorithmDescriptor,
    pub average_ms: f64,
}

/// Ranked outcome of a comparison, fastest first.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub category: Category,
    pub input_size: usize,
    pub ranking: Vec<RankedEntry>,
    /// Slowest average divided by fastest average.
    pub speedup: f64,
}

impl Comparison {
    pub fn fastest(&self) -> Option<&RankedEntry> {
        self.ranking.first()
    }

    pub fn slowest(&self) -> Option<&RankedEntry> {
        self.ranking.last()
    }
}

/// Benchmarks several variants on one workload and records the results in a store.
pub struct ComparisonEngine<'s> {
    store: &'s mut ResultStore,
}

impl<'s> ComparisonEngine<'s> {
    pub fn new(store: &'s mut ResultStore) -> Self {
        ComparisonEngine { store }
    }

    pub fn store(&self) -> &ResultStore {
        self.store
    }

    /// Run every variant on its own copy of `workload` and rank by average time.
    ///
    /// All variants are checked against the workload before anything runs, so a rejected
    /// comparison leaves the store untouched. Results are appended in run order; the ranking
    /// is a stable sort, so equal averages keep the order the variants were given in.
    ///
    /// # Errors
    /// `InvalidArgument` if `variants` is empty, a variant does not fit the workload, or
    /// the start vertex is out of range.
    pub fn compare(&mut self, variants: &[Variant], workload: &Workload) -> BenchResult<Comparison> {
        if variants.is_empty() {
            return Err(BenchError::InvalidArgument(
                "comparison needs at least one algorithm".into(),
            ));
        }
        for variant in variants {
            workload.check_compatible(variant)?;
        }

        let mut ranking = Vec::with_capacity(variants.len());
        for variant in variants {
            let execution = run(variant, workload)?;
            self.store.push(execution.result);
            ranking.push(RankedEntry {
                algorithm: execution.result.algorithm,
                average_ms: execution.result.execution_time_ms,
            });
        }
        let ranking = rank(ranking);

        let speedup = match (ranking.first(), ranking.last()) {
            (Some(fastest), Some(slowest)) => speedup(fastest.average_ms, slowest.average_ms),
            _ => 1.0,
        };

        let comparison = Comparison {
            category: workload.category(),
            input_size: workload.input_size(),
            ranking,
            speedup,
        };
        if let Some(fastest) = comparison.fastest() {
            info!(
                fastest = fastest.algorithm.name,
                speedup = comparison.speedup,
                variants = variants.len(),
                "comparison complete"
            );
        }
        Ok(comparison)
    }
}

/// Order entries fastest first. Stable, so equal averages keep their given order.
fn rank(mut entries: Vec<RankedEntry>) -> Vec<RankedEntry> {
    entries.sort_by(|a, b| a.average_ms.total_cmp(&b.average_ms));
    entries
}

/// `slowest / fastest`; a zero fastest time gives 1.0 when both are zero, infinity otherwise.
fn speedup(fastest_ms: f64, slowest_ms: f64) -> f64 {
    if fastest_ms > 0.0 {
        slowest_ms / fastest_ms
    } else if slowest_ms > 0.0 {
        f64::INFINITY
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Graph;

    #[test]
    fn test_empty_variant_set_rejected() {
        let mut store = ResultStore::new();
        let mut engine = ComparisonEngine::new(&mut store);
        let err = engine
            .compare(&[], &Workload::Sort { data: vec![1, 2] })
            .unwrap_err();
        assert!(matches!(err, BenchError::InvalidArgument(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_mismatch_leaves_store_untouched() {
        let mut store = ResultStore::new();
        let variants = vec![
            Variant::from_name("quick_sort").unwrap(),
            Variant::from_name("dfs").unwrap(),
        ];
        let result = ComparisonEngine::new(&mut store).compare(&variants, &Workload::Sort { data: vec![2, 1] });
        assert!(result.is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_ranking_sorted_and_speedup_consistent() {
        let mut store = ResultStore::new();
        let variants = Variant::all(Category::Graph);
        let graph = Graph::from_edges(5, &[(0, 1, 3), (1, 2, 1), (0, 3, 2), (3, 4, 1), (4, 2, 1)]).unwrap();
        let comparison = ComparisonEngine::new(&mut store)
            .compare(&variants, &Workload::Graph { graph, start: 0 })
            .unwrap();

        assert_eq!(comparison.ranking.len(), 3);
        assert!(comparison
            .ranking
            .windows(2)
            .all(|w| w[0].average_ms <= w[1].average_ms));
        let fastest = comparison.fastest().unwrap().average_ms;
        let slowest = comparison.slowest().unwrap().average_ms;
        assert_eq!(comparison.speedup, speedup(fastest, slowest));
        assert!(comparison.speedup >= 1.0);
        assert_eq!(comparison.input_size, 5);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_results_appended_in_run_order() {
        let mut store = ResultStore::new();
        let variants = vec![
            Variant::from_name("binary_search").unwrap(),
            Variant::from_name("linear_search").unwrap(),
        ];
        let workload = Workload::Search {
            data: (0..1000).rev().collect(),
            target: 3,
        };
        ComparisonEngine::new(&mut store).compare(&variants, &workload).unwrap();

        let names: Vec<&str> = store.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Binary Search", "Linear Search"]);
        assert!(store.iter().all(|r| r.input_size == 1000));
    }

    #[test]
    fn test_single_variant_speedup_is_one() {
        let mut store = ResultStore::new();
        let comparison = ComparisonEngine::new(&mut store)
            .compare(&[Variant::from_name("merge_sort").unwrap()], &Workload::Sort { data: vec![3, 2, 1] })
            .unwrap();
        assert_eq!(comparison.speedup, 1.0);
    }

    #[test]
    fn test_rank_ties_keep_given_order() {
        use crate::core::descriptor::{BUBBLE_SORT, INSERTION_SORT, MERGE_SORT, QUICK_SORT};

        let entry = |algorithm: &'static AlgorithmDescriptor, average_ms: f64| RankedEntry {
            algorithm,
            average_ms,
        };
        let ranked = rank(vec![
            entry(&BUBBLE_SORT, 4.0),
            entry(&MERGE_SORT, 1.5),
            entry(&INSERTION_SORT, 4.0),
            entry(&QUICK_SORT, 1.5),
        ]);
        let names: Vec<&str> = ranked.iter().map(|e| e.algorithm.name).collect();
        assert_eq!(names, vec!["Merge Sort", "Quick Sort", "Bubble Sort", "Insertion Sort"]);
    }

    #[test]
    fn test_speedup_handles_zero_times() {
        assert_eq!(speedup(2.0, 6.0), 3.0);
        assert_eq!(speedup(0.0, 0.0), 1.0);
        assert!(speedup(0.0, 1.0).is_infinite());
    }
}
