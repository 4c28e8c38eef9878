//! Pairs a variant with a compatible input and measures it.

use std::fmt;

use serde::Serialize;
use tracing::info;

use super::runner::BenchmarkRunner;
use crate::algorithms::{
    BinarySearch, BreadthFirstSearch, BubbleSort, DepthFirstSearch, Dijkstra, Graph,
    GraphTraverser, InsertionSort, LinearSearch, MergeSort, QuickSort, Searcher, SelectionSort,
    ShortestPathFinder, Sorter,
};
use crate::core::{AlgorithmDescriptor, Category, PerformanceResult, descriptors, find_descriptor};
use crate::{BenchError, BenchResult};

/// One algorithm variant, tagged by capability.
pub enum Variant {
    Sort(Box<dyn Sorter>),
    Search(Box<dyn Searcher>),
    Traverse(Box<dyn GraphTraverser>),
    ShortestPath(Box<dyn ShortestPathFinder>),
}

impl Variant {
    pub fn descriptor(&self) -> &'static AlgorithmDescriptor {
        match self {
            Variant::Sort(s) => s.descriptor(),
            Variant::Search(s) => s.descriptor(),
            Variant::Traverse(t) => t.descriptor(),
            Variant::ShortestPath(p) => p.descriptor(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.descriptor().name
    }

    pub fn category(&self) -> Category {
        self.descriptor().category
    }

    /// Construct the variant described by `descriptor`.
    pub fn from_descriptor(descriptor: &AlgorithmDescriptor) -> BenchResult<Self> {
        let variant = match descriptor.id {
            "bubble_sort" => Variant::Sort(Box::new(BubbleSort)),
            "insertion_sort" => Variant::Sort(Box::new(InsertionSort)),
            "selection_sort" => Variant::Sort(Box::new(SelectionSort)),
            "merge_sort" => Variant::Sort(Box::new(MergeSort)),
            "quick_sort" => Variant::Sort(Box::new(QuickSort)),
            "linear_search" => Variant::Search(Box::new(LinearSearch)),
            "binary_search" => Variant::Search(Box::new(BinarySearch)),
            "dfs" => Variant::Traverse(Box::new(DepthFirstSearch)),
            "bfs" => Variant::Traverse(Box::new(BreadthFirstSearch)),
            "dijkstra" => Variant::ShortestPath(Box::new(Dijkstra)),
            other => return Err(BenchError::UnknownAlgorithm(other.to_string())),
        };
        Ok(variant)
    }

    /// Construct a variant from its id or display name (case-insensitive).
    pub fn from_name(name: &str) -> BenchResult<Self> {
        let descriptor =
            find_descriptor(name).ok_or_else(|| BenchError::UnknownAlgorithm(name.to_string()))?;
        Variant::from_descriptor(descriptor)
    }

    /// Every variant of `category`, in catalog order.
    pub fn all(category: Category) -> Vec<Variant> {
        descriptors(category)
            .into_iter()
            .filter_map(|d| Variant::from_descriptor(d).ok())
            .collect()
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Variant").field(&self.descriptor().id).finish()
    }
}

/// Logical input shared by all variants of a category.
#[derive(Debug, Clone)]
pub enum Workload {
    Sort { data: Vec<i32> },
    Search { data: Vec<i32>, target: i32 },
    Graph { graph: Graph, start: usize },
}

impl Workload {
    pub fn category(&self) -> Category {
        match self {
            Workload::Sort { .. } => Category::Sorting,
            Workload::Search { .. } => Category::Searching,
            Workload::Graph { .. } => Category::Graph,
        }
    }

    /// Array length, or vertex count for graphs.
    pub fn input_size(&self) -> usize {
        match self {
            Workload::Sort { data } | Workload::Search { data, .. } => data.len(),
            Workload::Graph { graph, .. } => graph.vertex_count(),
        }
    }

    /// Reject a variant whose capability cannot consume this workload, and graph workloads
    /// whose start vertex does not exist.
    pub fn check_compatible(&self, variant: &Variant) -> BenchResult<()> {
        if variant.category() != self.category() {
            return Err(BenchError::InvalidArgument(format!(
                "{} is a {} algorithm and cannot run on a {} workload",
                variant.name(),
                variant.category(),
                self.category()
            )));
        }
        if let Workload::Graph { graph, start } = self {
            graph.check_vertex(*start)?;
        }
        Ok(())
    }
}

/// Output of the last measured run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Output {
    Sorted(Vec<i32>),
    Index(Option<usize>),
    Order(Vec<usize>),
    Distances(Vec<u64>),
}

#[derive(Debug, Clone)]
pub struct Execution {
    pub result: PerformanceResult,
    pub output: Output,
}

/// Benchmark one variant on `workload` with its category's protocol.
///
/// Sorting runs each receive a fresh copy of the array. A searcher that requires sorted
/// input searches a sorted copy, prepared once before warm-up.
///
/// # Errors
/// `InvalidArgument` if the variant does not fit the workload or the start vertex is
/// out of range.
pub fn run(variant: &Variant, workload: &Workload) -> BenchResult<Execution> {
    workload.check_compatible(variant)?;
    let runner = BenchmarkRunner::for_category(workload.category());
    let descriptor = variant.descriptor();

    let (average_ms, output) = match (variant, workload) {
        (Variant::Sort(sorter), Workload::Sort { data }) => {
            let m = runner.run(|| data.clone(), |input| sorter.sort(input));
            (m.average_ms, Output::Sorted(m.output))
        }
        (Variant::Search(searcher), Workload::Search { data, target }) => {
            let mut prepared = data.clone();
            if searcher.requires_sorted_input() {
                prepared.sort_unstable();
            }
            let m = runner.run(|| (), |_| searcher.search(&prepared, *target));
            (m.average_ms, Output::Index(m.output))
        }
        (Variant::Traverse(traverser), Workload::Graph { graph, start }) => {
            let m = runner.run(|| (), |_| traverser.traverse(graph, *start));
            (m.average_ms, Output::Order(m.output?))
        }
        (Variant::ShortestPath(finder), Workload::Graph { graph, start }) => {
            let m = runner.run(|| (), |_| finder.find_shortest_paths(graph, *start));
            (m.average_ms, Output::Distances(m.output?))
        }
        _ => {
            return Err(BenchError::InvalidArgument(format!(
                "{} cannot run on a {} workload",
                descriptor.name,
                workload.category()
            )));
        }
    };

    let result = PerformanceResult::new(descriptor, average_ms, workload.input_size());
    info!(
        algorithm = descriptor.name,
        input_size = result.input_size,
        average_ms,
        "benchmark complete"
    );
    Ok(Execution { result, output })
}
