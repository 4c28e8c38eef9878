//! Algorithm variants and the capability traits they implement.
//!
//! Each family has its own trait because the shapes differ: a `Sorter` maps an array to
//! an array, a `Searcher` maps an array and a target to an index, and the graph traits map
//! a graph and a start vertex to a visit order or a distance table. Variants are stateless
//! unit structs; construct them wherever they are needed.

pub mod graph;
pub mod searching;
pub mod shortest_path;
pub mod sorting;
pub mod traversal;

pub use graph::{Edge, Graph};
pub use searching::{BinarySearch, LinearSearch};
pub use shortest_path::{Dijkstra, UNREACHABLE};
pub use sorting::{BubbleSort, InsertionSort, MergeSort, QuickSort, SelectionSort};
pub use traversal::{BreadthFirstSearch, DepthFirstSearch};

use crate::BenchResult;
use crate::core::AlgorithmDescriptor;

/// Sequence to sequence: returns the input values in ascending order.
pub trait Sorter: Send + Sync {
    fn descriptor(&self) -> &'static AlgorithmDescriptor;

    /// Sort `input`, which the implementation is free to reorder in place.
    ///
    /// Callers that time repeated runs must hand every run its own copy.
    fn sort(&self, input: Vec<i32>) -> Vec<i32>;
}

/// Sequence and target to index.
pub trait Searcher: Send + Sync {
    fn descriptor(&self) -> &'static AlgorithmDescriptor;

    /// Returns an index `i` with `input[i] == target`, or `None` when absent.
    fn search(&self, input: &[i32], target: i32) -> Option<usize>;

    /// Whether `search` is only meaningful on ascending input. Not checked by `search`.
    fn requires_sorted_input(&self) -> bool {
        false
    }
}

/// Graph and start vertex to visit order. Unreachable vertices are omitted.
pub trait GraphTraverser: Send + Sync {
    fn descriptor(&self) -> &'static AlgorithmDescriptor;

    /// # Errors
    /// `InvalidArgument` if `start` is not a vertex of `graph`.
    fn traverse(&self, graph: &Graph, start: usize) -> BenchResult<Vec<usize>>;
}

/// Graph and start vertex to a distance per vertex (`UNREACHABLE` when there is no path).
pub trait ShortestPathFinder: Send + Sync {
    fn descriptor(&self) -> &'static AlgorithmDescriptor;

    /// # Errors
    /// `InvalidArgument` if `start` is not a vertex of `graph`.
    fn find_shortest_paths(&self, graph: &Graph, start: usize) -> BenchResult<Vec<u64>>;
}
