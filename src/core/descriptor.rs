//! Static metadata for every algorithm variant the harness knows about.
//!
//! Descriptors are `'static` items: one instance per variant for the whole process,
//! shared by reference from every `PerformanceResult` that mentions it.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::BenchError;

/// Algorithm family. Determines the shape of the input a variant consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sorting,
    Searching,
    Graph,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Sorting, Category::Searching, Category::Graph];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sorting => "sorting",
            Category::Searching => "searching",
            Category::Graph => "graph",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sorting" | "sort" => Ok(Category::Sorting),
            "searching" | "search" => Ok(Category::Searching),
            "graph" | "graphs" => Ok(Category::Graph),
            other => Err(BenchError::InvalidArgument(format!(
                "unknown category '{other}' (expected sorting, searching or graph)"
            ))),
        }
    }
}

/// Immutable description of one algorithm variant.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct AlgorithmDescriptor {
    /// Machine-friendly identifier (e.g. `quick_sort`)
    pub id: &'static str,
    /// Display name, also the grouping key in `ResultStore`
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
}

pub static BUBBLE_SORT: AlgorithmDescriptor = AlgorithmDescriptor {
    id: "bubble_sort",
    name: "Bubble Sort",
    description: "Repeatedly swaps adjacent out-of-order elements until a full pass makes no swap",
    category: Category::Sorting,
    time_complexity: "O(n^2)",
    space_complexity: "O(1)",
};

pub static INSERTION_SORT: AlgorithmDescriptor = AlgorithmDescriptor {
    id: "insertion_sort",
    name: "Insertion Sort",
    description: "Grows a sorted prefix by inserting each element into its place",
    category: Category::Sorting,
    time_complexity: "O(n^2)",
    space_complexity: "O(1)",
};

pub static SELECTION_SORT: AlgorithmDescriptor = AlgorithmDescriptor {
    id: "selection_sort",
    name: "Selection Sort",
    description: "Repeatedly selects the minimum of the unsorted suffix and moves it to the front",
    category: Category::Sorting,
    time_complexity: "O(n^2)",
    space_complexity: "O(1)",
};

pub static MERGE_SORT: AlgorithmDescriptor = AlgorithmDescriptor {
    id: "merge_sort",
    name: "Merge Sort",
    description: "Stable divide-and-conquer sort that merges sorted halves",
    category: Category::Sorting,
    time_complexity: "O(n log n)",
    space_complexity: "O(n)",
};

pub static QUICK_SORT: AlgorithmDescriptor = AlgorithmDescriptor {
    id: "quick_sort",
    name: "Quick Sort",
    description: "Partitions around a pivot and sorts each side recursively",
    category: Category::Sorting,
    time_complexity: "O(n log n) average, O(n^2) worst",
    space_complexity: "O(log n)",
};

pub static LINEAR_SEARCH: AlgorithmDescriptor = AlgorithmDescriptor {
    id: "linear_search",
    name: "Linear Search",
    description: "Scans elements in order until the target is found",
    category: Category::Searching,
    time_complexity: "O(n)",
    space_complexity: "O(1)",
};

pub static BINARY_SEARCH: AlgorithmDescriptor = AlgorithmDescriptor {
    id: "binary_search",
    name: "Binary Search",
    description: "Halves the search interval of a sorted array on every probe",
    category: Category::Searching,
    time_complexity: "O(log n)",
    space_complexity: "O(1)",
};

pub static DEPTH_FIRST_SEARCH: AlgorithmDescriptor = AlgorithmDescriptor {
    id: "dfs",
    name: "Depth-First Search",
    description: "Visits vertices in pre-order, following each branch as deep as possible",
    category: Category::Graph,
    time_complexity: "O(V + E)",
    space_complexity: "O(V)",
};

pub static BREADTH_FIRST_SEARCH: AlgorithmDescriptor = AlgorithmDescriptor {
    id: "bfs",
    name: "Breadth-First Search",
    description: "Visits vertices level by level using a FIFO queue",
    category: Category::Graph,
    time_complexity: "O(V + E)",
    space_complexity: "O(V)",
};

pub static DIJKSTRA: AlgorithmDescriptor = AlgorithmDescriptor {
    id: "dijkstra",
    name: "Dijkstra's Algorithm",
    description: "Single-source shortest paths over non-negative edge weights",
    category: Category::Graph,
    time_complexity: "O((V + E) log V)",
    space_complexity: "O(V)",
};

static CATALOG: [&AlgorithmDescriptor; 10] = [
    &BUBBLE_SORT,
    &INSERTION_SORT,
    &SELECTION_SORT,
    &MERGE_SORT,
    &QUICK_SORT,
    &LINEAR_SEARCH,
    &BINARY_SEARCH,
    &DEPTH_FIRST_SEARCH,
    &BREADTH_FIRST_SEARCH,
    &DIJKSTRA,
];

/// Every known descriptor, grouped by category in catalog order.
pub fn catalog() -> &'static [&'static AlgorithmDescriptor] {
    &CATALOG
}

pub fn descriptors(category: Category) -> Vec<&'static AlgorithmDescriptor> {
    CATALOG
        .iter()
        .copied()
        .filter(|d| d.category == category)
        .collect()
}

/// Look up a descriptor by id or display name, ignoring case.
pub fn find_descriptor(name: &str) -> Option<&'static AlgorithmDescriptor> {
    let needle = name.trim();
    CATALOG
        .iter()
        .copied()
        .find(|d| d.id.eq_ignore_ascii_case(needle) || d.name.eq_ignore_ascii_case(needle))
}
