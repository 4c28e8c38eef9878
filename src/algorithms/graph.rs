//! Weighted directed graph as an adjacency list.
//!
//! Vertices are dense indices `0..vertex_count`. Edges keep insertion order per source,
//! which is the neighbour order every traversal follows. Self-loops and parallel edges are
//! accepted as given.

use serde::{Deserialize, Serialize};

use crate::{BenchError, BenchResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub destination: usize,
    pub weight: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

/// Serialized form of a graph: a vertex count plus `(source, destination, weight)` triples.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EdgeList {
    pub vertices: usize,
    #[serde(default)]
    pub edges: Vec<(usize, usize, u64)>,
}

impl Graph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Graph {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Build a graph from `(source, destination, weight)` triples, in order.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize, u64)]) -> BenchResult<Self> {
        let mut graph = Graph::new(vertex_count);
        for &(source, destination, weight) in edges {
            graph.add_edge(source, destination, weight)?;
        }
        Ok(graph)
    }

    pub fn from_edge_list(list: &EdgeList) -> BenchResult<Self> {
        Graph::from_edges(list.vertices, &list.edges)
    }

    pub fn to_edge_list(&self) -> EdgeList {
        let edges = self
            .adjacency
            .iter()
            .enumerate()
            .flat_map(|(source, out)| out.iter().map(move |e| (source, e.destination, e.weight)))
            .collect();
        EdgeList {
            vertices: self.vertex_count(),
            edges,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|out| out.len()).sum()
    }

    /// Add a directed edge `source -> destination`.
    ///
    /// # Errors
    /// `InvalidArgument` if either endpoint is not a vertex.
    pub fn add_edge(&mut self, source: usize, destination: usize, weight: u64) -> BenchResult<()> {
        self.check_vertex(source)?;
        self.check_vertex(destination)?;
        self.adjacency[source].push(Edge {
            destination,
            weight,
        });
        Ok(())
    }

    /// Outgoing edges of `vertex` in insertion order; empty for unknown vertices.
    pub fn edges(&self, vertex: usize) -> &[Edge] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn neighbours(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges(vertex).iter().map(|e| e.destination)
    }

    pub fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.adjacency.len()
    }

    pub fn check_vertex(&self, vertex: usize) -> BenchResult<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(BenchError::InvalidArgument(format!(
                "vertex {vertex} out of range for graph with {} vertices",
                self.vertex_count()
            )))
        }
    }
}
