//! Unweighted traversals. Edge weights are ignored; neighbours are visited in
//! adjacency (insertion) order.

use std::collections::VecDeque;

use super::{Graph, GraphTraverser};
use crate::BenchResult;
use crate::core::AlgorithmDescriptor;
use crate::core::descriptor::{BREADTH_FIRST_SEARCH, DEPTH_FIRST_SEARCH};

#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstSearch;

#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirstSearch;

impl GraphTraverser for DepthFirstSearch {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &DEPTH_FIRST_SEARCH
    }

    /// Recursive pre-order. Recursion depth grows with the longest simple path explored.
    fn traverse(&self, graph: &Graph, start: usize) -> BenchResult<Vec<usize>> {
        fn visit(graph: &Graph, vertex: usize, visited: &mut [bool], order: &mut Vec<usize>) {
            visited[vertex] = true;
            order.push(vertex);
            for next in graph.neighbours(vertex) {
                if !visited[next] {
                    visit(graph, next, visited, order);
                }
            }
        }

        graph.check_vertex(start)?;
        let mut visited = vec![false; graph.vertex_count()];
        let mut order = Vec::new();
        visit(graph, start, &mut visited, &mut order);
        Ok(order)
    }
}

impl GraphTraverser for BreadthFirstSearch {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &BREADTH_FIRST_SEARCH
    }

    fn traverse(&self, graph: &Graph, start: usize) -> BenchResult<Vec<usize>> {
        graph.check_vertex(start)?;
        let mut visited = vec![false; graph.vertex_count()];
        let mut queue = VecDeque::new();
        let mut order = Vec::new();

        visited[start] = true;
        queue.push_back(start);

        while let Some(vertex) = queue.pop_front() {
            order.push(vertex);
            for next in graph.neighbours(vertex) {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
        Ok(order)
    }
}

/// Hop count from `start` to every vertex, `None` when unreachable.
pub fn hop_counts(graph: &Graph, start: usize) -> BenchResult<Vec<Option<usize>>> {
    graph.check_vertex(start)?;
    let mut hops = vec![None; graph.vertex_count()];
    let mut queue = VecDeque::new();
    hops[start] = Some(0);
    queue.push_back(start);
    while let Some(vertex) = queue.pop_front() {
        let depth = hops[vertex].unwrap_or(0);
        for next in graph.neighbours(vertex) {
            if hops[next].is_none() {
                hops[next] = Some(depth + 1);
                queue.push_back(next);
            }
        }
    }
    Ok(hops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BenchError;

    fn example_graph() -> Graph {
        Graph::from_edges(4, &[(0, 1, 1), (0, 2, 1), (1, 3, 1)]).unwrap()
    }

    #[test]
    fn test_dfs_pre_order() {
        assert_eq!(DepthFirstSearch.traverse(&example_graph(), 0).unwrap(), vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_bfs_level_order() {
        assert_eq!(BreadthFirstSearch.traverse(&example_graph(), 0).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_unreachable_vertices_omitted() {
        let graph = Graph::from_edges(5, &[(0, 1, 1), (3, 4, 1), (4, 0, 1)]).unwrap();
        assert_eq!(DepthFirstSearch.traverse(&graph, 0).unwrap(), vec![0, 1]);
        assert_eq!(BreadthFirstSearch.traverse(&graph, 0).unwrap(), vec![0, 1]);
        assert_eq!(BreadthFirstSearch.traverse(&graph, 3).unwrap(), vec![3, 4, 0, 1]);
    }

    #[test]
    fn test_cycles_and_self_loops_visit_once() {
        let graph = Graph::from_edges(3, &[(0, 0, 1), (0, 1, 1), (1, 2, 1), (2, 0, 1), (1, 0, 1)]).unwrap();
        assert_eq!(DepthFirstSearch.traverse(&graph, 0).unwrap(), vec![0, 1, 2]);
        assert_eq!(BreadthFirstSearch.traverse(&graph, 2).unwrap(), vec![2, 0, 1]);
    }

    #[test]
    fn test_invalid_start_rejected() {
        let graph = example_graph();
        assert!(matches!(
            DepthFirstSearch.traverse(&graph, 4),
            Err(BenchError::InvalidArgument(_))
        ));
        assert!(BreadthFirstSearch.traverse(&Graph::new(0), 0).is_err());
    }

    #[test]
    fn test_bfs_order_is_non_decreasing_in_hops() {
        let graph = Graph::from_edges(
            6,
            &[(0, 3, 1), (3, 4, 1), (0, 1, 1), (1, 5, 1), (4, 2, 1), (5, 2, 1)],
        )
        .unwrap();
        let order = BreadthFirstSearch.traverse(&graph, 0).unwrap();
        let hops = hop_counts(&graph, 0).unwrap();
        let depths: Vec<usize> = order.iter().map(|&v| hops[v].unwrap()).collect();
        assert!(depths.windows(2).all(|w| w[0] <= w[1]));
    }
}
