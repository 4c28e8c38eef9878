use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::{Graph, ShortestPathFinder};
use crate::BenchResult;
use crate::core::AlgorithmDescriptor;
use crate::core::descriptor::DIJKSTRA;

/// Distance reported for vertices with no path from the start vertex.
pub const UNREACHABLE: u64 = u64::MAX;

/// Dijkstra's algorithm with a binary heap and lazy deletion.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    cost: u64,
    vertex: usize,
}

// Min-heap on cost; equal costs pop the lower vertex first.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl ShortestPathFinder for Dijkstra {
    fn descriptor(&self) -> &'static AlgorithmDescriptor {
        &DIJKSTRA
    }

    fn find_shortest_paths(&self, graph: &Graph, start: usize) -> BenchResult<Vec<u64>> {
        graph.check_vertex(start)?;
        let mut dist = vec![UNREACHABLE; graph.vertex_count()];
        let mut heap = BinaryHeap::new();

        dist[start] = 0;
        heap.push(State {
            cost: 0,
            vertex: start,
        });

        while let Some(State { cost, vertex }) = heap.pop() {
            if cost > dist[vertex] {
                continue;
            }
            for edge in graph.edges(vertex) {
                // Saturate so a path never collides with the sentinel.
                let next_cost = cost.saturating_add(edge.weight).min(UNREACHABLE - 1);
                if next_cost < dist[edge.destination] {
                    dist[edge.destination] = next_cost;
                    heap.push(State {
                        cost: next_cost,
                        vertex: edge.destination,
                    });
                }
            }
        }
        Ok(dist)
    }
}
