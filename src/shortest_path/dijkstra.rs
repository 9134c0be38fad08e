//! Single-source Dijkstra over the location graph.
//!
//! # Algorithm
//!
//! Binary-heap Dijkstra with lazy deletion: a popped entry whose cost is
//! larger than the settled distance is skipped. Relaxation is strict, so the
//! first predecessor found at a given cost is kept. Heap ties are popped in
//! ascending node order, which makes the predecessor tree deterministic.
//!
//! # Complexity
//!
//! O((V + E) log V) per source.
//!
//! # Reference
//!
//! Dijkstra, E.W. (1959). "A note on two problems in connexion with graphs",
//! *Numerische Mathematik* 1, 269-271.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::distance::Graph;

/// Distances and predecessors from one source.
#[derive(Debug, Clone)]
pub struct SingleSource {
    /// `distances[v]` is the shortest cost from the source, `INFINITY` if unreachable.
    pub distances: Vec<f64>,
    /// `predecessors[v]` is the node before `v` on its shortest path.
    pub predecessors: Vec<Option<usize>>,
}

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node: usize,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap on cost, then on node index
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Runs Dijkstra from `source` over a graph with non-negative weights.
///
/// # Examples
///
/// ```
/// use u_itinerary::distance::{DistanceMatrix, Graph};
/// use u_itinerary::shortest_path::dijkstra;
///
/// let mut dm = DistanceMatrix::new(3);
/// dm.set_edge(0, 1, 1.0);
/// dm.set_edge(1, 2, 2.0);
/// dm.set_edge(0, 2, 5.0);
///
/// let result = dijkstra(&Graph::from_matrix(&dm), 0);
/// assert_eq!(result.distances, vec![0.0, 1.0, 3.0]);
/// assert_eq!(result.predecessors[2], Some(1));
/// ```
pub fn dijkstra(graph: &Graph, source: usize) -> SingleSource {
    let n = graph.node_count();
    let mut distances = vec![f64::INFINITY; n];
    let mut predecessors = vec![None; n];
    let mut heap = BinaryHeap::new();

    distances[source] = 0.0;
    heap.push(State {
        cost: 0.0,
        node: source,
    });

    while let Some(State { cost, node }) = heap.pop() {
        if cost > distances[node] {
            continue;
        }

        for &(neighbor, weight) in graph.neighbors(node) {
            let next_cost = cost + weight;
            if next_cost < distances[neighbor] {
                distances[neighbor] = next_cost;
                predecessors[neighbor] = Some(node);
                heap.push(State {
                    cost: next_cost,
                    node: neighbor,
                });
            }
        }
    }

    SingleSource {
        distances,
        predecessors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;

    #[test]
    fn test_prefers_indirect_route() {
        let mut dm = DistanceMatrix::new(4);
        dm.set_edge(0, 1, 10.0);
        dm.set_edge(1, 2, 10.0);
        dm.set_edge(2, 3, 10.0);
        dm.set_edge(0, 3, 100.0);
        let r = dijkstra(&Graph::from_matrix(&dm), 0);
        assert_eq!(r.distances, vec![0.0, 10.0, 20.0, 30.0]);
        assert_eq!(r.predecessors, vec![None, Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn test_unreachable_is_infinite() {
        let mut dm = DistanceMatrix::new(3);
        dm.set_edge(0, 1, 1.0);
        let r = dijkstra(&Graph::from_matrix(&dm), 0);
        assert!(r.distances[2].is_infinite());
        assert_eq!(r.predecessors[2], None);
    }

    #[test]
    fn test_zero_weight_edge() {
        let mut dm = DistanceMatrix::new(3);
        dm.set_edge(0, 1, 0.0);
        dm.set_edge(1, 2, 3.0);
        let r = dijkstra(&Graph::from_matrix(&dm), 0);
        assert_eq!(r.distances, vec![0.0, 0.0, 3.0]);
    }

    #[test]
    fn test_tie_keeps_first_predecessor() {
        // 0-1-3 and 0-2-3 both cost 2; node 1 settles first.
        let mut dm = DistanceMatrix::new(4);
        dm.set_edge(0, 1, 1.0);
        dm.set_edge(0, 2, 1.0);
        dm.set_edge(1, 3, 1.0);
        dm.set_edge(2, 3, 1.0);
        let r = dijkstra(&Graph::from_matrix(&dm), 0);
        assert_eq!(r.distances[3], 2.0);
        assert_eq!(r.predecessors[3], Some(1));
    }
}
