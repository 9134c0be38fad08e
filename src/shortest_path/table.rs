//! All-pairs shortest-path table.

use tracing::debug;

use crate::distance::{DistanceMatrix, Graph};
use crate::error::{PlanError, Result};

use super::dijkstra;

/// Shortest distances and routes between every pair of locations.
///
/// Built once per [`DistanceMatrix`] by running Dijkstra from every source.
/// Distances and predecessor trees are stored in flat row-major arrays;
/// paths are assembled on demand by walking predecessors back from the
/// target. Entries for `u < v` are authoritative and mirrored, so
/// `distance(u, v) == distance(v, u)` holds bit for bit. Disconnected
/// pairs are kept as "no path" rather than failing construction.
///
/// # Examples
///
/// ```
/// use u_itinerary::distance::DistanceMatrix;
/// use u_itinerary::shortest_path::ShortestPathTable;
///
/// let mut dm = DistanceMatrix::new(4);
/// dm.set_edge(0, 1, 10.0);
/// dm.set_edge(1, 2, 10.0);
/// dm.set_edge(2, 3, 10.0);
/// dm.set_edge(0, 3, 100.0);
///
/// let table = ShortestPathTable::compute_all_pairs(&dm).unwrap();
/// assert_eq!(table.distance(0, 3), Some(30.0));
/// assert_eq!(table.path(0, 3), Some(vec![0, 1, 2, 3]));
/// assert_eq!(table.path(2, 2), Some(vec![2]));
/// ```
#[derive(Debug, Clone)]
pub struct ShortestPathTable {
    size: usize,
    distances: Vec<f64>,
    predecessors: Vec<Option<usize>>,
}

impl ShortestPathTable {
    /// Validates `matrix` and computes shortest paths between all pairs.
    ///
    /// Fails with [`PlanError::InvalidMatrix`] if the matrix has negative,
    /// non-finite, or asymmetric entries.
    pub fn compute_all_pairs(matrix: &DistanceMatrix) -> Result<Self> {
        matrix.validate()?;

        let graph = Graph::from_matrix(matrix);
        let size = graph.node_count();
        let mut distances = Vec::with_capacity(size * size);
        let mut predecessors = Vec::with_capacity(size * size);

        for source in 0..size {
            let row = dijkstra(&graph, source);
            distances.extend(row.distances);
            predecessors.extend(row.predecessors);
        }
        // Float sums depend on direction; the row of the lower index wins.
        for u in 0..size {
            for v in (u + 1)..size {
                distances[v * size + u] = distances[u * size + v];
            }
        }

        let table = Self {
            size,
            distances,
            predecessors,
        };
        debug!(
            locations = size,
            edges = graph.edge_count(),
            unreachable_pairs = table.unreachable_pairs().len(),
            "computed all-pairs shortest paths"
        );
        Ok(table)
    }

    /// Number of locations covered.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Shortest cost from `from` to `to`, or `None` if unreachable.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn distance(&self, from: usize, to: usize) -> Option<f64> {
        let d = self.distances[from * self.size + to];
        d.is_finite().then_some(d)
    }

    /// Shortest route from `from` to `to` including both endpoints, or
    /// `None` if unreachable.
    ///
    /// `path(v, u)` is always `path(u, v)` reversed.
    pub fn path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        self.distance(from, to)?;
        if from > to {
            let mut path = self.path(to, from)?;
            path.reverse();
            return Some(path);
        }

        let row = &self.predecessors[from * self.size..(from + 1) * self.size];
        let mut path = vec![to];
        let mut current = to;
        while let Some(prev) = row[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }

    /// Like [`distance`](Self::distance) but fails with [`PlanError::Unreachable`].
    pub fn require_distance(&self, from: usize, to: usize) -> Result<f64> {
        self.check_index(from)?;
        self.check_index(to)?;
        self.distance(from, to)
            .ok_or(PlanError::Unreachable { from, to })
    }

    /// Like [`path`](Self::path) but fails with [`PlanError::Unreachable`].
    pub fn require_path(&self, from: usize, to: usize) -> Result<Vec<usize>> {
        self.check_index(from)?;
        self.check_index(to)?;
        self.path(from, to).ok_or(PlanError::Unreachable { from, to })
    }

    /// Fails with [`PlanError::UnknownLocation`] if `index` is out of range.
    pub fn check_index(&self, index: usize) -> Result<()> {
        if index < self.size {
            Ok(())
        } else {
            Err(PlanError::UnknownLocation {
                index,
                len: self.size,
            })
        }
    }

    /// Returns `true` if every location can reach every other.
    pub fn is_connected(&self) -> bool {
        self.distances.iter().all(|d| d.is_finite())
    }

    /// Unordered pairs `(u, v)` with `u < v` that have no connecting path.
    pub fn unreachable_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for u in 0..self.size {
            for v in (u + 1)..self.size {
                if self.distance(u, v).is_none() {
                    pairs.push((u, v));
                }
            }
        }
        pairs
    }
}

/// Computes the all-pairs shortest-path table for `matrix`.
///
/// Shorthand for [`ShortestPathTable::compute_all_pairs`].
pub fn compute_all_pairs(matrix: &DistanceMatrix) -> Result<ShortestPathTable> {
    ShortestPathTable::compute_all_pairs(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;
    use proptest::prelude::*;

    fn worked_example() -> DistanceMatrix {
        DistanceMatrix::from_zero_sentinel(&[
            vec![0.0, 10.0, 0.0, 100.0],
            vec![10.0, 0.0, 10.0, 0.0],
            vec![0.0, 10.0, 0.0, 10.0],
            vec![100.0, 0.0, 10.0, 0.0],
        ])
        .expect("square")
    }

    #[test]
    fn test_worked_example_paths() {
        let t = compute_all_pairs(&worked_example()).expect("valid");
        assert_eq!(t.distance(0, 2), Some(20.0));
        assert_eq!(t.path(0, 2), Some(vec![0, 1, 2]));
        assert_eq!(t.path(2, 0), Some(vec![2, 1, 0]));
        assert_eq!(t.distance(3, 0), Some(30.0));
        assert!(t.is_connected());
        assert!(t.unreachable_pairs().is_empty());
    }

    #[test]
    fn test_self_distance() {
        let t = compute_all_pairs(&worked_example()).expect("valid");
        for u in 0..4 {
            assert_eq!(t.distance(u, u), Some(0.0));
            assert_eq!(t.path(u, u), Some(vec![u]));
        }
    }

    #[test]
    fn test_disconnected_pair() {
        let mut dm = DistanceMatrix::new(4);
        dm.set_edge(0, 1, 5.0);
        dm.set_edge(2, 3, 5.0);
        let t = compute_all_pairs(&dm).expect("valid");
        assert_eq!(t.distance(0, 3), None);
        assert_eq!(t.path(1, 2), None);
        assert_eq!(
            t.require_distance(0, 3),
            Err(PlanError::Unreachable { from: 0, to: 3 })
        );
        assert_eq!(
            t.require_path(3, 1),
            Err(PlanError::Unreachable { from: 3, to: 1 })
        );
        assert!(!t.is_connected());
        assert_eq!(t.unreachable_pairs(), vec![(0, 2), (0, 3), (1, 2), (1, 3)]);
    }

    #[test]
    fn test_isolated_location() {
        let mut dm = DistanceMatrix::new(3);
        dm.set_edge(0, 1, 2.0);
        let t = compute_all_pairs(&dm).expect("valid");
        assert_eq!(t.distance(2, 2), Some(0.0));
        assert_eq!(
            t.require_distance(2, 0),
            Err(PlanError::Unreachable { from: 2, to: 0 })
        );
    }

    #[test]
    fn test_fractional_weights_symmetric() {
        let mut dm = DistanceMatrix::new(4);
        dm.set_edge(0, 1, 0.1);
        dm.set_edge(1, 2, 0.2);
        dm.set_edge(2, 3, 0.3);
        let t = compute_all_pairs(&dm).expect("valid");
        assert_eq!(t.distance(0, 3), t.distance(3, 0));
        assert_eq!(t.distance(0, 3), Some(0.1 + 0.2 + 0.3));
        assert_eq!(t.path(0, 3), Some(vec![0, 1, 2, 3]));
        assert_eq!(t.path(3, 0), Some(vec![3, 2, 1, 0]));
    }

    #[test]
    fn test_out_of_range() {
        let t = compute_all_pairs(&worked_example()).expect("valid");
        assert_eq!(
            t.require_distance(0, 9),
            Err(PlanError::UnknownLocation { index: 9, len: 4 })
        );
    }

    #[test]
    fn test_invalid_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, Some(1.0));
        assert_eq!(
            compute_all_pairs(&dm).expect_err("asymmetric"),
            PlanError::InvalidMatrix(MatrixError::Asymmetric { from: 0, to: 1 })
        );
    }

    fn random_matrix() -> impl Strategy<Value = DistanceMatrix> {
        (2usize..8).prop_flat_map(|n| {
            let pairs = n * (n - 1) / 2;
            prop::collection::vec(prop::option::weighted(0.5, 0u32..5000), pairs).prop_map(
                move |weights| {
                    let mut dm = DistanceMatrix::new(n);
                    let mut k = 0;
                    for i in 0..n {
                        for j in (i + 1)..n {
                            if let Some(w) = weights[k] {
                                dm.set_edge(i, j, f64::from(w) / 100.0);
                            }
                            k += 1;
                        }
                    }
                    dm
                },
            )
        })
    }

    proptest! {
        #[test]
        fn prop_distances_symmetric(dm in random_matrix()) {
            let t = compute_all_pairs(&dm).expect("valid");
            for u in 0..dm.size() {
                for v in 0..dm.size() {
                    prop_assert_eq!(t.distance(u, v), t.distance(v, u));
                }
            }
        }

        #[test]
        fn prop_path_matches_distance(dm in random_matrix()) {
            let t = compute_all_pairs(&dm).expect("valid");
            for u in 0..dm.size() {
                for v in 0..dm.size() {
                    match (t.distance(u, v), t.path(u, v)) {
                        (Some(d), Some(path)) => {
                            prop_assert_eq!(path.first().copied(), Some(u));
                            prop_assert_eq!(path.last().copied(), Some(v));
                            let weight: f64 = path
                                .windows(2)
                                .map(|w| dm.edge(w[0], w[1]).expect("path uses edges"))
                                .sum();
                            prop_assert!((weight - d).abs() < 1e-9);
                        }
                        (None, None) => {}
                        other => prop_assert!(false, "distance/path disagree: {:?}", other),
                    }
                }
            }
        }

        #[test]
        fn prop_reverse_path_is_reversed(dm in random_matrix()) {
            let t = compute_all_pairs(&dm).expect("valid");
            for u in 0..dm.size() {
                for v in (u + 1)..dm.size() {
                    let reversed = t.path(u, v).map(|mut p| {
                        p.reverse();
                        p
                    });
                    prop_assert_eq!(t.path(v, u), reversed);
                }
            }
        }

        #[test]
        fn prop_no_shorter_direct_edge(dm in random_matrix()) {
            let t = compute_all_pairs(&dm).expect("valid");
            for u in 0..dm.size() {
                for v in 0..dm.size() {
                    if let Some(w) = dm.edge(u, v) {
                        let d = t.distance(u, v).expect("adjacent implies reachable");
                        prop_assert!(d <= w);
                    }
                }
            }
        }
    }
}
