//! Adjacency-list view of a distance matrix.

use super::DistanceMatrix;

/// Undirected weighted graph induced by a [`DistanceMatrix`].
///
/// An edge exists between distinct locations `i` and `j` exactly when the
/// matrix holds a direct cost for them. Neighbor lists are in ascending
/// index order.
///
/// # Examples
///
/// ```
/// use u_itinerary::distance::{DistanceMatrix, Graph};
///
/// let mut dm = DistanceMatrix::new(3);
/// dm.set_edge(0, 1, 4.0);
/// dm.set_edge(0, 2, 9.0);
///
/// let g = Graph::from_matrix(&dm);
/// assert_eq!(g.neighbors(0), &[(1, 4.0), (2, 9.0)]);
/// assert_eq!(g.neighbors(1), &[(0, 4.0)]);
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: Vec<Vec<(usize, f64)>>,
}

impl Graph {
    /// Builds the adjacency lists from a matrix.
    pub fn from_matrix(matrix: &DistanceMatrix) -> Self {
        let n = matrix.size();
        let adjacency = (0..n)
            .map(|from| {
                (0..n)
                    .filter_map(|to| matrix.edge(from, to).map(|w| (to, w)))
                    .collect()
            })
            .collect();
        Self { adjacency }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// `(neighbor, weight)` pairs adjacent to `node`.
    pub fn neighbors(&self, node: usize) -> &[(usize, f64)] {
        &self.adjacency[node]
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isolated_node() {
        let mut dm = DistanceMatrix::new(3);
        dm.set_edge(0, 1, 1.0);
        let g = Graph::from_matrix(&dm);
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 1);
        assert!(g.neighbors(2).is_empty());
    }

    #[test]
    fn test_zero_cost_edge_is_adjacent() {
        let mut dm = DistanceMatrix::new(2);
        dm.set_edge(0, 1, 0.0);
        let g = Graph::from_matrix(&dm);
        assert_eq!(g.neighbors(1), &[(0, 0.0)]);
    }
}
