//! Dense direct-cost matrix with explicit absent edges.

use crate::error::MatrixError;

/// A dense n×n matrix of direct travel costs stored in row-major order.
///
/// Each cell is either `Some(cost)` for a direct link or `None` when the two
/// locations are not directly connected. A zero-cost link is a real edge and
/// is distinct from "no edge". Diagonal cells are never consulted.
///
/// # Examples
///
/// ```
/// use u_itinerary::distance::DistanceMatrix;
///
/// let mut dm = DistanceMatrix::new(3);
/// dm.set_edge(0, 1, 10.0);
/// dm.set_edge(1, 2, 0.0);
/// assert_eq!(dm.edge(0, 1), Some(10.0));
/// assert_eq!(dm.edge(2, 1), Some(0.0));
/// assert_eq!(dm.edge(0, 2), None);
/// assert!(dm.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<Option<f64>>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a matrix of the given size with no edges.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![None; size * size],
            size,
        }
    }

    /// Creates a matrix from explicit rows, where `None` marks a missing edge.
    ///
    /// Fails with [`MatrixError::NotSquare`] if any row length differs from
    /// the number of rows. Weights are not validated here; see [`validate`](Self::validate).
    pub fn from_rows(rows: &[Vec<Option<f64>>]) -> Result<Self, MatrixError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(MatrixError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            data.extend_from_slice(values);
        }
        Ok(Self { data, size })
    }

    /// Creates a matrix from rows that use `0` as the "no direct edge" marker.
    ///
    /// Every zero off the diagonal becomes an absent edge, so this encoding
    /// cannot express zero-cost links.
    ///
    /// ```
    /// use u_itinerary::distance::DistanceMatrix;
    ///
    /// let dm = DistanceMatrix::from_zero_sentinel(&[
    ///     vec![0.0, 5.0, 0.0],
    ///     vec![5.0, 0.0, 7.0],
    ///     vec![0.0, 7.0, 0.0],
    /// ])
    /// .unwrap();
    /// assert_eq!(dm.edge(0, 1), Some(5.0));
    /// assert_eq!(dm.edge(0, 2), None);
    /// ```
    pub fn from_zero_sentinel(rows: &[Vec<f64>]) -> Result<Self, MatrixError> {
        let converted: Vec<Vec<Option<f64>>> = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&w| if w == 0.0 { None } else { Some(w) })
                    .collect()
            })
            .collect();
        Self::from_rows(&converted)
    }

    /// Returns the direct cost from `from` to `to`, or `None` if there is no
    /// direct edge. Always `None` on the diagonal.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn edge(&self, from: usize, to: usize) -> Option<f64> {
        if from == to {
            return None;
        }
        self.data[from * self.size + to]
    }

    /// Sets one directed cell.
    pub fn set(&mut self, from: usize, to: usize, cost: Option<f64>) {
        self.data[from * self.size + to] = cost;
    }

    /// Sets an undirected edge (both cells).
    pub fn set_edge(&mut self, a: usize, b: usize, cost: f64) {
        self.set(a, b, Some(cost));
        self.set(b, a, Some(cost));
    }

    /// Removes an undirected edge (both cells).
    pub fn remove_edge(&mut self, a: usize, b: usize) {
        self.set(a, b, None);
        self.set(b, a, None);
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of undirected edges (pairs `i < j` with a direct cost).
    pub fn edge_count(&self) -> usize {
        let mut count = 0;
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.edge(i, j).is_some() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Returns `true` if every off-diagonal pair agrees in both directions.
    pub fn is_symmetric(&self) -> bool {
        self.first_asymmetry().is_none()
    }

    fn first_asymmetry(&self) -> Option<(usize, usize)> {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.edge(i, j) != self.edge(j, i) {
                    return Some((i, j));
                }
            }
        }
        None
    }

    /// Checks that every off-diagonal weight is finite and non-negative and
    /// that the matrix is symmetric.
    pub fn validate(&self) -> Result<(), MatrixError> {
        for from in 0..self.size {
            for to in 0..self.size {
                let Some(weight) = self.edge(from, to) else {
                    continue;
                };
                if !weight.is_finite() {
                    return Err(MatrixError::NonFiniteWeight { from, to });
                }
                if weight < 0.0 {
                    return Err(MatrixError::NegativeWeight { from, to, weight });
                }
            }
        }
        if let Some((from, to)) = self.first_asymmetry() {
            return Err(MatrixError::Asymmetric { from, to });
        }
        Ok(())
    }
}
