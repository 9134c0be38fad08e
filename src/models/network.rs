//! Location network: the validated graph model.

use crate::distance::DistanceMatrix;
use crate::error::{MatrixError, PlanError, Result};

use super::Location;

/// Locations together with their direct-cost matrix.
///
/// Construction validates the matrix (square, finite, non-negative,
/// symmetric), that there is one location per matrix row, and that location
/// names are unique.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::{Location, Network};
///
/// let network = Network::from_zero_sentinel(
///     vec![
///         Location::new("A", 0.0, 0.0),
///         Location::new("B", 1.0, 0.0),
///     ],
///     &[vec![0.0, 4.0], vec![4.0, 0.0]],
/// )
/// .unwrap();
/// assert_eq!(network.len(), 2);
/// assert_eq!(network.index_of("B"), Some(1));
/// assert_eq!(network.matrix().edge(0, 1), Some(4.0));
/// ```
#[derive(Debug, Clone)]
pub struct Network {
    locations: Vec<Location>,
    matrix: DistanceMatrix,
}

impl Network {
    /// Creates a network from locations and an explicit matrix.
    pub fn new(locations: Vec<Location>, matrix: DistanceMatrix) -> Result<Self> {
        if locations.len() != matrix.size() {
            return Err(MatrixError::SizeMismatch {
                locations: locations.len(),
                matrix: matrix.size(),
            }
            .into());
        }
        matrix.validate()?;
        for (i, loc) in locations.iter().enumerate() {
            if locations[..i].iter().any(|other| other.name() == loc.name()) {
                return Err(PlanError::DuplicateName(loc.name().to_string()));
            }
        }
        Ok(Self { locations, matrix })
    }

    /// Creates a network from rows that use `0` as the "no direct edge" marker.
    pub fn from_zero_sentinel(locations: Vec<Location>, rows: &[Vec<f64>]) -> Result<Self> {
        let matrix = DistanceMatrix::from_zero_sentinel(rows)?;
        Self::new(locations, matrix)
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns `true` if the network has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// All locations, indexed like the matrix.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Location at `index`, if in range.
    pub fn location(&self, index: usize) -> Option<&Location> {
        self.locations.get(index)
    }

    /// Name of the location at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn name(&self, index: usize) -> &str {
        self.locations[index].name()
    }

    /// The direct-cost matrix.
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Index of the location named `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.locations.iter().position(|l| l.name() == name)
    }

    /// Like [`index_of`](Self::index_of) but fails with [`PlanError::UnknownName`].
    pub fn require_index(&self, name: &str) -> Result<usize> {
        self.index_of(name)
            .ok_or_else(|| PlanError::UnknownName(name.to_string()))
    }

    /// Fails with [`PlanError::UnknownLocation`] if `index` is out of range.
    pub fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(PlanError::UnknownLocation {
                index,
                len: self.len(),
            })
        }
    }

    /// Maps location indices to names.
    pub fn names_of(&self, indices: &[usize]) -> Vec<String> {
        indices
            .iter()
            .map(|&i| self.name(i).to_string())
            .collect()
    }
}
