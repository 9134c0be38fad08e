//! Ordered stop sets with a fixed anchor.

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// An ordered, non-empty set of distinct location indices.
///
/// The first stop is the anchor: the fixed start of every tour and the
/// return target when a return leg is requested.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::StopSet;
///
/// let stops = StopSet::new(vec![3, 0, 5]).unwrap();
/// assert_eq!(stops.anchor(), 3);
/// assert_eq!(stops.len(), 3);
///
/// let extended = stops.extended_with(&[5, 1, 1]);
/// assert_eq!(extended.as_slice(), &[3, 0, 5, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct StopSet {
    stops: Vec<usize>,
}

impl StopSet {
    /// Creates a stop set; fails on an empty list or a repeated stop.
    pub fn new(stops: Vec<usize>) -> Result<Self> {
        if stops.is_empty() {
            return Err(PlanError::InvalidStops("at least one stop is required".into()));
        }
        for (i, stop) in stops.iter().enumerate() {
            if stops[..i].contains(stop) {
                return Err(PlanError::InvalidStops(format!(
                    "location {stop} listed more than once"
                )));
            }
        }
        Ok(Self { stops })
    }

    /// The starting stop.
    pub fn anchor(&self) -> usize {
        self.stops[0]
    }

    /// Number of stops, anchor included.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if there are no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Stops in their given order.
    pub fn as_slice(&self) -> &[usize] {
        &self.stops
    }

    /// Returns `true` if `location` is one of the stops.
    pub fn contains(&self, location: usize) -> bool {
        self.stops.contains(&location)
    }

    /// Union of these stops and `optional`.
    ///
    /// Keeps this set's order and appends each optional location that is not
    /// already present, in the order given.
    pub fn extended_with(&self, optional: &[usize]) -> StopSet {
        let mut stops = self.stops.clone();
        for &loc in optional {
            if !stops.contains(&loc) {
                stops.push(loc);
            }
        }
        StopSet { stops }
    }
}

impl TryFrom<Vec<usize>> for StopSet {
    type Error = PlanError;

    fn try_from(stops: Vec<usize>) -> Result<Self> {
        Self::new(stops)
    }
}

impl From<StopSet> for Vec<usize> {
    fn from(set: StopSet) -> Self {
        set.stops
    }
}
