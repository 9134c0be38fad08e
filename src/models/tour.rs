//! Tour and full-path result types.

use serde::{Deserialize, Serialize};

/// A stop-level tour produced by the tour solver.
///
/// `order` starts at the anchor and, when a return leg was included, ends
/// with the anchor again. `leg_costs[i]` is the shortest-path cost from
/// `order[i]` to `order[i + 1]`.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::TourResult;
///
/// let tour = TourResult::new(vec![0, 2, 0], vec![20.0, 20.0], true);
/// assert_eq!(tour.cost(), 40.0);
/// assert_eq!(tour.anchor(), Some(0));
/// assert_eq!(tour.stops(), &[0, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TourParts")]
pub struct TourResult {
    order: Vec<usize>,
    leg_costs: Vec<f64>,
    cost: f64,
    returns_to_anchor: bool,
}

impl TourResult {
    /// Creates a tour; the total cost is the sum of `leg_costs`.
    pub fn new(order: Vec<usize>, leg_costs: Vec<f64>, returns_to_anchor: bool) -> Self {
        let cost = leg_costs.iter().sum();
        Self {
            order,
            leg_costs,
            cost,
            returns_to_anchor,
        }
    }

    /// Locations in visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Visiting order without the closing return to the anchor.
    pub fn stops(&self) -> &[usize] {
        if self.returns_to_anchor {
            &self.order[..self.order.len().saturating_sub(1)]
        } else {
            &self.order
        }
    }

    /// Starting location.
    pub fn anchor(&self) -> Option<usize> {
        self.order.first().copied()
    }

    /// Cost of each consecutive leg.
    pub fn leg_costs(&self) -> &[f64] {
        &self.leg_costs
    }

    /// Total travel cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Whether the order closes back at the anchor.
    pub fn returns_to_anchor(&self) -> bool {
        self.returns_to_anchor
    }

    /// Returns `true` if the total cost fits the budget (inclusive).
    pub fn fits_budget(&self, budget: f64) -> bool {
        self.cost <= budget
    }
}

/// Deserialized form of [`TourResult`]; any serialized `cost` is ignored
/// and recomputed from the legs.
#[derive(Deserialize)]
struct TourParts {
    order: Vec<usize>,
    leg_costs: Vec<f64>,
    returns_to_anchor: bool,
}

impl From<TourParts> for TourResult {
    fn from(parts: TourParts) -> Self {
        Self::new(parts.order, parts.leg_costs, parts.returns_to_anchor)
    }
}

/// Every location traversed by a tour, with leg junctions listed once.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FullPath {
    locations: Vec<usize>,
}

impl FullPath {
    /// Wraps a location sequence.
    pub fn new(locations: Vec<usize>) -> Self {
        Self { locations }
    }

    /// Locations in traversal order.
    pub fn locations(&self) -> &[usize] {
        &self.locations
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns `true` for an empty path.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// First location.
    pub fn first(&self) -> Option<usize> {
        self.locations.first().copied()
    }

    /// Last location.
    pub fn last(&self) -> Option<usize> {
        self.locations.last().copied()
    }

    /// Consecutive `(from, to)` steps.
    pub fn steps(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.locations.windows(2).map(|w| (w[0], w[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_tour() {
        let t = TourResult::new(vec![1, 3, 2], vec![5.0, 7.5], false);
        assert_eq!(t.cost(), 12.5);
        assert_eq!(t.stops(), &[1, 3, 2]);
        assert!(!t.returns_to_anchor());
        assert!(t.fits_budget(12.5));
        assert!(!t.fits_budget(12.4));
    }

    #[test]
    fn test_trivial_tour() {
        let t = TourResult::new(vec![4], vec![], false);
        assert_eq!(t.cost(), 0.0);
        assert_eq!(t.order(), &[4]);
        assert!(t.leg_costs().is_empty());
    }

    #[test]
    fn test_deserialize_recomputes_cost() {
        let json = r#"{
            "order": [0, 2, 0],
            "leg_costs": [20.0, 20.0],
            "cost": 1.0,
            "returns_to_anchor": true
        }"#;
        let t: TourResult = serde_json::from_str(json).expect("valid");
        assert_eq!(t.cost(), 40.0);
        assert_eq!(t, TourResult::new(vec![0, 2, 0], vec![20.0, 20.0], true));

        let json = serde_json::to_string(&t).expect("serializable");
        let back: TourResult = serde_json::from_str(&json).expect("valid");
        assert_eq!(back, t);
    }

    #[test]
    fn test_full_path_steps() {
        let p = FullPath::new(vec![0, 1, 2, 1]);
        assert_eq!(p.len(), 4);
        assert_eq!(p.first(), Some(0));
        assert_eq!(p.last(), Some(1));
        let steps: Vec<_> = p.steps().collect();
        assert_eq!(steps, vec![(0, 1), (1, 2), (2, 1)]);
        assert!(FullPath::default().is_empty());
    }
}
