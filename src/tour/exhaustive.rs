//! Exhaustive tour enumeration.
//!
//! Tries every ordering of the non-anchor stops. Factorial in the stop count
//! and only meant for small sets, e.g. to cross-check [`solve`](super::solve).

use crate::error::{PlanError, Result};
use crate::models::{StopSet, TourResult};
use crate::shortest_path::ShortestPathTable;

use super::held_karp::stop_costs;

/// Largest stop count accepted by [`solve_exhaustive`].
pub const MAX_EXHAUSTIVE_STOPS: usize = 10;

/// Finds the minimum-cost tour by enumerating all permutations with the
/// anchor fixed first. Among equal-cost orderings the one that comes first
/// lexicographically by position in `stops` is returned.
///
/// Fails with [`PlanError::TooManyStops`] above [`MAX_EXHAUSTIVE_STOPS`].
///
/// # Examples
///
/// ```
/// use u_itinerary::distance::DistanceMatrix;
/// use u_itinerary::models::StopSet;
/// use u_itinerary::shortest_path::ShortestPathTable;
/// use u_itinerary::tour::solve_exhaustive;
///
/// let mut dm = DistanceMatrix::new(3);
/// dm.set_edge(0, 1, 1.0);
/// dm.set_edge(1, 2, 1.0);
/// let table = ShortestPathTable::compute_all_pairs(&dm).unwrap();
///
/// let stops = StopSet::new(vec![0, 2, 1]).unwrap();
/// let tour = solve_exhaustive(&stops, &table, false).unwrap();
/// assert_eq!(tour.order(), &[0, 1, 2]);
/// assert_eq!(tour.cost(), 2.0);
/// ```
pub fn solve_exhaustive(
    stops: &StopSet,
    shortest: &ShortestPathTable,
    include_return: bool,
) -> Result<TourResult> {
    let m = stops.len();
    if m > MAX_EXHAUSTIVE_STOPS {
        return Err(PlanError::TooManyStops {
            count: m,
            max: MAX_EXHAUSTIVE_STOPS,
        });
    }
    let cost = stop_costs(stops, shortest)?;
    if m == 1 {
        return Ok(TourResult::new(vec![stops.anchor()], Vec::new(), false));
    }

    let mut search = Search {
        m,
        cost: &cost,
        include_return,
        prefix: vec![0],
        used: 1,
        best_cost: f64::INFINITY,
        best: Vec::new(),
    };
    search.extend(0.0);

    let mut indices = search.best;
    if include_return {
        indices.push(0);
    }
    let order = indices.iter().map(|&i| stops.as_slice()[i]).collect();
    let legs = indices.windows(2).map(|w| cost[w[0] * m + w[1]]).collect();
    Ok(TourResult::new(order, legs, include_return))
}

struct Search<'a> {
    m: usize,
    cost: &'a [f64],
    include_return: bool,
    prefix: Vec<usize>,
    used: usize,
    best_cost: f64,
    best: Vec<usize>,
}

impl Search<'_> {
    fn extend(&mut self, so_far: f64) {
        let last = self.prefix[self.prefix.len() - 1];
        if self.prefix.len() == self.m {
            let total = if self.include_return {
                so_far + self.cost[last * self.m]
            } else {
                so_far
            };
            if total < self.best_cost {
                self.best_cost = total;
                self.best = self.prefix.clone();
            }
            return;
        }
        for next in 1..self.m {
            if self.used & (1 << next) != 0 {
                continue;
            }
            self.used |= 1 << next;
            self.prefix.push(next);
            self.extend(so_far + self.cost[last * self.m + next]);
            self.prefix.pop();
            self.used &= !(1 << next);
        }
    }
}
