//! Exact minimum-cost tour over a stop set (Held-Karp).
//!
//! # Algorithm
//!
//! Dynamic program over subsets of stop indices. State `(S, u)` is the
//! cheapest way to start at the anchor (index 0), visit exactly the stops in
//! `S`, and end at `u`. Costs between stops are shortest-path distances, not
//! raw edges, so the tour may pass through locations that are not stops.
//!
//! ```text
//! dp[{0}][0]       = 0
//! dp[S ∪ {v}][v]   = min over u ∈ S of dp[S][u] + d(u, v)
//! best             = min over u ≠ 0 of dp[Full][u] (+ d(u, 0) if returning)
//! ```
//!
//! Both `dp` and the parent pointers live in flat arenas indexed by
//! `mask * m + last`. A parent is written only when a state strictly
//! improves, so the reconstructed order is the first optimum found in scan
//! order.
//!
//! # Complexity
//!
//! O(2^m · m²) time and O(2^m · m) space for m stops.
//!
//! # Reference
//!
//! Held, M. & Karp, R.M. (1962). "A dynamic programming approach to
//! sequencing problems", *Journal of SIAM* 10(1), 196-210.

use tracing::debug;

use crate::error::{PlanError, Result};
use crate::models::{StopSet, TourResult};
use crate::shortest_path::ShortestPathTable;

/// Hard upper bound on the stop count accepted by [`solve`].
pub const MAX_STOPS_LIMIT: usize = 20;

const NO_PARENT: u8 = u8::MAX;

/// Solves the minimum-cost tour that starts at `stops.anchor()` and visits
/// every stop exactly once, optionally returning to the anchor.
///
/// Fails with [`PlanError::TooManyStops`] if the set is larger than
/// `max_stops` (or [`MAX_STOPS_LIMIT`]), and with [`PlanError::Unreachable`]
/// if any two stops are disconnected. A single-stop set yields a zero-cost
/// tour of just the anchor with no return leg.
///
/// # Examples
///
/// ```
/// use u_itinerary::distance::DistanceMatrix;
/// use u_itinerary::models::StopSet;
/// use u_itinerary::shortest_path::ShortestPathTable;
/// use u_itinerary::tour::solve;
///
/// let mut dm = DistanceMatrix::new(4);
/// dm.set_edge(0, 1, 10.0);
/// dm.set_edge(1, 2, 10.0);
/// dm.set_edge(2, 3, 10.0);
/// dm.set_edge(0, 3, 100.0);
/// let table = ShortestPathTable::compute_all_pairs(&dm).unwrap();
///
/// let stops = StopSet::new(vec![0, 2]).unwrap();
/// let tour = solve(&stops, &table, false, 16).unwrap();
/// assert_eq!(tour.order(), &[0, 2]);
/// assert_eq!(tour.cost(), 20.0);
///
/// let round = solve(&stops, &table, true, 16).unwrap();
/// assert_eq!(round.order(), &[0, 2, 0]);
/// assert_eq!(round.cost(), 40.0);
/// ```
pub fn solve(
    stops: &StopSet,
    shortest: &ShortestPathTable,
    include_return: bool,
    max_stops: usize,
) -> Result<TourResult> {
    let m = stops.len();
    let max = max_stops.min(MAX_STOPS_LIMIT);
    if m > max {
        return Err(PlanError::TooManyStops { count: m, max });
    }

    let cost = stop_costs(stops, shortest)?;
    if m == 1 {
        return Ok(TourResult::new(vec![stops.anchor()], Vec::new(), false));
    }

    let full = (1usize << m) - 1;
    let mut dp = vec![f64::INFINITY; (full + 1) * m];
    let mut parent = vec![NO_PARENT; (full + 1) * m];
    dp[m] = 0.0; // mask {0}, last 0

    // Only odd masks contain the anchor.
    for mask in (1..=full).step_by(2) {
        for u in 0..m {
            if mask & (1 << u) == 0 {
                continue;
            }
            let base = dp[mask * m + u];
            if base == f64::INFINITY {
                continue;
            }
            for v in 1..m {
                if mask & (1 << v) != 0 {
                    continue;
                }
                let slot = (mask | (1 << v)) * m + v;
                let candidate = base + cost[u * m + v];
                if candidate < dp[slot] {
                    dp[slot] = candidate;
                    parent[slot] = u as u8;
                }
            }
        }
    }

    let closing = |u: usize| {
        let open = dp[full * m + u];
        if include_return {
            open + cost[u * m]
        } else {
            open
        }
    };
    let mut last = 1;
    let mut best = closing(1);
    for u in 2..m {
        let total = closing(u);
        if total < best {
            best = total;
            last = u;
        }
    }

    let mut indices = Vec::with_capacity(m + 1);
    let mut mask = full;
    let mut current = last;
    while current != 0 {
        indices.push(current);
        let prev = parent[mask * m + current];
        debug_assert_ne!(prev, NO_PARENT, "reachable state without parent");
        mask ^= 1 << current;
        current = usize::from(prev);
    }
    indices.push(0);
    indices.reverse();
    if include_return {
        indices.push(0);
    }

    let order = indices.iter().map(|&i| stops.as_slice()[i]).collect();
    let legs = indices.windows(2).map(|w| cost[w[0] * m + w[1]]).collect();
    let tour = TourResult::new(order, legs, include_return);

    debug!(
        stops = m,
        states = dp.len(),
        include_return,
        cost = tour.cost(),
        "solved tour"
    );
    Ok(tour)
}

/// Resolves the m×m stop-to-stop cost matrix, failing on the first
/// disconnected pair.
pub(crate) fn stop_costs(stops: &StopSet, shortest: &ShortestPathTable) -> Result<Vec<f64>> {
    let ids = stops.as_slice();
    let m = ids.len();
    let mut cost = vec![0.0; m * m];
    for i in 0..m {
        shortest.check_index(ids[i])?;
        for j in 0..m {
            if i != j {
                cost[i * m + j] = shortest.require_distance(ids[i], ids[j])?;
            }
        }
    }
    Ok(cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::tour::solve_exhaustive;
    use proptest::prelude::*;

    fn worked_example() -> ShortestPathTable {
        let dm = DistanceMatrix::from_zero_sentinel(&[
            vec![0.0, 10.0, 0.0, 100.0],
            vec![10.0, 0.0, 10.0, 0.0],
            vec![0.0, 10.0, 0.0, 10.0],
            vec![100.0, 0.0, 10.0, 0.0],
        ])
        .expect("square");
        ShortestPathTable::compute_all_pairs(&dm).expect("valid")
    }

    fn line(n: usize) -> ShortestPathTable {
        let mut dm = DistanceMatrix::new(n);
        for i in 0..n - 1 {
            dm.set_edge(i, i + 1, 1.0);
        }
        ShortestPathTable::compute_all_pairs(&dm).expect("valid")
    }

    #[test]
    fn test_trivial_tour() {
        let t = worked_example();
        let stops = StopSet::new(vec![2]).expect("valid");
        for include_return in [false, true] {
            let tour = solve(&stops, &t, include_return, 16).expect("solvable");
            assert_eq!(tour.order(), &[2]);
            assert_eq!(tour.cost(), 0.0);
            assert!(!tour.returns_to_anchor());
        }
    }

    #[test]
    fn test_worked_example_open() {
        let t = worked_example();
        let stops = StopSet::new(vec![0, 2]).expect("valid");
        let tour = solve(&stops, &t, false, 16).expect("solvable");
        assert_eq!(tour.order(), &[0, 2]);
        assert_eq!(tour.leg_costs(), &[20.0]);
        assert_eq!(tour.cost(), 20.0);
        assert!(!tour.returns_to_anchor());
    }

    #[test]
    fn test_anchor_fixed_in_middle_of_line() {
        // Anchor at 2 on the line 0-1-2-3-4: best open tour goes to one end first.
        let t = line(5);
        let stops = StopSet::new(vec![2, 0, 4]).expect("valid");
        let tour = solve(&stops, &t, false, 16).expect("solvable");
        assert_eq!(tour.anchor(), Some(2));
        assert_eq!(tour.cost(), 6.0);
        // Both directions cost 6; the lower final stop index wins.
        assert_eq!(tour.order(), &[2, 4, 0]);
    }

    #[test]
    fn test_return_leg_included() {
        let t = line(5);
        let stops = StopSet::new(vec![0, 4, 2]).expect("valid");
        let tour = solve(&stops, &t, true, 16).expect("solvable");
        assert_eq!(tour.order(), &[0, 2, 4, 0]);
        assert_eq!(tour.leg_costs(), &[2.0, 2.0, 4.0]);
        assert_eq!(tour.cost(), 8.0);
        assert_eq!(tour.stops(), &[0, 2, 4]);
    }

    #[test]
    fn test_unreachable_stop() {
        let mut dm = DistanceMatrix::new(3);
        dm.set_edge(0, 1, 1.0);
        let t = ShortestPathTable::compute_all_pairs(&dm).expect("valid");
        let stops = StopSet::new(vec![0, 1, 2]).expect("valid");
        assert_eq!(
            solve(&stops, &t, false, 16),
            Err(PlanError::Unreachable { from: 0, to: 2 })
        );
    }

    #[test]
    fn test_unknown_location() {
        let t = line(3);
        let stops = StopSet::new(vec![0, 7]).expect("valid");
        assert_eq!(
            solve(&stops, &t, false, 16),
            Err(PlanError::UnknownLocation { index: 7, len: 3 })
        );
    }

    #[test]
    fn test_too_many_stops() {
        let t = line(6);
        let stops = StopSet::new(vec![0, 1, 2, 3, 4, 5]).expect("valid");
        assert_eq!(
            solve(&stops, &t, false, 4),
            Err(PlanError::TooManyStops { count: 6, max: 4 })
        );
    }

    #[test]
    fn test_ceiling_capped_by_hard_limit() {
        let t = line(MAX_STOPS_LIMIT + 1);
        let stops = StopSet::new((0..=MAX_STOPS_LIMIT).collect()).expect("valid");
        assert_eq!(
            solve(&stops, &t, false, usize::MAX),
            Err(PlanError::TooManyStops {
                count: MAX_STOPS_LIMIT + 1,
                max: MAX_STOPS_LIMIT
            })
        );
    }

    #[test]
    fn test_tied_costs_resolve_deterministically() {
        // Square 0-1-2-3-0 with unit edges: both directions cost the same.
        let mut dm = DistanceMatrix::new(4);
        dm.set_edge(0, 1, 1.0);
        dm.set_edge(1, 2, 1.0);
        dm.set_edge(2, 3, 1.0);
        dm.set_edge(3, 0, 1.0);
        let t = ShortestPathTable::compute_all_pairs(&dm).expect("valid");
        let stops = StopSet::new(vec![0, 1, 2, 3]).expect("valid");
        let first = solve(&stops, &t, true, 16).expect("solvable");
        let second = solve(&stops, &t, true, 16).expect("solvable");
        assert_eq!(first, second);
        assert_eq!(first.cost(), 4.0);
        assert_eq!(first.order(), &[0, 3, 2, 1, 0]);
    }

    fn random_instance() -> impl Strategy<Value = (ShortestPathTable, Vec<usize>)> {
        (1usize..=8).prop_flat_map(|m| {
            let n = m + 2;
            let pairs = n * (n - 1) / 2;
            (
                prop::collection::vec(1u32..10_000, pairs),
                Just(n),
                prop::sample::subsequence((0..n).collect::<Vec<_>>(), m).prop_shuffle(),
            )
                .prop_map(|(weights, n, stops)| {
                    let mut dm = DistanceMatrix::new(n);
                    let mut k = 0;
                    for i in 0..n {
                        for j in (i + 1)..n {
                            dm.set_edge(i, j, f64::from(weights[k]) / 100.0);
                            k += 1;
                        }
                    }
                    let table = ShortestPathTable::compute_all_pairs(&dm).expect("valid");
                    (table, stops)
                })
        })
    }

    proptest! {
        #[test]
        fn prop_matches_brute_force(
            (table, stops) in random_instance(),
            include_return in any::<bool>(),
        ) {
            let stops = StopSet::new(stops).expect("distinct");
            let dp = solve(&stops, &table, include_return, 16).expect("connected");
            let brute = solve_exhaustive(&stops, &table, include_return).expect("connected");
            prop_assert!((dp.cost() - brute.cost()).abs() < 1e-9);
            prop_assert_eq!(dp.anchor(), Some(stops.anchor()));
            prop_assert_eq!(dp.stops().len(), stops.len());
        }

        #[test]
        fn prop_order_is_permutation((table, stops) in random_instance()) {
            let stops = StopSet::new(stops).expect("distinct");
            let tour = solve(&stops, &table, false, 16).expect("connected");
            let mut visited = tour.order().to_vec();
            visited.sort_unstable();
            let mut expected = stops.as_slice().to_vec();
            expected.sort_unstable();
            prop_assert_eq!(visited, expected);
            let legs: f64 = tour.leg_costs().iter().sum();
            prop_assert_eq!(legs, tour.cost());
        }
    }
}
