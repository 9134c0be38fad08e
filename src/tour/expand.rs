//! Stitching per-leg shortest paths into one full path.

use crate::error::Result;
use crate::models::FullPath;
use crate::shortest_path::ShortestPathTable;

/// Expands a stop order into every location traversed.
///
/// Each consecutive pair contributes its shortest path; every segment after
/// the first drops its first location, which is the previous segment's last,
/// so junctions appear exactly once. Fails with
/// [`PlanError::Unreachable`](crate::error::PlanError::Unreachable) if a leg
/// has no path.
///
/// # Examples
///
/// ```
/// use u_itinerary::distance::DistanceMatrix;
/// use u_itinerary::shortest_path::ShortestPathTable;
/// use u_itinerary::tour::expand;
///
/// let mut dm = DistanceMatrix::new(4);
/// dm.set_edge(0, 1, 10.0);
/// dm.set_edge(1, 2, 10.0);
/// dm.set_edge(2, 3, 10.0);
/// let table = ShortestPathTable::compute_all_pairs(&dm).unwrap();
///
/// let path = expand(&[0, 2, 3], &table).unwrap();
/// assert_eq!(path.locations(), &[0, 1, 2, 3]);
/// ```
pub fn expand(order: &[usize], shortest: &ShortestPathTable) -> Result<FullPath> {
    let Some(&first) = order.first() else {
        return Ok(FullPath::default());
    };
    shortest.check_index(first)?;

    let mut locations = vec![first];
    for leg in order.windows(2) {
        let segment = shortest.require_path(leg[0], leg[1])?;
        locations.extend_from_slice(&segment[1..]);
    }
    Ok(FullPath::new(locations))
}
