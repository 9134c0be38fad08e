//! Drawable views of the network and of planned routes.
//!
//! These are plain data for an external renderer: node positions, weighted
//! edges, and the directed steps of a route. Nothing here draws or holds
//! display state.

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::models::Network;
use crate::planner::PlannedTour;

/// A location with its display position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeView {
    /// Location index.
    pub index: usize,
    /// Location name.
    pub name: String,
    /// X-coordinate.
    pub x: f64,
    /// Y-coordinate.
    pub y: f64,
}

/// A weighted connection between two locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeView {
    /// Source location index.
    pub from: usize,
    /// Target location index.
    pub to: usize,
    /// Travel cost.
    pub weight: f64,
}

/// Overview of the whole network: every location and every direct edge once.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::{Location, Network};
/// use u_itinerary::render::GraphView;
///
/// let network = Network::from_zero_sentinel(
///     vec![Location::new("A", 0.0, 0.0), Location::new("B", 1.0, 2.0)],
///     &[vec![0.0, 7.0], vec![7.0, 0.0]],
/// )
/// .unwrap();
/// let view = GraphView::from_network(&network);
/// assert_eq!(view.nodes.len(), 2);
/// assert_eq!(view.edges.len(), 1);
/// assert_eq!(view.edges[0].weight, 7.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphView {
    /// All locations.
    pub nodes: Vec<NodeView>,
    /// Undirected edges with `from < to`.
    pub edges: Vec<EdgeView>,
}

impl GraphView {
    /// Builds the overview for `network`.
    pub fn from_network(network: &Network) -> Self {
        let matrix = network.matrix();
        let mut edges = Vec::with_capacity(matrix.edge_count());
        for from in 0..matrix.size() {
            for to in (from + 1)..matrix.size() {
                if let Some(weight) = matrix.edge(from, to) {
                    edges.push(EdgeView { from, to, weight });
                }
            }
        }
        Self {
            nodes: node_views(network, 0..network.len()),
            edges,
        }
    }
}

/// One accepted route, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteView {
    /// Locations in traversal order (junctions once, anchor repeated at the
    /// end of a round trip).
    pub nodes: Vec<NodeView>,
    /// Directed location-to-location steps with their direct edge cost.
    pub steps: Vec<EdgeView>,
    /// Directed stop-to-stop legs with their shortest-path cost.
    pub legs: Vec<EdgeView>,
    /// Whether the route closes back at its start.
    pub draw_return_edge: bool,
}

impl RouteView {
    /// Builds the view of `planned` over `network`.
    ///
    /// Fails with [`PlanError::Unreachable`] if a path step has no direct
    /// edge, which indicates the tour was planned on a different network.
    pub fn from_planned(network: &Network, planned: &PlannedTour) -> Result<Self> {
        let matrix = network.matrix();
        let path = planned.path.locations();
        for &index in path {
            network.check_index(index)?;
        }

        let steps = planned
            .path
            .steps()
            .map(|(from, to)| {
                matrix
                    .edge(from, to)
                    .map(|weight| EdgeView { from, to, weight })
                    .ok_or(PlanError::Unreachable { from, to })
            })
            .collect::<Result<Vec<_>>>()?;

        let legs = planned
            .tour
            .order()
            .windows(2)
            .zip(planned.tour.leg_costs())
            .map(|(pair, &weight)| EdgeView {
                from: pair[0],
                to: pair[1],
                weight,
            })
            .collect();

        Ok(Self {
            nodes: node_views(network, path.iter().copied()),
            steps,
            legs,
            draw_return_edge: planned.tour.returns_to_anchor(),
        })
    }
}

fn node_views(network: &Network, indices: impl IntoIterator<Item = usize>) -> Vec<NodeView> {
    indices
        .into_iter()
        .map(|index| {
            let loc = &network.locations()[index];
            NodeView {
                index,
                name: loc.name().to_string(),
                x: loc.x(),
                y: loc.y(),
            }
        })
        .collect()
}
