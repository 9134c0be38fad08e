//! Serializable planning input and report.
//!
//! [`PlanDocument`] is everything an input collaborator supplies up front:
//! locations, the direct-cost table, and one trip request. [`PlanReport`] is
//! what comes back: the outcome, accepted tours by name, and drawable views.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::models::{Location, Network};
use crate::planner::{
    OutcomeKind, PlanOutcome, PlannedTour, PlannerConfig, TripPlanner, TripRequest,
};
use crate::render::{GraphView, RouteView};

fn default_true() -> bool {
    true
}

/// A complete planning input.
///
/// `distances` rows hold a cost or `null` for "no direct edge". When
/// `zero_means_no_edge` is set (the default) an off-diagonal `0` is also
/// read as "no direct edge".
///
/// # Examples
///
/// ```
/// use u_itinerary::io::{run, PlanDocument};
/// use u_itinerary::planner::OutcomeKind;
///
/// let doc: PlanDocument = serde_json::from_str(r#"{
///     "locations": [
///         {"name": "A", "x": 0.0, "y": 0.0},
///         {"name": "B", "x": 1.0, "y": 0.0},
///         {"name": "C", "x": 2.0, "y": 0.0}
///     ],
///     "distances": [[0, 10, 0], [10, 0, 10], [0, 10, 0]],
///     "mandatory": [0, 2],
///     "budget": 20
/// }"#).unwrap();
///
/// let report = run(doc).unwrap();
/// assert_eq!(report.outcome, OutcomeKind::MandatoryOnly);
/// assert_eq!(report.accepted().unwrap().path, vec!["A", "B", "C"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDocument {
    /// Locations, indexed like the distance rows.
    pub locations: Vec<Location>,
    /// Direct costs; `null` marks a missing edge.
    pub distances: Vec<Vec<Option<f64>>>,
    /// Read off-diagonal zeros as missing edges.
    #[serde(default = "default_true")]
    pub zero_means_no_edge: bool,
    /// The trip to plan.
    #[serde(flatten)]
    pub request: TripRequest,
    /// Planner tunables.
    #[serde(default)]
    pub config: PlannerConfig,
}

impl PlanDocument {
    /// Validates the network and builds a planner plus the request.
    pub fn into_planner(self) -> Result<(TripPlanner, TripRequest)> {
        let rows: Vec<Vec<Option<f64>>> = if self.zero_means_no_edge {
            self.distances
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|cell| cell.filter(|&w| w != 0.0))
                        .collect()
                })
                .collect()
        } else {
            self.distances
        };
        let matrix = DistanceMatrix::from_rows(&rows)?;
        let network = Network::new(self.locations, matrix)?;
        let planner = TripPlanner::new(network, self.config)?;
        Ok((planner, self.request))
    }
}

/// One accepted tour, by location name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourReport {
    /// Stops in visiting order.
    pub stops: Vec<String>,
    /// Every location traversed.
    pub path: Vec<String>,
    /// Total cost.
    pub cost: f64,
    /// Drawable route.
    pub route: RouteView,
}

impl TourReport {
    fn new(network: &Network, planned: &PlannedTour) -> Result<Self> {
        Ok(Self {
            stops: network.names_of(planned.tour.order()),
            path: network.names_of(planned.path.locations()),
            cost: planned.cost(),
            route: RouteView::from_planned(network, planned)?,
        })
    }
}

/// Planning result for output collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    /// Which outcome was reached.
    pub outcome: OutcomeKind,
    /// Budget the plan was checked against.
    pub budget: f64,
    /// Cost of the cheapest mandatory tour.
    pub mandatory_cost: f64,
    /// Accepted mandatory tour.
    pub mandatory: Option<TourReport>,
    /// Accepted tour including optional stops.
    pub extended: Option<TourReport>,
    /// Cost of a rejected optional extension.
    pub rejected_extension_cost: Option<f64>,
    /// Whole-network overview.
    pub overview: GraphView,
}

impl PlanReport {
    /// Builds a report for `outcome` over the planner's network.
    pub fn new(planner: &TripPlanner, outcome: &PlanOutcome, budget: f64) -> Result<Self> {
        let network = planner.network();
        let mut report = Self {
            outcome: outcome.kind(),
            budget,
            mandatory_cost: 0.0,
            mandatory: None,
            extended: None,
            rejected_extension_cost: None,
            overview: GraphView::from_network(network),
        };
        match outcome {
            PlanOutcome::MandatoryInfeasible { cost, .. } => {
                report.mandatory_cost = *cost;
            }
            PlanOutcome::MandatoryOnly {
                mandatory,
                rejected_extension,
            } => {
                report.mandatory_cost = mandatory.cost();
                report.mandatory = Some(TourReport::new(network, mandatory)?);
                report.rejected_extension_cost = *rejected_extension;
            }
            PlanOutcome::MandatoryPlusOptional {
                mandatory,
                extended,
            } => {
                report.mandatory_cost = mandatory.cost();
                report.mandatory = Some(TourReport::new(network, mandatory)?);
                report.extended = Some(TourReport::new(network, extended)?);
            }
        }
        Ok(report)
    }

    /// The tour to follow, if any.
    pub fn accepted(&self) -> Option<&TourReport> {
        self.extended.as_ref().or(self.mandatory.as_ref())
    }
}

impl fmt::Display for PlanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(tour) = self.accepted() else {
            return write!(
                f,
                "No feasible route within the budget: mandatory stops cost {} against {}",
                self.mandatory_cost, self.budget
            );
        };
        writeln!(f, "Optimal route: {}", tour.path.join(" -> "))?;
        writeln!(f, "Stops: {}", tour.stops.join(" -> "))?;
        write!(f, "Total cost: {} (budget {})", tour.cost, self.budget)?;
        if let Some(cost) = self.rejected_extension_cost {
            write!(f, "\nOptional stops skipped: extended route would cost {cost}")?;
        }
        Ok(())
    }
}

/// Plans a document end to end.
pub fn run(document: PlanDocument) -> Result<PlanReport> {
    let (planner, request) = document.into_planner()?;
    let outcome = planner.plan(&request)?;
    PlanReport::new(&planner, &outcome, request.budget)
}
