//! Budget-constrained trip planning.
//!
//! Solves the mandatory stops first. If that tour fits the budget it is
//! expanded and accepted, then the optional stops are added and the larger
//! set is solved again; the extension is accepted only if it also fits.

use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn};

use crate::error::{PlanError, Result};
use crate::models::{Network, StopSet};
use crate::shortest_path::ShortestPathTable;
use crate::tour::{expand, solve};

use super::{PlanOutcome, PlannedTour, PlannerConfig};

/// A planning request over location indices.
///
/// # Examples
///
/// ```
/// use u_itinerary::planner::TripRequest;
///
/// let request = TripRequest::new(vec![0, 2], 50.0)
///     .with_optional(vec![3])
///     .with_return(true);
/// assert_eq!(request.mandatory, vec![0, 2]);
/// assert!(request.include_return);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    /// Stops that must be visited; the first is the anchor.
    pub mandatory: Vec<usize>,
    /// Stops to add if the budget allows.
    #[serde(default)]
    pub optional: Vec<usize>,
    /// Maximum total travel cost (inclusive).
    pub budget: f64,
    /// Whether the tour returns to the anchor.
    #[serde(default)]
    pub include_return: bool,
}

impl TripRequest {
    /// Creates a request with no optional stops and no return leg.
    pub fn new(mandatory: Vec<usize>, budget: f64) -> Self {
        Self {
            mandatory,
            optional: Vec::new(),
            budget,
            include_return: false,
        }
    }

    /// Sets the optional stops.
    pub fn with_optional(mut self, optional: Vec<usize>) -> Self {
        self.optional = optional;
        self
    }

    /// Sets whether to return to the anchor.
    pub fn with_return(mut self, include_return: bool) -> Self {
        self.include_return = include_return;
        self
    }

    /// Builds a request from location names.
    ///
    /// Fails with [`PlanError::UnknownName`] for a name not in `network`.
    pub fn by_name(
        network: &Network,
        mandatory: &[&str],
        optional: &[&str],
        budget: f64,
        include_return: bool,
    ) -> Result<Self> {
        let resolve = |names: &[&str]| {
            names
                .iter()
                .map(|name| network.require_index(name))
                .collect::<Result<Vec<_>>>()
        };
        Ok(Self {
            mandatory: resolve(mandatory)?,
            optional: resolve(optional)?,
            budget,
            include_return,
        })
    }
}

/// Plans a trip over a precomputed shortest-path table.
///
/// Returns [`PlanOutcome::MandatoryInfeasible`] when the mandatory tour costs
/// more than `budget`, [`PlanOutcome::MandatoryPlusOptional`] when the tour
/// with optional stops fits, and [`PlanOutcome::MandatoryOnly`] otherwise.
/// A cost equal to the budget fits. Errors (disconnected stops, too many
/// stops, bad budget) abort the plan.
///
/// # Examples
///
/// ```
/// use u_itinerary::distance::DistanceMatrix;
/// use u_itinerary::models::StopSet;
/// use u_itinerary::planner::{plan, OutcomeKind, PlannerConfig};
/// use u_itinerary::shortest_path::ShortestPathTable;
///
/// let mut dm = DistanceMatrix::new(4);
/// dm.set_edge(0, 1, 10.0);
/// dm.set_edge(1, 2, 10.0);
/// dm.set_edge(2, 3, 10.0);
/// dm.set_edge(0, 3, 100.0);
/// let table = ShortestPathTable::compute_all_pairs(&dm).unwrap();
/// let mandatory = StopSet::new(vec![0, 2]).unwrap();
///
/// let outcome = plan(&mandatory, &[3], 25.0, false, &table, &PlannerConfig::default()).unwrap();
/// assert_eq!(outcome.kind(), OutcomeKind::MandatoryOnly);
/// let accepted = outcome.accepted().unwrap();
/// assert_eq!(accepted.path.locations(), &[0, 1, 2]);
/// ```
pub fn plan(
    mandatory: &StopSet,
    optional: &[usize],
    budget: f64,
    include_return: bool,
    shortest: &ShortestPathTable,
    config: &PlannerConfig,
) -> Result<PlanOutcome> {
    if !budget.is_finite() || budget < 0.0 {
        return Err(PlanError::InvalidBudget(budget));
    }
    config.validate()?;

    let span = info_span!(
        "plan",
        mandatory = mandatory.len(),
        optional = optional.len(),
        budget,
        include_return
    );
    let _guard = span.enter();

    let tour = solve(mandatory, shortest, include_return, config.max_stops())?;
    if !tour.fits_budget(budget) {
        info!(cost = tour.cost(), "mandatory stops exceed budget");
        return Ok(PlanOutcome::MandatoryInfeasible {
            cost: tour.cost(),
            budget,
        });
    }
    let path = expand(tour.order(), shortest)?;
    let accepted = PlannedTour { tour, path };

    let extended_stops = mandatory.extended_with(optional);
    if extended_stops.len() == mandatory.len() {
        info!(cost = accepted.cost(), "mandatory tour accepted");
        return Ok(PlanOutcome::MandatoryOnly {
            mandatory: accepted,
            rejected_extension: None,
        });
    }

    let extended = solve(&extended_stops, shortest, include_return, config.max_stops())?;
    if !extended.fits_budget(budget) {
        warn!(
            cost = extended.cost(),
            mandatory_cost = accepted.cost(),
            "optional stops cannot be afforded"
        );
        return Ok(PlanOutcome::MandatoryOnly {
            mandatory: accepted,
            rejected_extension: Some(extended.cost()),
        });
    }

    let path = expand(extended.order(), shortest)?;
    info!(
        cost = extended.cost(),
        stops = extended_stops.len(),
        "extended tour accepted"
    );
    Ok(PlanOutcome::MandatoryPlusOptional {
        mandatory: accepted,
        extended: PlannedTour {
            tour: extended,
            path,
        },
    })
}

/// A network with its shortest-path table computed once and reused for
/// every request.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::{Location, Network};
/// use u_itinerary::planner::{OutcomeKind, PlannerConfig, TripPlanner, TripRequest};
///
/// let network = Network::from_zero_sentinel(
///     vec![
///         Location::new("A", 0.0, 0.0),
///         Location::new("B", 1.0, 0.0),
///         Location::new("C", 2.0, 0.0),
///     ],
///     &[
///         vec![0.0, 10.0, 0.0],
///         vec![10.0, 0.0, 10.0],
///         vec![0.0, 10.0, 0.0],
///     ],
/// )
/// .unwrap();
/// let planner = TripPlanner::new(network, PlannerConfig::default()).unwrap();
///
/// let request = TripRequest::by_name(planner.network(), &["A", "C"], &[], 20.0, false).unwrap();
/// let outcome = planner.plan(&request).unwrap();
/// assert_eq!(outcome.kind(), OutcomeKind::MandatoryOnly);
/// ```
#[derive(Debug, Clone)]
pub struct TripPlanner {
    network: Network,
    table: ShortestPathTable,
    config: PlannerConfig,
}

impl TripPlanner {
    /// Validates `config` and computes the shortest-path table for `network`.
    pub fn new(network: Network, config: PlannerConfig) -> Result<Self> {
        config.validate()?;
        let table = ShortestPathTable::compute_all_pairs(network.matrix())?;
        Ok(Self {
            network,
            table,
            config,
        })
    }

    /// The location network.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// The precomputed shortest-path table.
    pub fn table(&self) -> &ShortestPathTable {
        &self.table
    }

    /// Planner configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans one request.
    ///
    /// Fails with [`PlanError::UnknownLocation`] for an index outside the
    /// network and [`PlanError::InvalidStops`] for an empty or repeated
    /// mandatory list, in addition to the errors of [`plan`].
    pub fn plan(&self, request: &TripRequest) -> Result<PlanOutcome> {
        for &index in request.mandatory.iter().chain(&request.optional) {
            self.network.check_index(index)?;
        }
        let mandatory = StopSet::new(request.mandatory.clone())?;
        plan(
            &mandatory,
            &request.optional,
            request.budget,
            request.include_return,
            &self.table,
            &self.config,
        )
    }
}
