//! # u-itinerary
//!
//! Budget-constrained multi-stop itinerary planning over a weighted road
//! network: all-pairs shortest paths, exact stop ordering, path expansion,
//! and a planner that decides whether optional stops fit the budget.
//!
//! ## Modules
//!
//! - [`error`] — Matrix validation and planning errors
//! - [`distance`] — Direct-cost matrix and adjacency graph
//! - [`models`] — Locations, networks, stop sets, tours and paths
//! - [`shortest_path`] — Dijkstra and the all-pairs shortest-path table
//! - [`tour`] — Held-Karp stop ordering and path expansion
//! - [`planner`] — Budget decision between mandatory and optional stops
//! - [`render`] — Drawable network and route views
//! - [`io`] — Serializable plan documents and reports
//!
//! ## Example
//!
//! ```
//! use u_itinerary::models::{Location, Network};
//! use u_itinerary::planner::{PlanOutcome, PlannerConfig, TripPlanner, TripRequest};
//!
//! let network = Network::from_zero_sentinel(
//!     vec![
//!         Location::new("A", 0.0, 0.0),
//!         Location::new("B", 1.0, 0.0),
//!         Location::new("C", 2.0, 0.0),
//!     ],
//!     &[
//!         vec![0.0, 10.0, 0.0],
//!         vec![10.0, 0.0, 10.0],
//!         vec![0.0, 10.0, 0.0],
//!     ],
//! )
//! .unwrap();
//! let planner = TripPlanner::new(network, PlannerConfig::default()).unwrap();
//!
//! let outcome = planner
//!     .plan(&TripRequest::new(vec![0], 25.0).with_optional(vec![2]))
//!     .unwrap();
//! let tour = outcome.accepted().unwrap();
//! assert_eq!(tour.path.locations(), &[0, 1, 2]);
//! assert!(matches!(outcome, PlanOutcome::MandatoryPlusOptional { .. }));
//! ```

pub mod distance;
pub mod error;
pub mod io;
pub mod models;
pub mod planner;
pub mod render;
pub mod shortest_path;
pub mod tour;

#[cfg(feature = "ffi")]
pub mod ffi;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{MatrixError, PlanError, Result};
