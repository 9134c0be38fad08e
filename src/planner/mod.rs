//! Trip planning against a budget.
//!
//! - [`plan`] — Mandatory tour, budget check, optional extension
//! - [`TripPlanner`] — Network plus precomputed shortest paths, reused per request
//! - [`PlanOutcome`] — Infeasible, mandatory-only, or mandatory-plus-optional
//! - [`PlannerConfig`] — Stop-count ceiling for exact search

mod config;
mod outcome;
mod trip;

pub use config::PlannerConfig;
pub use outcome::{OutcomeKind, PlanOutcome, PlannedTour};
pub use trip::{plan, TripPlanner, TripRequest};
