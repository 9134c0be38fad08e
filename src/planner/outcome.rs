//! Planning outcome types.

use serde::{Deserialize, Serialize};

use crate::models::{FullPath, TourResult};

/// An accepted tour together with its expanded full path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedTour {
    /// Stop-level tour.
    pub tour: TourResult,
    /// Every location traversed.
    pub path: FullPath,
}

impl PlannedTour {
    /// Total cost of the tour.
    pub fn cost(&self) -> f64 {
        self.tour.cost()
    }
}

/// Which of the three outcomes a plan produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// The mandatory stops alone exceed the budget.
    MandatoryInfeasible,
    /// Only the mandatory tour fits.
    MandatoryOnly,
    /// The tour including optional stops fits.
    MandatoryPlusOptional,
}

/// Result of planning a trip against a budget.
///
/// Running over budget is a normal outcome, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PlanOutcome {
    /// Mandatory stops exceed the budget; nothing was expanded.
    MandatoryInfeasible {
        /// Cost of the cheapest mandatory tour.
        cost: f64,
        /// Budget it was checked against.
        budget: f64,
    },
    /// The mandatory tour is accepted.
    MandatoryOnly {
        /// Accepted mandatory tour.
        mandatory: PlannedTour,
        /// Cost of the tour with optional stops, when one was attempted and
        /// rejected for exceeding the budget.
        rejected_extension: Option<f64>,
    },
    /// The tour including optional stops is accepted.
    MandatoryPlusOptional {
        /// Mandatory-only tour, kept for comparison.
        mandatory: PlannedTour,
        /// Accepted tour over mandatory and optional stops.
        extended: PlannedTour,
    },
}

impl PlanOutcome {
    /// Outcome discriminant.
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Self::MandatoryInfeasible { .. } => OutcomeKind::MandatoryInfeasible,
            Self::MandatoryOnly { .. } => OutcomeKind::MandatoryOnly,
            Self::MandatoryPlusOptional { .. } => OutcomeKind::MandatoryPlusOptional,
        }
    }

    /// Returns `true` unless the mandatory stops exceed the budget.
    pub fn is_feasible(&self) -> bool {
        !matches!(self, Self::MandatoryInfeasible { .. })
    }

    /// The mandatory tour, if it fit the budget.
    pub fn mandatory(&self) -> Option<&PlannedTour> {
        match self {
            Self::MandatoryInfeasible { .. } => None,
            Self::MandatoryOnly { mandatory, .. }
            | Self::MandatoryPlusOptional { mandatory, .. } => Some(mandatory),
        }
    }

    /// The tour to follow: the extended tour when accepted, else the mandatory one.
    pub fn accepted(&self) -> Option<&PlannedTour> {
        match self {
            Self::MandatoryInfeasible { .. } => None,
            Self::MandatoryOnly { mandatory, .. } => Some(mandatory),
            Self::MandatoryPlusOptional { extended, .. } => Some(extended),
        }
    }
}
