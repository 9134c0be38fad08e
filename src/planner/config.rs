//! Planner configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::tour::MAX_STOPS_LIMIT;

/// Tunables for the trip planner.
///
/// Deserializes from partial input: missing fields take their defaults.
///
/// # Examples
///
/// ```
/// use u_itinerary::planner::PlannerConfig;
///
/// let config = PlannerConfig::default().with_max_stops(12);
/// assert_eq!(config.max_stops(), 12);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    max_stops: usize,
}

impl PlannerConfig {
    /// Default stop-count ceiling for exact tour search.
    pub const DEFAULT_MAX_STOPS: usize = 16;

    /// Sets the stop-count ceiling (anchor included).
    pub fn with_max_stops(mut self, max_stops: usize) -> Self {
        self.max_stops = max_stops;
        self
    }

    /// Stop-count ceiling for a single solve.
    pub fn max_stops(&self) -> usize {
        self.max_stops
    }

    /// Checks that the ceiling is between 1 and [`MAX_STOPS_LIMIT`].
    pub fn validate(&self) -> Result<()> {
        if self.max_stops == 0 || self.max_stops > MAX_STOPS_LIMIT {
            return Err(PlanError::InvalidConfig(format!(
                "max_stops must be in 1..={MAX_STOPS_LIMIT}, got {}",
                self.max_stops
            )));
        }
        Ok(())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_stops: Self::DEFAULT_MAX_STOPS,
        }
    }
}
