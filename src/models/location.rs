//! Location type.

use serde::{Deserialize, Serialize};

/// A named place in the network.
///
/// The `(x, y)` position is display data only; planning never reads it.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::Location;
///
/// let paris = Location::new("Paris", 2.3522, 48.8566);
/// assert_eq!(paris.name(), "Paris");
/// assert_eq!(paris.position(), (2.3522, 48.8566));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    name: String,
    x: f64,
    y: f64,
}

impl Location {
    /// Creates a location with a display position.
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// Location name (unique within a [`Network`](super::Network)).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// `(x, y)` display position.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}
