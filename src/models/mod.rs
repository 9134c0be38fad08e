//! Domain model types for itinerary planning.
//!
//! Provides the core abstractions: named locations, the validated location
//! network, ordered stop sets anchored at their first stop, and the tour and
//! full-path results produced by the solvers.

mod location;
mod network;
mod stops;
mod tour;

pub use location::Location;
pub use network::Network;
pub use stops::StopSet;
pub use tour::{FullPath, TourResult};
