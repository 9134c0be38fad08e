//! Direct travel costs between locations.
//!
//! Provides a dense cost matrix with explicit absent edges and the sparse
//! adjacency graph it induces.

mod graph;
mod matrix;

pub use graph::Graph;
pub use matrix::DistanceMatrix;
