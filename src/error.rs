//! Error types for matrix validation, tour solving, and planning.
//!
//! Budget overruns are not errors: the planner reports them as
//! [`PlanOutcome::MandatoryInfeasible`](crate::planner::PlanOutcome) or
//! [`PlanOutcome::MandatoryOnly`](crate::planner::PlanOutcome).

use thiserror::Error;

/// Malformed distance matrix input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// A row has the wrong number of columns, or the data length is not `n * n`.
    #[error("distance matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Offending row (or `0` for flat data).
        row: usize,
        /// Actual number of entries.
        len: usize,
        /// Expected number of entries.
        expected: usize,
    },
    /// An edge weight below zero.
    #[error("negative edge weight {weight} between {from} and {to}")]
    NegativeWeight {
        /// Row index.
        from: usize,
        /// Column index.
        to: usize,
        /// Offending weight.
        weight: f64,
    },
    /// An edge weight that is NaN or infinite.
    #[error("non-finite edge weight between {from} and {to}")]
    NonFiniteWeight {
        /// Row index.
        from: usize,
        /// Column index.
        to: usize,
    },
    /// `(from, to)` and `(to, from)` disagree.
    #[error("asymmetric edge between {from} and {to}")]
    Asymmetric {
        /// Row index.
        from: usize,
        /// Column index.
        to: usize,
    },
    /// Number of locations differs from the matrix size.
    #[error("{locations} locations supplied for a {matrix}x{matrix} distance matrix")]
    SizeMismatch {
        /// Number of locations.
        locations: usize,
        /// Matrix dimension.
        matrix: usize,
    },
}

/// Errors raised while building networks or solving tours.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// No path connects two required locations.
    #[error("no path between location {from} and location {to}")]
    Unreachable {
        /// Source location index.
        from: usize,
        /// Target location index.
        to: usize,
    },
    /// The stop set is larger than the configured exact-search ceiling.
    #[error("{count} stops exceed the exact-search limit of {max}")]
    TooManyStops {
        /// Number of stops requested.
        count: usize,
        /// Configured ceiling.
        max: usize,
    },
    /// The distance matrix failed validation.
    #[error("invalid distance matrix: {0}")]
    InvalidMatrix(#[from] MatrixError),
    /// Empty stop list or a stop listed twice.
    #[error("invalid stop set: {0}")]
    InvalidStops(String),
    /// A location index outside the network.
    #[error("location index {index} out of range for {len} locations")]
    UnknownLocation {
        /// Requested index.
        index: usize,
        /// Number of locations.
        len: usize,
    },
    /// A location name that is not part of the network.
    #[error("unknown location name {0:?}")]
    UnknownName(String),
    /// Two locations share a name.
    #[error("duplicate location name {0:?}")]
    DuplicateName(String),
    /// Budget is negative or not finite.
    #[error("budget must be finite and non-negative, got {0}")]
    InvalidBudget(f64),
    /// Planner configuration out of range.
    #[error("invalid planner configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T, E = PlanError> = std::result::Result<T, E>;
