//! Tour solving and path expansion.
//!
//! - [`solve`] — Exact Held-Karp DP over the stop set, O(2^m · m²)
//! - [`solve_exhaustive`] — Permutation enumeration, O(m!), for small sets
//! - [`expand`] — Stitches per-leg shortest paths into a [`FullPath`](crate::models::FullPath)

mod exhaustive;
mod expand;
mod held_karp;

pub use exhaustive::{solve_exhaustive, MAX_EXHAUSTIVE_STOPS};
pub use expand::expand;
pub use held_karp::{solve, MAX_STOPS_LIMIT};
