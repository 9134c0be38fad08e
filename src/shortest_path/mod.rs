//! Shortest-path engine.
//!
//! - [`dijkstra`] — Single-source binary-heap Dijkstra, O((V + E) log V)
//! - [`ShortestPathTable`] — All-pairs distances and routes, one Dijkstra per source

mod dijkstra;
mod table;

pub use dijkstra::{dijkstra, SingleSource};
pub use table::{compute_all_pairs, ShortestPathTable};
