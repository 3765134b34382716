//! Best-first local search with randomized restarts.
//!
//! The frontier holds a bounded set of candidate tilings ordered by
//! score; the runner expands them depth-capped with per-run dedup, and
//! restarts from fresh random initial tilings to escape poor basins.

mod config;
mod frontier;
mod runner;

pub use config::{EvictionPolicy, SearchConfig};
pub use frontier::Frontier;
pub use runner::{SearchResult, SearchRunner};
