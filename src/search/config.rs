//! Search configuration.

use crate::error::{Error, Result};

/// Eviction policy applied when the frontier is at capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvictionPolicy {
    /// Compare the incoming state against the current *best* member and
    /// replace it only on strict improvement; otherwise discard the
    /// incoming state. Atypical for a beam search: once full, this only
    /// ever tightens the single best slot.
    #[default]
    ReplaceBestOnly,

    /// Conventional beam behavior: evict the current *worst* member when
    /// the incoming state strictly improves on it.
    EvictWorst,
}

/// Configuration for the restart-driven tiling search.
///
/// # Examples
///
/// ```
/// use mondrian_search::search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_side(8)
///     .with_max_depth(6)
///     .with_frontier_capacity(12)
///     .with_restart_iterations(10)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Side length of the square to tile.
    pub side: i32,

    /// Depth cap: states that have accumulated this many mutations are
    /// not expanded further.
    pub max_depth: u32,

    /// Maximum number of states held in the frontier.
    pub frontier_capacity: usize,

    /// Number of random restarts.
    pub restart_iterations: usize,

    /// Frontier eviction policy.
    pub eviction: EvictionPolicy,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            side: 12,
            max_depth: 10,
            frontier_capacity: 20,
            restart_iterations: 25,
            eviction: EvictionPolicy::default(),
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn with_side(mut self, side: i32) -> Self {
        self.side = side;
        self
    }

    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_frontier_capacity(mut self, capacity: usize) -> Self {
        self.frontier_capacity = capacity;
        self
    }

    pub fn with_restart_iterations(mut self, iterations: usize) -> Self {
        self.restart_iterations = iterations;
        self
    }

    pub fn with_eviction(mut self, policy: EvictionPolicy) -> Self {
        self.eviction = policy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.side < 1 {
            return Err(Error::InvalidConfig(format!(
                "side must be positive, got {}",
                self.side
            )));
        }
        if self.max_depth < 1 {
            return Err(Error::InvalidConfig("max_depth must be positive".into()));
        }
        if self.frontier_capacity < 1 {
            return Err(Error::InvalidConfig(
                "frontier_capacity must be positive".into(),
            ));
        }
        if self.restart_iterations < 1 {
            return Err(Error::InvalidConfig(
                "restart_iterations must be positive".into(),
            ));
        }
        Ok(())
    }
}
