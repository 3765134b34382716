//! Capacity-bounded best-first frontier.

use super::config::EvictionPolicy;
use crate::model::{Score, Tiling};

/// Holds up to `capacity` tilings ordered by score, lower (better) last.
///
/// Below capacity every insert is accepted. At capacity the configured
/// [`EvictionPolicy`] decides: the default replace-best-only policy
/// admits an incoming state only when it strictly improves on the current
/// *best* member (which it then replaces); the evict-worst variant admits
/// it when it strictly improves on the current *worst* member.
#[derive(Debug)]
pub struct Frontier {
    entries: Vec<Tiling>,
    capacity: usize,
    policy: EvictionPolicy,
}

impl Frontier {
    pub fn new(capacity: usize, policy: EvictionPolicy) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
            policy,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Score of the best member, if any.
    pub fn best_score(&self) -> Option<Score> {
        self.entries.last().map(|t| t.score())
    }

    /// Inserts a state, applying the eviction policy at capacity.
    pub fn insert(&mut self, state: Tiling) {
        if self.entries.len() < self.capacity {
            self.push_sorted(state);
            return;
        }
        match self.policy {
            EvictionPolicy::ReplaceBestOnly => {
                // entries are sorted worst-first, so the best sits last
                if self
                    .entries
                    .last()
                    .is_some_and(|best| state.score() < best.score())
                {
                    self.entries.pop();
                    self.push_sorted(state);
                }
            }
            EvictionPolicy::EvictWorst => {
                if self
                    .entries
                    .first()
                    .is_some_and(|worst| state.score() < worst.score())
                {
                    self.entries.remove(0);
                    self.push_sorted(state);
                }
            }
        }
    }

    /// Removes and returns the best-scoring member.
    pub fn extract(&mut self) -> Option<Tiling> {
        self.entries.pop()
    }

    fn push_sorted(&mut self, state: Tiling) {
        self.entries.push(state);
        self.entries.sort_by(|a, b| b.score().cmp(&a.score()));
    }
}
