// src/core/leader.rs
use std::collections::HashSet;

/// First-row-per-group gate.
///
/// Matrixify imports read a product-level attribute from the first variant
/// row of each handle only, so a computed attribute is written on the
/// leader row and left blank on the rest. One tracker per output target:
/// a handle can lead in one bucket and never appear in another.
#[derive(Debug, Default, Clone)]
pub struct LeaderTracker {
    seen: HashSet<String>,
}

impl LeaderTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query-and-mark: `true` the first time `key` is seen, `false` after.
    pub fn is_leader(&mut self, key: &str) -> bool {
        if self.seen.contains(key) {
            return false;
        }
        self.seen.insert(key.to_string());
        true
    }

    /// Query without marking.
    pub fn seen(&self, key: &str) -> bool {
        self.seen.contains(key)
    }

    /// Distinct keys seen so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
