//! Fluent builder for `FieldAgentStore` + `FieldAgentRngs`, mirroring
//! `dt_agent::GraphAgentStoreBuilder`.

use crate::store::{FieldAgentRngs, FieldAgentStore};

/// Fluent builder for [`FieldAgentStore`] + [`FieldAgentRngs`].
///
/// All arrays are pre-allocated at construction time so the profile loader
/// fills them in with simple indexed assignments, not pushes.
pub struct FieldAgentStoreBuilder {
    count: usize,
    seed: u64,
}

impl FieldAgentStoreBuilder {
    /// Create a builder for `count` agents using `seed` as the global RNG
    /// seed.
    pub fn new(count: usize, seed: u64) -> Self {
        Self { count, seed }
    }

    /// Construct `FieldAgentStore` and `FieldAgentRngs`.
    pub fn build(self) -> (FieldAgentStore, FieldAgentRngs) {
        let store = FieldAgentStore::new(self.count);
        let rngs = FieldAgentRngs::new(self.count, self.seed);
        (store, rngs)
    }
}
