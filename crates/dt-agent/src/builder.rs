//! Fluent builder for constructing `GraphAgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use dt_agent::GraphAgentStoreBuilder;
//!
//! #[derive(Default)]
//! struct Telemetry { last_publish_tick: u64 }
//!
//! let (mut store, mut rngs) = GraphAgentStoreBuilder::new(10_000, /*seed=*/ 42)
//!     .register_component::<Telemetry>()
//!     .build();
//!
//! assert_eq!(store.count, 10_000);
//! assert_eq!(rngs.len(),  10_000);
//!
//! // Fill in actual values from the person/node CSVs after building.
//! // (All arrays start at sentinel / Default values.)
//! ```

use crate::{AgentRngs, ComponentMap, GraphAgentStore};

/// Fluent builder for [`GraphAgentStore`] + [`AgentRngs`].
///
/// All arrays are pre-allocated at construction time so later field writes
/// (from CSV loaders, etc.) are simple indexed assignments, not pushes.
pub struct GraphAgentStoreBuilder {
    count: usize,
    seed: u64,
    components: ComponentMap,
}

impl GraphAgentStoreBuilder {
    /// Create a builder for `count` agents using `seed` as the global RNG seed.
    ///
    /// `count` is typically the number of rows in the person CSV.
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            components: ComponentMap::new(),
        }
    }

    /// Register an application-defined component type `T`.
    ///
    /// Every agent will start with `T::default()`. Must be called before
    /// [`build`](Self::build) — components cannot be added after the store
    /// is constructed. Calling this twice for the same `T` is harmless.
    pub fn register_component<T: Default + Send + Sync + 'static>(mut self) -> Self {
        self.components.register::<T>(0);
        self
    }

    /// Construct `GraphAgentStore` and `AgentRngs`.
    ///
    /// All SoA arrays are allocated and filled with sentinel / `Default`
    /// values. Applications write actual initial state (from CSV, etc.)
    /// directly to the `pub` fields of the returned store.
    pub fn build(mut self) -> (GraphAgentStore, AgentRngs) {
        for _ in 0..self.count {
            self.components.push_defaults();
        }

        let store = GraphAgentStore::new(self.count, self.components);
        let rngs = AgentRngs::new(self.count, self.seed);

        (store, rngs)
    }
}
