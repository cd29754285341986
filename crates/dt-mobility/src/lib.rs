//! `dt-mobility` — the Field Mover's grid-based agent population
//! (SPEC_FULL.md §4.6).
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`status`]  | `FieldStatus` — the four field-agent status variants              |
//! | [`profile`] | `FieldAgentProfile` — immutable per-agent parameters               |
//! | [`store`]   | `FieldAgentStore` (SoA arrays), `FieldAgentRngs` (per-agent RNG)   |
//! | [`builder`] | `FieldAgentStoreBuilder` (fluent construction)                     |
//! | [`field`]   | `PotentialField`, `DisasterLayer` — the per-cell scalar grids      |
//! | [`loader`]  | External-map/Gaussian/disaster/person-row loading                 |
//! | [`engine`]  | `FieldMoverEngine` — the per-step force/banking update             |
//! | [`error`]   | `MobilityError`, `MobilityResult<T>`                               |
//!
//! # Movement model
//!
//! Unlike the Graph Mover's road-network agents, field-bound agents have no
//! notion of nodes or routes: they descend a scalar potential gradient
//! (external map + active disaster layers + a live-agent crowding term)
//! across a uniform grid, banking fractional sub-cell progress between
//! whole-cell crossings. `FieldMoverEngine::step` advances the whole owned
//! population by one step; reaching a shelter cell is terminal.

pub mod builder;
pub mod engine;
pub mod error;
pub mod field;
pub mod loader;
pub mod profile;
pub mod status;
pub mod store;


pub use builder::FieldAgentStoreBuilder;
pub use engine::FieldMoverEngine;
pub use error::{MobilityError, MobilityResult};
pub use field::{DisasterLayer, PotentialField};
pub use profile::FieldAgentProfile;
pub use status::FieldStatus;
pub use store::{FieldAgentRngs, FieldAgentStore};
