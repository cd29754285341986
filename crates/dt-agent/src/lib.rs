//! `dt-agent` — Structure-of-Arrays storage for road-graph agents in the
//! `rust_dt` framework.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`component`]   | `ComponentVec` trait, `TypedComponentVec<T>`, `ComponentMap` |
//! | [`status`]      | `GraphStatus` — the seven graph-agent status variants     |
//! | [`profile`]     | `GraphAgentProfile` — immutable per-agent parameters       |
//! | [`store`]       | `GraphAgentStore` (SoA arrays), `AgentRngs` (per-agent RNG) |
//! | [`builder`]     | `GraphAgentStoreBuilder` (fluent construction)             |
//! | [`error`]       | `AgentError`, `AgentResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types.     |

pub mod builder;
pub mod component;
pub mod error;
pub mod profile;
pub mod status;
pub mod store;


pub use builder::GraphAgentStoreBuilder;
pub use component::{ComponentMap, ComponentVec, TypedComponentVec};
pub use error::{AgentError, AgentResult};
pub use profile::GraphAgentProfile;
pub use status::GraphStatus;
pub use store::{AgentRngs, GraphAgentStore};
