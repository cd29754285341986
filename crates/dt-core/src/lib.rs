//! `dt-core` — foundational types for the `rust_dt` digital twin framework.
//!
//! This crate is a dependency of every other `dt-*` crate.  It intentionally
//! has no `dt-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `NodeId`, `ActivityId`                     |
//! | [`point`]       | `Point`, planar Euclidean distance                     |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`error`]       | `DtError`, `DtResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by `dt-output` and `dt-bus`.                      |

pub mod error;
pub mod ids;
pub mod point;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{DtError, DtResult};
pub use ids::{ActivityId, AgentId, NodeId};
pub use point::Point;
pub use rng::{AgentRng, SimRng};
pub use time::Tick;
