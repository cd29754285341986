//! `dt-behavior` — the Graph Mover's per-step agent cascade
//! (SPEC_FULL.md §4.5).
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|------------------------------------------------------------------|
//! | [`peer`]     | `PeerSnapshot` — cross-mover gossip (§4.8)                       |
//! | [`topology`] | `InfluenceTopology` — per-node occupancy table (§4.5.c)          |
//! | [`bfs`]      | `bounded_influence_bfs` — the per-agent influence BFS (§4.5.c)  |
//! | [`view`]     | View-offset table for the re-route check (§4.5.d)                |
//! | [`cascade`]  | `update_agent` — the per-agent update (§4.5.d)                   |
//! | [`context`]  | `StepContext<'a>` — read-only per-step snapshot                  |
//! | [`model`]    | `BehaviorModel` trait                                            |
//! | [`engine`]   | `GraphMoverEngine`, `StepOutput`                                 |
//! | [`noop`]     | `NoopBehavior` — placeholder that never produces output          |
//! | [`request`]  | `RouteRequest`                                                   |
//! | [`error`]    | `BehaviorError`, `BehaviorResult<T>`                             |
//!
//! # Design notes
//!
//! One `GraphMoverEngine::step` call replaces the teacher's per-agent
//! `replan` callback: the influence topology and the motion update both
//! depend on state spanning the owned population, so a whole-population
//! pass is the natural shape here rather than one callback per agent. The
//! `BehaviorModel` trait still gives an extension point for tests and
//! alternate populations (`NoopBehavior`).

pub mod bfs;
pub mod cascade;
pub mod context;
pub mod engine;
pub mod error;
pub mod model;
pub mod noop;
pub mod peer;
pub mod request;
pub mod topology;
pub mod view;


pub use context::StepContext;
pub use engine::{GraphMoverEngine, StepOutput};
pub use error::{BehaviorError, BehaviorResult};
pub use model::BehaviorModel;
pub use noop::NoopBehavior;
pub use peer::PeerSnapshot;
pub use request::RouteRequest;
pub use topology::InfluenceTopology;
pub use view::build_view_offsets;
