//! `dt-sim` — the Coordinator for the rust_dt evacuation simulation kernel
//! (SPEC_FULL.md §4.1).
//!
//! # Coordinator contract
//!
//! ```text
//! register(worker_id, agent_count)  — assign & publish an agent-id range
//! publish_cycle()                   — announce the cycle, block on "prepared"
//! publish_step()                    — announce the step, block on "step",
//!                                      publish the merged agent set and
//!                                      aggregate stats, wait, advance
//! ```
//!
//! # Crate layout
//!
//! | Module          | Contents                                                     |
//! |-----------------|-----------------------------------------------------------------|
//! | [`coordinator`] | `Coordinator` — the cycle/step barrier                          |
//! | [`builder`]     | `CoordinatorBuilder`                                             |
//! | [`route_server`]| `RouteServer` — bus glue over `dt_spatial::FloodAwareBfsRouter`  |
//! | [`media`]       | `MediaBroadcaster` — bus glue over `dt_schedule::MediaEvent`     |
//! | [`settings`]    | `Settings` — the §6 configuration document                      |
//! | [`error`]       | `SimError`, `SimResult<T>`                                       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dt_bus::InProcessBus;
//! use dt_schedule::{CycleDescriptor, CycleSchedule};
//! use dt_spatial::CsvFloodProvider;
//! use dt_sim::CoordinatorBuilder;
//!
//! let bus = InProcessBus::new();
//! let flood = CsvFloodProvider::new("flood/step_{step}.csv", 1.0, 100, 100);
//! let schedule = CycleSchedule::new(vec![CycleDescriptor::new(5, 50)]);
//! let mut coordinator = CoordinatorBuilder::new("demo", bus, flood, schedule).build();
//! // Workers sharing one in-process bus across threads should instead build
//! // from an `Arc<dyn Transport>` via `CoordinatorBuilder::with_shared_transport`.
//!
//! coordinator.register("graph-mover-0", 100)?;
//! coordinator.publish_cycle()?;
//! while !coordinator.needs_cycle_start() {
//!     coordinator.publish_step()?;
//! }
//! # Ok::<(), dt_sim::SimError>(())
//! ```

pub mod builder;
pub mod coordinator;
pub mod error;
pub mod media;
pub mod route_server;
pub mod settings;


pub use builder::CoordinatorBuilder;
pub use coordinator::Coordinator;
pub use error::{SimError, SimResult};
pub use media::MediaBroadcaster;
pub use route_server::RouteServer;
pub use settings::Settings;
