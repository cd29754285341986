//! `dt-bus` — the publish/subscribe transport seam between workers and the
//! coordinator.
//!
//! The framework only specifies *how* messages are addressed and shaped;
//! which broker actually carries them (MQTT, a message queue, an in-process
//! channel for tests) is left to the application. This crate supplies:
//!
//! | Module      | Contents                                                      |
//! |-------------|-----------------------------------------------------------------|
//! | [`transport`] | `Transport` trait, `Subscription`, `InProcessBus`               |
//! | [`topics`]    | Topic string builders for every channel in the catalogue        |
//! | [`payload`]   | `serde`-tagged wire structs matching each topic's payload shape |
//! | [`error`]     | `BusError`, `BusResult<T>`                                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                         |
//! |---------|------------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on payload types and enables   |
//!           | the `to_json`/`from_json` helpers. Enabled by default.           |

pub mod error;
pub mod payload;
pub mod topics;
pub mod transport;

#[cfg(test)]
mod tests;

pub use error::{BusError, BusResult};
pub use transport::{InProcessBus, Subscription, Transport};
