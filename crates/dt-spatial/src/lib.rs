//! `dt-spatial` — road network, flood grid, spatial indexing, and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `RoadNetwork` (CSR + R-tree), `RoadNetworkBuilder`          |
//! | [`loader`]  | Map Store — CSV loading of nodes/links/shelters             |
//! | [`flood`]   | `FloodGrid`, `FloodProvider`, `CsvFloodProvider`            |
//! | [`router`]  | `Router` trait, `Route`, `DijkstraRouter`, `FloodAwareBfsRouter` |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod flood;
pub mod loader;
pub mod network;
pub mod router;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use flood::{CsvFloodProvider, FloodGrid, FloodProvider};
pub use loader::load_map;
pub use network::{RoadNetwork, RoadNetworkBuilder};
pub use router::{DijkstraRouter, FloodAwareBfsRouter, Route, Router, IMPASSABLE_DEPTH_M};
