//! Wire payload shapes.
//!
//! Field casing here is wire-stable, not house style: several payloads mix
//! `snake_case`, `camelCase`, and `PascalCase` within a single struct (e.g.
//! [`AllEntity`]'s `X`/`Y` next to `status`/`infoAccess`). Every field keeps
//! idiomatic Rust naming and carries an explicit `#[serde(rename = "...")]`
//! so the wire shape is preserved without forcing ugly field names on callers.

#![cfg_attr(not(feature = "serde"), allow(dead_code))]

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! wire_struct {
    ($(#[$attr:meta])* $vis:vis struct $name:ident { $($body:tt)* }) => {
        $(#[$attr])*
        #[derive(Clone, Debug, PartialEq)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        $vis struct $name { $($body)* }
    };
}

wire_struct! {
    /// `aria/attend/{universe}` — a worker announcing its presence.
    pub struct AttendEntity {
        pub id: String,
        pub count: i64,
    }
}

wire_struct! {
    /// `aria/registered/{universe}/{id}` — the assigned agent-id range.
    pub struct RegisteredEntity {
        pub id: String,
        pub from: u32,
        pub to: u32,
    }
}

wire_struct! {
    /// `aria/cycle/{universe}` — the announce_step for the next cycle.
    pub struct CycleEntity {
        #[cfg_attr(feature = "serde", serde(rename = "a"))]
        pub announce_step: u32,
    }
}

wire_struct! {
    /// `aria/prepared/{universe}` — a worker confirming readiness.
    ///
    /// `persons` is optional on the wire: one reference code path emits only
    /// `{id}`. Deserializing a payload with no `persons` field yields `None`.
    pub struct PreparedEntity {
        pub id: String,
        pub persons: Option<Vec<AllEntity>>,
    }
}

wire_struct! {
    /// `aria/persons/{universe}` — a worker's per-step agent batch.
    pub struct StepEntity {
        pub id: String,
        pub persons: Option<Vec<AllEntity>>,
    }
}

wire_struct! {
    /// `/flood/count` — the step counter that drives the media broadcaster.
    pub struct CountEntity {
        pub count: i64,
    }
}

wire_struct! {
    /// A single agent's published state, carried inside [`PreparedEntity`],
    /// [`StepEntity`], and the coordinator's merged `/person/send/all`.
    ///
    /// Field casing matches the historical wire shape exactly: `X`/`Y` are
    /// capitalized, `Simulationtime` keeps its unusual spelling, and
    /// `status`/`infoAccess` are not capitalized.
    pub struct AllEntity {
        #[cfg_attr(feature = "serde", serde(rename = "Simulationtime"))]
        pub simulation_time: i64,
        pub id: u32,
        #[cfg_attr(feature = "serde", serde(rename = "X"))]
        pub x: f32,
        #[cfg_attr(feature = "serde", serde(rename = "Y"))]
        pub y: f32,
        pub status: i32,
        #[cfg_attr(feature = "serde", serde(rename = "infoAccess"))]
        pub info_access: i32,
    }
}

wire_struct! {
    /// `aria/intra/persons/{universe}` — one graph mover's compact gossip
    /// snapshot of the agents it owns. Published as a `Vec<IntraPersonEntity>`.
    pub struct IntraPersonEntity {
        pub id: u32,
        pub nid: u32,
        pub influence: i32,
        pub route: Vec<u32>,
    }
}

wire_struct! {
    /// `/person/send/start2target/{agent_id}` — a route request.
    pub struct RouteRequestEntity {
        #[cfg_attr(feature = "serde", serde(rename = "startNID"))]
        pub start_nid: u32,
        #[cfg_attr(feature = "serde", serde(rename = "targetNID"))]
        pub target_nid: u32,
    }
}

wire_struct! {
    /// `*→W` camera-sourced event (flood or antenna) tagged by sensor id.
    pub struct CameraEntity {
        pub width: u32,
        pub height: u32,
        #[cfg_attr(feature = "serde", serde(rename = "lt_x"))]
        pub left: f32,
        #[cfg_attr(feature = "serde", serde(rename = "lt_y"))]
        pub top: f32,
        #[cfg_attr(feature = "serde", serde(rename = "rb_x"))]
        pub right: f32,
        #[cfg_attr(feature = "serde", serde(rename = "rb_y"))]
        pub bottom: f32,
        pub topic: String,
        pub data: String,
        pub x: f32,
        pub y: f32,
    }
}

wire_struct! {
    /// `aria/media/{universe}` — a scripted media event for the current step.
    pub struct MediaEntity {
        pub x: f32,
        pub y: f32,
        pub size: f32,
        pub acquisition: f32,
        #[cfg_attr(feature = "serde", serde(rename = "type"))]
        pub kind: String,
    }
}

wire_struct! {
    /// `/stat/send` — the coordinator's per-step aggregate statistics.
    pub struct StatEntity {
        #[cfg_attr(feature = "serde", serde(rename = "AffectedPerson"))]
        pub affected_person: u64,
        #[cfg_attr(feature = "serde", serde(rename = "EvacuatedPerson"))]
        pub evacuated_person: u64,
        #[cfg_attr(feature = "serde", serde(rename = "TotalFlood"))]
        pub total_flood: f64,
        #[cfg_attr(feature = "serde", serde(rename = "MaxFlood"))]
        pub max_flood: f64,
    }
}

/// `/person/recv/start2target/{agent_id}` — a route reply: an ordered list
/// of node ids rendered as decimal strings (matching the historical wire
/// shape, which carries node ids as strings rather than integers).
pub type RouteReplyEntity = Vec<String>;

/// `/person/send/all` — the coordinator's merged view of every agent.
pub type PersonSendAllEntity = Vec<AllEntity>;
