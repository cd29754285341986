//! Coordinator error type — the aggregation point for every lower crate's
//! error, plus the two protocol-integrity errors the Coordinator itself
//! detects.

use dt_behavior::BehaviorError;
use dt_bus::BusError;
use dt_core::{AgentId, NodeId};
use dt_mobility::MobilityError;
use dt_schedule::ScheduleError;
use dt_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("coordinator configuration error: {0}")]
    Config(String),

    #[error("settings document error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("transport error: {0}")]
    Bus(#[from] BusError),

    #[error("spatial error: {0}")]
    Spatial(#[from] SpatialError),

    #[error("schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("graph mover error: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("field mover error: {0}")]
    Mobility(#[from] MobilityError),

    /// A published route's head is not adjacent to the agent's current
    /// node. Fatal — the simulation is in an inconsistent state.
    #[error("route for agent {agent} starts at {route_head} which is not adjacent to current node {current}")]
    RouteNeighborMismatch {
        agent: AgentId,
        current: NodeId,
        route_head: NodeId,
    },

    /// The influence BFS's fixed per-agent task buffer overflowed. Non-fatal:
    /// the BFS is truncated to whatever it collected before overflowing.
    #[error("influence BFS task buffer overflowed for agent {agent}")]
    InfluenceBufferOverflow { agent: AgentId },
}

pub type SimResult<T> = Result<T, SimError>;
