//! Per-agent cascade update (SPEC_FULL.md §4.5.d).
//!
//! Status 6 (`Victim`) and 7 (`Evacuated`) are terminal; a terminal agent's
//! state is never touched again. The remaining checks run in a fixed order
//! but are order-*independent* across agents — nothing here reads another
//! owned agent's state for this step, only `ctx.topology`'s snapshot of the
//! previous step.

use dt_agent::{GraphAgentStore, GraphStatus};
use dt_core::{AgentId, Point};

use crate::context::StepContext;
use crate::error::BehaviorResult;
use crate::request::RouteRequest;
use crate::view::offset_radius;

const INFO_LOSS_RADIUS_SQ: f32 = 1_000_000.0;

/// Run the full per-agent cascade for agent index `i`, given its
/// freshly-computed `route_to_top`/`route_to_leader` (already written into
/// `store` by the caller). Returns the route request to publish, if the
/// view-based re-route check fired this step.
pub fn update_agent(
    i: usize,
    global_id: AgentId,
    store: &mut GraphAgentStore,
    ctx: &StepContext<'_>,
) -> BehaviorResult<Option<RouteRequest>> {
    if store.status[i].is_terminal() {
        return Ok(None);
    }

    let profile = store.profile[i];
    let pos = Point::new(store.x[i], store.y[i]);
    let node = store.node_id[i];
    let height = ctx.network.node_height[node.index()];

    // Victimization.
    let flood_depth = ctx.flood.depth_at(pos);
    if flood_depth - height / 100.0 >= profile.victim_depth {
        store.status[i] = GraphStatus::Victim;
        return Ok(None);
    }

    // Information loss.
    for &antenna in ctx.qr_antenna_points {
        if pos.distance_sq(antenna) <= INFO_LOSS_RADIUS_SQ {
            store.info_access[i] = false;
            break;
        }
    }

    // Follow-the-leader.
    store.is_re_requesting[i] = false;
    if profile.influence > 0 {
        if let Some(&tail) = store.route_to_leader[i].last() {
            let leader_influence = ctx.topology.top_influence(tail);
            if leader_influence > profile.influence as i32 {
                if leader_influence >= 2 {
                    store.announced[i] = true;
                }
                if leader_influence >= 3 {
                    store.prepare_timer[i] = 0;
                }
                if store.status[i] != GraphStatus::LeaderFollowing
                    && (store.route[i].is_empty() || leader_influence == 4)
                {
                    let mut adopted = store.route_to_leader[i].clone();
                    let leader_id = ctx.topology.top_person(tail);
                    if let Some(leader_route) = ctx.topology.leader_route(leader_id) {
                        adopted.extend_from_slice(leader_route);
                    }
                    store.route[i] = adopted;
                    if store.prepare_timer[i] <= 0 {
                        store.status[i] = GraphStatus::LeaderFollowing;
                    }
                }
            }
        }
    }

    // Gating.
    if !store.announced[i] {
        return Ok(None);
    }
    store.prepare_timer[i] -= 1;
    store.reroute_timer[i] -= 1;
    if store.prepare_timer[i] > 0 {
        return Ok(None);
    }

    // View-based re-route.
    let mut route_request = None;
    if store.reroute_timer[i] <= 0 && store.info_access[i] {
        let mut should_reroute = store.route[i].is_empty();
        if !should_reroute {
            let mesh = ctx.flood.mesh_size;
            for &(dx, dy) in ctx.view_offsets {
                if offset_radius(dx, dy) > profile.view_length as i32 {
                    break;
                }
                let probe = Point::new(pos.x + dx as f32 * mesh, pos.y + dy as f32 * mesh);
                if ctx.flood.depth_at(probe) >= profile.warning_depth {
                    should_reroute = true;
                    break;
                }
            }
        }
        if should_reroute {
            if store.status[i] == GraphStatus::Requesting {
                store.is_re_requesting[i] = true;
            }
            store.status[i] = GraphStatus::Requesting;
            store.route[i].clear();
            store.reroute_timer[i] = profile.request_timeout;
            route_request = Some(RouteRequest {
                agent: global_id,
                start_nid: node,
                target_nid: profile.target_nid,
            });
        }
    }

    // High-ground escape.
    if !store.route_to_top[i].is_empty()
        && (store.status[i] == GraphStatus::Climbing
            || store.is_re_requesting[i]
            || ((store.status[i] == GraphStatus::Idle || store.status[i] == GraphStatus::Requesting)
                && !store.info_access[i]))
    {
        store.status[i] = GraphStatus::Climbing;
        store.route[i] = store.route_to_top[i].clone();
    }

    // Motion.
    if !store.route[i].is_empty() {
        let mut remaining = profile.speed;
        while remaining > 0.0 && !store.route[i].is_empty() {
            let cur = store.node_id[i];
            let next = store.route[i][0];
            if !ctx.network.are_adjacent(cur, next) {
                return Err(crate::error::BehaviorError::RouteIntegrity(next, cur));
            }
            let edge_len = ctx.network.edge_length_between(cur, next).unwrap_or(0.0).max(1e-6);
            let needed = (1.0 - store.edge_progress[i]) * edge_len;
            if remaining >= needed {
                remaining -= needed;
                store.edge_progress[i] = 0.0;
                store.node_id[i] = next;
                let next_pos = ctx.network.node_pos[next.index()];
                store.x[i] = next_pos.x;
                store.y[i] = next_pos.y;
                store.route[i].remove(0);
            } else {
                store.edge_progress[i] += remaining / edge_len;
                remaining = 0.0;
            }
        }
        // Status only changes here if the route actually emptied this step;
        // otherwise whatever status the earlier checks set (Requesting,
        // Climbing, LeaderFollowing, ...) stands until the route server or a
        // later step changes it.
        if store.route[i].is_empty() {
            store.status[i] = if ctx.network.is_shelter[store.node_id[i].index()] {
                GraphStatus::Evacuated
            } else {
                GraphStatus::Idle
            };
        }
    }

    Ok(route_request)
}
