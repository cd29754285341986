//! `FieldMoverEngine` — the Field Mover's per-step grid update
//! (SPEC_FULL.md §4.6).

use dt_schedule::MediaEvent;

use crate::error::MobilityResult;
use crate::field::PotentialField;
use crate::status::FieldStatus;
use crate::store::{FieldAgentRngs, FieldAgentStore};

/// Potential boost added at every live agent's own cell before force
/// computation (SPEC_FULL.md §4.6, step 2).
const AGENT_BOOST: f32 = 0.0075;

/// A non-shelter cell holding at least this many agents becomes a wall for
/// the step (SPEC_FULL.md §4.6, step 2).
const WALL_AGENT_THRESHOLD: u32 = 4;

/// Defensive cap on sub-cell banking iterations per agent per step. The
/// original kernel's crossing loop has no such cap and can spin if geometry
/// lets `power` stay positive without ever crossing a cell boundary
/// (SPEC_FULL.md §9 open question); this never changes a trajectory that
/// would have terminated naturally within the cap.
const MAX_SUBCELL_ITERATIONS: u32 = 64;

/// Drives one step's worth of field-agent movement for a worker's owned
/// population.
pub struct FieldMoverEngine;

impl FieldMoverEngine {
    pub fn new() -> Self {
        Self
    }

    /// Advance every owned agent by one step.
    ///
    /// `active_media` are the Media Broadcaster's events active at this
    /// step (already filtered by `dt_schedule::active_events`); each may
    /// opportunistically wake an `Unaware` agent within `size/mesh` cells.
    pub fn step(
        &self,
        store: &mut FieldAgentStore,
        field: &PotentialField,
        rngs: &mut FieldAgentRngs,
        step: u32,
        active_media: &[&MediaEvent],
    ) -> MobilityResult<()> {
        let result_map = field.compose_result_map(step);
        let (working, temp_wall) = promote_working_grid(field, store, &result_map);

        for i in store.indices() {
            step_agent(i, store, field, &working, &result_map, &temp_wall);
        }

        apply_media_acquisition(store, field, rngs, step, active_media);

        Ok(())
    }
}

impl Default for FieldMoverEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Step 2: copy `result_map` into a working grid, add the per-agent
/// potential boost, and promote overcrowded non-shelter cells to temporary
/// walls.
fn promote_working_grid(field: &PotentialField, store: &FieldAgentStore, result_map: &[f32]) -> (Vec<f32>, Vec<bool>) {
    let mut working = result_map.to_vec();
    let mut occupancy = vec![0u32; field.width * field.height];

    for i in store.indices() {
        if store.status[i].is_terminal() {
            continue;
        }
        if let Some(idx) = field.index(store.cell_x[i], store.cell_y[i]) {
            working[idx] += AGENT_BOOST;
            occupancy[idx] += 1;
        }
    }

    let mut temp_wall = vec![false; field.width * field.height];
    for (idx, &count) in occupancy.iter().enumerate() {
        if count >= WALL_AGENT_THRESHOLD && field.object[idx] != crate::field::OBJECT_SHELTER {
            temp_wall[idx] = true;
        }
    }

    (working, temp_wall)
}

fn is_blocked(field: &PotentialField, temp_wall: &[bool], x: i32, y: i32) -> bool {
    match field.index(x, y) {
        Some(idx) => field.object[idx] == crate::field::OBJECT_WALL || temp_wall[idx],
        None => true,
    }
}

fn sample(field: &PotentialField, map: &[f32], x: i32, y: i32) -> f32 {
    match field.index(x, y) {
        Some(idx) => map[idx],
        None => 0.0,
    }
}

/// 8-neighborhood potential-difference force at `(x, y)`, diagonals
/// weighted ½, out-of-bounds neighbors contributing zero (SPEC_FULL.md
/// §4.6, step 3).
fn force_at(field: &PotentialField, working: &[f32], x: i32, y: i32) -> (f32, f32) {
    let at = |ddx: i32, ddy: i32| sample(field, working, x + ddx, y + ddy);

    let nw = at(-1, -1);
    let n = at(0, -1);
    let ne = at(1, -1);
    let w = at(-1, 0);
    let e = at(1, 0);
    let sw = at(-1, 1);
    let s = at(0, 1);
    let se = at(1, 1);

    let dx = 0.5 * nw + w + 0.5 * sw - 0.5 * ne - e - 0.5 * se;
    let dy = 0.5 * nw + n + 0.5 * ne - 0.5 * sw - s - 0.5 * se;
    (dx, dy)
}

fn step_agent(i: usize, store: &mut FieldAgentStore, field: &PotentialField, working: &[f32], result_map: &[f32], temp_wall: &[bool]) {
    match store.status[i] {
        FieldStatus::Unaware | FieldStatus::Evacuated => return,
        FieldStatus::Preparing => {
            if store.prepare_timer[i] > 0 {
                store.prepare_timer[i] -= 1;
                return;
            }
            store.status[i] = FieldStatus::Moving;
        }
        FieldStatus::Moving => {}
    }

    let (fx, fy) = force_at(field, working, store.cell_x[i], store.cell_y[i]);

    // Straight-line bias, computed from the *previous* step's last_velocity
    // before it is overwritten. The overwrite happens immediately after,
    // before the vector is scaled to `power`.
    let (lvx, lvy) = (store.last_vx[i], store.last_vy[i]);
    let last_len = (lvx * lvx + lvy * lvy).sqrt();
    let alpha = store.profile[i].bias_alpha;
    let (bx, by) = if last_len > 1e-9 {
        (lvx / last_len * alpha, lvy / last_len * alpha)
    } else {
        (0.0, 0.0)
    };

    let mut dx = fx + bx;
    let mut dy = fy + by;
    store.last_vx[i] = dx;
    store.last_vy[i] = dy;

    let magnitude = (dx * dx + dy * dy).sqrt();
    if magnitude <= 1e-9 {
        return;
    }
    dx /= magnitude;
    dy /= magnitude;

    let pot = sample(field, result_map, store.cell_x[i], store.cell_y[i]).max(0.0);
    let depth_decel = (0.7 - pot).max(0.0) / 0.7;
    let speed_decel = (2.5 - pot * (25.0 / 7.0)).max(0.0) / 2.5;
    let power = store.profile[i].speed * depth_decel * speed_decel;

    dx *= power;
    dy *= power;

    sub_cell_bank(i, store, field, temp_wall, dx, dy);
}

/// Step 3's sub-cell banking loop: spend `power` crossing whole cells along
/// whichever axis is closer to a boundary, banking the fractional leftover
/// (SPEC_FULL.md §4.6, step 3). When the crossing axis's destination cell is
/// blocked, the crossing is abandoned for this sub-step and its fractional
/// progress is banked instead of reset — this keeps `(x, y)` unchanged and
/// `(px, py)` accumulating, matching the "field wall" boundary scenario
/// (§8 #6) rather than the literal `px := 0` reset, which would discard the
/// agent's progress toward the wall every step.
fn sub_cell_bank(i: usize, store: &mut FieldAgentStore, field: &PotentialField, temp_wall: &[bool], dx: f32, dy: f32) {
    let mut remaining = (dx * dx + dy * dy).sqrt();
    let mut iterations = 0;

    while remaining > 0.0 && iterations < MAX_SUBCELL_ITERATIONS {
        iterations += 1;

        let ax = dx.abs();
        let ay = dy.abs();
        let wx = 1.0 - store.bank_px[i];
        let wy = 1.0 - store.bank_py[i];
        let ratio_x = if wx > 1e-9 { ax / wx } else { f32::INFINITY };
        let ratio_y = if wy > 1e-9 { ay / wy } else { f32::INFINITY };

        if ratio_x >= ratio_y && ratio_x >= 1.0 {
            let candidate = (store.cell_x[i] + dx.signum() as i32, store.cell_y[i]);
            if !is_blocked(field, temp_wall, candidate.0, candidate.1) {
                store.cell_x[i] = candidate.0;
                store.bank_px[i] = 0.0;
                let py_add = ay * wx / ax.max(1e-9);
                store.bank_py[i] += py_add;
                remaining -= (wx * wx + py_add * py_add).sqrt();
            } else {
                store.bank_px[i] += ax;
                store.bank_py[i] += ay;
                remaining -= (ax * ax + ay * ay).sqrt();
                break;
            }
        } else if ratio_y >= 1.0 {
            let candidate = (store.cell_x[i], store.cell_y[i] + dy.signum() as i32);
            if !is_blocked(field, temp_wall, candidate.0, candidate.1) {
                store.cell_y[i] = candidate.1;
                store.bank_py[i] = 0.0;
                let px_add = ax * wy / ay.max(1e-9);
                store.bank_px[i] += px_add;
                remaining -= (wy * wy + px_add * px_add).sqrt();
            } else {
                store.bank_px[i] += ax;
                store.bank_py[i] += ay;
                remaining -= (ax * ax + ay * ay).sqrt();
                break;
            }
        } else {
            store.bank_px[i] += ax;
            store.bank_py[i] += ay;
            remaining -= (ax * ax + ay * ay).sqrt();
            break;
        }

        if field.is_shelter(store.cell_x[i], store.cell_y[i]) {
            store.status[i] = FieldStatus::Evacuated;
            break;
        }
    }
}

/// Media events may opportunistically wake `Unaware` agents within
/// `size/mesh` cells, with probability `event.acquisition * agent.acquisition`
/// (SPEC_FULL.md §4.6).
fn apply_media_acquisition(store: &mut FieldAgentStore, field: &PotentialField, rngs: &mut FieldAgentRngs, step: u32, active_media: &[&MediaEvent]) {
    for event in active_media {
        let Some(pos) = event.position_at(step) else { continue };
        let radius_cells = event.size / field.mesh_size;
        let ex = pos.x / field.mesh_size;
        let ey = pos.y / field.mesh_size;

        for i in store.indices() {
            if store.status[i] != FieldStatus::Unaware {
                continue;
            }
            let dx = store.cell_x[i] as f32 - ex;
            let dy = store.cell_y[i] as f32 - ey;
            if (dx * dx + dy * dy).sqrt() > radius_cells {
                continue;
            }
            let p = (event.acquisition * store.profile[i].acquisition) as f64;
            if rngs.get_mut(i).gen_bool(p) {
                store.status[i] = FieldStatus::Preparing;
                store.prepare_timer[i] = store.profile[i].prepare_time;
            }
        }
    }
}
