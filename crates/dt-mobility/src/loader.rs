//! Potential-field and field-agent-profile loading.
//!
//! # External potential construction (SPEC_FULL.md §3)
//!
//! An external-map source is either a CSV of raw per-cell values or a JSON
//! list of Gaussian terms, each with an amplitude (`Potential`) and a decay
//! scale (`DR`). For a Gaussian source, every cell's contribution is **not**
//! a literal sum across the file's terms: for each term compute
//! `value = Potential · exp(-distance_to_center² / DR²)`, keep only the
//! term of largest absolute magnitude seen for that cell, and use that
//! dominant value. Multiple source *files* still accumulate additively.
//!
//! A source's `is_wall`/`is_shelter` flag redirects its computed grid away
//! from the scalar potential entirely: every cell where the computed value
//! is non-negligible marks the object grid as a wall or shelter instead.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{MobilityError, MobilityResult};
use crate::field::{DisasterLayer, PotentialField, OBJECT_SHELTER, OBJECT_WALL};
use crate::profile::FieldAgentProfile;
use crate::status::FieldStatus;

/// Below this magnitude a Gaussian term's contribution is treated as zero
/// when deciding whether a wall/shelter source's cell is "nonzero" — a
/// Gaussian never reaches exact zero, so the literal reading of §3 would
/// mark the entire grid.
const GAUSSIAN_NONZERO_EPSILON: f32 = 1e-6;

const PERSON_HEADER_LINES: usize = 1;

/// One term of a sum-of-Gaussians external-map JSON file.
#[derive(Debug, Deserialize)]
struct GaussianTerm {
    #[serde(rename = "Potential")]
    potential: f32,
    #[serde(rename = "DR")]
    dr: f32,
    x: f32,
    y: f32,
}

/// Describes one configured external-map source (SPEC_FULL.md §6
/// `Potential[].external`).
pub struct ExternalMapSource {
    pub path: String,
    pub is_json: bool,
    pub is_wall: bool,
    pub is_shelter: bool,
}

/// Accumulate `source` into `field`'s external potential (or object grid, if
/// it is a wall/shelter source).
pub fn load_external_map(field: &mut PotentialField, source: &ExternalMapSource) -> MobilityResult<()> {
    let grid = if source.is_json {
        gaussian_grid(field.width, field.height, field.mesh_size, &source.path)?
    } else {
        csv_grid(field.width, field.height, &source.path)?
    };

    if source.is_wall || source.is_shelter {
        let mark = if source.is_wall { OBJECT_WALL } else { OBJECT_SHELTER };
        for (obj, &v) in field.object.iter_mut().zip(&grid) {
            if v.abs() > GAUSSIAN_NONZERO_EPSILON {
                *obj = mark;
            }
        }
    } else {
        for (e, &v) in field.external.iter_mut().zip(&grid) {
            *e += v;
        }
    }
    Ok(())
}

/// Load one disaster layer: a raw row-major grid plus the step indices on
/// which it contributes.
pub fn load_disaster_layer(width: usize, height: usize, path: &str, labels: Vec<u32>) -> MobilityResult<DisasterLayer> {
    Ok(DisasterLayer {
        values: csv_grid(width, height, path)?,
        labels,
    })
}

fn gaussian_grid(width: usize, height: usize, mesh_size: f32, path: &str) -> MobilityResult<Vec<f32>> {
    let text = std::fs::read_to_string(Path::new(path))?;
    let terms: Vec<GaussianTerm> = serde_json::from_str(&text)?;

    let mut grid = vec![0.0f32; width * height];
    for row in 0..height {
        for col in 0..width {
            let cx = col as f32 * mesh_size;
            let cy = row as f32 * mesh_size;
            let mut dominant = 0.0f32;
            for term in &terms {
                let dx = cx - term.x;
                let dy = cy - term.y;
                let dist_sq = dx * dx + dy * dy;
                let value = term.potential * (-dist_sq / (term.dr * term.dr)).exp();
                if value.abs() > dominant.abs() {
                    dominant = value;
                }
            }
            grid[row * width + col] = dominant;
        }
    }
    Ok(grid)
}

/// A raw, headerless, comma-separated row-major matrix of cell values —
/// the same shape `dt_spatial::CsvFloodProvider` reads per-step flood grids
/// in.
fn csv_grid(width: usize, height: usize, path: &str) -> MobilityResult<Vec<f32>> {
    let text = std::fs::read_to_string(Path::new(path))?;
    let mut grid = Vec::with_capacity(width * height);
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        for field in line.split(',') {
            let v: f32 = field.trim().parse().map_err(|_| {
                MobilityError::MalformedRow(format!("non-numeric cell in {path}"))
            })?;
            grid.push(v);
        }
    }
    if grid.len() != width * height {
        tracing::warn!(
            path,
            expected = width * height,
            got = grid.len(),
            "potential grid size mismatch, padding with zero"
        );
        grid.resize(width * height, 0.0);
    }
    Ok(grid)
}

/// One row of the shared person table, reinterpreted for a field-bound
/// agent (SPEC_FULL.md §4.6 profile loading). Columns not meaningful to the
/// Field Mover (target node, timeouts, influence) are parsed for shape
/// compatibility with the Graph Mover's table and then discarded.
#[derive(Debug, Deserialize)]
struct PersonRow {
    x: f32,
    y: f32,
    _info_access: u8,
    prepare_timeout: i32,
    speed: f32,
    _reserved5: f32,
    _reserved6: f32,
    _view_length: u32,
    _warning_depth: f32,
    _victim_depth: f32,
    _target_nid: i64,
    _request_timeout: i32,
    _reroute_timeout: i32,
    _influence: u8,
    #[serde(default)]
    acquisition: Option<f32>,
}

/// One field agent's initial placement and profile, as parsed from a person
/// row.
pub struct FieldAgentSeed {
    pub cell_x: i32,
    pub cell_y: i32,
    pub prepare_timer: i32,
    pub profile: FieldAgentProfile,
    pub status: FieldStatus,
}

/// Load field-agent seeds from the shared person-table CSV.
///
/// `bias_alpha` is not a person-row column (SPEC_FULL.md §9 open question);
/// it is supplied once per `Potential[]` configuration entry and applied to
/// every agent loaded from that entry.
pub fn load_field_profiles<R: Read>(reader: R, mesh_size: f32, bias_alpha: f32) -> Vec<FieldAgentSeed> {
    read_skipping_header::<PersonRow, _>(reader, PERSON_HEADER_LINES)
        .into_iter()
        .map(|row| {
            let profile = FieldAgentProfile {
                prepare_time: row.prepare_timeout,
                speed: row.speed,
                bias_alpha,
                acquisition: row.acquisition.unwrap_or(0.0),
            };
            FieldAgentSeed {
                cell_x: (row.x / mesh_size).floor() as i32,
                cell_y: (row.y / mesh_size).floor() as i32,
                prepare_timer: row.prepare_timeout,
                profile,
                status: FieldStatus::Unaware,
            }
        })
        .collect()
}

fn read_skipping_header<T, R>(reader: R, header_lines: usize) -> Vec<T>
where
    T: for<'de> Deserialize<'de>,
    R: Read,
{
    let mut text = String::new();
    let mut reader = reader;
    if reader.read_to_string(&mut text).is_err() {
        return Vec::new();
    }

    let body: String = text.lines().skip(header_lines).collect::<Vec<_>>().join("\n");

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    csv_reader
        .deserialize::<T>()
        .filter_map(|result| match result {
            Ok(row) => Some(row),
            Err(e) => {
                tracing::warn!(error = %e, "malformed person row, skipped");
                None
            }
        })
        .collect()
}
