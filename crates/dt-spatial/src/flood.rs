//! Flood Provider — per-step inundation grids.
//!
//! A flood grid is a dense, axis-aligned array of depth-in-meters cells
//! covering the map. Depths are read fresh for every simulation cycle; this
//! module never mutates a grid once loaded (SPEC_FULL.md §4.3).

use std::fs;
use std::path::Path;

use dt_core::Point;

use crate::error::{SpatialError, SpatialResult};

/// A single step's inundation snapshot.
#[derive(Debug, Clone)]
pub struct FloodGrid {
    /// Cell edge length in map units. Both axes share the same mesh size.
    pub mesh_size: f32,
    /// Number of cells along x.
    pub width: usize,
    /// Number of cells along y.
    pub height: usize,
    /// Row-major depth values, meters. Index = `row * width + col`.
    depths: Vec<f32>,
    total: f64,
    max: f32,
}

impl FloodGrid {
    /// Build a grid from a row-major depth matrix. `total`/`max` are
    /// computed once here rather than on every query.
    pub fn new(mesh_size: f32, width: usize, height: usize, depths: Vec<f32>) -> Self {
        debug_assert_eq!(depths.len(), width * height);
        let total = depths.iter().map(|&d| d as f64).sum();
        let max = depths.iter().copied().fold(0.0f32, f32::max);
        Self {
            mesh_size,
            width,
            height,
            depths,
            total,
            max,
        }
    }

    /// An empty grid — every cell is dry. Used before the first flood file
    /// loads and as a safe fallback for a missing step.
    pub fn dry(mesh_size: f32, width: usize, height: usize) -> Self {
        Self::new(mesh_size, width, height, vec![0.0; width.max(1) * height.max(1)])
    }

    /// Depth at a planar position, or `0.0` if outside the grid — cells
    /// outside the loaded extent are treated as dry, never as an error.
    pub fn depth_at(&self, pos: Point) -> f32 {
        if self.mesh_size <= 0.0 {
            return 0.0;
        }
        let col = (pos.x / self.mesh_size).floor();
        let row = (pos.y / self.mesh_size).floor();
        if col < 0.0 || row < 0.0 {
            return 0.0;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.width || row >= self.height {
            return 0.0;
        }
        self.depths[row * self.width + col]
    }

    /// Return a copy of this grid with every cell covered by `points` forced
    /// to `depth` — the Graph Mover's "QR flood" overlay (SPEC_FULL.md
    /// §4.5.a), which lets a user-injected report force a cell to look
    /// flooded regardless of what the provider returned for this step.
    pub fn with_forced_depth(&self, points: &[Point], depth: f32) -> FloodGrid {
        let mut depths = self.depths.clone();
        for &p in points {
            if self.mesh_size <= 0.0 {
                continue;
            }
            let col = (p.x / self.mesh_size).floor();
            let row = (p.y / self.mesh_size).floor();
            if col < 0.0 || row < 0.0 {
                continue;
            }
            let (col, row) = (col as usize, row as usize);
            if col >= self.width || row >= self.height {
                continue;
            }
            depths[row * self.width + col] = depth;
        }
        FloodGrid::new(self.mesh_size, self.width, self.height, depths)
    }

    /// Sum of all cell depths — published as `TotalFlood` in stats.
    pub fn total_depth(&self) -> f64 {
        self.total
    }

    /// Maximum single-cell depth — published as `MaxFlood` in stats.
    pub fn max_depth(&self) -> f32 {
        self.max
    }
}

/// Supplies the flood grid for a given simulation step.
///
/// Implementations may load from disk, a precomputed in-memory table, or —
/// in tests — a fixed grid regardless of step.
pub trait FloodProvider: Send + Sync {
    fn flood_for_step(&self, step: u32) -> SpatialResult<FloodGrid>;
}

/// Loads flood grids from CSV files named by a `{step}` placeholder
/// template, e.g. `"flood/step_{step}.csv"`.
///
/// Each file is a plain row-major matrix of depth values (meters),
/// comma-separated, one row per line. No header row.
pub struct CsvFloodProvider {
    path_template: String,
    mesh_size: f32,
    width: usize,
    height: usize,
}

impl CsvFloodProvider {
    pub fn new(path_template: impl Into<String>, mesh_size: f32, width: usize, height: usize) -> Self {
        Self {
            path_template: path_template.into(),
            mesh_size,
            width,
            height,
        }
    }

    fn path_for_step(&self, step: u32) -> String {
        self.path_template.replace("{step}", &step.to_string())
    }
}

impl FloodProvider for CsvFloodProvider {
    fn flood_for_step(&self, step: u32) -> SpatialResult<FloodGrid> {
        let path = self.path_for_step(step);
        let text = fs::read_to_string(Path::new(&path))?;
        let mut depths = Vec::with_capacity(self.width * self.height);
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            for field in line.split(',') {
                let v: f32 = field.trim().parse().map_err(|_| {
                    SpatialError::MalformedRow(format!("non-numeric flood cell in {path}"))
                })?;
                depths.push(v);
            }
        }
        if depths.len() != self.width * self.height {
            // A short or missing file is not fatal — the provider falls back to
            // a dry grid rather than aborting the cycle.
            tracing::warn!(
                path,
                expected = self.width * self.height,
                got = depths.len(),
                "flood grid size mismatch, using dry grid"
            );
            return Ok(FloodGrid::dry(self.mesh_size, self.width, self.height));
        }
        Ok(FloodGrid::new(self.mesh_size, self.width, self.height, depths))
    }
}
