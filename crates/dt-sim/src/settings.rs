//! The coordinator's settings document (SPEC_FULL.md §6).
//!
//! Field names follow idiomatic Rust `snake_case`; the document's original
//! `PascalCase` wire casing is preserved verbatim via `#[serde(rename)]`,
//! the same discipline `dt-bus::payload` uses for wire structs.

use std::io::Read;

use serde::Deserialize;

use crate::error::SimResult;

/// One `Nodes[]` entry: the Graph Mover's per-instance configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct NodesConfig {
    #[serde(rename = "MaximumInfluenceLength")]
    pub maximum_influence_length: f32,
    #[serde(rename = "PersonFilePath")]
    pub person_file_path: String,
    #[serde(rename = "NodeFilePath")]
    pub node_file_path: String,
    #[serde(rename = "LinkFilePath")]
    pub link_file_path: String,
    #[serde(rename = "ShelterFilePath")]
    pub shelter_file_path: String,
}

/// One external-map source feeding the Field Mover's potential field.
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalMapConfig {
    #[serde(rename = "Path")]
    pub path: String,
    #[serde(rename = "IsJSON")]
    pub is_json: bool,
    #[serde(rename = "IsWall", default)]
    pub is_wall: bool,
    #[serde(rename = "IsShelter", default)]
    pub is_shelter: bool,
}

/// One disaster-layer source, active only at the listed step indices.
#[derive(Debug, Clone, Deserialize)]
pub struct DisasterMapConfig {
    #[serde(rename = "Path")]
    pub path: String,
    #[serde(rename = "Labels")]
    pub labels: Vec<u32>,
}

/// One scripted Media Broadcaster entry.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaConfig {
    #[serde(rename = "Step")]
    pub step: u32,
    #[serde(rename = "Duration")]
    pub duration: u32,
    #[serde(rename = "Acquisition")]
    pub acquisition: f32,
    #[serde(rename = "Size")]
    pub size: f32,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Positions")]
    pub positions: Vec<(f32, f32)>,
}

/// One `Potential[]` entry: the Field Mover's per-instance configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PotentialConfig {
    #[serde(rename = "MeshSize")]
    pub mesh_size: f32,
    #[serde(rename = "PersonFilePath")]
    pub person_file_path: String,
    #[serde(rename = "InternalMapFormat", default)]
    pub internal_map_format: Option<String>,
    #[serde(rename = "ExternalMaps", default)]
    pub external_maps: Vec<ExternalMapConfig>,
    #[serde(rename = "DisasterMaps", default)]
    pub disaster_maps: Vec<DisasterMapConfig>,
    #[serde(rename = "Media", default)]
    pub media: Vec<MediaConfig>,
}

/// The coordinator's settings document.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(rename = "UniverseID")]
    pub universe_id: String,
    #[serde(rename = "BrokerAddress")]
    pub broker_address: String,
    /// Milliseconds. Negative means wait for an operator keypress between
    /// steps instead of sleeping (SPEC_FULL.md §4.1, §6).
    #[serde(rename = "MinimumStepTime")]
    pub minimum_step_time_ms: i64,
    #[serde(rename = "MapWidth")]
    pub map_width: f32,
    #[serde(rename = "MapHeight")]
    pub map_height: f32,
    #[serde(rename = "UseGPU", default)]
    pub use_gpu: bool,
    #[serde(rename = "FloodMeshSize")]
    pub flood_mesh_size: f32,
    #[serde(rename = "RootPath")]
    pub root_path: String,
    #[serde(rename = "UniverseFilePath")]
    pub universe_file_path: String,
    #[serde(rename = "FloodFilePath")]
    pub flood_file_path: String,
    #[serde(rename = "Nodes", default)]
    pub nodes: Vec<NodesConfig>,
    #[serde(rename = "Potential", default)]
    pub potential: Vec<PotentialConfig>,
}

impl Settings {
    pub fn from_json_str(text: &str) -> SimResult<Settings> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> SimResult<Settings> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Grid dimensions in cells, matching the Field Mover's `W = ⌈MapWidth/mesh⌉`.
    pub fn grid_dims(&self, mesh_size: f32) -> (usize, usize) {
        let w = (self.map_width / mesh_size).ceil().max(0.0) as usize;
        let h = (self.map_height / mesh_size).ceil().max(0.0) as usize;
        (w, h)
    }
}
