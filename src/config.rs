//! Configuration for the map editor engine.

use serde::{Deserialize, Serialize};

use crate::error::{EditorError, Result};
use crate::markers::MarkerSeeding;
use crate::noise_field::NoiseParams;
use crate::terrain::TerrainCategory;
use crate::terrain_grid::check_dimensions;

/// Configuration parameters for an editing session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Grid rows (default: 42).
    pub rows: usize,

    /// Grid columns (default: 42).
    pub cols: usize,

    /// Side of one cell on the painting surface, in pixels.
    pub cell_size: u32,

    /// Noise sampling parameters.
    pub noise: NoiseParams,

    /// Markers placed per generation.
    pub marker_count: usize,

    /// Terrain a marker must sit on.
    pub marker_terrain: TerrainCategory,

    /// Source of marker placement randomness.
    pub marker_seeding: MarkerSeeding,

    /// Terrain selected for painting when the session starts.
    pub default_terrain: TerrainCategory,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            rows: 42,
            cols: 42,
            cell_size: 15,
            noise: NoiseParams::default(),
            marker_count: 3,
            marker_terrain: TerrainCategory::Sand,
            marker_seeding: MarkerSeeding::Entropy,
            default_terrain: TerrainCategory::Grass,
        }
    }
}

impl EditorConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: EditorConfig =
            serde_json::from_str(text).map_err(|e| EditorError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.rows, self.cols)?;
        if self.cell_size == 0 {
            return Err(EditorError::Config("cell_size must be at least 1".into()));
        }
        self.noise.validate()
    }
}
