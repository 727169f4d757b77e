//! Read-only views of an editing session for external consumers.
//!
//! A snapshot carries everything needed to reproduce what the user sees:
//! seed, dimensions, row-major terrain codes and the marker list. Markers are
//! stored explicitly since they are not always reproducible from the seed.

use serde::Serialize;

use crate::error::Result;
use crate::seeds::MapSeed;
use crate::terrain::TerrainCategory;
use crate::terrain_grid::TerrainGrid;

/// Serializable state of the map at one moment.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapSnapshot {
    pub seed: Option<MapSeed>,
    pub rows: usize,
    pub cols: usize,
    /// Terrain codes, row-major (see [`TerrainCategory::code`])
    pub cells: Vec<u8>,
    pub markers: Vec<(usize, usize)>,
}

impl MapSnapshot {
    pub fn capture(seed: Option<MapSeed>, grid: &TerrainGrid, markers: &[(usize, usize)]) -> Self {
        Self {
            seed,
            rows: grid.rows(),
            cols: grid.cols(),
            cells: grid.cells().as_slice().iter().map(|t| t.code()).collect(),
            markers: markers.to_vec(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Cell counts per terrain plus marker count
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MapSummary {
    pub seed: Option<MapSeed>,
    pub counts: Vec<(TerrainCategory, usize)>,
    pub markers: usize,
}

impl MapSummary {
    pub fn compute(seed: Option<MapSeed>, grid: &TerrainGrid, markers: usize) -> Self {
        Self {
            seed,
            counts: TerrainCategory::all().iter().map(|&t| (t, grid.count(t))).collect(),
            markers,
        }
    }

    pub fn count(&self, terrain: TerrainCategory) -> usize {
        self.counts
            .iter()
            .find(|(t, _)| *t == terrain)
            .map(|&(_, n)| n)
            .unwrap_or(0)
    }

    pub fn total_cells(&self) -> usize {
        self.counts.iter().map(|&(_, n)| n).sum()
    }
}

impl std::fmt::Display for MapSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let total = self.total_cells().max(1);
        for &(terrain, n) in &self.counts {
            writeln!(f, "  {:<9} {:>5} ({:.1}%)", terrain.name(), n, 100.0 * n as f64 / total as f64)?;
        }
        write!(f, "  Markers   {:>5}", self.markers)
    }
}
