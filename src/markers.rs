//! Marker ("dungeon door") placement
//!
//! Markers sit on cells of a single host terrain (Sand by default). Placement
//! collects every host cell, shuffles them and keeps the first few. The RNG is
//! always passed in; [`MarkerSeeding`] decides where it comes from.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::seeds::MapSeed;
use crate::terrain::TerrainCategory;
use crate::terrain_grid::TerrainGrid;

/// ChaCha8 stream used when markers follow the map seed
pub const MARKER_STREAM: u64 = 1;

/// Where marker placement randomness comes from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerSeeding {
    /// Fresh entropy per generation: same map seed, possibly different doors
    #[default]
    Entropy,
    /// Derived from the map seed: same map seed, same doors
    FromMapSeed,
}

impl MarkerSeeding {
    /// Build the RNG to hand to [`place_markers`] for a generation with `seed`.
    pub fn rng_for(&self, seed: MapSeed) -> ChaCha8Rng {
        match self {
            MarkerSeeding::Entropy => ChaCha8Rng::seed_from_u64(rand::random()),
            MarkerSeeding::FromMapSeed => seed.rng_for_stream(MARKER_STREAM),
        }
    }
}

/// Marked coordinates in placement order. No duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MarkerSet {
    positions: Vec<(usize, usize)>,
}

impl MarkerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.positions.contains(&(row, col))
    }

    /// Remove a marker. Returns true if one was there.
    pub fn remove(&mut self, row: usize, col: usize) -> bool {
        match self.positions.iter().position(|&p| p == (row, col)) {
            Some(idx) => {
                self.positions.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.positions.iter().copied()
    }

    pub fn as_slice(&self) -> &[(usize, usize)] {
        &self.positions
    }
}

/// Pick up to `desired` distinct cells of `host` terrain, uniformly at random.
///
/// No host cells (or `desired == 0`) gives an empty set. Asking for more than
/// exist returns every host cell.
pub fn place_markers<R: Rng + ?Sized>(
    grid: &TerrainGrid,
    host: TerrainCategory,
    desired: usize,
    rng: &mut R,
) -> MarkerSet {
    let mut candidates = grid.positions_of(host);
    if candidates.is_empty() {
        debug!(host = host.name(), "no marker candidates");
        return MarkerSet::new();
    }

    candidates.shuffle(rng);
    candidates.truncate(desired.min(candidates.len()));

    debug!(host = host.name(), placed = candidates.len(), "placed markers");
    MarkerSet { positions: candidates }
}
