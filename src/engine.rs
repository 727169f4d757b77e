//! Map editing session
//!
//! [`MapEngine`] owns the terrain grid, the marker set and the selected paint
//! terrain, and is the only way to change them. A session starts Unseeded (all
//! Water, no markers) and becomes Seeded after the first generation.
//!
//! Invariant: every marker sits on a cell that still holds the marker terrain.
//! Generation rebuilds the marker set; painting drops the marker under the
//! brush whenever the cell changes.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::config::EditorConfig;
use crate::error::{EditorError, Result};
use crate::markers::{place_markers, MarkerSet};
use crate::noise_field::{NoiseSource, PerlinField};
use crate::seeds::{MapSeed, SeedSource};
use crate::snapshot::{MapSnapshot, MapSummary};
use crate::terrain::TerrainCategory;
use crate::terrain_grid::TerrainGrid;

/// Whether a map has been generated yet
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Unseeded,
    Seeded(MapSeed),
}

/// Result of a paint request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintOutcome {
    /// Coordinate was outside the grid; nothing happened
    OutOfBounds,
    /// Cell already held the selected terrain
    Unchanged,
    Painted { marker_removed: bool },
}

impl PaintOutcome {
    /// True when the cell changed and needs redrawing.
    pub fn changed(&self) -> bool {
        matches!(self, PaintOutcome::Painted { .. })
    }
}

pub struct MapEngine<N: NoiseSource = PerlinField, S: SeedSource = ChaCha8Rng> {
    config: EditorConfig,
    noise: N,
    seeds: S,
    grid: TerrainGrid,
    markers: MarkerSet,
    selected: TerrainCategory,
    phase: Phase,
}

impl MapEngine {
    /// Start a session with Perlin terrain and entropy-seeded map seeds.
    pub fn new(config: EditorConfig) -> Result<Self> {
        let seeds = ChaCha8Rng::seed_from_u64(rand::random());
        Self::with_seed_source(config, seeds)
    }
}

impl<S: SeedSource> MapEngine<PerlinField, S> {
    pub fn with_seed_source(config: EditorConfig, seeds: S) -> Result<Self> {
        let noise = PerlinField::new(config.noise.clone());
        Self::with_parts(config, noise, seeds)
    }
}

impl<N: NoiseSource, S: SeedSource> MapEngine<N, S> {
    pub fn with_parts(config: EditorConfig, noise: N, seeds: S) -> Result<Self> {
        config.validate()?;
        let grid = TerrainGrid::new(config.rows, config.cols)?;
        Ok(Self {
            selected: config.default_terrain,
            config,
            noise,
            seeds,
            grid,
            markers: MarkerSet::new(),
            phase: Phase::Unseeded,
        })
    }

    pub fn select_terrain(&mut self, terrain: TerrainCategory) {
        self.selected = terrain;
    }

    /// Generate a fresh map from a newly drawn seed. Returns that seed.
    pub fn generate(&mut self) -> MapSeed {
        let seed = self.seeds.next_seed();
        self.generate_with_seed(seed);
        seed
    }

    /// Regenerate terrain for `seed` and place a new set of markers.
    pub fn generate_with_seed(&mut self, seed: MapSeed) {
        self.phase = Phase::Seeded(seed);
        self.grid.regenerate(seed, &self.noise);

        let mut rng = self.config.marker_seeding.rng_for(seed);
        self.markers = place_markers(&self.grid, self.config.marker_terrain, self.config.marker_count, &mut rng);

        debug!(
            seed = seed.value(),
            markers = self.markers.len(),
            seeding = ?self.config.marker_seeding,
            "generated map"
        );
    }

    /// Paint the selected terrain onto a cell.
    ///
    /// Out-of-bounds coordinates are ignored. A marker on the cell is
    /// removed whenever the cell's terrain actually changes.
    pub fn paint_cell(&mut self, row: isize, col: isize) -> PaintOutcome {
        let Some((r, c)) = self.grid.checked_cell(row, col) else {
            return PaintOutcome::OutOfBounds;
        };
        if !self.grid.set_cell(r, c, self.selected) {
            return PaintOutcome::Unchanged;
        }
        let marker_removed = self.markers.remove(r, c);
        trace!(row = r, col = c, terrain = self.selected.name(), marker_removed, "painted cell");
        PaintOutcome::Painted { marker_removed }
    }

    /// Paint the cell under a point on the painting surface (pixels).
    pub fn paint_at_point(&mut self, x: i32, y: i32) -> PaintOutcome {
        let (row, col) = self.cell_at_point(x, y);
        self.paint_cell(row, col)
    }

    /// Paint along a drag. Returns how many cells changed.
    pub fn paint_stroke(&mut self, points: &[(i32, i32)]) -> usize {
        points
            .iter()
            .filter(|&&(x, y)| self.paint_at_point(x, y).changed())
            .count()
    }

    /// Surface pixel -> (row, col). Floors, so points left of or above the
    /// surface map to negative cells, which painting then ignores.
    pub fn cell_at_point(&self, x: i32, y: i32) -> (isize, isize) {
        let size = self.config.cell_size as i64;
        let col = (x as i64).div_euclid(size);
        let row = (y as i64).div_euclid(size);
        (row as isize, col as isize)
    }

    /// The seed to put on the clipboard.
    pub fn seed_for_export(&self) -> Result<MapSeed> {
        self.current_seed().ok_or(EditorError::SeedUnavailable)
    }

    /// Text for the seed readout next to the map.
    pub fn seed_label(&self) -> String {
        match self.phase {
            Phase::Seeded(seed) => format!("Seed: {}", seed),
            Phase::Unseeded => "Seed: none".to_string(),
        }
    }

    pub fn current_seed(&self) -> Option<MapSeed> {
        match self.phase {
            Phase::Seeded(seed) => Some(seed),
            Phase::Unseeded => None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected_terrain(&self) -> TerrainCategory {
        self.selected
    }

    pub fn grid(&self) -> &TerrainGrid {
        &self.grid
    }

    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub fn terrain_at(&self, row: usize, col: usize) -> Option<TerrainCategory> {
        self.grid.get(row, col)
    }

    pub fn has_marker(&self, row: usize, col: usize) -> bool {
        self.markers.contains(row, col)
    }

    pub fn summary(&self) -> MapSummary {
        MapSummary::compute(self.current_seed(), &self.grid, self.markers.len())
    }

    pub fn snapshot(&self) -> MapSnapshot {
        MapSnapshot::capture(self.current_seed(), &self.grid, self.markers.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::MarkerSeeding;
    use crate::seeds::FixedSeed;

    /// Raw sample chosen per cell by a closure
    struct FnNoise<F: Fn(usize, usize) -> f64>(F);

    impl<F: Fn(usize, usize) -> f64> NoiseSource for FnNoise<F> {
        fn sample(&self, row: usize, col: usize, _ox: f64, _oy: f64) -> f64 {
            (self.0)(row, col)
        }
    }

    fn small_config(rows: usize, cols: usize) -> EditorConfig {
        EditorConfig {
            rows,
            cols,
            marker_seeding: MarkerSeeding::FromMapSeed,
            ..EditorConfig::default()
        }
    }

    /// Left half sand, right half grass
    fn half_sand_engine() -> MapEngine<impl NoiseSource, FixedSeed> {
        let noise = FnNoise(|_r: usize, c: usize| if c < 4 { -0.15 } else { 0.0 });
        MapEngine::with_parts(small_config(8, 8), noise, FixedSeed(MapSeed::new(11).unwrap())).unwrap()
    }

    #[test]
    fn test_starts_unseeded() {
        let engine = MapEngine::new(EditorConfig::default()).unwrap();
        assert_eq!(engine.phase(), Phase::Unseeded);
        assert_eq!(engine.selected_terrain(), TerrainCategory::Grass);
        assert!(engine.markers().is_empty());
        assert_eq!(engine.grid().count(TerrainCategory::Water), 42 * 42);
        assert_eq!(engine.seed_for_export(), Err(EditorError::SeedUnavailable));
        assert_eq!(engine.seed_label(), "Seed: none");
    }

    #[test]
    fn test_generate_enters_seeded() {
        let mut engine = half_sand_engine();
        let seed = engine.generate();
        assert_eq!(seed.value(), 11);
        assert_eq!(engine.phase(), Phase::Seeded(seed));
        assert_eq!(engine.seed_for_export(), Ok(seed));
        assert_eq!(engine.seed_label(), "Seed: 11");
        assert_eq!(engine.markers().len(), 3);
        for (r, c) in engine.markers().iter() {
            assert_eq!(engine.terrain_at(r, c), Some(TerrainCategory::Sand));
        }
    }

    #[test]
    fn test_paint_over_marker_removes_it() {
        let mut engine = half_sand_engine();
        engine.generate();
        let (r, c) = engine.markers().as_slice()[0];

        engine.select_terrain(TerrainCategory::Forest);
        let outcome = engine.paint_cell(r as isize, c as isize);
        assert_eq!(outcome, PaintOutcome::Painted { marker_removed: true });
        assert!(!engine.has_marker(r, c));
        assert_eq!(engine.markers().len(), 2);
    }

    #[test]
    fn test_paint_unmarked_cell_keeps_markers() {
        let mut engine = half_sand_engine();
        engine.generate();
        let before = engine.markers().clone();

        // Right half is grass, never marked
        engine.select_terrain(TerrainCategory::Mountain);
        assert_eq!(engine.paint_cell(0, 7), PaintOutcome::Painted { marker_removed: false });
        assert_eq!(engine.markers(), &before);
    }

    #[test]
    fn test_paint_same_terrain_on_marker_keeps_it() {
        let mut engine = half_sand_engine();
        engine.generate();
        let (r, c) = engine.markers().as_slice()[0];

        engine.select_terrain(TerrainCategory::Sand);
        assert_eq!(engine.paint_cell(r as isize, c as isize), PaintOutcome::Unchanged);
        assert!(engine.has_marker(r, c));
    }

    #[test]
    fn test_paint_is_idempotent() {
        let mut engine = half_sand_engine();
        engine.generate();
        engine.select_terrain(TerrainCategory::Water);

        assert!(engine.paint_cell(5, 5).changed());
        let after_first = engine.grid().clone();
        assert_eq!(engine.paint_cell(5, 5), PaintOutcome::Unchanged);
        assert_eq!(engine.grid(), &after_first);
    }

    #[test]
    fn test_paint_grid_edges() {
        let mut engine = half_sand_engine();
        engine.generate();
        engine.select_terrain(TerrainCategory::Water);
        let before = engine.grid().clone();

        assert_eq!(engine.paint_cell(8, 7), PaintOutcome::OutOfBounds);
        assert_eq!(engine.paint_cell(7, 8), PaintOutcome::OutOfBounds);
        assert_eq!(engine.paint_cell(-1, 0), PaintOutcome::OutOfBounds);
        assert_eq!(engine.grid(), &before);

        assert_eq!(engine.paint_cell(7, 7), PaintOutcome::Painted { marker_removed: false });
        assert_eq!(engine.terrain_at(7, 7), Some(TerrainCategory::Water));
        assert!(engine.paint_cell(0, 0).changed());
    }

    #[test]
    fn test_point_to_cell_floors() {
        let engine = MapEngine::new(EditorConfig::default()).unwrap();
        assert_eq!(engine.cell_at_point(0, 0), (0, 0));
        assert_eq!(engine.cell_at_point(14, 29), (1, 0));
        assert_eq!(engine.cell_at_point(15, 30), (2, 1));
        assert_eq!(engine.cell_at_point(-1, -1), (-1, -1));
    }

    #[test]
    fn test_stroke_counts_changed_cells() {
        let mut engine = half_sand_engine();
        engine.generate();
        engine.select_terrain(TerrainCategory::Forest);
        // Two distinct cells, one repeat, one off-surface
        let changed = engine.paint_stroke(&[(0, 0), (5, 5), (16, 0), (-20, 0)]);
        assert_eq!(changed, 2);
        assert_eq!(engine.terrain_at(0, 1), Some(TerrainCategory::Forest));
    }

    #[test]
    fn test_regeneration_replaces_markers_and_edits() {
        let mut engine = half_sand_engine();
        engine.generate();
        engine.select_terrain(TerrainCategory::Mountain);
        for c in 0..4 {
            engine.paint_cell(0, c);
        }
        engine.generate();
        assert_eq!(engine.terrain_at(0, 0), Some(TerrainCategory::Sand));
        assert_eq!(engine.markers().len(), 3);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EditorConfig { rows: 0, ..EditorConfig::default() };
        assert!(matches!(
            MapEngine::new(config),
            Err(EditorError::InvalidDimensions { rows: 0, cols: 42 })
        ));
    }
}
