//! The editable terrain grid: bulk regeneration from a seed plus single-cell edits.

use tracing::debug;

use crate::classify::classify;
use crate::error::{EditorError, Result};
use crate::grid::Grid;
use crate::noise_field::NoiseSource;
use crate::seeds::MapSeed;
use crate::terrain::TerrainCategory;

/// Largest number of cells a map may have (4096 x 4096)
pub const MAX_GRID_CELLS: usize = 4096 * 4096;

/// Check that `rows x cols` is a usable grid size: both non-zero and the
/// product within [`MAX_GRID_CELLS`] without overflowing.
pub fn check_dimensions(rows: usize, cols: usize) -> Result<()> {
    match rows.checked_mul(cols) {
        Some(cells) if cells > 0 && cells <= MAX_GRID_CELLS => Ok(()),
        _ => Err(EditorError::InvalidDimensions { rows, cols }),
    }
}

/// Terrain categories for every cell of a fixed-size map.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainGrid {
    cells: Grid<TerrainCategory>,
}

impl TerrainGrid {
    /// Create an all-Water grid. See [`check_dimensions`] for the size limits.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        check_dimensions(rows, cols)?;
        Ok(Self {
            cells: Grid::new(rows, cols),
        })
    }

    pub fn rows(&self) -> usize {
        self.cells.rows
    }

    pub fn cols(&self) -> usize {
        self.cells.cols
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.cells.rows, self.cells.cols)
    }

    pub fn cells(&self) -> &Grid<TerrainCategory> {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Option<TerrainCategory> {
        self.cells.get(row, col).copied()
    }

    /// Signed lookup for coordinates that may come from outside the grid.
    pub fn checked_cell(&self, row: isize, col: isize) -> Option<(usize, usize)> {
        self.cells.checked_cell(row, col)
    }

    /// Overwrite every cell from the noise field at the seed's offsets.
    pub fn regenerate<N: NoiseSource + ?Sized>(&mut self, seed: MapSeed, noise: &N) {
        let (offset_x, offset_y) = seed.offsets();
        for (row, col, cell) in self.cells.iter_mut() {
            *cell = classify(noise.sample(row, col, offset_x, offset_y));
        }
        debug!(seed = seed.value(), offset_x, offset_y, "regenerated terrain grid");
    }

    /// Set one cell. Returns true only if the cell exists and its category changed.
    pub fn set_cell(&mut self, row: usize, col: usize, category: TerrainCategory) -> bool {
        match self.cells.get_mut(row, col) {
            Some(cell) if *cell != category => {
                *cell = category;
                true
            }
            _ => false,
        }
    }

    /// Coordinates holding the given category, row-major.
    pub fn positions_of(&self, category: TerrainCategory) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .filter(|(_, _, &t)| t == category)
            .map(|(r, c, _)| (r, c))
            .collect()
    }

    pub fn count(&self, category: TerrainCategory) -> usize {
        self.cells.iter().filter(|(_, _, &t)| t == category).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise_field::PerlinField;

    /// Returns the same raw value for every cell.
    struct Constant(f64);

    impl NoiseSource for Constant {
        fn sample(&self, _row: usize, _col: usize, _ox: f64, _oy: f64) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_new_grid_is_water() {
        let grid = TerrainGrid::new(5, 7).unwrap();
        assert_eq!(grid.dimensions(), (5, 7));
        assert_eq!(grid.count(TerrainCategory::Water), 35);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            TerrainGrid::new(0, 3),
            Err(EditorError::InvalidDimensions { rows: 0, cols: 3 })
        );
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        assert!(check_dimensions(4096, 4096).is_ok());
        assert_eq!(
            TerrainGrid::new(4097, 4096),
            Err(EditorError::InvalidDimensions { rows: 4097, cols: 4096 })
        );
        // rows * cols overflows usize
        assert_eq!(
            TerrainGrid::new(usize::MAX, 2),
            Err(EditorError::InvalidDimensions { rows: usize::MAX, cols: 2 })
        );
    }

    #[test]
    fn test_regenerate_replaces_everything() {
        let mut grid = TerrainGrid::new(6, 6).unwrap();
        grid.set_cell(2, 2, TerrainCategory::Mountain);
        grid.regenerate(MapSeed::new(1).unwrap(), &Constant(-0.15));
        assert_eq!(grid.count(TerrainCategory::Sand), 36);
    }

    #[test]
    fn test_regenerate_populates_every_cell() {
        let field = PerlinField::default();
        let mut grid = TerrainGrid::new(42, 42).unwrap();
        for seed in [0, 1, 42, 9_999, 10_000, 123_456, 999_999] {
            grid.regenerate(MapSeed::new(seed).unwrap(), &field);
            let total: usize = TerrainCategory::all().iter().map(|&t| grid.count(t)).sum();
            assert_eq!(total, 42 * 42);
        }
    }

    #[test]
    fn test_same_seed_same_grid() {
        let field = PerlinField::default();
        let seed = MapSeed::new(5150).unwrap();
        let mut a = TerrainGrid::new(20, 20).unwrap();
        let mut b = TerrainGrid::new(20, 20).unwrap();
        a.regenerate(seed, &field);
        b.regenerate(seed, &field);
        assert_eq!(a, b);
    }

    #[test]
    fn test_set_cell_signals_change_once() {
        let mut grid = TerrainGrid::new(4, 4).unwrap();
        assert!(grid.set_cell(1, 1, TerrainCategory::Forest));
        assert!(!grid.set_cell(1, 1, TerrainCategory::Forest));
        assert_eq!(grid.get(1, 1), Some(TerrainCategory::Forest));
    }

    #[test]
    fn test_set_cell_ignores_out_of_bounds() {
        let mut grid = TerrainGrid::new(4, 4).unwrap();
        let before = grid.clone();
        assert!(!grid.set_cell(4, 0, TerrainCategory::Sand));
        assert!(!grid.set_cell(0, 4, TerrainCategory::Sand));
        assert!(!grid.set_cell(usize::MAX, usize::MAX, TerrainCategory::Sand));
        assert_eq!(grid.checked_cell(-1, 0), None);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_positions_of_is_row_major() {
        let mut grid = TerrainGrid::new(3, 3).unwrap();
        grid.set_cell(2, 0, TerrainCategory::Sand);
        grid.set_cell(0, 2, TerrainCategory::Sand);
        assert_eq!(grid.positions_of(TerrainCategory::Sand), vec![(0, 2), (2, 0)]);
    }
}
