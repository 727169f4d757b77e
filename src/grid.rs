/// A fixed-size 2D grid addressed by (row, col), stored row-major.
///
/// Dimensions are set at construction and never change. Unlike a world
/// tilemap nothing wraps: coordinates outside the grid simply have no cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    pub rows: usize,
    pub cols: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::default(); rows * cols],
        }
    }
}

impl<T: Clone> Grid<T> {
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Convert signed coordinates (e.g. from a pointer) into an in-bounds cell.
    pub fn checked_cell(&self, row: isize, col: isize) -> Option<(usize, usize)> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        self.in_bounds(row, col).then_some((row, col))
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if !self.in_bounds(row, col) {
            return None;
        }
        Some(&self.data[self.index(row, col)])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if !self.in_bounds(row, col) {
            return None;
        }
        let idx = self.index(row, col);
        Some(&mut self.data[idx])
    }

    /// Write a cell. Returns false (and writes nothing) when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> bool {
        match self.get_mut(row, col) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Row-major view of every cell.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over all cells with their coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let cols = self.cols;
        self.data.iter().enumerate().map(move |(idx, val)| (idx / cols, idx % cols, val))
    }

    /// Iterate mutably over all cells with their coordinates, row-major.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, usize, &mut T)> {
        let cols = self.cols;
        self.data.iter_mut().enumerate().map(move |(idx, val)| (idx / cols, idx % cols, val))
    }
}
