use std::fmt;

use super::{CellState, GridError};

/// Relative offsets of the 8 neighbors, row-major, excluding the cell itself
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Grid is a fixed-size toroidal board of cells.
/// Any integer coordinate is valid: rows and columns wrap around the edges.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

/// True mathematical modulo, never negative
#[inline]
const fn wrap(x: i64, n: usize) -> usize {
    x.rem_euclid(n as i64) as usize
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: i64, cols: i64) -> Result<Self, GridError> {
        if rows <= 0 || cols <= 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        let too_large = GridError::TooLarge { rows, cols };
        let (rows, cols) = (
            usize::try_from(rows).map_err(|_| too_large)?,
            usize::try_from(cols).map_err(|_| too_large)?,
        );
        // One byte per cell, and a Vec may not exceed isize::MAX bytes
        let len = rows
            .checked_mul(cols)
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or(too_large)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![CellState::Dead; len],
        })
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert a (possibly out of range) coordinate to a buffer index
    #[inline]
    const fn index(&self, row: i64, col: i64) -> usize {
        wrap(row, self.rows) * self.cols + wrap(col, self.cols)
    }

    /// Get cell at position, wrapping around the edges
    #[inline]
    pub fn get(&self, row: i64, col: i64) -> CellState {
        self.cells[self.index(row, col)]
    }

    /// Set cell at position, wrapping around the edges
    #[inline]
    pub fn set(&mut self, row: i64, col: i64, value: CellState) {
        let idx = self.index(row, col);
        self.cells[idx] = value;
    }

    /// Count alive cells among the 8 wrapped neighbors of (row, col)
    pub fn count_alive_neighbors(&self, row: i64, col: i64) -> u8 {
        // Wrap before offsetting so extreme coordinates cannot overflow
        let (row, col) = (wrap(row, self.rows) as i64, wrap(col, self.cols) as i64);
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dr, dc)| self.get(row + dr, col + dc).is_alive())
            .count() as u8
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    /// Swap backing storage with another grid of the same size.
    /// No cell is copied; only the buffers change owner.
    pub fn exchange(&mut self, other: &mut Grid) -> Result<(), GridError> {
        if self.dimensions() != other.dimensions() {
            return Err(GridError::DimensionMismatch {
                expected: self.dimensions(),
                found: other.dimensions(),
            });
        }
        std::mem::swap(&mut self.cells, &mut other.cells);
        Ok(())
    }

    /// Count total alive cells
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }

    /// Positions of alive cells, row-major
    pub fn alive_cells(&self) -> Vec<(usize, usize)> {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    /// Raw row-major buffer, for writers that fill whole rows at once
    pub(crate) fn cells_mut(&mut self) -> &mut [CellState] {
        &mut self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line: String = row.iter().map(|cell| cell.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
