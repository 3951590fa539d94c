use crate::spatial::{Cell, OccupancyGrid};
use ndarray::Array2;

/// Live-neighbor count for every cell of a grid
///
/// Stored densely as `(height, width)` so the backing buffer shares the grid's
/// row-major linear index. Only entries of occupied cells are meaningful; the
/// counter of an empty cell is left at whatever it held when the cell emptied.
#[derive(Debug, Clone)]
pub struct NeighborCounts {
    counts: Array2<u8>,
}

impl NeighborCounts {
    /// Count occupied neighbors of every occupied cell in one pass
    pub fn from_grid(grid: &OccupancyGrid) -> Self {
        let mut counts = Array2::zeros((grid.height(), grid.width()));

        for cell in grid.occupied_cells() {
            if let Some(count) = counts.get_mut([cell.y, cell.x]) {
                // At most eight neighbors, always fits
                *count = grid.live_neighbors(cell) as u8;
            }
        }

        Self { counts }
    }

    /// Stored counter for a cell, `None` when out of bounds
    pub fn get(&self, cell: Cell) -> Option<u8> {
        self.counts.get([cell.y, cell.x]).copied()
    }

    /// Decrement a cell's counter and return the new value
    ///
    /// Counters saturate at zero; a live cell never has a negative count.
    pub fn decrement(&mut self, cell: Cell) -> Option<u8> {
        let count = self.counts.get_mut([cell.y, cell.x])?;
        *count = count.saturating_sub(1);
        Some(*count)
    }

    /// Cells whose stored counter disagrees with a direct recount
    ///
    /// Empty cells are ignored. An empty result means the maintained counts
    /// are exact for `grid`.
    pub fn mismatches(&self, grid: &OccupancyGrid) -> Vec<Cell> {
        grid.occupied_cells()
            .filter(|&cell| self.get(cell).map(usize::from) != Some(grid.live_neighbors(cell)))
            .collect()
    }
}
