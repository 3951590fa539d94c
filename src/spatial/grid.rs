//! Dense occupancy grid with bounded 8-connected neighborhoods
//!
//! Cells are addressed by `(x, y)` with `x` the column and `y` the row.
//! Occupancy is bit-packed in row-major order so a cell's linear index is
//! `y * width + x`, the same index used by every other dense per-cell layer.

use bitvec::prelude::*;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{MalformedInput, Result, invalid_parameter};

/// Offsets `(dx, dy)` of the eight neighbors around a cell
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Grid coordinate, `x` is the column and `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
}

impl Cell {
    /// Create a cell at column `x`, row `y`
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Fixed width and height of a grid
///
/// Copyable so neighbor iteration never borrows the grid it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl Dimensions {
    /// Total number of cells
    pub const fn area(self) -> usize {
        self.width * self.height
    }

    /// Check if a cell lies inside the grid
    pub const fn contains(self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Row-major linear index of an in-bounds cell
    pub const fn index(self, cell: Cell) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.y * self.width + cell.x)
        } else {
            None
        }
    }

    /// Inverse of [`Dimensions::index`]
    pub const fn cell_at(self, index: usize) -> Option<Cell> {
        if index < self.area() {
            Some(Cell::new(index % self.width, index / self.width))
        } else {
            None
        }
    }

    /// In-bounds 8-connected neighbors of `cell`
    ///
    /// Positions outside the grid are skipped rather than reported as empty,
    /// so border cells yield fewer than eight neighbors.
    pub fn neighbors(self, cell: Cell) -> impl Iterator<Item = Cell> {
        NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dx, dy)| {
            let x = cell.x.checked_add_signed(dx)?;
            let y = cell.y.checked_add_signed(dy)?;
            let neighbor = Cell::new(x, y);
            self.contains(neighbor).then_some(neighbor)
        })
    }

    /// All cells in row-major order
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }
}

/// Rectangular occupied/empty grid with immutable dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    occupied: BitVec,
    dimensions: Dimensions,
}

impl OccupancyGrid {
    /// Create a grid with every cell empty
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds `MAX_GRID_DIMENSION`
    pub fn empty(width: usize, height: usize) -> Result<Self> {
        let dimensions = validate_dimensions(width, height)?;
        Ok(Self {
            occupied: bitvec![0; dimensions.area()],
            dimensions,
        })
    }

    /// Create a grid with every cell occupied
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds `MAX_GRID_DIMENSION`
    pub fn filled(width: usize, height: usize) -> Result<Self> {
        let dimensions = validate_dimensions(width, height)?;
        Ok(Self {
            occupied: bitvec![1; dimensions.area()],
            dimensions,
        })
    }

    /// Build a grid from rows of occupancy flags
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - There are no rows or the first row is empty
    /// - Any row differs in width from the first
    /// - A dimension exceeds `MAX_GRID_DIMENSION`
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if width == 0 {
            return Err(MalformedInput::EmptyGrid.into());
        }

        for (row, cells) in rows.iter().enumerate() {
            let found = cells.as_ref().len();
            if found != width {
                return Err(MalformedInput::RaggedRow {
                    row,
                    expected: width,
                    found,
                }
                .into());
            }
        }

        let dimensions = validate_dimensions(width, rows.len())?;
        let mut occupied = BitVec::with_capacity(dimensions.area());
        for cells in rows {
            occupied.extend(cells.as_ref().iter().copied());
        }

        Ok(Self {
            occupied,
            dimensions,
        })
    }

    /// Width and height of the grid
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.dimensions.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.dimensions.height
    }

    /// Check if a cell is occupied; out-of-bounds cells never are
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.dimensions
            .index(cell)
            .and_then(|index| self.occupied.get(index).as_deref().copied())
            .unwrap_or(false)
    }

    /// Set a cell's state, returning its previous state
    ///
    /// Returns `None` without changing anything if the cell is out of bounds.
    pub fn set(&mut self, cell: Cell, occupied: bool) -> Option<bool> {
        let index = self.dimensions.index(cell)?;
        let mut bit = self.occupied.get_mut(index)?;
        let previous = *bit;
        *bit = occupied;
        Some(previous)
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.occupied.count_ones()
    }

    /// Occupied cells in row-major order
    pub fn occupied_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let dimensions = self.dimensions;
        self.occupied
            .iter_ones()
            .filter_map(move |index| dimensions.cell_at(index))
    }

    /// Count occupied neighbors of `cell` directly from occupancy
    pub fn live_neighbors(&self, cell: Cell) -> usize {
        self.dimensions
            .neighbors(cell)
            .filter(|&neighbor| self.is_occupied(neighbor))
            .count()
    }

    /// Copy the grid out as rows of occupancy flags
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.height())
            .map(|y| {
                (0..self.width())
                    .map(|x| self.is_occupied(Cell::new(x, y)))
                    .collect()
            })
            .collect()
    }
}

fn validate_dimensions(width: usize, height: usize) -> Result<Dimensions> {
    if width == 0 || height == 0 {
        return Err(MalformedInput::EmptyGrid.into());
    }
    if width > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            "width",
            &width,
            &format!("must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    if height > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            "height",
            &height,
            &format!("must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(Dimensions { width, height })
}
