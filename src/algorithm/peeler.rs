//! Incremental fixed-point removal of under-supported cells
//!
//! An occupied cell is accessible when fewer than `threshold` of its
//! 8-connected neighbors are occupied. Peeling removes accessible cells until
//! none remain. Each removal only lowers neighbor counts, so a cell that
//! becomes accessible stays accessible until it is removed itself, and the
//! terminal grid does not depend on processing order.

use crate::algorithm::counts::NeighborCounts;
use crate::algorithm::trace::{PeelTrace, Removal};
use crate::algorithm::worklist::{Candidate, Worklist};
use crate::io::configuration::{MAX_THRESHOLD, THRESHOLD};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::{Cell, OccupancyGrid};
use tracing::{debug, trace};

/// Outcome of processing one worklist entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The candidate was occupied and has been removed
    Removed(Removal),
    /// The candidate was already empty (stale or duplicate entry)
    Skipped(Cell),
}

/// Owns a grid, its live-neighbor counters and the removal worklist
#[derive(Debug)]
pub struct GridPeeler {
    grid: OccupancyGrid,
    counts: NeighborCounts,
    worklist: Worklist,
    threshold: u8,
}

impl GridPeeler {
    /// Build a peeler using the standard threshold of four neighbors
    pub fn new(grid: OccupancyGrid) -> Self {
        Self::build(grid, THRESHOLD)
    }

    /// Build a peeler with a custom threshold
    ///
    /// # Errors
    ///
    /// Returns an error if `threshold` is 0 (nothing could ever be removed and
    /// the crossing test is undefined) or greater than `MAX_THRESHOLD`
    pub fn with_threshold(grid: OccupancyGrid, threshold: u8) -> Result<Self> {
        if threshold == 0 || threshold > MAX_THRESHOLD {
            return Err(invalid_parameter(
                "threshold",
                &threshold,
                &format!("must be between 1 and {MAX_THRESHOLD}"),
            ));
        }
        Ok(Self::build(grid, threshold))
    }

    fn build(grid: OccupancyGrid, threshold: u8) -> Self {
        let counts = NeighborCounts::from_grid(&grid);

        let mut worklist = Worklist::new();
        for cell in grid.occupied_cells() {
            if counts.get(cell).is_some_and(|count| count < threshold) {
                worklist.push(cell, 0);
            }
        }

        debug!(
            width = grid.width(),
            height = grid.height(),
            occupied = grid.occupied_count(),
            seeded = worklist.len(),
            threshold,
            "peeler constructed"
        );

        Self {
            grid,
            counts,
            worklist,
            threshold,
        }
    }

    /// Count occupied cells currently below the threshold
    ///
    /// Recounts neighbors straight from occupancy on every call and touches
    /// neither the counters nor the worklist.
    pub fn count_accessible(&self) -> usize {
        let threshold = usize::from(self.threshold);
        self.grid
            .occupied_cells()
            .filter(|&cell| self.grid.live_neighbors(cell) < threshold)
            .count()
    }

    /// Process the next worklist entry
    ///
    /// Returns `None` once the worklist is exhausted. A removal decrements the
    /// counter of every occupied neighbor and queues the neighbors whose count
    /// just dropped to `threshold - 1`. Counts never increase during a run, so
    /// a neighbor already below that is known-removable and already queued.
    pub fn step(&mut self) -> Option<Step> {
        let Candidate { cell, wave } = self.worklist.take_next()?;

        if self.grid.set(cell, false) != Some(true) {
            return Some(Step::Skipped(cell));
        }

        let crossing = self.threshold - 1;
        for neighbor in self.grid.dimensions().neighbors(cell) {
            if !self.grid.is_occupied(neighbor) {
                continue;
            }
            if self.counts.decrement(neighbor) == Some(crossing) {
                self.worklist.push(neighbor, wave + 1);
            }
        }

        trace!(x = cell.x, y = cell.y, wave, "removed cell");
        Some(Step::Removed(Removal { cell, wave }))
    }

    /// Peel until no occupied cell is below the threshold
    ///
    /// Returns the number of cells removed by this call; a peeler that has
    /// already reached its fixed point returns 0.
    pub fn run_to_fixed_point(&mut self) -> usize {
        let mut removed = 0;
        while let Some(step) = self.step() {
            if matches!(step, Step::Removed(_)) {
                removed += 1;
            }
        }

        debug!(
            removed,
            remaining = self.grid.occupied_count(),
            "fixed point reached"
        );
        removed
    }

    /// Peel to the fixed point, recording every removal
    pub fn run_traced(&mut self) -> PeelTrace {
        let mut peel_trace = PeelTrace::new();
        while let Some(step) = self.step() {
            if let Step::Removed(removal) = step {
                peel_trace.record(removal);
            }
        }

        debug!(
            removed = peel_trace.removed(),
            waves = peel_trace.wave_count(),
            remaining = self.grid.occupied_count(),
            "fixed point reached"
        );
        peel_trace
    }

    /// Permute the pending worklist with a seeded shuffle
    pub fn shuffle_worklist(&mut self, seed: u64) {
        self.worklist.shuffle(seed);
    }

    /// Current grid state
    pub const fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// Consume the peeler, returning the grid
    pub fn into_grid(self) -> OccupancyGrid {
        self.grid
    }

    /// Neighbor count below which a cell is removable
    pub const fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Number of worklist entries still pending, duplicates included
    pub fn pending(&self) -> usize {
        self.worklist.len()
    }

    /// Maintained live-neighbor count of an occupied cell
    ///
    /// Returns `None` for empty or out-of-bounds cells.
    pub fn neighbor_count(&self, cell: Cell) -> Option<u8> {
        if self.grid.is_occupied(cell) {
            self.counts.get(cell)
        } else {
            None
        }
    }

    /// Occupied cells whose maintained count disagrees with a recount
    pub fn count_mismatches(&self) -> Vec<Cell> {
        self.counts.mismatches(&self.grid)
    }
}
