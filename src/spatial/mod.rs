//! Spatial data structures for occupancy grids
//!
//! This module contains the grid representation shared by the peeling core
//! and the I/O layer:
//! - Cell coordinates and grid dimensions
//! - Bounded 8-connected neighbor iteration
//! - Bit-packed occupancy storage

/// Occupancy grid, coordinates and neighborhoods
pub mod grid;

pub use grid::{Cell, Dimensions, OccupancyGrid};
