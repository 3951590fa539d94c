//! Incremental peeling of sparsely supported cells on 2D occupancy grids
//!
//! An occupied cell with fewer than four occupied 8-connected neighbors is
//! accessible. Removing accessible cells exposes others; the crate counts the
//! initially accessible cells and peels the grid to its fixed point using
//! maintained neighbor counts and a worklist instead of repeated rescans.

#![forbid(unsafe_code)]

/// Peeling algorithm: neighbor counters, worklist and fixed-point driver
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Occupancy grid and neighborhood utilities
pub mod spatial;

pub use algorithm::{GridPeeler, PeelTrace};
pub use io::error::{MalformedInput, PeelError, Result};
pub use spatial::{Cell, OccupancyGrid};
