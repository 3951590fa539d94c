//! Algorithm constants and runtime configuration defaults

// Peeling rule
/// Live-neighbor count below which an occupied cell is accessible
pub const THRESHOLD: u8 = 4;
/// Largest meaningful threshold (every occupied cell has at most eight neighbors)
pub const MAX_THRESHOLD: u8 = 9;

// Text grid symbols
/// Marks an occupied cell (a paper roll)
pub const OCCUPIED_SYMBOL: char = '@';
/// Marks an empty cell
pub const EMPTY_SYMBOL: char = '.';
/// Extension of grid files picked up from a target directory
pub const INPUT_EXTENSION: &str = "txt";

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Logging
/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// Output settings
/// Suffix added to rendered PNG filenames
pub const RENDER_SUFFIX: &str = "_peeled";
/// Suffix added to cascade GIF filenames
pub const CASCADE_SUFFIX: &str = "_cascade";
/// Color of cells that survive peeling
pub const REMAINING_COLOR: [u8; 4] = [46, 52, 64, 255];
/// Color of cells removed by peeling
pub const REMOVED_COLOR: [u8; 4] = [235, 203, 139, 255];
/// Color of cells that were never occupied
pub const EMPTY_COLOR: [u8; 4] = [0, 0, 0, 0];
/// Pixels per cell side in cascade GIF frames
pub const GIF_CELL_SCALE: u32 = 4;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 80;
/// Multiplier applied to the delay of the final GIF frame
pub const GIF_FINAL_FRAME_HOLD: u32 = 25;
