//! Text grid parsing and formatting
//!
//! Grids are written one row per line with `@` for an occupied cell and `.`
//! for an empty one. Both `\n` and `\r\n` line endings are accepted and
//! trailing blank lines are ignored.

use crate::io::configuration::{EMPTY_SYMBOL, OCCUPIED_SYMBOL};
use crate::io::error::{MalformedInput, Result, file_system_error};
use crate::spatial::{Cell, OccupancyGrid};
use std::path::Path;

/// Parse a text grid
///
/// # Errors
///
/// Returns `MalformedInput` if:
/// - The text holds no rows or the first row is empty
/// - Rows differ in width
/// - A character other than the occupied or empty symbol appears
pub fn parse_grid(text: &str) -> Result<OccupancyGrid> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let mut rows = Vec::with_capacity(lines.len());
    for (row, line) in lines.iter().enumerate() {
        let cells = line
            .chars()
            .enumerate()
            .map(|(column, symbol)| match symbol {
                OCCUPIED_SYMBOL => Ok(true),
                EMPTY_SYMBOL => Ok(false),
                _ => Err(MalformedInput::UnrecognizedSymbol {
                    row,
                    column,
                    symbol,
                }),
            })
            .collect::<std::result::Result<Vec<bool>, _>>()?;
        rows.push(cells);
    }

    OccupancyGrid::from_rows(&rows)
}

/// Read and parse a grid file
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents are malformed
pub fn load_grid(path: &Path) -> Result<OccupancyGrid> {
    let text =
        std::fs::read_to_string(path).map_err(|e| file_system_error(path, "read grid", e))?;
    parse_grid(&text)
}

/// Format a grid back into its text form, one newline-terminated line per row
pub fn format_grid(grid: &OccupancyGrid) -> String {
    let mut text = String::with_capacity((grid.width() + 1) * grid.height());
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            text.push(if grid.is_occupied(Cell::new(x, y)) {
                OCCUPIED_SYMBOL
            } else {
                EMPTY_SYMBOL
            });
        }
        text.push('\n');
    }
    text
}
