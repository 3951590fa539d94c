//! PNG export of a peeled grid, one pixel per cell

use crate::io::configuration::{EMPTY_COLOR, REMAINING_COLOR, REMOVED_COLOR};
use crate::io::error::{PeelError, Result, file_system_error, invalid_parameter};
use crate::spatial::OccupancyGrid;
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Render the difference between an initial and a peeled grid
///
/// Cells occupied in both are drawn in `REMAINING_COLOR`, cells occupied only
/// initially in `REMOVED_COLOR`, everything else transparent.
///
/// # Errors
///
/// Returns an error if the two grids have different dimensions
pub fn render_peel(initial: &OccupancyGrid, peeled: &OccupancyGrid) -> Result<RgbaImage> {
    if initial.dimensions() != peeled.dimensions() {
        return Err(invalid_parameter(
            "peeled",
            &format!("{}x{}", peeled.width(), peeled.height()),
            &format!(
                "must match initial grid size {}x{}",
                initial.width(),
                initial.height()
            ),
        ));
    }

    let mut img = RgbaImage::from_pixel(
        initial.width() as u32,
        initial.height() as u32,
        Rgba(EMPTY_COLOR),
    );

    for cell in initial.occupied_cells() {
        let color = if peeled.is_occupied(cell) {
            REMAINING_COLOR
        } else {
            REMOVED_COLOR
        };
        img.put_pixel(cell.x as u32, cell.y as u32, Rgba(color));
    }

    Ok(img)
}

/// Export the peel result as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The grids have different dimensions
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_peel_png(
    initial: &OccupancyGrid,
    peeled: &OccupancyGrid,
    output_path: &Path,
) -> Result<()> {
    let img = render_peel(initial, peeled)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    img.save(output_path)
        .map_err(|e| PeelError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
