//! Frame generation and GIF export for the removal cascade

use crate::algorithm::PeelTrace;
use crate::io::configuration::{
    EMPTY_COLOR, GIF_CELL_SCALE, GIF_FINAL_FRAME_HOLD, REMAINING_COLOR, REMOVED_COLOR,
};
use crate::io::error::{PeelError, Result, file_system_error};
use crate::spatial::{Cell, Dimensions, OccupancyGrid};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellState {
    Empty,
    Remaining,
    Removing,
}

impl CellState {
    const fn color(self) -> [u8; 4] {
        match self {
            Self::Empty => EMPTY_COLOR,
            Self::Remaining => REMAINING_COLOR,
            Self::Removing => REMOVED_COLOR,
        }
    }
}

/// Wave-by-wave replay of a peel run
///
/// The first frame shows the initial grid. Each following frame highlights
/// the cells removed in one cascade wave; cells from earlier waves are
/// cleared. A final frame shows the fixed point.
pub struct CascadeCapture {
    initial: OccupancyGrid,
    waves: Vec<Vec<Cell>>,
    scale: u32,
}

impl CascadeCapture {
    /// Capture the cascade of `trace`, which must come from peeling `initial`
    pub fn new(initial: OccupancyGrid, trace: &PeelTrace) -> Self {
        Self {
            initial,
            waves: trace.waves(),
            scale: GIF_CELL_SCALE,
        }
    }

    /// Override the pixels drawn per cell side (minimum 1)
    #[must_use]
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }

    /// Number of frames the export will contain
    pub fn frame_count(&self) -> usize {
        if self.waves.is_empty() {
            0
        } else {
            self.waves.len() + 2
        }
    }

    /// Render every frame with a uniform delay, holding the last one longer
    ///
    /// # Errors
    ///
    /// Returns an error if the trace contains no removals
    pub fn generate_frames(&self, delay_ms: u32) -> Result<Vec<Frame>> {
        if self.waves.is_empty() {
            return Err(PeelError::NothingToRender {
                reason: "peeling removed no cells".to_string(),
            });
        }

        let dimensions = self.initial.dimensions();
        let mut states: Vec<CellState> = dimensions
            .cells()
            .map(|cell| {
                if self.initial.is_occupied(cell) {
                    CellState::Remaining
                } else {
                    CellState::Empty
                }
            })
            .collect();

        let mut frames = Vec::with_capacity(self.frame_count());
        frames.push(self.render_frame(&states, delay_ms));

        let mut previous: &[Cell] = &[];
        for wave in &self.waves {
            Self::mark(&mut states, dimensions, previous, CellState::Empty);
            Self::mark(&mut states, dimensions, wave, CellState::Removing);
            frames.push(self.render_frame(&states, delay_ms));
            previous = wave.as_slice();
        }

        Self::mark(&mut states, dimensions, previous, CellState::Empty);
        frames.push(self.render_frame(&states, delay_ms * GIF_FINAL_FRAME_HOLD));

        Ok(frames)
    }

    /// Export the cascade as a looping GIF
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The trace contains no removals
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, delay_ms: u32) -> Result<()> {
        let frames = self.generate_frames(delay_ms)?;

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system_error(parent, "create directory", e))?;
        }

        let file = std::fs::File::create(output_path)
            .map_err(|e| file_system_error(output_path, "create file", e))?;

        let export_error = |source| PeelError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        };

        let mut encoder = GifEncoder::new(file);
        encoder.set_repeat(Repeat::Infinite).map_err(export_error)?;
        encoder.encode_frames(frames).map_err(export_error)?;

        Ok(())
    }

    fn mark(
        states: &mut [CellState],
        dimensions: Dimensions,
        cells: &[Cell],
        state: CellState,
    ) {
        for &cell in cells {
            if let Some(slot) = dimensions.index(cell).and_then(|index| states.get_mut(index)) {
                *slot = state;
            }
        }
    }

    fn render_frame(&self, states: &[CellState], delay_ms: u32) -> Frame {
        let width = self.initial.width() as u32;
        let height = self.initial.height() as u32;
        let scale = self.scale;

        let img = RgbaImage::from_fn(width * scale, height * scale, |px, py| {
            let index = (py / scale) as usize * self.initial.width() + (px / scale) as usize;
            let state = states.get(index).copied().unwrap_or(CellState::Empty);
            Rgba(state.color())
        });

        Frame::from_parts(img, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1))
    }
}
