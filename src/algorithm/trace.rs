use crate::spatial::Cell;

/// A single cell removal observed during peeling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removal {
    /// Position of the removed cell
    pub cell: Cell,
    /// Cascade depth of the candidate that removed it
    pub wave: usize,
}

/// Ordered record of every removal in a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeelTrace {
    removals: Vec<Removal>,
}

impl PeelTrace {
    /// Create an empty trace
    pub const fn new() -> Self {
        Self {
            removals: Vec::new(),
        }
    }

    /// Append a removal
    pub fn record(&mut self, removal: Removal) {
        self.removals.push(removal);
    }

    /// Total number of removed cells
    pub fn removed(&self) -> usize {
        self.removals.len()
    }

    /// Removals in the order they happened
    pub fn removals(&self) -> &[Removal] {
        &self.removals
    }

    /// Number of cascade waves, 0 when nothing was removed
    pub fn wave_count(&self) -> usize {
        self.removals
            .iter()
            .map(|removal| removal.wave + 1)
            .max()
            .unwrap_or(0)
    }

    /// Removed cells grouped by wave, wave 0 first
    pub fn waves(&self) -> Vec<Vec<Cell>> {
        let mut waves = vec![Vec::new(); self.wave_count()];
        for removal in &self.removals {
            if let Some(wave) = waves.get_mut(removal.wave) {
                wave.push(removal.cell);
            }
        }
        waves
    }
}
