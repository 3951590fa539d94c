use crate::spatial::Cell;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use std::collections::VecDeque;

/// Cell suspected to be removable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Grid position of the candidate
    pub cell: Cell,
    /// Cascade depth: 0 for initially accessible cells, parent wave + 1 otherwise
    pub wave: usize,
}

/// FIFO queue of removal candidates
///
/// Membership carries no meaning. A cell may be queued more than once, and a
/// queued cell may already be gone by the time it is taken; the grid's
/// occupancy decides whether a candidate is still live.
#[derive(Debug, Default)]
pub struct Worklist {
    /// Pending candidates in processing order
    pub queue: VecDeque<Candidate>,
}

impl Worklist {
    /// Create a new empty worklist
    pub const fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Append a candidate, duplicates included
    pub fn push(&mut self, cell: Cell, wave: usize) {
        self.queue.push_back(Candidate { cell, wave });
    }

    /// Remove and return the next candidate
    pub fn take_next(&mut self) -> Option<Candidate> {
        self.queue.pop_front()
    }

    /// Check if the worklist is empty
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Get the number of pending candidates
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Reorder pending candidates with a seeded permutation
    pub fn shuffle(&mut self, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        self.queue.make_contiguous().shuffle(&mut rng);
    }
}
