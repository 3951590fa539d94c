/// Dense live-neighbor counters
pub mod counts;
/// Grid peeler: accessible counts and fixed-point removal
pub mod peeler;
/// Removal events recorded during a run
pub mod trace;
/// Candidate queue driving the removal cascade
pub mod worklist;

pub use peeler::{GridPeeler, Step};
pub use trace::{PeelTrace, Removal};
