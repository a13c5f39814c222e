//! Per-call metrics for incremental evolution.
//!
//! [`EvolveMetrics`] captures timing and work counts for a single
//! [`Automaton::evolve()`](crate::Automaton::evolve) call, for callers
//! that want to budget `time_steps` against wall-clock time.

/// Timing and work counts collected during one `evolve()` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvolveMetrics {
    /// Wall-clock time for the whole call, in microseconds.
    pub total_us: u64,
    /// Number of rows appended.
    pub steps: usize,
    /// Number of cell updates performed (`steps * width`).
    pub cells_updated: usize,
}
