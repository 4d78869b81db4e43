//! Per-step statistics for the simulation engine.
//!
//! [`StepMetrics`] captures timing and population data for a single
//! generation advance, enabling telemetry in demo loops and benchmarks.

/// Statistics collected during a single [`step()`](crate::Engine::step).
///
/// The engine populates these fields after each step; consumers read
/// them from the most recent generation via
/// [`last_metrics()`](crate::Engine::last_metrics).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the whole step, in microseconds.
    pub total_us: u64,
    /// Cells that went from dead to live this step.
    pub births: u64,
    /// Cells that went from live to dead this step.
    pub deaths: u64,
    /// Cells that stayed live this step.
    pub survivors: u64,
    /// Live cells after the step, `births + survivors`.
    pub population: usize,
}
