//! Deterministic single-core CPU-scheduling simulation for a fixed batch of
//! processes. Five disciplines share one driver loop; each run returns the
//! execution timeline plus per-process waiting/turnaround metrics.

pub mod core;
pub mod scheduler;
pub mod sim;

pub use crate::core::state::Ticks;
pub use crate::core::timeline::ExecutionInterval;
pub use scheduler::Policy;
pub use sim::{ProcessMetrics, ProcessSpec, RunResult, SchedError};

use scheduler::{Fifo, Mlfq, RoundRobin, Sjf, Srtf};
use sim::Sim;

/// Run the batch under first-in-first-out scheduling: arrival order, each
/// process to completion.
pub fn run_fifo(specs: &[ProcessSpec]) -> Result<RunResult, SchedError> {
    Ok(Sim::build(specs, Fifo::new)?.run())
}

/// Run the batch under non-preemptive shortest-job-first.
pub fn run_sjf(specs: &[ProcessSpec]) -> Result<RunResult, SchedError> {
    Ok(Sim::build(specs, Sjf::new)?.run())
}

/// Run the batch under preemptive shortest-remaining-time-first.
pub fn run_srtf(specs: &[ProcessSpec]) -> Result<RunResult, SchedError> {
    Ok(Sim::build(specs, Srtf::new)?.run())
}

/// Run the batch under round-robin with the given quantum (must be > 0).
pub fn run_rr(specs: &[ProcessSpec], quantum: Ticks) -> Result<RunResult, SchedError> {
    if quantum == 0 {
        return Err(SchedError::InvalidParameter(
            "quantum must be greater than zero".to_string(),
        ));
    }
    Ok(Sim::build(specs, |ctx| RoundRobin::new(ctx, quantum))?.run())
}

/// Run the batch under a multilevel feedback queue with one quantum per
/// level, highest priority first. `level_quanta` must be non-empty with every
/// entry > 0.
pub fn run_mlfq(specs: &[ProcessSpec], level_quanta: &[Ticks]) -> Result<RunResult, SchedError> {
    if level_quanta.is_empty() {
        return Err(SchedError::InvalidParameter(
            "at least one feedback level is required".to_string(),
        ));
    }
    if let Some(level) = level_quanta.iter().position(|&q| q == 0) {
        return Err(SchedError::InvalidParameter(format!(
            "level {level} quantum must be greater than zero"
        )));
    }
    Ok(Sim::build(specs, |ctx| Mlfq::new(ctx, level_quanta))?.run())
}
