pub mod fifo;
pub mod mlfq;
pub mod rr;
pub mod sjf;
pub mod srtf;

use crate::core::state::{Pid, SimCtx, Ticks};

pub use fifo::Fifo;
pub use mlfq::Mlfq;
pub use rr::RoundRobin;
pub use sjf::Sjf;
pub use srtf::Srtf;

/// A scheduling discipline. Policies own only their queue handles and
/// parameters; all queue storage lives in [`SimCtx`], and the shared loop in
/// [`crate::core::SimCore`] drives the hooks.
pub trait Policy {
    const NAME: &'static str;

    /// Preempts after every tick; consecutive slices for the same process are
    /// coalesced into one timeline interval.
    const UNIT_GRANULARITY: bool = false;

    /// Admit a newly arrived process into the ready set.
    fn enqueue(&mut self, ctx: &mut SimCtx, pid: Pid);

    /// Pick the next process to run, removing it from the ready set.
    fn dispatch(&mut self, ctx: &mut SimCtx) -> Option<Pid>;

    /// Maximum contiguous run granted to the dispatched process. The driver
    /// clamps it to the process's remaining time.
    fn slice(&self, ctx: &SimCtx, pid: Pid) -> Ticks;

    /// Return a preempted, unfinished process to the ready set. Called after
    /// slice-period arrivals have been admitted.
    fn requeue(&mut self, ctx: &mut SimCtx, pid: Pid);
}
