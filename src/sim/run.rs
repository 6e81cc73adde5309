use super::error::SchedError;
use super::metrics::{self, RunResult};
use super::process::{self, ProcessSpec};
use crate::core::driver::SimCore;
use crate::core::state::SimCtx;
use crate::scheduler::Policy;
use log::info;

/// One simulation run: validated input, a fresh [`SimCtx`], and the shared
/// driver wired to a policy. Consumed by [`Sim::run`].
pub struct Sim<P: Policy> {
    core: SimCore<P>,
    specs: Vec<ProcessSpec>,
}

impl<P: Policy> Sim<P> {
    /// `make_policy` lets parameterized policies (quantum, level quanta)
    /// create their queues against the freshly built context.
    pub fn build(
        specs: &[ProcessSpec],
        make_policy: impl FnOnce(&mut SimCtx) -> P,
    ) -> Result<Self, SchedError> {
        process::validate(specs)?;

        let mut ctx = SimCtx::new();
        for spec in specs {
            ctx.create_proc(spec.arrival, spec.burst);
        }
        let policy = make_policy(&mut ctx);
        info!("{}: scheduling {} processes", P::NAME, specs.len());

        Ok(Self {
            core: SimCore::new(ctx, policy),
            specs: specs.to_vec(),
        })
    }

    pub fn run(mut self) -> RunResult {
        self.core.run_to_completion();

        let (ctx, timeline) = self.core.into_parts();
        let ids: Vec<String> = self.specs.iter().map(|spec| spec.id.clone()).collect();
        let intervals = timeline.into_intervals(&ids);
        metrics::aggregate(&self.specs, &ctx, intervals)
    }
}
