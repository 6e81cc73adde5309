use super::Policy;
use crate::core::state::{Pid, QueueId, SimCtx, Ticks};

/// Shortest-job-first, non-preemptive: at each decision point the ready
/// process with the smallest burst time runs to completion. Ties go to the
/// process earliest in the input.
pub struct Sjf {
    queue: QueueId,
}

impl Sjf {
    pub fn new(ctx: &mut SimCtx) -> Self {
        Self {
            queue: ctx.create_ranked_queue(),
        }
    }
}

impl Policy for Sjf {
    const NAME: &'static str = "SJF";

    fn enqueue(&mut self, ctx: &mut SimCtx, pid: Pid) {
        let burst = ctx.proc(pid).burst;
        ctx.queue_push_ranked(self.queue, pid, burst);
    }

    fn dispatch(&mut self, ctx: &mut SimCtx) -> Option<Pid> {
        ctx.queue_pop(self.queue)
    }

    fn slice(&self, ctx: &SimCtx, pid: Pid) -> Ticks {
        ctx.proc(pid).remaining
    }

    fn requeue(&mut self, _ctx: &mut SimCtx, pid: Pid) {
        unreachable!("SJF runs proc {pid} to completion");
    }
}
