use super::Policy;
use crate::core::state::{Pid, QueueId, SimCtx, Ticks};

/// Shortest-remaining-time-first: fully preemptive SJF. The ready set is
/// re-ranked after every tick, so a shorter arrival preempts the running
/// process at the next tick boundary.
pub struct Srtf {
    queue: QueueId,
}

impl Srtf {
    pub fn new(ctx: &mut SimCtx) -> Self {
        Self {
            queue: ctx.create_ranked_queue(),
        }
    }
}

impl Policy for Srtf {
    const NAME: &'static str = "SRTF";
    const UNIT_GRANULARITY: bool = true;

    fn enqueue(&mut self, ctx: &mut SimCtx, pid: Pid) {
        let remaining = ctx.proc(pid).remaining;
        ctx.queue_push_ranked(self.queue, pid, remaining);
    }

    fn dispatch(&mut self, ctx: &mut SimCtx) -> Option<Pid> {
        ctx.queue_pop(self.queue)
    }

    fn slice(&self, _ctx: &SimCtx, _pid: Pid) -> Ticks {
        1
    }

    fn requeue(&mut self, ctx: &mut SimCtx, pid: Pid) {
        let remaining = ctx.proc(pid).remaining;
        ctx.queue_push_ranked(self.queue, pid, remaining);
    }
}
