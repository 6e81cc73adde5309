use super::Policy;
use crate::core::state::{Pid, QueueId, SimCtx, Ticks};

/// First-in-first-out: processes run to completion in arrival order.
pub struct Fifo {
    queue: QueueId,
}

impl Fifo {
    pub fn new(ctx: &mut SimCtx) -> Self {
        Self {
            queue: ctx.create_fifo_queue(),
        }
    }
}

impl Policy for Fifo {
    const NAME: &'static str = "FIFO";

    fn enqueue(&mut self, ctx: &mut SimCtx, pid: Pid) {
        ctx.queue_push_back(self.queue, pid);
    }

    fn dispatch(&mut self, ctx: &mut SimCtx) -> Option<Pid> {
        ctx.queue_pop(self.queue)
    }

    fn slice(&self, ctx: &SimCtx, pid: Pid) -> Ticks {
        ctx.proc(pid).remaining
    }

    fn requeue(&mut self, _ctx: &mut SimCtx, pid: Pid) {
        unreachable!("FIFO runs proc {pid} to completion");
    }
}
