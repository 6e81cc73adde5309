use super::Policy;
use crate::core::state::{Pid, QueueId, SimCtx, Ticks};

/// Round-robin with a fixed quantum. A preempted process re-enters the queue
/// behind anything that arrived during its slice; the driver's
/// admit-before-requeue ordering enforces that.
pub struct RoundRobin {
    queue: QueueId,
    quantum: Ticks,
}

impl RoundRobin {
    pub fn new(ctx: &mut SimCtx, quantum: Ticks) -> Self {
        debug_assert!(quantum > 0, "quantum validated before construction");
        Self {
            queue: ctx.create_fifo_queue(),
            quantum,
        }
    }
}

impl Policy for RoundRobin {
    const NAME: &'static str = "Round Robin";

    fn enqueue(&mut self, ctx: &mut SimCtx, pid: Pid) {
        ctx.queue_push_back(self.queue, pid);
    }

    fn dispatch(&mut self, ctx: &mut SimCtx) -> Option<Pid> {
        ctx.queue_pop(self.queue)
    }

    fn slice(&self, _ctx: &SimCtx, _pid: Pid) -> Ticks {
        self.quantum
    }

    fn requeue(&mut self, ctx: &mut SimCtx, pid: Pid) {
        ctx.queue_push_back(self.queue, pid);
    }
}
