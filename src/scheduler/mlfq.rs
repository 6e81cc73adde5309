use super::Policy;
use crate::core::state::{Pid, QueueId, SimCtx, Ticks};
use rustc_hash::FxHashMap;

/// Multilevel feedback queue: one FIFO queue per level, each with its own
/// quantum. Arrivals always enter level 0; a process that exhausts its slice
/// without finishing demotes one level, bottoming out at the last level,
/// which behaves as round-robin at its quantum. Dispatch is strict priority:
/// the first non-empty level wins, at slice granularity.
pub struct Mlfq {
    levels: Vec<QueueId>,
    quanta: Vec<Ticks>,
    level_of: FxHashMap<Pid, usize>,
}

impl Mlfq {
    pub fn new(ctx: &mut SimCtx, quanta: &[Ticks]) -> Self {
        debug_assert!(!quanta.is_empty(), "level quanta validated before construction");
        debug_assert!(quanta.iter().all(|&q| q > 0));

        let levels = quanta.iter().map(|_| ctx.create_fifo_queue()).collect();
        Self {
            levels,
            quanta: quanta.to_vec(),
            level_of: FxHashMap::default(),
        }
    }
}

impl Policy for Mlfq {
    const NAME: &'static str = "MLFQ";

    fn enqueue(&mut self, ctx: &mut SimCtx, pid: Pid) {
        self.level_of.insert(pid, 0);
        ctx.queue_push_back(self.levels[0], pid);
    }

    fn dispatch(&mut self, ctx: &mut SimCtx) -> Option<Pid> {
        self.levels
            .iter()
            .find(|&&queue| !ctx.queue_is_empty(queue))
            .copied()
            .and_then(|queue| ctx.queue_pop(queue))
    }

    fn slice(&self, _ctx: &SimCtx, pid: Pid) -> Ticks {
        let level = self.level_of[&pid];
        self.quanta[level]
    }

    fn requeue(&mut self, ctx: &mut SimCtx, pid: Pid) {
        let level = self.level_of[&pid];
        let demoted = (level + 1).min(self.levels.len() - 1);
        self.level_of.insert(pid, demoted);
        ctx.queue_push_back(self.levels[demoted], pid);
    }
}
