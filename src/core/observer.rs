use super::state::SimCtx;
use super::timeline::TimelineBuilder;

/// Debug-build consistency sweep, run once per simulation step.
#[derive(Debug)]
pub struct Observer {
    steps: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { steps: 0 }
    }

    pub fn observe(&mut self, ctx: &SimCtx, timeline: &TimelineBuilder) {
        self.steps += 1;

        for proc in &ctx.procs {
            debug_assert!(
                proc.remaining <= proc.burst,
                "proc {} remaining exceeds burst",
                proc.pid
            );
            if let Some(completion) = proc.completion {
                debug_assert_eq!(
                    proc.remaining, 0,
                    "proc {} marked complete with work remaining",
                    proc.pid
                );
                debug_assert!(
                    completion <= ctx.now,
                    "proc {} completed in the future",
                    proc.pid
                );
                debug_assert!(
                    !ctx.in_any_queue(proc.pid),
                    "completed proc {} still present in a ready queue",
                    proc.pid
                );
            }
        }

        for (&pid, &queue_id) in &ctx.proc_to_queue {
            debug_assert!(
                !ctx.procs[pid].is_complete(),
                "complete proc {pid} still tracked in queue {queue_id:?}"
            );
            if let Some(queue) = ctx.queues.get(queue_id) {
                debug_assert!(
                    queue.contains(pid),
                    "proc_to_queue claims proc {pid} in queue {queue_id:?}, but queue does not contain it"
                );
            } else {
                debug_assert!(false, "proc_to_queue references unknown queue {queue_id:?}");
            }
        }

        for pair in timeline.slices().windows(2) {
            debug_assert!(
                pair[0].2 <= pair[1].1,
                "timeline slices overlap or run backwards"
            );
        }
    }
}

impl Default for Observer {
    fn default() -> Self {
        Self::new()
    }
}
