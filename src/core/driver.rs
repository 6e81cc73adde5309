use super::observer::Observer;
use super::state::{Pid, SimCtx};
use super::timeline::TimelineBuilder;
use crate::scheduler::Policy;
use log::{debug, trace};

/// The simulation loop shared by every scheduling discipline: admit arrivals,
/// dispatch, run the granted slice, then admit again before the preempted
/// process re-enters its queue. That last ordering is what gives arrivals
/// during a slice queue priority over the process that was just preempted.
pub struct SimCore<P: Policy> {
    pub ctx: SimCtx,
    pub policy: P,
    timeline: TimelineBuilder,
    observer: Observer,
    // Pids sorted by (arrival, input index); `cursor` marks the first
    // not-yet-admitted process.
    admit_order: Vec<Pid>,
    cursor: usize,
}

impl<P: Policy> SimCore<P> {
    pub fn new(ctx: SimCtx, policy: P) -> Self {
        let mut admit_order: Vec<Pid> = (0..ctx.procs.len()).collect();
        admit_order.sort_by_key(|&pid| (ctx.proc(pid).arrival, pid));

        Self {
            ctx,
            policy,
            timeline: TimelineBuilder::new(),
            observer: Observer::new(),
            admit_order,
            cursor: 0,
        }
    }

    pub fn run_to_completion(&mut self) {
        while !self.ctx.all_complete() {
            self.admit_arrivals();

            let Some(pid) = self.policy.dispatch(&mut self.ctx) else {
                debug_assert!(
                    self.cursor < self.admit_order.len(),
                    "no process ready and no arrivals left, but work remains"
                );
                trace!("t={}: idle", self.ctx.now);
                self.ctx.advance_time(1);
                continue;
            };

            let slice = self.policy.slice(&self.ctx, pid);
            debug_assert!(slice > 0, "{} granted a zero-length slice", P::NAME);
            let run = slice.min(self.ctx.proc(pid).remaining);

            let start = self.ctx.now;
            self.ctx.proc_mut(pid).remaining -= run;
            self.ctx.advance_time(run);
            let end = self.ctx.now;

            if P::UNIT_GRANULARITY {
                self.timeline.extend(pid, start, end);
            } else {
                self.timeline.record(pid, start, end);
            }
            trace!(
                "t={start}: proc {pid} ran {run} ticks, {} remaining",
                self.ctx.proc(pid).remaining
            );

            // Anything that arrived while the slice was running goes into the
            // ready set ahead of the preempted process.
            self.admit_arrivals();

            if self.ctx.proc(pid).is_complete() {
                self.ctx.mark_completed(pid);
                debug!("t={end}: proc {pid} completed");
            } else {
                self.policy.requeue(&mut self.ctx, pid);
            }

            self.observer.observe(&self.ctx, &self.timeline);
        }
    }

    fn admit_arrivals(&mut self) {
        while self.cursor < self.admit_order.len() {
            let pid = self.admit_order[self.cursor];
            if self.ctx.proc(pid).arrival > self.ctx.now {
                break;
            }
            trace!("t={}: proc {pid} admitted", self.ctx.now);
            self.policy.enqueue(&mut self.ctx, pid);
            self.cursor += 1;
        }
    }

    pub fn into_parts(self) -> (SimCtx, TimelineBuilder) {
        (self.ctx, self.timeline)
    }
}
