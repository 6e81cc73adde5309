use crate::core::state::{Pid, Ticks};
use serde::{Deserialize, Serialize};

/// One contiguous stretch of CPU time granted to a process. `end` is
/// exclusive; intervals in a timeline are sorted by `start` and never overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    pub process_id: String,
    pub start: Ticks,
    pub end: Ticks,
}

/// Collects execution slices as the simulation runs. Slices are appended in
/// time order; `extend` additionally coalesces a slice that continues the
/// previous one for the same process (unit-granularity preemptive policies
/// would otherwise emit one sliver per tick).
#[derive(Debug, Default)]
pub struct TimelineBuilder {
    slices: Vec<(Pid, Ticks, Ticks)>,
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, pid: Pid, start: Ticks, end: Ticks) {
        self.check_append(pid, start, end);
        self.slices.push((pid, start, end));
    }

    pub fn extend(&mut self, pid: Pid, start: Ticks, end: Ticks) {
        self.check_append(pid, start, end);
        if let Some(last) = self.slices.last_mut() {
            if last.0 == pid && last.2 == start {
                last.2 = end;
                return;
            }
        }
        self.slices.push((pid, start, end));
    }

    fn check_append(&self, pid: Pid, start: Ticks, end: Ticks) {
        debug_assert!(end > start, "empty slice for proc {pid}");
        if let Some(last) = self.slices.last() {
            debug_assert!(
                start >= last.2,
                "slice for proc {pid} overlaps the previous slice"
            );
        }
    }

    pub fn slices(&self) -> &[(Pid, Ticks, Ticks)] {
        &self.slices
    }

    /// Resolve pids back to caller-facing process ids. `ids` is indexed by
    /// `Pid`, i.e. it is the input order of the process set.
    pub fn into_intervals(self, ids: &[String]) -> Vec<ExecutionInterval> {
        self.slices
            .into_iter()
            .map(|(pid, start, end)| ExecutionInterval {
                process_id: ids[pid].clone(),
                start,
                end,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_slices_distinct() {
        let mut timeline = TimelineBuilder::new();
        timeline.record(0, 0, 2);
        timeline.record(0, 2, 6);
        assert_eq!(timeline.slices(), &[(0, 0, 2), (0, 2, 6)]);
    }

    #[test]
    fn extend_coalesces_contiguous_same_proc() {
        let mut timeline = TimelineBuilder::new();
        timeline.extend(0, 0, 1);
        timeline.extend(0, 1, 2);
        timeline.extend(1, 2, 3);
        timeline.extend(0, 3, 4);
        assert_eq!(timeline.slices(), &[(0, 0, 2), (1, 2, 3), (0, 3, 4)]);
    }

    #[test]
    fn extend_does_not_bridge_idle_gaps() {
        let mut timeline = TimelineBuilder::new();
        timeline.extend(0, 0, 1);
        timeline.extend(0, 3, 4);
        assert_eq!(timeline.slices(), &[(0, 0, 1), (0, 3, 4)]);
    }

    #[test]
    fn intervals_carry_process_ids() {
        let mut timeline = TimelineBuilder::new();
        timeline.record(1, 0, 2);
        timeline.record(0, 2, 3);

        let ids = vec!["A".to_string(), "B".to_string()];
        let intervals = timeline.into_intervals(&ids);
        assert_eq!(
            intervals,
            vec![
                ExecutionInterval {
                    process_id: "B".into(),
                    start: 0,
                    end: 2,
                },
                ExecutionInterval {
                    process_id: "A".into(),
                    start: 2,
                    end: 3,
                },
            ]
        );
    }
}
