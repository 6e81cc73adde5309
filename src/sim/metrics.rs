use super::process::ProcessSpec;
use crate::core::state::{SimCtx, Ticks};
use crate::core::timeline::ExecutionInterval;
use average::Estimate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    pub process_id: String,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub waiting: Ticks,
    pub turnaround: Ticks,
}

/// Everything a run produces: the execution timeline plus per-process and
/// batch-average timing metrics. Metrics are in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub timeline: Vec<ExecutionInterval>,
    pub metrics: Vec<ProcessMetrics>,
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
}

/// Metrics come strictly from the completion ticks the driver recorded, not
/// from re-deriving the timeline.
pub(crate) fn aggregate(
    specs: &[ProcessSpec],
    ctx: &SimCtx,
    timeline: Vec<ExecutionInterval>,
) -> RunResult {
    let metrics: Vec<ProcessMetrics> = specs
        .iter()
        .enumerate()
        .map(|(pid, spec)| {
            let completion = ctx
                .proc(pid)
                .completion
                .expect("run finished with an incomplete process");
            let turnaround = completion - spec.arrival;
            let waiting = turnaround - spec.burst;
            ProcessMetrics {
                process_id: spec.id.clone(),
                arrival: spec.arrival,
                burst: spec.burst,
                waiting,
                turnaround,
            }
        })
        .collect();

    let avg_waiting = mean(metrics.iter().map(|m| m.waiting as f64));
    let avg_turnaround = mean(metrics.iter().map(|m| m.turnaround as f64));

    RunResult {
        timeline,
        metrics,
        avg_waiting,
        avg_turnaround,
    }
}

fn mean(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<average::Mean>().estimate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turnaround_and_waiting_from_completion_ticks() {
        let specs = vec![
            ProcessSpec::new("A", 0, 5),
            ProcessSpec::new("B", 1, 3),
        ];
        let mut ctx = SimCtx::new();
        for spec in &specs {
            ctx.create_proc(spec.arrival, spec.burst);
        }
        ctx.proc_mut(0).remaining = 0;
        ctx.proc_mut(1).remaining = 0;
        ctx.advance_time(5);
        ctx.mark_completed(0);
        ctx.advance_time(3);
        ctx.mark_completed(1);

        let result = aggregate(&specs, &ctx, Vec::new());
        assert_eq!(result.metrics[0].turnaround, 5);
        assert_eq!(result.metrics[0].waiting, 0);
        assert_eq!(result.metrics[1].turnaround, 7);
        assert_eq!(result.metrics[1].waiting, 4);
        assert_eq!(result.avg_waiting, 2.0);
        assert_eq!(result.avg_turnaround, 6.0);
    }
}
