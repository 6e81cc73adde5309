use anyhow::Result;
use cpusched::{run_fifo, run_mlfq, run_rr, run_sjf, run_srtf, ProcessSpec, RunResult, Ticks};
use rand::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let specs = bernoulli_specs(40, 0.25, 0.4, 2, 9, 0);

    report("FIFO", run_fifo(&specs)?);
    report("SJF", run_sjf(&specs)?);
    report("SRTF", run_srtf(&specs)?);
    report("Round Robin, quantum 3", run_rr(&specs, 3)?);
    report("MLFQ, quanta 2/4/8", run_mlfq(&specs, &[2, 4, 8])?);

    Ok(())
}

/// Coin-flip workload: each tick has a `p_arrival` chance of producing a
/// process, short burst with probability `p_short`, long otherwise.
fn bernoulli_specs(
    ticks: Ticks,
    p_arrival: f64,
    p_short: f64,
    short_ticks: Ticks,
    long_ticks: Ticks,
    seed: u64,
) -> Vec<ProcessSpec> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut specs = Vec::new();

    for t in 0..ticks {
        if rng.random::<f64>() < p_arrival {
            let burst = if rng.random::<f64>() < p_short {
                short_ticks
            } else {
                long_ticks
            };
            specs.push(ProcessSpec::new(format!("P{}", specs.len()), t, burst));
        }
    }

    if specs.is_empty() {
        specs.push(ProcessSpec::new("P0", 0, long_ticks));
    }

    specs
}

fn report(title: &str, result: RunResult) {
    println!("=== {title} ===");

    let strip = result
        .timeline
        .iter()
        .map(|iv| format!("{}[{}-{})", iv.process_id, iv.start, iv.end))
        .collect::<Vec<_>>()
        .join(" ");
    println!("{strip}");

    println!(
        "{:<6} {:>8} {:>6} {:>8} {:>11}",
        "pid", "arrival", "burst", "waiting", "turnaround"
    );
    for m in &result.metrics {
        println!(
            "{:<6} {:>8} {:>6} {:>8} {:>11}",
            m.process_id, m.arrival, m.burst, m.waiting, m.turnaround
        );
    }
    println!(
        "avg waiting: {:.2}  avg turnaround: {:.2}\n",
        result.avg_waiting, result.avg_turnaround
    );
}
