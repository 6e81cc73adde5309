use cpusched::{run_fifo, run_mlfq, run_rr, run_sjf, run_srtf, ProcessSpec, RunResult};
use rand::prelude::*;
use std::collections::HashMap;

fn run_all(specs: &[ProcessSpec]) -> Vec<(&'static str, RunResult)> {
    vec![
        ("fifo", run_fifo(specs).unwrap()),
        ("sjf", run_sjf(specs).unwrap()),
        ("srtf", run_srtf(specs).unwrap()),
        ("rr q=1", run_rr(specs, 1).unwrap()),
        ("rr q=3", run_rr(specs, 3).unwrap()),
        ("mlfq 2/4", run_mlfq(specs, &[2, 4]).unwrap()),
        ("mlfq 1/2/8", run_mlfq(specs, &[1, 2, 8]).unwrap()),
    ]
}

fn assert_invariants(name: &str, specs: &[ProcessSpec], result: &RunResult) {
    // Timeline sorted by start, pairwise non-overlapping, no empty intervals.
    for iv in &result.timeline {
        assert!(iv.end > iv.start, "{name}: empty interval for {}", iv.process_id);
    }
    for pair in result.timeline.windows(2) {
        assert!(
            pair[0].end <= pair[1].start,
            "{name}: intervals overlap or are unsorted"
        );
    }

    // Each process is covered exactly once: per-process interval lengths sum
    // to its burst.
    let mut covered: HashMap<&str, u64> = HashMap::new();
    for iv in &result.timeline {
        *covered.entry(iv.process_id.as_str()).or_default() += iv.end - iv.start;
    }
    assert_eq!(covered.len(), specs.len(), "{name}: timeline misses a process");
    for spec in specs {
        assert_eq!(
            covered[spec.id.as_str()],
            spec.burst,
            "{name}: coverage mismatch for {}",
            spec.id
        );
    }

    // Metrics are in input order and satisfy the timing identities.
    assert_eq!(result.metrics.len(), specs.len());
    for (spec, m) in specs.iter().zip(&result.metrics) {
        assert_eq!(m.process_id, spec.id, "{name}: metrics out of input order");
        assert_eq!(m.arrival, spec.arrival);
        assert_eq!(m.burst, spec.burst);
        assert_eq!(
            m.turnaround,
            m.waiting + m.burst,
            "{name}: turnaround identity broken for {}",
            spec.id
        );

        // Completion read off the timeline must agree with the recorded
        // metrics: the process's last interval ends at arrival + turnaround.
        let last_end = result
            .timeline
            .iter()
            .filter(|iv| iv.process_id == spec.id)
            .map(|iv| iv.end)
            .max()
            .unwrap();
        assert_eq!(
            last_end,
            spec.arrival + m.turnaround,
            "{name}: timeline and metrics disagree for {}",
            spec.id
        );

        // No interval may start before the process arrives.
        let first_start = result
            .timeline
            .iter()
            .filter(|iv| iv.process_id == spec.id)
            .map(|iv| iv.start)
            .min()
            .unwrap();
        assert!(
            first_start >= spec.arrival,
            "{name}: {} ran before it arrived",
            spec.id
        );
    }

    // Averages are the arithmetic means of the metric columns.
    let n = specs.len() as f64;
    let wait_mean = result.metrics.iter().map(|m| m.waiting as f64).sum::<f64>() / n;
    let turn_mean = result
        .metrics
        .iter()
        .map(|m| m.turnaround as f64)
        .sum::<f64>()
        / n;
    assert!((result.avg_waiting - wait_mean).abs() < 1e-9, "{name}: avg waiting");
    assert!(
        (result.avg_turnaround - turn_mean).abs() < 1e-9,
        "{name}: avg turnaround"
    );
}

fn random_specs(seed: u64, count: usize) -> Vec<ProcessSpec> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            ProcessSpec::new(
                format!("P{i}"),
                rng.random_range(0..20),
                rng.random_range(1..12),
            )
        })
        .collect()
}

#[test]
fn invariants_hold_on_a_fixed_workload() {
    let specs = vec![
        ProcessSpec::new("A", 0, 7),
        ProcessSpec::new("B", 2, 4),
        ProcessSpec::new("C", 4, 1),
        ProcessSpec::new("D", 5, 4),
        ProcessSpec::new("E", 30, 3),
    ];
    for (name, result) in run_all(&specs) {
        assert_invariants(name, &specs, &result);
    }
}

#[test]
fn invariants_hold_on_seeded_random_workloads() {
    for seed in [0, 7, 1234] {
        let specs = random_specs(seed, 12);
        for (name, result) in run_all(&specs) {
            assert_invariants(name, &specs, &result);
        }
    }
}

#[test]
fn invariants_hold_for_a_single_process() {
    let specs = vec![ProcessSpec::new("only", 3, 9)];
    for (name, result) in run_all(&specs) {
        assert_invariants(name, &specs, &result);
        assert_eq!(result.metrics[0].waiting, 0, "{name}");
    }
}

#[test]
fn repeated_runs_are_identical() {
    let specs = random_specs(99, 10);
    let first = run_all(&specs);
    let second = run_all(&specs);
    for ((name, a), (_, b)) in first.iter().zip(&second) {
        assert_eq!(a, b, "{name}: nondeterministic result");
    }
}

#[test]
fn input_specs_are_not_mutated_across_runs() {
    let specs = random_specs(5, 8);
    let snapshot = specs.clone();
    let _ = run_all(&specs);
    assert_eq!(specs, snapshot);
}
