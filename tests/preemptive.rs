//! Tests for the preemptive disciplines: SRTF and preemptive Priority.
//! Both re-rank the ready set at every tick, so at any instant the
//! running process must be the best-ranked arrived, unfinished one.

use schedsim::{simulate, Discipline, Pid, ProcessSpec, SimResult, Workload};

mod common;

fn workload(specs: Vec<ProcessSpec>) -> Workload {
    Workload::new(specs).unwrap()
}

/// Ticks of execution `pid` received strictly before tick `t`.
fn executed_before(result: &SimResult, pid: Pid, t: u64) -> u64 {
    result
        .trace
        .slices_of(pid)
        .iter()
        .map(|&(start, end)| end.min(t).saturating_sub(start))
        .sum()
}

#[test]
fn srtf_preempts_for_shorter_job() {
    common::setup_test();
    // {P1(at=0,bt=4), P2(at=1,bt=1)}: P2's burst 1 beats P1's remaining 3.
    let result = simulate(
        &workload(vec![ProcessSpec::new(1, 0, 4), ProcessSpec::new(2, 1, 1)]),
        Discipline::Srtf,
    )
    .unwrap();
    assert_eq!(result.trace.slices_of(Pid(1)), vec![(0, 1), (2, 5)]);
    assert_eq!(result.trace.slices_of(Pid(2)), vec![(1, 2)]);
    assert_eq!(result.metrics[0].completion, 5);
    assert_eq!(result.metrics[1].completion, 2);
    assert_eq!(result.metrics[0].waiting, 1);
    assert_eq!(result.metrics[1].waiting, 0);
}

#[test]
fn srtf_textbook_four_process_schedule() {
    common::setup_test();
    let result = simulate(
        &workload(vec![
            ProcessSpec::new(1, 0, 8),
            ProcessSpec::new(2, 1, 4),
            ProcessSpec::new(3, 2, 9),
            ProcessSpec::new(4, 3, 5),
        ]),
        Discipline::Srtf,
    )
    .unwrap();
    assert_eq!(result.trace.slices_of(Pid(1)), vec![(0, 1), (10, 17)]);
    assert_eq!(result.trace.slices_of(Pid(2)), vec![(1, 5)]);
    assert_eq!(result.trace.slices_of(Pid(4)), vec![(5, 10)]);
    assert_eq!(result.trace.slices_of(Pid(3)), vec![(17, 26)]);
    let waits: Vec<u64> = result.metrics.iter().map(|m| m.waiting).collect();
    assert_eq!(waits, vec![9, 0, 15, 2]);
}

#[test]
fn srtf_running_process_is_always_best_ranked() {
    common::setup_test();
    let set = workload(vec![
        ProcessSpec::new(1, 0, 6),
        ProcessSpec::new(2, 2, 3),
        ProcessSpec::new(3, 4, 1),
        ProcessSpec::new(4, 4, 7),
    ]);
    let result = simulate(&set, Discipline::Srtf).unwrap();

    for t in 0..result.trace.makespan() {
        let running = result.trace.running_at(t).expect("CPU idle mid-run");
        // Reconstruct each candidate's remaining work at tick t and rank
        // by (remaining, arrival, pid); the running process must win.
        let best = set
            .processes()
            .iter()
            .filter(|p| p.arrival <= t)
            .filter_map(|p| {
                let remaining = p.burst - executed_before(&result, p.pid, t);
                (remaining > 0).then_some((remaining, p.arrival, p.pid))
            })
            .min()
            .expect("no candidate but CPU busy");
        assert_eq!(running, best.2, "at tick {t}");
    }
}

#[test]
fn priority_preemptive_interrupts_for_more_urgent_arrival() {
    common::setup_test();
    let result = simulate(
        &workload(vec![
            ProcessSpec::new(1, 0, 4).priority(2),
            ProcessSpec::new(2, 1, 3).priority(1),
            ProcessSpec::new(3, 3, 2).priority(3),
        ]),
        Discipline::PriorityPreemptive,
    )
    .unwrap();
    // P2 preempts P1 at t=1, unlike the non-preemptive variant.
    assert_eq!(result.trace.slices_of(Pid(1)), vec![(0, 1), (4, 7)]);
    assert_eq!(result.trace.slices_of(Pid(2)), vec![(1, 4)]);
    assert_eq!(result.trace.slices_of(Pid(3)), vec![(7, 9)]);
    let waits: Vec<u64> = result.metrics.iter().map(|m| m.waiting).collect();
    assert_eq!(waits, vec![3, 0, 4]);
}

#[test]
fn priority_preemptive_tie_broken_by_remaining_time() {
    common::setup_test();
    let result = simulate(
        &workload(vec![
            ProcessSpec::new(1, 0, 5).priority(1),
            ProcessSpec::new(2, 2, 2).priority(1),
        ]),
        Discipline::PriorityPreemptive,
    )
    .unwrap();
    // At t=2 both have priority 1; P2's remaining 2 beats P1's remaining 3.
    assert_eq!(result.trace.slices_of(Pid(1)), vec![(0, 2), (4, 7)]);
    assert_eq!(result.trace.slices_of(Pid(2)), vec![(2, 4)]);
}

#[test]
fn preemptive_idle_gap_is_one_coalesced_segment() {
    common::setup_test();
    let result = simulate(&workload(vec![ProcessSpec::new(1, 3, 2)]), Discipline::Srtf).unwrap();
    // The unit-step loop idles tick by tick; the trace merges the gap.
    assert_eq!(result.trace.segments().len(), 2);
    assert_eq!(result.trace.idle_time(), 3);
    assert_eq!(result.metrics[0].completion, 5);
}
