//! The six single-queue dispatch loops.
//!
//! All six operate over the run's arena by index and share its clock,
//! trace, and admission order. The non-preemptive loops (FCFS, SJF,
//! Priority) run each selected process to completion in one segment. The
//! preemptive loops (SRTF, preemptive Priority) advance the clock one
//! tick at a time and re-rank the ready set at every tick, which is what
//! makes preemption-at-every-instant correct; the O(total burst × n)
//! cost is fine because burst magnitudes are simulation inputs, not load.

use std::cmp::Ordering;
use std::collections::VecDeque;

use tracing::debug;

use crate::engine::Run;
use crate::error::SimError;
use crate::policy::{
    self, highest_priority_first, preemptive_priority, shortest_burst_first,
    shortest_remaining_first,
};
use crate::types::Tick;

/// First-Come-First-Served: establish arrival order (pid breaks ties) and
/// run everything to completion in that order, idling across gaps.
pub(crate) fn fcfs(run: &mut Run) {
    for idx in run.arrival_order() {
        let arrival = run.procs[idx].spec.arrival;
        if run.now < arrival {
            run.idle_until(arrival);
        }
        let burst = run.procs[idx].remaining;
        run.execute(idx, burst);
        run.complete(idx);
    }
}

/// Shortest-Job-First, non-preemptive.
pub(crate) fn sjf_nonpreemptive(run: &mut Run) -> Result<(), SimError> {
    ranked_to_completion(run, shortest_burst_first)
}

/// Priority, non-preemptive. Identical control structure to SJF; only the
/// ranking differs. A selected process is never interrupted by later,
/// higher-priority arrivals.
pub(crate) fn priority_nonpreemptive(run: &mut Run) -> Result<(), SimError> {
    ranked_to_completion(run, highest_priority_first)
}

/// Shared loop for the ranked non-preemptive disciplines: admit arrivals,
/// pick the best-ranked ready process, run it to completion.
fn ranked_to_completion(run: &mut Run, rank: policy::RankFn) -> Result<(), SimError> {
    let order = run.arrival_order();
    let total = order.len();
    let mut next = 0;
    let mut ready: Vec<usize> = Vec::new();
    let mut done = 0;

    while done < total {
        while next < total && run.procs[order[next]].arrived(run.now) {
            ready.push(order[next]);
            next += 1;
        }
        if ready.is_empty() {
            // CPU idle: skip to the next admission. Given validated input
            // there is always one while work remains.
            let Some(&pending) = order.get(next) else {
                return Err(SimError::ReadyQueueStalled { at: run.now });
            };
            run.idle_until(run.procs[pending].spec.arrival);
            continue;
        }
        let idx = ready.remove(best_of(run, &ready, rank));
        let burst = run.procs[idx].remaining;
        run.execute(idx, burst);
        run.complete(idx);
        done += 1;
    }
    Ok(())
}

/// Round-Robin with the given quantum.
///
/// The admission cursor over the arrival order doubles as the "enqueued
/// at most once" flag. Processes that arrive during a slice are enqueued
/// before the preempted process is put back on the tail.
pub(crate) fn round_robin(run: &mut Run, quantum: Tick) -> Result<(), SimError> {
    let order = run.arrival_order();
    let total = order.len();
    let mut next = 0;
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut done = 0;

    while done < total {
        while next < total && run.procs[order[next]].arrived(run.now) {
            queue.push_back(order[next]);
            next += 1;
        }
        let Some(idx) = queue.pop_front() else {
            let Some(&pending) = order.get(next) else {
                return Err(SimError::ReadyQueueStalled { at: run.now });
            };
            run.idle_until(run.procs[pending].spec.arrival);
            continue;
        };

        let slice = run.procs[idx].remaining.min(quantum);
        run.execute(idx, slice);

        // New arrivals go ahead of the just-preempted process.
        while next < total && run.procs[order[next]].arrived(run.now) {
            queue.push_back(order[next]);
            next += 1;
        }
        if run.procs[idx].remaining > 0 {
            debug!(pid = %run.procs[idx].spec.pid, at = run.now, "quantum expired, requeued");
            queue.push_back(idx);
        } else {
            run.complete(idx);
            done += 1;
        }
    }
    Ok(())
}

/// Shortest-Remaining-Time-First: preemptive SJF over remaining ticks.
pub(crate) fn srtf(run: &mut Run) {
    unit_step(run, shortest_remaining_first);
}

/// Preemptive Priority: priority ranking re-evaluated every tick, with
/// remaining-time and arrival tie-breaks.
pub(crate) fn priority_preemptive(run: &mut Run) {
    unit_step(run, preemptive_priority);
}

/// Unit-time-step loop shared by the preemptive disciplines.
///
/// Each iteration scans all arrived, unfinished records, runs the
/// best-ranked one for exactly one tick, and starts a new trace segment
/// only when the chosen process differs from the previous tick's.
fn unit_step(run: &mut Run, rank: policy::RankFn) {
    let total = run.procs.len();
    let mut done = 0;
    // Open dispatch segment: (arena index, segment start).
    let mut current: Option<(usize, Tick)> = None;

    while done < total {
        let mut best: Option<usize> = None;
        for i in 0..total {
            let candidate = &run.procs[i];
            if candidate.is_complete() || !candidate.arrived(run.now) {
                continue;
            }
            best = match best {
                Some(b) if rank(candidate, &run.procs[b]) != Ordering::Less => Some(b),
                _ => Some(i),
            };
        }

        let Some(idx) = best else {
            run.idle_until(run.now + 1);
            continue;
        };

        match current {
            Some((open, start)) if open != idx => {
                let pid = run.procs[open].spec.pid;
                run.trace.record_run(pid, start, run.now);
                debug!(preempted = %pid, by = %run.procs[idx].spec.pid, at = run.now, "preemption");
                current = Some((idx, run.now));
            }
            None => current = Some((idx, run.now)),
            _ => {}
        }

        run.procs[idx].remaining -= 1;
        run.now += 1;

        if run.procs[idx].is_complete() {
            if let Some((_, start)) = current.take() {
                let pid = run.procs[idx].spec.pid;
                run.trace.record_run(pid, start, run.now);
            }
            run.complete(idx);
            done += 1;
        }
    }
}

/// Position of the best-ranked element of `ready`. First occurrence wins
/// on `Equal`, though the rank functions are total orders so equality
/// only happens for identical records.
pub(crate) fn best_of(run: &Run, ready: &[usize], rank: policy::RankFn) -> usize {
    let mut best = 0;
    for pos in 1..ready.len() {
        if rank(&run.procs[ready[pos]], &run.procs[ready[best]]) == Ordering::Less {
            best = pos;
        }
    }
    best
}
