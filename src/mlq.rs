//! Three-level multi-level queue scheduler.
//!
//! Strict priority across fixed queue classes, SYSTEM > INTERACTIVE >
//! BATCH. SYSTEM runs round-robin with a fixed quantum; INTERACTIVE picks
//! the single best process by the highest-priority-first ranking and runs
//! it to completion; BATCH is plain FCFS. Each iteration admits every
//! arrived process into its class queue, then dispatches once from the
//! first non-empty queue. Because SYSTEM is always serviced first when
//! non-empty, the lower queues can be starved indefinitely; that is an
//! accepted property of strict-priority MLQ.

use std::collections::VecDeque;

use tracing::debug;

use crate::engine::Run;
use crate::error::SimError;
use crate::policy::highest_priority_first;
use crate::single::best_of;
use crate::types::{QueueClass, Tick};

/// Fixed quantum for the SYSTEM queue's round-robin.
pub const SYSTEM_QUANTUM: Tick = 2;

pub(crate) fn multi_level_queue(run: &mut Run) -> Result<(), SimError> {
    let order = run.arrival_order();
    let total = order.len();
    let mut next = 0;
    let mut system: VecDeque<usize> = VecDeque::new();
    let mut interactive: Vec<usize> = Vec::new();
    let mut batch: VecDeque<usize> = VecDeque::new();
    let mut done = 0;

    while done < total {
        admit(run, &order, &mut next, &mut system, &mut interactive, &mut batch);

        if let Some(idx) = system.pop_front() {
            // SYSTEM: one round-robin slice.
            let slice = run.procs[idx].remaining.min(SYSTEM_QUANTUM);
            run.execute(idx, slice);
            // Same rule as single-queue RR: arrivals during the slice are
            // queued ahead of the preempted process.
            admit(run, &order, &mut next, &mut system, &mut interactive, &mut batch);
            if run.procs[idx].remaining > 0 {
                system.push_back(idx);
            } else {
                run.complete(idx);
                done += 1;
            }
        } else if !interactive.is_empty() {
            // INTERACTIVE: one dispatch per cycle, best priority wins,
            // full non-preemptive run of that single process.
            let idx = interactive.remove(best_of(run, &interactive, highest_priority_first));
            debug!(pid = %run.procs[idx].spec.pid, at = run.now, "interactive dispatch");
            let burst = run.procs[idx].remaining;
            run.execute(idx, burst);
            run.complete(idx);
            done += 1;
        } else if let Some(idx) = batch.pop_front() {
            // BATCH: FCFS run-to-completion.
            let burst = run.procs[idx].remaining;
            run.execute(idx, burst);
            run.complete(idx);
            done += 1;
        } else {
            // All three queues empty: skip to the next arrival.
            let Some(&pending) = order.get(next) else {
                return Err(SimError::ReadyQueueStalled { at: run.now });
            };
            run.idle_until(run.procs[pending].spec.arrival);
        }
    }
    Ok(())
}

/// Admit every arrived, not-yet-admitted process into its class queue.
///
/// Walks the arrival order, so within each queue processes line up by
/// arrival (pid on ties).
fn admit(
    run: &Run,
    order: &[usize],
    next: &mut usize,
    system: &mut VecDeque<usize>,
    interactive: &mut Vec<usize>,
    batch: &mut VecDeque<usize>,
) {
    while *next < order.len() && run.procs[order[*next]].arrived(run.now) {
        let idx = order[*next];
        match run.procs[idx].spec.class {
            QueueClass::System => system.push_back(idx),
            QueueClass::Interactive => interactive.push(idx),
            QueueClass::Batch => batch.push_back(idx),
        }
        *next += 1;
    }
}
