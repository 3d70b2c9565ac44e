//! Ordering policies: the total orders used to rank the ready set.
//!
//! Each policy is a pure comparison over two process records. Every chain
//! ends on the pid so the order is total and every selection is
//! deterministic; ties can never fall through to insertion order.

use std::cmp::Ordering;

use crate::process::ProcRecord;

/// Comparison function used to rank ready processes.
pub(crate) type RankFn = fn(&ProcRecord, &ProcRecord) -> Ordering;

/// SJF (non-preemptive): burst ascending, then arrival, then pid.
pub(crate) fn shortest_burst_first(a: &ProcRecord, b: &ProcRecord) -> Ordering {
    a.spec
        .burst
        .cmp(&b.spec.burst)
        .then(a.spec.arrival.cmp(&b.spec.arrival))
        .then(a.spec.pid.cmp(&b.spec.pid))
}

/// Priority (non-preemptive): priority ascending (lower = more urgent),
/// then arrival, then pid.
pub(crate) fn highest_priority_first(a: &ProcRecord, b: &ProcRecord) -> Ordering {
    a.spec
        .priority
        .cmp(&b.spec.priority)
        .then(a.spec.arrival.cmp(&b.spec.arrival))
        .then(a.spec.pid.cmp(&b.spec.pid))
}

/// SRTF: remaining ticks ascending, then arrival, then pid.
pub(crate) fn shortest_remaining_first(a: &ProcRecord, b: &ProcRecord) -> Ordering {
    a.remaining
        .cmp(&b.remaining)
        .then(a.spec.arrival.cmp(&b.spec.arrival))
        .then(a.spec.pid.cmp(&b.spec.pid))
}

/// Preemptive priority: priority ascending, then remaining ticks, then
/// arrival, then pid.
pub(crate) fn preemptive_priority(a: &ProcRecord, b: &ProcRecord) -> Ordering {
    a.spec
        .priority
        .cmp(&b.spec.priority)
        .then(a.remaining.cmp(&b.remaining))
        .then(a.spec.arrival.cmp(&b.spec.arrival))
        .then(a.spec.pid.cmp(&b.spec.pid))
}
