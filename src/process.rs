//! Process model: immutable input descriptors and per-run records.
//!
//! A [`ProcessSpec`] describes a process before any simulation runs and is
//! never mutated by the engine. Each run builds its own arena of
//! [`ProcRecord`]s from the specs, so no two runs can ever observe each
//! other's mutable state. The per-process results come back as
//! [`ProcessMetrics`], one per input spec, in the original input order.

use serde::Deserialize;

use crate::types::{Pid, QueueClass, Tick};

/// Immutable description of a process: everything the external
/// collaborator knows about it before the simulation runs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProcessSpec {
    /// Unique identifier; final tie-break in every ordering policy.
    pub pid: Pid,
    /// Tick at which the process becomes eligible to run.
    pub arrival: Tick,
    /// Total CPU ticks the process needs. Must be > 0.
    pub burst: Tick,
    /// Scheduling priority; lower value = more urgent.
    #[serde(default)]
    pub priority: i32,
    /// Queue class, consulted only by the multi-level queue discipline.
    #[serde(default)]
    pub class: QueueClass,
}

impl ProcessSpec {
    /// Create a spec with default priority (0) and class (`Batch`).
    pub fn new(pid: u32, arrival: Tick, burst: Tick) -> Self {
        ProcessSpec {
            pid: Pid(pid),
            arrival,
            burst,
            priority: 0,
            class: QueueClass::default(),
        }
    }

    /// Set the scheduling priority (lower = more urgent).
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Set the queue class for the multi-level queue discipline.
    pub fn class(mut self, class: QueueClass) -> Self {
        self.class = class;
        self
    }
}

/// Timing metrics computed for one process by a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessMetrics {
    pub pid: Pid,
    pub arrival: Tick,
    pub burst: Tick,
    pub priority: i32,
    pub class: QueueClass,
    /// Tick at which the process finished its last unit of execution.
    pub completion: Tick,
    /// `completion - arrival`.
    pub turnaround: Tick,
    /// `turnaround - burst`: ticks spent ready but not running.
    pub waiting: Tick,
}

/// A process record inside one run's arena.
///
/// Queues reference records by arena index, never by pointer, so queue
/// membership survives any reorganization of the backing storage.
#[derive(Debug, Clone)]
pub(crate) struct ProcRecord {
    pub spec: ProcessSpec,
    /// Ticks of execution still owed. Starts at `spec.burst`, reaches
    /// exactly 0 at completion, never goes negative (enforced by the
    /// unsigned type and the `min` in every dispatch site).
    pub remaining: Tick,
    /// Set exactly once, when `remaining` hits 0.
    pub completion: Option<Tick>,
}

impl ProcRecord {
    pub fn new(spec: &ProcessSpec) -> Self {
        ProcRecord {
            spec: spec.clone(),
            remaining: spec.burst,
            completion: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    pub fn arrived(&self, now: Tick) -> bool {
        self.spec.arrival <= now
    }

    /// Extract final metrics, or `None` if the record never completed.
    pub fn metrics(&self) -> Option<ProcessMetrics> {
        let completion = self.completion?;
        let turnaround = completion - self.spec.arrival;
        Some(ProcessMetrics {
            pid: self.spec.pid,
            arrival: self.spec.arrival,
            burst: self.spec.burst,
            priority: self.spec.priority,
            class: self.spec.class,
            completion,
            turnaround,
            waiting: turnaround - self.spec.burst,
        })
    }
}
