//! Run entry point and shared per-run state.
//!
//! [`simulate`] is the single operation the core exposes: it takes a
//! validated workload and exactly one discipline, builds a fresh arena of
//! process records, drives the chosen dispatch loop, and returns the
//! per-process metrics (in the original input order) together with the
//! execution trace. Because the arena is rebuilt on every call, a run can
//! never observe another run's mutated state.

use tracing::{debug, info};

use crate::error::SimError;
use crate::mlq;
use crate::process::{ProcRecord, ProcessMetrics, ProcessSpec};
use crate::single;
use crate::trace::Trace;
use crate::types::Tick;
use crate::workload::Workload;

/// The scheduling discipline to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    SjfNonPreemptive,
    /// Priority, non-preemptive.
    PriorityNonPreemptive,
    /// Round-Robin with the given time quantum.
    RoundRobin { quantum: Tick },
    /// Shortest-Remaining-Time-First (preemptive SJF).
    Srtf,
    /// Priority, preemptive.
    PriorityPreemptive,
    /// Three-level multi-level queue (RR / priority / FCFS).
    MultiLevelQueue,
}

impl Discipline {
    /// Human-readable name, used by the reporting adapter.
    pub fn label(&self) -> &'static str {
        match self {
            Discipline::Fcfs => "FCFS",
            Discipline::SjfNonPreemptive => "SJF (non-preemptive)",
            Discipline::PriorityNonPreemptive => "Priority (non-preemptive)",
            Discipline::RoundRobin { .. } => "Round Robin",
            Discipline::Srtf => "SRTF",
            Discipline::PriorityPreemptive => "Priority (preemptive)",
            Discipline::MultiLevelQueue => "Multi-Level Queue",
        }
    }

    fn validate(&self) -> Result<(), SimError> {
        match self {
            Discipline::RoundRobin { quantum: 0 } => Err(SimError::ZeroQuantum),
            _ => Ok(()),
        }
    }
}

/// The outcome of one simulation run.
#[derive(Debug, Clone)]
pub struct SimResult {
    /// Label of the discipline that produced this result.
    pub discipline: &'static str,
    /// Per-process metrics, in the original input order.
    pub metrics: Vec<ProcessMetrics>,
    /// Chronological record of every dispatch and idle period.
    pub trace: Trace,
}

/// Run one discipline over the workload.
///
/// Every process in the result has its completion, turnaround, and
/// waiting time populated. The workload itself is untouched; rerunning
/// with another discipline needs no reset step.
pub fn simulate(workload: &Workload, discipline: Discipline) -> Result<SimResult, SimError> {
    discipline.validate()?;
    let mut run = Run::new(workload);
    info!(
        discipline = discipline.label(),
        processes = run.procs.len(),
        "starting run"
    );

    match discipline {
        Discipline::Fcfs => single::fcfs(&mut run),
        Discipline::SjfNonPreemptive => single::sjf_nonpreemptive(&mut run)?,
        Discipline::PriorityNonPreemptive => single::priority_nonpreemptive(&mut run)?,
        Discipline::RoundRobin { quantum } => single::round_robin(&mut run, quantum)?,
        Discipline::Srtf => single::srtf(&mut run),
        Discipline::PriorityPreemptive => single::priority_preemptive(&mut run),
        Discipline::MultiLevelQueue => mlq::multi_level_queue(&mut run)?,
    }

    let at = run.now;
    let metrics = run
        .procs
        .iter()
        .map(|rec| rec.metrics().ok_or(SimError::ReadyQueueStalled { at }))
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        discipline = discipline.label(),
        makespan = run.trace.makespan(),
        busy = run.trace.busy_time(),
        idle = run.trace.idle_time(),
        "run complete"
    );

    Ok(SimResult {
        discipline: discipline.label(),
        metrics,
        trace: run.trace,
    })
}

/// Stable sort by arrival time ascending.
///
/// Companion operation for collaborators that want to present the set in
/// arrival order; the engine itself derives its own internal order and
/// does not require pre-sorted input.
pub fn sort_by_arrival(processes: &mut [ProcessSpec]) {
    processes.sort_by_key(|p| p.arrival);
}

/// Mutable state for one run: the record arena, the trace, and the clock.
///
/// Dispatch loops address records exclusively by arena index.
pub(crate) struct Run {
    pub procs: Vec<ProcRecord>,
    pub trace: Trace,
    pub now: Tick,
}

impl Run {
    fn new(workload: &Workload) -> Self {
        Run {
            procs: workload.processes().iter().map(ProcRecord::new).collect(),
            trace: Trace::new(),
            now: 0,
        }
    }

    /// Arena indices sorted by arrival ascending, pid ascending. This is
    /// the admission order every dispatch loop walks.
    pub fn arrival_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.procs.len()).collect();
        order.sort_by_key(|&i| (self.procs[i].spec.arrival, self.procs[i].spec.pid));
        order
    }

    /// Execute `ticks` of the process at `idx`, advancing the clock and
    /// recording one dispatch segment.
    pub fn execute(&mut self, idx: usize, ticks: Tick) {
        debug_assert!(ticks > 0 && ticks <= self.procs[idx].remaining);
        let start = self.now;
        self.now += ticks;
        let rec = &mut self.procs[idx];
        rec.remaining -= ticks;
        self.trace.record_run(rec.spec.pid, start, self.now);
    }

    /// Mark the process at `idx` complete at the current tick.
    pub fn complete(&mut self, idx: usize) {
        let rec = &mut self.procs[idx];
        debug_assert!(rec.remaining == 0 && rec.completion.is_none());
        rec.completion = Some(self.now);
        debug!(pid = %rec.spec.pid, at = self.now, "completed");
    }

    /// Idle the CPU forward to tick `t`.
    pub fn idle_until(&mut self, t: Tick) {
        debug_assert!(t > self.now);
        self.trace.record_idle(self.now, t);
        self.now = t;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(Discipline::Fcfs.label(), "FCFS");
        assert_eq!(Discipline::RoundRobin { quantum: 2 }.label(), "Round Robin");
    }

    #[test]
    fn zero_quantum_rejected_before_the_run_starts() {
        let workload = Workload::new(vec![ProcessSpec::new(1, 0, 3)]).unwrap();
        let err = simulate(&workload, Discipline::RoundRobin { quantum: 0 }).unwrap_err();
        assert!(matches!(err, SimError::ZeroQuantum));
    }

    #[test]
    fn sort_by_arrival_is_stable() {
        let mut specs = vec![
            ProcessSpec::new(3, 5, 1),
            ProcessSpec::new(1, 0, 1),
            ProcessSpec::new(2, 5, 1),
        ];
        sort_by_arrival(&mut specs);
        let pids: Vec<u32> = specs.iter().map(|p| p.pid.0).collect();
        // Equal arrivals keep their relative input order.
        assert_eq!(pids, vec![1, 3, 2]);
    }
}
